/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ferrers_partition::{Partition, PartitionError, Notation};
use pretty_assertions::assert_eq;

mod shared;
use self::shared::{partition, partitions_of, partitions_up_to};

#[test]
fn enumeration_sanity() {
    // p(n) for n = 1..=10
    let counts: Vec<_> = (1..=10).map(|n| partitions_of(n).len()).collect();
    assert_eq!(counts, vec![1, 2, 3, 5, 7, 11, 15, 22, 30, 42]);
}

#[test]
fn self_conjugate_example() {
    let p = partition(&[4, 3, 3, 1]);
    assert_eq!(p.weight(), 11);
    assert_eq!(p.number_of_parts(), 4);
    assert_eq!(p.rank(), Ok(0));
    assert_eq!(p.crank(), Ok(2));
    assert_eq!(p.durfee_rank(), Ok(3));
    assert!(!p.is_distinct());
    assert_eq!(p.conjugate(), p);
    assert!(p.is_self_conjugate());
}

#[test]
fn empty_partition() {
    let e = Partition::empty();
    assert!(e.rank().is_err());
    assert!(e.crank().is_err());
    assert!(e.durfee_rank().is_err());
    assert_eq!(e.largest_part(), Err(PartitionError::EmptyPartition { query: "largest part" }));
    assert_eq!(e.smallest_part(), Err(PartitionError::EmptyPartition { query: "smallest part" }));
    assert_eq!(e.weight(), 0);
    assert!(e.is_even());
    assert!(e.is_odd());
}

#[test]
fn part_wise_sum() {
    let s = ferrers_partition::sum(&partition(&[3, 1]), &partition(&[2, 2])).unwrap();
    assert_eq!(s, partition(&[5, 3]));

    match partition(&[3, 1]).sum(&partition(&[2])) {
        Err(PartitionError::IndexOutOfRange { index: 1, len: 1 }) => {},
        other => panic!("{:?}", other),
    }
}

#[test]
fn conjugate_is_an_involution() {
    for p in partitions_up_to(14) {
        let q = p.conjugate();
        assert_eq!(q.weight(), p.weight());
        assert_eq!(q.number_of_parts() as u32, p.largest_part().unwrap());
        assert_eq!(q.conjugate(), p);
    }
}

#[test]
fn insert_then_erase_restores() {
    for p in partitions_up_to(9) {
        for part in 1..=10 {
            let mut q = p.clone();
            q.insert(part).unwrap();
            assert!(q.contains(part));
            assert_eq!(q.weight(), p.weight() + u64::from(part));
            q.erase(part);
            assert_eq!(q, p);
        }
    }
}

#[test]
fn statistics_agree_with_conjugation() {
    for p in partitions_up_to(12) {
        // conjugation negates the rank and preserves the Durfee square
        assert_eq!(p.conjugate().rank().unwrap(), -p.rank().unwrap());
        assert_eq!(p.conjugate().durfee_rank().unwrap(), p.durfee_rank().unwrap());
    }
}

#[test]
fn parse_and_draw() {
    let p: Partition = "[1, 3, 2]".parse().unwrap();
    assert_eq!(p.to_string(), "[3, 2, 1]");
    assert_eq!(p.ferrers_diagram('*', Notation::English).to_string(), "***\n**\n*\n");
    assert_eq!(p.union(&p).to_vec(), vec![3, 3, 2, 2, 1, 1]);
}
