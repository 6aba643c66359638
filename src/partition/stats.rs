/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Statistics from the theory of partition congruences.

use crate::{Partition, PartitionError, Result};

impl Partition {
    /// The largest part minus the number of parts.
    pub fn rank(&self) -> Result<i64>
    {Ok({
        let largest = self.defined_largest("rank")?;
        i64::from(largest) - self.number_of_parts() as i64
    })}

    /// The crank of Andrews and Garvan.
    ///
    /// Let `ω` be the number of ones in the partition.  If `ω == 0`, the crank
    /// is the largest part.  Otherwise, it is `μ - ω` where `μ` is the number
    /// of parts strictly larger than `ω`.
    pub fn crank(&self) -> Result<i64>
    {Ok({
        let largest = self.defined_largest("crank")?;
        let ones = self.multiplicity(1);
        match ones {
            0 => i64::from(largest),
            _ => {
                let larger = self.iter().filter(|&&p| p as usize > ones).count();
                larger as i64 - ones as i64
            },
        }
    })}

    /// The largest `k` such that at least `k` parts are `>= k`.
    ///
    /// Geometrically, the side length of the largest square that fits in
    /// the top left corner of the Ferrers diagram.
    pub fn durfee_rank(&self) -> Result<u32>
    {Ok({
        self.defined_largest("Durfee rank")?;
        // parts are sorted, so the k-th part (1-based) being >= k is enough
        self.iter()
            .enumerate()
            .take_while(|&(i, &p)| p as usize > i)
            .count() as u32
    })}

    fn defined_largest(&self, statistic: &'static str) -> Result<u32>
    {
        self.largest_part()
            .map_err(|_| PartitionError::UndefinedForEmpty { statistic })
    }
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    fn p(parts: &[u32]) -> Partition
    { Partition::new(parts.iter().cloned()).unwrap() }

    // brute force, straight from the definition
    fn durfee_by_search(q: &Partition) -> u32
    {
        let mut best = 0;
        for k in 1..=q.largest_part().unwrap() {
            if q.iter().filter(|&&p| p >= k).count() >= k as usize {
                best = k;
            }
        }
        best
    }

    #[test]
    fn self_conjugate_example() {
        let q = p(&[4, 3, 3, 1]);
        assert_eq!(q.rank(), Ok(0));
        assert_eq!(q.crank(), Ok(2));
        assert_eq!(q.durfee_rank(), Ok(3));
    }

    #[test]
    fn rank_can_be_negative() {
        assert_eq!(p(&[1, 1, 1]).rank(), Ok(-2));
        assert_eq!(p(&[5]).rank(), Ok(4));
    }

    #[test]
    fn crank_cases() {
        // no ones: the largest part
        assert_eq!(p(&[4, 2]).crank(), Ok(4));
        // all ones: nothing is larger than the number of ones
        assert_eq!(p(&[1, 1, 1]).crank(), Ok(-3));
        // one 1; parts 3 and 2 exceed it
        assert_eq!(p(&[3, 2, 1]).crank(), Ok(1));
    }

    #[test]
    fn durfee_matches_definition() {
        let cases: &[&[u32]] = &[
            &[1], &[5], &[1, 1, 1, 1], &[3, 3, 3], &[4, 4, 4, 4, 4],
            &[9, 2, 2, 1], &[6, 5, 4, 3, 2, 1], &[2, 2],
        ];
        for &parts in cases {
            let q = p(parts);
            assert_eq!(q.durfee_rank(), Ok(durfee_by_search(&q)), "{}", q);
        }
    }

    #[test]
    fn undefined_on_empty() {
        let e = Partition::empty();
        assert_eq!(e.rank(), Err(PartitionError::UndefinedForEmpty { statistic: "rank" }));
        assert_eq!(e.crank(), Err(PartitionError::UndefinedForEmpty { statistic: "crank" }));
        assert_eq!(e.durfee_rank(), Err(PartitionError::UndefinedForEmpty { statistic: "Durfee rank" }));
    }
}
