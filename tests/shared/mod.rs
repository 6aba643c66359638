/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Not every test binary uses every helper.
#![allow(dead_code)]

use ferrers_partition::{Part, Partition};

/// Every partition of `n`, each listed once.
pub fn partitions_of(n: u32) -> Vec<Partition>
{
    let mut out = vec![];
    let mut stack = vec![];
    push_partitions(n, n, &mut stack, &mut out);
    out
}

// parts of `stack` are non-increasing, and the next part may be at most `max`
fn push_partitions(remaining: u32, max: u32, stack: &mut Vec<Part>, out: &mut Vec<Partition>)
{
    if remaining == 0 {
        out.push(Partition::new(stack.clone()).unwrap());
        return;
    }
    for part in (1..=remaining.min(max)).rev() {
        stack.push(part);
        push_partitions(remaining - part, part, stack, out);
        stack.pop();
    }
}

/// Every partition with weight in `1..=max_weight`.
pub fn partitions_up_to(max_weight: u32) -> Vec<Partition>
{ (1..=max_weight).flat_map(partitions_of).collect() }

pub fn partition(parts: &[Part]) -> Partition
{ Partition::new(parts.iter().cloned()).unwrap() }
