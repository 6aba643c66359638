/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Constructions that build a new partition out of existing ones.
//!
//! The sum and union follow the definitions on page 9 of Igor Pak,
//! *The Nature of Partition Bijections II: Asymptotic Stability*.

use crate::{Part, Partition, Result};

/// The conjugate partition, whose Ferrers diagram is the transpose of `p`'s.
///
/// Part `j` of the conjugate counts the parts of `p` that are `> j`.
pub fn conjugate(p: &Partition) -> Partition
{
    let width = p.largest_part().unwrap_or(0);
    let parts = (0..width)
        .map(|j| p.iter().take_while(|&&part| part > j).count() as Part)
        .collect();

    // every column below the largest part has at least the first row in it
    Partition::new_unchecked(parts)
}

/// Part-wise sum.
///
/// Part `k` of the result is `lhs.part(k) + rhs.part(k)` for every `k` below
/// the larger of the two part counts.  Both sides must therefore have the same
/// number of parts; otherwise the missing index is reported as
/// `IndexOutOfRange`.
pub fn sum(lhs: &Partition, rhs: &Partition) -> Result<Partition>
{
    let len = lhs.number_of_parts().max(rhs.number_of_parts());
    let mut out = Partition::empty();
    for k in 0..len {
        out.insert(lhs.part(k)? + rhs.part(k)?)?;
    }
    Ok(out)
}

/// Multiset union of the parts.
pub fn union(lhs: &Partition, rhs: &Partition) -> Partition
{
    let parts = lhs.iter().chain(rhs).cloned().collect();
    Partition::new_unchecked(parts)
}

impl Partition {
    /// See [`conjugate`](fn.conjugate.html).
    pub fn conjugate(&self) -> Partition
    { conjugate(self) }

    pub fn is_self_conjugate(&self) -> bool
    { &conjugate(self) == self }

    /// See [`sum`](fn.sum.html).
    pub fn sum(&self, other: &Partition) -> Result<Partition>
    { sum(self, other) }

    /// See [`union`](fn.union.html).
    pub fn union(&self, other: &Partition) -> Partition
    { union(self, other) }
}
