/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{PartitionError, Result};

use std::fmt;
use std::iter;

/// Type of a single part.
pub type Part = u32;

/// A multiset of positive integers, kept in non-increasing order.
///
/// The empty partition is a perfectly good value (it is the unique partition
/// of 0), but a handful of queries such as [`largest_part`] or [`rank`] are
/// undefined on it and return an error.
///
/// [`largest_part`]: #method.largest_part
/// [`rank`]: #method.rank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Partition {
    // non-increasing; every element >= 1
    parts: Vec<Part>,
}

impl Partition {
    /// The partition of 0.
    pub fn empty() -> Partition
    { Partition { parts: vec![] } }

    /// Construct a partition from parts given in any order.
    pub fn new<Ps>(parts: Ps) -> Result<Partition>
    where Ps: IntoIterator<Item=Part>,
    {Ok({
        let parts: Vec<Part> = parts.into_iter().collect();
        if let Some(&bad) = parts.iter().find(|&&p| p < 1) {
            return Err(PartitionError::InvalidPart { part: i64::from(bad) });
        }
        Partition::new_unchecked(parts)
    })}

    /// Construct a partition from parts that are already known to be positive.
    ///
    /// The parts are sorted, so they may be given in any order.
    /// A zero part is a logic error; it trips a debug assertion, and in release
    /// builds it produces a value that breaks the invariants of this type.
    pub fn new_unchecked(mut parts: Vec<Part>) -> Partition
    {
        debug_assert!(parts.iter().all(|&p| p >= 1), "zero part in {:?}", parts);
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Partition { parts }
    }

    /// Remove all of the parts.
    pub fn clear(&mut self)
    { self.parts.clear() }

    pub fn contains(&self, part: Part) -> bool
    { self.parts.contains(&part) }

    pub fn is_empty(&self) -> bool
    { self.parts.is_empty() }

    /// Insert a part, keeping the descending order.
    pub fn insert(&mut self, part: Part) -> Result<()>
    { self.insert_many(part, 1) }

    /// Insert `count` copies of a part.
    ///
    /// Equivalent to calling `insert` `count` times.
    pub fn insert_many(&mut self, part: Part, count: usize) -> Result<()>
    {Ok({
        if part < 1 {
            return Err(PartitionError::InvalidPart { part: i64::from(part) });
        }
        // everything before `at` is >= part, so new copies go after existing equal parts
        let at = self.parts.partition_point(|&p| p >= part);
        self.parts.splice(at..at, iter::repeat(part).take(count));
    })}

    /// Remove the first occurrence of a part, if there is one.
    pub fn erase(&mut self, part: Part)
    {
        if let Some(index) = self.parts.iter().position(|&p| p == part) {
            self.parts.remove(index);
        }
    }

    /// The part at index `k` (index 0 holds the largest part).
    pub fn part(&self, k: usize) -> Result<Part>
    {
        self.parts.get(k).cloned()
            .ok_or(PartitionError::IndexOutOfRange { index: k, len: self.parts.len() })
    }

    /// All parts, largest first.
    pub fn parts(&self) -> &[Part]
    { &self.parts }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Part>
    { self.parts.iter() }

    /// Export the parts, largest first.
    pub fn to_vec(&self) -> Vec<Part>
    { self.parts.clone() }

    pub fn into_vec(self) -> Vec<Part>
    { self.parts }

    pub fn largest_part(&self) -> Result<Part>
    {
        self.parts.first().cloned()
            .ok_or(PartitionError::EmptyPartition { query: "largest part" })
    }

    pub fn smallest_part(&self) -> Result<Part>
    {
        self.parts.last().cloned()
            .ok_or(PartitionError::EmptyPartition { query: "smallest part" })
    }

    pub fn number_of_parts(&self) -> usize
    { self.parts.len() }

    /// The sum of the parts.
    pub fn weight(&self) -> u64
    { self.parts.iter().map(|&p| u64::from(p)).sum() }

    /// Number of occurrences of `part`.
    pub fn multiplicity(&self, part: Part) -> usize
    { self.parts.iter().filter(|&&p| p == part).count() }

    /// True if every part is even.  (vacuously true for the empty partition)
    pub fn is_even(&self) -> bool
    { self.parts.iter().all(|&p| p % 2 == 0) }

    /// True if every part is odd.  (vacuously true for the empty partition)
    pub fn is_odd(&self) -> bool
    { self.parts.iter().all(|&p| p % 2 == 1) }

    /// True if no part is repeated.
    pub fn is_distinct(&self) -> bool
    { self.parts.windows(2).all(|w| w[0] != w[1]) }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Part;
    type IntoIter = ::std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter
    { self.parts.iter() }
}

/// Formats as the tuple of parts, e.g. `[4, 3, 3, 1]`.
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { write!(f, "[{}]", ::itertools::join(&self.parts, ", ")) }
}

#[cfg(feature = "serde-support")]
mod serde_impls {
    use super::*;
    use serde::{Serialize, Serializer, Deserialize, Deserializer};

    // serialized as a plain list of parts
    impl Serialize for Partition {
        fn serialize<S: Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
        { self.parts.serialize(serializer) }
    }

    impl<'de> Deserialize<'de> for Partition {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error>
        {
            let parts = Vec::<Part>::deserialize(deserializer)?;
            Partition::new(parts).map_err(serde::de::Error::custom)
        }
    }
}
