/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Integer partitions.
//!
//! A partition of `n` is a way of writing `n` as a sum of positive integers,
//! listed in decreasing order.  The summands are called *parts*.  This crate
//! provides the [`Partition`] type along with the statistics that show up in
//! the theory of partition congruences (rank, crank, Durfee rank) and the
//! elementary constructions (conjugate, sum, union).
//!
//! [`Partition`]: struct.Partition.html

#[macro_use] extern crate failure;
#[cfg(feature = "serde-support")] extern crate serde;

mod partition;
mod stats;
mod ops;
mod diagram;
mod parse;

pub use crate::partition::{Part, Partition};
pub use crate::ops::{conjugate, sum, union};
pub use crate::diagram::{FerrersDiagram, Notation};

/// Errors from queries and constructors of [`Partition`].
///
/// [`Partition`]: struct.Partition.html
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// A part below 1 was supplied to a constructor or to `insert`.
    #[fail(display = "Part is not positive: {}", part)]
    InvalidPart { part: i64 },

    /// A query that needs at least one part was made on an empty partition.
    #[fail(display = "No such {} exists in an empty partition.", query)]
    EmptyPartition { query: &'static str },

    #[fail(display = "Illegal part index {} (the partition has {} parts)", index, len)]
    IndexOutOfRange { index: usize, len: usize },

    /// A statistic (rank, crank, Durfee rank) was requested on an empty partition.
    #[fail(display = "The {} of an empty partition is undefined.", statistic)]
    UndefinedForEmpty { statistic: &'static str },

    #[fail(display = "Cannot parse a part from {:?}", token)]
    Parse { token: String },
}

pub type Result<T> = ::std::result::Result<T, PartitionError>;
