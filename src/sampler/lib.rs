/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Random partitions.
//!
//! The generators draw the multiplicity of every admissible part size from an
//! independent geometric law, calibrated so that the expected weight is close
//! to the requested `n` (a Boltzmann sampler).  The basic generators produce a
//! partition of weight *at least* `n`; every other mode is layered on top by
//! rejection.
//!
//! # Termination
//!
//! Rejection loops are unbounded unless [`Settings::max_attempts`] is set.
//! Requests that can never be satisfied (such as an even partition of an odd
//! number) are refused up front with [`SampleError::InvalidWeight`], but a
//! satisfiable request with a very large `n` can still take a very long time.
//!
//! [`Settings::max_attempts`]: struct.Settings.html#structfield.max_attempts
//! [`SampleError::InvalidWeight`]: enum.SampleError.html#variant.InvalidWeight

#[macro_use] extern crate failure;
#[macro_use] extern crate log;

mod boltzmann;
mod sampler;
mod self_conjugate;

pub use crate::boltzmann::{Boltzmann, PartSizes, SQRT_ZETA_2};
pub use crate::sampler::{Sampler, Settings, Class, Mode};
pub use crate::self_conjugate::self_conjugate_from_distinct_odd;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The target weight can never be produced by the requested generator.
    #[fail(display = "Illegal weight {}: {}", weight, reason)]
    InvalidWeight { weight: u64, reason: &'static str },

    /// A rejection loop hit `Settings::max_attempts`.
    #[fail(display = "Gave up sampling {} after {} attempts", what, attempts)]
    SamplingTimeout { what: &'static str, attempts: u64 },
}

pub type Result<T> = ::std::result::Result<T, SampleError>;
