/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Bijections between classes of partitions, drawn as motions of cells.
//!
//! A [`Run`] lays out the Ferrers diagram of the input as a [`Grid`] of cells,
//! then applies the [`Step`]s of a [`Bijection`]'s plan one at a time.  The
//! output partition is read from the grid by counting the cells in each row.
//!
//! The steps are plain data so that a renderer can replay them; see
//! [`Step::kind`] and [`Step::region`].
//!
//! [`Run`]: struct.Run.html
//! [`Grid`]: struct.Grid.html
//! [`Step`]: enum.Step.html
//! [`Bijection`]: enum.Bijection.html
//! [`Step::kind`]: enum.Step.html#method.kind
//! [`Step::region`]: enum.Step.html#method.region

#[macro_use] extern crate failure;
#[cfg(feature = "serde-support")]
#[macro_use] extern crate serde_derive;

mod region;
mod step;
mod grid;
mod engine;
mod plans;
mod run;

pub use crate::region::Region;
pub use crate::step::{Step, StepKind};
pub use crate::grid::{Cell, Grid, Position};
pub use crate::engine::{Engine, Settings};
pub use crate::plans::{Bijection, UnknownBijection};
pub use crate::run::{Run, RunState, Transform};

use ferrers_partition::Partition;

/// Run a bijection with the default engine settings.
///
/// The input must lie in the domain of the bijection; this is not checked.
pub fn run_bijection(bijection: Bijection, input: &Partition) -> Transform
{ Engine::new().run(bijection, input) }
