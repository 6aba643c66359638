/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Implementation of the `ferrers` binary.
//!
//! The binary shim only calls into [`entry_points`]; everything else lives in
//! here so that it can be tested without spawning a process.
//!
//! [`entry_points`]: entry_points/index.html

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod cmd;
pub mod ui;
pub mod entry_points;

pub use crate::cmd::{run_ferrers, CliArgs, Input, OutputFormat, Report};
pub use crate::ui::cfg_merging::ConfigSources;
pub use crate::ui::logging::GlobalLogger;
