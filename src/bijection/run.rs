/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Bijection, Engine, Grid, Step};

use ferrers_partition::Partition;

/// Where a [`Run`](struct.Run.html) is in its plan.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RunState {
    /// The grid holds the input diagram; no step has been applied.
    GridBuilt,
    /// Some, but not all, of the steps have been applied.
    Stepping,
    /// Every step has been applied and the grid holds the output diagram.
    Done,
}

/// One execution of a bijection, driven a step at a time.
///
/// Dropping a run at any point simply abandons it.
#[derive(Debug, Clone)]
pub struct Run {
    engine: Engine,
    bijection: Bijection,
    input: Partition,
    grid: Grid,
    plan: Vec<Step>,
    applied: usize,
}

/// The record of a completed run.
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub bijection: Bijection,
    pub input: Partition,
    pub output: Partition,
    pub steps: Vec<Step>,
}

impl Run {
    pub fn new(engine: Engine, bijection: Bijection, input: &Partition) -> Run
    {
        Run {
            engine,
            bijection,
            input: input.clone(),
            grid: Grid::from_partition(input),
            plan: bijection.plan(input.number_of_parts()),
            applied: 0,
        }
    }

    pub fn bijection(&self) -> Bijection
    { self.bijection }

    pub fn input(&self) -> &Partition
    { &self.input }

    pub fn grid(&self) -> &Grid
    { &self.grid }

    pub fn plan(&self) -> &[Step]
    { &self.plan }

    pub fn applied(&self) -> &[Step]
    { &self.plan[..self.applied] }

    pub fn remaining(&self) -> &[Step]
    { &self.plan[self.applied..] }

    pub fn state(&self) -> RunState
    {
        if self.applied == self.plan.len() {
            RunState::Done
        } else if self.applied == 0 {
            RunState::GridBuilt
        } else {
            RunState::Stepping
        }
    }

    /// Apply the next step, returning it.  `None` once the run is done.
    pub fn step(&mut self) -> Option<&Step>
    {
        let step = self.plan.get(self.applied)?;
        self.engine.apply(&mut self.grid, step);
        self.applied += 1;
        Some(step)
    }

    /// The output partition, once every step has been applied.
    pub fn output(&self) -> Option<Partition>
    { match self.state() {
        RunState::Done => Some(self.grid.to_partition()),
        _ => None,
    }}

    /// Apply all remaining steps and read off the result.
    pub fn finish(mut self) -> Transform
    {
        while self.step().is_some() {}
        Transform {
            bijection: self.bijection,
            output: self.grid.to_partition(),
            input: self.input,
            steps: self.plan,
        }
    }
}
