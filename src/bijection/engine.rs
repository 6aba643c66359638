/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Bijection, Cell, Grid, Region, Run, Step, Transform};

use ferrers_partition::Partition;
use rayon_cond::CondIterator;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Allow rayon to spread the cells of a step across threads.
    pub parallel: bool,
    /// Grids with fewer cells than this are always processed on one thread.
    pub parallel_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self
    { Settings { parallel: true, parallel_threshold: 4096 } }
}

/// Executes steps on grids.
///
/// Within a step every cell is updated independently of every other cell,
/// so the work may be split across threads; the step is complete by the time
/// `apply` returns.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    settings: Settings,
}

impl Engine {
    pub fn new() -> Engine
    { Engine::default() }

    pub fn with_settings(settings: Settings) -> Engine
    { Engine { settings } }

    pub fn settings(&self) -> &Settings
    { &self.settings }

    /// Run a bijection to completion.
    ///
    /// The input must lie in the domain of the bijection; this is not checked.
    pub fn run(&self, bijection: Bijection, input: &Partition) -> Transform
    { Run::new(self.clone(), bijection, input).finish() }

    pub fn apply(&self, grid: &mut Grid, step: &Step)
    {
        match *step {
            Step::Cut { a, b, c, upper, lower } => {
                self.for_each_cell(grid, |cell| {
                    let [x, y] = cell.pos;
                    cell.region = if a * x + b * y < c { upper } else { lower };
                });
            },
            Step::Shred { region, ref strips } => {
                if strips.is_empty() {
                    return;
                }
                let len = strips.len() as i64;
                self.for_each_cell(grid, |cell| {
                    if cell.region == region {
                        cell.region = strips[cell.pos[0].rem_euclid(len) as usize];
                    }
                });
            },
            Step::Move { region, dx, dy } => {
                self.for_each_cell(grid, |cell| {
                    if cell.region == region {
                        cell.pos = [cell.pos[0] + dx, cell.pos[1] + dy];
                    }
                });
            },
            Step::Shift { region, matrix: [[a, b], [c, d]] } => {
                self.for_each_cell(grid, |cell| {
                    if cell.region == region {
                        let [x, y] = cell.pos;
                        cell.pos = [a * x + b * y, c * x + d * y];
                    }
                });
            },
            Step::Stretch { region, k, l } => {
                self.for_each_cell(grid, |cell| {
                    if cell.region == region {
                        let [x, y] = cell.pos;
                        cell.pos = [(x as f64 * k).floor() as i64, (y as f64 / l).floor() as i64];
                    }
                });
            },
            Step::Transpose { region, k } => {
                self.for_each_cell(grid, |cell| {
                    if region.map_or(true, |region| cell.region == region) {
                        let [x, y] = cell.pos;
                        cell.pos = [y - k, x + k];
                    }
                });
            },
            Step::Fill { from, to } => {
                self.for_each_cell(grid, |cell| {
                    if cell.region == from {
                        cell.region = to;
                    }
                });
            },
            Step::Append { left, right, offset } => {
                let mut widths = HashMap::new();
                for cell in grid.cells().iter().filter(|cell| cell.region == left) {
                    *widths.entry(cell.pos[1]).or_insert(0) += 1;
                }
                self.for_each_cell(grid, |cell| {
                    if cell.region == right {
                        let [x, y] = cell.pos;
                        let width = widths.get(&(y - offset)).cloned().unwrap_or(0);
                        cell.pos = [x + width, y - offset];
                    }
                });
            },
        }
    }

    fn use_rayon(&self, grid: &Grid) -> bool
    { self.settings.parallel && grid.len() >= self.settings.parallel_threshold }

    fn for_each_cell<F>(&self, grid: &mut Grid, f: F)
    where F: Fn(&mut Cell) + Sync + Send,
    {
        let use_rayon = self.use_rayon(grid);
        CondIterator::new(grid.cells_mut(), use_rayon).for_each(f)
    }
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    fn grid(parts: Vec<u32>) -> Grid
    { Grid::from_partition(&Partition::new(parts).unwrap()) }

    fn positions(grid: &Grid, region: Region) -> Vec<[i64; 2]>
    {
        let mut out: Vec<_> = grid.cells().iter().filter(|c| c.region == region).map(|c| c.pos).collect();
        out.sort();
        out
    }

    #[test]
    fn cut_tags_every_cell() {
        let mut g = grid(vec![2, 2]);
        let engine = Engine::new();
        engine.apply(&mut g, &Step::Fill { from: Region::Unsorted, to: Region::UpperStrip });
        engine.apply(&mut g, &Step::Cut { a: -1, b: 1, c: 0, upper: Region::Upper, lower: Region::Lower });
        // -x + y < 0 strictly above the diagonal
        assert_eq!(positions(&g, Region::Upper), vec![[1, 0]]);
        assert_eq!(positions(&g, Region::Lower), vec![[0, 0], [0, 1], [1, 1]]);
        assert_eq!(g.region_len(Region::UpperStrip), 0);
    }

    #[test]
    fn shred_by_column() {
        let mut g = grid(vec![3]);
        Engine::new().apply(&mut g, &Step::Move { region: Region::Unsorted, dx: -1, dy: 0 });
        Engine::new().apply(&mut g, &Step::Shred {
            region: Region::Unsorted,
            strips: vec![Region::Upper, Region::Lower],
        });
        // columns -1, 0, 1; negative columns wrap like positive ones
        assert_eq!(positions(&g, Region::Upper), vec![[0, 0]]);
        assert_eq!(positions(&g, Region::Lower), vec![[-1, 0], [1, 0]]);
    }

    #[test]
    fn moves_only_touch_their_region() {
        let mut g = grid(vec![2, 1]);
        let engine = Engine::new();
        engine.apply(&mut g, &Step::Cut { a: 0, b: 1, c: 1, upper: Region::Upper, lower: Region::Lower });
        engine.apply(&mut g, &Step::Move { region: Region::Lower, dx: 5, dy: -1 });
        engine.apply(&mut g, &Step::Shift { region: Region::Upper, matrix: [[1, 0], [1, 1]] });
        assert_eq!(positions(&g, Region::Upper), vec![[0, 0], [1, 1]]);
        assert_eq!(positions(&g, Region::Lower), vec![[5, 0]]);
    }

    #[test]
    fn stretch_floors() {
        let mut g = grid(vec![4, 4]);
        Engine::new().apply(&mut g, &Step::Move { region: Region::Unsorted, dx: -2, dy: 0 });
        Engine::new().apply(&mut g, &Step::Stretch { region: Region::Unsorted, k: 0.5, l: 0.5 });
        assert_eq!(positions(&g, Region::Unsorted), vec![
            [-1, 0], [-1, 0], [-1, 2], [-1, 2],
            [0, 0], [0, 0], [0, 2], [0, 2],
        ]);
    }

    #[test]
    fn transpose_about_shifted_diagonal() {
        let mut g = grid(vec![2]);
        let engine = Engine::new();
        engine.apply(&mut g, &Step::Transpose { region: Some(Region::Unsorted), k: 1 });
        assert_eq!(positions(&g, Region::Unsorted), vec![[-1, 1], [-1, 2]]);

        let mut g = grid(vec![2]);
        engine.apply(&mut g, &Step::Transpose { region: None, k: 0 });
        assert_eq!(g.to_partition().into_vec(), vec![1, 1]);
    }

    #[test]
    fn append_counts_before_moving() {
        // left: rows of width 3 and 2; right: a single cell parked in row 4
        let mut g = grid(vec![3, 2, 1]);
        let engine = Engine::new();
        engine.apply(&mut g, &Step::Cut { a: 0, b: 1, c: 2, upper: Region::Upper, lower: Region::Lower });
        engine.apply(&mut g, &Step::Move { region: Region::Lower, dx: 0, dy: 2 });

        engine.apply(&mut g, &Step::Append { left: Region::Upper, right: Region::Lower, offset: 3 });
        assert_eq!(positions(&g, Region::Lower), vec![[2, 1]]);
        assert!(g.is_collision_free());
        assert_eq!(g.to_partition().into_vec(), vec![3, 3]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let parts: Vec<u32> = (1..=120).rev().collect();
        let sequential = Engine::with_settings(Settings { parallel: false, parallel_threshold: 0 });
        let parallel = Engine::with_settings(Settings { parallel: true, parallel_threshold: 0 });

        for &bijection in &Bijection::ALL {
            let input = Partition::new(parts.clone()).unwrap();
            let mut a = Grid::from_partition(&input);
            let mut b = a.clone();
            for step in bijection.plan(input.number_of_parts()) {
                sequential.apply(&mut a, &step);
                parallel.apply(&mut b, &step);
            }
            assert_eq!(a, b, "{}", bijection);
        }
    }
}
