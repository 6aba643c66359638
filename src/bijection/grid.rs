/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Region;

use ferrers_partition::{Part, Partition};
use std::collections::{BTreeMap, HashSet};

/// Lattice coordinates `[x, y]`: column, then row.
pub type Position = [i64; 2];

/// One cell of a Ferrers diagram in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Where the cell sat in the input diagram.
    pub origin: Position,
    pub pos: Position,
    pub region: Region,
}

/// Arena of the cells of a Ferrers diagram.
///
/// Steps move cells around and retag them, but never create or destroy one,
/// so the cell count is the weight of the input for the whole life of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
}

impl Grid {
    /// One `Unsorted` cell at `(j, i)` for every `0 <= j < part(i)`.
    pub fn from_partition(p: &Partition) -> Grid
    {
        let cells = {
            p.iter().enumerate()
                .flat_map(|(y, &part)| (0..i64::from(part)).map(move |x| {
                    let pos = [x, y as i64];
                    Cell { origin: pos, pos, region: Region::Unsorted }
                }))
                .collect()
        };
        Grid { cells, rows: p.number_of_parts() }
    }

    pub fn cells(&self) -> &[Cell]
    { &self.cells }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell]
    { &mut self.cells }

    pub fn len(&self) -> usize
    { self.cells.len() }

    pub fn is_empty(&self) -> bool
    { self.cells.is_empty() }

    /// Number of rows of the diagram the grid was built from.
    pub fn input_rows(&self) -> usize
    { self.rows }

    pub fn region_len(&self, region: Region) -> usize
    { self.cells.iter().filter(|c| c.region == region).count() }

    /// True if no two cells share a position.
    pub fn is_collision_free(&self) -> bool
    {
        let mut seen = HashSet::with_capacity(self.cells.len());
        self.cells.iter().all(|c| seen.insert(c.pos))
    }

    /// Number of cells in each occupied row, by row.
    pub fn row_counts(&self) -> BTreeMap<i64, usize>
    {
        let mut counts = BTreeMap::new();
        for cell in &self.cells {
            *counts.entry(cell.pos[1]).or_insert(0) += 1;
        }
        counts
    }

    /// Read the grid back as a partition, one part per occupied row.
    ///
    /// Only the number of cells per row matters; gaps inside a row are ignored.
    pub fn to_partition(&self) -> Partition
    { Partition::new_unchecked(self.row_counts().values().map(|&n| n as Part).collect()) }
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    #[test]
    fn from_partition() {
        let p = Partition::new(vec![3, 1]).unwrap();
        let grid = Grid::from_partition(&p);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.input_rows(), 2);
        let positions: Vec<_> = grid.cells().iter().map(|c| c.pos).collect();
        assert_eq!(positions, vec![[0, 0], [1, 0], [2, 0], [0, 1]]);
        assert!(grid.cells().iter().all(|c| c.origin == c.pos));
        assert_eq!(grid.region_len(Region::Unsorted), 4);
        assert!(grid.is_collision_free());
        assert_eq!(grid.to_partition(), p);
    }

    #[test]
    fn reads_rows_regardless_of_columns() {
        let mut grid = Grid::from_partition(&Partition::new(vec![2, 2]).unwrap());
        // scatter row 1 far to the right and below
        for cell in grid.cells_mut().iter_mut().filter(|c| c.pos[1] == 1) {
            cell.pos[0] += 10;
            cell.pos[1] += 5;
        }
        assert_eq!(grid.row_counts().into_iter().collect::<Vec<_>>(), vec![(0, 2), (6, 2)]);
        assert_eq!(grid.to_partition().into_vec(), vec![2, 2]);

        // stack one cell onto another
        grid.cells_mut()[1].pos = [0, 0];
        assert!(!grid.is_collision_free());
    }

    #[test]
    fn empty() {
        let grid = Grid::from_partition(&Partition::empty());
        assert!(grid.is_empty());
        assert_eq!(grid.to_partition(), Partition::empty());
    }
}
