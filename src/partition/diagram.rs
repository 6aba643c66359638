/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Partition;

use std::fmt;

/// Orientation of a Ferrers diagram.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Largest row on top.
    English,
    /// Largest row on the bottom.
    French,
}

impl Default for Notation {
    fn default() -> Self { Notation::English }
}

/// Text rendering of a Ferrers diagram, one row per line.
///
/// Obtained from [`Partition::ferrers_diagram`].  Every row (including the
/// last) is terminated by a newline; the empty partition renders as nothing.
///
/// [`Partition::ferrers_diagram`]: struct.Partition.html#method.ferrers_diagram
#[derive(Debug, Clone, Copy)]
pub struct FerrersDiagram<'a> {
    partition: &'a Partition,
    cell: char,
    notation: Notation,
}

impl Partition {
    /// The diagram drawn with `*` cells, largest row on top.
    pub fn default_ferrers_diagram(&self) -> FerrersDiagram<'_>
    { self.ferrers_diagram('*', Notation::English) }

    pub fn ferrers_diagram(&self, cell: char, notation: Notation) -> FerrersDiagram<'_>
    { FerrersDiagram { partition: self, cell, notation } }

    /// Write the diagram to stdout.
    pub fn print_ferrers_diagram(&self, cell: char, notation: Notation)
    { print!("{}", self.ferrers_diagram(cell, notation)) }
}

impl<'a> fmt::Display for FerrersDiagram<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        let parts = self.partition.parts();
        let rows: Box<dyn Iterator<Item=&u32>> = match self.notation {
            Notation::English => Box::new(parts.iter()),
            Notation::French => Box::new(parts.iter().rev()),
        };
        for &part in rows {
            write_row(f, self.cell, part)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter, cell: char, len: u32) -> fmt::Result
{
    for _ in 0..len {
        write!(f, "{}", cell)?;
    }
    writeln!(f)
}
