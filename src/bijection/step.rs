/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Region;

use std::fmt;

/// One elementary operation on the cells of a grid.
///
/// Positions are lattice coordinates `(x, y)`, where `x` is the column and
/// `y` the row (growing downwards).  Unless noted otherwise, a step only
/// touches the cells tagged with its `region`.
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(tag = "op", rename_all = "kebab-case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Retag *every* cell: `upper` where `a*x + b*y < c`, `lower` elsewhere.
    Cut { a: i64, b: i64, c: i64, upper: Region, lower: Region },

    /// Retag each cell of `region` to `strips[x mod strips.len()]`.
    Shred { region: Region, strips: Vec<Region> },

    Move { region: Region, dx: i64, dy: i64 },

    /// `(x, y) -> (a*x + b*y, c*x + d*y)` for `matrix = [[a, b], [c, d]]`.
    Shift { region: Region, matrix: [[i64; 2]; 2] },

    /// `(x, y) -> (floor(x * k), floor(y / l))`.
    Stretch { region: Region, k: f64, l: f64 },

    /// `(x, y) -> (y - k, x + k)`, a reflection through the line `y = x + k`.
    ///
    /// `None` transposes the whole grid.
    Transpose { region: Option<Region>, k: i64 },

    Fill { from: Region, to: Region },

    /// Glue the rows of `right` onto the ends of the rows of `left`.
    ///
    /// A `right` cell in row `y` moves right by the number of `left` cells in
    /// row `y - offset`, then up by `offset` rows.  The counts are taken
    /// before any cell moves.
    Append { left: Region, right: Region, offset: i64 },
}

/// The discriminant of a [`Step`](enum.Step.html).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StepKind {
    Cut,
    Shred,
    Move,
    Shift,
    Stretch,
    Transpose,
    Fill,
    Append,
}

impl StepKind {
    pub fn name(self) -> &'static str
    { match self {
        StepKind::Cut => "cut",
        StepKind::Shred => "shred",
        StepKind::Move => "move",
        StepKind::Shift => "shift",
        StepKind::Stretch => "stretch",
        StepKind::Transpose => "transpose",
        StepKind::Fill => "fill",
        StepKind::Append => "append",
    }}
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { f.write_str(self.name()) }
}

impl Step {
    pub fn kind(&self) -> StepKind
    { match *self {
        Step::Cut { .. } => StepKind::Cut,
        Step::Shred { .. } => StepKind::Shred,
        Step::Move { .. } => StepKind::Move,
        Step::Shift { .. } => StepKind::Shift,
        Step::Stretch { .. } => StepKind::Stretch,
        Step::Transpose { .. } => StepKind::Transpose,
        Step::Fill { .. } => StepKind::Fill,
        Step::Append { .. } => StepKind::Append,
    }}

    /// The region whose cells the step moves or retags.
    ///
    /// `None` when the step acts on every cell (a cut, or a whole-grid
    /// transpose).
    pub fn region(&self) -> Option<Region>
    { match *self {
        Step::Cut { .. } => None,
        Step::Shred { region, .. } => Some(region),
        Step::Move { region, .. } => Some(region),
        Step::Shift { region, .. } => Some(region),
        Step::Stretch { region, .. } => Some(region),
        Step::Transpose { region, .. } => region,
        Step::Fill { from, .. } => Some(from),
        Step::Append { right, .. } => Some(right),
    }}
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { match self {
        Step::Cut { a, b, c, upper, lower } => {
            write!(f, "cut at {}x + {}y < {} into {} / {}", a, b, c, upper, lower)
        },
        Step::Shred { region, strips } => {
            write!(f, "shred {} into [{}]", region, ::itertools::join(strips, ", "))
        },
        Step::Move { region, dx, dy } => write!(f, "move {} by ({}, {})", region, dx, dy),
        Step::Shift { region, matrix: [[a, b], [c, d]] } => {
            write!(f, "shift {} by [[{}, {}], [{}, {}]]", region, a, b, c, d)
        },
        Step::Stretch { region, k, l } => write!(f, "stretch {} by ({}, {})", region, k, l),
        Step::Transpose { region: Some(region), k } => write!(f, "transpose {} about y = x + {}", region, k),
        Step::Transpose { region: None, k } => write!(f, "transpose all about y = x + {}", k),
        Step::Fill { from, to } => write!(f, "fill {} into {}", from, to),
        Step::Append { left, right, offset } => {
            write!(f, "append {} to {} with offset {}", right, left, offset)
        },
    }}
}
