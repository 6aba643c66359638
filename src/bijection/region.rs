/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

/// Tag telling which component of a diagram a cell currently belongs to.
///
/// Every cell starts out `Unsorted`; cuts and shreds partition the cells into
/// the other regions, and fills merge them back.
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Unsorted,
    Upper,
    Lower,
    UpperStrip,
    LowerStrip,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Unsorted,
        Region::Upper,
        Region::Lower,
        Region::UpperStrip,
        Region::LowerStrip,
    ];

    pub fn name(self) -> &'static str
    { match self {
        Region::Unsorted => "unsorted",
        Region::Upper => "upper",
        Region::Lower => "lower",
        Region::UpperStrip => "upper-strip",
        Region::LowerStrip => "lower-strip",
    }}
}

impl Default for Region {
    fn default() -> Self { Region::Unsorted }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { f.write_str(self.name()) }
}
