/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Region, Step};
use crate::Region::{Unsorted, Upper, Lower, UpperStrip, LowerStrip};

use ferrers_partition::Partition;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
#[fail(display = "Unknown bijection '{}' (expected one of: strike-slip, shred-stretch, cut-stretch, glaisher)", name)]
pub struct UnknownBijection {
    pub name: String,
}

/// The bijections that can be drawn as a sequence of steps.
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bijection {
    /// Cut along the main diagonal and slide the two halves apart.
    StrikeSlip,
    /// Split an even partition into its odd and even columns, halve both,
    /// and lay them side by side.
    ShredStretch,
    /// Cut a self-conjugate partition along the diagonal, and stretch the
    /// halves into hooks of odd length.
    CutStretch,
    /// Glaisher's bijection, as cut-and-stretch along a steeper diagonal.
    Glaisher,
}

impl Bijection {
    pub const ALL: [Bijection; 4] = [
        Bijection::StrikeSlip,
        Bijection::ShredStretch,
        Bijection::CutStretch,
        Bijection::Glaisher,
    ];

    pub fn name(self) -> &'static str
    { match self {
        Bijection::StrikeSlip => "strike-slip",
        Bijection::ShredStretch => "shred-stretch",
        Bijection::CutStretch => "cut-stretch",
        Bijection::Glaisher => "glaisher",
    }}

    /// Domain and range, in words.
    pub fn description(self) -> &'static str
    { match self {
        Bijection::StrikeSlip => "Works on most partitions.",
        Bijection::ShredStretch => "Even partition ↦ Even partition",
        Bijection::CutStretch => "Self-conjugate partition ↦ Partition with distinct odd parts",
        Bijection::Glaisher => "Odd partition ↦ Partition with distinct parts",
    }}

    pub fn domain_contains(self, p: &Partition) -> bool
    {
        !p.is_empty() && match self {
            Bijection::StrikeSlip => true,
            Bijection::ShredStretch => p.is_even(),
            Bijection::CutStretch => p.is_self_conjugate(),
            Bijection::Glaisher => p.is_odd(),
        }
    }

    pub fn range_contains(self, p: &Partition) -> bool
    {
        !p.is_empty() && match self {
            Bijection::StrikeSlip => true,
            Bijection::ShredStretch => p.is_even(),
            Bijection::CutStretch => p.is_odd() && p.is_distinct(),
            Bijection::Glaisher => p.is_distinct(),
        }
    }

    /// The steps for an input with `rows` parts.
    ///
    /// Nothing but the row count of the input is consulted.
    pub fn plan(self, rows: usize) -> Vec<Step>
    {
        let rows = rows as i64;
        match self {
            Bijection::StrikeSlip => strike_slip(),
            Bijection::ShredStretch => shred_stretch(),
            Bijection::CutStretch => cut_stretch(rows),
            Bijection::Glaisher => glaisher(rows),
        }
    }
}

impl fmt::Display for Bijection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { f.write_str(self.name()) }
}

impl FromStr for Bijection {
    type Err = UnknownBijection;

    fn from_str(s: &str) -> Result<Bijection, UnknownBijection>
    {
        Bijection::ALL.iter().cloned()
            .find(|b| b.name() == s)
            .ok_or_else(|| UnknownBijection { name: s.to_string() })
    }
}

fn cut(a: i64, b: i64, c: i64) -> Step
{ Step::Cut { a, b, c, upper: Upper, lower: Lower } }

fn mv(region: Region, dx: i64, dy: i64) -> Step
{ Step::Move { region, dx, dy } }

fn shift(region: Region, matrix: [[i64; 2]; 2]) -> Step
{ Step::Shift { region, matrix } }

fn stretch(region: Region, k: f64, l: f64) -> Step
{ Step::Stretch { region, k, l } }

fn transpose(region: Region, k: i64) -> Step
{ Step::Transpose { region: Some(region), k } }

fn shred(region: Region, strips: &[Region]) -> Step
{ Step::Shred { region, strips: strips.to_vec() } }

fn fill(from: Region, to: Region) -> Step
{ Step::Fill { from, to } }

// Slide the part strictly above the diagonal one column left, and everything
// else one row down.
fn strike_slip() -> Vec<Step>
{
    vec![
        cut(-1, 1, 0),
        mv(Upper, -1, 0),
        mv(Lower, 0, 1),
    ]
}

fn shred_stretch() -> Vec<Step>
{
    vec![
        shred(Unsorted, &[Upper, Lower]),
        mv(Upper, 1, 0),
        stretch(Upper, 0.5, 0.5),
        stretch(Lower, 0.5, 0.5),
        Step::Transpose { region: None, k: 0 },
        mv(Lower, 1, 0),
    ]
}

fn cut_stretch(rows: i64) -> Vec<Step>
{
    vec![
        cut(-1, 1, 1),

        // shear the upper half into a staircase of rows
        mv(Upper, 1, 1),
        shift(Upper, [[1, -1], [0, 1]]),
        mv(Upper, 0, -1),
        stretch(Upper, 2.0, 1.0),

        // the lower half goes through the same motions, reflected
        mv(Lower, 0, rows),
        shift(Lower, [[1, 0], [-1, 1]]),
        mv(Lower, 0, -1),
        transpose(Lower, rows),
        stretch(Lower, 2.0, 1.0),
        mv(Lower, 1, -rows),
    ]
}

fn glaisher(rows: i64) -> Vec<Step>
{
    vec![
        cut(-1, 2, 0),

        mv(Upper, 1, 1),
        shift(Upper, [[1, -2], [0, 1]]),
        mv(Upper, 0, -1),
        shred(Upper, &[Upper, UpperStrip]),
        mv(Upper, 1, 0),
        stretch(Upper, 0.5, 0.5),
        stretch(UpperStrip, 0.5, 0.5),
        mv(UpperStrip, 0, 1),
        fill(UpperStrip, Upper),

        mv(Lower, 0, rows),
        shred(Lower, &[Lower, LowerStrip]),
        mv(Lower, 1, 0),

        stretch(Lower, 0.5, 1.0),
        shift(Lower, [[1, 0], [-1, 1]]),
        transpose(Lower, rows),
        stretch(Lower, 1.0, 0.5),
        mv(Lower, 0, -rows),

        stretch(LowerStrip, 0.5, 1.0),
        shift(LowerStrip, [[1, 0], [-1, 1]]),
        transpose(LowerStrip, rows + 1),
        stretch(LowerStrip, 1.0, 0.5),
        mv(LowerStrip, 0, -rows - 1),
        fill(LowerStrip, Lower),

        Step::Append { left: Upper, right: Lower, offset: rows },
    ]
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;
    use crate::StepKind;

    #[test]
    fn names_round_trip() {
        for &b in &Bijection::ALL {
            assert_eq!(b.to_string().parse::<Bijection>(), Ok(b));
        }
        assert_eq!(
            "glasher".parse::<Bijection>(),
            Err(UnknownBijection { name: "glasher".into() }),
        );
    }

    #[test]
    fn plan_lengths() {
        let lengths: Vec<_> = Bijection::ALL.iter().map(|b| b.plan(4).len()).collect();
        assert_eq!(lengths, vec![3, 6, 11, 25]);
    }

    #[test]
    fn plans_depend_on_rows_only_where_offsets_do() {
        assert_eq!(Bijection::StrikeSlip.plan(1), Bijection::StrikeSlip.plan(9));
        assert_eq!(Bijection::ShredStretch.plan(1), Bijection::ShredStretch.plan(9));
        assert_ne!(Bijection::CutStretch.plan(1), Bijection::CutStretch.plan(9));

        let last = Bijection::Glaisher.plan(7).pop().unwrap();
        assert_eq!(last, Step::Append { left: Upper, right: Lower, offset: 7 });
        assert_eq!(last.kind(), StepKind::Append);
    }

    #[test]
    fn domains() {
        let p = |parts: Vec<u32>| Partition::new(parts).unwrap();
        assert!(Bijection::StrikeSlip.domain_contains(&p(vec![4, 3, 3, 1])));
        assert!(!Bijection::StrikeSlip.domain_contains(&Partition::empty()));
        assert!(Bijection::ShredStretch.domain_contains(&p(vec![4, 2, 2])));
        assert!(!Bijection::ShredStretch.domain_contains(&p(vec![4, 3])));
        assert!(Bijection::CutStretch.domain_contains(&p(vec![4, 3, 3, 1])));
        assert!(!Bijection::CutStretch.domain_contains(&p(vec![4, 3, 3])));
        assert!(Bijection::Glaisher.domain_contains(&p(vec![5, 3, 1, 1])));
        assert!(!Bijection::Glaisher.domain_contains(&p(vec![2, 1])));

        assert!(Bijection::CutStretch.range_contains(&p(vec![7, 3, 1])));
        assert!(!Bijection::CutStretch.range_contains(&p(vec![7, 3, 3])));
        assert!(Bijection::Glaisher.range_contains(&p(vec![6, 3, 1])));
        assert!(!Bijection::Glaisher.range_contains(&p(vec![3, 3])));
    }
}
