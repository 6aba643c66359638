/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use ferrers_bijection::{Bijection, Step, Transform};
use ferrers_partition::{Notation, Partition};
use std::io::Write;

/// What the binary prints about a transform.
#[derive(Serialize)]
#[derive(Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Report<'a> {
    pub bijection: Bijection,
    pub description: &'static str,
    pub weight: u64,
    pub input: &'a Partition,
    pub output: &'a Partition,
    pub steps: &'a [Step],
}

impl<'a> Report<'a> {
    pub fn new(transform: &'a Transform) -> Self
    {
        Report {
            bijection: transform.bijection,
            description: transform.bijection.description(),
            weight: transform.input.weight(),
            input: &transform.input,
            output: &transform.output,
            steps: &transform.steps,
        }
    }

    pub fn write_json(&self, w: &mut dyn Write) -> FailResult<()>
    {Ok({
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)?;
    })}

    pub fn write_text(&self, w: &mut dyn Write, cell: char, notation: Notation) -> FailResult<()>
    {Ok({
        writeln!(w, "{}: {}", self.bijection, self.description)?;
        writeln!(w)?;

        writeln!(w, "input: {} (weight {})", self.input, self.weight)?;
        write!(w, "{}", self.input.ferrers_diagram(cell, notation))?;
        writeln!(w)?;

        writeln!(w, "steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(w, "{:>4}. {}", i + 1, step)?;
        }
        writeln!(w)?;

        writeln!(w, "output: {} (weight {})", self.output, self.output.weight())?;
        write!(w, "{}", self.output.ferrers_diagram(cell, notation))?;
    })}
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;
    use ferrers_bijection::run_bijection;
    use pretty_assertions::assert_eq;

    #[test]
    fn text() {
        let input = Partition::new(vec![2, 1]).unwrap();
        let transform = run_bijection(Bijection::StrikeSlip, &input);

        let mut out = vec![];
        Report::new(&transform).write_text(&mut out, '#', Notation::French).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\
strike-slip: Works on most partitions.

input: [2, 1] (weight 3)
#
##

steps:
   1. cut at -1x + 1y < 0 into upper / lower
   2. move upper by (-1, 0)
   3. move lower by (0, 1)

output: [1, 1, 1] (weight 3)
#
#
#
");
    }
}
