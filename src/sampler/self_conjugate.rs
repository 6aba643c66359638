/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ferrers_partition::{Part, Partition};

/// Fold each part `2a + 1` of a partition into distinct odd parts into a
/// symmetric hook, nesting the hooks along the diagonal.
///
/// Hook `i` covers the diagonal cell `(i, i)`, `a` cells to its right and `a`
/// cells below it.  The result is self-conjugate and has the same weight.
///
/// The input must consist of distinct odd parts.
pub fn self_conjugate_from_distinct_odd(p: &Partition) -> Partition
{
    debug_assert!(p.is_odd() && p.is_distinct(), "not distinct odd: {}", p);

    let arms: Vec<usize> = p.iter().map(|&part| part as usize / 2).collect();
    let depth = arms.first().map_or(0, |&a| a + 1);

    // rows crossing the diagonal: their own hook plus one leg cell from each
    // hook above them (distinctness makes those legs long enough)
    let mut rows: Vec<Part> = {
        arms.iter().enumerate()
            .map(|(i, &a)| (i + a + 1) as Part)
            .collect()
    };
    // rows below the diagonal only hold leg cells
    for r in arms.len()..depth {
        let count = arms.iter().enumerate().filter(|&(j, &a)| j + a >= r).count();
        rows.push(count as Part);
    }
    Partition::new_unchecked(rows)
}
