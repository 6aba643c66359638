/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ferrers_partition::{Part, Partition};
use rand::Rng;

/// `π / √6`, the square root of `ζ(2)`.
pub const SQRT_ZETA_2: f64 = 1.282549830161864;

/// Which part sizes a generator may use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PartSizes {
    /// `1, 2, 3, ...`
    All,
    /// `2, 4, 6, ...`
    Even,
    /// `1, 3, 5, ...`
    Odd,
}

impl PartSizes {
    /// The admissible sizes, in increasing order.
    pub fn iter(self) -> impl Iterator<Item=Part>
    {
        let (first, stride) = match self {
            PartSizes::All => (1, 1),
            PartSizes::Even => (2, 2),
            PartSizes::Odd => (1, 2),
        };
        (first..).step_by(stride)
    }
}

/// The Boltzmann model tuned for a target weight `n`.
///
/// Size `i` appears with multiplicity `floor(-ln(u) / λ_i)` for a uniform `u`,
/// where `λ_i = 1 - x^i` and `x = exp(-√ζ(2) / √n)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Boltzmann {
    x: f64,
}

impl Boltzmann {
    pub fn for_weight(n: u64) -> Boltzmann
    {
        debug_assert!(n >= 1);
        Boltzmann { x: (-SQRT_ZETA_2 / (n as f64).sqrt()).exp() }
    }

    /// The parameter `x`, always in `(0, 1)`.
    pub fn x(&self) -> f64
    { self.x }

    pub fn lambda(&self, size: Part) -> f64
    { 1.0 - self.x.powf(f64::from(size)) }

    /// Number of copies of `size` for the uniform draw `u`.
    ///
    /// `None` for `u == 0`, where the logarithm is undefined; the caller
    /// skips that size.
    pub fn copies(&self, size: Part, u: f64) -> Option<usize>
    {
        if u <= 0.0 {
            return None;
        }
        Some((-u.ln() / self.lambda(size)).floor() as usize)
    }

    /// Draw one partition of weight at least `n`.
    ///
    /// Sizes are visited in increasing order, and the walk stops as soon as
    /// the running weight reaches `n`.
    pub fn sample_at_least<R: Rng>(&self, rng: &mut R, sizes: PartSizes, n: u64) -> Partition
    {
        let mut parts = vec![];
        let mut weight = 0;
        for size in sizes.iter() {
            if weight >= n {
                break;
            }

            let u: f64 = rng.gen();
            if let Some(count) = self.copies(size, u) {
                parts.extend(::std::iter::repeat(size).take(count));
                weight += u64::from(size) * count as u64;
            }
        }
        Partition::new_unchecked(parts)
    }
}
