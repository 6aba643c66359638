/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Boltzmann, PartSizes, SampleError, Result};
use crate::self_conjugate::self_conjugate_from_distinct_odd;

use ferrers_partition::Partition;
use rand::{Rng, SeedableRng};
use rand::rngs::{StdRng, ThreadRng};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of draws made by any single rejection loop.
    ///
    /// `None` (the default) retries forever.  Nested rejection (e.g. distinct
    /// *and* exact) applies the cap to each level separately.
    pub max_attempts: Option<u64>,
}

/// A class of partitions that the sampler knows how to draw from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Class {
    General,
    Even,
    Odd,
    DistinctEven,
    DistinctOdd,
    SelfConjugate,
}

impl Class {
    pub fn contains(self, p: &Partition) -> bool
    { match self {
        Class::General => true,
        Class::Even => p.is_even(),
        Class::Odd => p.is_odd(),
        Class::DistinctEven => p.is_even() && p.is_distinct(),
        Class::DistinctOdd => p.is_odd() && p.is_distinct(),
        Class::SelfConjugate => p.is_self_conjugate(),
    }}
}

/// Whether the weight of a sample is a lower bound or an exact target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    AtLeast,
    Exactly,
}

/// Random partition generator.
///
/// Owns its source of randomness, so that a seeded sampler reproduces the
/// same sequence of partitions.
#[derive(Debug, Clone)]
pub struct Sampler<R = ThreadRng> {
    rng: R,
    settings: Settings,
}

impl Sampler<ThreadRng> {
    pub fn new() -> Self
    { Sampler::from_rng(::rand::thread_rng()) }
}

impl Default for Sampler<ThreadRng> {
    fn default() -> Self { Sampler::new() }
}

impl Sampler<StdRng> {
    pub fn seeded(seed: u64) -> Self
    { Sampler::from_rng(StdRng::seed_from_u64(seed)) }
}

impl<R: Rng> Sampler<R> {
    pub fn from_rng(rng: R) -> Self
    { Sampler { rng, settings: Settings::default() } }

    pub fn with_settings(mut self, settings: Settings) -> Self
    { self.settings = settings; self }

    pub fn settings(&self) -> &Settings
    { &self.settings }

    /// Draw from `class` with weight at least (or exactly) `n`.
    pub fn sample(&mut self, class: Class, n: u64, mode: Mode) -> Result<Partition>
    { match (class, mode) {
        (Class::General, Mode::AtLeast) => self.random(n),
        (Class::General, Mode::Exactly) => self.random_exactly(n),
        (Class::Even, Mode::AtLeast) => self.even_random(n),
        (Class::Even, Mode::Exactly) => self.even_random_exactly(n),
        (Class::Odd, Mode::AtLeast) => self.odd_random(n),
        (Class::Odd, Mode::Exactly) => self.odd_random_exactly(n),
        (Class::DistinctEven, Mode::AtLeast) => self.distinct_even_random(n),
        (Class::DistinctEven, Mode::Exactly) => self.distinct_even_random_exactly(n),
        (Class::DistinctOdd, Mode::AtLeast) => self.distinct_odd_random(n),
        (Class::DistinctOdd, Mode::Exactly) => self.distinct_odd_random_exactly(n),
        (Class::SelfConjugate, Mode::AtLeast) => self.self_conjugate_random(n),
        (Class::SelfConjugate, Mode::Exactly) => self.self_conjugate_random_exactly(n),
    }}

    /// A random partition of weight at least `n`.
    pub fn random(&mut self, n: u64) -> Result<Partition>
    { self.at_least(PartSizes::All, n) }

    pub fn random_exactly(&mut self, n: u64) -> Result<Partition>
    {
        check_positive(n)?;
        self.retry("a partition of exact weight", |s| s.random(n), |p| p.weight() == n)
    }

    /// A random partition into even parts, of weight at least `n`.
    pub fn even_random(&mut self, n: u64) -> Result<Partition>
    { self.at_least(PartSizes::Even, n) }

    pub fn even_random_exactly(&mut self, n: u64) -> Result<Partition>
    {
        check_even(n)?;
        self.retry("an even partition of exact weight", |s| s.even_random(n), |p| p.weight() == n)
    }

    /// A random partition into odd parts, of weight at least `n`.
    pub fn odd_random(&mut self, n: u64) -> Result<Partition>
    { self.at_least(PartSizes::Odd, n) }

    pub fn odd_random_exactly(&mut self, n: u64) -> Result<Partition>
    {
        check_positive(n)?;
        self.retry("an odd partition of exact weight", |s| s.odd_random(n), |p| p.weight() == n)
    }

    /// A random partition into distinct even parts, of weight at least `n`.
    pub fn distinct_even_random(&mut self, n: u64) -> Result<Partition>
    {
        check_positive(n)?;
        self.retry("a distinct even partition", |s| s.even_random(n), |p| p.is_distinct())
    }

    pub fn distinct_even_random_exactly(&mut self, n: u64) -> Result<Partition>
    {
        check_even(n)?;
        self.retry(
            "a distinct even partition of exact weight",
            |s| s.distinct_even_random(n),
            |p| p.weight() == n,
        )
    }

    /// A random partition into distinct odd parts, of weight at least `n`.
    pub fn distinct_odd_random(&mut self, n: u64) -> Result<Partition>
    {
        check_positive(n)?;
        self.retry("a distinct odd partition", |s| s.odd_random(n), |p| p.is_distinct())
    }

    pub fn distinct_odd_random_exactly(&mut self, n: u64) -> Result<Partition>
    {
        check_distinct_odd(n)?;
        self.retry(
            "a distinct odd partition of exact weight",
            |s| s.distinct_odd_random(n),
            |p| p.weight() == n,
        )
    }

    /// A random self-conjugate partition of weight at least `n`.
    ///
    /// Built from a random partition into distinct odd parts, see
    /// [`self_conjugate_from_distinct_odd`](fn.self_conjugate_from_distinct_odd.html).
    pub fn self_conjugate_random(&mut self, n: u64) -> Result<Partition>
    { self.distinct_odd_random(n).map(|p| self_conjugate_from_distinct_odd(&p)) }

    pub fn self_conjugate_random_exactly(&mut self, n: u64) -> Result<Partition>
    { self.distinct_odd_random_exactly(n).map(|p| self_conjugate_from_distinct_odd(&p)) }

    fn at_least(&mut self, sizes: PartSizes, n: u64) -> Result<Partition>
    {
        check_positive(n)?;
        Ok(Boltzmann::for_weight(n).sample_at_least(&mut self.rng, sizes, n))
    }

    fn retry<D, A>(&mut self, what: &'static str, mut draw: D, accept: A) -> Result<Partition>
    where
        D: FnMut(&mut Self) -> Result<Partition>,
        A: Fn(&Partition) -> bool,
    {
        let mut attempts = 0;
        loop {
            if let Some(max) = self.settings.max_attempts {
                if attempts >= max {
                    debug!("giving up on {} after {} attempts", what, attempts);
                    return Err(SampleError::SamplingTimeout { what, attempts });
                }
            }
            attempts += 1;

            let p = draw(self)?;
            if accept(&p) {
                trace!("drew {} in {} attempt(s)", what, attempts);
                return Ok(p);
            }
        }
    }
}

fn check_positive(n: u64) -> Result<()>
{
    if n < 1 {
        return Err(SampleError::InvalidWeight { weight: n, reason: "the weight must be positive" });
    }
    Ok(())
}

fn check_even(n: u64) -> Result<()>
{
    check_positive(n)?;
    if n % 2 != 0 {
        return Err(SampleError::InvalidWeight {
            weight: n,
            reason: "an even partition cannot have an odd weight",
        });
    }
    Ok(())
}

// Every n >= 1 except 2 has a partition into distinct odd parts:
// n itself when odd, and (n - 1) + 1 when even.
fn check_distinct_odd(n: u64) -> Result<()>
{
    check_positive(n)?;
    if n == 2 {
        return Err(SampleError::InvalidWeight {
            weight: n,
            reason: "2 has no partition into distinct odd parts",
        });
    }
    Ok(())
}
