/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The work behind the `ferrers` binary: pick a partition, run a bijection
//! on it, and describe what happened.

use crate::FailResult;

use ferrers_bijection::{Bijection, Engine, Run, Transform, Settings as EngineSettings};
use ferrers_partition::{self as partition, Partition};
use ferrers_sampler::{Sampler, Class, Mode, Settings as SamplerSettings};
use ferrers_tasks_config::{self as cfg, ValidatedSettings};
use rand::Rng;
use std::io::Write;

mod report;
pub use self::report::Report;

/// Where the input partition comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Draw one at random from the domain of the bijection.
    Sample { weight: u64, exactly: bool },
    /// Use this one.  It must lie in the domain of the bijection.
    Parts(Partition),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat { Text, Json }

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub bijection: Bijection,
    pub input: Input,
    /// Overrides `sampler.seed`.
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

/// The class of partitions that `bijection` is defined on.
pub fn domain_class(bijection: Bijection) -> Class
{ match bijection {
    Bijection::StrikeSlip => Class::General,
    Bijection::ShredStretch => Class::Even,
    Bijection::CutStretch => Class::SelfConjugate,
    Bijection::Glaisher => Class::Odd,
}}

pub fn run_ferrers(settings: &ValidatedSettings, args: &CliArgs, out: &mut dyn Write) -> FailResult<()>
{Ok({
    let settings = &settings.0;

    let input = obtain_input(settings, args)?;
    let transform = run_transform(&settings.engine, args.bijection, &input)?;

    let report = Report::new(&transform);
    match args.format {
        OutputFormat::Text => {
            let notation = notation_from_config(settings.diagram.notation);
            report.write_text(out, settings.diagram.cell, notation)?;
        },
        OutputFormat::Json => report.write_json(out)?,
    }
})}

fn obtain_input(settings: &cfg::Settings, args: &CliArgs) -> FailResult<Partition>
{Ok({
    match args.input {
        Input::Parts(ref p) => {
            if !args.bijection.domain_contains(p) {
                bail!(
                    "{} is not in the domain of {} ({})",
                    p, args.bijection, args.bijection.description(),
                );
            }
            info!("Input: {} (given)", p);
            p.clone()
        },
        Input::Sample { weight, exactly } => {
            check_weight(&settings.cli, args.bijection, weight, exactly)?;

            let class = domain_class(args.bijection);
            let mode = match exactly {
                true => Mode::Exactly,
                false => Mode::AtLeast,
            };
            let sampler_settings = SamplerSettings { max_attempts: settings.sampler.max_attempts };

            info!(
                "Sampling a partition of class {:?} with weight {} {}",
                class, if exactly { "exactly" } else { "at least" }, weight,
            );
            let p = match args.seed.or(settings.sampler.seed) {
                Some(seed) => {
                    debug!("Using seed {}", seed);
                    sample(Sampler::seeded(seed), sampler_settings, class, weight, mode)?
                },
                None => sample(Sampler::new(), sampler_settings, class, weight, mode)?,
            };
            info!("Input: {} (weight {})", p, p.weight());
            p
        },
    }
})}

fn check_weight(cli: &cfg::Cli, bijection: Bijection, weight: u64, exactly: bool) -> FailResult<()>
{
    if weight < cli.min_weight || weight > cli.max_weight {
        bail!("The weight must be between {} and {} (got {}).", cli.min_weight, cli.max_weight, weight);
    }
    if exactly && domain_class(bijection) == Class::Even && weight % 2 == 1 {
        bail!("An even partition cannot have an odd weight.");
    }
    Ok(())
}

fn sample<R: Rng>(
    sampler: Sampler<R>,
    settings: SamplerSettings,
    class: Class,
    weight: u64,
    mode: Mode,
) -> FailResult<Partition>
{ Ok(sampler.with_settings(settings).sample(class, weight, mode)?) }

fn run_transform(settings: &cfg::Engine, bijection: Bijection, input: &Partition) -> FailResult<Transform>
{Ok({
    let engine = Engine::with_settings(EngineSettings {
        parallel: settings.parallel,
        parallel_threshold: settings.parallel_threshold,
    });

    let mut run = Run::new(engine, bijection, input);
    debug!("Running {} on {} cells", bijection, run.grid().len());
    while let Some(step) = run.step() {
        trace!("{}", step);
    }
    if !run.grid().is_collision_free() {
        warn!("Two cells of the diagram ended up in the same place!");
    }

    let transform = run.finish();
    ensure!(
        transform.output.weight() == input.weight(),
        "BUG! {} changed the weight of {} (got {})", bijection, input, transform.output,
    );
    if !bijection.range_contains(&transform.output) {
        warn!("{} is not in the range of {}", transform.output, bijection);
    }
    info!("Output: {}", transform.output);
    transform
})}

fn notation_from_config(notation: cfg::Notation) -> partition::Notation
{ match notation {
    cfg::Notation::English => partition::Notation::English,
    cfg::Notation::French => partition::Notation::French,
}}
