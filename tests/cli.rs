/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ferrers_bijection::Bijection;
use ferrers_tasks::{CliArgs, ConfigSources, Input, OutputFormat, run_ferrers};
use failure::Error;

fn run(configs: &[&str], args: &CliArgs) -> Result<String, Error>
{
    let settings = ConfigSources::resolve_from_args(configs)?.into_settings()?;
    let mut out = vec![];
    run_ferrers(&settings, args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn sample_args(bijection: Bijection, weight: u64, exactly: bool) -> CliArgs
{
    CliArgs {
        bijection,
        input: Input::Sample { weight, exactly },
        seed: None,
        format: OutputFormat::Json,
    }
}

#[test]
fn config_seed_is_reproducible() {
    let args = sample_args(Bijection::StrikeSlip, 30, false);
    let a = run(&["sampler.seed:17"], &args).unwrap();
    let b = run(&["sampler.seed:17"], &args).unwrap();
    assert_eq!(a, b);

    // the argument seed wins over the config
    let mut seeded = args.clone();
    seeded.seed = Some(17);
    assert_eq!(run(&["sampler.seed:4"], &seeded).unwrap(), a);
}

#[test]
fn json_reports_are_consistent() {
    for &bijection in &Bijection::ALL {
        let weight = match bijection {
            Bijection::ShredStretch => 24,
            _ => 25,
        };
        let text = run(&["sampler.seed:8"], &sample_args(bijection, weight, true)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["bijection"], bijection.name());
        assert_eq!(json["weight"], weight);
        let sum = |key: &str| -> u64 {
            json[key].as_array().unwrap().iter().map(|x| x.as_u64().unwrap()).sum()
        };
        assert_eq!(sum("input"), weight);
        assert_eq!(sum("output"), weight);
    }
}

#[test]
fn text_diagram_follows_config() {
    let args = CliArgs {
        bijection: Bijection::Glaisher,
        input: Input::Parts("3,1".parse().unwrap()),
        seed: None,
        format: OutputFormat::Text,
    };
    let english = run(&["diagram.cell:o"], &args).unwrap();
    assert!(english.contains("input: [3, 1] (weight 4)\nooo\no\n"), "{}", english);

    let french = run(&["diagram:{cell: o, notation: french}"], &args).unwrap();
    assert!(french.contains("input: [3, 1] (weight 4)\no\nooo\n"), "{}", french);
}

#[test]
fn cli_limits_come_from_config() {
    let args = sample_args(Bijection::Glaisher, 150, false);
    assert!(run(&[], &args).is_err());
    let text = run(&["cli.max-weight:200", "sampler.seed:2"], &args).unwrap();
    assert!(text.contains("\"weight\""));

    assert!(run(&["cli:{min-weight: 5, max-weight: 4}"], &args).is_err());
}

#[test]
fn attempt_cap_reports_timeout() {
    // a cap of one attempt can't sample an exact weight every time
    let mut failures = 0;
    for seed in 0..40 {
        let config = format!("sampler:{{seed: {}, max-attempts: 1}}", seed);
        if let Err(e) = run(&[&config], &sample_args(Bijection::StrikeSlip, 60, true)) {
            assert!(e.to_string().contains("attempt"), "{}", e);
            failures += 1;
        }
    }
    assert!(failures > 0);
}
