/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::cmd::{CliArgs, Input, OutputFormat, run_ferrers};
use crate::ui::cfg_merging::ConfigSources;
use crate::ui::logging::GlobalLogger;

use clap::{App, Arg, ArgGroup, ArgMatches};
use ferrers_bijection::Bijection;
use std::ffi::OsStr;
use std::str::FromStr;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

const CONFIG_HELP: &str = "\
    config yaml, provided as either a filepath, or as an embedded literal \
    (via syntax described below). \
    When provided multiple times, the configs are merged, \
    with preference to the values supplied in later arguments. \
    \n\n\
    Literals are written as '--config [NESTED_KEY]:VALID_YAML', \
    where NESTED_KEY is an optional '.'-separated sequence of string keys, \
    and the ':' is a literal colon. When provided, NESTED_KEY constructs a nested \
    mapping (so `--config a.b.c:[2]` is equivalent to `--config :{a: {b: {c: [2]}}}`.\
    \n\n\
    Note that detection of filepaths versus literals is based solely \
    on the presence of a colon.\
";

fn about() -> String
{
    let lines: Vec<_> = {
        Bijection::ALL.iter()
            .map(|b| format!("    {:<16}{}", b.name(), b.description()))
            .collect()
    };
    format!("Sample a partition and push it through a bijection.\n\nBIJECTIONS:\n{}", lines.join("\n"))
}

fn app<'a, 'b>(about: &'b str) -> App<'a, 'b>
{
    App::new("ferrers")
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .args(&[
            Arg::with_name("bijection")
                .required(true)
                .help("which bijection to run (see below)"),
            Arg::with_name("weight")
                .short("n")
                .long("weight")
                .takes_value(true)
                .value_name("WEIGHT")
                .help("sample an input partition with at least this weight"),
            Arg::with_name("exactly")
                .long("exactly")
                .requires("weight")
                .help("make the sampled weight exactly WEIGHT"),
            Arg::with_name("parts")
                .long("parts")
                .takes_value(true)
                .value_name("PARTS")
                .help("use this input partition instead of sampling one (e.g. '4,3,3,1')"),
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .value_name("CONFIG")
                .help(CONFIG_HELP),
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .help("seed for the sampler (overrides sampler.seed)"),
            Arg::with_name("json")
                .long("json")
                .help("write the report as JSON"),
            Arg::with_name("log")
                .long("log")
                .takes_value(true)
                .value_name("FILE")
                .help("also append log messages to this file"),
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log every step"),
        ])
        .group(ArgGroup::with_name("input").args(&["weight", "parts"]).required(true))
}

fn parse_value_of<T>(m: &ArgMatches, name: &str) -> FailResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match m.value_of(name) {
        None => Ok(None),
        Some(s) => match s.parse() {
            Ok(value) => Ok(Some(value)),
            Err(e) => bail!("invalid value {:?} for --{}: {}", s, name, e),
        },
    }
}

fn resolve_args(m: &ArgMatches) -> FailResult<CliArgs>
{Ok({
    let bijection = parse_value_of(m, "bijection")?
        .ok_or_else(|| format_err!("BUG! missing required argument"))?;

    let input = match parse_value_of(m, "parts")? {
        Some(parts) => Input::Parts(parts),
        None => Input::Sample {
            weight: parse_value_of(m, "weight")?
                .ok_or_else(|| format_err!("BUG! clap let neither --weight nor --parts through"))?,
            exactly: m.is_present("exactly"),
        },
    };

    CliArgs {
        bijection,
        input,
        seed: parse_value_of(m, "seed")?,
        format: match m.is_present("json") {
            true => OutputFormat::Json,
            false => OutputFormat::Text,
        },
    }
})}

pub fn ferrers() {
    wrap_result_main(|| {
        let about = about();
        let matches = app(&about).get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        if let Some(path) = matches.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;

        let sources = ConfigSources::resolve_from_args(matches.values_of("config").into_iter().flatten())?;
        let settings = sources.into_settings()?;
        let args = resolve_args(&matches)?;

        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        run_ferrers(&settings, &args, &mut stdout)
    });
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    fn resolve(argv: &[&str]) -> FailResult<CliArgs>
    {
        let about = about();
        let m = app(&about).get_matches_from_safe(argv)?;
        resolve_args(&m)
    }

    #[test]
    fn sample_args() {
        let args = resolve(&["ferrers", "glaisher", "-n", "12", "--exactly", "--seed", "3"]).unwrap();
        assert_eq!(args, CliArgs {
            bijection: Bijection::Glaisher,
            input: Input::Sample { weight: 12, exactly: true },
            seed: Some(3),
            format: OutputFormat::Text,
        });
    }

    #[test]
    fn parts_args() {
        let args = resolve(&["ferrers", "cut-stretch", "--parts", "[4, 3, 3, 1]", "--json"]).unwrap();
        assert_eq!(args.input, Input::Parts("4,3,3,1".parse().unwrap()));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn about_lists_bijections() {
        let about = about();
        for &b in &Bijection::ALL {
            assert!(about.contains(b.description()), "{}", about);
        }
    }

    #[test]
    fn rejected_args() {
        // input is required, and only one kind at a time
        assert!(resolve(&["ferrers", "glaisher"]).is_err());
        assert!(resolve(&["ferrers", "glaisher", "-n", "3", "--parts", "3"]).is_err());
        assert!(resolve(&["ferrers", "glaisher", "--parts", "3", "--exactly"]).is_err());
        assert!(resolve(&["ferrers", "glasher", "-n", "3"]).is_err());
        assert!(resolve(&["ferrers", "glaisher", "-n", "three"]).is_err());
        assert!(resolve(&["ferrers", "glaisher", "--parts", "3,0"]).is_err());
    }
}
