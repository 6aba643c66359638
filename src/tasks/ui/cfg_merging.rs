/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use ferrers_tasks_config::{Settings, ValidatedSettings, YamlRead};
use serde_yaml::{Value, Mapping};
use std::fs::File;
use std::path::{Path, PathBuf};

/// A list of config yamls that can be merged into a single effective config.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources(Vec<Config>);

#[derive(Debug, Clone)]
pub(crate) struct Config {
    source: ConfigSource,
    yaml: Value,
}

#[derive(Debug, Clone, PartialEq)]
enum ConfigSource {
    File(PathBuf),
    Argument,
}

impl Config {
    /// A `-c` argument: a literal if it contains a colon, else a file path.
    pub(crate) fn resolve_from_arg(s: &str) -> FailResult<Config>
    {
        // no escape is provided for a path containing ':'
        match s.find(':') {
            Some(colon) => lit_from_arg(&s[..colon], &s[colon + 1..]),
            None => read_file_from_arg(s.as_ref()),
        }
    }
}

// `a.b.c:YAML` means `{a: {b: {c: YAML}}}`; an empty key path means the root.
fn lit_from_arg(keys: &str, yaml: &str) -> FailResult<Config>
{
    let keys: Vec<&str> = match keys {
        "" => vec![],
        keys => keys.split('.').collect(),
    };
    let value = YamlRead::from_reader(yaml.as_bytes())?;
    Ok(Config { yaml: make_nested_mapping(&keys, value), source: ConfigSource::Argument })
}

fn read_file_from_arg(path: &Path) -> FailResult<Config>
{
    let path = path.canonicalize()
        .map_err(|e| format_err!("{}: {}", path.display(), e))?;
    let file = File::open(&path)
        .map_err(|e| format_err!("{}: {}", path.display(), e))?;

    let yaml = YamlRead::from_reader(file)?;
    Ok(Config { yaml, source: ConfigSource::File(path) })
}

fn make_nested_mapping(path: &[&str], mut value: Value) -> Value
{
    for &key in path.iter().rev() {
        let mut mapping = Mapping::new();
        mapping.insert(Value::String(key.into()), value);
        value = Value::Mapping(mapping);
    }
    value
}

impl ConfigSources {
    /// Construct from the values given to `--config`, in order.
    ///
    /// Files are read and parsed immediately.
    pub fn resolve_from_args<As>(args: As) -> FailResult<Self>
    where
        As: IntoIterator,
        As::Item: AsRef<str>,
    {
        let mut out = vec![];
        for arg in args {
            let config = Config::resolve_from_arg(arg.as_ref())?;
            match &config.source {
                ConfigSource::File(path) => debug!("Read config file {}", path.display()),
                ConfigSource::Argument => debug!("Read config literal {:?}", arg.as_ref()),
            }
            out.push(config);
        }
        Ok(ConfigSources(out))
    }

    pub fn len(&self) -> usize
    { self.0.len() }

    pub fn is_empty(&self) -> bool
    { self.0.is_empty() }

    pub fn into_effective_yaml(self) -> Value
    {
        let empty = Value::Mapping(Default::default());
        self.0.into_iter()
            .fold(empty, |a, b| dumb_config_merge(a, b.yaml))
    }

    /// Merge, deserialize (warning about unused keys) and validate.
    pub fn into_settings(self) -> FailResult<ValidatedSettings>
    {
        let yaml = self.into_effective_yaml();
        Ok(Settings::from_value(yaml)?.validate()?)
    }
}

/// Merges yaml values independent of the type they will be deserialized as.
///
/// Given two mappings, it takes the union of their keys and recursively merges
/// their intersection.  Given any other two values, it prefers `b`.
fn dumb_config_merge(a: Value, b: Value) -> Value
{
    match (a, b) {
        (Value::Mapping(mut a), Value::Mapping(b)) => {
            for (key, b_value) in b {
                let value = match a.remove(&key) {
                    None => b_value,
                    Some(a_value) => dumb_config_merge(a_value, b_value),
                };
                a.insert(key, value);
            }
            Value::Mapping(a)
        },
        (_, b) => b,
    }
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    macro_rules! m { ($($arg:tt)*) => { Value::Mapping(vec![$($arg)*].into_iter().collect()) }; }

    #[test]
    fn literal_args() {
        let expected = m!{ ("sampler".into(), m!{ ("max-attempts".into(), 42.into()) }) };
        for arg in &[
            ":{sampler: {max-attempts: 42}}",
            ": {sampler: {max-attempts: 42}}",
            "sampler:{max-attempts: 42}",
            "sampler.max-attempts:42",
            "sampler.max-attempts: 42",
        ] {
            assert_eq!(Config::resolve_from_arg(arg).unwrap().yaml, expected, "{}", arg);
        }
        assert_eq!(Config::resolve_from_arg("cli:{}").unwrap().source, ConfigSource::Argument);
    }

    #[test]
    fn later_sources_win() {
        let sources = ConfigSources::resolve_from_args(&[
            "engine:{parallel: false, parallel-threshold: 10}",
            "engine.parallel-threshold:20",
            "diagram.cell:o",
        ]).unwrap();
        assert_eq!(sources.len(), 3);

        let settings = sources.into_settings().unwrap().0;
        assert_eq!(settings.engine.parallel, false);
        assert_eq!(settings.engine.parallel_threshold, 20);
        assert_eq!(settings.diagram.cell, 'o');
        assert_eq!(settings.cli.max_weight, 100);
    }

    #[test]
    fn validation_runs_after_merge() {
        let sources = ConfigSources::resolve_from_args(&["cli.min-weight:50", "cli.max-weight:10"]).unwrap();
        assert!(sources.into_settings().is_err());

        let sources = ConfigSources::resolve_from_args(&["cli.min-weight:50", "cli.max-weight:10", "cli.min-weight:5"]).unwrap();
        assert_eq!(sources.into_settings().unwrap().0.cli.min_weight, 5);
    }

    #[test]
    fn missing_file() {
        assert!(ConfigSources::resolve_from_args(&["surely/this/does/not/exist.yaml"]).is_err());
    }

    #[test]
    fn empty_is_default() {
        let settings = ConfigSources::default().into_settings().unwrap().0;
        assert_eq!(settings, Settings::default());
    }
}
