/* ************************************************************************ **
** This file is part of ferrers, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

/// Root settings object.
///
/// Every section (and every field) has a default, so the empty mapping is a
/// complete config.  Call `validate` after merging.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub sampler: Sampler,

    #[serde(default)]
    pub engine: Engine,

    #[serde(default)]
    pub cli: Cli,

    #[serde(default)]
    pub diagram: Diagram,
}

/// Settings that passed `Settings::validate`.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Sampler {
    /// Cap on the draws of each rejection loop.  `null` retries forever.
    #[serde(default)]
    pub max_attempts: Option<u64>,

    /// Seed for reproducible sampling.  `null` seeds from the OS.
    ///
    /// The `--seed` flag takes precedence.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Engine {
    /// Use rayon to update the cells of a step in parallel.
    #[serde(default = "_engine__parallel")]
    pub parallel: bool,

    /// Diagrams with fewer cells than this are never processed in parallel.
    #[serde(default = "_engine__parallel_threshold")]
    pub parallel_threshold: usize,
}
fn _engine__parallel() -> bool { true }
fn _engine__parallel_threshold() -> usize { 4096 }

/// Limits on what `-n` accepts.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Cli {
    #[serde(default = "_cli__min_weight")]
    pub min_weight: u64,

    #[serde(default = "_cli__max_weight")]
    pub max_weight: u64,
}
fn _cli__min_weight() -> u64 { 1 }
fn _cli__max_weight() -> u64 { 100 }

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Diagram {
    /// Character drawn for each cell.  (remember to quote `"*"` in YAML)
    #[serde(default = "_diagram__cell")]
    pub cell: char,

    #[serde(default)]
    pub notation: Notation,
}
fn _diagram__cell() -> char { '*' }

/// Which way up to draw a Ferrers diagram.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// Largest row first.
    English,
    /// Largest row last.
    French,
}

// --------------------------------------------------------

impl Default for Engine {
    fn default() -> Self
    { Engine { parallel: _engine__parallel(), parallel_threshold: _engine__parallel_threshold() } }
}

impl Default for Cli {
    fn default() -> Self
    { Cli { min_weight: _cli__min_weight(), max_weight: _cli__max_weight() } }
}

impl Default for Diagram {
    fn default() -> Self
    { Diagram { cell: _diagram__cell(), notation: Notation::default() } }
}

impl Default for Notation {
    fn default() -> Self { Notation::English }
}
