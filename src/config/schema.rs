use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

/// Top-level config file schema.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Scoring weights and recommendation policy. Missing fields inside this
    /// block fall back to their defaults individually.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Where the account book lives. The `--accounts` flag wins over this,
    /// and a plain `accounts.json` in the working directory is the last
    /// resort.
    #[serde(default)]
    pub accounts_file: Option<PathBuf>,

    /// Where score history is written. Defaults next to the config file.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}
