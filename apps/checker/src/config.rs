// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checker configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Context;
use topo_explorer_analysis::AnalysisConfig;

/// Checker configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Also require pairwise union closure when validating spaces.
    pub strict: bool,
    /// JSON file with analysis tolerances, if any.
    pub analysis_config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            strict: std::env::var("TOPO_CHECK_STRICT")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            analysis_config_path: std::env::var_os("TOPO_CHECK_CONFIG")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }

    /// The analysis settings: the configured file if set, defaults otherwise.
    pub fn analysis(&self) -> anyhow::Result<AnalysisConfig> {
        let Some(path) = &self.analysis_config_path else {
            return Ok(AnalysisConfig::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading analysis config {}", path.display()))?;
        AnalysisConfig::from_json(&json)
            .with_context(|| format!("invalid analysis config {}", path.display()))
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
