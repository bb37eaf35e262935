use crate::error::{CliError, Result};
use protscan::core::similarity::CaseMode;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileIsoelectricConfig {
    pub start_ph: Option<f64>,
    pub step: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSimilarityConfig {
    pub case: Option<CaseMode>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileChargeConfig {
    pub ph: Option<f64>,
}

/// The TOML configuration file. Every section and key is optional.
///
/// ```toml
/// [isoelectric]
/// start-ph = 7.0
/// step = 0.1
/// tolerance = 0.01
/// max-iterations = 100
///
/// [similarity]
/// case = "sensitive"
///
/// [charge]
/// ph = 7.4
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub isoelectric: Option<FileIsoelectricConfig>,
    pub similarity: Option<FileSimilarityConfig>,
    pub charge: Option<FileChargeConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::Unreadable {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
