use super::file::FileConfig;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use protscan::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use std::path::Path;

/// Resolves the analysis settings: built-in defaults, then the config file, then each
/// `--set KEY=VALUE` in order.
pub fn build_config(config_path: Option<&Path>, set_values: &[String]) -> Result<AnalysisConfig> {
    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, set_values)?;

    let mut builder = AnalysisConfigBuilder::new();

    if let Some(iso) = file_config.isoelectric {
        if let Some(v) = iso.start_ph {
            builder = builder.start_ph(v);
        }
        if let Some(v) = iso.step {
            builder = builder.ph_step(v);
        }
        if let Some(v) = iso.tolerance {
            builder = builder.tolerance(v);
        }
        if let Some(v) = iso.max_iterations {
            builder = builder.max_iterations(v);
        }
    }
    if let Some(mode) = file_config.similarity.and_then(|s| s.case) {
        builder = builder.similarity_case(mode);
    }
    if let Some(ph) = file_config.charge.and_then(|c| c.ph) {
        builder = builder.charge_ph(ph);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

fn config_error(e: ParseError) -> CliError {
    CliError::Config(e.to_string())
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = parser::parse_key_value(kv_pair).map_err(config_error)?;
        let float = || parser::parse_value::<f64>(key, value, "float").map_err(config_error);

        match key {
            "isoelectric.start-ph" => {
                config
                    .isoelectric
                    .get_or_insert_with(Default::default)
                    .start_ph = Some(float()?);
            }
            "isoelectric.step" => {
                config.isoelectric.get_or_insert_with(Default::default).step = Some(float()?);
            }
            "isoelectric.tolerance" => {
                config
                    .isoelectric
                    .get_or_insert_with(Default::default)
                    .tolerance = Some(float()?);
            }
            "isoelectric.max-iterations" => {
                config
                    .isoelectric
                    .get_or_insert_with(Default::default)
                    .max_iterations = Some(
                    parser::parse_value(key, value, "integer").map_err(config_error)?,
                );
            }
            "similarity.case" => {
                config.similarity.get_or_insert_with(Default::default).case =
                    Some(parser::parse_case_mode(value).map_err(config_error)?);
            }
            "charge.ph" => {
                config.charge.get_or_insert_with(Default::default).ph = Some(float()?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
