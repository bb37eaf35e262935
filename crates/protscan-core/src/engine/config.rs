use crate::core::properties::charge::PHYSIOLOGICAL_PH;
use crate::core::properties::isoelectric::IsoelectricParams;
use crate::core::similarity::CaseMode;
use thiserror::Error;

/// Upper bound on isoelectric search iterations.
pub const MAX_ISOELECTRIC_ITERATIONS: usize = 100_000;
/// Largest allowed pH increment per isoelectric search iteration.
pub const MAX_PH_STEP: f64 = 1.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub isoelectric: IsoelectricParams,
    pub similarity_case: CaseMode,
    /// pH at which the reported net charge is evaluated.
    pub charge_ph: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            isoelectric: IsoelectricParams::default(),
            similarity_case: CaseMode::default(),
            charge_ph: PHYSIOLOGICAL_PH,
        }
    }
}

/// Builds an [`AnalysisConfig`]; unset values keep their defaults.
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    start_ph: Option<f64>,
    ph_step: Option<f64>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
    similarity_case: Option<CaseMode>,
    charge_ph: Option<f64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_ph(mut self, ph: f64) -> Self {
        self.start_ph = Some(ph);
        self
    }
    pub fn ph_step(mut self, step: f64) -> Self {
        self.ph_step = Some(step);
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }
    pub fn similarity_case(mut self, mode: CaseMode) -> Self {
        self.similarity_case = Some(mode);
        self
    }
    pub fn charge_ph(mut self, ph: f64) -> Self {
        self.charge_ph = Some(ph);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let defaults = AnalysisConfig::default();

        let start_ph = check_ph("start_ph", self.start_ph)?;
        let charge_ph = check_ph("charge_ph", self.charge_ph)?;
        let step = check_positive("ph_step", self.ph_step)?;
        if let Some(step) = step.filter(|&s| s > MAX_PH_STEP) {
            return Err(ConfigError::InvalidParameter {
                name: "ph_step",
                reason: format!("{} exceeds the maximum step of {}", step, MAX_PH_STEP),
            });
        }
        let tolerance = check_positive("tolerance", self.tolerance)?;
        if let Some(n) = self.max_iterations.filter(|&n| n > MAX_ISOELECTRIC_ITERATIONS) {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    n, MAX_ISOELECTRIC_ITERATIONS
                ),
            });
        }

        Ok(AnalysisConfig {
            isoelectric: IsoelectricParams {
                start_ph: start_ph.unwrap_or(defaults.isoelectric.start_ph),
                step: step.unwrap_or(defaults.isoelectric.step),
                tolerance: tolerance.unwrap_or(defaults.isoelectric.tolerance),
                max_iterations: self
                    .max_iterations
                    .unwrap_or(defaults.isoelectric.max_iterations),
            },
            similarity_case: self.similarity_case.unwrap_or(defaults.similarity_case),
            charge_ph: charge_ph.unwrap_or(defaults.charge_ph),
        })
    }
}

fn check_ph(name: &'static str, value: Option<f64>) -> Result<Option<f64>, ConfigError> {
    match value {
        Some(ph) if !(0.0..=14.0).contains(&ph) => Err(ConfigError::InvalidParameter {
            name,
            reason: format!("pH {} is outside [0, 14]", ph),
        }),
        other => Ok(other),
    }
}

fn check_positive(name: &'static str, value: Option<f64>) -> Result<Option<f64>, ConfigError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ConfigError::InvalidParameter {
            name,
            reason: format!("{} must be a positive finite number", v),
        }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_defaults() {
        let config = AnalysisConfigBuilder::new().build().unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.isoelectric.start_ph, 7.0);
        assert_eq!(config.isoelectric.step, 0.1);
        assert_eq!(config.isoelectric.tolerance, 0.01);
        assert_eq!(config.isoelectric.max_iterations, 100);
        assert_eq!(config.charge_ph, 7.4);
        assert_eq!(config.similarity_case, CaseMode::Sensitive);
    }

    #[test]
    fn builder_overrides_individual_values() {
        let config = AnalysisConfigBuilder::new()
            .max_iterations(500)
            .ph_step(0.01)
            .similarity_case(CaseMode::Insensitive)
            .build()
            .unwrap();
        assert_eq!(config.isoelectric.max_iterations, 500);
        assert_eq!(config.isoelectric.step, 0.01);
        assert_eq!(config.isoelectric.start_ph, 7.0);
        assert_eq!(config.similarity_case, CaseMode::Insensitive);
    }

    #[test]
    fn out_of_range_ph_is_rejected() {
        let err = AnalysisConfigBuilder::new().start_ph(15.0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "start_ph",
                ..
            }
        ));
        assert!(AnalysisConfigBuilder::new().charge_ph(-1.0).build().is_err());
        assert!(AnalysisConfigBuilder::new().charge_ph(f64::NAN).build().is_err());
    }

    #[test]
    fn non_positive_step_and_tolerance_are_rejected() {
        assert!(AnalysisConfigBuilder::new().ph_step(0.0).build().is_err());
        assert!(AnalysisConfigBuilder::new().tolerance(-0.1).build().is_err());
        assert!(AnalysisConfigBuilder::new().tolerance(f64::INFINITY).build().is_err());
    }

    #[test]
    fn runaway_search_parameters_are_rejected() {
        let err = AnalysisConfigBuilder::new()
            .max_iterations(usize::MAX)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "max_iterations",
                ..
            }
        ));
        assert!(AnalysisConfigBuilder::new().ph_step(1.5).build().is_err());

        let config = AnalysisConfigBuilder::new()
            .max_iterations(MAX_ISOELECTRIC_ITERATIONS)
            .ph_step(MAX_PH_STEP)
            .build()
            .unwrap();
        assert_eq!(config.isoelectric.max_iterations, MAX_ISOELECTRIC_ITERATIONS);
        assert_eq!(config.isoelectric.step, MAX_PH_STEP);
    }
}
