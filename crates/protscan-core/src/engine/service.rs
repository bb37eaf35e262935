use super::config::AnalysisConfig;
use super::error::ComparisonError;
use crate::core::models::protein::{Protein, PropertySet};
use crate::core::models::sequence::{self, ValidationError};
use crate::core::properties::{charge, composition, isoelectric};
use crate::core::similarity;

/// The scoring surface offered to the use-case layer. Implementations must be pure:
/// identical inputs give identical outputs and no call observes another.
pub trait SequenceAnalyzer: Send + Sync {
    fn validate(&self, fragments: &[String]) -> Result<(), ValidationError>;

    fn molecular_weight(&self, sequence: &str) -> f64;

    fn hydrophobicity(&self, sequence: &str) -> f64;

    fn isoelectric_point(&self, sequence: &str) -> f64;

    fn net_charge(&self, sequence: &str) -> f64;

    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Scores the full sequences of two proteins. Either protein may be absent, in which
    /// case the comparison fails with [`ComparisonError::NilProtein`].
    fn compare(&self, a: Option<&Protein>, b: Option<&Protein>) -> Result<f64, ComparisonError> {
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(ComparisonError::NilProtein),
        };

        let seq_a = a.full_sequence();
        let seq_b = b.full_sequence();
        for (protein, seq) in [(a, &seq_a), (b, &seq_b)] {
            if seq.is_empty() {
                return Err(ComparisonError::EmptySequence {
                    id: protein.id().to_string(),
                });
            }
        }

        Ok(self.similarity(&seq_a, &seq_b))
    }

    /// All derived numeric properties of one full sequence.
    fn properties(&self, sequence: &str) -> PropertySet {
        PropertySet {
            molecular_weight: self.molecular_weight(sequence),
            isoelectric_point: self.isoelectric_point(sequence),
            net_charge_7_4: self.net_charge(sequence),
            hydrophobicity: self.hydrophobicity(sequence),
        }
    }
}

/// The default analyzer, backed by the table-driven scorers in [`crate::core`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProteinService {
    config: AnalysisConfig,
}

impl ProteinService {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl SequenceAnalyzer for ProteinService {
    fn validate(&self, fragments: &[String]) -> Result<(), ValidationError> {
        sequence::validate(fragments)
    }

    fn molecular_weight(&self, sequence: &str) -> f64 {
        composition::molecular_weight(sequence)
    }

    fn hydrophobicity(&self, sequence: &str) -> f64 {
        composition::hydrophobicity(sequence)
    }

    fn isoelectric_point(&self, sequence: &str) -> f64 {
        isoelectric::isoelectric_point_with(sequence, &self.config.isoelectric)
    }

    fn net_charge(&self, sequence: &str) -> f64 {
        charge::net_charge(sequence, self.config.charge_ph)
    }

    fn similarity(&self, a: &str, b: &str) -> f64 {
        similarity::similarity_with(a, b, self.config.similarity_case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::similarity::CaseMode;
    use crate::engine::config::AnalysisConfigBuilder;

    fn protein(id: &str, fragments: &[&str]) -> Protein {
        Protein::new(id, "Test protein", fragments.iter().copied()).unwrap()
    }

    #[test]
    fn compare_rejects_absent_proteins() {
        let service = ProteinService::default();
        let p = protein("P1", &["MKV"]);
        assert_eq!(
            service.compare(None, Some(&p)),
            Err(ComparisonError::NilProtein)
        );
        assert_eq!(
            service.compare(Some(&p), None),
            Err(ComparisonError::NilProtein)
        );
        assert_eq!(service.compare(None, None), Err(ComparisonError::NilProtein));
    }

    #[test]
    fn compare_rejects_empty_full_sequences() {
        let service = ProteinService::default();
        let full = protein("P1", &["MKV"]);
        let hollow = protein("P2", &["", ""]);
        assert_eq!(
            service.compare(Some(&full), Some(&hollow)),
            Err(ComparisonError::EmptySequence { id: "P2".into() })
        );
    }

    #[test]
    fn compare_delegates_to_similarity_on_concatenated_sequences() {
        let service = ProteinService::default();
        let a = protein("P1", &["MK", "V"]);
        let b = protein("P2", &["M", "KI"]);
        let score = service.compare(Some(&a), Some(&b)).unwrap();
        assert_eq!(score, similarity::similarity("MKV", "MKI"));
        assert_eq!(service.compare(Some(&a), Some(&a)), Ok(1.0));
    }

    #[test]
    fn compare_honours_configured_case_mode() {
        let a = protein("P1", &["mkv"]);
        let b = protein("P2", &["MKV"]);

        let sensitive = ProteinService::default();
        assert_eq!(sensitive.compare(Some(&a), Some(&b)), Ok(0.0));

        let config = AnalysisConfigBuilder::new()
            .similarity_case(CaseMode::Insensitive)
            .build()
            .unwrap();
        let insensitive = ProteinService::new(config);
        assert_eq!(insensitive.compare(Some(&a), Some(&b)), Ok(1.0));
    }

    #[test]
    fn properties_match_the_individual_scorers() {
        let service = ProteinService::default();
        let props = service.properties("MKVLLI");
        assert_eq!(props.molecular_weight, composition::molecular_weight("MKVLLI"));
        assert_eq!(props.hydrophobicity, composition::hydrophobicity("MKVLLI"));
        assert_eq!(props.isoelectric_point, isoelectric::isoelectric_point("MKVLLI"));
        assert_eq!(props.net_charge_7_4, charge::net_charge("MKVLLI", 7.4));
    }

    #[test]
    fn validate_uses_the_alphabet_validator() {
        let service = ProteinService::default();
        assert!(service.validate(&["MKV".to_string()]).is_ok());
        assert_eq!(service.validate(&[]), Err(ValidationError::EmptySequence));
    }
}
