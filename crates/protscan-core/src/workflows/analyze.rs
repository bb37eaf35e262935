use crate::core::models::protein::Protein;
use crate::core::models::sequence::ValidationError;
use crate::engine::error::EngineError;
use crate::engine::service::SequenceAnalyzer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceAnalysis {
    pub length: usize,
    pub molecular_weight: f64,
    pub isoelectric_point: f64,
    pub net_charge_7_4: f64,
    pub hydrophobicity: f64,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub protein_1: String,
    pub protein_2: String,
    pub similarity: f64,
    pub compared_at: DateTime<Utc>,
}

/// Validates an ad-hoc sequence and computes all of its properties. A sequence made only
/// of empty fragments is rejected as empty.
#[instrument(skip_all, name = "analyze_sequence", fields(fragments = fragments.len()))]
pub fn analyze<A: SequenceAnalyzer + ?Sized>(
    fragments: &[String],
    analyzer: &A,
) -> Result<SequenceAnalysis, EngineError> {
    analyzer.validate(fragments)?;

    let full = fragments.concat();
    if full.is_empty() {
        return Err(ValidationError::EmptySequence.into());
    }

    let properties = analyzer.properties(&full);
    debug!(length = full.len(), "Sequence analyzed.");
    Ok(SequenceAnalysis {
        length: full.len(),
        molecular_weight: properties.molecular_weight,
        isoelectric_point: properties.isoelectric_point,
        net_charge_7_4: properties.net_charge_7_4,
        hydrophobicity: properties.hydrophobicity,
        analyzed_at: Utc::now(),
    })
}

#[instrument(skip_all, name = "compare_proteins", fields(a = a.id(), b = b.id()))]
pub fn compare<A: SequenceAnalyzer + ?Sized>(
    a: &Protein,
    b: &Protein,
    analyzer: &A,
) -> Result<ComparisonReport, EngineError> {
    let similarity = analyzer.compare(Some(a), Some(b))?;
    Ok(ComparisonReport {
        protein_1: a.id().to_string(),
        protein_2: b.id().to_string(),
        similarity,
        compared_at: Utc::now(),
    })
}
