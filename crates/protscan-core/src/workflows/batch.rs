use super::register::{self, ProteinDraft};
use crate::core::io::records::ProteinRecord;
use crate::core::models::protein::Protein;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::service::SequenceAnalyzer;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument};

/// A dataset row that could not be turned into a protein.
#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based index of the row among the data rows.
    pub index: usize,
    pub id: Option<String>,
    pub error: EngineError,
}

#[derive(Debug, Default)]
pub struct BatchResult {
    pub proteins: Vec<Protein>,
    pub failures: Vec<BatchFailure>,
}

/// Flat, CSV-friendly view of a scored protein.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinSummary {
    pub id: String,
    pub name: String,
    pub length: Option<usize>,
    pub molecular_weight: Option<f64>,
    pub isoelectric_point: Option<f64>,
    pub net_charge_7_4: Option<f64>,
    pub hydrophobicity: Option<f64>,
}

impl From<&Protein> for ProteinSummary {
    fn from(protein: &Protein) -> Self {
        let derived = protein.derived();
        Self {
            id: protein.id().to_string(),
            name: protein.name().to_string(),
            length: derived.length,
            molecular_weight: derived.molecular_weight,
            isoelectric_point: derived.isoelectric_point,
            net_charge_7_4: derived.net_charge_7_4,
            hydrophobicity: derived.hydrophobicity,
        }
    }
}

/// Scores every record independently and in parallel. Unlike
/// [`register::bulk_create`], a bad row does not abort the batch; it is reported in
/// [`BatchResult::failures`] and left to the caller to log. Both lists keep the input
/// order. When rows were skipped, a count message is reported after the phase ends.
#[instrument(skip_all, name = "batch_workflow", fields(records = records.len()))]
pub fn run<A: SequenceAnalyzer + ?Sized>(
    records: Vec<ProteinRecord>,
    analyzer: &A,
    reporter: &ProgressReporter,
) -> BatchResult {
    reporter.report(Progress::PhaseStart {
        name: "Scoring proteins",
    });
    reporter.report(Progress::ItemsStart {
        total: records.len() as u64,
    });

    let outcomes: Vec<(usize, Option<String>, Result<Protein, EngineError>)> = records
        .into_par_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record.id.clone();
            let result = register::create(ProteinDraft::from(record), analyzer);
            reporter.report(Progress::ItemDone);
            (index, id, result)
        })
        .collect();

    reporter.report(Progress::ItemsFinish);

    let mut result = BatchResult::default();
    for (index, id, outcome) in outcomes {
        match outcome {
            Ok(protein) => result.proteins.push(protein),
            Err(error) => result.failures.push(BatchFailure { index, id, error }),
        }
    }

    reporter.report(Progress::PhaseFinish);
    if !result.failures.is_empty() {
        reporter.message(|| format!("{} row(s) skipped", result.failures.len()));
    }
    info!(
        "Batch finished: {} scored, {} skipped.",
        result.proteins.len(),
        result.failures.len()
    );
    result
}
