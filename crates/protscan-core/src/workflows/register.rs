use crate::core::io::records::ProteinRecord;
use crate::core::models::protein::{AnnotationField, Annotations, Protein};
use crate::core::models::sequence::ValidationError;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::service::SequenceAnalyzer;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Everything needed to create a protein.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinDraft {
    pub id: String,
    pub name: String,
    pub fragments: Vec<String>,
    pub annotations: Annotations,
    pub interactor_count: Option<u32>,
}

/// A partial update. `None` fields are left untouched; annotation fields that are `Some`
/// overwrite the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinPatch {
    pub name: Option<String>,
    pub fragments: Option<Vec<String>>,
    pub annotations: Annotations,
    pub interactor_count: Option<u32>,
}

impl From<ProteinRecord> for ProteinDraft {
    fn from(record: ProteinRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            fragments: record.sequence.fragments().to_vec(),
            annotations: Annotations {
                gene: record.gene,
                taxonomy: record.taxonomy,
                cellular_component: record.cellular_component,
                domain: record.domain,
                family: record.family,
                biological_process: record.biological_process,
                function: record.function,
            },
            interactor_count: record.interactor_count,
        }
    }
}

const ANNOTATION_FIELDS: [AnnotationField; 7] = [
    AnnotationField::Gene,
    AnnotationField::Taxonomy,
    AnnotationField::CellularComponent,
    AnnotationField::Domain,
    AnnotationField::Family,
    AnnotationField::BiologicalProcess,
    AnnotationField::Function,
];

fn apply_annotations(protein: &mut Protein, annotations: &Annotations) {
    for field in ANNOTATION_FIELDS {
        if let Some(value) = annotations.get(field) {
            protein.annotate(field, value);
        }
    }
}

/// Rejects sequences whose fragments are all empty. The alphabet validator accepts
/// them, but there is nothing to score.
fn ensure_residues(fragments: &[String]) -> Result<(), ValidationError> {
    if fragments.iter().all(String::is_empty) {
        return Err(ValidationError::EmptySequence);
    }
    Ok(())
}

fn recompute_properties<A: SequenceAnalyzer + ?Sized>(protein: &mut Protein, analyzer: &A) {
    let properties = analyzer.properties(&protein.full_sequence());
    protein.apply_properties(properties);
}

/// Validates a draft, builds the protein and fills in every derived property.
pub fn create<A: SequenceAnalyzer + ?Sized>(
    draft: ProteinDraft,
    analyzer: &A,
) -> Result<Protein, EngineError> {
    analyzer.validate(&draft.fragments)?;
    ensure_residues(&draft.fragments)?;

    let mut protein = Protein::new(&draft.id, &draft.name, draft.fragments)?;
    apply_annotations(&mut protein, &draft.annotations);
    if let Some(count) = draft.interactor_count {
        protein.set_interactor_count(count);
    }
    recompute_properties(&mut protein, analyzer);

    debug!(id = protein.id(), length = ?protein.derived().length, "Created protein.");
    Ok(protein)
}

/// Applies a patch atomically: the changes are made on a copy, and `protein` is only
/// replaced if every step succeeds. A new sequence recomputes all derived properties.
pub fn update<A: SequenceAnalyzer + ?Sized>(
    protein: &mut Protein,
    patch: ProteinPatch,
    analyzer: &A,
) -> Result<(), EngineError> {
    let mut candidate = protein.clone();

    if let Some(name) = &patch.name {
        candidate.set_name(name)?;
    }
    if let Some(fragments) = patch.fragments {
        analyzer.validate(&fragments)?;
        ensure_residues(&fragments)?;
        candidate.replace_sequence(fragments)?;
        recompute_properties(&mut candidate, analyzer);
    }
    apply_annotations(&mut candidate, &patch.annotations);
    if let Some(count) = patch.interactor_count {
        candidate.set_interactor_count(count);
    }

    *protein = candidate;
    debug!(id = protein.id(), "Updated protein.");
    Ok(())
}

/// Creates every draft or none. Drafts are processed in parallel; the result keeps the
/// input order. Repeated ids within the batch are rejected before any scoring.
#[instrument(skip_all, name = "bulk_create", fields(count = drafts.len()))]
pub fn bulk_create<A: SequenceAnalyzer + ?Sized>(
    drafts: Vec<ProteinDraft>,
    analyzer: &A,
    reporter: &ProgressReporter,
) -> Result<Vec<Protein>, EngineError> {
    if drafts.is_empty() {
        return Err(EngineError::InvalidInput("no proteins to create".to_string()));
    }

    {
        let mut seen = HashSet::with_capacity(drafts.len());
        for draft in &drafts {
            let id = draft.id.trim();
            if !seen.insert(id) {
                return Err(EngineError::ProteinExists { id: id.to_string() });
            }
        }
    }

    reporter.report(Progress::ItemsStart {
        total: drafts.len() as u64,
    });
    let proteins = drafts
        .into_par_iter()
        .map(|draft| {
            let result = create(draft, analyzer);
            reporter.report(Progress::ItemDone);
            result
        })
        .collect::<Result<Vec<_>, _>>();
    reporter.report(Progress::ItemsFinish);

    let proteins = proteins?;
    info!("Created {} protein(s).", proteins.len());
    Ok(proteins)
}
