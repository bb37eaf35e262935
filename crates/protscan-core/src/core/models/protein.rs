use super::sequence::{Sequence, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProteinError {
    #[error("Protein ID cannot be empty")]
    InvalidId,

    #[error("Protein name cannot be empty")]
    InvalidName,

    #[error("Invalid protein sequence: {0}")]
    Sequence(#[from] ValidationError),
}

/// Free-text descriptors carried alongside a protein. None of them influence scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationField {
    Gene,
    Taxonomy,
    CellularComponent,
    Domain,
    Family,
    BiologicalProcess,
    Function,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub gene: Option<String>,
    pub taxonomy: Option<String>,
    pub cellular_component: Option<String>,
    pub domain: Option<String>,
    pub family: Option<String>,
    pub biological_process: Option<String>,
    pub function: Option<String>,
}

impl Annotations {
    fn slot_mut(&mut self, field: AnnotationField) -> &mut Option<String> {
        match field {
            AnnotationField::Gene => &mut self.gene,
            AnnotationField::Taxonomy => &mut self.taxonomy,
            AnnotationField::CellularComponent => &mut self.cellular_component,
            AnnotationField::Domain => &mut self.domain,
            AnnotationField::Family => &mut self.family,
            AnnotationField::BiologicalProcess => &mut self.biological_process,
            AnnotationField::Function => &mut self.function,
        }
    }

    pub fn get(&self, field: AnnotationField) -> Option<&str> {
        let slot = match field {
            AnnotationField::Gene => &self.gene,
            AnnotationField::Taxonomy => &self.taxonomy,
            AnnotationField::CellularComponent => &self.cellular_component,
            AnnotationField::Domain => &self.domain,
            AnnotationField::Family => &self.family,
            AnnotationField::BiologicalProcess => &self.biological_process,
            AnnotationField::Function => &self.function,
        };
        slot.as_deref()
    }
}

/// Properties derived from the current sequence. `None` means "not computed for the
/// current sequence"; every sequence replacement resets all of them except `length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedProperties {
    pub length: Option<usize>,
    pub molecular_weight: Option<f64>,
    pub isoelectric_point: Option<f64>,
    pub net_charge_7_4: Option<f64>,
    pub hydrophobicity: Option<f64>,
}

/// Scorer output for one sequence, as written back by the use-case layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    pub molecular_weight: f64,
    pub isoelectric_point: f64,
    pub net_charge_7_4: f64,
    pub hydrophobicity: f64,
}

/// A protein entry: an externally identified sequence plus its descriptors and derived
/// properties. Single-owner; callers serialize concurrent mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Protein {
    id: String,
    name: String,
    sequence: Sequence,
    annotations: Annotations,
    interactor_count: Option<u32>,
    derived: DerivedProperties,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl Protein {
    pub fn new<I, S>(id: &str, name: &str, fragments: I) -> Result<Self, ProteinError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.trim();
        if id.is_empty() {
            return Err(ProteinError::InvalidId);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ProteinError::InvalidName);
        }
        let sequence = Sequence::new(fragments)?;

        let now = Utc::now();
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            derived: DerivedProperties {
                length: Some(sequence.len()),
                ..Default::default()
            },
            sequence,
            annotations: Annotations::default(),
            interactor_count: None,
            created: now,
            updated: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn full_sequence(&self) -> String {
        self.sequence.full()
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn interactor_count(&self) -> Option<u32> {
        self.interactor_count
    }

    pub fn derived(&self) -> &DerivedProperties {
        &self.derived
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ProteinError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProteinError::InvalidName);
        }
        self.name = name.to_string();
        self.touch();
        Ok(())
    }

    /// Replaces the sequence if the candidate validates; otherwise the protein is left
    /// exactly as it was. On success every derived property except the recomputed length
    /// is cleared, since it described the previous sequence.
    pub fn replace_sequence<I, S>(&mut self, fragments: I) -> Result<(), ProteinError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidate = Sequence::new(fragments)?;
        self.derived = DerivedProperties {
            length: Some(candidate.len()),
            ..Default::default()
        };
        self.sequence = candidate;
        self.touch();
        Ok(())
    }

    /// Records scorer output for the current sequence. A non-positive molecular weight is
    /// not stored.
    pub fn apply_properties(&mut self, properties: PropertySet) {
        if properties.molecular_weight > 0.0 {
            self.derived.molecular_weight = Some(properties.molecular_weight);
        }
        self.derived.isoelectric_point = Some(properties.isoelectric_point);
        self.derived.net_charge_7_4 = Some(properties.net_charge_7_4);
        self.derived.hydrophobicity = Some(properties.hydrophobicity);
        self.touch();
    }

    /// Sets a descriptor. Blank values are ignored and reported as `false`.
    pub fn annotate(&mut self, field: AnnotationField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        *self.annotations.slot_mut(field) = Some(value.to_string());
        self.touch();
        true
    }

    pub fn set_interactor_count(&mut self, count: u32) {
        self.interactor_count = Some(count);
        self.touch();
    }

    // Wall clocks can step backwards; the modification time must not.
    fn touch(&mut self) {
        self.updated = self.updated.max(Utc::now());
    }
}
