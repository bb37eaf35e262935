use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::records::RecordError;
use crate::core::models::protein::ProteinError;
use crate::core::models::sequence::ValidationError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Protein cannot be absent from a comparison")]
    NilProtein,

    #[error("Protein '{id}' has an empty sequence")]
    EmptySequence { id: String },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Protein(#[from] ProteinError),

    #[error("Comparison failed: {0}")]
    Comparison(#[from] ComparisonError),

    #[error("Protein '{id}' already exists")]
    ProteinExists { id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Records(#[from] RecordError),
}
