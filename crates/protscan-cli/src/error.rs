use protscan::core::io::records::RecordError;
use protscan::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Everything a `protscan` subcommand can fail with. Library errors pass through
/// unchanged; file problems keep the offending path.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid analysis settings: {0}")]
    Config(String),

    #[error("Cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Cannot write results: {0}")]
    Records(#[from] RecordError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use protscan::core::models::sequence::ValidationError;

    #[test]
    fn messages_name_the_failing_input() {
        let err = CliError::Unreadable {
            path: PathBuf::from("data/proteins.csv"),
            source: anyhow::anyhow!("row on line 4 is short"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read 'data/proteins.csv': row on line 4 is short"
        );
    }

    #[test]
    fn engine_errors_pass_through() {
        let err = CliError::from(EngineError::from(ValidationError::EmptySequence));
        assert_eq!(err.to_string(), ValidationError::EmptySequence.to_string());
    }
}
