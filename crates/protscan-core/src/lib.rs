//! # Protscan Core Library
//!
//! Deterministic protein sequence analysis: alphabet validation, composition scoring
//! (molecular weight, GRAVY), net charge and isoelectric point, and normalized
//! Levenshtein similarity between sequences.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Pure value types (`Sequence`, `Protein`) and
//!   stateless scorers driven by fixed per-residue tables. Safe to call from any thread.
//!
//! - **[`engine`]: The Service Layer.** Configuration, the `SequenceAnalyzer` seam
//!   implemented by `ProteinService`, error taxonomy, filtering and statistics.
//!
//! - **[`workflows`]: The Public API.** Use cases that tie the two together: creating and
//!   updating proteins with their derived properties, ad-hoc sequence analysis,
//!   comparison, and parallel batch processing of datasets.

pub mod core;
pub mod engine;
pub mod workflows;
