//! # Core Module
//!
//! The pure analysis core: sequence models, the alphabet validator, composition and
//! charge scoring, the isoelectric point solver, sequence similarity and dataset record
//! I/O.
//!
//! Nothing in this module holds shared state. Every scorer allocates only call-local
//! buffers, so all of them can be called concurrently from any number of threads.
//!
//! - **Models** ([`models`]) - Residues, fragmented sequences and the protein aggregate
//! - **Scoring** ([`properties`]) - Molecular weight, hydropathy, net charge, pI
//! - **Similarity** ([`similarity`]) - Normalized Levenshtein similarity
//! - **Dataset I/O** ([`io`]) - CSV protein records

pub mod io;
pub mod models;
pub mod properties;
pub mod similarity;
