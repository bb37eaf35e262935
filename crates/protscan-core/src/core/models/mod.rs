//! # Models Module
//!
//! Value types of the analysis core.
//!
//! - [`residue`] - The 20-letter amino-acid alphabet and its O(1) letter lookup
//! - [`sequence`] - Fragmented sequences and the alphabet validator
//! - [`protein`] - The protein aggregate that owns a sequence and its derived properties

pub mod protein;
pub mod residue;
pub mod sequence;
