//! # Properties Module
//!
//! Table-driven biochemical scoring over a full (concatenated) sequence. Every function
//! here is pure and tolerates unrecognized characters by skipping them, so callers must
//! validate first if they intend to trust the numbers.
//!
//! - [`composition`] - Molecular weight, GRAVY hydropathy and residue counts
//! - [`charge`] - Henderson-Hasselbalch net charge at a given pH
//! - [`isoelectric`] - Fixed-step isoelectric point search
//! - [`tables`] - Per-residue constants

pub mod charge;
pub mod composition;
pub mod isoelectric;
pub mod tables;

pub use charge::{PHYSIOLOGICAL_PH, net_charge};
pub use composition::{ResidueComposition, hydrophobicity, molecular_weight};
pub use isoelectric::{IsoelectricParams, isoelectric_point, isoelectric_point_with};
