//! # Workflows Module
//!
//! Use cases built on the engine: each function validates its input through the
//! analyzer before any derived value is trusted, and writes scorer output back onto
//! proteins.
//!
//! - **Registration** ([`register`]) - Create, update and bulk-create proteins
//! - **Analysis** ([`analyze`]) - Ad-hoc sequence analysis and protein comparison
//! - **Batch** ([`batch`]) - Parallel, failure-tolerant scoring of dataset records

pub mod analyze;
pub mod batch;
pub mod register;
