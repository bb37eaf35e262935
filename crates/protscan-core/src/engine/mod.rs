//! # Engine Module
//!
//! Orchestration around the pure analysis core: configuration, the error taxonomy of the
//! use-case layer, the [`service::SequenceAnalyzer`] seam, progress reporting, and
//! selection/summary over collections of proteins.
//!
//! - **Configuration** ([`config`]) - Solver parameters and similarity case policy
//! - **Error Handling** ([`error`]) - Comparison and use-case errors
//! - **Scoring Service** ([`service`]) - The analyzer trait and its default implementation
//! - **Selection** ([`filter`]) - Filtering, sorting and pagination of proteins
//! - **Summaries** ([`stats`]) - Aggregate statistics over proteins
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events

pub mod config;
pub mod error;
pub mod filter;
pub mod progress;
pub mod service;
pub mod stats;
