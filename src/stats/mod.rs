//! Alignment statistics
//!
//! Derived metrics over an alignment result (percent identity, query
//! coverage, alignment length) and Karlin-Altschul expectation values. All
//! functions here are pure; corpus aggregates are passed in by the caller.

pub mod karlin;
pub mod metrics;

pub use karlin::{evalue, KarlinParams};
pub use metrics::{alignment_length, percent_identity, query_coverage};
