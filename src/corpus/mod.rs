//! Reference sequence corpus
//!
//! A read-only, filterable view over the enzyme reference collection. The
//! search core consumes the [`CorpusProvider`] trait and never writes through
//! it; [`MemoryCorpus`] is the in-process implementation backing both the CLI
//! and the tests.

pub mod fasta;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reference sequence with its catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeqRecord {
    /// Stable catalog id (e.g. "X0001")
    pub id: String,
    /// External database accession; falls back to the catalog id
    pub accession: String,
    /// Enzyme name / description
    pub name: String,
    /// Host organism
    pub organism: String,
    /// Degradation-capability category tags (e.g. "PET")
    pub tags: Vec<String>,
    /// Amino-acid sequence as stored
    pub residues: String,
    /// Whether a resolved structure is on file
    pub has_structure: bool,
}

/// Predicate applied when loading sequences for a search.
///
/// A record passes when it carries at least one of the requested tags (if a
/// tag set is given) and has a structure (if one is required).
#[derive(Debug, Clone, Default)]
pub struct CorpusFilter {
    pub tags: Option<FxHashSet<String>>,
    pub require_structure: bool,
}

impl CorpusFilter {
    pub fn matches(&self, record: &SeqRecord) -> bool {
        if self.require_structure && !record.has_structure {
            return false;
        }
        match &self.tags {
            Some(tags) => record.tags.iter().any(|t| tags.contains(t)),
            None => true,
        }
    }
}

/// The filtered snapshot handed to one search.
///
/// `total_count` covers the whole corpus regardless of filter;
/// `filtered_count` and `total_residues` describe only the returned subset.
/// `total_residues` feeds the E-value search-space denominator.
#[derive(Debug, Clone)]
pub struct CorpusSlice {
    pub records: Vec<SeqRecord>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub total_residues: u64,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus source unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed corpus record {id}: {reason}")]
    Malformed { id: String, reason: String },
}

/// Read-only sequence source consumed by the search orchestrator.
///
/// Implementations must be safe to share across concurrent searches; nothing
/// mutates through this trait.
pub trait CorpusProvider: Sync {
    fn fetch(&self, filter: &CorpusFilter) -> Result<CorpusSlice, CorpusError>;
}

/// In-memory corpus snapshot.
///
/// The record vector is immutable for the lifetime of any search borrowing
/// it; swapping in new data goes through [`MemoryCorpus::replace_all`], the
/// explicit invalidation point.
#[derive(Debug, Default)]
pub struct MemoryCorpus {
    records: Vec<SeqRecord>,
}

impl MemoryCorpus {
    pub fn new(records: Vec<SeqRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the snapshot wholesale. Requires exclusive access, so no
    /// in-flight search can observe a partially updated corpus.
    pub fn replace_all(&mut self, records: Vec<SeqRecord>) {
        self.records = records;
    }
}

impl CorpusProvider for MemoryCorpus {
    fn fetch(&self, filter: &CorpusFilter) -> Result<CorpusSlice, CorpusError> {
        let records: Vec<SeqRecord> = self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        let filtered_count = records.len();
        let total_residues = records.iter().map(|r| r.residues.len() as u64).sum();
        Ok(CorpusSlice {
            records,
            total_count: self.records.len(),
            filtered_count,
            total_residues,
        })
    }
}
