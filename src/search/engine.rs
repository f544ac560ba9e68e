//! Search orchestrator
//!
//! Drives one search through its phases: normalize the query, fetch the
//! filtered corpus snapshot, align every candidate in parallel, derive
//! per-hit metrics, filter on identity, rank and truncate. Holds no state
//! across searches beyond the injected corpus provider.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

use crate::align::{self, AlignmentResult};
use crate::corpus::{CorpusError, CorpusFilter, CorpusProvider, SeqRecord};
use crate::sequence;
use crate::stats::{self, KarlinParams};

/// Phases of one search invocation, in order. `Error` is terminal and only
/// reachable from `Normalizing` (empty query) or the corpus fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Normalizing,
    Aligning,
    Scoring,
    Ranking,
    Done,
    Error,
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SearchPhase::Idle => "idle",
            SearchPhase::Normalizing => "normalizing",
            SearchPhase::Aligning => "aligning",
            SearchPhase::Scoring => "scoring-filtering",
            SearchPhase::Ranking => "ranking",
            SearchPhase::Done => "done",
            SearchPhase::Error => "error",
        };
        f.write_str(name)
    }
}

/// One search request. Immutable for the duration of the call.
///
/// `identity_threshold` is trusted input here; range validation belongs to
/// the boundary layer (CLI argument parsing).
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query_text: String,
    pub category_filter: Option<FxHashSet<String>>,
    pub require_structure: bool,
    pub identity_threshold: f64,
    pub max_results: usize,
    /// Soft wall-clock budget for the alignment phase; when exceeded the
    /// remaining candidates are skipped and the response is marked partial.
    pub deadline: Option<Duration>,
}

impl SearchRequest {
    pub fn new(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            category_filter: None,
            require_structure: false,
            identity_threshold: 30.0,
            max_results: 100,
            deadline: None,
        }
    }
}

/// One ranked alignment hit.
#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    pub id: String,
    pub accession: String,
    pub description: String,
    pub organism: String,
    pub tags: Vec<String>,
    pub raw_score: f64,
    pub query_coverage_pct: f64,
    pub percent_identity: f64,
    pub alignment_length: usize,
    pub e_value: f64,
    pub has_structure: bool,
}

/// Ranked hits plus corpus telemetry for one search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
    pub total_corpus_count: usize,
    pub filtered_corpus_count: usize,
    pub elapsed_ms: f64,
    /// True when the alignment phase hit its deadline and candidates were
    /// skipped; the hits present are still fully scored and ranked.
    pub partial: bool,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("query contains no usable residues")]
    InvalidQuery,
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

/// Alignment of one corpus record, carried into the scoring phase.
struct Candidate {
    result: AlignmentResult,
    target: Vec<u8>,
}

/// The search engine. Constructed per corpus; safe to share across
/// concurrent searches since the provider is read-only.
pub struct SearchOrchestrator<'c> {
    corpus: &'c dyn CorpusProvider,
    params: KarlinParams,
}

impl<'c> SearchOrchestrator<'c> {
    pub fn new(corpus: &'c dyn CorpusProvider) -> Self {
        Self {
            corpus,
            params: KarlinParams::blosum62_gapped(),
        }
    }

    fn enter(&self, phase: SearchPhase) {
        log::debug!("search phase: {phase}");
    }

    /// Run one search to completion.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let started = Instant::now();
        let deadline = request.deadline.map(|d| started + d);

        self.enter(SearchPhase::Normalizing);
        let query = sequence::normalize(&request.query_text);
        if query.is_empty() {
            self.enter(SearchPhase::Error);
            return Err(SearchError::InvalidQuery);
        }
        let query_enc = sequence::encode(&query);

        let filter = CorpusFilter {
            tags: request.category_filter.clone(),
            require_structure: request.require_structure,
        };
        let slice = match self.corpus.fetch(&filter) {
            Ok(slice) => slice,
            Err(e) => {
                self.enter(SearchPhase::Error);
                return Err(e.into());
            }
        };
        log::debug!(
            "corpus snapshot: {} of {} records, {} residues",
            slice.filtered_count,
            slice.total_count,
            slice.total_residues
        );

        self.enter(SearchPhase::Aligning);
        let timed_out = AtomicBool::new(false);
        // Indexed parallel map collects in corpus order, so downstream
        // ordering never depends on worker scheduling.
        let candidates: Vec<Option<Candidate>> = slice
            .records
            .par_iter()
            .map(|record| {
                if let Some(deadline) = deadline {
                    if Instant::now() >= deadline {
                        timed_out.store(true, Ordering::Relaxed);
                        return None;
                    }
                }
                align_candidate(&query_enc, record)
            })
            .collect();

        self.enter(SearchPhase::Scoring);
        let mut hits: Vec<Hit> = Vec::new();
        for (record, candidate) in slice.records.iter().zip(candidates) {
            let Some(candidate) = candidate else { continue };
            let identity =
                stats::percent_identity(&query_enc, &candidate.target, &candidate.result.regions);
            if identity < request.identity_threshold {
                continue;
            }
            let coverage = stats::query_coverage(&candidate.result.regions, query_enc.len());
            let e_value = stats::evalue(
                candidate.result.score,
                query_enc.len(),
                slice.total_residues,
                &self.params,
            );
            hits.push(Hit {
                id: record.id.clone(),
                accession: record.accession.clone(),
                description: record.name.clone(),
                organism: record.organism.clone(),
                tags: record.tags.clone(),
                raw_score: round1(candidate.result.score as f64),
                query_coverage_pct: round1(coverage),
                percent_identity: round2(identity),
                alignment_length: candidate.result.aligned_len(),
                e_value,
                has_structure: record.has_structure,
            });
        }

        self.enter(SearchPhase::Ranking);
        // Stable sort: equal scores keep corpus iteration order.
        hits.sort_by(|a, b| {
            b.raw_score
                .partial_cmp(&a.raw_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(request.max_results);

        self.enter(SearchPhase::Done);
        Ok(SearchResponse {
            hits,
            total_corpus_count: slice.total_count,
            filtered_corpus_count: slice.filtered_count,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
            partial: timed_out.load(Ordering::Relaxed),
        })
    }
}

/// Align the query against one corpus record. A record whose stored residues
/// clean down to nothing cannot be aligned; it is reported and skipped
/// without failing the search.
fn align_candidate(query_enc: &[u8], record: &SeqRecord) -> Option<Candidate> {
    let cleaned = sequence::normalize(&record.residues);
    if cleaned.is_empty() {
        log::warn!("skipping {}: stored residues contain nothing alignable", record.id);
        return None;
    }
    let target = sequence::encode(&cleaned);
    let result = align::align(query_enc, &target);
    Some(Candidate { result, target })
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
