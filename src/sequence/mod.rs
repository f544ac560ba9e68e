//! Query and subject sequence normalization
//!
//! Raw input (pasted text or FASTA) is cleaned into the residue alphabet the
//! scoring matrix covers: header lines are dropped, non-alphabetic characters
//! removed, and anything outside the 20 standard amino acids plus B/Z/X is
//! coerced to X. The coercion is lossy and one-way.

use serde::Serialize;

use crate::matrix;

/// Residues the scoring matrix supports directly; everything else becomes X.
#[inline]
fn is_supported(c: char) -> bool {
    matches!(
        c,
        'A' | 'C' | 'D' | 'E' | 'F' | 'G' | 'H' | 'I' | 'K' | 'L' | 'M' | 'N' | 'P' | 'Q' | 'R'
            | 'S' | 'T' | 'V' | 'W' | 'Y' | 'B' | 'Z' | 'X'
    )
}

/// Clean raw sequence input into normalized residue text.
///
/// Pure and deterministic. Returns an empty string when no alphabetic
/// residues remain; callers must treat that as an invalid query rather than
/// silently aligning nothing.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.starts_with('>'))
        .flat_map(|line| line.chars())
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .map(|c| if is_supported(c) { c } else { 'X' })
        .collect()
}

/// Encode normalized residue text into scoring-matrix indices.
///
/// Accepts un-normalized bytes as well; anything outside the alphabet encodes
/// as X, so the output is always a valid matrix index sequence.
pub fn encode(residues: &str) -> Vec<u8> {
    residues.bytes().map(matrix::encode_residue).collect()
}

/// Summary of a cleaned query, for display before a search.
#[derive(Debug, Clone, Serialize)]
pub struct QueryInfo {
    pub length: usize,
    pub preview: String,
}

/// Length and a short preview of the normalized form of `raw`.
pub fn query_info(raw: &str) -> QueryInfo {
    let cleaned = normalize(raw);
    let preview = if cleaned.len() > 50 {
        format!("{}...", &cleaned[..50])
    } else {
        cleaned.clone()
    };
    QueryInfo {
        length: cleaned.len(),
        preview,
    }
}
