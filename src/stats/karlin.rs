//! Karlin-Altschul expectation values
//!
//! E = K * m * n * e^(-lambda * S)
//!
//! where m is the query length, n the total residue count of the searched
//! corpus and S the raw alignment score. The formula is deliberately the
//! simple one without effective-length adjustment; lambda and K are the
//! standard gapped BLOSUM62 values.

/// Karlin-Altschul parameters for a scoring system.
#[derive(Debug, Clone, Copy)]
pub struct KarlinParams {
    pub lambda: f64,
    pub k: f64,
}

impl KarlinParams {
    /// Parameters for BLOSUM62 with gap open -11 / extend -1.
    pub fn blosum62_gapped() -> Self {
        Self {
            lambda: 0.267,
            k: 0.041,
        }
    }
}

/// Expected number of chance alignments scoring at least `raw_score`.
///
/// A score of zero or below carries no chance-alignment bound and maps to
/// positive infinity.
pub fn evalue(raw_score: i32, query_len: usize, db_residues: u64, params: &KarlinParams) -> f64 {
    if raw_score <= 0 {
        return f64::INFINITY;
    }
    params.k
        * query_len as f64
        * db_residues as f64
        * (-params.lambda * raw_score as f64).exp()
}
