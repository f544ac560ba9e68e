//! Statistic bounds and monotonicity

use enzseek::align;
use enzseek::sequence;
use enzseek::stats::{self, KarlinParams};

use super::helpers::{assert_approx_eq, substitute_conservative, X0001_RESIDUES};

#[test]
fn coverage_and_identity_stay_in_bounds() {
    let query = sequence::encode(&X0001_RESIDUES[..90]);
    let targets = [
        X0001_RESIDUES.to_string(),
        X0001_RESIDUES[30..70].to_string(),
        substitute_conservative(&X0001_RESIDUES[..90], 20),
        "WWWWWWWW".to_string(),
    ];
    for text in &targets {
        let target = sequence::encode(text);
        let result = align::align(&query, &target);
        let coverage = stats::query_coverage(&result.regions, query.len());
        let identity = stats::percent_identity(&query, &target, &result.regions);
        assert!((0.0..=100.0).contains(&coverage), "coverage {coverage} out of bounds");
        assert!((0.0..=100.0).contains(&identity), "identity {identity} out of bounds");
    }
}

#[test]
fn evalue_decreases_as_score_grows() {
    let params = KarlinParams::blosum62_gapped();
    let query_len = 146;
    let db_residues = 250_000;
    let mut prev = f64::INFINITY;
    for score in [1, 10, 25, 60, 150, 400] {
        let e = stats::evalue(score, query_len, db_residues, &params);
        assert!(e < prev);
        assert!(e > 0.0);
        prev = e;
    }
}

#[test]
fn conservative_substitutions_lower_identity_only() {
    let query_text = &X0001_RESIDUES[..100];
    let query = sequence::encode(query_text);
    let mutated_text = substitute_conservative(query_text, 9);
    let mutated = sequence::encode(&mutated_text);

    let result = align::align(&query, &mutated);
    let identity = stats::percent_identity(&query, &mutated, &result.regions);
    let coverage = stats::query_coverage(&result.regions, query.len());

    // Positive-scoring substitutions keep the full-length ungapped alignment
    assert_eq!(result.regions.len(), 1);
    assert_approx_eq(identity, 91.0, 1e-9);
    assert_approx_eq(coverage, 100.0, 1e-9);
}
