//! Per-hit metrics derived from matched regions

use crate::align::MatchedRegion;

/// Total number of aligned (gap-free) positions across all regions.
pub fn alignment_length(regions: &[MatchedRegion]) -> usize {
    regions.iter().map(MatchedRegion::len).sum()
}

/// Percentage of the query spanned by the alignment: distance from the first
/// matched query position to the last, over the query length.
///
/// Zero when the query is empty or nothing aligned.
pub fn query_coverage(regions: &[MatchedRegion], query_len: usize) -> f64 {
    if query_len == 0 {
        return 0.0;
    }
    let (Some(first), Some(last)) = (regions.first(), regions.last()) else {
        return 0.0;
    };
    100.0 * (last.q_end - first.q_start) as f64 / query_len as f64
}

/// Percentage of exactly matching residues over all compared positions.
///
/// Only positions inside matched (gap-free) regions are compared; gapped
/// positions contribute to neither numerator nor denominator. Zero when no
/// positions were compared.
pub fn percent_identity(query: &[u8], target: &[u8], regions: &[MatchedRegion]) -> f64 {
    let mut identical = 0usize;
    let mut compared = 0usize;
    for region in regions {
        let len = region.len().min(region.t_end - region.t_start);
        for k in 0..len {
            compared += 1;
            if query[region.q_start + k] == target[region.t_start + k] {
                identical += 1;
            }
        }
    }
    if compared == 0 {
        return 0.0;
    }
    100.0 * identical as f64 / compared as f64
}
