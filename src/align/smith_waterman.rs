//! Smith-Waterman local alignment with affine gap penalties
//!
//! Full-matrix dynamic programming over encoded residues with the classic
//! three-state formulation: H (best score ending in a match/mismatch), E
//! (best score ending in a gap that consumes the target) and F (gap that
//! consumes the query). H is floored at zero so the alignment may restart
//! anywhere; traceback starts at the global maximum and stops at the first
//! zero cell.
//!
//! The first residue of a gap costs [`GAP_OPEN`], each further residue of the
//! same gap costs [`GAP_EXTEND`].

use crate::matrix;

use super::result::{AlignmentResult, MatchedRegion};

/// Penalty charged to the first residue of a gap.
pub const GAP_OPEN: i32 = -11;
/// Penalty charged to every subsequent residue of the same gap.
pub const GAP_EXTEND: i32 = -1;

// Traceback encoding: low two bits give the move that produced H, the two
// flag bits record whether E/F opened a fresh gap at this cell.
const TB_STOP: u8 = 0;
const TB_DIAG: u8 = 1;
const TB_E: u8 = 2;
const TB_F: u8 = 3;
const TB_H_MASK: u8 = 0b0011;
const TB_E_OPEN: u8 = 0b0100;
const TB_F_OPEN: u8 = 0b1000;

// Sentinel low enough that an impossible gap state never wins a maximum,
// but far from i32::MIN so adding a penalty cannot wrap.
const NEG_INF: i32 = i32::MIN / 2;

/// Traceback state: which of the three DP layers the walk is currently in.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Layer {
    H,
    E,
    F,
}

/// Align `query` against `target` (both encoded as matrix indices) and return
/// the best local alignment.
///
/// Ties for the maximum cell are broken deterministically: the matrix is
/// scanned row-major (query outer, target inner) and only a strictly greater
/// value replaces the current maximum, so the first cell encountered wins.
/// Empty inputs yield a score of 0 and no regions.
pub fn align(query: &[u8], target: &[u8]) -> AlignmentResult {
    let m = query.len();
    let n = target.len();
    if m == 0 || n == 0 {
        return AlignmentResult::empty();
    }

    let cols = n + 1;
    let mut h_prev = vec![0i32; cols];
    let mut h_curr = vec![0i32; cols];
    let mut f_col = vec![NEG_INF; cols];
    let mut tb = vec![TB_STOP; (m + 1) * cols];

    let mut best = 0i32;
    let mut best_i = 0usize;
    let mut best_j = 0usize;

    for i in 1..=m {
        let q_res = query[i - 1];
        let mut e = NEG_INF;
        h_curr[0] = 0;

        for j in 1..=n {
            let mut cell = TB_STOP;

            // E: gap consuming target[j-1]. Opening from H is preferred on
            // ties so traceback closes gaps as early as possible.
            let e_open = h_curr[j - 1] + GAP_OPEN;
            let e_ext = e + GAP_EXTEND;
            if e_open >= e_ext {
                e = e_open;
                cell |= TB_E_OPEN;
            } else {
                e = e_ext;
            }

            // F: gap consuming query[i-1]
            let f_open = h_prev[j] + GAP_OPEN;
            let f_ext = f_col[j] + GAP_EXTEND;
            if f_open >= f_ext {
                f_col[j] = f_open;
                cell |= TB_F_OPEN;
            } else {
                f_col[j] = f_ext;
            }

            let diag = h_prev[j - 1] + matrix::score(q_res, target[j - 1]);

            // Fixed move priority (diagonal, then E, then F, then restart)
            // keeps the traceback path deterministic.
            let mut val = 0i32;
            let mut src = TB_STOP;
            if diag > val {
                val = diag;
                src = TB_DIAG;
            }
            if e > val {
                val = e;
                src = TB_E;
            }
            if f_col[j] > val {
                val = f_col[j];
                src = TB_F;
            }

            h_curr[j] = val;
            tb[i * cols + j] = cell | src;

            if val > best {
                best = val;
                best_i = i;
                best_j = j;
            }
        }

        std::mem::swap(&mut h_prev, &mut h_curr);
    }

    if best == 0 {
        return AlignmentResult::empty();
    }

    AlignmentResult {
        score: best,
        regions: traceback_regions(&tb, cols, best_i, best_j),
    }
}

/// Walk the traceback tables from the maximum cell back to the first zero
/// cell, collecting diagonal steps and merging contiguous runs into matched
/// regions (ascending query order).
fn traceback_regions(tb: &[u8], cols: usize, end_i: usize, end_j: usize) -> Vec<MatchedRegion> {
    // (query index, target index) of every aligned pair, collected backwards
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut i = end_i;
    let mut j = end_j;
    let mut layer = Layer::H;

    loop {
        match layer {
            Layer::H => match tb[i * cols + j] & TB_H_MASK {
                TB_DIAG => {
                    pairs.push((i - 1, j - 1));
                    i -= 1;
                    j -= 1;
                }
                TB_E => layer = Layer::E,
                TB_F => layer = Layer::F,
                _ => break, // TB_STOP: local alignment floor reached
            },
            Layer::E => {
                let opened = tb[i * cols + j] & TB_E_OPEN != 0;
                j -= 1;
                if opened {
                    layer = Layer::H;
                }
            }
            Layer::F => {
                let opened = tb[i * cols + j] & TB_F_OPEN != 0;
                i -= 1;
                if opened {
                    layer = Layer::H;
                }
            }
        }
    }

    pairs.reverse();

    let mut regions = Vec::new();
    let mut run_start: Option<(usize, usize)> = None;
    let mut prev: Option<(usize, usize)> = None;
    for &(q, t) in &pairs {
        match prev {
            Some((pq, pt)) if q == pq + 1 && t == pt + 1 => {}
            Some((pq, pt)) => {
                let (sq, st) = run_start.expect("open run");
                regions.push(MatchedRegion {
                    q_start: sq,
                    q_end: pq + 1,
                    t_start: st,
                    t_end: pt + 1,
                });
                run_start = Some((q, t));
            }
            None => run_start = Some((q, t)),
        }
        prev = Some((q, t));
    }
    if let (Some((sq, st)), Some((pq, pt))) = (run_start, prev) {
        regions.push(MatchedRegion {
            q_start: sq,
            q_end: pq + 1,
            t_start: st,
            t_end: pt + 1,
        });
    }

    regions
}
