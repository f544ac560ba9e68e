//! Pairwise local alignment
//!
//! An owned Smith-Waterman implementation with affine gap penalties; no
//! delegation to an external aligner. The engine produces a raw score and
//! the list of gap-free matched regions of the best local alignment.

pub mod result;
pub mod smith_waterman;

pub use result::{AlignmentResult, MatchedRegion};
pub use smith_waterman::{align, GAP_EXTEND, GAP_OPEN};
