//! Cosine similarity with defined degenerate behavior.
//!
//! A missing vector, a zero-norm vector, or mismatched dimensions all map
//! to the [`MISSING_SIMILARITY`] sentinel instead of erroring, so absence
//! uniformly ranks at the bottom.

use crate::constants::MISSING_SIMILARITY;

/// Cosine similarity between two optional vectors.
pub fn cosine(a: Option<&[f32]>, b: Option<&[f32]>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => cosine_slices(a, b),
        _ => MISSING_SIMILARITY,
    }
}

/// Cosine similarity between two vectors, sentinel on degenerate input.
pub fn cosine_slices(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return MISSING_SIMILARITY;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return MISSING_SIMILARITY;
    }
    dot / denom
}
