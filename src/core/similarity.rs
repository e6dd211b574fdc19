use crate::core::vectorize::{vectorize, VectorizeError};

/// Neutral score returned when there is not enough data to compare
pub const DEFAULT_SCORE: u8 = 50;

/// Cosine similarity between two vectors
///
/// Defined as 0.0 when either vector has zero norm.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Cosine similarity between the mean term vectors of two label sequences
///
/// Both sequences are vectorized against a shared vocabulary (A's rows
/// first), then each side is collapsed to its element-wise mean vector.
pub(crate) fn mean_cosine(a: &[String], b: &[String]) -> Result<f64, VectorizeError> {
    let combined: Vec<String> = a.iter().chain(b.iter()).cloned().collect();
    let matrix = vectorize(&combined)?;

    let vec_a = matrix.mean_rows(0..a.len());
    let vec_b = matrix.mean_rows(a.len()..combined.len());

    Ok(cosine_similarity(&vec_a, &vec_b))
}

/// Score how well two label sequences match (0-100)
///
/// Used for user-trait vs event-category matching. Returns
/// [`DEFAULT_SCORE`] when either sequence is empty or when vectorization
/// fails (no usable tokens); this neutral fallback is part of the
/// contract, not an error.
pub fn similarity_score(a: &[String], b: &[String]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return DEFAULT_SCORE;
    }

    match mean_cosine(a, b) {
        Ok(cosine) => (cosine * 100.0).round().clamp(0.0, 100.0) as u8,
        Err(_) => DEFAULT_SCORE,
    }
}
