use std::collections::HashSet;

use crate::core::similarity::{mean_cosine, DEFAULT_SCORE};
use crate::models::BlendWeights;

/// Fraction of exactly shared labels between two profiles, scaled to 0-100
///
/// Duplicates collapse on the overlap side but still count toward each
/// profile's length, so a padded profile does not inflate its own score.
#[inline]
pub fn direct_overlap(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let common = set_a.intersection(&set_b).count();

    common as f64 / a.len().max(b.len()) as f64 * 100.0
}

/// Compatibility score (0-100) between two personality profiles
///
/// Exact trait overlap dominates the blend; lexical similarity of the
/// trait names refines it. Either profile being empty yields the neutral
/// [`DEFAULT_SCORE`] before any blending happens. When the semantic side
/// cannot be computed (no usable tokens) the score falls back to the
/// overlap component alone rather than surfacing the failure.
pub fn compatibility_score(a: &[String], b: &[String], weights: &BlendWeights) -> u8 {
    if a.is_empty() || b.is_empty() {
        return DEFAULT_SCORE;
    }

    let direct = direct_overlap(a, b);

    let blended = match mean_cosine(a, b) {
        Ok(cosine) => {
            let semantic = cosine * 100.0;
            direct * weights.direct + semantic * weights.semantic
        }
        Err(_) => direct,
    };

    blended.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_direct_overlap_full_match() {
        let a = labels(&["creative", "social"]);
        assert_eq!(direct_overlap(&a, &a), 100.0);
    }

    #[test]
    fn test_direct_overlap_partial() {
        let a = labels(&["creative", "social"]);
        let b = labels(&["creative", "quiet"]);
        assert_eq!(direct_overlap(&a, &b), 50.0);
    }

    #[test]
    fn test_direct_overlap_uses_longer_profile() {
        let a = labels(&["creative"]);
        let b = labels(&["creative", "quiet", "social", "curious"]);
        assert_eq!(direct_overlap(&a, &b), 25.0);
    }

    #[test]
    fn test_identical_profiles_score_max() {
        let traits = labels(&["creative", "adventurous", "social"]);
        let score = compatibility_score(&traits, &traits, &BlendWeights::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_empty_profile_scores_default() {
        let traits = labels(&["creative"]);
        let weights = BlendWeights::default();

        assert_eq!(compatibility_score(&[], &traits, &weights), DEFAULT_SCORE);
        assert_eq!(compatibility_score(&traits, &[], &weights), DEFAULT_SCORE);
    }

    #[test]
    fn test_disjoint_profiles_score_zero() {
        let a = labels(&["creative", "social"]);
        let b = labels(&["analytical", "quiet"]);
        assert_eq!(compatibility_score(&a, &b, &BlendWeights::default()), 0);
    }

    #[test]
    fn test_score_within_bounds() {
        let a = labels(&["creative", "social", "curious"]);
        let b = labels(&["social", "quiet"]);

        let score = compatibility_score(&a, &b, &BlendWeights::default());
        assert!(score <= 100);
    }

    #[test]
    fn test_more_overlap_never_scores_lower() {
        let weights = BlendWeights::default();
        let base = labels(&["creative", "social", "curious"]);

        let one_shared = labels(&["creative", "reserved", "pragmatic"]);
        let two_shared = labels(&["creative", "social", "pragmatic"]);

        let low = compatibility_score(&base, &one_shared, &weights);
        let high = compatibility_score(&base, &two_shared, &weights);
        assert!(high >= low);
    }

    #[test]
    fn test_unvectorizable_falls_back_to_overlap() {
        // Identical punctuation-only labels overlap exactly but produce an
        // empty vocabulary, so only the direct component survives.
        let a = labels(&["..."]);
        let b = labels(&["..."]);

        let score = compatibility_score(&a, &b, &BlendWeights::default());
        assert_eq!(score, 100);
    }
}
