use indexmap::IndexMap;

/// Maximum number of traits kept in a derived personality profile
pub const MAX_PROFILE_TRAITS: usize = 5;

/// Derive a personality profile from test answers
///
/// `answers` maps question ids to the trait each answer selected. Traits
/// are counted across all answers and returned most-frequent first, capped
/// at [`MAX_PROFILE_TRAITS`]. Ties keep the order traits first appeared
/// in, so the result is deterministic for a given answer set. An empty
/// answer set yields an empty profile.
pub fn analyze_answers(answers: &IndexMap<String, String>) -> Vec<String> {
    if answers.is_empty() {
        return Vec::new();
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for trait_label in answers.values() {
        *counts.entry(trait_label.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_PROFILE_TRAITS)
        .map(|(trait_label, _)| trait_label.to_string())
        .collect()
}
