use serde::{Deserialize, Serialize};

/// Event candidate for recommendation
///
/// Carries only what scoring needs: the identifier and the event's
/// category labels. The engine never sees the rest of the event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCandidate {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Connection candidate for recommendation
///
/// Candidates with an empty `personality_tags` list are skipped during
/// ranking, they are never scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionCandidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "personalityTags", default)]
    pub personality_tags: Vec<String>,
}

/// Weights for blending exact trait overlap with lexical similarity
///
/// Exact overlap is the stronger compatibility signal, so it carries most
/// of the weight by default; similarity of the trait wording acts as a
/// refinement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    pub direct: f64,
    pub semantic: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            direct: 0.7,
            semantic: 0.3,
        }
    }
}
