use crate::config::Settings;
use crate::core::compatibility::compatibility_score;
use crate::core::similarity::similarity_score;
use crate::models::{BlendWeights, ConnectionCandidate, EventCandidate};

/// Default maximum number of recommendations returned
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
struct ScoredCandidate {
    id: String,
    score: u8,
}

/// Recommendation orchestrator
///
/// Scores candidates against a user's personality profile, sorts them by
/// descending score (stable, so ties keep input order) and truncates to
/// the configured limit. Only identifiers are returned; scores stay
/// internal.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: BlendWeights,
    limit: usize,
}

impl Recommender {
    pub fn new(weights: BlendWeights, limit: usize) -> Self {
        Self { weights, limit }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: BlendWeights::default(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            weights: settings.scoring.weights.blend(),
            limit: settings.recommendation.default_limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Recommend events for a user based on their personality profile
    ///
    /// Each event is scored by lexical similarity between the profile and
    /// the event's categories. Events without categories get the neutral
    /// default score and still take part in the ranking. An empty profile
    /// or empty candidate list yields no recommendations.
    pub fn recommend_events(
        &self,
        personality: &[String],
        events: &[EventCandidate],
    ) -> Vec<String> {
        if personality.is_empty() || events.is_empty() {
            return Vec::new();
        }

        let scored = events
            .iter()
            .map(|event| ScoredCandidate {
                id: event.event_id.clone(),
                score: similarity_score(personality, &event.categories),
            })
            .collect();

        tracing::debug!("Ranked {} candidate events", events.len());

        self.rank(scored)
    }

    /// Recommend connections for a user based on personality compatibility
    ///
    /// Candidates without personality tags are skipped entirely rather
    /// than scored at zero, so they never appear in the result.
    pub fn recommend_connections(
        &self,
        personality: &[String],
        candidates: &[ConnectionCandidate],
    ) -> Vec<String> {
        if personality.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let scored: Vec<ScoredCandidate> = candidates
            .iter()
            .filter(|candidate| !candidate.personality_tags.is_empty())
            .map(|candidate| ScoredCandidate {
                id: candidate.user_id.clone(),
                score: compatibility_score(personality, &candidate.personality_tags, &self.weights),
            })
            .collect();

        tracing::debug!(
            "Ranked {} of {} connection candidates",
            scored.len(),
            candidates.len()
        );

        self.rank(scored)
    }

    fn rank(&self, mut scored: Vec<ScoredCandidate>) -> Vec<String> {
        // Stable sort keeps input order on ties
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.limit);
        scored.into_iter().map(|candidate| candidate.id).collect()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}
