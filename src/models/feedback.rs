use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw feedback collected for one event
///
/// `content_ratings` and `enjoyment_factors` keep their insertion order:
/// the order enjoyment factors first appear in decides ties when the
/// top factors are selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFeedback {
    #[serde(rename = "eventId")]
    pub event_id: String,
    /// Per-user numeric ratings, 1-5 scale expected but not enforced
    #[serde(rename = "userRatings")]
    pub user_ratings: HashMap<String, f64>,
    /// Average rating per content aspect, passed through untouched
    #[serde(rename = "contentRatings", default)]
    pub content_ratings: IndexMap<String, f64>,
    /// How many attendees named each factor as what they enjoyed most
    #[serde(rename = "enjoymentFactors", default)]
    pub enjoyment_factors: IndexMap<String, u64>,
}

/// Summary insights reduced from an event's feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSummary {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "contentRatings")]
    pub content_ratings: IndexMap<String, f64>,
    #[serde(rename = "topEnjoymentFactors")]
    pub top_enjoyment_factors: Vec<String>,
}
