use thiserror::Error;

use crate::models::{EventFeedback, FeedbackSummary};

/// Number of enjoyment factors surfaced in a feedback summary
const TOP_FACTOR_COUNT: usize = 2;

/// Errors that can occur while aggregating event feedback
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("no user ratings provided for event {0}")]
    EmptyRatings(String),
}

/// Reduce an event's raw feedback into summary insights
///
/// Produces the arithmetic mean of all user ratings, passes the content
/// ratings through unchanged and picks the two enjoyment factors with the
/// highest counts. Ties between factors keep the order they first appear
/// in the input. At least one user rating is required; an empty ratings
/// map has no defined mean and is rejected.
pub fn aggregate_feedback(feedback: &EventFeedback) -> Result<FeedbackSummary, FeedbackError> {
    if feedback.user_ratings.is_empty() {
        return Err(FeedbackError::EmptyRatings(feedback.event_id.clone()));
    }

    let average_rating =
        feedback.user_ratings.values().sum::<f64>() / feedback.user_ratings.len() as f64;

    let mut factors: Vec<(&String, &u64)> = feedback.enjoyment_factors.iter().collect();
    factors.sort_by(|a, b| b.1.cmp(a.1));

    let top_enjoyment_factors = factors
        .into_iter()
        .take(TOP_FACTOR_COUNT)
        .map(|(factor, _)| factor.clone())
        .collect();

    tracing::debug!(
        "Aggregated {} ratings for event {}",
        feedback.user_ratings.len(),
        feedback.event_id
    );

    Ok(FeedbackSummary {
        event_id: feedback.event_id.clone(),
        average_rating,
        content_ratings: feedback.content_ratings.clone(),
        top_enjoyment_factors,
    })
}
