//! Gathr Engine - Personality compatibility and recommendation engine
//!
//! This library provides the scoring core used by the Gathr events app:
//! personality profiles derived from test answers, user-event and
//! user-user compatibility scores, ranked recommendations, message
//! recipient sampling and event feedback aggregation. Everything is a
//! pure computation over caller-supplied data; the only external
//! dependency is the random generator injected into the sampler.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    aggregate_feedback, analyze_answers, compatibility_score, select_recipients,
    similarity_score, FeedbackError, Recommender, VectorizeError,
};
pub use crate::models::{
    BlendWeights, ConnectionCandidate, EventCandidate, EventFeedback, FeedbackSummary,
};
