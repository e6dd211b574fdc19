// Model exports
pub mod domain;
pub mod feedback;

pub use domain::{BlendWeights, ConnectionCandidate, EventCandidate};
pub use feedback::{EventFeedback, FeedbackSummary};
