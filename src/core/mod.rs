// Core algorithm exports
pub mod compatibility;
pub mod feedback;
pub mod profile;
pub mod recommend;
pub mod sampler;
pub mod similarity;
pub mod vectorize;

pub use compatibility::{compatibility_score, direct_overlap};
pub use feedback::{aggregate_feedback, FeedbackError};
pub use profile::{analyze_answers, MAX_PROFILE_TRAITS};
pub use recommend::{Recommender, DEFAULT_LIMIT};
pub use sampler::{select_recipients, DEFAULT_MIN_COUNT, DEFAULT_PERCENTAGE};
pub use similarity::{cosine_similarity, similarity_score, DEFAULT_SCORE};
pub use vectorize::{tokenize, vectorize, TermMatrix, VectorizeError};
