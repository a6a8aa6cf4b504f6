//! Resume-to-job match scoring

pub mod scorer;
pub mod types;

pub use scorer::compute_match;
pub use types::{CategoryScores, MatchRecommendation, MatchResult};
