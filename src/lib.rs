//! Resume insight library: resume analysis, ATS scoring and job matching

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod job;
pub mod matching;
pub mod output;

pub use analysis::engine::ResumeAnalyzer;
pub use analysis::types::ResumeAnalysis;
pub use config::Config;
pub use error::{Result, ResumeInsightError};
pub use job::parser::JobParser;
pub use job::types::JobAnalysis;
pub use matching::{compute_match, MatchResult};
