//! Resume-side analysis pipeline

pub mod contact;
pub mod engine;
pub mod industry;
pub mod keywords;
pub mod readability;
pub mod recommend;
pub mod scorer;
pub mod segmenter;
pub mod types;

pub use engine::ResumeAnalyzer;
pub use types::{Industry, ResumeAnalysis};
