//! Job-description parsing pipeline

pub mod parser;
pub mod types;

pub use parser::JobParser;
pub use types::JobAnalysis;
