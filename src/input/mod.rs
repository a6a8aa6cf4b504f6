//! Input handling: file type detection and text extraction

pub mod extractor;
pub mod file_detector;

pub use extractor::extract_text;
pub use file_detector::FileType;
