//! Report formatting for console, JSON and Markdown output

pub mod formatter;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, MarkdownFormatter, ReportFormatter};
