//! Text extraction from uploaded document bytes

use crate::error::{Result, ResumeInsightError};
use crate::input::file_detector::FileType;
use log::info;
use regex::Regex;
use std::io::Read;

/// Converts raw uploaded bytes into normalized text, choosing a strategy by
/// filename extension. Extraction errors are recoverable: callers fall back
/// to a default analysis rather than failing the request.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String> {
    match FileType::from_filename(filename) {
        FileType::Pdf => {
            info!("extracting text from PDF: {}", filename);
            extract_pdf(bytes)
        }
        FileType::Docx => {
            info!("extracting text from DOCX: {}", filename);
            extract_docx(bytes)
        }
        FileType::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ResumeInsightError::PdfExtraction(format!("unreadable PDF: {}", e)))
}

/// DOCX is a zip archive; the document body lives in `word/document.xml`.
/// Paragraph closers become newlines, remaining tags are stripped and the
/// common XML entities decoded.
fn extract_docx(bytes: &[u8]) -> Result<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ResumeInsightError::DocxExtraction(format!("not a DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ResumeInsightError::DocxExtraction(format!("missing document body: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ResumeInsightError::DocxExtraction(format!("unreadable document body: {}", e)))?;

    Ok(xml_to_text(&xml))
}

fn xml_to_text(xml: &str) -> String {
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:tab/>", "\t");

    let tag_pattern = Regex::new(r"<[^>]*>").expect("tag pattern is valid");
    let stripped = tag_pattern.replace_all(&with_breaks, "");

    let decoded = stripped
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    decoded
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
