//! File type detection by filename extension

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    /// Anything without a recognized extension is decoded as UTF-8 text
    /// with invalid sequences replaced, never rejected.
    Text,
}

impl FileType {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            FileType::Pdf
        } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
            FileType::Docx
        } else {
            FileType::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension_case_insensitively() {
        assert_eq!(FileType::from_filename("resume.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("resume.docx"), FileType::Docx);
        assert_eq!(FileType::from_filename("resume.doc"), FileType::Docx);
        assert_eq!(FileType::from_filename("resume.txt"), FileType::Text);
        assert_eq!(FileType::from_filename("resume"), FileType::Text);
        assert_eq!(FileType::from_filename("notes.md"), FileType::Text);
    }
}
