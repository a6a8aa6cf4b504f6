//! Contact and social-handle extraction via regex passes over the raw text

use crate::analysis::types::ContactInfo;
use regex::Regex;

pub struct ContactExtractor {
    email: Regex,
    phone_formats: Vec<Regex>,
    linkedin: Regex,
    github: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern is valid");
        // Tried in order; first match wins
        let phone_formats = vec![
            Regex::new(r"\(\d{3}\)\s\d{3}-\d{4}").expect("phone pattern is valid"),
            Regex::new(r"\d{3}-\d{3}-\d{4}").expect("phone pattern is valid"),
            Regex::new(r"\d{3}\.\d{3}\.\d{4}").expect("phone pattern is valid"),
        ];
        let linkedin = Regex::new(r"linkedin\.com/in/[\w-]+").expect("linkedin pattern is valid");
        let github = Regex::new(r"github\.com/[\w-]+").expect("github pattern is valid");

        Self {
            email,
            phone_formats,
            linkedin,
            github,
        }
    }

    /// Extracts contact details from the full text. Fields stay `None` when
    /// nothing matches; this never fails the pipeline.
    pub fn extract(&self, text: &str) -> ContactInfo {
        let text_lower = text.to_lowercase();

        let email = self.email.find(text).map(|m| m.as_str().to_string());

        let phone = self
            .phone_formats
            .iter()
            .find_map(|re| re.find(text))
            .map(|m| m.as_str().to_string());

        let linkedin_handle = self
            .linkedin
            .find(&text_lower)
            .map(|m| m.as_str().to_string());

        let github_handle = self
            .github
            .find(&text_lower)
            .map(|m| m.as_str().to_string());

        ContactInfo {
            email,
            phone,
            linkedin_handle,
            github_handle,
        }
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_email_and_phone() {
        let extractor = ContactExtractor::new();
        let info = extractor.extract("Reach me at jane.doe@mail.io or (555) 123-4567");
        assert_eq!(info.email.as_deref(), Some("jane.doe@mail.io"));
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn phone_formats_tried_in_order() {
        let extractor = ContactExtractor::new();
        // Both a dashed and a dotted number present; the dashed format is
        // an earlier alternative only when the parenthesized form is absent
        let info = extractor.extract("Home 555.987.6543, cell 555-123-4567");
        assert_eq!(info.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn extracts_social_handles_from_lowercased_text() {
        let extractor = ContactExtractor::new();
        let info = extractor.extract("LinkedIn.com/in/Jane-Doe and GitHub.com/janedoe");
        assert_eq!(info.linkedin_handle.as_deref(), Some("linkedin.com/in/jane-doe"));
        assert_eq!(info.github_handle.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn missing_fields_stay_none() {
        let extractor = ContactExtractor::new();
        let info = extractor.extract("No contact details in this text at all");
        assert_eq!(info, ContactInfo::default());
    }
}
