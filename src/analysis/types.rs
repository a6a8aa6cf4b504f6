//! Value types produced by the resume analysis pipeline
//!
//! Everything here is an ephemeral result object: constructed fresh per
//! analysis call, serialized to camelCase JSON, never persisted by the core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Industry classification shared by the resume and job pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Finance,
    Marketing,
    Healthcare,
    Sales,
    Consulting,
    General,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Marketing => "marketing",
            Industry::Healthcare => "healthcare",
            Industry::Sales => "sales",
            Industry::Consulting => "consulting",
            Industry::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// Closed set of recognized resume sections. Declaration order doubles as
/// the segmenter's header tie-break order and the map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Summary,
    Projects,
    Certifications,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Summary => "summary",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
        };
        write!(f, "{}", name)
    }
}

/// Contact details pulled from the raw text. A field is `None` when no
/// pattern matched; absent fields are omitted from the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_handle: Option<String>,
}

impl ContactInfo {
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    pub fn has_phone(&self) -> bool {
        self.phone.is_some()
    }
}

/// Keyword coverage against the classified industry's dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// Coverage score in [0, 100]; fixed at 50 for the `general` industry.
    pub score: f64,
    /// First 20 dictionary keywords present in the text, in dictionary order.
    pub found_keywords: Vec<String>,
    /// First 10 dictionary keywords absent from the text.
    pub missing_keywords: Vec<String>,
    pub total_found: usize,
    pub total_possible: usize,
}

impl KeywordAnalysis {
    /// Explicit fallback when no industry dictionary applies.
    pub fn general_fallback() -> Self {
        Self {
            score: 50.0,
            found_keywords: Vec::new(),
            missing_keywords: Vec::new(),
            total_found: 0,
            total_possible: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Keywords,
    Contact,
    Structure,
    Content,
}

/// Machine-readable handle the surrounding application can dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTag {
    KeywordOptimization,
    AddContactInfo,
    AddSections,
    AddMetrics,
    ImproveVerbs,
}

/// One actionable fix. The sequence order is generation order
/// (keywords, contact, structure, metrics, verbs), never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_tag: ActionTag,
    /// Supporting items: keywords to add, missing section names, example
    /// metric phrases or suggested verbs, depending on `kind`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<String>,
}

/// Full analysis of one resume, derived fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub raw_text: String,
    pub word_count: usize,
    pub sentence_count: usize,
    pub readability_score: f64,
    /// Sections whose header was recognized; a missing key means the header
    /// was never seen, never an empty placeholder.
    pub sections: BTreeMap<SectionKind, String>,
    pub contact_info: ContactInfo,
    pub industry: Industry,
    pub keyword_analysis: KeywordAnalysis,
    pub ats_score: f64,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Industry::Technology).unwrap(),
            "\"technology\""
        );
        assert_eq!(
            serde_json::from_str::<Industry>("\"general\"").unwrap(),
            Industry::General
        );
    }

    #[test]
    fn absent_contact_fields_are_omitted() {
        let contact = ContactInfo {
            email: Some("a@b.co".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("email"));
        assert!(!json.contains("phone"));
        assert!(!json.contains("linkedinHandle"));
    }

    #[test]
    fn recommendation_uses_wire_field_names() {
        let rec = Recommendation {
            kind: RecommendationKind::Keywords,
            priority: Priority::High,
            title: "Add Industry Keywords".to_string(),
            description: "Include these relevant keywords: docker".to_string(),
            action_tag: ActionTag::KeywordOptimization,
            payload: vec!["docker".to_string()],
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "keywords");
        assert_eq!(json["actionTag"], "keyword_optimization");
        assert_eq!(json["payload"][0], "docker");
    }

    #[test]
    fn sections_map_serializes_with_lowercase_keys() {
        let mut sections = BTreeMap::new();
        sections.insert(SectionKind::Experience, "built things".to_string());
        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(json["experience"], "built things");
    }
}
