//! Recommendation, strength and weakness generation
//!
//! A fixed checklist evaluated top to bottom; each rule emits at most one
//! recommendation and the output keeps evaluation order (keywords, contact,
//! structure, metrics, verbs) rather than sorting by priority.

use crate::analysis::keywords::Dictionaries;
use crate::analysis::types::{
    ActionTag, ContactInfo, Industry, KeywordAnalysis, Priority, Recommendation,
    RecommendationKind, SectionKind,
};
use regex::Regex;
use std::collections::BTreeMap;

const KEYWORD_SCORE_THRESHOLD: f64 = 60.0;
const MISSING_KEYWORD_SUGGESTIONS: usize = 5;
const STRONG_VERB_SUGGESTIONS: usize = 8;

const SECTION_CHECKLIST: [SectionKind; 4] = [
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Summary,
];

const METRIC_EXAMPLES: [&str; 3] = [
    "Increased sales by 25%",
    "Managed team of 10+",
    "Reduced costs by $50K",
];

pub struct Recommender {
    metric_pattern: Regex,
}

impl Recommender {
    pub fn new() -> Self {
        let metric_pattern = Regex::new(r"\d+%|\$\d+|\d+\+").expect("metric pattern is valid");
        Self { metric_pattern }
    }

    pub fn generate(
        &self,
        dicts: &Dictionaries,
        text: &str,
        sections: &BTreeMap<SectionKind, String>,
        contact: &ContactInfo,
        keywords: &KeywordAnalysis,
        industry: Industry,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if keywords.score < KEYWORD_SCORE_THRESHOLD {
            let missing: Vec<String> = keywords
                .missing_keywords
                .iter()
                .take(MISSING_KEYWORD_SUGGESTIONS)
                .cloned()
                .collect();
            recommendations.push(Recommendation {
                kind: RecommendationKind::Keywords,
                priority: Priority::High,
                title: "Add Industry Keywords".to_string(),
                description: format!("Include these relevant keywords: {}", missing.join(", ")),
                action_tag: ActionTag::KeywordOptimization,
                payload: missing,
            });
        }

        if !contact.has_email() || !contact.has_phone() {
            let mut missing_contact = Vec::new();
            if !contact.has_email() {
                missing_contact.push("email");
            }
            if !contact.has_phone() {
                missing_contact.push("phone number");
            }
            recommendations.push(Recommendation {
                kind: RecommendationKind::Contact,
                priority: Priority::High,
                title: "Add Missing Contact Information".to_string(),
                description: format!("Include your {}", missing_contact.join(" and ")),
                action_tag: ActionTag::AddContactInfo,
                payload: Vec::new(),
            });
        }

        let missing_sections: Vec<String> = SECTION_CHECKLIST
            .iter()
            .filter(|kind| !sections.contains_key(kind))
            .map(|kind| kind.to_string())
            .collect();
        if !missing_sections.is_empty() {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Structure,
                priority: Priority::Medium,
                title: "Add Missing Sections".to_string(),
                description: format!("Include these sections: {}", missing_sections.join(", ")),
                action_tag: ActionTag::AddSections,
                payload: missing_sections,
            });
        }

        if !self.metric_pattern.is_match(text) {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Content,
                priority: Priority::Medium,
                title: "Add Quantifiable Achievements".to_string(),
                description:
                    "Include specific numbers, percentages, and metrics to demonstrate impact"
                        .to_string(),
                action_tag: ActionTag::AddMetrics,
                payload: METRIC_EXAMPLES.iter().map(|s| s.to_string()).collect(),
            });
        }

        if dicts.has_weak_phrase(text) {
            let suggestions: Vec<String> = dicts
                .profile(industry)
                .map(|p| p.action_verbs())
                .unwrap_or(&[])
                .iter()
                .take(STRONG_VERB_SUGGESTIONS)
                .map(|s| s.to_string())
                .collect();
            recommendations.push(Recommendation {
                kind: RecommendationKind::Content,
                priority: Priority::Low,
                title: "Strengthen Action Verbs".to_string(),
                description: "Replace weak phrases with strong action verbs".to_string(),
                action_tag: ActionTag::ImproveVerbs,
                payload: suggestions,
            });
        }

        recommendations
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-text strengths, generated independently of the recommendations.
pub fn identify_strengths(
    dicts: &Dictionaries,
    text: &str,
    sections: &BTreeMap<SectionKind, String>,
    keywords: &KeywordAnalysis,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if keywords.score > 70.0 {
        strengths.push("Strong industry keyword optimization".to_string());
    }
    if sections.len() >= 5 {
        strengths.push("Well-structured with comprehensive sections".to_string());
    }
    if let Some(experience) = sections.get(&SectionKind::Experience) {
        if experience.split_whitespace().count() > 100 {
            strengths.push("Detailed work experience descriptions".to_string());
        }
    }
    if dicts.has_achievement_verb(text) {
        strengths.push("Includes quantifiable achievements".to_string());
    }
    if text.split_whitespace().count() > 300 {
        strengths.push("Adequate length and detail".to_string());
    }

    strengths
}

/// Free-text weaknesses, generated independently of the recommendations.
pub fn identify_weaknesses(
    text: &str,
    sections: &BTreeMap<SectionKind, String>,
    contact: &ContactInfo,
    keywords: &KeywordAnalysis,
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if !contact.has_email() {
        weaknesses.push("Missing email address".to_string());
    }
    if !contact.has_phone() {
        weaknesses.push("Missing phone number".to_string());
    }
    if keywords.score < 40.0 {
        weaknesses.push("Insufficient industry-relevant keywords".to_string());
    }
    if !sections.contains_key(&SectionKind::Summary) {
        weaknesses.push("Missing professional summary section".to_string());
    }
    if text.split_whitespace().count() < 250 {
        weaknesses.push("Resume content too brief".to_string());
    }
    if !text.chars().any(|c| c.is_ascii_digit()) {
        weaknesses.push("No quantified achievements or metrics".to_string());
    }

    weaknesses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_sections() -> BTreeMap<SectionKind, String> {
        BTreeMap::new()
    }

    #[test]
    fn keyword_recommendation_precedes_contact_recommendation() {
        let dicts = Dictionaries::new();
        let recommender = Recommender::new();
        let keywords = KeywordAnalysis {
            score: 10.0,
            found_keywords: vec![],
            missing_keywords: vec!["python".to_string(), "docker".to_string()],
            total_found: 1,
            total_possible: 10,
        };
        let recs = recommender.generate(
            &dicts,
            "plain text",
            &empty_sections(),
            &ContactInfo::default(),
            &keywords,
            Industry::Technology,
        );
        assert_eq!(recs[0].kind, RecommendationKind::Keywords);
        assert_eq!(recs[1].kind, RecommendationKind::Contact);
        assert_eq!(recs[0].priority, Priority::High);
    }

    #[test]
    fn metrics_rule_skipped_when_numbers_present() {
        let dicts = Dictionaries::new();
        let recommender = Recommender::new();
        let keywords = KeywordAnalysis::general_fallback();
        let recs = recommender.generate(
            &dicts,
            "Increased revenue by 25% year over year",
            &empty_sections(),
            &ContactInfo::default(),
            &keywords,
            Industry::General,
        );
        assert!(!recs
            .iter()
            .any(|r| r.action_tag == ActionTag::AddMetrics));
    }

    #[test]
    fn weak_phrases_trigger_verb_suggestions() {
        let dicts = Dictionaries::new();
        let recommender = Recommender::new();
        let keywords = KeywordAnalysis::general_fallback();
        let recs = recommender.generate(
            &dicts,
            "Responsible for maintaining the build",
            &empty_sections(),
            &ContactInfo::default(),
            &keywords,
            Industry::Technology,
        );
        let verbs = recs
            .iter()
            .find(|r| r.action_tag == ActionTag::ImproveVerbs)
            .expect("verb recommendation present");
        assert_eq!(verbs.priority, Priority::Low);
        assert_eq!(verbs.payload.len(), 8);
        assert!(verbs.payload.contains(&"developed".to_string()));
    }

    #[test]
    fn missing_sections_listed_in_checklist_order() {
        let dicts = Dictionaries::new();
        let recommender = Recommender::new();
        let mut sections = empty_sections();
        sections.insert(SectionKind::Education, "BSc".to_string());
        let keywords = KeywordAnalysis::general_fallback();
        let recs = recommender.generate(
            &dicts,
            "text with 25% metrics",
            &sections,
            &ContactInfo::default(),
            &keywords,
            Industry::General,
        );
        let structure = recs
            .iter()
            .find(|r| r.action_tag == ActionTag::AddSections)
            .expect("structure recommendation present");
        assert_eq!(structure.payload, vec!["experience", "skills", "summary"]);
    }

    #[test]
    fn weaknesses_flag_missing_contact_and_brevity() {
        let weaknesses = identify_weaknesses(
            "short text",
            &empty_sections(),
            &ContactInfo::default(),
            &KeywordAnalysis::general_fallback(),
        );
        assert!(weaknesses.contains(&"Missing email address".to_string()));
        assert!(weaknesses.contains(&"Missing phone number".to_string()));
        assert!(weaknesses.contains(&"Resume content too brief".to_string()));
        assert!(weaknesses.contains(&"No quantified achievements or metrics".to_string()));
    }

    #[test]
    fn strengths_reward_achievement_verbs_and_length() {
        let dicts = Dictionaries::new();
        let long_text = format!("improved delivery {}", "word ".repeat(320));
        let strengths = identify_strengths(
            &dicts,
            &long_text,
            &empty_sections(),
            &KeywordAnalysis::general_fallback(),
        );
        assert!(strengths.contains(&"Includes quantifiable achievements".to_string()));
        assert!(strengths.contains(&"Adequate length and detail".to_string()));
    }
}
