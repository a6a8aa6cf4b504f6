//! Keyword coverage and ATS compatibility scoring
//!
//! Pure functions of (text, sections, contact info, keyword analysis);
//! reproducible bit-for-bit given identical inputs and dictionaries.

use crate::analysis::keywords::Dictionaries;
use crate::analysis::readability;
use crate::analysis::types::{ContactInfo, Industry, KeywordAnalysis, SectionKind};
use std::collections::BTreeMap;

const REQUIRED_SECTIONS: [SectionKind; 3] =
    [SectionKind::Experience, SectionKind::Education, SectionKind::Skills];

const FOUND_KEYWORDS_CAP: usize = 20;
const MISSING_KEYWORDS_CAP: usize = 10;

/// Keyword coverage against the classified industry's dictionary. The
/// `general` industry has no dictionary and takes a fixed score of 50 with
/// empty keyword lists instead of dividing by zero.
pub fn analyze_keywords(dicts: &Dictionaries, text: &str, industry: Industry) -> KeywordAnalysis {
    let profile = match dicts.profile(industry) {
        Some(profile) => profile,
        None => return KeywordAnalysis::general_fallback(),
    };

    let present = profile.scan(text);
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for (keyword, hit) in profile.keywords().iter().zip(&present) {
        if *hit {
            found.push(keyword.to_string());
        } else {
            missing.push(keyword.to_string());
        }
    }

    let total_found = found.len();
    let total_possible = profile.keyword_count();
    let score = if total_possible > 0 {
        ((total_found as f64 / total_possible as f64) * 100.0).min(100.0)
    } else {
        0.0
    };

    found.truncate(FOUND_KEYWORDS_CAP);
    missing.truncate(MISSING_KEYWORDS_CAP);

    KeywordAnalysis {
        score,
        found_keywords: found,
        missing_keywords: missing,
        total_found,
        total_possible,
    }
}

/// ATS compatibility score: section presence (0-40) + contact completeness
/// (0-20) + keyword relevance (0-30) + length/format (0-10), clamped to
/// [0, 100].
pub fn calculate_ats_score(
    text: &str,
    sections: &BTreeMap<SectionKind, String>,
    contact: &ContactInfo,
    keywords: &KeywordAnalysis,
) -> f64 {
    let score =
        section_score(sections) + contact_score(contact) + keywords.score / 100.0 * 30.0
            + format_score(text);
    score.clamp(0.0, 100.0)
}

fn section_score(sections: &BTreeMap<SectionKind, String>) -> f64 {
    let present = REQUIRED_SECTIONS
        .iter()
        .filter(|kind| sections.contains_key(kind))
        .count();
    present as f64 / REQUIRED_SECTIONS.len() as f64 * 40.0
}

fn contact_score(contact: &ContactInfo) -> f64 {
    let mut score = 0.0;
    if contact.has_email() {
        score += 10.0;
    }
    if contact.has_phone() {
        score += 10.0;
    }
    score
}

fn format_score(text: &str) -> f64 {
    let words = readability::word_count(text);
    let mut score: f64 = 10.0;
    if words < 200 {
        score -= 3.0; // too short
    }
    if words > 800 {
        score -= 2.0; // too long
    }
    score.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sections(kinds: &[SectionKind]) -> BTreeMap<SectionKind, String> {
        kinds
            .iter()
            .map(|k| (*k, "content".to_string()))
            .collect()
    }

    #[test]
    fn general_industry_defaults_to_fifty_with_empty_lists() {
        let dicts = Dictionaries::new();
        let analysis = analyze_keywords(&dicts, "nothing relevant here", Industry::General);
        assert_eq!(analysis.score, 50.0);
        assert!(analysis.found_keywords.is_empty());
        assert!(analysis.missing_keywords.is_empty());
        assert_eq!(analysis.total_possible, 0);
    }

    #[test]
    fn keyword_score_is_coverage_percentage() {
        let dicts = Dictionaries::new();
        let analysis = analyze_keywords(&dicts, "python docker aws", Industry::Technology);
        assert!(analysis.total_found >= 3);
        let expected = analysis.total_found as f64 / analysis.total_possible as f64 * 100.0;
        assert!((analysis.score - expected).abs() < 1e-9);
        assert!(analysis.found_keywords.contains(&"python".to_string()));
        assert!(analysis.missing_keywords.len() <= 10);
    }

    #[test]
    fn contact_score_is_twenty_with_both_and_zero_with_neither() {
        let full = ContactInfo {
            email: Some("a@b.co".to_string()),
            phone: Some("555-123-4567".to_string()),
            ..Default::default()
        };
        assert_eq!(contact_score(&full), 20.0);
        assert_eq!(contact_score(&ContactInfo::default()), 0.0);
    }

    #[test]
    fn ats_score_stays_in_range_for_empty_text() {
        let dicts = Dictionaries::new();
        let keywords = analyze_keywords(&dicts, "", Industry::General);
        let score = calculate_ats_score("", &BTreeMap::new(), &ContactInfo::default(), &keywords);
        assert!((0.0..=100.0).contains(&score));
        // 0 sections + 0 contact + 15 keyword + 7 format
        assert!((score - 22.0).abs() < 1e-9);
    }

    #[test]
    fn short_and_long_resumes_lose_format_points() {
        assert_eq!(format_score("one two three"), 7.0);
        let long = "word ".repeat(900);
        assert_eq!(format_score(&long), 8.0);
        let medium = "word ".repeat(400);
        assert_eq!(format_score(&medium), 10.0);
    }

    #[test]
    fn full_sections_and_contact_reach_the_sub_caps() {
        let sections = with_sections(&REQUIRED_SECTIONS);
        assert_eq!(section_score(&sections), 40.0);
        let partial = with_sections(&[SectionKind::Experience]);
        assert!((section_score(&partial) - 40.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn scoring_is_deterministic() {
        let dicts = Dictionaries::new();
        let text = "Implemented python services with docker, kubernetes and aws.";
        let a = analyze_keywords(&dicts, text, Industry::Technology);
        let b = analyze_keywords(&dicts, text, Industry::Technology);
        assert_eq!(a, b);
    }
}
