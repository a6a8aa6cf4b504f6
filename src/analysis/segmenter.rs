//! Section segmentation by header-keyword matching

use crate::analysis::types::SectionKind;
use std::collections::BTreeMap;

/// Header keyword lists in tie-break order: when a line matches keywords
/// from two categories, the earlier declaration wins.
const SECTION_HEADERS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Experience,
        &["experience", "work history", "employment", "professional experience", "work experience"],
    ),
    (
        SectionKind::Education,
        &["education", "academic background", "qualifications"],
    ),
    (
        SectionKind::Skills,
        &["skills", "technical skills", "competencies", "expertise"],
    ),
    (
        SectionKind::Summary,
        &["summary", "profile", "objective", "professional summary", "career objective"],
    ),
    (
        SectionKind::Projects,
        &["projects", "key projects", "notable projects"],
    ),
    (
        SectionKind::Certifications,
        &["certifications", "certificates", "licenses"],
    ),
];

/// Splits resume text into labeled sections.
///
/// Scans line by line: a line whose lowercased trimmed form contains any
/// header keyword opens that section; following lines accumulate until the
/// next header. Lines before the first recognized header are dropped (name
/// and contact noise handled by the contact extractor).
pub fn extract_sections(text: &str) -> BTreeMap<SectionKind, String> {
    let mut sections = BTreeMap::new();
    let mut current: Option<SectionKind> = None;
    let mut accumulator: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line_lower = line.to_lowercase();
        let line_lower = line_lower.trim();

        match classify_header(line_lower) {
            Some(kind) => {
                flush(&mut sections, current, &accumulator);
                current = Some(kind);
                accumulator.clear();
            }
            None => {
                if current.is_some() {
                    accumulator.push(line);
                }
            }
        }
    }
    flush(&mut sections, current, &accumulator);

    sections
}

fn classify_header(line_lower: &str) -> Option<SectionKind> {
    for (kind, headers) in SECTION_HEADERS {
        if headers.iter().any(|h| line_lower.contains(h)) {
            return Some(*kind);
        }
    }
    None
}

fn flush(sections: &mut BTreeMap<SectionKind, String>, current: Option<SectionKind>, lines: &[&str]) {
    if let Some(kind) = current {
        let content = lines.join("\n");
        if !content.is_empty() {
            sections.insert(kind, content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_basic_sections() {
        let text = "John Doe\n\nSummary\nTen years building backends\n\nExperience\nSoftware developer at Acme\n\nSkills\nRust, Python";
        let sections = extract_sections(text);
        assert_eq!(sections[&SectionKind::Summary].trim(), "Ten years building backends");
        assert!(sections[&SectionKind::Experience].contains("Software developer at Acme"));
        assert!(sections[&SectionKind::Skills].contains("Rust, Python"));
    }

    #[test]
    fn content_line_with_header_keyword_opens_a_new_section() {
        // "Experienced developer" contains "experience" and reopens that section
        let text = "Summary\nExperienced developer\nShipped things";
        let sections = extract_sections(text);
        assert!(!sections.contains_key(&SectionKind::Summary));
        assert_eq!(sections[&SectionKind::Experience].trim(), "Shipped things");
    }

    #[test]
    fn drops_lines_before_first_header() {
        let text = "Jane Roe\njane@roe.dev\nEducation\nBSc Mathematics";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert!(sections[&SectionKind::Education].contains("BSc Mathematics"));
        assert!(!sections[&SectionKind::Education].contains("jane@roe.dev"));
    }

    #[test]
    fn header_without_body_produces_no_entry() {
        let sections = extract_sections("Projects");
        assert!(sections.is_empty());
    }

    #[test]
    fn earlier_declared_category_wins_ties() {
        // "experience" (experience) and "expertise" (skills) on one line
        let text = "Experience and Expertise\nShipped release pipelines";
        let sections = extract_sections(text);
        assert!(sections.contains_key(&SectionKind::Experience));
        assert!(!sections.contains_key(&SectionKind::Skills));
    }

    #[test]
    fn repeated_header_reopens_the_section() {
        let text = "Skills\nRust\nExperience\nAcme Corp\nTechnical Skills\nPython";
        let sections = extract_sections(text);
        // The later skills block overwrites the earlier one
        assert_eq!(sections[&SectionKind::Skills].trim(), "Python");
        assert!(sections[&SectionKind::Experience].contains("Acme Corp"));
    }

    #[test]
    fn matches_header_keywords_case_insensitively() {
        let text = "WORK HISTORY\nTen years at sea";
        let sections = extract_sections(text);
        assert!(sections[&SectionKind::Experience].contains("Ten years at sea"));
    }
}
