//! Industry classification against per-industry keyword dictionaries

use crate::analysis::keywords::Dictionaries;
use crate::analysis::types::Industry;

/// Picks the industry whose dictionary keywords occur most often in the
/// lowercased text. Ties go to the earliest-declared industry; when every
/// score is zero the resume is classified as `general`.
pub fn detect_industry(dicts: &Dictionaries, text_lower: &str) -> Industry {
    let mut best: Option<(Industry, usize)> = None;

    for profile in dicts.profiles() {
        let score = profile.occurrence_count(text_lower);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((profile.industry, score)),
        }
    }

    match best {
        Some((industry, score)) if score > 0 => industry,
        _ => Industry::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_technology_resume() {
        let dicts = Dictionaries::new();
        let text = "developed microservices in python, deployed with docker on aws";
        assert_eq!(detect_industry(&dicts, text), Industry::Technology);
    }

    #[test]
    fn classifies_healthcare_resume() {
        let dicts = Dictionaries::new();
        let text = "administered patient care, clinical assessment, documented medical records, hipaa compliance, infection control, cna, bls, acls, rn";
        assert_eq!(detect_industry(&dicts, text), Industry::Healthcare);
    }

    #[test]
    fn all_zero_scores_fall_back_to_general() {
        let dicts = Dictionaries::new();
        assert_eq!(detect_industry(&dicts, "zzz qqq xxx"), Industry::General);
    }

    #[test]
    fn ties_resolve_to_earliest_declared_industry() {
        let dicts = Dictionaries::new();
        // "scrum" is technology-only, "seo" is marketing-only: one hit each
        assert_eq!(detect_industry(&dicts, "scrum seo"), Industry::Technology);
    }

    #[test]
    fn classification_is_idempotent() {
        let dicts = Dictionaries::new();
        let text = "launched seo campaigns and email marketing with hubspot";
        let first = detect_industry(&dicts, text);
        let second = detect_industry(&dicts, text);
        assert_eq!(first, second);
        assert_eq!(first, Industry::Marketing);
    }
}
