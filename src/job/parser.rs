//! Job description parsing: requirements, keywords, level and company signals

use crate::analysis::keywords::{Dictionaries, JOB_INDUSTRY_KEYWORDS, SKILL_CATEGORIES};
use crate::analysis::types::Industry;
use crate::job::types::{
    CompanyInfo, CompanyType, DegreeLevel, EducationRequirement, ExperienceLevel,
    ExperienceRequirement, JobAnalysis, JobLevel, KeywordStats, Requirements, SkillRequirements,
};
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use unicode_segmentation::UnicodeSegmentation;

const TOP_WORDS: usize = 20;
const TOP_PHRASES: usize = 10;
const MAX_SKILLS_PER_MATCH: usize = 10;
const MAX_BENEFITS: usize = 10;
const GENERIC_SKILL_TERMS: [&str; 4] = ["etc", "experience", "knowledge", "work"];

const SENIOR_INDICATORS: [&str; 7] =
    ["senior", "lead", "principal", "staff", "architect", "manager", "director"];
const JUNIOR_INDICATORS: [&str; 5] = ["junior", "entry", "associate", "intern", "graduate"];
const MID_INDICATORS: [&str; 2] = ["mid", "intermediate"];

pub struct JobParser {
    experience_years: Vec<Regex>,
    specific_experience: Regex,
    degree_levels: Vec<(Option<DegreeLevel>, Regex)>,
    preferred_fields: Regex,
    certifications: Vec<Regex>,
    required_skills: Vec<Regex>,
    preferred_skills: Vec<Regex>,
    skill_connectors: Regex,
    benefit_lists: Vec<Regex>,
    benefit_terms: Regex,
    company_size: Vec<Regex>,
}

impl JobParser {
    pub fn new() -> Self {
        let valid = "job parser patterns are valid";
        Self {
            experience_years: vec![
                Regex::new(r"(\d+)\+?\s*years?\s*(?:of\s*)?(?:experience|exp)").expect(valid),
                Regex::new(r"(\d+)\+?\s*years?\s*(?:in|with|of)").expect(valid),
                Regex::new(r"minimum\s*(\d+)\s*years?").expect(valid),
                Regex::new(r"at\s*least\s*(\d+)\s*years?").expect(valid),
            ],
            specific_experience: Regex::new(
                r"experience\s*(?:in|with|of)\s*([\w\s,.-]+?)(?:\.|,|;|\n|$)",
            )
            .expect(valid),
            // Tested in declaration order; first match wins
            degree_levels: vec![
                (Some(DegreeLevel::Bachelor), Regex::new(r"bachelor").expect(valid)),
                (Some(DegreeLevel::Master), Regex::new(r"master").expect(valid)),
                (Some(DegreeLevel::Doctorate), Regex::new(r"phd|doctorate").expect(valid)),
                (None, Regex::new(r"associate").expect(valid)),
                (None, Regex::new(r"high\s*school|diploma").expect(valid)),
            ],
            preferred_fields: Regex::new(r"(?:bachelor|master|degree)(?:'s)?\s*in\s*([\w\s]+)")
                .expect(valid),
            certifications: vec![
                Regex::new(r"certified\s*(?:in\s*)?([\w\s]+)").expect(valid),
                Regex::new(r"certification\s*(?:in\s*)?([\w\s]+)").expect(valid),
                Regex::new(r"license\s*(?:in\s*)?([\w\s]+)").expect(valid),
            ],
            required_skills: vec![
                Regex::new(r"(?:required|must\s*have|mandatory)[:,]?\s*([^.]+)").expect(valid),
                Regex::new(r"(?:experience\s*(?:in|with)|proficient\s*(?:in|with))[:,]?\s*([^.]+)")
                    .expect(valid),
            ],
            preferred_skills: vec![
                Regex::new(r"(?:preferred|nice\s*to\s*have|bonus|plus)[:,]?\s*([^.]+)")
                    .expect(valid),
                Regex::new(r"(?:familiarity\s*with|knowledge\s*of)[:,]?\s*([^.]+)").expect(valid),
            ],
            skill_connectors: Regex::new(r"\band\b|\bor\b").expect(valid),
            benefit_lists: vec![
                Regex::new(r"(?:benefits?|perks?)[:,]?\s*([^.]+)").expect(valid),
                Regex::new(r"(?:we\s*offer|offering)[:,]?\s*([^.]+)").expect(valid),
            ],
            benefit_terms: Regex::new(
                r"health|medical|dental|vision|insurance|401k|pto|vacation",
            )
            .expect(valid),
            company_size: vec![
                Regex::new(r"(\d+\+?)\s*(?:employees?|people|team\s*members)").expect(valid),
                Regex::new(r"startup|small\s*business|enterprise|fortune\s*\d+").expect(valid),
                Regex::new(r"growing|established|leading|global").expect(valid),
            ],
        }
    }

    /// Parses a job posting. Empty text is not an error: it yields
    /// near-empty requirement sets with the documented defaults.
    pub fn parse(&self, job_text: &str) -> JobAnalysis {
        let lower = job_text.to_lowercase();

        let requirements = Requirements {
            experience: self.extract_experience(&lower),
            education: self.extract_education(&lower),
            skills: self.extract_skills(&lower),
        };
        let keywords = self.extract_keywords(&lower);
        let job_level = determine_job_level(&lower);
        let industry = detect_job_industry(&lower);
        debug!("parsed job posting: {} industry, {:?} level", industry, job_level);

        JobAnalysis {
            raw_text: job_text.to_string(),
            word_count: job_text.split_whitespace().count(),
            requirements,
            keywords,
            job_level,
            industry,
            benefits: self.extract_benefits(&lower),
            company_info: self.extract_company_info(&lower),
        }
    }

    fn extract_experience(&self, lower: &str) -> ExperienceRequirement {
        let mut years_found: Vec<u32> = Vec::new();
        for pattern in &self.experience_years {
            for caps in pattern.captures_iter(lower) {
                if let Ok(years) = caps[1].parse::<u32>() {
                    years_found.push(years);
                }
            }
        }

        let min_years = years_found.iter().copied().min().unwrap_or(0);
        let mut distinct = years_found.clone();
        distinct.sort_unstable();
        distinct.dedup();
        let max_years = if distinct.len() > 1 {
            years_found.iter().copied().max()
        } else {
            None
        };

        let level = match min_years {
            0 => ExperienceLevel::Entry,
            1..=2 => ExperienceLevel::Junior,
            3..=5 => ExperienceLevel::Mid,
            _ => ExperienceLevel::Senior,
        };

        let specific_experience: Vec<String> = self
            .specific_experience
            .captures_iter(lower)
            .map(|caps| caps[1].trim().to_string())
            .filter(|phrase| phrase.len() > 3)
            .collect();

        ExperienceRequirement {
            min_years,
            max_years,
            specific_experience,
            level,
        }
    }

    fn extract_education(&self, lower: &str) -> EducationRequirement {
        let mut degree_required = false;
        let mut degree_level = None;
        for (level, pattern) in &self.degree_levels {
            if pattern.is_match(lower) {
                degree_required = true;
                degree_level = *level;
                break;
            }
        }

        let preferred_fields: Vec<String> = self
            .preferred_fields
            .captures_iter(lower)
            .map(|caps| caps[1].trim().to_string())
            .filter(|field| field.len() > 2)
            .collect();

        let mut certifications = Vec::new();
        for pattern in &self.certifications {
            for caps in pattern.captures_iter(lower) {
                let name = caps[1].trim().to_string();
                if name.len() > 2 {
                    certifications.push(name);
                }
            }
        }

        EducationRequirement {
            degree_required,
            degree_level,
            preferred_fields,
            certifications,
        }
    }

    fn extract_skills(&self, lower: &str) -> SkillRequirements {
        let mut required = Vec::new();
        let mut preferred = Vec::new();

        for pattern in &self.required_skills {
            for caps in pattern.captures_iter(lower) {
                required.extend(self.parse_skill_list(&caps[1]));
            }
        }
        for pattern in &self.preferred_skills {
            for caps in pattern.captures_iter(lower) {
                preferred.extend(self.parse_skill_list(&caps[1]));
            }
        }

        let all_skills: Vec<String> = required.iter().chain(preferred.iter()).cloned().collect();

        let mut categorized: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (category, category_skills) in SKILL_CATEGORIES {
            let bucket: Vec<String> = all_skills
                .iter()
                .filter(|skill| category_skills.iter().any(|cs| skill.contains(cs)))
                .cloned()
                .collect();
            categorized.insert(category.to_string(), bucket);
        }

        let mut frequency: BTreeMap<String, usize> = BTreeMap::new();
        for skill in &all_skills {
            *frequency.entry(skill.clone()).or_insert(0) += 1;
        }

        SkillRequirements {
            required_skills: required,
            preferred_skills: preferred,
            categorized_skills: categorized,
            skill_frequency: frequency,
        }
    }

    /// Splits a captured skill phrase on commas (with and/or treated as
    /// commas), dropping short or generic fragments.
    fn parse_skill_list(&self, phrase: &str) -> Vec<String> {
        let normalized = self.skill_connectors.replace_all(phrase, ",");
        normalized
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| s.len() > 2 && !GENERIC_SKILL_TERMS.contains(&s.as_str()))
            .take(MAX_SKILLS_PER_MATCH)
            .collect()
    }

    fn extract_keywords(&self, lower: &str) -> KeywordStats {
        let mut word_freq: HashMap<&str, usize> = HashMap::new();
        for word in lower.unicode_words() {
            if word.chars().all(|c| c.is_alphabetic()) && !Dictionaries::is_stop_word(word) {
                *word_freq.entry(word).or_insert(0) += 1;
            }
        }
        let total_unique_words = word_freq.len();
        let total_words = word_freq.values().sum();
        let top_words = top_n(word_freq, TOP_WORDS);

        let tokens: Vec<&str> = lower.split_whitespace().collect();
        let mut phrase_freq: HashMap<String, usize> = HashMap::new();
        for pair in tokens.windows(2) {
            let phrase = format!("{} {}", pair[0], pair[1]);
            // Keep bigrams that are long enough and not purely stop-words
            if phrase.len() > 6
                && !(Dictionaries::is_stop_word(pair[0]) && Dictionaries::is_stop_word(pair[1]))
            {
                *phrase_freq.entry(phrase).or_insert(0) += 1;
            }
        }
        let top_phrases = top_n(phrase_freq, TOP_PHRASES);

        KeywordStats {
            top_words,
            top_phrases,
            total_unique_words,
            total_words,
        }
    }

    fn extract_benefits(&self, lower: &str) -> Vec<String> {
        let mut benefits = Vec::new();
        for pattern in &self.benefit_lists {
            for caps in pattern.captures_iter(lower) {
                benefits.extend(
                    caps[1]
                        .split(',')
                        .map(|b| b.trim().to_string())
                        .filter(|b| !b.is_empty()),
                );
            }
        }
        for mat in self.benefit_terms.find_iter(lower) {
            benefits.push(mat.as_str().to_string());
        }
        benefits.truncate(MAX_BENEFITS);
        benefits
    }

    fn extract_company_info(&self, lower: &str) -> CompanyInfo {
        let mut size_indicators = Vec::new();
        for pattern in &self.company_size {
            for caps in pattern.captures_iter(lower) {
                let indicator = caps
                    .get(1)
                    .map(|m| m.as_str())
                    .unwrap_or_else(|| caps.get(0).map(|m| m.as_str()).unwrap_or(""));
                if !indicator.is_empty() {
                    size_indicators.push(indicator.to_string());
                }
            }
        }

        let company_type = if lower.contains("startup") || lower.contains("early stage") {
            CompanyType::Startup
        } else if lower.contains("enterprise")
            || lower.contains("fortune")
            || lower.contains("established")
        {
            CompanyType::Enterprise
        } else {
            CompanyType::MidSize
        };

        CompanyInfo {
            size_indicators,
            company_type,
        }
    }
}

impl Default for JobParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Seniority by indicator lists in fixed priority order, defaulting to mid.
fn determine_job_level(lower: &str) -> JobLevel {
    if SENIOR_INDICATORS.iter().any(|i| lower.contains(i)) {
        JobLevel::Senior
    } else if JUNIOR_INDICATORS.iter().any(|i| lower.contains(i)) {
        JobLevel::Junior
    } else if MID_INDICATORS.iter().any(|i| lower.contains(i)) {
        JobLevel::Mid
    } else {
        JobLevel::Mid
    }
}

/// Occurrence-count argmax over the job industry dictionaries; ties go to
/// the earliest declaration and an all-zero scan means `general`.
fn detect_job_industry(lower: &str) -> Industry {
    let mut best: Option<(Industry, usize)> = None;
    for (industry, indicators) in JOB_INDUSTRY_KEYWORDS {
        let score: usize = indicators.iter().map(|kw| lower.matches(kw).count()).sum();
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((*industry, score)),
        }
    }
    match best {
        Some((industry, score)) if score > 0 => industry,
        _ => Industry::General,
    }
}

/// Deterministic top-N selection: count descending, then key ascending.
fn top_n<K: Into<String> + Ord>(freq: HashMap<K, usize>, n: usize) -> BTreeMap<String, usize> {
    let mut entries: Vec<(K, usize)> = freq.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(k, v)| (k.into(), v))
        .collect()
}
