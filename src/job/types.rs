//! Value types produced by the job description parser

use crate::analysis::types::Industry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    Bachelor,
    Master,
    Doctorate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Senior,
    Junior,
    Mid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    #[serde(rename = "startup")]
    Startup,
    #[serde(rename = "enterprise")]
    Enterprise,
    #[serde(rename = "mid-size")]
    MidSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequirement {
    pub min_years: u32,
    /// Only set when more than one distinct year figure was mentioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_years: Option<u32>,
    /// "experience in/with X" phrases as written in the posting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_experience: Vec<String>,
    pub level: ExperienceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequirement {
    pub degree_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<DegreeLevel>,
    pub preferred_fields: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirements {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub categorized_skills: BTreeMap<String, Vec<String>>,
    pub skill_frequency: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub experience: ExperienceRequirement,
    pub education: EducationRequirement,
    pub skills: SkillRequirements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    /// Top 20 non-stop-words by frequency.
    pub top_words: BTreeMap<String, usize>,
    /// Top 10 adjacent two-word phrases by frequency.
    pub top_phrases: BTreeMap<String, usize>,
    pub total_unique_words: usize,
    pub total_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub size_indicators: Vec<String>,
    pub company_type: CompanyType,
}

/// Full analysis of one job posting, derived fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub raw_text: String,
    pub word_count: usize,
    pub requirements: Requirements,
    pub keywords: KeywordStats,
    pub job_level: JobLevel,
    pub industry: Industry,
    pub benefits: Vec<String>,
    pub company_info: CompanyInfo,
}
