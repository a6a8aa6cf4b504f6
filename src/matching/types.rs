//! Value types produced by the match scorer

use crate::analysis::types::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRecommendationKind {
    AddSkills,
    HighlightExperience,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecommendation {
    #[serde(rename = "type")]
    pub kind: MatchRecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Per-category scores in [0, 100], weighted into the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
    pub industry: f64,
}

/// Weighted compatibility of one resume analysis with one job analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// 0.30*experience + 0.40*skills + 0.15*education + 0.15*industry
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<MatchRecommendation>,
}
