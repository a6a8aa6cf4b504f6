//! Weighted match scoring between a resume analysis and a job analysis

use crate::analysis::types::{Industry, Priority, ResumeAnalysis};
use crate::job::types::{JobAnalysis, SkillRequirements};
use crate::matching::types::{
    CategoryScores, MatchRecommendation, MatchRecommendationKind, MatchResult,
};

const EXPERIENCE_WEIGHT: f64 = 0.30;
const SKILLS_WEIGHT: f64 = 0.40;
const EDUCATION_WEIGHT: f64 = 0.15;
const INDUSTRY_WEIGHT: f64 = 0.15;

const STRENGTH_THRESHOLD: f64 = 80.0;
const GAP_THRESHOLD: f64 = 60.0;
const MISSING_SKILL_SUGGESTIONS: usize = 5;

/// Combines resume-side and job-side signals into an overall match score
/// with a category breakdown, strengths, gaps and recommendations.
pub fn compute_match(resume: &ResumeAnalysis, job: &JobAnalysis) -> MatchResult {
    let category_scores = CategoryScores {
        experience: experience_score(job),
        skills: skills_score(resume, &job.requirements.skills),
        education: education_score(job),
        industry: industry_score(resume.industry, job.industry),
    };

    let overall_score = category_scores.experience * EXPERIENCE_WEIGHT
        + category_scores.skills * SKILLS_WEIGHT
        + category_scores.education * EDUCATION_WEIGHT
        + category_scores.industry * INDUSTRY_WEIGHT;

    let (strengths, gaps, recommendations) = generate_insights(resume, job, &category_scores);

    MatchResult {
        overall_score,
        category_scores,
        strengths,
        gaps,
        recommendations,
    }
}

/// Coarse bucket of the job's minimum-years requirement. Known limitation
/// carried over from the original scoring model: the resume's own detected
/// experience is not consulted.
fn experience_score(job: &JobAnalysis) -> f64 {
    let min_years = job.requirements.experience.min_years;
    if min_years == 0 {
        90.0
    } else if min_years <= 3 {
        75.0
    } else {
        60.0
    }
}

/// Required skills carry 80 points, preferred skills 20. An empty list
/// contributes its full allocation rather than being treated as 0/0.
fn skills_score(resume: &ResumeAnalysis, job_skills: &SkillRequirements) -> f64 {
    let resume_keywords: Vec<String> = resume
        .keyword_analysis
        .found_keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .collect();

    let required_score = ratio_score(&job_skills.required_skills, &resume_keywords, 80.0);
    let preferred_score = ratio_score(&job_skills.preferred_skills, &resume_keywords, 20.0);

    (required_score + preferred_score).min(100.0)
}

fn ratio_score(job_skills: &[String], resume_keywords: &[String], allocation: f64) -> f64 {
    if job_skills.is_empty() {
        return allocation;
    }
    let matches = job_skills
        .iter()
        .filter(|skill| skill_matches(skill, resume_keywords))
        .count();
    matches as f64 / job_skills.len() as f64 * allocation
}

fn skill_matches(skill: &str, resume_keywords: &[String]) -> bool {
    let skill = skill.to_lowercase();
    resume_keywords.iter().any(|kw| kw.contains(&skill))
}

fn education_score(job: &JobAnalysis) -> f64 {
    if !job.requirements.education.degree_required {
        100.0
    } else {
        // Fixed allowance; the resume's education section is not verified
        75.0
    }
}

fn industry_score(resume_industry: Industry, job_industry: Industry) -> f64 {
    let transferable = [Industry::Technology, Industry::General];
    if resume_industry == job_industry {
        100.0
    } else if transferable.contains(&resume_industry) || transferable.contains(&job_industry) {
        70.0
    } else {
        50.0
    }
}

fn generate_insights(
    resume: &ResumeAnalysis,
    job: &JobAnalysis,
    scores: &CategoryScores,
) -> (Vec<String>, Vec<String>, Vec<MatchRecommendation>) {
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();
    let mut recommendations = Vec::new();

    if scores.skills >= STRENGTH_THRESHOLD {
        strengths.push("Strong skills alignment with job requirements".to_string());
    }
    if scores.experience >= STRENGTH_THRESHOLD {
        strengths.push("Experience level matches job expectations".to_string());
    }
    if scores.industry >= STRENGTH_THRESHOLD {
        strengths.push("Strong industry background for this role".to_string());
    }

    if scores.skills < GAP_THRESHOLD {
        gaps.push("Missing several key technical skills".to_string());
    }
    if scores.experience < GAP_THRESHOLD {
        gaps.push("Experience level below job requirements".to_string());
    }
    if scores.education < GAP_THRESHOLD {
        gaps.push("Education requirements not fully met".to_string());
    }

    let resume_keywords: Vec<String> = resume
        .keyword_analysis
        .found_keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .collect();
    let missing_required: Vec<String> = job
        .requirements
        .skills
        .required_skills
        .iter()
        .take(MISSING_SKILL_SUGGESTIONS)
        .filter(|skill| !skill_matches(skill, &resume_keywords))
        .cloned()
        .collect();

    if !missing_required.is_empty() {
        recommendations.push(MatchRecommendation {
            kind: MatchRecommendationKind::AddSkills,
            priority: Priority::High,
            title: "Add Missing Required Skills".to_string(),
            description: format!(
                "Consider adding these skills: {}",
                missing_required.join(", ")
            ),
            skills: missing_required,
        });
    }

    if scores.experience < 70.0 {
        recommendations.push(MatchRecommendation {
            kind: MatchRecommendationKind::HighlightExperience,
            priority: Priority::Medium,
            title: "Emphasize Relevant Experience".to_string(),
            description:
                "Highlight projects and achievements that demonstrate the required experience level"
                    .to_string(),
            skills: Vec::new(),
        });
    }

    (strengths, gaps, recommendations)
}
