//! Integration tests for resume insight

use resume_insight::analysis::types::{Industry, ResumeAnalysis};
use resume_insight::job::types::{ExperienceLevel, JobLevel};
use resume_insight::matching::compute_match;
use resume_insight::{JobParser, ResumeAnalyzer};
use std::path::Path;

async fn analyze_fixture(path: &str) -> ResumeAnalysis {
    let bytes = tokio::fs::read(Path::new(path)).await.unwrap();
    let filename = Path::new(path).file_name().unwrap().to_string_lossy();
    ResumeAnalyzer::new().analyze(&bytes, &filename)
}

#[tokio::test]
async fn test_resume_analysis_from_txt() {
    let analysis = analyze_fixture("tests/fixtures/sample_resume.txt").await;

    assert_eq!(analysis.industry, Industry::Technology);
    assert_eq!(
        analysis.contact_info.email.as_deref(),
        Some("john.doe@example.com")
    );
    assert_eq!(
        analysis.contact_info.phone.as_deref(),
        Some("(555) 123-4567")
    );
    assert!(analysis.contact_info.linkedin_handle.is_some());
    assert!(analysis.contact_info.github_handle.is_some());

    let section_names: Vec<String> = analysis.sections.keys().map(|k| k.to_string()).collect();
    assert!(section_names.contains(&"experience".to_string()));
    assert!(section_names.contains(&"education".to_string()));
    assert!(section_names.contains(&"skills".to_string()));

    assert!(analysis.ats_score > 60.0);
    assert!(analysis.keyword_analysis.total_found > 5);
    assert!(!analysis.strengths.is_empty());
}

#[tokio::test]
async fn test_job_parsing_from_txt() {
    let text = tokio::fs::read_to_string("tests/fixtures/sample_job.txt")
        .await
        .unwrap();
    let analysis = JobParser::new().parse(&text);

    assert_eq!(analysis.requirements.experience.min_years, 5);
    // 5 years sits at the top of the mid bucket (3..=5)
    assert_eq!(analysis.requirements.experience.level, ExperienceLevel::Mid);
    assert_eq!(analysis.job_level, JobLevel::Senior);
    assert_eq!(analysis.industry, Industry::Technology);
    assert!(analysis.requirements.education.degree_required);

    let required = &analysis.requirements.skills.required_skills;
    assert!(required.contains(&"python".to_string()));
    assert!(required.contains(&"aws".to_string()));
    assert!(required.contains(&"docker".to_string()));
    assert!(required.contains(&"postgresql".to_string()));

    assert!(analysis
        .requirements
        .skills
        .preferred_skills
        .contains(&"kubernetes".to_string()));
    assert!(!analysis.benefits.is_empty());
}

#[tokio::test]
async fn test_end_to_end_match_scoring() {
    let resume = analyze_fixture("tests/fixtures/sample_resume.txt").await;
    let job_text = tokio::fs::read_to_string("tests/fixtures/sample_job.txt")
        .await
        .unwrap();
    let job = JobParser::new().parse(&job_text);

    let result = compute_match(&resume, &job);

    assert!((0.0..=100.0).contains(&result.overall_score));
    assert!(result.overall_score > 50.0);
    // Same industry on both sides
    assert_eq!(result.category_scores.industry, 100.0);
    // 5+ years is the lowest experience bucket
    assert_eq!(result.category_scores.experience, 60.0);
}

#[tokio::test]
async fn test_corrupt_pdf_falls_back_to_empty_analysis() {
    let analyzer = ResumeAnalyzer::new();
    let analysis = analyzer.analyze(b"this is not a pdf", "resume.pdf");

    assert!(analysis.ats_score <= 60.0);
    assert!(analysis.sections.is_empty());
    assert!(!analysis.weaknesses.is_empty());
}

#[tokio::test]
async fn test_resume_analysis_json_round_trip() {
    let analysis = analyze_fixture("tests/fixtures/sample_resume.txt").await;

    let json = serde_json::to_string(&analysis).unwrap();
    let parsed: ResumeAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(analysis, parsed);

    // Wire field names are camelCase
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["atsScore"].is_number());
    assert!(value["contactInfo"]["email"].is_string());
    assert!(value["keywordAnalysis"]["foundKeywords"].is_array());
}

#[tokio::test]
async fn test_analysis_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    tokio::fs::write(
        &path,
        "jane@example.com\nExperience\nDeveloped software in Python.\nSkills\nPython, AWS",
    )
    .await
    .unwrap();

    let bytes = tokio::fs::read(&path).await.unwrap();
    let analysis = ResumeAnalyzer::new().analyze(&bytes, "resume.txt");

    assert_eq!(analysis.industry, Industry::Technology);
    assert!(analysis.contact_info.has_email());
    assert!(analysis.sections.len() >= 2);
}
