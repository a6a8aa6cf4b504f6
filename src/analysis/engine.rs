//! Resume analysis facade coordinating the pipeline components

use crate::analysis::contact::ContactExtractor;
use crate::analysis::keywords::Dictionaries;
use crate::analysis::recommend::{self, Recommender};
use crate::analysis::types::ResumeAnalysis;
use crate::analysis::{industry, readability, scorer, segmenter};
use crate::error::{Result, ResumeInsightError};
use crate::input;
use log::{debug, warn};
use std::sync::Arc;

/// Stateless analysis engine. Dictionaries and compiled patterns are built
/// once here and shared read-only, so one analyzer can serve concurrent
/// callers without coordination.
pub struct ResumeAnalyzer {
    dictionaries: Arc<Dictionaries>,
    contact: ContactExtractor,
    recommender: Recommender,
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self {
            dictionaries: Arc::new(Dictionaries::new()),
            contact: ContactExtractor::new(),
            recommender: Recommender::new(),
        }
    }

    /// Analyzes an uploaded document. Extraction failures and empty content
    /// degrade to a conservative fallback analysis instead of erroring, so
    /// the caller can always respond.
    pub fn analyze(&self, bytes: &[u8], filename: &str) -> ResumeAnalysis {
        match self.try_analyze(bytes, filename) {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!("falling back to default analysis for {}: {}", filename, err);
                self.fallback_analysis()
            }
        }
    }

    /// Like [`analyze`](Self::analyze), but surfaces the extraction error
    /// (`PdfExtraction` / `DocxExtraction`) or `EmptyContent` to callers
    /// that want the failure flag.
    pub fn try_analyze(&self, bytes: &[u8], filename: &str) -> Result<ResumeAnalysis> {
        let text = input::extract_text(bytes, filename)?;
        if text.trim().is_empty() {
            return Err(ResumeInsightError::EmptyContent);
        }
        Ok(self.analyze_text(&text))
    }

    /// Analyzes already-extracted text. Pure and deterministic: identical
    /// text always yields an identical analysis.
    pub fn analyze_text(&self, text: &str) -> ResumeAnalysis {
        let text_lower = text.to_lowercase();

        let word_count = readability::word_count(text);
        let sentence_count = readability::sentence_count(text);
        let readability_score = readability::flesch_reading_ease(text);

        let sections = segmenter::extract_sections(text);
        let contact_info = self.contact.extract(text);
        let industry = industry::detect_industry(&self.dictionaries, &text_lower);
        debug!("classified resume as {} ({} sections)", industry, sections.len());

        let keyword_analysis = scorer::analyze_keywords(&self.dictionaries, text, industry);
        let ats_score = scorer::calculate_ats_score(text, &sections, &contact_info, &keyword_analysis);

        let recommendations = self.recommender.generate(
            &self.dictionaries,
            text,
            &sections,
            &contact_info,
            &keyword_analysis,
            industry,
        );
        let strengths =
            recommend::identify_strengths(&self.dictionaries, text, &sections, &keyword_analysis);
        let weaknesses =
            recommend::identify_weaknesses(text, &sections, &contact_info, &keyword_analysis);

        ResumeAnalysis {
            raw_text: text.to_string(),
            word_count,
            sentence_count,
            readability_score,
            sections,
            contact_info,
            industry,
            keyword_analysis,
            ats_score,
            recommendations,
            strengths,
            weaknesses,
        }
    }

    /// Minimal analysis used when nothing could be extracted: conservative
    /// scores and explicit weaknesses, never a failure.
    pub fn fallback_analysis(&self) -> ResumeAnalysis {
        self.analyze_text("")
    }

    pub fn dictionaries(&self) -> Arc<Dictionaries> {
        Arc::clone(&self.dictionaries)
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{Industry, SectionKind};

    const SAMPLE: &str = "John Doe\njohn@x.com\n(555) 123-4567\nExperience\nDeveloped software using Python, AWS.\nEducation\nBachelor of Science\nSkills\nPython, AWS";

    #[test]
    fn analyzes_a_complete_resume() {
        let analyzer = ResumeAnalyzer::new();
        let analysis = analyzer.analyze_text(SAMPLE);

        assert!(analysis.sections.contains_key(&SectionKind::Experience));
        assert!(analysis.sections.contains_key(&SectionKind::Education));
        assert!(analysis.sections.contains_key(&SectionKind::Skills));
        assert_eq!(analysis.contact_info.email.as_deref(), Some("john@x.com"));
        assert_eq!(analysis.industry, Industry::Technology);
        assert!(analysis.ats_score > 60.0);
    }

    #[test]
    fn empty_bytes_degrade_to_fallback() {
        let analyzer = ResumeAnalyzer::new();
        let analysis = analyzer.analyze(b"", "resume.txt");
        assert!(analysis.ats_score <= 60.0);
        assert!(!analysis.weaknesses.is_empty());
    }

    #[test]
    fn try_analyze_reports_empty_content() {
        let analyzer = ResumeAnalyzer::new();
        let err = analyzer.try_analyze(b"   \n ", "resume.txt").unwrap_err();
        assert!(matches!(err, ResumeInsightError::EmptyContent));
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = ResumeAnalyzer::new();
        let a = analyzer.analyze_text(SAMPLE);
        let b = analyzer.analyze_text(SAMPLE);
        assert_eq!(a, b);
    }
}
