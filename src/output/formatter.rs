//! Formatters that render analysis results for the console, as JSON, or as Markdown

use crate::analysis::types::{Priority, ResumeAnalysis};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::job::types::JobAnalysis;
use crate::matching::types::MatchResult;
use colored::{Color, Colorize};

/// Renders each report kind in one output format.
pub trait ReportFormatter {
    fn format_resume(&self, analysis: &ResumeAnalysis) -> Result<String>;
    fn format_job(&self, analysis: &JobAnalysis) -> Result<String>;
    fn format_match(&self, result: &MatchResult) -> Result<String>;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and scripting
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

pub fn formatter_for(format: OutputFormat, detailed: bool, use_colors: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score as u32 {
            80..=100 => ("EXCELLENT", Color::Green),
            60..=79 => ("GOOD", Color::Yellow),
            40..=59 => ("FAIR", Color::BrightYellow),
            _ => ("NEEDS WORK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority(&self, priority: &Priority) -> String {
        let (label, color) = match priority {
            Priority::High => ("HIGH", Color::Red),
            Priority::Medium => ("MEDIUM", Color::Yellow),
            Priority::Low => ("LOW", Color::Green),
        };

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format_resume(&self, analysis: &ResumeAnalysis) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 Resume Analysis"));
        output.push_str(&format!(
            "ATS Score: {:.1}% {}\n",
            analysis.ats_score,
            self.format_score_badge(analysis.ats_score)
        ));
        output.push_str(&format!(
            "Industry: {}\n",
            self.colorize(&analysis.industry.to_string(), Color::Cyan)
        ));
        output.push_str(&format!(
            "Words: {} | Sentences: {} | Readability: {:.1}\n",
            analysis.word_count, analysis.sentence_count, analysis.readability_score
        ));

        output.push_str(&self.format_header("Sections"));
        if analysis.sections.is_empty() {
            output.push_str("  (none detected)\n");
        }
        for (kind, content) in &analysis.sections {
            output.push_str(&format!("  • {}: {} characters\n", kind, content.len()));
        }

        output.push_str(&self.format_header("Contact"));
        output.push_str(&format!(
            "  Email: {}\n",
            analysis.contact_info.email.as_deref().unwrap_or("not found")
        ));
        output.push_str(&format!(
            "  Phone: {}\n",
            analysis.contact_info.phone.as_deref().unwrap_or("not found")
        ));

        output.push_str(&self.format_header("Keywords"));
        output.push_str(&format!(
            "  Coverage: {:.1}% ({} of {} dictionary keywords)\n",
            analysis.keyword_analysis.score,
            analysis.keyword_analysis.total_found,
            analysis.keyword_analysis.total_possible
        ));
        if self.detailed && !analysis.keyword_analysis.found_keywords.is_empty() {
            output.push_str(&format!(
                "  Found: {}\n",
                analysis.keyword_analysis.found_keywords.join(", ")
            ));
        }
        if !analysis.keyword_analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "  Missing: {}\n",
                analysis.keyword_analysis.missing_keywords.join(", ")
            ));
        }

        if !analysis.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths"));
            for strength in &analysis.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !analysis.weaknesses.is_empty() {
            output.push_str(&self.format_header("⚠️  Weaknesses"));
            for weakness in &analysis.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }
        }

        if !analysis.recommendations.is_empty() {
            output.push_str(&self.format_header("💡 Recommendations"));
            for (i, rec) in analysis.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} {}\n",
                    i + 1,
                    self.format_priority(&rec.priority),
                    rec.title
                ));
                output.push_str(&format!("     {}\n", rec.description));
            }
        }

        Ok(output)
    }

    fn format_job(&self, analysis: &JobAnalysis) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("💼 Job Description Analysis"));
        output.push_str(&format!(
            "Industry: {} | Level: {:?} | Words: {}\n",
            self.colorize(&analysis.industry.to_string(), Color::Cyan),
            analysis.job_level,
            analysis.word_count
        ));

        output.push_str(&self.format_header("Experience"));
        let exp = &analysis.requirements.experience;
        match exp.max_years {
            Some(max) => output.push_str(&format!("  {}-{} years ({:?})\n", exp.min_years, max, exp.level)),
            None => output.push_str(&format!("  {}+ years ({:?})\n", exp.min_years, exp.level)),
        }

        output.push_str(&self.format_header("Education"));
        if analysis.requirements.education.degree_required {
            output.push_str(&format!(
                "  Degree required{}\n",
                analysis
                    .requirements
                    .education
                    .degree_level
                    .map(|l| format!(" ({:?})", l))
                    .unwrap_or_default()
            ));
        } else {
            output.push_str("  No degree requirement detected\n");
        }
        if !analysis.requirements.education.certifications.is_empty() {
            output.push_str(&format!(
                "  Certifications: {}\n",
                analysis.requirements.education.certifications.join(", ")
            ));
        }

        output.push_str(&self.format_header("Skills"));
        if !analysis.requirements.skills.required_skills.is_empty() {
            output.push_str(&format!(
                "  Required: {}\n",
                analysis.requirements.skills.required_skills.join(", ")
            ));
        }
        if !analysis.requirements.skills.preferred_skills.is_empty() {
            output.push_str(&format!(
                "  Preferred: {}\n",
                analysis.requirements.skills.preferred_skills.join(", ")
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Top Keywords"));
            for (word, count) in &analysis.keywords.top_words {
                output.push_str(&format!("  • {} ({})\n", word, count));
            }
        }

        if !analysis.benefits.is_empty() {
            output.push_str(&self.format_header("Benefits"));
            for benefit in &analysis.benefits {
                output.push_str(&format!("  • {}\n", benefit));
            }
        }

        Ok(output)
    }

    fn format_match(&self, result: &MatchResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 Resume-Job Match"));
        output.push_str(&format!(
            "Overall Score: {:.1}% {}\n",
            result.overall_score,
            self.format_score_badge(result.overall_score)
        ));

        output.push_str(&self.format_header("Category Breakdown"));
        output.push_str(&format!("  Experience: {:.1}%\n", result.category_scores.experience));
        output.push_str(&format!("  Skills: {:.1}%\n", result.category_scores.skills));
        output.push_str(&format!("  Education: {:.1}%\n", result.category_scores.education));
        output.push_str(&format!("  Industry: {:.1}%\n", result.category_scores.industry));

        if !result.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths"));
            for strength in &result.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !result.gaps.is_empty() {
            output.push_str(&self.format_header("⚠️  Gaps"));
            for gap in &result.gaps {
                output.push_str(&format!("  • {}\n", self.colorize(gap, Color::Red)));
            }
        }

        if !result.recommendations.is_empty() {
            output.push_str(&self.format_header("💡 Recommendations"));
            for (i, rec) in result.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} {}\n",
                    i + 1,
                    self.format_priority(&rec.priority),
                    rec.title
                ));
                output.push_str(&format!("     {}\n", rec.description));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_resume(&self, analysis: &ResumeAnalysis) -> Result<String> {
        self.to_json(analysis)
    }

    fn format_job(&self, analysis: &JobAnalysis) -> Result<String> {
        self.to_json(analysis)
    }

    fn format_match(&self, result: &MatchResult) -> Result<String> {
        self.to_json(result)
    }
}

impl MarkdownFormatter {
    fn timestamp() -> String {
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_resume(&self, analysis: &ResumeAnalysis) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Analysis\n\n");
        output.push_str(&format!("*Generated: {}*\n\n", Self::timestamp()));
        output.push_str(&format!("**ATS Score:** {:.1}%\n\n", analysis.ats_score));
        output.push_str(&format!("**Industry:** {}\n\n", analysis.industry));
        output.push_str(&format!(
            "**Words:** {} | **Sentences:** {} | **Readability:** {:.1}\n\n",
            analysis.word_count, analysis.sentence_count, analysis.readability_score
        ));

        output.push_str("## Sections\n\n");
        for (kind, content) in &analysis.sections {
            output.push_str(&format!("- **{}**: {} characters\n", kind, content.len()));
        }
        output.push('\n');

        output.push_str("## Keywords\n\n");
        output.push_str(&format!(
            "Coverage: {:.1}% ({} of {})\n\n",
            analysis.keyword_analysis.score,
            analysis.keyword_analysis.total_found,
            analysis.keyword_analysis.total_possible
        ));
        if !analysis.keyword_analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "Missing: {}\n\n",
                analysis.keyword_analysis.missing_keywords.join(", ")
            ));
        }

        if !analysis.strengths.is_empty() {
            output.push_str("## Strengths\n\n");
            for strength in &analysis.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !analysis.weaknesses.is_empty() {
            output.push_str("## Weaknesses\n\n");
            for weakness in &analysis.weaknesses {
                output.push_str(&format!("- {}\n", weakness));
            }
            output.push('\n');
        }

        if !analysis.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for rec in &analysis.recommendations {
                output.push_str(&format!("### {} ({:?})\n\n{}\n\n", rec.title, rec.priority, rec.description));
            }
        }

        Ok(output)
    }

    fn format_job(&self, analysis: &JobAnalysis) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Job Description Analysis\n\n");
        output.push_str(&format!("*Generated: {}*\n\n", Self::timestamp()));
        output.push_str(&format!(
            "**Industry:** {} | **Level:** {:?}\n\n",
            analysis.industry, analysis.job_level
        ));

        output.push_str("## Requirements\n\n");
        let exp = &analysis.requirements.experience;
        output.push_str(&format!(
            "- Experience: {}+ years ({:?})\n",
            exp.min_years, exp.level
        ));
        output.push_str(&format!(
            "- Degree required: {}\n",
            if analysis.requirements.education.degree_required { "yes" } else { "no" }
        ));
        if !analysis.requirements.skills.required_skills.is_empty() {
            output.push_str(&format!(
                "- Required skills: {}\n",
                analysis.requirements.skills.required_skills.join(", ")
            ));
        }
        if !analysis.requirements.skills.preferred_skills.is_empty() {
            output.push_str(&format!(
                "- Preferred skills: {}\n",
                analysis.requirements.skills.preferred_skills.join(", ")
            ));
        }
        output.push('\n');

        if !analysis.benefits.is_empty() {
            output.push_str("## Benefits\n\n");
            for benefit in &analysis.benefits {
                output.push_str(&format!("- {}\n", benefit));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn format_match(&self, result: &MatchResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume-Job Match Report\n\n");
        output.push_str(&format!("*Generated: {}*\n\n", Self::timestamp()));
        output.push_str(&format!("**Overall Score:** {:.1}%\n\n", result.overall_score));

        output.push_str("## Category Scores\n\n");
        output.push_str("| Category | Score |\n|----------|-------|\n");
        output.push_str(&format!("| Experience | {:.1}% |\n", result.category_scores.experience));
        output.push_str(&format!("| Skills | {:.1}% |\n", result.category_scores.skills));
        output.push_str(&format!("| Education | {:.1}% |\n", result.category_scores.education));
        output.push_str(&format!("| Industry | {:.1}% |\n\n", result.category_scores.industry));

        if !result.strengths.is_empty() {
            output.push_str("## Strengths\n\n");
            for strength in &result.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push('\n');
        }

        if !result.gaps.is_empty() {
            output.push_str("## Gaps\n\n");
            for gap in &result.gaps {
                output.push_str(&format!("- {}\n", gap));
            }
            output.push('\n');
        }

        if !result.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for rec in &result.recommendations {
                output.push_str(&format!("### {} ({:?})\n\n{}\n\n", rec.title, rec.priority, rec.description));
            }
        }

        Ok(output)
    }
}
