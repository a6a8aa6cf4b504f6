//! Immutable keyword dictionaries shared across the analysis pipeline
//!
//! Built once per analyzer and handed out by shared reference; nothing in
//! here mutates after construction, so concurrent analyses need no locking.

use crate::analysis::types::Industry;
use aho_corasick::AhoCorasick;

/// Resume-side industry dictionaries in declaration order. The classifier
/// tie-break picks the earliest entry among equal scores.
const INDUSTRY_KEYWORDS: &[(Industry, &[(&str, &[&str])])] = &[
    (
        Industry::Technology,
        &[
            (
                "programming",
                &[
                    "python", "java", "javascript", "react", "angular", "nodejs", "sql",
                    "mongodb", "docker", "kubernetes", "aws", "azure", "git", "agile",
                    "scrum", "ci/cd", "machine learning", "ai", "data science", "api",
                    "microservices", "devops",
                ],
            ),
            (
                "soft_skills",
                &[
                    "problem-solving", "teamwork", "communication", "leadership",
                    "collaboration", "critical thinking", "innovation", "adaptability",
                ],
            ),
            (
                "certifications",
                &[
                    "aws certified", "azure certified", "google cloud", "cissp",
                    "comptia", "certified scrum master", "pmp",
                ],
            ),
            (
                "action_verbs",
                &[
                    "developed", "implemented", "designed", "architected", "optimized",
                    "automated", "scaled", "migrated", "deployed", "integrated",
                ],
            ),
        ],
    ),
    (
        Industry::Marketing,
        &[
            (
                "skills",
                &[
                    "digital marketing", "seo", "sem", "social media", "content marketing",
                    "email marketing", "analytics", "google ads", "facebook ads",
                    "conversion optimization", "a/b testing", "crm", "marketing automation",
                ],
            ),
            (
                "tools",
                &[
                    "google analytics", "hubspot", "mailchimp", "salesforce", "hootsuite",
                    "canva", "photoshop", "wordpress",
                ],
            ),
            (
                "soft_skills",
                &[
                    "creativity", "strategic thinking", "communication",
                    "project management", "data analysis", "brand management",
                ],
            ),
            (
                "action_verbs",
                &[
                    "launched", "increased", "generated", "managed", "created", "analyzed",
                    "optimized", "drove", "executed", "coordinated",
                ],
            ),
        ],
    ),
    (
        Industry::Finance,
        &[
            (
                "skills",
                &[
                    "financial analysis", "budgeting", "forecasting", "risk management",
                    "investment analysis", "portfolio management", "financial modeling",
                    "valuation", "accounting", "auditing", "compliance",
                    "treasury management",
                ],
            ),
            (
                "tools",
                &[
                    "excel", "bloomberg", "sap", "quickbooks", "tableau", "power bi",
                    "python", "r", "sql",
                ],
            ),
            (
                "certifications",
                &["cfa", "cpa", "frm", "caia", "series 7", "series 66"],
            ),
            (
                "action_verbs",
                &[
                    "analyzed", "evaluated", "managed", "optimized", "forecasted",
                    "assessed", "monitored", "advised", "structured", "executed",
                ],
            ),
        ],
    ),
    (
        Industry::Healthcare,
        &[
            (
                "skills",
                &[
                    "patient care", "clinical assessment", "medical records",
                    "hipaa compliance", "electronic health records", "medical terminology",
                    "quality assurance", "infection control", "care coordination",
                ],
            ),
            (
                "tools",
                &["epic", "cerner", "meditech", "allscripts", "emr systems"],
            ),
            (
                "certifications",
                &[
                    "bls", "acls", "rn", "lpn", "cna", "medical license",
                    "board certification",
                ],
            ),
            (
                "action_verbs",
                &[
                    "administered", "assessed", "documented", "coordinated", "monitored",
                    "educated", "collaborated", "implemented", "evaluated", "managed",
                ],
            ),
        ],
    ),
];

/// Job-side industry indicator words, in classifier tie-break order.
pub const JOB_INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Technology,
        &["software", "developer", "engineer", "programming", "coding", "tech", "api", "database"],
    ),
    (
        Industry::Finance,
        &["finance", "banking", "investment", "portfolio", "trading", "financial", "accounting"],
    ),
    (
        Industry::Healthcare,
        &["healthcare", "medical", "hospital", "patient", "clinical", "health", "medicine"],
    ),
    (
        Industry::Marketing,
        &["marketing", "advertising", "campaign", "brand", "digital", "social media", "content"],
    ),
    (
        Industry::Sales,
        &["sales", "business development", "account", "client", "customer", "revenue"],
    ),
    (
        Industry::Consulting,
        &["consulting", "consultant", "advisory", "strategy", "business analyst"],
    ),
];

/// Skill categories used to bucket extracted job-posting skills.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust",
            "swift", "kotlin", "scala", "r", "matlab", "sql",
        ],
    ),
    (
        "web_technologies",
        &[
            "html", "css", "react", "angular", "vue", "nodejs", "express", "django",
            "flask", "spring", "asp.net", "bootstrap",
        ],
    ),
    (
        "databases",
        &[
            "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra",
            "oracle", "sql server", "dynamodb",
        ],
    ),
    (
        "cloud_platforms",
        &[
            "aws", "azure", "google cloud", "gcp", "heroku", "digitalocean",
            "kubernetes", "docker", "terraform",
        ],
    ),
    (
        "tools_frameworks",
        &[
            "git", "jenkins", "docker", "kubernetes", "ansible", "puppet", "chef",
            "nagios", "prometheus", "grafana",
        ],
    ),
    (
        "data_science",
        &[
            "machine learning", "deep learning", "tensorflow", "pytorch",
            "scikit-learn", "pandas", "numpy", "matplotlib", "tableau", "power bi",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership", "communication", "teamwork", "problem-solving",
            "critical thinking", "project management", "agile", "scrum",
        ],
    ),
];

/// Phrases that flag passive, duty-oriented writing.
pub const WEAK_PHRASES: &[&str] = &["responsible for", "duties included", "worked on"];

/// Verbs that usually introduce a quantified achievement.
pub const ACHIEVEMENT_VERBS: &[&str] =
    &["achieved", "increased", "improved", "reduced", "generated"];

/// Common English stop words dropped before frequency counting.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// One industry's keyword dictionary with a prebuilt multi-pattern scanner.
pub struct IndustryProfile {
    pub industry: Industry,
    pub categories: &'static [(&'static str, &'static [&'static str])],
    keywords: Vec<&'static str>,
    matcher: AhoCorasick,
}

impl IndustryProfile {
    fn new(industry: Industry, categories: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let keywords: Vec<&'static str> = categories
            .iter()
            .flat_map(|(_, list)| list.iter().copied())
            .collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .expect("industry keyword patterns are valid");
        Self {
            industry,
            categories,
            keywords,
            matcher,
        }
    }

    /// Flattened keyword list in category declaration order.
    pub fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Per-keyword presence flags, aligned with `keywords()`.
    pub fn scan(&self, text: &str) -> Vec<bool> {
        let mut found = vec![false; self.keywords.len()];
        for mat in self.matcher.find_overlapping_iter(text) {
            found[mat.pattern().as_usize()] = true;
        }
        found
    }

    /// Total case-insensitive occurrences of every keyword in the text.
    pub fn occurrence_count(&self, text_lower: &str) -> usize {
        self.keywords
            .iter()
            .map(|kw| text_lower.matches(kw).count())
            .sum()
    }

    pub fn action_verbs(&self) -> &'static [&'static str] {
        self.categories
            .iter()
            .find(|(name, _)| *name == "action_verbs")
            .map(|(_, list)| *list)
            .unwrap_or(&[])
    }
}

/// All read-only dictionary data, constructed once at analyzer start.
pub struct Dictionaries {
    profiles: Vec<IndustryProfile>,
    weak_phrases: AhoCorasick,
    achievement_verbs: AhoCorasick,
}

impl Dictionaries {
    pub fn new() -> Self {
        let profiles = INDUSTRY_KEYWORDS
            .iter()
            .map(|(industry, categories)| IndustryProfile::new(*industry, categories))
            .collect();
        let weak_phrases = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(WEAK_PHRASES)
            .expect("weak phrase patterns are valid");
        let achievement_verbs = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(ACHIEVEMENT_VERBS)
            .expect("achievement verb patterns are valid");
        Self {
            profiles,
            weak_phrases,
            achievement_verbs,
        }
    }

    pub fn profiles(&self) -> &[IndustryProfile] {
        &self.profiles
    }

    pub fn profile(&self, industry: Industry) -> Option<&IndustryProfile> {
        self.profiles.iter().find(|p| p.industry == industry)
    }

    pub fn has_weak_phrase(&self, text: &str) -> bool {
        self.weak_phrases.is_match(text)
    }

    pub fn has_achievement_verb(&self, text: &str) -> bool {
        self.achievement_verbs.is_match(text)
    }

    pub fn is_stop_word(word: &str) -> bool {
        STOP_WORDS.binary_search(&word).is_ok()
    }
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_sorted_for_binary_search() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn profiles_cover_four_classifiable_industries() {
        let dicts = Dictionaries::new();
        let industries: Vec<Industry> = dicts.profiles().iter().map(|p| p.industry).collect();
        assert_eq!(
            industries,
            vec![
                Industry::Technology,
                Industry::Marketing,
                Industry::Finance,
                Industry::Healthcare
            ]
        );
    }

    #[test]
    fn technology_profile_counts_all_subcategories() {
        let dicts = Dictionaries::new();
        let tech = dicts.profile(Industry::Technology).unwrap();
        assert_eq!(tech.keyword_count(), 22 + 8 + 7 + 10);
        assert!(tech.action_verbs().contains(&"developed"));
    }

    #[test]
    fn scan_flags_case_insensitive_presence() {
        let dicts = Dictionaries::new();
        let tech = dicts.profile(Industry::Technology).unwrap();
        let found = tech.scan("Built services with PYTHON and Docker");
        let hits: Vec<&str> = tech
            .keywords()
            .iter()
            .zip(&found)
            .filter(|(_, f)| **f)
            .map(|(kw, _)| *kw)
            .collect();
        assert!(hits.contains(&"python"));
        assert!(hits.contains(&"docker"));
        assert!(!hits.contains(&"kubernetes"));
    }

    #[test]
    fn weak_phrase_and_achievement_detection() {
        let dicts = Dictionaries::new();
        assert!(dicts.has_weak_phrase("Responsible for daily reporting"));
        assert!(!dicts.has_weak_phrase("Led daily reporting"));
        assert!(dicts.has_achievement_verb("Increased revenue by 12%"));
        assert!(!dicts.has_achievement_verb("Wrote documentation"));
    }
}
