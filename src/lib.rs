//! Redator: content quality analyzer for Portuguese article drafts
//!
//! This library inspects a draft's title, lead and formatted body and
//! produces a structured diagnostic: per-dimension statuses, a 0-100 score,
//! a grade and a prioritized list of improvement suggestions. The engine is
//! a pure function over its three string inputs; it never fails and never
//! performs I/O.

pub mod analyzer;
pub mod config;
pub mod draft;
pub mod lexicon;
pub mod parser;
pub mod reporter;
pub mod watcher;

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A draft article as produced by the platform's content editor.
///
/// All fields may be empty; emptiness is a quality signal, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Headline of the article
    #[serde(default)]
    pub title: String,
    /// Short summary shown in listings and search snippets
    #[serde(default)]
    pub lead: String,
    /// Formatted body markup (HTML fragment from the editor)
    #[serde(default)]
    pub body: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, lead: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lead: lead.into(),
            body: body.into(),
        }
    }
}

/// Per-dimension status. `Excellent` is only produced by the content-length
/// dimension; every other dimension moves between `Ok`, `Warn` and `Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Excellent,
    Ok,
    Warn,
    Bad,
}

impl Status {
    fn severity(self) -> u8 {
        match self {
            Status::Excellent => 0,
            Status::Ok => 1,
            Status::Warn => 2,
            Status::Bad => 3,
        }
    }

    /// Take the worse of two statuses. Escalation rules in the analyzers may
    /// raise a status but never lower it, regardless of check order.
    pub fn worst(self, other: Status) -> Status {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    /// Human-readable pt-BR label
    pub fn label(&self) -> &'static str {
        match self {
            Status::Excellent => "excelente",
            Status::Ok => "bom",
            Status::Warn => "atenção",
            Status::Bad => "ruim",
        }
    }
}

/// Overall grade, derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Ruim,
    Regular,
    Bom,
    Excelente,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => Grade::Excelente,
            60..=79 => Grade::Bom,
            40..=59 => Grade::Regular,
            _ => Grade::Ruim,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Ruim => "Ruim",
            Grade::Regular => "Regular",
            Grade::Bom => "Bom",
            Grade::Excelente => "Excelente",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Content-depth tier from the plain-text word count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthTier {
    TooShort,
    Medium,
    Good,
    VeryGood,
}

impl DepthTier {
    pub fn label(&self) -> &'static str {
        match self {
            DepthTier::TooShort => "muito curto",
            DepthTier::Medium => "médio",
            DepthTier::Good => "bom",
            DepthTier::VeryGood => "muito bom",
        }
    }
}

/// Presumed search intent behind the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    Informational,
    Commercial,
    Navigational,
    Transactional,
}

impl SearchIntent {
    pub fn label(&self) -> &'static str {
        match self {
            SearchIntent::Informational => "Informacional",
            SearchIntent::Commercial => "Comercial",
            SearchIntent::Navigational => "Navegacional",
            SearchIntent::Transactional => "Transacional",
        }
    }
}

/// Headline diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleAnalysis {
    pub status: Status,
    /// Character count (Unicode scalar values)
    pub chars: usize,
    /// At least two words, a proxy for a substantive key phrase
    pub has_keyword: bool,
    /// Contains a generic call-to-action filler ("clique aqui" etc.)
    pub has_generic_phrase: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Lead/summary diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAnalysis {
    pub status: Status,
    pub chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Depth-of-coverage diagnostics from the plain-text word count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentLengthAnalysis {
    pub status: Status,
    pub word_count: usize,
    pub tier: DepthTier,
    pub feedback: String,
}

/// Heading-usage diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureAnalysis {
    pub status: Status,
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    /// Ordered; earlier entries are more specific
    pub suggestions: Vec<String>,
}

/// Main-keyword placement and density diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub status: Status,
    /// Derived from the title; None when no title text exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_keyword: Option<String>,
    /// A keyword term appears within the opening of the text
    pub in_opening: bool,
    pub has_variations: bool,
    pub possible_stuffing: bool,
    pub observation: String,
}

/// Sentence-length and formatting diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegibilityAnalysis {
    pub status: Status,
    /// Rounded average of words per sentence
    pub avg_sentence_words: u32,
    pub has_lists: bool,
    pub has_emphasis: bool,
    pub feedback: String,
}

/// Exaggerated-phrasing diagnostics. Never escalates past `Warn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustAnalysis {
    pub status: Status,
    pub has_exaggeration: bool,
    pub feedback: String,
}

/// Search-intent classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntentAnalysis {
    pub intent: SearchIntent,
    pub label: String,
    /// False when no pattern group matched and the default applied
    pub matched: bool,
}

/// The complete diagnostic for one draft
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: TitleAnalysis,
    pub lead: LeadAnalysis,
    pub content_length: ContentLengthAnalysis,
    pub structure: StructureAnalysis,
    pub keyword: KeywordAnalysis,
    pub legibility: LegibilityAnalysis,
    pub trust: TrustAnalysis,
    pub search_intent: SearchIntentAnalysis,
    /// Weighted aggregate, always within 0..=100
    pub score: u8,
    pub grade: Grade,
    pub grade_label: String,
    /// At most five entries, in fixed priority order
    pub improvements: Vec<String>,
}

/// Analyze a draft with the built-in pt-BR lexicon.
///
/// This is the single entry point the editor UI calls on every content
/// change. It accepts empty strings for any parameter and never panics.
pub fn analyze(title: &str, lead: &str, body_markup: &str) -> AnalysisResult {
    static DEFAULT: OnceLock<analyzer::ContentAnalyzer> = OnceLock::new();
    DEFAULT
        .get_or_init(analyzer::ContentAnalyzer::new)
        .analyze(&Draft::new(title, lead, body_markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_worst_never_lowers() {
        assert_eq!(Status::Warn.worst(Status::Ok), Status::Warn);
        assert_eq!(Status::Ok.worst(Status::Warn), Status::Warn);
        assert_eq!(Status::Bad.worst(Status::Warn), Status::Bad);
        assert_eq!(Status::Warn.worst(Status::Bad), Status::Bad);
        assert_eq!(Status::Ok.worst(Status::Ok), Status::Ok);
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(Grade::from_score(100), Grade::Excelente);
        assert_eq!(Grade::from_score(80), Grade::Excelente);
        assert_eq!(Grade::from_score(79), Grade::Bom);
        assert_eq!(Grade::from_score(60), Grade::Bom);
        assert_eq!(Grade::from_score(59), Grade::Regular);
        assert_eq!(Grade::from_score(40), Grade::Regular);
        assert_eq!(Grade::from_score(39), Grade::Ruim);
        assert_eq!(Grade::from_score(0), Grade::Ruim);
    }

    #[test]
    fn test_analyze_entry_point_smoke() {
        let result = analyze(
            "Guia de praias no litoral catarinense",
            "",
            "<p>Texto curto.</p>",
        );
        assert!(result.score <= 100);
        assert!(result.improvements.len() <= 5);
    }

    #[test]
    fn test_draft_deserializes_with_missing_fields() {
        let draft: Draft = serde_json::from_str(r#"{"title": "Só título"}"#).unwrap();
        assert_eq!(draft.title, "Só título");
        assert!(draft.lead.is_empty());
        assert!(draft.body.is_empty());
    }
}
