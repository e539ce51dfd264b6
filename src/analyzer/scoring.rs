//! Weighted score, grade and improvement-list assembly

use crate::analyzer::rules::content_length::MIN_WORDS;
use crate::{
    AnalysisResult, ContentLengthAnalysis, Grade, KeywordAnalysis, LeadAnalysis,
    LegibilityAnalysis, Status, StructureAnalysis, TitleAnalysis, TrustAnalysis,
};

/// Dimension weights; must sum to 1.0
const TITLE_WEIGHT: f64 = 0.075;
const LEAD_WEIGHT: f64 = 0.075;
const CONTENT_WEIGHT: f64 = 0.15;
const STRUCTURE_WEIGHT: f64 = 0.20;
const KEYWORD_WEIGHT: f64 = 0.175;
const LEGIBILITY_WEIGHT: f64 = 0.10;
const TRUST_WEIGHT: f64 = 0.05;
const INTENT_COVERAGE_WEIGHT: f64 = 0.175;

/// Enough body text to classify intent meaningfully
const INTENT_COVERAGE_WORDS: usize = 50;

/// Sub-score applied to the body-facing dimensions when there is no body at
/// all; without it an empty draft would coast on their untriggered defaults.
const EMPTY_BODY_POINTS: f64 = 20.0;

/// Improvement list cap
pub const MAX_IMPROVEMENTS: usize = 5;

fn status_points(status: Status) -> f64 {
    match status {
        Status::Excellent | Status::Ok => 100.0,
        Status::Warn => 60.0,
        Status::Bad => 20.0,
    }
}

/// The lead's worst reachable status is warn, so its floor sits higher
fn lead_points(status: Status) -> f64 {
    match status {
        Status::Excellent | Status::Ok => 100.0,
        Status::Warn => 60.0,
        Status::Bad => 30.0,
    }
}

fn content_points(status: Status) -> f64 {
    match status {
        Status::Excellent => 100.0,
        Status::Ok => 85.0,
        Status::Warn => 50.0,
        Status::Bad => 20.0,
    }
}

/// Trust is advisory; a warn still keeps most of its points
fn trust_points(status: Status) -> f64 {
    match status {
        Status::Excellent | Status::Ok => 100.0,
        _ => 70.0,
    }
}

fn intent_coverage_points(word_count: usize) -> f64 {
    if word_count > INTENT_COVERAGE_WORDS {
        100.0
    } else {
        50.0
    }
}

/// Weighted 0-100 score over all dimensions plus the intent-coverage proxy
#[allow(clippy::too_many_arguments)]
pub fn compute_score(
    title: &TitleAnalysis,
    lead: &LeadAnalysis,
    content: &ContentLengthAnalysis,
    structure: &StructureAnalysis,
    keyword: &KeywordAnalysis,
    legibility: &LegibilityAnalysis,
    trust: &TrustAnalysis,
    word_count: usize,
) -> u8 {
    let body_points = |status: Status| {
        if word_count == 0 {
            EMPTY_BODY_POINTS
        } else {
            status_points(status)
        }
    };

    let total = TITLE_WEIGHT * status_points(title.status)
        + LEAD_WEIGHT * lead_points(lead.status)
        + CONTENT_WEIGHT * content_points(content.status)
        + STRUCTURE_WEIGHT * body_points(structure.status)
        + KEYWORD_WEIGHT * body_points(keyword.status)
        + LEGIBILITY_WEIGHT * body_points(legibility.status)
        + TRUST_WEIGHT * trust_points(trust.status)
        + INTENT_COVERAGE_WEIGHT * intent_coverage_points(word_count);

    total.round().clamp(0.0, 100.0) as u8
}

/// Collect suggestions in fixed priority order and cap the list.
pub fn improvements(
    title: &TitleAnalysis,
    lead: &LeadAnalysis,
    structure: &StructureAnalysis,
    keyword: &KeywordAnalysis,
    legibility: &LegibilityAnalysis,
    trust: &TrustAnalysis,
    word_count: usize,
) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();

    if let Some(ref suggestion) = title.suggestion {
        list.push(suggestion.clone());
    }
    if lead.status != Status::Ok {
        if let Some(ref suggestion) = lead.suggestion {
            list.push(suggestion.clone());
        }
    }
    list.extend(structure.suggestions.iter().cloned());
    if keyword.status != Status::Ok {
        list.push(keyword.observation.clone());
    }
    if legibility.status != Status::Ok {
        list.push(legibility.feedback.clone());
    }
    if trust.status != Status::Ok {
        list.push(trust.feedback.clone());
    }
    if word_count > 0 && word_count < MIN_WORDS {
        list.push(format!(
            "Amplie o conteúdo para pelo menos {} palavras.",
            MIN_WORDS
        ));
    }

    list.truncate(MAX_IMPROVEMENTS);
    list
}

/// Summary over a batch of analyzed drafts
#[derive(Debug, Clone)]
pub struct AggregateStats {
    pub drafts_analyzed: usize,
    pub average_score: u8,
    pub average_grade: Grade,
    pub total_improvements: usize,
}

impl AggregateStats {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        if results.is_empty() {
            return Self {
                drafts_analyzed: 0,
                average_score: 0,
                average_grade: Grade::Ruim,
                total_improvements: 0,
            };
        }
        let sum: u32 = results.iter().map(|r| r.score as u32).sum();
        let average_score = (sum / results.len() as u32) as u8;
        Self {
            drafts_analyzed: results.len(),
            average_score,
            average_grade: Grade::from_score(average_score),
            total_improvements: results.iter().map(|r| r.improvements.len()).sum(),
        }
    }
}
