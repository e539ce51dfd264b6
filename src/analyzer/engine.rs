//! The engine that composes normalizer, analyzers and aggregator.
//!
//! One synchronous pass: strip the body once, count headings once, run the
//! eight analyzers, then weigh everything into the final result. No I/O, no
//! shared state; safe to call from any number of threads.

use crate::lexicon::Lexicon;
use crate::parser::{count_headings, strip_markup, word_count};
use crate::{AnalysisResult, Draft, Grade};

use super::rules;
use super::scoring;

/// Stateless analyzer over a fixed lexicon
pub struct ContentAnalyzer {
    lexicon: Lexicon,
}

impl ContentAnalyzer {
    /// Analyzer with the built-in pt-BR lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::pt_br(),
        }
    }

    /// Analyzer with a custom (e.g. config-extended) lexicon
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Produce the full diagnostic for one draft. Total over its input:
    /// empty fields and malformed markup degrade scores, never fail.
    pub fn analyze(&self, draft: &Draft) -> AnalysisResult {
        let plain_text = strip_markup(&draft.body);
        let headings = count_headings(&draft.body);
        let words = word_count(&plain_text);
        let has_page_title = !draft.title.trim().is_empty();

        let title = rules::title::analyze(&draft.title, &self.lexicon);
        let lead = rules::lead::analyze(&draft.lead, &draft.title);
        let content_length = rules::content_length::analyze(words);
        let structure = rules::structure::analyze(&headings, words, has_page_title);
        let keyword = rules::keyword::analyze(&draft.title, &plain_text, &self.lexicon);
        let legibility = rules::legibility::analyze(&plain_text, &draft.body);
        let trust = rules::trust::analyze(&plain_text, &self.lexicon);
        let search_intent = rules::search_intent::analyze(&draft.title, &plain_text, &self.lexicon);

        let score = scoring::compute_score(
            &title,
            &lead,
            &content_length,
            &structure,
            &keyword,
            &legibility,
            &trust,
            words,
        );
        let grade = Grade::from_score(score);
        let improvements = scoring::improvements(
            &title,
            &lead,
            &structure,
            &keyword,
            &legibility,
            &trust,
            words,
        );

        AnalysisResult {
            title,
            lead,
            content_length,
            structure,
            keyword,
            legibility,
            trust,
            search_intent,
            score,
            grade,
            grade_label: grade.label().to_string(),
            improvements,
        }
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchIntent, Status};

    fn body_of_words(n: usize) -> String {
        vec!["palavra"; n].join(" ")
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let engine = ContentAnalyzer::new();
        let draft = Draft::new(
            "Guia de trilhas na serra catarinense",
            "Trilhas, mirantes e cachoeiras para todos os ritmos, com dicas de acesso, melhor época e o que levar na mochila em cada percurso.",
            "<h2>Percursos</h2><p>A serra reúne trilhas curtas e travessias longas.</p>",
        );
        let a = engine.analyze(&draft);
        let b = engine.analyze(&draft);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_all_empty_input() {
        let result = ContentAnalyzer::new().analyze(&Draft::default());
        assert_eq!(result.title.status, Status::Bad);
        assert_eq!(result.content_length.status, Status::Bad);
        assert_eq!(result.content_length.word_count, 0);
        assert_eq!(result.grade, Grade::Ruim);
        assert_eq!(result.search_intent.intent, SearchIntent::Informational);
        assert!(!result.search_intent.matched);
    }

    #[test]
    fn test_heading_escalation_on_flat_long_body() {
        let draft = Draft::new(
            "Roteiro de um fim de semana na serra gaúcha",
            "",
            format!("<p>{}</p>", body_of_words(400)),
        );
        let result = ContentAnalyzer::new().analyze(&draft);
        assert_eq!(result.structure.status, Status::Warn);
        assert!(result
            .structure
            .suggestions
            .iter()
            .any(|s| s.contains("H2")));
    }

    #[test]
    fn test_long_form_content_is_excellent_tier() {
        let draft = Draft::new(
            "Título qualquer para um artigo de teste longo",
            "",
            body_of_words(1600),
        );
        let result = ContentAnalyzer::new().analyze(&draft);
        assert_eq!(result.content_length.status, Status::Excellent);
        assert_eq!(result.content_length.tier.label(), "muito bom");
        assert_eq!(result.content_length.word_count, 1600);
    }

    #[test]
    fn test_improvement_cap_on_terrible_draft() {
        let draft = Draft::new(
            "Oi",
            "curto",
            format!("<h1>a</h1><h1>b</h1><p>{}</p>", body_of_words(200)),
        );
        let result = ContentAnalyzer::new().analyze(&draft);
        assert!(result.improvements.len() <= scoring::MAX_IMPROVEMENTS);
        assert!(!result.improvements.is_empty());
    }

    #[test]
    fn test_score_within_bounds_on_odd_markup() {
        let engine = ContentAnalyzer::new();
        for body in ["<<<>>>", "<p", "texto > sem < tags", "<h1><h1><h1", "日本語のテキスト"] {
            let result = engine.analyze(&Draft::new("t", "l", body));
            assert!(result.score <= 100, "score out of range for {:?}", body);
        }
    }
}
