//! Sentence length and text formatting.
//!
//! Average sentence length is measured on the plain text; list and emphasis
//! usage is detected on the raw markup.

use crate::parser::{has_emphasis_markup, has_list_markup, sentences, word_count};
use crate::{LegibilityAnalysis, Status};

/// Averages above these are warn/bad. Inherited tuning values; the checks
/// only apply once there are enough sentences to average meaningfully.
const WARN_AVG_WORDS: f64 = 25.0;
const BAD_AVG_WORDS: f64 = 35.0;
const MIN_SENTENCES: usize = 3;

/// Word counts past which missing lists/emphasis get flagged
const NEEDS_LISTS_WORDS: usize = 150;
const NEEDS_EMPHASIS_WORDS: usize = 100;

pub fn analyze(plain_text: &str, raw_markup: &str) -> LegibilityAnalysis {
    let sentence_count = sentences(plain_text).len();
    let total_words = word_count(plain_text);

    let avg = if sentence_count == 0 {
        0.0
    } else {
        total_words as f64 / sentence_count as f64
    };

    let has_lists = has_list_markup(raw_markup);
    let has_emphasis = has_emphasis_markup(raw_markup);

    let mut status = Status::Ok;
    let mut parts: Vec<String> = Vec::new();

    if sentence_count > MIN_SENTENCES && avg > BAD_AVG_WORDS {
        status = status.worst(Status::Bad);
        parts.push("Frases muito longas dificultam a leitura; divida os períodos extensos.".to_string());
    } else if sentence_count > MIN_SENTENCES && avg > WARN_AVG_WORDS {
        status = status.worst(Status::Warn);
        parts.push("Frases um pouco longas; o ideal fica entre 15 e 20 palavras por frase.".to_string());
    }

    if !has_lists && total_words > NEEDS_LISTS_WORDS {
        status = status.worst(Status::Warn);
        parts.push("Use listas para organizar informações e arejar o texto.".to_string());
    }

    if !has_emphasis && total_words > NEEDS_EMPHASIS_WORDS {
        parts.push("Destaque termos importantes em negrito.".to_string());
    }

    let feedback = if parts.is_empty() {
        "Boa legibilidade: frases curtas e texto bem distribuído.".to_string()
    } else {
        parts.join("; ")
    };

    LegibilityAnalysis {
        status,
        avg_sentence_words: avg.round() as u32,
        has_lists,
        has_emphasis,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_of(words: usize) -> String {
        let mut s = vec!["palavra"; words].join(" ");
        s.push('.');
        s
    }

    #[test]
    fn test_empty_text_is_ok() {
        let a = analyze("", "");
        assert_eq!(a.status, Status::Ok);
        assert_eq!(a.avg_sentence_words, 0);
        assert!(a.feedback.contains("Boa legibilidade"));
    }

    #[test]
    fn test_short_sentences_are_ok() {
        let text = [sentence_of(12), sentence_of(14), sentence_of(10), sentence_of(16)].join(" ");
        let a = analyze(&text, "<ul><li>x</li></ul><strong>y</strong>");
        assert_eq!(a.status, Status::Ok);
        assert_eq!(a.avg_sentence_words, 13);
    }

    #[test]
    fn test_long_average_warns() {
        // 4 sentences of 30 words each, under the word counts that require lists
        let text = [sentence_of(30), sentence_of(30), sentence_of(30), sentence_of(30)].join(" ");
        let a = analyze(&text, "<strong>x</strong>");
        assert_eq!(a.status, Status::Warn);
        assert!(a.feedback.contains("15 e 20 palavras"));
    }

    #[test]
    fn test_very_long_average_is_bad() {
        let text = [sentence_of(40), sentence_of(38), sentence_of(42), sentence_of(36)].join(" ");
        let a = analyze(&text, "<ul><li>x</li></ul><b>y</b>");
        assert_eq!(a.status, Status::Bad);
        assert!(a.feedback.contains("divida os períodos"));
    }

    #[test]
    fn test_few_sentences_skip_average_checks() {
        // 3 sentences is not enough to judge the average
        let text = [sentence_of(40), sentence_of(40), sentence_of(40)].join(" ");
        let a = analyze(&text, "<ul><li>x</li></ul>");
        assert_eq!(a.status, Status::Ok);
    }

    #[test]
    fn test_missing_lists_in_long_text_warns() {
        let text = (0..14).map(|_| sentence_of(12)).collect::<Vec<_>>().join(" ");
        let a = analyze(&text, "<p>sem listas</p><strong>x</strong>");
        assert_eq!(a.status, Status::Warn);
        assert!(!a.has_lists);
        assert!(a.feedback.contains("listas"));
    }

    #[test]
    fn test_missing_emphasis_suggests_without_downgrading() {
        let text = (0..10).map(|_| sentence_of(12)).collect::<Vec<_>>().join(" ");
        let a = analyze(&text, "<ul><li>item</li></ul>");
        assert_eq!(a.status, Status::Ok);
        assert!(!a.has_emphasis);
        assert!(a.feedback.contains("negrito"));
    }
}
