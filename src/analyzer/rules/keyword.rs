//! Main-keyword derivation, placement and density.
//!
//! The "main keyword" is a cheap stand-in for real keyword extraction: the
//! first substantive words of the title, after dropping stop-words and very
//! short words.

use crate::lexicon::Lexicon;
use crate::parser::{normalize_word, words};
use crate::{KeywordAnalysis, Status};

/// Below this many body words the dimension refuses to judge anything
const MIN_WORDS_FOR_ANALYSIS: usize = 20;
/// Opening window, in characters of plain text, where the keyword should show up
const OPENING_WINDOW_CHARS: usize = 150;
/// Keyword terms kept from the title
const MAX_TERMS: usize = 3;
/// Fallback length when the title yields no substantive words
const FALLBACK_CHARS: usize = 30;
/// Term occurrences above this share of all words look like stuffing.
/// Inherited tuning value; treat as a knob, not as ground truth.
const STUFFING_DENSITY_PCT: f64 = 3.5;

/// Derive the main keyword from a title: lowercase, strip punctuation, drop
/// stop-words and words of up to two characters, keep the first three terms.
/// Falls back to the first 30 characters of the raw title.
pub fn derive_main_keyword(title: &str, lexicon: &Lexicon) -> Option<String> {
    let terms: Vec<String> = words(title)
        .map(normalize_word)
        .filter(|w| w.chars().count() > 2 && !lexicon.is_stop_word(w))
        .take(MAX_TERMS)
        .collect();

    if !terms.is_empty() {
        return Some(terms.join(" "));
    }

    let fallback: String = title.chars().take(FALLBACK_CHARS).collect();
    let fallback = fallback.trim().to_string();
    if fallback.is_empty() {
        None
    } else {
        Some(fallback)
    }
}

pub fn analyze(title: &str, plain_text: &str, lexicon: &Lexicon) -> KeywordAnalysis {
    let main_keyword = derive_main_keyword(title, lexicon);

    let body_words: Vec<String> = words(plain_text).map(normalize_word).collect();
    let total_words = body_words.len();

    if total_words < MIN_WORDS_FOR_ANALYSIS {
        return KeywordAnalysis {
            status: Status::Warn,
            main_keyword,
            in_opening: false,
            has_variations: false,
            possible_stuffing: false,
            observation: "Conteúdo insuficiente para analisar o uso de palavras-chave.".to_string(),
        };
    }

    let Some(ref keyword) = main_keyword else {
        return KeywordAnalysis {
            status: Status::Warn,
            main_keyword: None,
            in_opening: false,
            has_variations: false,
            possible_stuffing: false,
            observation: "Defina um título para que a palavra-chave principal possa ser derivada."
                .to_string(),
        };
    };

    let terms: Vec<String> = keyword
        .split_whitespace()
        .map(normalize_word)
        .filter(|t| !t.is_empty())
        .collect();

    let opening: String = plain_text
        .to_lowercase()
        .chars()
        .take(OPENING_WINDOW_CHARS)
        .collect();
    let in_opening = terms.iter().any(|t| opening.contains(t.as_str()));

    let occurrences: usize = terms
        .iter()
        .map(|t| body_words.iter().filter(|w| *w == t).count())
        .sum();
    let density = occurrences as f64 / total_words as f64 * 100.0;
    let possible_stuffing = density > STUFFING_DENSITY_PCT;

    // With a single term there is nothing to vary; otherwise any term showing
    // up in the body counts as variation of the full phrase.
    let has_variations = terms.len() < 2
        || terms
            .iter()
            .any(|t| body_words.iter().any(|w| w == t));

    let (status, observation) = if possible_stuffing {
        (
            Status::Bad,
            "Repetição excessiva da palavra-chave; varie os termos para o texto soar natural."
                .to_string(),
        )
    } else if !in_opening {
        (
            Status::Warn,
            "Mencione a palavra-chave principal já nos primeiros parágrafos.".to_string(),
        )
    } else {
        (
            Status::Ok,
            "Uso natural da palavra-chave ao longo do texto.".to_string(),
        )
    };

    KeywordAnalysis {
        status,
        main_keyword,
        in_opening,
        has_variations,
        possible_stuffing,
        observation,
    }
}
