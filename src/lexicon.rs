//! Locale phrase tables.
//!
//! The scoring rules are locale-agnostic; everything language-specific lives
//! here so the lists can be swapped or extended (see the `lexicon` section of
//! the config file) without touching the analyzers. Only pt-BR ships.

use crate::SearchIntent;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// Generic call-to-action fillers that weaken a title
const GENERIC_TITLE_PHRASES: &[&str] = &[
    "clique aqui",
    "saiba mais",
    "descubra",
    "confira",
    "veja aqui",
    "não perca",
];

/// Words ignored when deriving the main keyword from the title.
/// Words of up to two characters are dropped separately.
const STOP_WORDS: &[&str] = &[
    "com", "para", "como", "que", "sobre", "uma", "uns", "umas", "por", "dos",
    "das", "nos", "nas", "mais", "todo", "toda", "todos", "todas", "sem", "ser",
];

/// Hyperbolic phrasing that erodes credibility
const EXAGGERATED_PHRASES: &[&str] = &[
    "melhor do mundo",
    "100% garantido",
    "revolucionário",
    "revolucionária",
    "número um",
    "imperdível",
    "inacreditável",
    "o único",
    "a única",
    "nunca visto",
];

/// Intent pattern groups as regex sources, in tie-break priority order
const INTENT_PATTERNS: &[(SearchIntent, &[&str])] = &[
    (
        SearchIntent::Informational,
        &[
            r"\bcomo\b",
            r"\bo que é\b",
            r"\bguia\b",
            r"\bpor que\b",
            r"\bdicas\b",
            r"\btutorial\b",
            r"\bpasso a passo\b",
            r"\baprenda\b",
            r"\bsignificado\b",
        ],
    ),
    (
        SearchIntent::Commercial,
        &[
            r"\bmelhor(es)?\b",
            r"\bcompara(ção|tivo)\b",
            r"\bvs\b",
            r"\breview\b",
            r"\bavaliação\b",
            r"\btop \d+\b",
            r"\balternativas?\b",
        ],
    ),
    (
        SearchIntent::Navigational,
        &[
            r"\bsite\b",
            r"\bpágina\b",
            r"\blogin\b",
            r"\bentrar\b",
            r"\bcontato\b",
            r"\bendereço\b",
            r"\btelefone\b",
            r"\bhorário de funcionamento\b",
        ],
    ),
    (
        SearchIntent::Transactional,
        &[
            r"\bcomprar\b",
            r"\bcompre\b",
            r"\bpreços?\b",
            r"\bdescontos?\b",
            r"\breservar?\b",
            r"\bofertas?\b",
            r"\bpromoção\b",
            r"\bcupom\b",
            r"\bcontratar\b",
            r"\bagendar\b",
        ],
    ),
];

/// Compiled phrase tables for one locale
#[derive(Debug)]
pub struct Lexicon {
    pub generic_title_phrases: Vec<String>,
    pub stop_words: HashSet<String>,
    pub exaggerated_phrases: Vec<String>,
    intent_patterns: Vec<(SearchIntent, Vec<Regex>)>,
}

impl Lexicon {
    /// The built-in Brazilian Portuguese tables
    pub fn pt_br() -> Self {
        let mut lexicon = Self {
            generic_title_phrases: GENERIC_TITLE_PHRASES.iter().map(|s| s.to_string()).collect(),
            stop_words: STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            exaggerated_phrases: EXAGGERATED_PHRASES.iter().map(|s| s.to_string()).collect(),
            intent_patterns: Vec::new(),
        };
        for (intent, sources) in INTENT_PATTERNS {
            let compiled = sources
                .iter()
                .map(|src| Regex::new(src).expect("built-in intent pattern must compile"))
                .collect();
            lexicon.intent_patterns.push((*intent, compiled));
        }
        lexicon
    }

    /// Append extra phrases from the config. Intent patterns are regex
    /// sources and are validated here so a bad config fails at load time,
    /// not inside the engine.
    pub fn extend(
        &mut self,
        generic: &[String],
        stop_words: &[String],
        exaggerated: &[String],
        intent: &[(SearchIntent, Vec<String>)],
    ) -> Result<()> {
        self.generic_title_phrases
            .extend(generic.iter().map(|p| p.to_lowercase()));
        self.stop_words
            .extend(stop_words.iter().map(|p| p.to_lowercase()));
        self.exaggerated_phrases
            .extend(exaggerated.iter().map(|p| p.to_lowercase()));
        for (target, sources) in intent {
            let group = self
                .intent_patterns
                .iter_mut()
                .find(|(i, _)| i == target)
                .expect("all intent groups exist");
            for src in sources {
                let re = Regex::new(src)
                    .with_context(|| format!("invalid intent pattern: {}", src))?;
                group.1.push(re);
            }
        }
        Ok(())
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Pattern groups in declaration order; earlier groups win ties
    pub fn intent_groups(&self) -> &[(SearchIntent, Vec<Regex>)] {
        &self.intent_patterns
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::pt_br()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_compiles() {
        let lexicon = Lexicon::pt_br();
        assert_eq!(lexicon.intent_groups().len(), 4);
        assert!(lexicon.is_stop_word("para"));
        assert!(!lexicon.is_stop_word("praia"));
    }

    #[test]
    fn test_intent_groups_in_priority_order() {
        let lexicon = Lexicon::pt_br();
        let order: Vec<SearchIntent> = lexicon.intent_groups().iter().map(|(i, _)| *i).collect();
        assert_eq!(
            order,
            vec![
                SearchIntent::Informational,
                SearchIntent::Commercial,
                SearchIntent::Navigational,
                SearchIntent::Transactional,
            ]
        );
    }

    #[test]
    fn test_extend_adds_phrases() {
        let mut lexicon = Lexicon::pt_br();
        lexicon
            .extend(
                &["Aproveite Agora".to_string()],
                &["coisa".to_string()],
                &["o mais incrível".to_string()],
                &[(SearchIntent::Transactional, vec![r"\balugar\b".to_string()])],
            )
            .unwrap();
        assert!(lexicon
            .generic_title_phrases
            .contains(&"aproveite agora".to_string()));
        assert!(lexicon.is_stop_word("coisa"));
        let (_, transactional) = &lexicon.intent_groups()[3];
        assert!(transactional.iter().any(|re| re.is_match("vou alugar um carro")));
    }

    #[test]
    fn test_extend_rejects_bad_pattern() {
        let mut lexicon = Lexicon::pt_br();
        let err = lexicon.extend(
            &[],
            &[],
            &[],
            &[(SearchIntent::Commercial, vec!["(".to_string()])],
        );
        assert!(err.is_err());
    }
}
