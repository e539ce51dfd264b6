//! Config schema and deserialization

use crate::lexicon::Lexicon;
use crate::SearchIntent;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Extra phrases merged into the built-in lexicon. Intent patterns are regex
/// sources keyed by intent name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconConfig {
    #[serde(default)]
    pub generic_title_phrases: Vec<String>,

    #[serde(default)]
    pub stop_words: Vec<String>,

    #[serde(default)]
    pub exaggerated_phrases: Vec<String>,

    #[serde(default)]
    pub intent_patterns: HashMap<SearchIntent, Vec<String>>,
}

/// Root config structure for .redatorrc.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Minimum score (exit 1 if below). Default: no gate
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Custom draft filename suffixes (default: .draft.json)
    #[serde(default)]
    pub draft_patterns: Vec<String>,

    /// Extra lexicon entries on top of the built-in pt-BR tables
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: None,
            ignore: Vec::new(),
            draft_patterns: Vec::new(),
            lexicon: None,
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Get draft filename suffixes, falling back to the default
    pub fn get_draft_patterns(&self) -> Vec<&str> {
        if self.draft_patterns.is_empty() {
            vec![".draft.json"]
        } else {
            self.draft_patterns.iter().map(|s| s.as_str()).collect()
        }
    }

    /// Build the lexicon for this config: built-in tables plus extensions.
    /// Fails on invalid intent-pattern regexes.
    pub fn build_lexicon(&self) -> Result<Lexicon> {
        let mut lexicon = Lexicon::pt_br();
        if let Some(ref ext) = self.lexicon {
            let intent: Vec<(SearchIntent, Vec<String>)> = ext
                .intent_patterns
                .iter()
                .map(|(intent, patterns)| (*intent, patterns.clone()))
                .collect();
            lexicon.extend(
                &ext.generic_title_phrases,
                &ext.stop_words,
                &ext.exaggerated_phrases,
                &intent,
            )?;
        }
        Ok(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_patterns() {
        let config = Config::default();
        assert_eq!(config.get_draft_patterns(), vec![".draft.json"]);
    }

    #[test]
    fn test_custom_draft_patterns() {
        let config: Config =
            serde_json::from_str(r#"{"draftPatterns": [".rascunho.json"]}"#).unwrap();
        assert_eq!(config.get_draft_patterns(), vec![".rascunho.json"]);
    }

    #[test]
    fn test_merge_with_cli_precedence() {
        let config: Config = serde_json::from_str(r#"{"threshold": 60}"#).unwrap();
        assert_eq!(config.merge_with_cli(Some(80)).threshold, Some(80));

        let config: Config = serde_json::from_str(r#"{"threshold": 60}"#).unwrap();
        assert_eq!(config.merge_with_cli(None).threshold, Some(60));
    }

    #[test]
    fn test_build_lexicon_with_extensions() {
        let config: Config = serde_json::from_str(
            r#"{
                "lexicon": {
                    "genericTitlePhrases": ["veja só"],
                    "exaggeratedPhrases": ["sem igual"],
                    "intentPatterns": { "transactional": ["\\balugar\\b"] }
                }
            }"#,
        )
        .unwrap();
        let lexicon = config.build_lexicon().unwrap();
        assert!(lexicon.generic_title_phrases.contains(&"veja só".to_string()));
        assert!(lexicon.exaggerated_phrases.contains(&"sem igual".to_string()));
    }

    #[test]
    fn test_build_lexicon_rejects_bad_regex() {
        let config: Config = serde_json::from_str(
            r#"{"lexicon": {"intentPatterns": {"commercial": ["("]}}}"#,
        )
        .unwrap();
        assert!(config.build_lexicon().is_err());
    }
}
