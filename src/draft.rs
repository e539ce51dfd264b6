//! Draft file loading.
//!
//! Drafts are the JSON payload the platform editor autosaves:
//! `{"title": "...", "lead": "...", "body": "<p>...</p>"}`. Missing fields
//! deserialize to empty strings; the engine treats emptiness as a quality
//! signal, so a half-written draft still analyzes cleanly.

use crate::Draft;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("failed to read draft file: {0}")]
    Io(#[from] std::io::Error),
    #[error("draft file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a draft from a JSON file
pub fn load_draft(path: &Path) -> Result<Draft, DraftError> {
    let content = std::fs::read_to_string(path)?;
    let draft = serde_json::from_str(&content)?;
    Ok(draft)
}

/// True when the file name matches one of the configured draft suffixes
pub fn is_draft_file(path: &Path, patterns: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    patterns.iter().any(|p| name.ends_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_draft() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("praia.draft.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"title": "Praias", "lead": "Resumo", "body": "<p>Corpo</p>"}}"#
        )
        .unwrap();

        let draft = load_draft(&path).unwrap();
        assert_eq!(draft.title, "Praias");
        assert_eq!(draft.lead, "Resumo");
        assert_eq!(draft.body, "<p>Corpo</p>");
    }

    #[test]
    fn test_load_partial_draft_defaults_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vazio.draft.json");
        std::fs::write(&path, "{}").unwrap();

        let draft = load_draft(&path).unwrap();
        assert!(draft.title.is_empty());
        assert!(draft.body.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_draft(Path::new("nao-existe.draft.json")).unwrap_err();
        assert!(matches!(err, DraftError::Io(_)));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("quebrado.draft.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_draft(&path).unwrap_err();
        assert!(matches!(err, DraftError::Parse(_)));
    }

    #[test]
    fn test_is_draft_file_patterns() {
        let patterns = [".draft.json"];
        assert!(is_draft_file(Path::new("posts/praia.draft.json"), &patterns));
        assert!(!is_draft_file(Path::new("posts/praia.json"), &patterns));
        assert!(!is_draft_file(Path::new(""), &patterns));
    }
}
