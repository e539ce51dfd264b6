//! Exaggerated-claim detection. Warn-only by design of the dimension: puffery
//! costs credibility points but never fails a draft on its own.

use crate::lexicon::Lexicon;
use crate::{Status, TrustAnalysis};

pub fn analyze(plain_text: &str, lexicon: &Lexicon) -> TrustAnalysis {
    let lower = plain_text.to_lowercase();
    let has_exaggeration = lexicon
        .exaggerated_phrases
        .iter()
        .any(|phrase| lower.contains(phrase));

    if has_exaggeration {
        TrustAnalysis {
            status: Status::Warn,
            has_exaggeration: true,
            feedback: "Expressões exageradas reduzem a credibilidade; prefira linguagem objetiva e verificável.".to_string(),
        }
    } else {
        TrustAnalysis {
            status: Status::Ok,
            has_exaggeration: false,
            feedback: "Tom equilibrado, sem promessas exageradas.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sober_text_is_ok() {
        let a = analyze("A pousada fica a dez minutos da praia.", &Lexicon::pt_br());
        assert_eq!(a.status, Status::Ok);
        assert!(!a.has_exaggeration);
    }

    #[test]
    fn test_hyperbole_warns() {
        let a = analyze(
            "O melhor do mundo em hospedagem, com atendimento 100% garantido.",
            &Lexicon::pt_br(),
        );
        assert_eq!(a.status, Status::Warn);
        assert!(a.has_exaggeration);
        assert!(a.feedback.contains("linguagem objetiva"));
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let a = analyze("Um restaurante REVOLUCIONÁRIO na serra.", &Lexicon::pt_br());
        assert!(a.has_exaggeration);
    }

    #[test]
    fn test_empty_text_is_ok() {
        let a = analyze("", &Lexicon::pt_br());
        assert_eq!(a.status, Status::Ok);
    }
}
