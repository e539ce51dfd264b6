//! Headline length and genericness

use crate::lexicon::Lexicon;
use crate::{Status, TitleAnalysis};

/// Ideal character band; outside it the title gets a warn with the exact gap
const IDEAL_MIN: usize = 40;
const IDEAL_MAX: usize = 65;
/// Hard bounds; outside these the title is bad regardless of anything else
const HARD_MIN: usize = 30;
const HARD_MAX: usize = 70;

pub fn analyze(title: &str, lexicon: &Lexicon) -> TitleAnalysis {
    if title.trim().is_empty() {
        return TitleAnalysis {
            status: Status::Bad,
            chars: 0,
            has_keyword: false,
            has_generic_phrase: false,
            suggestion: Some("Adicione um título claro e descritivo para o conteúdo.".to_string()),
        };
    }

    let chars = title.chars().count();
    let lower = title.to_lowercase();
    let has_keyword = title.split_whitespace().count() >= 2;
    let has_generic_phrase = lexicon
        .generic_title_phrases
        .iter()
        .any(|phrase| lower.contains(phrase));

    let mut status = Status::Ok;
    let mut parts: Vec<String> = Vec::new();

    if chars < IDEAL_MIN {
        status = status.worst(Status::Warn);
        parts.push(format!(
            "Título curto: acrescente {} caracteres para chegar à faixa ideal de {} a {}.",
            IDEAL_MIN - chars,
            IDEAL_MIN,
            IDEAL_MAX
        ));
    } else if chars > IDEAL_MAX {
        status = status.worst(Status::Warn);
        parts.push(format!(
            "Título longo: reduza {} caracteres para ficar dentro do limite de {}.",
            chars - IDEAL_MAX,
            IDEAL_MAX
        ));
    }

    if has_generic_phrase {
        status = status.worst(Status::Warn);
        parts.push(
            "Evite chamadas genéricas como \"clique aqui\"; diga do que o conteúdo trata."
                .to_string(),
        );
    }

    if status == Status::Ok && !has_keyword {
        status = status.worst(Status::Warn);
        parts.push("Inclua a palavra-chave principal no título.".to_string());
    }

    // Hard bounds run last and win over the soft classification
    if chars < HARD_MIN || chars > HARD_MAX {
        status = Status::Bad;
    }

    TitleAnalysis {
        status,
        chars,
        has_keyword,
        has_generic_phrase,
        suggestion: if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        },
    }
}
