//! Lead/summary length and redundancy with the headline

use crate::{LeadAnalysis, Status};

/// Ideal character band for the summary; search snippets truncate past the max
const IDEAL_MIN: usize = 120;
const IDEAL_MAX: usize = 160;

/// How much of the lowercased title the lead must contain to count as a
/// repetition of the headline
const TITLE_PREFIX_CHARS: usize = 20;

pub fn analyze(lead: &str, title: &str) -> LeadAnalysis {
    if lead.trim().is_empty() {
        // Missing summary is penalized but non-fatal
        return LeadAnalysis {
            status: Status::Warn,
            chars: 0,
            suggestion: Some(format!(
                "Escreva um resumo de {} a {} caracteres para apresentar o conteúdo.",
                IDEAL_MIN, IDEAL_MAX
            )),
        };
    }

    let chars = lead.chars().count();
    let title_prefix: String = title
        .to_lowercase()
        .chars()
        .take(TITLE_PREFIX_CHARS)
        .collect();
    let repeats_title = !title.trim().is_empty() && lead.to_lowercase().contains(&title_prefix);

    let mut status = Status::Ok;
    let mut parts: Vec<String> = Vec::new();

    if chars < IDEAL_MIN {
        status = status.worst(Status::Warn);
        parts.push(format!(
            "Resumo curto: faltam {} caracteres para o mínimo recomendado de {}.",
            IDEAL_MIN - chars,
            IDEAL_MIN
        ));
    } else if chars > IDEAL_MAX {
        status = status.worst(Status::Warn);
        parts.push(format!(
            "Resumo longo: corte {} caracteres; buscadores truncam o texto após {}.",
            chars - IDEAL_MAX,
            IDEAL_MAX
        ));
    }

    if repeats_title {
        status = status.worst(Status::Warn);
        parts.push(
            "Evite repetir o título no resumo; destaque um benefício ou um gancho de leitura."
                .to_string(),
        );
    }

    LeadAnalysis {
        status,
        chars,
        suggestion: if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        },
    }
}
