//! Heading usage relative to content length

use crate::parser::HeadingCounts;
use crate::{Status, StructureAnalysis};

/// Word counts past which missing section breaks start to matter
const NEEDS_H2_WORDS: usize = 100;
const NEEDS_H3_WORDS: usize = 300;
const NEEDS_ANY_HEADING_WORDS: usize = 50;

/// `has_page_title` marks that the surrounding page renders the draft title
/// as its own level-1 heading, outside the body markup.
pub fn analyze(
    headings: &HeadingCounts,
    word_count: usize,
    has_page_title: bool,
) -> StructureAnalysis {
    let mut status = Status::Ok;
    let mut suggestions: Vec<String> = Vec::new();

    if has_page_title && headings.h1 > 0 {
        suggestions.push(
            "O título da página já ocupa o H1; use H2 e H3 para as seções do corpo.".to_string(),
        );
    }

    if headings.h2 == 0 && headings.h3 == 0 && word_count > NEEDS_H2_WORDS {
        status = status.worst(Status::Warn);
        suggestions.push("Divida o conteúdo com subtítulos H2 para facilitar a leitura.".to_string());
    }

    if headings.h2 > 0 && headings.h3 == 0 && word_count > NEEDS_H3_WORDS {
        suggestions.push("Considere subdividir seções longas com subtítulos H3.".to_string());
    }

    if headings.h1 > 1 {
        status = status.worst(Status::Warn);
        suggestions.push("Use apenas um H1 por documento.".to_string());
    }

    if headings.total() == 0 && word_count > NEEDS_ANY_HEADING_WORDS {
        status = status.worst(Status::Warn);
        if suggestions.is_empty() {
            suggestions.push("Adicione subtítulos para organizar o conteúdo.".to_string());
        }
    }

    StructureAnalysis {
        status,
        h1: headings.h1,
        h2: headings.h2,
        h3: headings.h3,
        suggestions,
    }
}
