//! Depth-of-coverage tiers from the plain-text word count

use crate::{ContentLengthAnalysis, DepthTier, Status};

/// Tier boundaries in words. These feed the weighted score directly.
pub const MIN_WORDS: usize = 300;
pub const GOOD_WORDS: usize = 700;
pub const EXCELLENT_WORDS: usize = 1500;

pub fn analyze(word_count: usize) -> ContentLengthAnalysis {
    let (status, tier, feedback) = if word_count >= EXCELLENT_WORDS {
        (
            Status::Excellent,
            DepthTier::VeryGood,
            "Conteúdo aprofundado, com extensão ideal para cobrir o assunto por completo.",
        )
    } else if word_count >= GOOD_WORDS {
        (
            Status::Ok,
            DepthTier::Good,
            "Boa extensão de conteúdo; aprofundar as seções principais pode render ainda mais.",
        )
    } else if word_count >= MIN_WORDS {
        (
            Status::Warn,
            DepthTier::Medium,
            "Extensão média: desenvolva mais os tópicos para ganhar profundidade.",
        )
    } else if word_count > 0 {
        (
            Status::Bad,
            DepthTier::TooShort,
            "Conteúdo muito curto: amplie o texto para pelo menos 300 palavras.",
        )
    } else {
        (
            Status::Bad,
            DepthTier::TooShort,
            "Adicione o corpo do conteúdo para começar a análise.",
        )
    };

    ContentLengthAnalysis {
        status,
        word_count,
        tier,
        feedback: feedback.to_string(),
    }
}
