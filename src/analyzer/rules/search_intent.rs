//! Search-intent classification by pattern-group counting

use crate::lexicon::Lexicon;
use crate::{SearchIntent, SearchIntentAnalysis};

/// Count matches per intent group over title + body and pick the highest.
/// Groups are tried in the lexicon's priority order, so on a tie the earlier
/// group keeps the win. Zero matches everywhere defaults to informational.
pub fn analyze(title: &str, plain_text: &str, lexicon: &Lexicon) -> SearchIntentAnalysis {
    let combined = format!("{} {}", title, plain_text).to_lowercase();

    let mut best = SearchIntent::Informational;
    let mut best_count = 0usize;

    for (intent, patterns) in lexicon.intent_groups() {
        let count: usize = patterns.iter().map(|re| re.find_iter(&combined).count()).sum();
        if count > best_count {
            best = *intent;
            best_count = count;
        }
    }

    SearchIntentAnalysis {
        intent: best,
        label: best.label().to_string(),
        matched: best_count > 0,
    }
}
