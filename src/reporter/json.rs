//! JSON reporter for machine-readable output

use crate::analyzer::AggregateStats;
use crate::AnalysisResult;
use serde::Serialize;
use std::path::PathBuf;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single analysis result as JSON
    pub fn report(&self, result: &AnalysisResult) -> String {
        self.render(result, "{}")
    }

    /// Report multiple results with a summary
    pub fn report_with_summary(
        &self,
        results: &[(PathBuf, AnalysisResult)],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results: results
                .iter()
                .map(|(path, analysis)| DraftReport {
                    file_path: path.clone(),
                    analysis,
                })
                .collect(),
            summary: JsonSummary {
                drafts_analyzed: stats.drafts_analyzed,
                average_score: stats.average_score,
                average_grade: stats.average_grade.label().to_string(),
                total_improvements: stats.total_improvements,
            },
        };
        self.render(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftReport<'a> {
    file_path: PathBuf,
    #[serde(flatten)]
    analysis: &'a AnalysisResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: Vec<DraftReport<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    drafts_analyzed: usize,
    average_score: u8,
    average_grade: String,
    total_improvements: usize,
}
