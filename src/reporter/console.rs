//! Console reporter with colored output

use crate::analyzer::AggregateStats;
use crate::{AnalysisResult, Grade, Status};
use colored::Colorize;
use std::path::Path;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable verbose output (shows every dimension's feedback text)
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, path: &Path, result: &AnalysisResult) {
        println!();
        println!("{}", format!("Análise de conteúdo: {}", path.display()).bold());
        println!();

        let bar = self.create_score_bar(result.score);
        println!("   Nota: {} {}", bar, self.colorize_grade(&result.grade).bold());
        println!();

        println!("   {}", "Dimensões:".bold());
        self.print_dimension("Título", result.title.status, format!("{} caracteres", result.title.chars));
        self.print_dimension("Resumo", result.lead.status, format!("{} caracteres", result.lead.chars));
        self.print_dimension(
            "Extensão",
            result.content_length.status,
            format!(
                "{} palavras ({})",
                result.content_length.word_count,
                result.content_length.tier.label()
            ),
        );
        self.print_dimension(
            "Estrutura",
            result.structure.status,
            format!(
                "H1: {}  H2: {}  H3: {}",
                result.structure.h1, result.structure.h2, result.structure.h3
            ),
        );
        self.print_dimension(
            "Palavra-chave",
            result.keyword.status,
            result
                .keyword
                .main_keyword
                .clone()
                .unwrap_or_else(|| "não derivada".to_string()),
        );
        self.print_dimension(
            "Legibilidade",
            result.legibility.status,
            format!("{} palavras por frase", result.legibility.avg_sentence_words),
        );
        self.print_dimension(
            "Confiança",
            result.trust.status,
            if result.trust.has_exaggeration {
                "tom exagerado".to_string()
            } else {
                "tom equilibrado".to_string()
            },
        );
        println!(
            "   {} Intenção de busca: {}{}",
            "→".cyan(),
            result.search_intent.label,
            if result.search_intent.matched {
                ""
            } else {
                " (padrão)"
            }
        );
        println!();

        if self.verbose {
            println!("   {}", "Pareceres:".bold());
            println!("   {} {}", "→".dimmed(), result.content_length.feedback.italic());
            println!("   {} {}", "→".dimmed(), result.keyword.observation.italic());
            println!("   {} {}", "→".dimmed(), result.legibility.feedback.italic());
            println!("   {} {}", "→".dimmed(), result.trust.feedback.italic());
            println!();
        }

        if !result.improvements.is_empty() {
            println!("   {}", "Melhorias sugeridas:".bold());
            for improvement in &result.improvements {
                println!("   {} {}", "→".cyan(), improvement);
            }
            println!();
        }
    }

    /// Report in quiet mode (just the score)
    pub fn report_quiet(&self, path: &Path, result: &AnalysisResult) {
        println!(
            "{}: {} ({})",
            path.display(),
            result.score,
            self.colorize_grade(&result.grade)
        );
    }

    /// Report multiple results with a summary
    pub fn report_many(&self, results: &[(std::path::PathBuf, AnalysisResult)], stats: &AggregateStats) {
        for (path, result) in results {
            self.report(path, result);
            println!("{}", "─".repeat(60));
        }
        self.print_summary(stats);
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Resumo".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Rascunhos analisados: {}",
            stats.drafts_analyzed.to_string().bold()
        );
        println!(
            "   Nota média:           {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(&stats.average_grade)
        );
        println!("   Melhorias sugeridas:  {}", stats.total_improvements);
        println!();
    }

    fn print_dimension(&self, name: &str, status: Status, detail: String) {
        let icon = match status {
            Status::Excellent => "★".green(),
            Status::Ok => "✓".green(),
            Status::Warn => "⚠".yellow(),
            Status::Bad => "✗".red(),
        };
        println!("   {} {:<13} {}", icon, name, detail.dimmed());
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.label();
        match grade {
            Grade::Excelente => s.green().bold(),
            Grade::Bom => s.green(),
            Grade::Regular => s.yellow(),
            Grade::Ruim => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;
        let bar = format!("[{}{}] {:>3}", "█".repeat(filled), "░".repeat(empty), score);

        if score >= 80 {
            bar.green().to_string()
        } else if score >= 60 {
            bar.yellow().to_string()
        } else {
            bar.red().to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
