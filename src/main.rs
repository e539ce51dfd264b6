//! Redator: content quality analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use redator::analyzer::{AggregateStats, ContentAnalyzer};
use redator::config::{build_ignore_set, is_ignored, load_config, CONFIG_FILENAME};
use redator::draft::{is_draft_file, load_draft};
use redator::reporter::{ConsoleReporter, JsonReporter};
use redator::watcher::DraftWatcher;
use redator::AnalysisResult;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// How many drafts it takes before batch analysis goes parallel
const PARALLEL_THRESHOLD: usize = 10;

/// Redator: content quality analyzer for article drafts
#[derive(Parser, Debug)]
#[command(name = "redator")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Draft file or directory to analyze (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .redatorrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Watch for file changes and re-analyze
    #[arg(long)]
    watch: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .redatorrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 60)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let path = args
        .path
        .clone()
        .expect("path required when not using subcommand");

    if args.watch {
        return run_watch(&args, &path);
    }

    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let draft_files = collect_draft_files(&path, ignore_set.as_ref(), &config.get_draft_patterns())?;
    if draft_files.is_empty() {
        eprintln!("{}: No draft files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let engine = ContentAnalyzer::with_lexicon(config.build_lexicon()?);
    let (results, had_errors) = analyze_files(&engine, &draft_files, args.quiet);

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats =
        AggregateStats::from_results(&results.iter().map(|(_, r)| r.clone()).collect::<Vec<_>>());

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0].1));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for (path, result) in &results {
            reporter.report_quiet(path, result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if results.len() == 1 {
            reporter.report(&results[0].0, &results[0].1);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    // Check threshold (config or CLI)
    if let Some(threshold) = config.threshold {
        let score = if results.len() == 1 {
            results[0].1.score
        } else {
            stats.average_score
        };
        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Analyze all drafts, going parallel for larger batches. Files that fail to
/// load are reported and skipped.
fn analyze_files(
    engine: &ContentAnalyzer,
    files: &[PathBuf],
    quiet: bool,
) -> (Vec<(PathBuf, AnalysisResult)>, bool) {
    let analyze_one = |path: &PathBuf| -> Option<(PathBuf, AnalysisResult)> {
        match load_draft(path) {
            Ok(draft) => Some((path.clone(), engine.analyze(&draft))),
            Err(e) => {
                if !quiet {
                    eprintln!("{}: {}: {}", "Error".red(), path.display(), e);
                }
                None
            }
        }
    };

    let results: Vec<Option<(PathBuf, AnalysisResult)>> = if files.len() > PARALLEL_THRESHOLD {
        files.par_iter().map(analyze_one).collect()
    } else {
        files.iter().map(analyze_one).collect()
    };

    let had_errors = results.iter().any(|r| r.is_none());
    (results.into_iter().flatten().collect(), had_errors)
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(60);
    let json = format!(
        r#"{{
  "threshold": {},
  "ignore": [
    "**/arquivados/**"
  ],
  "draftPatterns": [".draft.json"]
}}
"#,
        threshold_value
    );
    // Users can also add a "lexicon" section with extra phrase lists:
    // genericTitlePhrases, stopWords, exaggeratedPhrases, intentPatterns.

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, path: &PathBuf) -> Result<ExitCode> {
    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let engine = ContentAnalyzer::with_lexicon(config.build_lexicon()?);
    let patterns = config.get_draft_patterns();
    let watcher = DraftWatcher::watch(path, &patterns).context("Failed to create file watcher")?;
    eprintln!("{}: Watching for changes... (Ctrl+C to stop)", "Info".blue());

    loop {
        let paths = watcher.next_changes();
        if paths.is_empty() {
            continue;
        }
        let filtered: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| {
                ignore_set
                    .as_ref()
                    .map(|set| !is_ignored(p, set))
                    .unwrap_or(true)
            })
            .collect();
        for path in filtered {
            match load_draft(&path) {
                Ok(draft) => {
                    let result = engine.analyze(&draft);
                    if args.quiet {
                        ConsoleReporter::new().report_quiet(&path, &result);
                    } else {
                        ConsoleReporter::new().report(&path, &result);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}: {}", "Error".red(), path.display(), e);
                }
            }
        }
    }
}

fn collect_draft_files(
    path: &PathBuf,
    ignore_set: Option<&globset::GlobSet>,
    draft_patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.clone()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if is_draft_file(file_path, draft_patterns) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();
    Ok(files)
}
