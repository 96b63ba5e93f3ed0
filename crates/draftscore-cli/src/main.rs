//! draftscore CLI
//!
//! Command-line interface for scoring document drafts against a rubric.
//!
//! ## Usage
//!
//! ```bash
//! # Score an ADR
//! draftscore score --rubric adr --input docs/adr/0007-use-postgres.md
//!
//! # Pipe from stdin
//! cat statement.md | draftscore score --rubric power-statement
//!
//! # JSON output with indicators
//! draftscore score --input adr.md --format json --explain
//!
//! # Inspect rubrics
//! draftscore rubric list
//! draftscore rubric show power-statement
//!
//! # Map a score to grade, color and label
//! draftscore grade 84
//! ```
//!
//! ## Exit Codes
//!
//! - 0: total score at or above the minimum
//! - 1: total score below the minimum
//! - 3: Error

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use draftscore_core::{
    explain_dimensions, grade, score_color, score_label, validate, DimensionExplanation,
    PatternRegistry, Rubric, RubricId, ValidationReport, ValidationResult,
};

use config::CliConfig;

/// Config files picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILES: &[&str] = &["draftscore.yaml", "draftscore.yml", "draftscore.json"];

/// draftscore: rubric scoring for document drafts
#[derive(Parser)]
#[command(name = "draftscore")]
#[command(version)]
#[command(about = "Score ADRs and power statements against a rubric", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a draft
    Score {
        /// Rubric to score against (adr, power-statement)
        #[arg(short, long)]
        rubric: Option<RubricId>,

        /// Path to the draft (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Show the indicators each dimension found
        #[arg(long)]
        explain: bool,

        /// Path to a YAML or JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Minimum total score for a zero exit code
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        min_score: Option<u32>,

        /// Number of issues to print
        #[arg(long)]
        issues: Option<usize>,
    },

    /// Rubric inspection commands
    Rubric {
        #[command(subcommand)]
        action: RubricAction,
    },

    /// Map a score to its grade, color and label
    Grade {
        /// Score between 0 and 100
        #[arg(value_parser = clap::value_parser!(u32).range(0..=100))]
        score: u32,
    },
}

#[derive(Subcommand)]
enum RubricAction {
    /// List the built-in rubrics
    List,

    /// Show a rubric's dimensions
    Show {
        /// Rubric id (adr, power-statement)
        id: RubricId,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON document printed by `score --format json`.
#[derive(Serialize)]
struct ScoreOutput<'a> {
    #[serde(flatten)]
    report: ValidationReport<'a>,

    #[serde(skip_serializing_if = "Option::is_none")]
    explanations: Option<Vec<DimensionExplanation>>,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(3)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            rubric,
            input,
            format,
            explain,
            config,
            min_score,
            issues,
        } => {
            let config = load_config(config.as_deref())?;
            let options = ScoreOptions {
                rubric: rubric.unwrap_or(config.default_rubric),
                format,
                explain: explain || config.explain,
                min_score: min_score.unwrap_or(config.min_score),
                issue_limit: issues.unwrap_or(config.issue_limit),
            };
            score_command(input, options)
        }

        Commands::Rubric { action } => match action {
            RubricAction::List => list_rubrics(),
            RubricAction::Show { id } => show_rubric(id),
        },

        Commands::Grade { score } => grade_command(score),
    }
}

/// Effective settings for one `score` run, after merging flags over config.
struct ScoreOptions {
    rubric: RubricId,
    format: OutputFormat,
    explain: bool,
    min_score: u32,
    issue_limit: usize,
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    if let Some(path) = path {
        return CliConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    match DEFAULT_CONFIG_FILES.iter().map(Path::new).find(|p| p.is_file()) {
        Some(path) => {
            tracing::debug!(path = ?path, "Using config file");
            CliConfig::load(path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => Ok(CliConfig::default()),
    }
}

fn read_draft(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read draft from {:?}", path)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn score_command(input: Option<PathBuf>, options: ScoreOptions) -> Result<ExitCode> {
    let content = read_draft(input)?;

    let patterns = PatternRegistry::shared();
    let rubric = Rubric::shared(options.rubric);
    let result = validate(Some(&content), rubric, patterns);

    let explanations = options
        .explain
        .then(|| explain_dimensions(&content, rubric, patterns));

    match options.format {
        OutputFormat::Json => {
            let output = ScoreOutput {
                report: result.report(),
                explanations,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            print_text_result(rubric, &result, options.issue_limit, explanations.as_deref());
        }
    }

    Ok(if result.total_score >= options.min_score {
        ExitCode::from(0)
    } else {
        ExitCode::from(1)
    })
}

fn print_text_result(
    rubric: &Rubric,
    result: &ValidationResult,
    issue_limit: usize,
    explanations: Option<&[DimensionExplanation]>,
) {
    let score = result.total_score;
    println!(
        "{}: {}/{} ({}, {}) {}",
        rubric.name(),
        score,
        result.total_max,
        grade(score),
        score_color(score),
        score_label(score)
    );
    println!();

    println!("Dimensions:");
    for d in &result.dimensions {
        println!(
            "  {}. {:<14} {:>2}/{}",
            d.position, d.name, d.result.score, d.result.max_score
        );
    }
    println!();

    if result.slop_penalty.amount > 0 {
        println!(
            "Slop penalty: -{} ({} severity)",
            result.slop_penalty.amount, result.slop_penalty.severity
        );
    }
    if let Some(bonus) = &result.document_bonus {
        println!("Bonus: +{} {}", bonus.points, bonus.name);
    }

    let issues = result.top_issues(issue_limit);
    if !issues.is_empty() {
        println!();
        println!("Top issues:");
        for issue in issues {
            println!("  - {}", issue);
        }
        if result.issues.len() > issues.len() {
            println!("  ... and {} more", result.issues.len() - issues.len());
        }
    }

    if !result.strengths.is_empty() {
        println!();
        println!("Strengths:");
        for strength in &result.strengths {
            println!("  + {}", strength);
        }
    }

    if let Some(explanations) = explanations {
        println!();
        println!("--- Indicators ---");
        for explanation in explanations {
            println!();
            println!("{}:", explanation.name);
            if explanation.indicators.is_empty() {
                println!("  (none)");
            }
            for indicator in &explanation.indicators {
                println!("  - {}", indicator);
            }
        }
    }
}

fn list_rubrics() -> Result<ExitCode> {
    for id in RubricId::ALL {
        let rubric = Rubric::shared(id);
        let dimensions: Vec<&str> = rubric.specs().iter().map(|s| s.name).collect();
        println!("{:<16} {} ({})", id, rubric.name(), dimensions.join(", "));
    }
    Ok(ExitCode::from(0))
}

fn show_rubric(id: RubricId) -> Result<ExitCode> {
    let rubric = Rubric::shared(id);

    println!("Rubric: {} ({})", rubric.name(), id);
    println!("Total: {} points", rubric.total_max());
    if rubric.has_document_bonus() {
        println!("Document bonus: yes, capped at {}", rubric.score_ceiling());
    }
    println!();

    println!("Dimensions:");
    for (i, spec) in rubric.specs().iter().enumerate() {
        println!("  {}. {} ({} pts): {}", i + 1, spec.name, spec.max_points, spec.description);
    }

    Ok(ExitCode::from(0))
}

fn grade_command(score: u32) -> Result<ExitCode> {
    println!(
        "{} {} {}",
        grade(score),
        score_color(score),
        score_label(score)
    );
    Ok(ExitCode::from(0))
}
