//! CLI command definitions and handlers

mod analyze;
mod init;
mod input;
mod preview;
mod score;

use ai_detect::config::{load_config_file, load_project_config, ProjectConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse a threshold in [0, 1]
fn parse_threshold(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err("threshold must be between 0 and 1".to_string())
    }
}

/// ai-detect - heuristic AI-likelihood scoring for Google Forms responses
#[derive(Parser, Debug)]
#[command(name = "ai-detect")]
#[command(
    version,
    about = "Score free-text Google Forms answers for AI-likelihood with a lexical heuristic",
    long_about = "ai-detect reads a Google Forms CSV export, scores each free-text answer \
with an em-dash enhanced lexical heuristic, and flags it Likely AI, Ambiguous or \
Likely Human.\n\n\
The score is a hand-tuned estimate from surface statistics (word length, \
vocabulary diversity, punctuation, dashes). It is not proof of authorship.",
    after_help = "\
Examples:
  ai-detect analyze responses.csv                    Annotate a CSV, print a summary
  ai-detect analyze --sample                         Run on the bundled sample responses
  ai-detect analyze responses.csv -f csv -o out/     Write out/annotated_responses.csv
  ai-detect analyze responses.csv -f html -o report.html   Standalone HTML report
  ai-detect score \"Some text to check\"               Score one piece of text
  ai-detect init                                     Write an example ai-detect.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ai-detect.toml or .ai-detectrc.json in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate every answer in a CSV and render a report
    #[command(after_help = "\
Examples:
  ai-detect analyze responses.csv                              Text summary on the terminal
  ai-detect analyze responses.csv --answer-column \"Question 1\"  Pick the answer column
  ai-detect analyze responses.csv --format json                JSON for scripting
  ai-detect analyze responses.csv --format csv -o annotated.csv   Annotated CSV
  ai-detect analyze responses.csv --hi 0.8 --lo 0.3            Custom thresholds
  ai-detect analyze responses.csv --fail-on likely-ai          Exit code 1 if any answer is Likely AI")]
    Analyze {
        /// Input CSV (Google Forms export)
        input: Option<PathBuf>,

        /// Use the sample responses CSV when no input is given
        #[arg(long)]
        sample: bool,

        /// Header of the free-text answer column
        #[arg(long)]
        answer_column: Option<String>,

        /// Header of the respondent id column (falls back to row index if absent)
        #[arg(long)]
        id_column: Option<String>,

        /// Output format: text, json, csv, html, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "csv", "html", "markdown", "md"])]
        format: Option<String>,

        /// Output file or directory (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Score at or above which an answer is Likely AI
        #[arg(long, value_parser = parse_threshold)]
        hi: Option<f64>,

        /// Score at or below which an answer is Likely Human
        #[arg(long, value_parser = parse_threshold)]
        lo: Option<f64>,

        /// Exit with code 1 if any answer is flagged at this level or higher
        #[arg(long, value_parser = ["ambiguous", "likely-ai"])]
        fail_on: Option<String>,

        /// Disable emoji in output (cleaner for CI logs)
        #[arg(long)]
        no_emoji: bool,
    },

    /// Show the header and first rows of a CSV
    #[command(after_help = "\
Examples:
  ai-detect preview responses.csv              First 5 rows
  ai-detect preview responses.csv --rows 10    First 10 rows
  ai-detect preview responses.csv --answer-column \"Question 1\"   Check the answer column
  ai-detect preview --sample                   Preview the sample responses")]
    Preview {
        /// Input CSV
        input: Option<PathBuf>,

        /// Use the sample responses CSV when no input is given
        #[arg(long)]
        sample: bool,

        /// Header of the free-text answer column to check for
        #[arg(long)]
        answer_column: Option<String>,

        /// Number of rows to show
        #[arg(long, short = 'n', default_value = "5")]
        rows: usize,
    },

    /// Score a single piece of text
    #[command(after_help = "\
Examples:
  ai-detect score \"I think the answer is 4.\"    Score an argument
  echo \"some text\" | ai-detect score --stdin    Score standard input
  ai-detect score \"text\" --json --breakdown     JSON with per-factor values")]
    Score {
        /// Text to score
        #[arg(required_unless_present = "stdin")]
        text: Option<String>,

        /// Read the text from standard input
        #[arg(long, conflicts_with = "text")]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Include lexical features and per-factor values
        #[arg(long)]
        breakdown: bool,

        /// Score at or above which the text is Likely AI
        #[arg(long, value_parser = parse_threshold)]
        hi: Option<f64>,

        /// Score at or below which the text is Likely Human
        #[arg(long, value_parser = parse_threshold)]
        lo: Option<f64>,
    },

    /// Write an example ai-detect.toml config file
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Load the explicit config file if given, else search the working directory
fn load_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_project_config(Path::new("."))),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { dir } => init::run(&dir),

        Commands::Analyze {
            input,
            sample,
            answer_column,
            id_column,
            format,
            output,
            hi,
            lo,
            fail_on,
            no_emoji,
        } => {
            let config = load_config(cli.config.as_deref())?;
            analyze::run(
                &config,
                analyze::AnalyzeArgs {
                    input,
                    sample,
                    answer_column,
                    id_column,
                    format,
                    output,
                    hi,
                    lo,
                    fail_on,
                    no_emoji,
                },
            )
        }

        Commands::Preview {
            input,
            sample,
            answer_column,
            rows,
        } => {
            let config = load_config(cli.config.as_deref())?;
            preview::run(
                &config,
                input.as_deref(),
                sample,
                answer_column.as_deref(),
                rows,
            )
        }

        Commands::Score {
            text,
            stdin,
            json,
            breakdown,
            hi,
            lo,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let thresholds = config.thresholds.with_overrides(hi, lo);
            score::run(text, stdin, json, breakdown, &thresholds)
        }
    }
}
