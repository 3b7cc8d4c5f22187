//! Analyze command - annotate a CSV and render a report

use super::input::{load_table, resolve_input};
use ai_detect::classifier::Flag;
use ai_detect::config::ProjectConfig;
use ai_detect::models::AnalysisReport;
use ai_detect::pipeline::annotate;
use ai_detect::reporters::{self, OutputFormat};
use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Flags for `ai-detect analyze`, before config defaults are applied
#[derive(Debug, Default)]
pub(super) struct AnalyzeArgs {
    pub input: Option<PathBuf>,
    pub sample: bool,
    pub answer_column: Option<String>,
    pub id_column: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub hi: Option<f64>,
    pub lo: Option<f64>,
    pub fail_on: Option<String>,
    pub no_emoji: bool,
}

/// Run the analyze command
pub(super) fn run(config: &ProjectConfig, args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    // CLI flags win over config, config over built-in defaults
    let format_name = args
        .format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;
    let fail_on = args
        .fail_on
        .or_else(|| config.defaults.fail_on.clone())
        .map(|s| parse_fail_on(&s).map(|flag| (s, flag)))
        .transpose()?;
    let no_emoji = args.no_emoji || config.defaults.no_emoji.unwrap_or(false);
    let columns = config
        .columns
        .selection(args.answer_column.as_deref(), args.id_column.as_deref());
    let thresholds = config.thresholds.with_overrides(args.hi, args.lo);
    if !thresholds.is_ordered() {
        warn!(
            "Thresholds are inverted (lo {} > hi {}); no answer will be flagged Ambiguous",
            thresholds.lo, thresholds.hi
        );
    }

    // Machine-readable output on stdout gets no status lines
    let quiet_mode = args.output.is_none() && matches!(format, OutputFormat::Json | OutputFormat::Csv);

    let input_path = resolve_input(args.input.as_deref(), args.sample, config)?;
    let table = load_table(&input_path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.set_message(format!("Analyzing {} answers...", table.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = annotate(table, &columns, &thresholds);
    spinner.finish_and_clear();
    let report = result?;

    let rendered = reporters::report_with_format(&report, format)?;
    match args.output.as_deref() {
        Some(path) => {
            let path = output_file(path, format);
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Wrote {} report to {}", format, path.display());
            if !quiet_mode {
                let icon = if no_emoji { "" } else { "📄 " };
                eprintln!(
                    "{}Report written to {}",
                    style(icon).bold(),
                    style(path.display()).cyan()
                );
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }

    if !quiet_mode {
        print_final_summary(&report, no_emoji, start_time);
    }

    // CI/CD threshold check
    if let Some((name, flag)) = fail_on {
        if report.summary.any_at_or_above(flag) {
            eprintln!("Failing due to --fail-on={} threshold", name);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Parse a `--fail-on` level; likely-human would fail every non-empty run
fn parse_fail_on(s: &str) -> Result<Flag> {
    let flag = Flag::from_str(s)?;
    if flag == Flag::LikelyHuman {
        bail!("Invalid fail_on '{}'. Valid: ambiguous, likely-ai", s);
    }
    Ok(flag)
}

/// A directory gets the format's default file name
fn output_file(path: &Path, format: OutputFormat) -> PathBuf {
    if path.is_dir() {
        path.join(reporters::default_file_name(format))
    } else {
        path.to_path_buf()
    }
}

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .expect("valid template")
}

fn print_final_summary(report: &AnalysisReport, no_emoji: bool, start_time: Instant) {
    let icon_done = if no_emoji { "" } else { "✓ " };
    let s = &report.summary;
    eprintln!(
        "\n{}Analysis complete in {:.2}s: {} likely AI, {} ambiguous, {} likely human",
        style(icon_done).green().bold(),
        start_time.elapsed().as_secs_f64(),
        style(s.likely_ai).red(),
        style(s.ambiguous).yellow(),
        style(s.likely_human).green()
    );
}
