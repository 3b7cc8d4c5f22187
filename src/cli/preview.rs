//! Preview command - show the first rows of a CSV before analyzing it

use super::input::{load_table, resolve_input};
use ai_detect::config::ProjectConfig;
use ai_detect::reporters::truncate_chars;
use ai_detect::table::Table;
use anyhow::Result;
use console::style;
use std::path::Path;

/// Widest a preview cell gets, in characters
const CELL_WIDTH: usize = 32;

/// Run the preview command
pub(super) fn run(
    config: &ProjectConfig,
    input: Option<&Path>,
    sample: bool,
    answer_column: Option<&str>,
    rows: usize,
) -> Result<()> {
    let path = resolve_input(input, sample, config)?;
    let table = load_table(&path)?;

    println!(
        "{} {} ({} rows, {} columns)\n",
        style("Preview:").bold(),
        style(path.display()).cyan(),
        table.len(),
        table.headers().len()
    );
    print!("{}", render_preview(&table, rows));

    let answer = config.columns.selection(answer_column, None).answer;
    if let Some(warning) = missing_answer_warning(&table, &answer) {
        eprintln!("\n{} {}", style("⚠").yellow(), warning);
    }
    Ok(())
}

/// Warning text when the answer column is absent
fn missing_answer_warning(table: &Table, answer: &str) -> Option<String> {
    if table.has_column(answer) {
        return None;
    }
    Some(format!(
        "Column '{}' not found. Pass --answer-column or set [columns] answer in ai-detect.toml. Available columns: {}",
        answer,
        table.headers().join(", ")
    ))
}

/// Header plus the first `rows` rows as a plain aligned grid
fn render_preview(table: &Table, rows: usize) -> String {
    let head = table.head(rows);
    let widths: Vec<usize> = (0..table.headers().len())
        .map(|col| {
            std::iter::once(&table.headers()[col])
                .chain(head.iter().map(|row| &row[col]))
                .map(|cell| cell_text(cell).chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let line = |cells: &[String], out: &mut String| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell_text(cell), w = w))
            .collect();
        out.push_str(padded.join(" | ").trim_end());
        out.push('\n');
    };

    line(table.headers(), &mut out);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in head {
        line(row.as_slice(), &mut out);
    }
    if table.len() > head.len() {
        out.push_str(&format!("... {} more rows\n", table.len() - head.len()));
    }
    out
}

fn cell_text(cell: &str) -> String {
    truncate_chars(cell, CELL_WIDTH)
}
