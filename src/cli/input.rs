//! Locating and loading the input CSV

use ai_detect::config::ProjectConfig;
use ai_detect::table::Table;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pick the CSV to read: the explicit path, else the sample when asked
pub(super) fn resolve_input(
    input: Option<&Path>,
    sample: bool,
    config: &ProjectConfig,
) -> Result<PathBuf> {
    if let Some(path) = input {
        return Ok(path.to_path_buf());
    }
    if !sample {
        bail!("No input CSV given (pass a path or --sample)");
    }
    let path = config.defaults.sample_path();
    if !path.is_file() {
        bail!("Sample CSV not found in {}", path.display());
    }
    Ok(path)
}

/// Read and parse a CSV file
pub(super) fn load_table(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input CSV {}", path.display()))?;
    let table = Table::from_csv_str(&content)
        .with_context(|| format!("Failed to parse input CSV {}", path.display()))?;
    debug!(
        "Loaded {} rows, {} columns from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = ProjectConfig::default();
        let path = resolve_input(Some(Path::new("x.csv")), true, &config).unwrap();
        assert_eq!(path, PathBuf::from("x.csv"));
    }

    #[test]
    fn test_no_input_is_an_error() {
        let err = resolve_input(None, false, &ProjectConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No input CSV given"));
    }

    #[test]
    fn test_missing_sample_names_path() {
        let mut config = ProjectConfig::default();
        config.defaults.sample = Some(PathBuf::from("/nonexistent/sample.csv"));
        let err = resolve_input(None, true, &config).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sample.csv"));
    }

    #[test]
    fn test_load_table_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(&path, "student,answer\nalice,hello there\n").unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.has_column("answer"));
    }

    #[test]
    fn test_load_table_missing_file() {
        let err = load_table(Path::new("/nonexistent/in.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to read input CSV"));
    }
}
