//! Init command - write an example config file

use ai_detect::config::{CONFIG_FILE, EXAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub(super) fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\nEdit {} to set your answer column, then run: {}",
        style(CONFIG_FILE).cyan(),
        style("ai-detect analyze responses.csv").bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_example_config() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
        let written = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(written, EXAMPLE_CONFIG);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[thresholds]\nhi = 0.9\n").unwrap();
        run(dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[thresholds]\nhi = 0.9\n"
        );
    }

    #[test]
    fn test_init_rejects_missing_dir() {
        assert!(run(Path::new("/nonexistent/ai-detect-dir")).is_err());
    }
}
