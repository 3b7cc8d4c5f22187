//! Project-level configuration support
//!
//! Loads configuration from `ai-detect.toml` or `.ai-detectrc.json` in the
//! working directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # ai-detect.toml
//!
//! [columns]
//! answer = "What did you learn this week?"
//! id = "Email Address"
//!
//! [thresholds]
//! hi = 0.70
//! lo = 0.40
//!
//! [defaults]
//! format = "html"
//! sample = "data/sample_responses.csv"
//! fail_on = "likely-ai"
//! no_emoji = false
//! ```

use crate::classifier::Thresholds;
use crate::models::ColumnSelection;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Preferred config file name
pub const CONFIG_FILE: &str = "ai-detect.toml";
/// Alternative JSON config file name
pub const JSON_CONFIG_FILE: &str = ".ai-detectrc.json";
/// Sample responses used by `--sample`
pub const DEFAULT_SAMPLE_PATH: &str = "data/sample_responses.csv";

/// Configuration loaded from ai-detect.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Which CSV columns to read
    #[serde(default)]
    pub columns: ColumnsConfig,

    /// Flag thresholds
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Column names in the input CSV
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsConfig {
    /// Answer column header, exact match (default: "answer")
    #[serde(default = "default_answer_column")]
    pub answer: String,

    /// Respondent id column header (default: "student"). An empty string
    /// disables the id column.
    #[serde(default = "default_id_column")]
    pub id: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            answer: default_answer_column(),
            id: default_id_column(),
        }
    }
}

fn default_answer_column() -> String {
    "answer".to_string()
}
fn default_id_column() -> String {
    "student".to_string()
}

impl ColumnsConfig {
    /// Resolve into a selection, letting CLI values win
    pub fn selection(&self, answer: Option<&str>, id: Option<&str>) -> ColumnSelection {
        let answer = answer.unwrap_or(&self.answer).to_string();
        let id = id.unwrap_or(&self.id);
        ColumnSelection {
            answer,
            id: (!id.is_empty()).then(|| id.to_string()),
        }
    }
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, csv, html, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Sample CSV path for `--sample`
    #[serde(default)]
    pub sample: Option<PathBuf>,

    /// Fail-on flag threshold for CI
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,
}

impl CliDefaults {
    pub fn sample_path(&self) -> PathBuf {
        self.sample
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH))
    }
}

/// Load configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `ai-detect.toml`
/// 2. `.ai-detectrc.json`
///
/// Returns default configuration if no config file is found or a file
/// fails to parse.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in [CONFIG_FILE, JSON_CONFIG_FILE] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load one config file, choosing the parser by extension
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let config: ProjectConfig = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    if !config.thresholds.is_ordered() {
        warn!(
            "Configured thresholds are inverted (lo {} > hi {}); the ambiguous band is empty",
            config.thresholds.lo, config.thresholds.hi
        );
    }
    Ok(config)
}

/// Example config written by `ai-detect init`
pub const EXAMPLE_CONFIG: &str = r#"# ai-detect configuration

[columns]
# Header of the free-text answer column (exact match)
answer = "answer"

# Header of the respondent column; leave empty to key rows by index
id = "student"

[thresholds]
# score >= hi is flagged "Likely AI"
hi = 0.70
# score <= lo is flagged "Likely Human"
lo = 0.40

[defaults]
# Output format (text, json, csv, html, markdown)
# format = "text"

# CSV used by `ai-detect analyze --sample`
# sample = "data/sample_responses.csv"

# Exit 1 when any answer is flagged at this level or above (ambiguous, likely-ai)
# fail_on = "likely-ai"
"#;
