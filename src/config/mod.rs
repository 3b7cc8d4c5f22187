//! Configuration module for ai-detect
//!
//! This module handles:
//! - Project-level configuration (ai-detect.toml)
//! - Column names and threshold overrides
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, CliDefaults, ColumnsConfig, ProjectConfig,
    CONFIG_FILE, DEFAULT_SAMPLE_PATH, EXAMPLE_CONFIG, JSON_CONFIG_FILE,
};
