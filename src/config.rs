use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::KeyExtractor;

pub const CONFIG_FILE_NAME: &str = ".transcovrc.json";

/// Character class a translation key may consist of in source code.
pub const KEY_CHARS: &str = "[a-zA-Z._-]*";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_project_marker")]
    pub project_marker: String,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_resource_file_names")]
    pub resource_file_names: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternConfig>,
}

/// One key-extraction rule: a regex plus the capture group holding the key.
///
/// Without an explicit `group`, the first capture group that participated in
/// the match is used, so a single regex can list several call-site shapes as
/// alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternConfig {
    pub regex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

impl PatternConfig {
    pub fn new(regex: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
            group: None,
        }
    }

    pub fn with_group(regex: impl Into<String>, group: usize) -> Self {
        Self {
            regex: regex.into(),
            group: Some(group),
        }
    }
}

fn default_project_marker() -> String {
    "csproj".to_string()
}

fn default_source_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_resource_file_names() -> Vec<String> {
    ["translations.csv", "translations.json"]
        .map(String::from)
        .to_vec()
}

fn default_ignores() -> Vec<String> {
    ["**/bin/**", "**/obj/**"].map(String::from).to_vec()
}

fn default_patterns() -> Vec<PatternConfig> {
    let call_sites = [
        format!(r#"Translate\(\s*"({KEY_CHARS})""#),
        format!(r#"GetString\(\s*"({KEY_CHARS})""#),
        format!(r#"[Ll]ocalizer\[\s*"({KEY_CHARS})"\s*\]"#),
        format!(r#"TranslationKey\(\s*"({KEY_CHARS})"\s*\)"#),
    ];
    vec![PatternConfig::new(call_sites.join("|"))]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_marker: default_project_marker(),
            source_extensions: default_source_extensions(),
            resource_file_names: default_resource_file_names(),
            ignores: default_ignores(),
            patterns: default_patterns(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any ignore glob or extraction regex is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        KeyExtractor::from_config(&self.patterns).context("Invalid regex in 'patterns'")?;

        if self.project_marker.trim().is_empty() {
            anyhow::bail!("'projectMarker' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
