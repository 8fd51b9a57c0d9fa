use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Profile {
    /// Vault to scan when the command line gives no path.
    pub vault_root: Option<String>,
    /// Folders to exclude from the scan (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

/// Artifact file names, resolved relative to the vault root.
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_csv_file")]
    pub csv_file: String,
    #[serde(default = "default_tree_file")]
    pub tree_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { csv_file: default_csv_file(), tree_file: default_tree_file() }
    }
}

fn default_csv_file() -> String {
    "vault_notes.csv".to_string()
}

fn default_tree_file() -> String {
    "reference_tree.md".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Fully resolved configuration: paths expanded, profile selected.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Vault to scan when no path is given on the command line.
    pub vault_root: Option<PathBuf>,
    /// Folders to exclude from the scan (expanded).
    pub excluded_folders: Vec<PathBuf>,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            active_profile: "default".to_string(),
            vault_root: None,
            excluded_folders: Vec::new(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
