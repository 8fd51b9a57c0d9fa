use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file, or fall back to built-in defaults when none
    /// exists.
    ///
    /// A crawler has to work on a bare machine: only a config file that
    /// exists but cannot be read or parsed is an error. Requesting a named
    /// profile without a config file is an error too, since there is nothing
    /// to look it up in.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            if let Some(name) = profile_override {
                return Err(ConfigError::ProfileNotFound(name.to_string()));
            }
            return Ok(ResolvedConfig::default());
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or_else(|| cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        // An explicitly named profile must exist; the implicit default may
        // be absent (empty profile, defaults apply).
        let prof = match cf.profiles.get(&active) {
            Some(p) => p.clone(),
            None if profile_override.is_none() && cf.profile.is_none() => {
                Profile::default()
            }
            None => return Err(ConfigError::ProfileNotFound(active)),
        };

        Self::resolve_profile(&active, &prof, &cf)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        cf: &ConfigFile,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_root = match &prof.vault_root {
            Some(raw) => Some(expand_path(raw)?),
            None => None,
        };

        let sub = |s: &str| match &vault_root {
            Some(root) => s.replace("{{vault_root}}", &root.to_string_lossy()),
            None => s.to_string(),
        };

        let excluded_folders = prof
            .excluded_folders
            .iter()
            .map(|folder| expand_path(&sub(folder)))
            .collect::<Result<Vec<_>, _>>()?;

        // Resolve log file path if present
        let logging = if let Some(file) = &cf.logging.file {
            let expanded = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expanded),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            vault_root,
            excluded_folders,
            output: cf.output.clone(),
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdscan").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdscan").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
