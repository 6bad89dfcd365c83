use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::quiz::{BlankPolicy, GeneratorConfig};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_QUESTIONS: usize = 5;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub bind_addr: Option<String>,
    pub default_questions: Option<usize>,
    pub default_timer: Option<u32>,
    pub max_upload_mb: Option<usize>,
    pub blank_all_occurrences: Option<bool>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("docquiz"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file with owner-only permissions (600)
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Config path has no parent directory"))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, &content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)
                .with_context(|| "Failed to set config file permissions")?;
        }

        Ok(())
    }

    /// Address the web server listens on, `DOCQUIZ_ADDR` taking precedence
    pub fn get_bind_addr(&self) -> String {
        std::env::var("DOCQUIZ_ADDR")
            .ok()
            .filter(|a| !a.is_empty())
            .or_else(|| self.bind_addr.clone())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn get_default_questions(&self) -> usize {
        self.default_questions.unwrap_or(DEFAULT_QUESTIONS)
    }

    pub fn get_default_timer(&self) -> u32 {
        self.default_timer.unwrap_or(0)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB)
            .saturating_mul(1024 * 1024)
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        let blank_policy = if self.blank_all_occurrences.unwrap_or(false) {
            BlankPolicy::AllOccurrences
        } else {
            BlankPolicy::FirstOccurrence
        };

        GeneratorConfig {
            blank_policy,
            ..GeneratorConfig::default()
        }
    }
}
