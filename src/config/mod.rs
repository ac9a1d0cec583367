use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_color_output")]
    pub color_output: bool,
    #[serde(default)]
    pub confirm_delete: bool,
    #[serde(default = "default_export_format")]
    pub default_export_format: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_color_output() -> bool {
    true
}
fn default_export_format() -> String {
    "csv".to_string()
}
fn default_prompt() -> String {
    "workpulse> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color_output: default_color_output(),
            confirm_delete: false,
            default_export_format: default_export_format(),
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".workpulse")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workpulse.conf")
    }

    /// Config file to use: the `--config` override if given, else the default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        // An empty file is a valid "all defaults" config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))?;

        let mut content = String::from(
            "# WorkPulse configuration\n\
             #   log_level             → error | warn | info | debug | trace\n\
             #   default_export_format → csv | json\n",
        );
        content.push_str(&yaml);

        fs::write(path, content)
            .map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))
    }

    /// Semantic problems in an otherwise well-formed config.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace" | "off"
        ) {
            out.push(format!("log_level '{}' is not a known level", self.log_level));
        }

        if crate::export::ExportFormat::from_name(&self.default_export_format).is_none() {
            out.push(format!(
                "default_export_format '{}' is not supported (use csv or json)",
                self.default_export_format
            ));
        }

        out
    }
}
