use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::CUSTOM;
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/character-creator/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("character-creator").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(
            path = %path.display(),
            total_budget = config.points.total_budget,
            templates = config.templates.len(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The budget is not negative
    /// - Every cost weight is positive
    /// - Template classes are non-empty, unique and not the "Custom" entry
    /// - Template stats are non-negative
    /// - Every selectable template, built-in or configured, fits the budget
    pub fn validate(&self) -> Result<(), ConfigError> {
        let budget = self.points.total_budget;
        if budget < 0 {
            return Err(validation(format!("Total budget must not be negative, got {}", budget)));
        }

        if let Some((stat, weight)) = self.points.weights.iter().find(|&(_, &w)| w <= 0) {
            return Err(validation(format!(
                "Cost weight for '{}' must be positive, got {}",
                stat, weight
            )));
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            let class = template.char_class.as_str();
            if class.trim().is_empty() {
                return Err(validation(format!(
                    "Template '{}' has an empty class",
                    template.name
                )));
            }
            if class == CUSTOM {
                return Err(validation(format!("Template class '{}' is reserved", CUSTOM)));
            }
            if !seen.insert(class) {
                return Err(validation(format!("Duplicate template class '{}'", class)));
            }
            if let Some((stat, value)) = template.stats.iter().find(|&(_, &v)| v < 0) {
                return Err(validation(format!(
                    "Template '{}' has negative stat '{}' ({})",
                    class, stat, value
                )));
            }
        }

        let rules = self.rules();
        // Built-in templates must fit a reduced budget too.
        for template in self.catalog().list_all() {
            let cost = rules.cost(template.character());
            if cost > budget {
                return Err(validation(format!(
                    "Template '{}' costs {} points, budget is {}",
                    template.char_class(),
                    cost,
                    budget
                )));
            }
        }

        Ok(())
    }
}

fn validation(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("character-creator/config.toml"));
    }

    #[test]
    fn negative_budget_fails() {
        let mut config = Config::default();
        config.points.total_budget = -1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn zero_weight_fails() {
        let mut config = Config::default();
        config.points.weights.insert("Power".to_string(), 0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Cost weight for 'Power'"));
    }

    #[test]
    fn reduced_budget_must_fit_builtin_templates() {
        let mut config = Config::default();
        config.points.total_budget = 9;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Template 'Warrior' costs 10 points"));
    }
}
