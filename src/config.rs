use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_items_per_page() -> usize {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    /// Display currency for portfolio totals.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Default page size for the funds table.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fondo")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
api:
  base_url: "https://funds.example.com"
currency: "USD"
items_per_page: 25
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.api.base_url, "https://funds.example.com");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.items_per_page, 25);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.items_per_page, 10);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "currency: \"EUR\"").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_load_missing_file_fails_with_context() {
        let result = AppConfig::load_from_path("/nonexistent/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
