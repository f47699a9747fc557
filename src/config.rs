use crate::error::{AppError, Result};
use crate::output::OutputFormat;
use firstapp_common::StyleSheet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const STYLESHEET_ENV: &str = "FIRSTAPP_STYLESHEET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub stylesheet: StyleSheet,
    pub default_format: OutputFormat,
    pub pretty: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルが無ければデフォルト設定
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", path.display());
            Ok(config)
        } else {
            log::debug!("設定ファイルなし、デフォルトを使用: {}", path.display());
            Ok(Self::default())
        }
    }

    /// 読み込みに失敗したら警告してデフォルト設定
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                log::warn!("{}。デフォルト設定を使用します", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("設定ファイルを読み込めません ({}): {}。デフォルト設定を使用します", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(AppError::HomeNotFound)?;
        Ok(home.join(".config").join("firstapp").join("config.json"))
    }

    /// 環境変数を優先
    pub fn stylesheet(&self) -> StyleSheet {
        match std::env::var(STYLESHEET_ENV) {
            Ok(name) if !name.trim().is_empty() => StyleSheet::new(name),
            _ => self.stylesheet.clone(),
        }
    }

    pub fn set_stylesheet(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Config("スタイルシート名が空です".into()));
        }
        self.stylesheet = StyleSheet::new(name);
        Ok(())
    }

    pub fn set_format(&mut self, format: &str) -> Result<()> {
        self.default_format = format.parse()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stylesheet.as_str(), "App.css");
        assert_eq!(config.default_format, OutputFormat::Html);
        assert!(!config.pretty);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert!(config.pretty);
        assert_eq!(config.stylesheet.as_str(), "App.css");
    }

    #[test]
    fn test_set_stylesheet_rejects_empty() {
        let mut config = Config::default();
        assert!(matches!(config.set_stylesheet("   "), Err(AppError::Config(_))));
        config.set_stylesheet(" site.css ").unwrap();
        assert_eq!(config.stylesheet.as_str(), "site.css");
    }

    /// 環境変数のスタイルシート指定（空白のみは無視）
    #[test]
    fn test_stylesheet_env_override() {
        let mut config = Config::default();
        config.set_stylesheet("configured.css").unwrap();

        std::env::set_var(STYLESHEET_ENV, "env.css");
        assert_eq!(config.stylesheet().as_str(), "env.css");

        std::env::set_var(STYLESHEET_ENV, "   ");
        assert_eq!(config.stylesheet().as_str(), "configured.css");

        std::env::remove_var(STYLESHEET_ENV);
        assert_eq!(config.stylesheet().as_str(), "configured.css");
    }

    #[test]
    fn test_set_format() {
        let mut config = Config::default();
        config.set_format("json").unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(config.set_format("xml").is_err());
        assert_eq!(config.default_format, OutputFormat::Json);
    }
}
