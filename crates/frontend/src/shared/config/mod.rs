use anyhow::Context;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub ui: UiSection,
    pub support: SupportSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSection {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiSection {
    /// "dark" или "light"
    pub default_theme: String,
    pub loading_text: String,
    pub currency_symbol: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SupportSection {
    pub email: String,
    pub phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSection {
                title: "Delivery Service System".to_string(),
                subtitle: String::new(),
            },
            ui: UiSection {
                default_theme: "dark".to_string(),
                loading_text: "Loading...".to_string(),
                currency_symbol: "$".to_string(),
            },
            support: SupportSection {
                email: String::new(),
                phone: String::new(),
            },
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("config.toml");

/// Parse the embedded configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(DEFAULT_CONFIG).context("embedded config.toml is invalid")?;
    Ok(config)
}

/// Load configuration, falling back to defaults when the embedded document is broken
pub fn load_config_or_default() -> AppConfig {
    match load_config() {
        Ok(config) => {
            log::info!("Using embedded configuration: {}", config.app.title);
            config
        }
        Err(err) => {
            log::error!("Failed to load configuration: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "Delivery Service System");
        assert_eq!(config.ui.default_theme, "dark");
        assert_eq!(config.ui.currency_symbol, "$");
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let parsed: Result<AppConfig, _> = toml::from_str("[app]\ntitle = 1");
        assert!(parsed.is_err());
    }
}
