//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub page: PageConfig,
    pub typing: TypingConfig,
    pub loader: LoaderConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    /// File path or `http(s)://` URL of the translation table
    pub resource: String,
    pub preference_key: String,
    pub fetch_timeout_seconds: u64,
}

/// Document contract: which attributes, ids and classes the controller touches
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageConfig {
    pub key_attribute: String,
    pub control_id_prefix: String,
    pub active_class: String,
    pub contact_form_id: String,
    pub typing_class: String,
    pub loaded_class: String,
    pub roles_key: String,
    pub refresh_delay_ms: u64,
    pub reload_delay_ms: u64,
    pub loaded_delay_ms: u64,
}

/// Typing-text animation timings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypingConfig {
    pub start_delay_ms: u64,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub hold_delay_ms: u64,
    pub next_role_delay_ms: u64,
    pub default_roles: Vec<String>,
}

/// Loading screen simulation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    pub screen_id: String,
    pub percentage_class: String,
    pub hidden_class: String,
    pub start_delay_ms: u64,
    pub min_step_delay_ms: u64,
    pub max_step_delay_ms: u64,
    pub complete_delay_ms: u64,
    pub max_increment: u8,
}

/// Preference storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from defaults, an optional `folio.toml` and `FOLIO__*` environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("folio")
    }

    /// Load settings with an explicit configuration file stem
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .with_list_parse_key("typing.default_roles")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::FolioError> {
        super::validation::validate_settings(self)
    }
}

impl I18nConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|code| code == lang)
    }
}

impl PageConfig {
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }

    pub fn loaded_delay(&self) -> Duration {
        Duration::from_millis(self.loaded_delay_ms)
    }

    /// Element id of the control selecting `lang`
    pub fn control_id(&self, lang: &str) -> String {
        format!("{}{}", self.control_id_prefix, lang)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig {
                default_language: "en".to_string(),
                supported_languages: vec!["en".to_string(), "vi".to_string()],
                resource: "languages.json".to_string(),
                preference_key: "preferredLanguage".to_string(),
                fetch_timeout_seconds: 10,
            },
            page: PageConfig {
                key_attribute: "data-lang-key".to_string(),
                control_id_prefix: "lang-".to_string(),
                active_class: "active".to_string(),
                contact_form_id: "contact-form".to_string(),
                typing_class: "typing-text".to_string(),
                loaded_class: "loaded".to_string(),
                roles_key: "hero.roles".to_string(),
                refresh_delay_ms: 500,
                reload_delay_ms: 800,
                loaded_delay_ms: 2000,
            },
            typing: TypingConfig {
                start_delay_ms: 1000,
                type_delay_ms: 100,
                delete_delay_ms: 50,
                hold_delay_ms: 2000,
                next_role_delay_ms: 500,
                default_roles: vec![
                    "Backend Developer".to_string(),
                    "Blockchain Enthusiast".to_string(),
                    "Problem Solver".to_string(),
                    "Tech Innovator".to_string(),
                ],
            },
            loader: LoaderConfig {
                screen_id: "loading-screen".to_string(),
                percentage_class: "loader-percentage".to_string(),
                hidden_class: "hidden".to_string(),
                start_delay_ms: 500,
                min_step_delay_ms: 100,
                max_step_delay_ms: 300,
                complete_delay_ms: 500,
                max_increment: 5,
            },
            storage: StorageConfig {
                path: "preferences.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
                directory: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract_matches_page() {
        let settings = Settings::default();
        assert_eq!(settings.page.control_id("vi"), "lang-vi");
        assert_eq!(settings.page.reload_delay(), Duration::from_millis(800));
        assert!(settings.i18n.is_language_supported("en"));
        assert!(!settings.i18n.is_language_supported("fr"));
    }

    #[test]
    fn test_defaults_survive_toml_round_trip() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.i18n.preference_key, "preferredLanguage");
        assert_eq!(parsed.typing.default_roles.len(), 4);
    }
}
