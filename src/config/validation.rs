//! Configuration validation module
//!
//! This module provides validation functions for configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{FolioError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_page_config(&settings.page)?;
    validate_typing_config(&settings.typing)?;
    validate_loader_config(&settings.loader)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(FolioError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(FolioError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(FolioError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    for (i, lang) in config.supported_languages.iter().enumerate() {
        if config.supported_languages[..i].contains(lang) {
            return Err(FolioError::Config(
                format!("Duplicate supported language: {}", lang)
            ));
        }
    }

    if config.resource.is_empty() {
        return Err(FolioError::Config(
            "Translation resource location is required".to_string()
        ));
    }

    if config.resource.starts_with("http://") || config.resource.starts_with("https://") {
        url::Url::parse(&config.resource)?;
    }

    if config.preference_key.is_empty() {
        return Err(FolioError::Config(
            "Preference key is required".to_string()
        ));
    }

    if config.fetch_timeout_seconds == 0 {
        return Err(FolioError::Config(
            "Fetch timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate the document contract
fn validate_page_config(config: &super::PageConfig) -> Result<()> {
    if config.key_attribute.is_empty() {
        return Err(FolioError::Config(
            "Translation key attribute is required".to_string()
        ));
    }

    if config.roles_key.is_empty() {
        return Err(FolioError::Config(
            "Roles key is required".to_string()
        ));
    }

    Ok(())
}

/// Validate typing animation timings
fn validate_typing_config(config: &super::TypingConfig) -> Result<()> {
    if config.type_delay_ms == 0 || config.delete_delay_ms == 0 {
        return Err(FolioError::Config(
            "Typing delays must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate loading screen simulation
fn validate_loader_config(config: &super::LoaderConfig) -> Result<()> {
    if config.max_increment == 0 || config.max_increment > 100 {
        return Err(FolioError::Config(
            format!("Loader increment must be within 1..=100, got {}", config.max_increment)
        ));
    }

    if config.min_step_delay_ms > config.max_step_delay_ms {
        return Err(FolioError::Config(
            "Loader min step delay cannot be greater than max step delay".to_string()
        ));
    }

    Ok(())
}

/// Validate preference storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(FolioError::Config(
            "Preference storage path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FolioError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FolioError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
