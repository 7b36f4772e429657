//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for Folio.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{FolioError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the rolling file writer and must be held
/// until the process exits.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| FolioError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "folio.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| FolioError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a language change with its outcome
pub fn log_language_change(from: Option<&str>, to: &str, reload: bool) {
    if reload {
        info!(from = from, to = to, "Language changed, reloading page");
    } else {
        info!(from = from, to = to, "Language applied in place");
    }
}

/// Log a translation lookup miss
pub fn log_translation_miss(key: &str, language: &str) {
    warn!(key = key, language = language, "Translation key not found: {}", key);
}

/// Log a failed translation table load
pub fn log_table_failure(resource: &str, err: &FolioError) {
    error!(
        resource = resource,
        error = %err,
        "Error initializing language switcher"
    );
}

/// Log a rendering pass over the document
pub fn log_apply_pass(language: &str, updated: usize, missed: usize) {
    debug!(
        language = language,
        updated = updated,
        missed = missed,
        "Translations applied to document"
    );
}
