//! Folio
//!
//! Localization controller for a static portfolio page.
//! This library loads a per-language translation table, projects it onto a
//! document tree, persists the chosen language, and drives the page effects
//! (typing text, loading screen) that depend on it.

pub mod config;
pub mod dom;
pub mod effects;
pub mod handlers;
pub mod i18n;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FolioError, Result};

// Re-export main components for easy access
pub use dom::{Document, MemoryDocument};
pub use handlers::{PageEvent, PageHost, Session, SessionEnd};
pub use i18n::{LocalizationController, SelectOutcome, TranslationSource, TranslationTable};
pub use state::{FileStore, MemoryStore, PreferenceStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
