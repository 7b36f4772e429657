//! Internationalization module
//!
//! This module handles language switching for the portfolio page.
//! It provides translation loading, nested key lookup, and the controller
//! that projects translations onto the document.

pub mod controller;
pub mod loader;
pub mod table;

// Re-export commonly used i18n components
pub use controller::{ApplyReport, ControllerState, LanguageControl, LocalizationController, SelectOutcome};
pub use loader::{load_table, TranslationSource};
pub use table::{CoverageGap, LanguageStats, TableReport, TranslationStats, TranslationTable};
