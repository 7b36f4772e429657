//! Page event handling
//!
//! This module contains the event types a host feeds into a page session,
//! the session loop that dispatches them together with the page timers, and
//! one-shot selection for tooling.

pub mod preference;
pub mod session;

pub use preference::select_stored_language;
pub use session::{Session, SessionEnd};

/// Events the host forwards to a running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// An element was clicked; only wired language controls react
    Click { element_id: String },
    /// Programmatic language selection
    SelectLanguage(String),
    /// The page is going away
    Close,
}

/// Navigation surface of the host page
pub trait PageHost {
    /// Reload the page; the current session ends right after
    fn reload(&mut self);
}
