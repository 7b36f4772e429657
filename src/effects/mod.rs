//! Page effects driven by timers
//!
//! The typing-text animation and the loading screen. Both write to the
//! document through the [`crate::dom::Document`] seam.

pub mod loading;
pub mod typing;

pub use loading::LoadingScreen;
pub use typing::{TypingAnimator, TypingFrame};
