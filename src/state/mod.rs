//! State management module
//!
//! This module provides persistence for user preferences that outlive a
//! page session.

pub mod storage;

pub use storage::{PreferenceStore, MemoryStore, FileStore};
