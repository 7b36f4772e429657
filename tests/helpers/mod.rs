//! Test helpers module
//!
//! Shared fixtures for the integration tests: a translation table, a
//! portfolio page document, a host that records reloads, and a tracing
//! layer that captures warnings.

#![allow(dead_code)]

pub mod fixtures;
pub mod log_capture;

pub use fixtures::*;
