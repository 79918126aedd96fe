//! Shared utilities, configuration, and error handling for AdMock Studio
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - State machine errors shared by the domain crates
//! - Input validation helpers

pub mod config;
pub mod error;
pub mod state;
pub mod validation;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use state::StateError;
pub use validation::ensure_valid;
