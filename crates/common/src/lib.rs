//! Shared utilities, configuration, and error handling for svcacct
//!
//! This crate provides common functionality used across the svcacct workspace:
//! - Configuration management following 12-factor principles
//! - Go-style duration parsing for time-to-live values
//! - Error types and handling

pub mod config;
pub mod duration;
pub mod error;

pub use config::Config;
pub use duration::parse_duration;
pub use error::{Error, Result};
