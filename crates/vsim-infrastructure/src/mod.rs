// Clippy allows for nested configuration checks
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, environment |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |
//! | [`health`] | Executor health checks |
//! | [`bootstrap`] | Explicit composition of executor and services |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{Services, build_services};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
