//! Configuration management
//!
//! Configuration is merged from defaults, a TOML file and `VSIM_`-prefixed
//! environment variables, then validated once at startup.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
