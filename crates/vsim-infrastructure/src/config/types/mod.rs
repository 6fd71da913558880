//! Configuration types module

pub mod app;
pub mod logging;
pub mod search;

// Re-export main types
pub use app::*;
pub use logging::*;
pub use search::*;
pub use vsim_providers::executor::DatabaseConfig;
