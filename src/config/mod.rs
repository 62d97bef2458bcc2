//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (platform config dir)
//! 3. Project config (.archscope/config.toml)
//! 4. Environment variables (ARCHSCOPE_*)
//! 5. CLI arguments (highest priority)
//!
//! The resolved `Config` is built once at process start and passed by
//! reference into the components that need it.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
