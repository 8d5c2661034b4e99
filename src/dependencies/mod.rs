//! This module defines traits for external dependencies (the platform API and the configuration
//! file) to make them easier to mock and substitute in tests. By abstracting external services
//! behind traits, commands can be decoupled and dependency-injected.
pub mod api;
pub mod config;

pub use api::*;
pub use config::*;
