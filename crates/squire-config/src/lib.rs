//! # squire-config
//!
//! Configuration system for the Squire pilot (`squire.toml`): schema with
//! serde defaults, env-var overrides, and startup validation.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ConfigWarning, SquireConfig, WarningSeverity};
