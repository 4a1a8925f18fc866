//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{default_config_path, load_config, load_config_from_str, resolve_config};
pub use model::Config;
