//! Configuration management for the GHIN client
//!
//! This module handles loading and managing configuration settings
//! for the library and the `ghin` command-line tool.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use settings::Settings;
