//! Utility functions and helpers
//!
//! This module contains utility functions used throughout the crate.

pub mod date;
pub mod version;

pub use date::{PLAYED_AT_FORMAT, played_at_string, today};
pub use version::{VERSION, get_version, user_agent};
