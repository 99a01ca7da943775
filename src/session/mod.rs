//! Session management for the GHIN API
//!
//! This module owns the authentication state and the primitive request
//! operations (authenticate, GET, POST) that attach it.

pub mod client;
pub mod state;

pub use client::{LOGIN_PATH, LOGOUT_PATH, SUCCESSFUL_STATUS_CODES, SessionClient};
pub use state::Session;
