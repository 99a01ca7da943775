//! GHIN Client - Rust Implementation
//!
//! An async client for the GHIN golf handicap web service. It logs a golfer
//! in, keeps the session token, and exposes typed operations for posting
//! hole-by-hole scores, reading score history, and searching courses and
//! golfers.
//!
//! # Architecture
//!
//! The crate is layered bottom-up:
//! - **Transport**: a pluggable [`Transport`] trait with a reqwest-backed default
//! - **Session**: [`SessionClient`] owns the token and the GET/POST primitives
//! - **API**: [`GhinClient`] adds one typed method per service operation
//!
//! # Usage
//!
//! ## Command line
//!
//! ```bash
//! GHIN_EMAIL=golfer@example.com GHIN_PASSWORD=secret ghin search-courses --name "Pebble Beach"
//! ```
//!
//! ## Library
//!
//! ```rust,no_run
//! use ghin_client::{GhinClient, Settings};
//! use ghin_client::types::GetUserInfoInput;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GhinClient::new(&Settings::default())?;
//! let user = client.login("golfer@example.com", "secret").await?;
//! println!("logged in as {}", user.golfer_id);
//!
//! let history = client.get_user_info(GetUserInfoInput::new()).await?;
//! println!("{} scores on file", history.total_count);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;
pub mod utils;

pub use api::GhinClient;
pub use config::Settings;
pub use error::{Error, Result};
pub use session::SessionClient;
pub use transport::{ReqwestTransport, Transport};
pub use types::{CourseDetails, CourseOverview, Golfer, GolferScores, Score, User};
