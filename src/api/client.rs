//! # GHIN Client
//!
//! The public entry point. [`GhinClient`] wraps a [`SessionClient`] and
//! exposes one method per service operation; the operations themselves live
//! next to their endpoints in the `scores`, `courses` and `golfers` modules.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use ghin_client::{GhinClient, Settings};
//! use ghin_client::types::SearchCoursesInput;
//!
//! # tokio_test::block_on(async {
//! let client = GhinClient::new(&Settings::default())?;
//! client.login("golfer@example.com", "secret").await?;
//!
//! let courses = client
//!     .search_courses(SearchCoursesInput::new().with_name("Pebble Beach"))
//!     .await?;
//! println!("found {} courses", courses.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # }).unwrap();
//! ```
//!
//! ## Sharing
//!
//! `GhinClient` is `Send + Sync`; put it in an `Arc` to use it from several
//! tasks. Login swaps the whole session at once, so concurrent requests see
//! either the old token or the new one.

use crate::{
    Error, Result,
    config::Settings,
    session::SessionClient,
    transport::{ReqwestTransport, Transport},
    types::User,
};
use std::sync::Arc;

/// Client for the GHIN handicap service
#[derive(Debug)]
pub struct GhinClient<T: Transport = ReqwestTransport> {
    session: SessionClient<T>,
}

impl GhinClient<ReqwestTransport> {
    /// Creates an unauthenticated client from settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            session: SessionClient::from_settings(settings)?,
        })
    }
}

impl<T: Transport> GhinClient<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self> {
        Ok(Self {
            session: SessionClient::new(base_url, transport)?,
        })
    }

    /// The underlying session client
    pub fn session(&self) -> &SessionClient<T> {
        &self.session
    }

    /// Logs in and makes the returned user the active identity.
    ///
    /// On failure the previous identity, if any, stays active.
    pub async fn login(&self, email: &str, password: &str) -> Result<Arc<User>> {
        self.session.authenticate(email, password).await
    }

    /// Logs out. The client is unauthenticated afterwards even if the
    /// service rejects the call.
    pub async fn logout(&self) -> Result<()> {
        self.session.logout().await
    }

    /// The active identity, if logged in
    pub async fn current_user(&self) -> Option<Arc<User>> {
        self.session.user().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.session().await.is_some()
    }

    /// The active identity, or [`Error::UserNotLoggedIn`] naming `action`
    pub(crate) async fn require_user(&self, action: &str) -> Result<Arc<User>> {
        self.current_user()
            .await
            .ok_or_else(|| Error::not_logged_in(format!("cannot {} without user login", action)))
    }
}
