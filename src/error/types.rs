//! Error type definitions
//!
//! Defines the error taxonomy shared by the transport, session and API layers.

use thiserror::Error;

/// Main error type for the GHIN client
#[derive(Error, Debug)]
pub enum Error {
    /// Login failed: transport failure, rejected credentials or an undecodable reply
    #[error("Authentication failed: {reason}")]
    Authentication {
        reason: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// An operation that needs an identity was called before login
    #[error("User is not logged in: {0:?}")]
    UserNotLoggedIn(String),

    /// The service answered with a status outside the success whitelist
    #[error("Non-success status returned from request {path}: {status}")]
    Request { path: String, status: u16 },

    /// The request payload could not be encoded
    #[error("Problem serializing request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body did not match the expected shape
    #[error("Problem deserializing response at `{path}`: {message}")]
    Deserialization { path: String, message: String },

    /// Transport-level failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint path could not be joined onto the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Caller input outside a documented bound
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Operation-level context around a lower-layer failure
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an authentication error wrapping the failure that caused it
    pub fn authentication(reason: impl Into<String>, source: Error) -> Self {
        Self::Authentication {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a user-not-logged-in error
    pub fn not_logged_in(msg: impl Into<String>) -> Self {
        Self::UserNotLoggedIn(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a deserialization error from a path-tracking serde failure
    pub fn deserialization(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Deserialization {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    }

    /// Wrap this error with operation context
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any [`Error::Context`] wrappers and
    /// [`Error::Authentication`] causes
    pub fn root(&self) -> &Error {
        match self {
            Self::Context { source, .. } => source.root(),
            Self::Authentication {
                source: Some(source),
                ..
            } => source.root(),
            other => other,
        }
    }

    /// HTTP status for [`Error::Request`] failures, looking through wrappers
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
