//! # Session Client
//!
//! Owns the base endpoint and the session token, and provides the three
//! primitives everything else is built on: [`SessionClient::authenticate`],
//! [`SessionClient::get`] and [`SessionClient::post`].
//!
//! ## Request shape
//!
//! Every request carries `Content-Type: application/json` and
//! `Accept: application/json`. `Authorization: <token>` is added only while a
//! session is installed; the login request itself never carries it.
//!
//! ## Status handling
//!
//! Only `200` and `201` count as success. Anything else becomes
//! [`Error::Request`] with the request path and status. There are no retries.

use crate::{
    Error, Result,
    config::Settings,
    session::Session,
    transport::{Method, ReqwestTransport, Transport, TransportRequest},
    types::User,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

/// Login endpoint
pub const LOGIN_PATH: &str = "golfer_login.json";

/// Logout endpoint
pub const LOGOUT_PATH: &str = "users/logout.json";

/// Status codes treated as success
pub const SUCCESSFUL_STATUS_CODES: [u16; 2] = [200, 201];

/// Placeholder the login endpoint expects in its `token` fields
const LOGIN_PLACEHOLDER_TOKEN: &str = "someValue";

#[derive(Serialize)]
struct LoginRequest<'a> {
    user: LoginCredentials<'a>,
    token: &'a str,
    user_token: &'a str,
}

#[derive(Serialize)]
struct LoginCredentials<'a> {
    email: &'a str,
    password: &'a str,
    remember_me: bool,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    golfer_user: Option<User>,
}

/// Low-level client bound to one base endpoint and one session
#[derive(Debug)]
pub struct SessionClient<T: Transport = ReqwestTransport> {
    /// Base endpoint; always ends in `/`
    base_url: Url,
    /// Transport used for every request
    transport: T,
    /// Installed session, replaced whole on login
    session: RwLock<Option<Arc<Session>>>,
}

impl SessionClient<ReqwestTransport> {
    /// Creates a session client over reqwest from validated settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let transport = ReqwestTransport::new(&settings.api)?;
        Self::new(&settings.api.base_url, transport)
    }
}

impl<T: Transport> SessionClient<T> {
    /// Creates an unauthenticated session client.
    ///
    /// A missing trailing slash on `base_url` is added so relative paths
    /// join underneath it.
    pub fn new(base_url: &str, transport: T) -> Result<Self> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            base_url: Url::parse(&base)?,
            transport,
            session: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Snapshot of the installed session
    pub async fn session(&self) -> Option<Arc<Session>> {
        self.session.read().await.clone()
    }

    /// Identity of the installed session
    pub async fn user(&self) -> Option<Arc<User>> {
        self.session().await.map(|s| Arc::clone(s.user()))
    }

    /// Logs in and installs the resulting session.
    ///
    /// The previous session, if any, stays in place until the new one is
    /// fully decoded, and is kept when login fails.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`Error::Authentication`] wrapping the
    /// underlying transport, status or decode error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Arc<User>> {
        let payload = LoginRequest {
            user: LoginCredentials {
                email,
                password,
                remember_me: true,
            },
            token: LOGIN_PLACEHOLDER_TOKEN,
            user_token: LOGIN_PLACEHOLDER_TOKEN,
        };
        let body = serde_json::to_vec(&payload)
            .map_err(|e| Error::authentication("problem encoding login request", Error::Serialization(e)))?;

        let data = self
            .send(Method::Post, LOGIN_PATH, &[], Some(body), None)
            .await
            .map_err(|e| Error::authentication("login request failed", e))?;

        let response: LoginResponse = decode_body(&data)
            .map_err(|e| Error::authentication("problem decoding login response", e))?;

        let user = response.golfer_user.ok_or_else(|| Error::Authentication {
            reason: "login response did not include a golfer user".to_string(),
            source: None,
        })?;

        if user.golfer_user_token.is_empty() {
            return Err(Error::Authentication {
                reason: "login response did not include a session token".to_string(),
                source: None,
            });
        }

        let user = Arc::new(user);
        let session = Arc::new(Session::new(user.golfer_user_token.clone(), Arc::clone(&user)));
        *self.session.write().await = Some(session);

        tracing::info!("Logged in as golfer {}", user.golfer_id);
        Ok(user)
    }

    /// Ends the session.
    ///
    /// The local session is cleared before the server is told, so the client
    /// is unauthenticated afterwards even when the logout call fails.
    pub async fn logout(&self) -> Result<()> {
        let Some(session) = self.session.write().await.take() else {
            tracing::debug!("Logout requested without a session");
            return Ok(());
        };

        tracing::info!("Logging out golfer {}", session.user().golfer_id);
        self.send(
            Method::Post,
            LOGOUT_PATH,
            &[],
            Some(b"{}".to_vec()),
            Some(session.token()),
        )
        .await
        .map(|_| ())
    }

    /// GET `path` with the given query parameters and return the body.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let session = self.session().await;
        self.send(Method::Get, path, query, None, session.as_deref().map(Session::token))
            .await
    }

    /// POST a JSON `body` to `path` and return the response body.
    pub async fn post(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let session = self.session().await;
        self.send(Method::Post, path, &[], Some(body), session.as_deref().map(Session::token))
            .await
    }

    /// Absolute URL for a relative endpoint path
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
        token: Option<&str>,
    ) -> Result<Vec<u8>> {
        let url = self.endpoint(path, query)?;

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), token.to_string()));
        }

        tracing::debug!("{} {}", method.as_str(), url);
        let response = self
            .transport
            .send(TransportRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        if !SUCCESSFUL_STATUS_CODES.contains(&response.status) {
            tracing::warn!(
                "Non-success status {} returned from {}",
                response.status,
                path
            );
            return Err(Error::Request {
                path: path.to_string(),
                status: response.status,
            });
        }

        tracing::debug!(
            "{} {} returned {} bytes",
            method.as_str(),
            path,
            response.body.len()
        );
        Ok(response.body)
    }
}

/// Decode a JSON body, reporting the field path on mismatch
pub(crate) fn decode_body<R: DeserializeOwned>(data: &[u8]) -> Result<R> {
    let de = &mut serde_json::Deserializer::from_slice(data);
    serde_path_to_error::deserialize(de).map_err(Error::deserialization)
}
