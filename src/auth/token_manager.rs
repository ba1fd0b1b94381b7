use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::auth::credentials::Credentials;
use crate::auth::session::Session;
use crate::config::settings::Settings;
use crate::errors::{WnsError, WnsResult};
use crate::helpers::time::{now, seconds};
use crate::utils::constants::GRANT_TYPE;

/// Body returned by the login endpoint.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token_type: String,
    pub access_token: String,
    pub expires_in: i64,
}

/// Owns the credentials and the bearer token session.
///
/// The session sits behind a lock so sends may run concurrently; refreshes
/// are serialized by `refresh_lock`.
#[derive(Debug)]
pub struct TokenManager {
    credentials: Credentials,
    auth_url: String,
    scope: String,
    refresh_window: Duration,
    client: Client,
    session: RwLock<Session>,
    refresh_lock: Mutex<()>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, settings: &Settings, client: Client) -> Self {
        Self {
            credentials,
            auth_url: settings.auth_url.clone(),
            scope: settings.scope.clone(),
            refresh_window: seconds(settings.refresh_window_seconds),
            client,
            session: RwLock::new(Session::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Request a token with the client-credentials grant.
    ///
    /// `Ok(false)`: the request never completed; the session is untouched.
    /// `Err(AuthenticationRejected)`: the server refused the credentials.
    pub async fn authenticate(&self) -> WnsResult<bool> {
        let form = [
            ("grant_type", GRANT_TYPE),
            ("client_id", self.credentials.app_id()),
            ("client_secret", self.credentials.secret()),
            ("scope", self.scope.as_str()),
        ];

        let response = match self.client.post(&self.auth_url).form(&form).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %self.auth_url, error = %err, "authentication request failed");
                return Ok(false);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            error!(url = %self.auth_url, %status, "authentication was not successful");
            return Err(WnsError::AuthenticationRejected {
                status: status.as_u16(),
            });
        }

        let issued_at = now();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "failed to read authentication response");
                return Ok(false);
            }
        };
        let auth: AuthResponse = serde_json::from_str(&body).map_err(|err| {
            error!(error = %err, "authentication response is not valid json");
            WnsError::MalformedAuthResponse(err.to_string())
        })?;
        debug!(token_type = %auth.token_type, expires_in = auth.expires_in, "token received");

        let session = Session::authenticated(auth.access_token, issued_at, auth.expires_in);
        *self.session.write().await = session;
        info!("authenticated");
        Ok(true)
    }

    /// Re-authenticate if the token is about to expire.
    pub async fn ensure_fresh(&self) -> WnsResult<()> {
        self.ensure_fresh_at(now()).await
    }

    pub async fn ensure_fresh_at(&self, at: DateTime<Utc>) -> WnsResult<()> {
        if !self.needs_refresh_at(at).await? {
            return Ok(());
        }

        let _guard = self.refresh_lock.lock().await;
        // another send may have refreshed while we waited
        if !self.needs_refresh_at(at).await? {
            return Ok(());
        }

        if self.authenticate().await? {
            info!("re-authenticated");
            Ok(())
        } else {
            error!("re-authentication failed");
            Err(WnsError::ReauthenticationFailed)
        }
    }

    async fn needs_refresh_at(&self, at: DateTime<Utc>) -> WnsResult<bool> {
        let session = self.session.read().await;
        if !session.is_authenticated() {
            return Err(WnsError::NotAuthenticated);
        }
        Ok(session.needs_refresh_at(at, self.refresh_window))
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Current bearer token, refused once it has expired.
    pub async fn bearer(&self) -> WnsResult<String> {
        self.bearer_at(now()).await
    }

    pub async fn bearer_at(&self, at: DateTime<Utc>) -> WnsResult<String> {
        let session = self.session.read().await;
        if !session.is_authenticated() {
            return Err(WnsError::NotAuthenticated);
        }
        if !session.is_valid_at(at) {
            warn!(expires_at = %session.expires_at(), "bearer token has expired");
            return Err(WnsError::TokenExpired);
        }
        Ok(session.token().to_owned())
    }

    /// Snapshot of the session state.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }
}
