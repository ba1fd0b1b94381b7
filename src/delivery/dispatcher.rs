use std::time::Duration;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, warn};

use crate::auth::{Credentials, Session, TokenManager};
use crate::config::settings::{ClientConfig, Settings};
use crate::config::validator::validate_client_config;
use crate::errors::{WnsError, WnsResult};
use crate::templates::{Badge, Notification, NotificationKind, Tile, Toast};
use crate::utils::constants::{WNS_TYPE_HEADER, XML_CONTENT_TYPE};

/// Sends rendered notifications to device channel uris.
#[derive(Debug)]
pub struct WnsClient {
    tokens: TokenManager,
    client: Client,
    min_uri_len: usize,
}

impl WnsClient {
    pub fn new(credentials: Credentials, settings: &Settings) -> WnsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|err| WnsError::HttpClient(err.to_string()))?;

        Ok(Self {
            tokens: TokenManager::new(credentials, settings, client.clone()),
            client,
            min_uri_len: settings.min_uri_len,
        })
    }

    /// Validate `cfg` and build a client from it.
    pub fn from_config(cfg: &ClientConfig) -> WnsResult<Self> {
        validate_client_config(cfg).map_err(|errors| WnsError::Config(errors.join("; ")))?;
        Self::new(Credentials::from(&cfg.credentials), &cfg.settings)
    }

    pub async fn authenticate(&self) -> WnsResult<bool> {
        self.tokens.authenticate().await
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    pub async fn session(&self) -> Session {
        self.tokens.session().await
    }

    pub async fn send_tile(&self, uri: &str, tile: &Tile) -> WnsResult<bool> {
        self.send_notification(uri, tile).await
    }

    pub async fn send_badge(&self, uri: &str, badge: &Badge) -> WnsResult<bool> {
        self.send_notification(uri, badge).await
    }

    pub async fn send_toast(&self, uri: &str, toast: &Toast) -> WnsResult<bool> {
        self.send_notification(uri, toast).await
    }

    /// Check a built notification and channel uri, then deliver it.
    /// Neither check touches the network.
    pub async fn send_notification<N: Notification>(
        &self,
        uri: &str,
        notification: &N,
    ) -> WnsResult<bool> {
        let kind = notification.kind();
        if !notification.is_built() {
            error!(%kind, "notification must be built before sending");
            return Err(WnsError::NotBuilt(kind));
        }
        if uri.len() < self.min_uri_len {
            error!(%kind, len = uri.len(), min = self.min_uri_len, "channel uri isn't long enough");
            return Err(WnsError::UriTooShort {
                len: uri.len(),
                min: self.min_uri_len,
            });
        }
        self.send(uri, kind, notification.output()).await
    }

    /// POST `payload` to `uri`.
    ///
    /// `Ok(true)` only for a 200 response. Transport failures and other
    /// statuses are logged and reported as `Ok(false)`.
    pub async fn send(&self, uri: &str, kind: NotificationKind, payload: &str) -> WnsResult<bool> {
        if !self.tokens.is_authenticated().await {
            error!("not authenticated, run authenticate() first");
            return Err(WnsError::NotAuthenticated);
        }
        self.tokens.ensure_fresh().await?;
        let token = self.tokens.bearer().await?;

        debug!(%kind, uri, "sending notification");
        let response = self
            .client
            .post(uri)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .header(WNS_TYPE_HEADER, kind.wns_type())
            .body(payload.to_owned())
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(%kind, uri, error = %err, "failed to run send request");
                return Ok(false);
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            info!(%kind, "notification delivered");
            return Ok(true);
        }

        let headers = response.headers().clone();
        let body = response.text().await.unwrap_or_default();
        error!(
            %kind,
            %status,
            headers = ?headers,
            body = %body,
            "notification was not accepted"
        );
        Ok(false)
    }
}
