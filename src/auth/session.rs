use chrono::{DateTime, Duration, Utc};

use crate::helpers::time::expiry_from;

/// Bearer token state. Invalid until the first successful authentication.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: String,
    expires_at: DateTime<Utc>,
    valid: bool,
}

impl Session {
    pub fn authenticated(token: String, issued_at: DateTime<Utc>, expires_in_seconds: i64) -> Self {
        Self {
            token,
            expires_at: expiry_from(issued_at, expires_in_seconds),
            valid: true,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// True once authenticated; stays true after expiry so a refresh can be attempted.
    pub fn is_authenticated(&self) -> bool {
        self.valid
    }

    /// True between authentication and expiry.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.valid && now < self.expires_at
    }

    /// Coarse proactive refresh: once `now` is later than
    /// `expires_at - refresh_window` the token should be replaced.
    pub fn needs_refresh_at(&self, now: DateTime<Utc>, refresh_window: Duration) -> bool {
        now - self.expires_at > -refresh_window
    }
}
