use chrono::{DateTime, Duration, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Absolute expiry for a token issued at `issued_at` with a server-declared lifetime.
pub fn expiry_from(issued_at: DateTime<Utc>, expires_in_seconds: i64) -> DateTime<Utc> {
    Duration::try_seconds(expires_in_seconds)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Saturating conversion of a configured number of seconds.
pub fn seconds(value: u64) -> Duration {
    i64::try_from(value)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}
