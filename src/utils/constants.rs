//! Shared constants and invariants

pub const DEFAULT_AUTH_URL: &str = "https://login.live.com/accesstoken.srf";
pub const DEFAULT_SCOPE: &str = "notify.windows.com";
pub const GRANT_TYPE: &str = "client_credentials";

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
/// 23 hours
pub const DEFAULT_REFRESH_WINDOW_SECS: u64 = 23 * 60 * 60;
pub const DEFAULT_MIN_URI_LEN: usize = 25;

// Delivery request headers
pub const WNS_TYPE_HEADER: &str = "X-WNS-Type";
pub const XML_CONTENT_TYPE: &str = "text/xml";
