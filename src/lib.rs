//! # WNS Push Library
//!
//! Client for the Windows Push Notification Service. Authenticates with the
//! OAuth2 client-credentials flow, renders tile, badge and toast XML payloads
//! and posts them to per-device channel uris.
//!
//! Modules:
//! - `config` — client configuration (YAML) and validation
//! - `templates` — tile, badge and toast renderers plus the toast registries
//! - `auth` — credentials, bearer token session and its refresh
//! - `delivery` — authenticated delivery of rendered payloads
//! - `errors` — error type and its recoverable / fatal classification

pub mod auth;
pub mod config;
pub mod delivery;
pub mod errors;
pub mod helpers;
pub mod templates;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::auth::{Credentials, Session, TokenManager};
pub use crate::config::settings::{ClientConfig, Settings};
pub use crate::delivery::WnsClient;
pub use crate::errors::{ErrorKind, WnsError, WnsResult};
pub use crate::templates::{Badge, Notification, NotificationKind, Tile, Toast};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
