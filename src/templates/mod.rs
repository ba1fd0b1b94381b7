//! XML payload builders for the three WNS notification kinds.

use std::fmt;

use crate::errors::WnsResult;

pub mod badge;
pub mod catalog;
pub mod tile;
pub mod toast;

pub use badge::Badge;
pub use tile::Tile;
pub use toast::Toast;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Tile,
    Badge,
    Toast,
}

impl NotificationKind {
    /// Value of the `X-WNS-Type` header.
    pub fn wns_type(&self) -> &'static str {
        match self {
            NotificationKind::Tile => "wns/tile",
            NotificationKind::Badge => "wns/badge",
            NotificationKind::Toast => "wns/toast",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Tile => "tile",
            NotificationKind::Badge => "badge",
            NotificationKind::Toast => "toast",
        };
        f.write_str(name)
    }
}

/// A payload that can be rendered and handed to the dispatcher.
///
/// `output()` is empty until `build()` succeeds.
pub trait Notification {
    fn kind(&self) -> NotificationKind;

    fn build(&mut self) -> WnsResult<()>;

    fn output(&self) -> &str;

    fn is_built(&self) -> bool {
        !self.output().is_empty()
    }
}
