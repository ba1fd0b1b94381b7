use tracing::error;

use crate::errors::{WnsError, WnsResult};
use crate::templates::{Notification, NotificationKind, XML_DECLARATION};

/// Value used when the caller clears the badge.
pub const BADGE_NONE: &str = "none";

#[derive(Debug, Clone, Default)]
pub struct Badge {
    field: String,
    output: String,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the badge value; an empty value becomes `none`.
    pub fn set_field(&mut self, value: &str) {
        self.field = if value.is_empty() {
            BADGE_NONE.to_owned()
        } else {
            value.to_owned()
        };
    }
}

impl Notification for Badge {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Badge
    }

    fn build(&mut self) -> WnsResult<()> {
        if self.field.is_empty() {
            error!("badge field was not set");
            return Err(WnsError::MissingField("badge"));
        }
        self.output = format!(r#"{XML_DECLARATION}<badge value="{}" />"#, self.field);
        Ok(())
    }

    fn output(&self) -> &str {
        &self.output
    }
}
