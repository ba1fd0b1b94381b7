use tracing::error;

use crate::errors::{WnsError, WnsResult};
use crate::templates::{Notification, NotificationKind};

/// Anything this short cannot be a tile document.
const MIN_TILE_LEN: usize = 5;

/// Tile notification. The caller supplies the complete tile XML.
#[derive(Debug, Clone, Default)]
pub struct Tile {
    tile: String,
    output: String,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tile(&mut self, xml: &str) -> WnsResult<()> {
        if xml.len() <= MIN_TILE_LEN {
            error!(len = xml.len(), "tile xml is empty");
            return Err(WnsError::EmptyPayload);
        }
        self.tile = xml.to_owned();
        Ok(())
    }
}

impl Notification for Tile {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Tile
    }

    fn build(&mut self) -> WnsResult<()> {
        if self.tile.is_empty() {
            error!("tile xml is empty");
            return Err(WnsError::EmptyPayload);
        }
        self.output = self.tile.clone();
        Ok(())
    }

    fn output(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_tile() {
        let mut tile = Tile::new();
        assert!(matches!(tile.set_tile(""), Err(WnsError::EmptyPayload)));
        assert!(matches!(tile.set_tile("<t/>"), Err(WnsError::EmptyPayload)));
        assert!(matches!(tile.build(), Err(WnsError::EmptyPayload)));
        assert!(!tile.is_built());
    }

    #[test]
    fn copies_tile_verbatim() {
        let mut tile = Tile::new();
        tile.set_tile("<tile/>").unwrap();
        assert!(!tile.is_built());
        tile.build().unwrap();
        assert_eq!(tile.output(), "<tile/>");
        assert!(tile.is_built());
    }
}
