//! Configuration for viewport rendering and the play loop.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// The rectangular window of the infinite plane rendered to text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Top-left corner of the rendered rectangle
    pub origin: Position,
    /// Rendered width in cells
    pub width: i32,
    /// Rendered height in cells
    pub height: i32,
    /// Glyph for a cell holding a pod
    pub live_glyph: char,
    /// Glyph for an empty cell (embryos render as empty)
    pub dead_glyph: char,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            origin: Position::new(0, 0),
            width: 30,
            height: 30,
            live_glyph: '#',
            dead_glyph: ' ',
        }
    }
}

/// Driver configuration for a play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Viewport settings handed to the world
    pub viewport: ViewportConfig,
    /// Delay between cycles in milliseconds (0 for headless runs)
    pub cycle_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            cycle_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = ViewportConfig::default();
        assert_eq!(viewport.origin, Position::new(0, 0));
        assert_eq!(viewport.width, 30);
        assert_eq!(viewport.height, 30);
        assert_eq!(viewport.live_glyph, '#');
        assert_eq!(viewport.dead_glyph, ' ');
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig {
            viewport: ViewportConfig {
                origin: Position::new(88, 99),
                live_glyph: 'Y',
                dead_glyph: 'N',
                ..ViewportConfig::default()
            },
            cycle_delay_ms: 0,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.viewport.origin, Position::new(88, 99));
        assert_eq!(deserialized.viewport.live_glyph, 'Y');
        assert_eq!(deserialized.viewport.dead_glyph, 'N');
        assert_eq!(deserialized.cycle_delay_ms, 0);
    }
}
