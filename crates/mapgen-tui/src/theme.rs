//! Terminal color theme system
//!
//! Provides color palettes for dark and light terminal backgrounds.
//! Auto-detects via the COLORFGBG env var, or manual override with
//! MAPGEN_LIGHT_BG=1.

use ratatui::style::Color;

use mapgen_core::{Rgb, TileKind};

/// Color theme for the viewer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, key help)
    pub text_dim: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (help overlay)
    pub border_accent: Color,

    // Semantic colors
    /// Phase name in the status line
    pub accent: Color,
    /// Paused indicator
    pub warning: Color,
    /// Error-level log lines
    pub bad: Color,

    // Map terrain
    pub map_stone: Color,
    pub map_room: Color,
    pub map_corridor: Color,
    pub map_door: Color,
    /// Unopened connector cells
    pub map_connector: Color,
    /// Corridors of the maze being carved
    pub map_active: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            accent: Color::Cyan,
            warning: Color::Yellow,
            bad: Color::Red,
            map_stone: Color::Black,
            map_room: Color::White,
            map_corridor: Color::Gray,
            map_door: Color::Yellow,
            map_connector: Color::DarkGray,
            map_active: Color::LightGreen,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            accent: Color::Blue,
            warning: Color::Yellow,
            bad: Color::Red,
            map_stone: Color::White,
            map_room: Color::Black,
            map_corridor: Color::DarkGray,
            map_door: Color::Yellow,
            map_connector: Color::Gray,
            map_active: Color::Green,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Foreground for a terrain tile
    pub fn tile_color(&self, tile: TileKind) -> Color {
        match tile {
            TileKind::Stone => self.map_stone,
            TileKind::Room => self.map_room,
            TileKind::Corridor => self.map_corridor,
            TileKind::Door => self.map_door,
        }
    }

    /// Truecolor for a region's debug color
    pub fn region_color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("MAPGEN_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Format: "fg;bg" where values are color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapgen_core::RegionId;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dark_theme_text_is_white() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.map_room, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.map_room, Color::Black);
    }

    #[test]
    fn test_walkable_tiles_differ_from_stone() {
        for theme in [Theme::dark(), Theme::light()] {
            for tile in TileKind::iter().filter(|t| t.is_walkable()) {
                assert_ne!(theme.tile_color(tile), theme.map_stone, "{tile}");
            }
        }
    }

    #[test]
    fn test_region_color_is_truecolor() {
        let rgb = Rgb::for_id(RegionId(3));
        assert_eq!(Theme::region_color(rgb), Color::Rgb(rgb.r, rgb.g, rgb.b));
    }
}
