//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};
use strum::{Display, EnumIter};

use mapgen_core::{MapGenerator, TileKind};

use crate::theme::Theme;

/// Glyph drawn on connectors that have not been opened
pub const CONNECTOR_GLYPH: char = ':';

/// How map cells are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum MapMode {
    /// Colors by tile kind
    #[default]
    Terrain,
    /// Colors by region, showing how regions merge
    Regions,
}

impl MapMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Terrain => Self::Regions,
            Self::Regions => Self::Terrain,
        }
    }
}

/// Widget for rendering the map being generated
pub struct MapWidget<'a> {
    generator: &'a MapGenerator,
    theme: &'a Theme,
    mode: MapMode,
    /// Map cell drawn at the top-left corner of the inner area
    offset: (i32, i32),
}

impl<'a> MapWidget<'a> {
    pub fn new(generator: &'a MapGenerator, theme: &'a Theme) -> Self {
        Self {
            generator,
            theme,
            mode: MapMode::Terrain,
            offset: (0, 0),
        }
    }

    pub fn mode(mut self, mode: MapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    fn cell_display(&self, x: i32, y: i32) -> (char, Style) {
        let tile = self.generator.tile_at(x, y);

        if tile == TileKind::Stone {
            return if self.generator.is_connector(x, y) {
                (CONNECTOR_GLYPH, Style::default().fg(self.theme.map_connector))
            } else {
                (tile.symbol(), Style::default().fg(self.theme.map_stone))
            };
        }

        let region = self.generator.region_at(x, y);
        let color = match (self.mode, region) {
            (MapMode::Regions, Some(id)) => Theme::region_color(self.generator.region_color(id)),
            (MapMode::Terrain, Some(id))
                if tile == TileKind::Corridor && self.generator.active_maze() == Some(id) =>
            {
                self.theme.map_active
            }
            _ => self.theme.tile_color(tile),
        };

        (tile.symbol(), Style::default().fg(color))
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " {}x{} seed {} ({}) ",
            self.generator.width(),
            self.generator.height(),
            self.generator.seed(),
            self.mode
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let (ox, oy) = self.offset;
        let rows = self.generator.height().min(inner.height as usize);
        let cols = self.generator.width().min(inner.width as usize);
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = self.cell_display(ox + x as i32, oy + y as i32);
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
