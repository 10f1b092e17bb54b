//! Help overlay widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use mapgen_core::TileKind;

use crate::theme::Theme;

use super::map::CONNECTOR_GLYPH;

const KEYS: &str = r#"Keys
────
  space    Pause / resume
  + -      Steps per tick up / down
  f        Finish the current dungeon
  n        New dungeon with a fresh seed
  r        Toggle terrain / region colors
  arrows   Scroll (shift: faster)
  ?        This help
  q  Esc   Quit"#;

/// Overlay listing key bindings and map glyphs
pub struct HelpWidget<'a> {
    theme: &'a Theme,
}

impl<'a> HelpWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn legend() -> String {
        let mut text = String::from("\n\nGlyphs\n──────\n");
        for (tile, name) in [
            (TileKind::Room, "room floor"),
            (TileKind::Corridor, "corridor"),
            (TileKind::Door, "door"),
        ] {
            text.push_str(&format!("  {}        {}\n", tile.symbol(), name));
        }
        text.push_str(&format!("  {}        unopened connector\n", CONNECTOR_GLYPH));
        text.push_str("\nPress any key to close");
        text
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        Paragraph::new(format!("{KEYS}{}", Self::legend()))
            .block(block)
            .style(Style::default().fg(self.theme.text))
            .render(area, buf);
    }
}
