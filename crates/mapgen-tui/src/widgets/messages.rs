//! Message display widget

use log::Level;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::logger::LogLine;
use crate::theme::Theme;

/// Widget for rendering the newest log lines
pub struct MessagesWidget<'a> {
    lines: &'a [LogLine],
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(lines: &'a [LogLine], theme: &'a Theme) -> Self {
        Self { lines, theme }
    }

    fn style(&self, level: Level) -> Style {
        match level {
            Level::Error => Style::default().fg(self.theme.bad).bold(),
            Level::Warn => Style::default().fg(self.theme.warning),
            Level::Info => Style::default().fg(self.theme.text),
            Level::Debug | Level::Trace => Style::default().fg(self.theme.text_dim),
        }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let visible = block.inner(area).height as usize;

        // Newest lines at the bottom
        let skip = self.lines.len().saturating_sub(visible);
        let text: Vec<Line> = self.lines[skip..]
            .iter()
            .map(|line| Line::styled(line.text.as_str(), self.style(line.level)))
            .collect();

        Paragraph::new(text).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_newest_lines_fit() {
        let lines: Vec<LogLine> = (0..5)
            .map(|i| LogLine {
                level: Level::Info,
                text: format!("message {i}"),
            })
            .collect();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        MessagesWidget::new(&lines, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).starts_with("message 3"));
        assert!(row(&buf, 2).starts_with("message 4"));
    }

    #[test]
    fn test_errors_are_highlighted() {
        let lines = vec![LogLine {
            level: Level::Error,
            text: "no connector reaches the root".into(),
        }];
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);

        MessagesWidget::new(&lines, &theme).render(area, &mut buf);

        assert_eq!(buf[(0, 1)].fg, theme.bad);
    }

    #[test]
    fn test_empty() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);

        MessagesWidget::new(&[], &theme).render(area, &mut buf);

        assert_eq!(row(&buf, 1).trim(), "");
    }
}
