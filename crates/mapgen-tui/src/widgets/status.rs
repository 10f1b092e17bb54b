//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use mapgen_core::{GenerationPhase, GenerationStats};

use crate::theme::Theme;

/// Widget for rendering the generation status lines
pub struct StatusWidget<'a> {
    phase: GenerationPhase,
    stats: GenerationStats,
    steps_per_tick: usize,
    paused: bool,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(phase: GenerationPhase, stats: GenerationStats, theme: &'a Theme) -> Self {
        Self {
            phase,
            stats,
            steps_per_tick: 1,
            paused: false,
            theme,
        }
    }

    pub fn speed(mut self, steps_per_tick: usize, paused: bool) -> Self {
        self.steps_per_tick = steps_per_tick;
        self.paused = paused;
        self
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.stats;

        // Line 1: phase, counters
        let mut line1 = vec![
            Span::styled(
                format!("{:<18}", self.phase.to_string()),
                Style::default().fg(self.theme.accent).bold(),
            ),
            Span::styled(
                format!(
                    "Rooms:{} Mazes:{} Regions:{} Connectors:{} Doors:{} Unjoined:{} Pruned:{}",
                    s.rooms,
                    s.mazes,
                    s.live_regions,
                    s.connectors,
                    s.doors,
                    s.unconnected_rooms,
                    s.dead_ends_removed
                ),
                Style::default().fg(self.theme.text),
            ),
        ];
        if self.paused {
            line1.push(Span::styled(
                " PAUSED",
                Style::default().fg(self.theme.warning).bold(),
            ));
        }

        // Line 2: step counter, speed, keys
        let line2 = format!(
            "Step:{} Speed:{}/tick  [space] pause [+/-] speed [f] finish [n] new [r] regions [?] help [q] quit",
            s.steps, self.steps_per_tick
        );

        buf.set_line(area.x, area.y, &Line::from(line1), area.width);
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                &line2,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
