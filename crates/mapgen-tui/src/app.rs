//! Application state and main UI controller

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use mapgen_core::{GeneratorConfig, MapGenerator, MapRng};

use crate::input::{ViewerCommand, key_to_command};
use crate::logger::MessageLog;
use crate::theme::Theme;
use crate::widgets::{HelpWidget, MapMode, MapWidget, MessagesWidget, StatusWidget};

/// Fastest allowed generation speed
pub const MAX_STEPS_PER_TICK: usize = 1 << 16;

/// Log lines shown under the status line
const MESSAGE_ROWS: u16 = 6;

/// Application state
pub struct App {
    /// Dungeon being generated
    generator: MapGenerator,

    /// Parameters for the next dungeon (seed replaced on restart)
    config: GeneratorConfig,

    /// Buffered log output
    messages: MessageLog,

    /// Should quit
    should_quit: bool,

    /// Generation halted between ticks
    paused: bool,

    /// Steps taken per tick
    steps_per_tick: usize,

    map_mode: MapMode,

    show_help: bool,

    /// Top-left map cell of the viewport
    scroll: (i32, i32),

    /// Inner size of the map panel at the last render
    viewport: (u16, u16),

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    /// Create an application generating a dungeon from `config`
    pub fn new(
        generator: MapGenerator,
        config: GeneratorConfig,
        steps_per_tick: usize,
        messages: MessageLog,
        theme: Theme,
    ) -> Self {
        Self {
            generator,
            config,
            messages,
            should_quit: false,
            paused: false,
            steps_per_tick: steps_per_tick.clamp(1, MAX_STEPS_PER_TICK),
            map_mode: MapMode::default(),
            show_help: false,
            scroll: (0, 0),
            viewport: (0, 0),
            theme,
        }
    }

    pub fn generator(&self) -> &MapGenerator {
        &self.generator
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn steps_per_tick(&self) -> usize {
        self.steps_per_tick
    }

    pub fn map_mode(&self) -> MapMode {
        self.map_mode
    }

    pub fn scroll(&self) -> (i32, i32) {
        self.scroll
    }

    /// Advance generation by one tick's worth of steps
    pub fn tick(&mut self) {
        if !self.paused && !self.show_help {
            self.generator.step_n(self.steps_per_tick);
        }
    }

    /// Handle input event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Any key closes help
        if self.show_help {
            self.show_help = false;
            return;
        }

        if let Some(command) = key_to_command(key) {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Quit => self.should_quit = true,
            ViewerCommand::ToggleRegions => {
                self.map_mode = self.map_mode.toggled();
                log::debug!("map colored by {}", self.map_mode);
            }
            ViewerCommand::TogglePause => self.paused = !self.paused,
            ViewerCommand::Faster => {
                self.steps_per_tick = (self.steps_per_tick * 2).min(MAX_STEPS_PER_TICK);
            }
            ViewerCommand::Slower => self.steps_per_tick = (self.steps_per_tick / 2).max(1),
            ViewerCommand::Finish => {
                self.generator.run_to_completion();
            }
            ViewerCommand::NewSeed => self.restart(MapRng::from_entropy().seed()),
            ViewerCommand::Scroll { dx, dy } => self.scroll_by(dx, dy),
            ViewerCommand::Help => self.show_help = true,
        }
    }

    /// Throw away the current dungeon and start one with `seed`
    pub fn restart(&mut self, seed: u64) {
        self.config.seed = seed;
        self.messages.clear();
        self.generator = MapGenerator::new(
            self.config.width,
            self.config.height,
            self.config.seed,
            self.config.max_room_attempts,
        );
    }

    fn scroll_by(&mut self, dx: i32, dy: i32) {
        let max_x = (self.generator.width() as i32 - self.viewport.0 as i32).max(0);
        let max_y = (self.generator.height() as i32 - self.viewport.1 as i32).max(0);
        self.scroll = (
            (self.scroll.0 + dx).clamp(0, max_x),
            (self.scroll.1 + dy).clamp(0, max_y),
        );
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Layout: map at top, status in middle, messages at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),                // Map + border
                Constraint::Length(2),             // Status lines
                Constraint::Length(MESSAGE_ROWS), // Messages
            ])
            .split(frame.area());

        let map_area = chunks[0];
        self.viewport = (
            map_area.width.saturating_sub(2),
            map_area.height.saturating_sub(2),
        );
        // Keep the viewport valid after a resize
        self.scroll_by(0, 0);

        let map_widget = MapWidget::new(&self.generator, &self.theme)
            .mode(self.map_mode)
            .offset(self.scroll.0, self.scroll.1);
        frame.render_widget(map_widget, map_area);

        let status_widget =
            StatusWidget::new(self.generator.phase(), self.generator.stats(), &self.theme)
                .speed(self.steps_per_tick, self.paused);
        frame.render_widget(status_widget, chunks[1]);

        let lines = self.messages.tail(MESSAGE_ROWS as usize);
        frame.render_widget(MessagesWidget::new(&lines, &self.theme), chunks[2]);

        if self.show_help {
            frame.render_widget(HelpWidget::new(&self.theme), centered_rect(60, 80, frame.area()));
        }
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
