//! Dungeon generation viewer
//!
//! Main entry point. Animates generation in the terminal, or with `--print`
//! generates one dungeon and writes it to stdout as text.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use mapgen_core::{ConfigError, GeneratorConfig, MapGenerator, MapRng};
use mapgen_tui::{App, MessageLog, Theme};

/// Rooms-and-mazes dungeon generator
#[derive(Parser, Debug)]
#[command(name = "mapgen")]
#[command(author, version, about = "Watch a dungeon being generated", long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Map height in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Random seed (drawn from entropy when omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Room placement attempts
    #[arg(short = 'a', long = "attempts")]
    attempts: Option<u32>,

    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Generation steps per screen refresh
    #[arg(long, default_value_t = 4)]
    steps_per_tick: usize,

    /// Milliseconds between refreshes
    #[arg(long, default_value_t = 30)]
    tick_ms: u64,

    /// Generate once and print the map as text instead of animating
    #[arg(short = 'p', long)]
    print: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    /// Load `--config` if given, then apply flag overrides
    fn generator_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let (mut config, seed) = match &self.config {
            Some(path) => {
                let config = GeneratorConfig::load(path)?;
                (config, config.seed)
            }
            None => (
                GeneratorConfig::default(),
                MapRng::from_entropy().seed(),
            ),
        };

        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        config.seed = self.seed.unwrap_or(seed);
        config.max_room_attempts = self.attempts.unwrap_or(config.max_room_attempts);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let config = match args.generator_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("mapgen: {e}");
            std::process::exit(1);
        }
    };

    let messages = MessageLog::default();
    if let Err(e) = messages.install(args.log_level) {
        eprintln!("mapgen: could not install logger: {e}");
    }

    let generator = match MapGenerator::from_config(&config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("mapgen: {e}");
            std::process::exit(1);
        }
    };

    if args.print {
        return print_dungeon(generator, &messages);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        generator,
        config,
        args.steps_per_tick,
        messages,
        Theme::detect(),
    );
    let result = run(&mut terminal, &mut app, Duration::from_millis(args.tick_ms.max(1)));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main loop: draw, handle input until the next tick, advance generation
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
            if app.should_quit() {
                return Ok(());
            }
        }

        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
}

/// Generate to completion, write the map to stdout and the log to stderr
fn print_dungeon(mut generator: MapGenerator, messages: &MessageLog) -> io::Result<()> {
    use std::io::Write;

    generator.run_to_completion();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(generator.to_ascii().as_bytes())?;
    out.flush()?;

    let stderr = io::stderr();
    let mut err = stderr.lock();
    for line in messages.tail(messages.len()) {
        writeln!(err, "[{}] {}", line.level, line.text)?;
    }
    Ok(())
}
