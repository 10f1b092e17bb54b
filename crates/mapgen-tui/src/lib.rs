//! mapgen-tui: terminal viewer for dungeon generation
//!
//! Animates a `MapGenerator` a few steps per tick so each phase can be
//! watched as it happens.

pub mod app;
pub mod input;
pub mod logger;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use logger::MessageLog;
pub use theme::Theme;
