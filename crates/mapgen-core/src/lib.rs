//! mapgen-core: incremental rooms-and-mazes dungeon generation
//!
//! Builds a grid dungeon in five phases: rectangular rooms are scattered by
//! rejection sampling, the remaining space is filled with mazes, connectors
//! between regions are opened as doors until everything is joined, and dead
//! ends are filled back in.
//!
//! Generation is step-driven. [`MapGenerator::step`] always returns after a
//! small amount of work so a caller can draw the map while it grows.
//!
//! ```
//! use mapgen_core::{GenerationPhase, MapGenerator};
//!
//! let mut generator = MapGenerator::new(41, 21, 7, 100);
//! generator.run_to_completion();
//! assert_eq!(generator.phase(), GenerationPhase::Done);
//! print!("{}", generator.to_ascii());
//! ```
//!
//! This crate has no I/O dependencies apart from reading configuration files.

pub mod config;
pub mod dungeon;
pub mod generation;
pub mod grid;
mod rng;

pub use config::{ConfigError, GeneratorConfig};
pub use dungeon::{DungeonMap, RegionId, Rgb, Room, TileKind};
pub use generation::{GenerationPhase, GenerationStats, MapGenerator};
pub use rng::MapRng;
