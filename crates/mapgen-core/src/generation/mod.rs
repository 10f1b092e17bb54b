//! Phased dungeon generation
//!
//! `MapGenerator` owns the map, the random stream and one state value per
//! phase. Each call to [`MapGenerator::step`] does a bounded amount of work
//! in the current phase and moves to the next phase when that one reports
//! completion:
//!
//! Rooms → Mazes → Connectors → ConnectingRegions → RemoveDeadEnds → Done
//!
//! All state is plain data, so a generator can be paused, drawn, or
//! serialized between any two steps.

mod connect;
mod connectors;
mod dead_ends;
mod maze;
mod rooms;

pub use connect::RegionConnector;
pub use connectors::{Connector, connector_at, scan_connectors};
pub use dead_ends::DeadEndPruner;
pub use maze::MazeCarver;
pub use rooms::RoomPlacer;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::{ConfigError, GeneratorConfig, MAX_DIMENSION};
use crate::dungeon::{DungeonMap, RegionId, Rgb, Room, TileKind};
use crate::grid::Grid2D;
use crate::rng::MapRng;

/// Generation phase, advanced strictly in declaration order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum GenerationPhase {
    #[default]
    Rooms,
    Mazes,
    Connectors,
    ConnectingRegions,
    RemoveDeadEnds,
    Done,
}

impl GenerationPhase {
    /// The phase that follows this one; Done is terminal
    pub fn next(self) -> Self {
        match self {
            Self::Rooms => Self::Mazes,
            Self::Mazes => Self::Connectors,
            Self::Connectors => Self::ConnectingRegions,
            Self::ConnectingRegions => Self::RemoveDeadEnds,
            Self::RemoveDeadEnds | Self::Done => Self::Done,
        }
    }
}

/// Counters for status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    pub rooms: usize,
    pub live_regions: usize,
    pub mazes: usize,
    pub connectors: usize,
    pub doors: usize,
    /// Rooms not yet joined to the root region
    pub unconnected_rooms: usize,
    pub dead_ends_removed: usize,
    pub steps: u64,
}

/// Incremental rooms-and-mazes generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapGenerator {
    map: DungeonMap,
    rng: MapRng,
    phase: GenerationPhase,
    placer: RoomPlacer,
    carver: MazeCarver,
    connector_grid: Grid2D<bool>,
    connectors_found: usize,
    joiner: RegionConnector,
    pruner: DeadEndPruner,
    steps: u64,
}

impl MapGenerator {
    /// Sides larger than [`MAX_DIMENSION`] are clamped to it. Use
    /// [`MapGenerator::from_config`] to reject them instead.
    pub fn new(width: usize, height: usize, seed: u64, max_room_attempts: u32) -> Self {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            log::warn!(
                "{}x{} exceeds the {} cell limit, clamping",
                width,
                height,
                MAX_DIMENSION
            );
        }
        let width = width.min(MAX_DIMENSION);
        let height = height.min(MAX_DIMENSION);
        log::info!(
            "generating {}x{} dungeon, seed {}, {} room attempts",
            width,
            height,
            seed,
            max_room_attempts
        );
        Self {
            map: DungeonMap::new(width, height),
            rng: MapRng::new(seed),
            phase: GenerationPhase::Rooms,
            placer: RoomPlacer::new(max_room_attempts),
            carver: MazeCarver::new(),
            connector_grid: Grid2D::new(width, height),
            connectors_found: 0,
            joiner: RegionConnector::default(),
            pruner: DeadEndPruner::new(),
            steps: 0,
        }
    }

    /// Validate a configuration and build a generator from it
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.width,
            config.height,
            config.seed,
            config.max_room_attempts,
        ))
    }

    /// Advance by one bounded unit of work. Does nothing once Done.
    pub fn step(&mut self) {
        let finished = match self.phase {
            GenerationPhase::Done => return,
            GenerationPhase::Rooms => self.placer.step(&mut self.map, &mut self.rng),
            GenerationPhase::Mazes => self.carver.step(&mut self.map, &mut self.rng),
            GenerationPhase::Connectors => {
                let (connectors, grid) = scan_connectors(&self.map);
                self.connectors_found = connectors.len();
                self.connector_grid = grid;
                self.joiner = RegionConnector::new(connectors);
                true
            }
            GenerationPhase::ConnectingRegions => self.joiner.step(&mut self.map, &mut self.rng),
            GenerationPhase::RemoveDeadEnds => self.pruner.step(&mut self.map),
        };
        self.steps += 1;

        if finished {
            self.advance();
        }
    }

    fn advance(&mut self) {
        let next = self.phase.next();
        match self.phase {
            GenerationPhase::Rooms => log::info!(
                "placed {} rooms in {} attempts",
                self.map.rooms.len(),
                self.placer.attempts()
            ),
            GenerationPhase::Mazes => log::info!("carved {} mazes", self.carver.mazes()),
            GenerationPhase::Connectors => {
                log::info!("found {} connectors", self.connectors_found)
            }
            GenerationPhase::ConnectingRegions => log::info!(
                "opened {} doors, {} regions left",
                self.joiner.doors(),
                self.map.region_table.len()
            ),
            GenerationPhase::RemoveDeadEnds => {
                log::info!("removed {} dead-end cells", self.pruner.removed())
            }
            GenerationPhase::Done => {}
        }
        log::info!("phase {} -> {} after {} steps", self.phase, next, self.steps);
        self.phase = next;
    }

    /// Step until Done
    pub fn run_to_completion(&mut self) {
        while !self.is_done() {
            self.step();
        }
    }

    /// Up to `n` steps, stopping early at Done. Returns the steps taken.
    pub fn step_n(&mut self, n: usize) -> usize {
        let mut taken = 0;
        while taken < n && !self.is_done() {
            self.step();
            taken += 1;
        }
        taken
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == GenerationPhase::Done
    }

    pub fn width(&self) -> usize {
        self.map.width()
    }

    pub fn height(&self) -> usize {
        self.map.height()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Tile at (x, y); stone when out of bounds
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        self.map.tile_at(x, y)
    }

    pub fn region_at(&self, x: i32, y: i32) -> Option<RegionId> {
        self.map.region_at(x, y)
    }

    /// Debug color of a region. Stable for an id even after it is merged away.
    pub fn region_color(&self, id: RegionId) -> Rgb {
        self.map
            .region_table
            .get(id)
            .map_or_else(|| Rgb::for_id(id), |region| region.color)
    }

    /// Check if (x, y) was found as a connector and has not been opened
    pub fn is_connector(&self, x: i32, y: i32) -> bool {
        self.connector_grid.get(x, y) && self.map.tile_at(x, y) == TileKind::Stone
    }

    /// Region of the maze being carved right now, if any
    pub fn active_maze(&self) -> Option<RegionId> {
        self.carver.active_region()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.map.rooms
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            rooms: self.map.rooms.len(),
            live_regions: self.map.region_table.len(),
            mazes: self.carver.mazes(),
            connectors: self.connectors_found,
            doors: self.joiner.doors(),
            unconnected_rooms: self.joiner.unconnected_rooms(),
            dead_ends_removed: self.pruner.removed(),
            steps: self.steps,
        }
    }

    pub fn to_ascii(&self) -> String {
        self.map.to_ascii()
    }
}
