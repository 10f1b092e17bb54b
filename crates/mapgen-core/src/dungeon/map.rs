//! The grids a dungeon is built on
//!
//! `DungeonMap` bundles the terrain grid, the parallel region grid, the
//! region table and the room list. Generation phases mutate it; everything
//! else only reads it.

use serde::{Deserialize, Serialize};

use crate::grid::Grid2D;

use super::region::{RegionGrid, RegionId, RegionTable};
use super::room::Room;
use super::tile::{Direction, Exits, TileKind};

/// Terrain kind per cell
pub type TerrainGrid = Grid2D<TileKind>;

/// Terrain, region membership, and the rooms placed so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonMap {
    pub terrain: TerrainGrid,
    pub regions: RegionGrid,
    pub region_table: RegionTable,
    pub rooms: Vec<Room>,
}

impl DungeonMap {
    /// Create an all-stone map
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            terrain: TerrainGrid::new(width, height),
            regions: RegionGrid::new(width, height),
            region_table: RegionTable::new(),
            rooms: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.terrain.width()
    }

    pub fn height(&self) -> usize {
        self.terrain.height()
    }

    /// Tile at (x, y); stone when out of bounds
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        self.terrain.get(x, y)
    }

    /// Region owning (x, y), if any
    pub fn region_at(&self, x: i32, y: i32) -> Option<RegionId> {
        self.regions.get(x, y)
    }

    /// Set a cell's tile and region together
    pub fn paint(&mut self, x: i32, y: i32, tile: TileKind, region: Option<RegionId>) {
        self.terrain.set(x, y, tile);
        self.regions.set(x, y, region);
    }

    /// Cardinal neighbours of (x, y) that are not stone
    pub fn exits(&self, x: i32, y: i32) -> Exits {
        Direction::ALL
            .iter()
            .filter(|d| {
                let (nx, ny) = d.offset(x, y, 1);
                self.tile_at(nx, ny) != TileKind::Stone
            })
            .fold(Exits::empty(), |acc, d| acc | d.exit())
    }

    /// Check if there's a door next to a position (4 cardinal directions)
    pub fn is_beside_door(&self, x: i32, y: i32) -> bool {
        Direction::ALL.iter().any(|d| {
            let (nx, ny) = d.offset(x, y, 1);
            self.tile_at(nx, ny) == TileKind::Door
        })
    }

    /// A corridor or door with exactly one open cardinal neighbour
    pub fn is_dead_end(&self, x: i32, y: i32) -> bool {
        matches!(self.tile_at(x, y), TileKind::Corridor | TileKind::Door)
            && self.exits(x, y).count() == 1
    }

    /// Number of walkable cells
    pub fn walkable_count(&self) -> usize {
        self.terrain.count(|t| t.is_walkable())
    }

    /// Number of 4-connected components of walkable cells
    pub fn walkable_components(&self) -> usize {
        let mut seen: Grid2D<bool> = Grid2D::new(self.width(), self.height());
        let mut components = 0;

        for (x, y, tile) in self.terrain.iter() {
            if !tile.is_walkable() || seen.get(x, y) {
                continue;
            }
            components += 1;
            seen.set(x, y, true);
            let mut stack = vec![(x, y)];
            while let Some((cx, cy)) = stack.pop() {
                for d in Direction::ALL {
                    let (nx, ny) = d.offset(cx, cy, 1);
                    if self.tile_at(nx, ny).is_walkable() && !seen.get(nx, ny) {
                        seen.set(nx, ny, true);
                        stack.push((nx, ny));
                    }
                }
            }
        }

        components
    }

    /// Render the terrain as text, one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                out.push(self.tile_at(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }
}
