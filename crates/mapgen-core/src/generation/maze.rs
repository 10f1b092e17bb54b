//! Maze carving ("hunt and kill")
//!
//! Fills every stone cell of the odd lattice with single-width corridors.
//! The walk never recurses: the cursor and a visited list are kept in the
//! carver, which is also what lets it stop after any single move.

use serde::{Deserialize, Serialize};

use crate::dungeon::{Direction, DungeonMap, RegionId, TileKind};
use crate::rng::MapRng;

/// An active maze run
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Walker {
    region: RegionId,
    x: i32,
    y: i32,
    /// Lattice cells of this maze that may still have stone around them
    visited: Vec<(i32, i32)>,
    cells: usize,
}

impl Walker {
    fn start(map: &mut DungeonMap, x: i32, y: i32) -> Self {
        let region = map.region_table.mint();
        map.paint(x, y, TileKind::Corridor, Some(region));
        Self {
            region,
            x,
            y,
            visited: vec![(x, y)],
            cells: 1,
        }
    }

    /// Carve onwards from the cursor. Returns false at a dead end.
    fn walk(&mut self, map: &mut DungeonMap, rng: &mut MapRng) -> bool {
        match carvable_direction(map, self.x, self.y, rng) {
            Some(dir) => {
                self.carve(map, dir);
                true
            }
            None => false,
        }
    }

    /// Resume from a random visited cell that still borders stone.
    /// Returns false once the maze is exhausted.
    fn hunt(&mut self, map: &mut DungeonMap, rng: &mut MapRng) -> bool {
        rng.shuffle(&mut self.visited);

        let mut exhausted = 0;
        let mut found = None;
        for &(x, y) in &self.visited {
            if let Some(dir) = carvable_direction(map, x, y, rng) {
                found = Some((x, y, dir));
                break;
            }
            exhausted += 1;
        }
        self.visited.drain(..exhausted);

        let Some((x, y, dir)) = found else {
            return false;
        };
        log::trace!("maze {} hunting resumed at {},{}", self.region, x, y);
        self.x = x;
        self.y = y;
        self.carve(map, dir);
        true
    }

    /// Open the one-step and two-step cells and move the cursor onto the latter
    fn carve(&mut self, map: &mut DungeonMap, dir: Direction) {
        let (mx, my) = dir.offset(self.x, self.y, 1);
        let (nx, ny) = dir.offset(self.x, self.y, 2);
        map.paint(mx, my, TileKind::Corridor, Some(self.region));
        map.paint(nx, ny, TileKind::Corridor, Some(self.region));
        self.x = nx;
        self.y = ny;
        self.visited.push((nx, ny));
        self.cells += 2;
    }
}

/// Check if the cell two steps away is stone inside the border
fn can_carve(map: &DungeonMap, x: i32, y: i32, dir: Direction) -> bool {
    let (nx, ny) = dir.offset(x, y, 2);
    map.terrain.in_interior(nx, ny) && map.tile_at(nx, ny) == TileKind::Stone
}

/// First carvable direction in a random order
fn carvable_direction(map: &DungeonMap, x: i32, y: i32, rng: &mut MapRng) -> Option<Direction> {
    let mut dirs = Direction::ALL;
    rng.shuffle(&mut dirs);
    dirs.into_iter().find(|&d| can_carve(map, x, y, d))
}

/// Resumable maze carver over the odd lattice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MazeCarver {
    started: bool,
    /// Rows not yet scanned, consumed from the back
    rows: Vec<i32>,
    /// Row being scanned and its remaining columns
    row: Option<i32>,
    cols: Vec<i32>,
    walker: Option<Walker>,
    mazes: usize,
}

impl MazeCarver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mazes started so far
    pub fn mazes(&self) -> usize {
        self.mazes
    }

    /// Region of the maze currently being carved
    pub fn active_region(&self) -> Option<RegionId> {
        self.walker.as_ref().map(|w| w.region)
    }

    /// One walk-or-hunt move, or one seed scan that starts a new maze.
    /// Returns true once every lattice cell has been visited.
    pub fn step(&mut self, map: &mut DungeonMap, rng: &mut MapRng) -> bool {
        if !self.started {
            self.rows = odd_lattice(map.height());
            rng.shuffle(&mut self.rows);
            self.started = true;
        }

        if let Some(walker) = &mut self.walker {
            if walker.walk(map, rng) || walker.hunt(map, rng) {
                return false;
            }
            log::debug!("maze {} finished with {} cells", walker.region, walker.cells);
            self.walker = None;
            return false;
        }

        loop {
            if let Some(y) = self.row {
                while let Some(x) = self.cols.pop() {
                    if map.tile_at(x, y) == TileKind::Stone {
                        let walker = Walker::start(map, x, y);
                        log::trace!("maze {} seeded at {},{}", walker.region, x, y);
                        self.walker = Some(walker);
                        self.mazes += 1;
                        return false;
                    }
                }
                self.row = None;
            }

            let Some(y) = self.rows.pop() else {
                return true;
            };
            self.row = Some(y);
            self.cols = odd_lattice(map.width());
            rng.shuffle(&mut self.cols);
        }
    }
}

/// Odd coordinates strictly inside a dimension's border
fn odd_lattice(len: usize) -> Vec<i32> {
    (1..len.saturating_sub(1) as i32).step_by(2).collect()
}
