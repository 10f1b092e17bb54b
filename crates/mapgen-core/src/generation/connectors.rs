//! Connector scanning
//!
//! A connector is a stone cell with floor of two different regions on
//! opposite sides. Opening one as a door joins the two regions.

use serde::{Deserialize, Serialize};

use crate::dungeon::{DungeonMap, RegionId, TileKind};
use crate::grid::Grid2D;

/// A candidate door and the two regions it would join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub x: i32,
    pub y: i32,
    pub regions: (RegionId, RegionId),
}

impl Connector {
    /// Check if either side belongs to `region`
    pub fn touches(&self, region: RegionId) -> bool {
        self.regions.0 == region || self.regions.1 == region
    }

    /// The side that is not `root`, when exactly one side is `root`
    pub fn other_side(&self, root: RegionId) -> Option<RegionId> {
        match self.regions {
            (a, b) if a == root && b != root => Some(b),
            (a, b) if b == root && a != root => Some(a),
            _ => None,
        }
    }

    /// Rename a merged region on either side
    pub fn retarget(&mut self, from: RegionId, into: RegionId) {
        if self.regions.0 == from {
            self.regions.0 = into;
        }
        if self.regions.1 == from {
            self.regions.1 = into;
        }
    }
}

/// Regions on both sides of a pair of opposite neighbours, if both are
/// floor of different regions
fn join(map: &DungeonMap, a: (i32, i32), b: (i32, i32)) -> Option<(RegionId, RegionId)> {
    if !map.tile_at(a.0, a.1).is_floor() || !map.tile_at(b.0, b.1).is_floor() {
        return None;
    }
    let ra = map.region_at(a.0, a.1)?;
    let rb = map.region_at(b.0, b.1)?;
    (ra != rb).then_some((ra, rb))
}

/// Connector at (x, y), testing east/west before north/south
pub fn connector_at(map: &DungeonMap, x: i32, y: i32) -> Option<Connector> {
    if map.tile_at(x, y) != TileKind::Stone {
        return None;
    }
    join(map, (x + 1, y), (x - 1, y))
        .or_else(|| join(map, (x, y - 1), (x, y + 1)))
        .map(|regions| Connector { x, y, regions })
}

/// Find every connector of the interior in row-major order, along with a
/// grid marking their cells
pub fn scan_connectors(map: &DungeonMap) -> (Vec<Connector>, Grid2D<bool>) {
    let mut connectors = Vec::new();
    let mut marks = Grid2D::new(map.width(), map.height());

    for y in 1..map.height().saturating_sub(1) as i32 {
        for x in 1..map.width().saturating_sub(1) as i32 {
            if let Some(c) = connector_at(map, x, y) {
                marks.set(x, y, true);
                connectors.push(c);
            }
        }
    }

    (connectors, marks)
}
