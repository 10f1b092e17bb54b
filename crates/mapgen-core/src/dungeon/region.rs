//! Connectivity regions
//!
//! Every room and every maze run starts life as its own region. The region
//! grid stores plain ids per cell; the table owns the metadata. Merging a
//! region rewrites its cells to the surviving id and retires the old id, so
//! stale ids never outlive a merge.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid2D;

/// Region identifier, unique for the lifetime of a generator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-cell region membership
pub type RegionGrid = Grid2D<Option<RegionId>>;

/// Debug colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Colour derived from an id alone, in the 16..208 channel range
    pub fn for_id(id: RegionId) -> Self {
        let h = id.0.wrapping_add(1).wrapping_mul(0x9E37_79B9);
        Self {
            r: 16 + (h >> 24) as u8 % 192,
            g: 16 + (h >> 16) as u8 % 192,
            b: 16 + (h >> 8) as u8 % 192,
        }
    }
}

/// Metadata for a live region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub color: Rgb,
}

/// Owner of all live regions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionTable {
    next_id: u32,
    live: BTreeMap<RegionId, Region>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new region with a fresh id
    pub fn mint(&mut self) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            Region {
                id,
                color: Rgb::for_id(id),
            },
        );
        id
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.live.get(&id)
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.live.contains_key(&id)
    }

    /// Number of live regions
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Total ids minted so far, including retired ones
    pub fn minted(&self) -> u32 {
        self.next_id
    }

    /// Live region ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.live.keys().copied()
    }

    /// Fold `from` into `into`: every cell of `from` is relabelled and `from`
    /// is retired. Returns the number of relabelled cells.
    pub fn merge(&mut self, grid: &mut RegionGrid, from: RegionId, into: RegionId) -> usize {
        if from == into {
            return 0;
        }
        let moved = grid.replace(Some(from), Some(into));
        self.live.remove(&from);
        moved
    }
}
