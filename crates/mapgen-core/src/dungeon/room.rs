//! Rooms
//!
//! Rooms are rectangles with odd sizes anchored on odd coordinates, so their
//! edges line up with the maze lattice and a one-cell wall always separates
//! a room from its neighbours.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::region::RegionId;

/// Room sizes (width, height) the placer chooses from
pub const ROOM_SIZES: [(i32, i32); 16] = [
    (3, 3),
    (3, 5),
    (5, 3),
    (5, 5),
    (5, 7),
    (7, 5),
    (7, 7),
    (3, 7),
    (7, 3),
    (7, 9),
    (9, 7),
    (9, 9),
    (9, 11),
    (11, 9),
    (11, 11),
    (5, 9),
];

/// Smallest room edge
pub const MIN_ROOM_SIZE: i32 = 3;

/// Largest room edge
pub const MAX_ROOM_SIZE: i32 = 11;

/// A placed room and the region it founded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub rect: Rect,
    pub region: RegionId,
}

impl Room {
    pub const fn new(rect: Rect, region: RegionId) -> Self {
        Self { rect, region }
    }

    /// Check if this room overlaps another room
    pub const fn overlaps(&self, other: &Room) -> bool {
        self.rect.intersects(&other.rect)
    }

    /// Check the lattice invariants: odd origin and odd size within range
    pub const fn is_lattice_aligned(&self) -> bool {
        let r = &self.rect;
        r.x % 2 == 1
            && r.y % 2 == 1
            && r.width % 2 == 1
            && r.height % 2 == 1
            && r.width >= MIN_ROOM_SIZE
            && r.width <= MAX_ROOM_SIZE
            && r.height >= MIN_ROOM_SIZE
            && r.height <= MAX_ROOM_SIZE
    }
}
