//! Room placement by rejection sampling

use serde::{Deserialize, Serialize};

use crate::dungeon::{DungeonMap, ROOM_SIZES, Rect, Room, TileKind};
use crate::rng::MapRng;

/// Places non-overlapping rooms until its attempt budget is spent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPlacer {
    attempts: u32,
    max_attempts: u32,
}

impl RoomPlacer {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Make attempts until one room is placed or the budget runs out.
    /// Returns true once every attempt has been used.
    pub fn step(&mut self, map: &mut DungeonMap, rng: &mut MapRng) -> bool {
        while self.attempts < self.max_attempts {
            self.attempts += 1;

            let rect = random_rect(map, rng);
            if !fits(map, &rect) {
                continue;
            }

            let region = map.region_table.mint();
            let room = Room::new(rect, region);
            debug_assert!(room.is_lattice_aligned(), "{room:?}");
            map.terrain
                .fill_rect(rect.x, rect.y, rect.width as usize, rect.height as usize, TileKind::Room);
            map.regions
                .fill_rect(rect.x, rect.y, rect.width as usize, rect.height as usize, Some(region));
            map.rooms.push(room);

            log::debug!(
                "room {} placed at {},{} ({}x{}) on attempt {}",
                region,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                self.attempts
            );
            return self.attempts >= self.max_attempts;
        }
        true
    }
}

/// Random palette size at a random odd-aligned origin
fn random_rect(map: &DungeonMap, rng: &mut MapRng) -> Rect {
    let (width, height) = ROOM_SIZES[rng.index(ROOM_SIZES.len())];
    let x = 1 + 2 * rng.below((map.width() / 2) as u32) as i32;
    let y = 1 + 2 * rng.below((map.height() / 2) as u32) as i32;
    Rect::new(x, y, width, height)
}

/// Inside the border and clear of every placed room
fn fits(map: &DungeonMap, rect: &Rect) -> bool {
    rect.fits_interior(map.width() as i32, map.height() as i32)
        && !map.rooms.iter().any(|r| r.rect.intersects(rect))
}
