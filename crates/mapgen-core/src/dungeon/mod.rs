//! Dungeon data model
//!
//! Contains tiles, rectangles, rooms, regions and the map that holds them.

mod map;
mod rect;
mod region;
mod room;
mod tile;

pub use map::{DungeonMap, TerrainGrid};
pub use rect::Rect;
pub use region::{Region, RegionGrid, RegionId, RegionTable, Rgb};
pub use room::{MAX_ROOM_SIZE, MIN_ROOM_SIZE, ROOM_SIZES, Room};
pub use tile::{Direction, Exits, TileKind};
