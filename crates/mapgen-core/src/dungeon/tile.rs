//! Terrain tile kinds and cardinal neighbourhoods

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain kind of a single cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    /// Solid rock, never walkable
    #[default]
    Stone = 0,
    Room = 1,
    Corridor = 2,
    /// Walkable joint between two regions
    Door = 3,
}

impl TileKind {
    /// Check if this is passable (can walk through)
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileKind::Room | TileKind::Corridor | TileKind::Door)
    }

    /// Room or corridor floor; the tiles a connector may join
    pub const fn is_floor(&self) -> bool {
        matches!(self, TileKind::Room | TileKind::Corridor)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Stone => ' ',
            TileKind::Room => '.',
            TileKind::Corridor => '#',
            TileKind::Door => '+',
        }
    }
}

/// Cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step (dx, dy); y grows downwards
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The coordinate `steps` cells away from (x, y)
    pub const fn offset(&self, x: i32, y: i32, steps: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx * steps, y + dy * steps)
    }

    pub const fn exit(&self) -> Exits {
        match self {
            Direction::North => Exits::NORTH,
            Direction::East => Exits::EAST,
            Direction::South => Exits::SOUTH,
            Direction::West => Exits::WEST,
        }
    }
}

bitflags! {
    /// Set of cardinal neighbours that are not stone
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Exits: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
    }
}

impl Exits {
    /// Number of open sides
    pub fn count(&self) -> u32 {
        self.bits().count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_stone() {
        assert_eq!(TileKind::default(), TileKind::Stone);
    }

    #[test]
    fn test_walkable() {
        let walkable: Vec<_> = TileKind::iter().filter(|t| t.is_walkable()).collect();
        assert_eq!(
            walkable,
            vec![TileKind::Room, TileKind::Corridor, TileKind::Door]
        );
        assert!(!TileKind::Door.is_floor());
    }

    #[test]
    fn test_offset_two_steps() {
        assert_eq!(Direction::North.offset(5, 5, 2), (5, 3));
        assert_eq!(Direction::East.offset(5, 5, 2), (7, 5));
        assert_eq!(Direction::South.offset(5, 5, 1), (5, 6));
        assert_eq!(Direction::West.offset(5, 5, 1), (4, 5));
    }

    #[test]
    fn test_exits_count() {
        let exits = Direction::North.exit() | Direction::West.exit();
        assert_eq!(exits.count(), 2);
        assert_eq!(Exits::empty().count(), 0);
        assert_eq!(Exits::all().count(), 4);
    }
}
