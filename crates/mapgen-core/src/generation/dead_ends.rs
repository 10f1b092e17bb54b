//! Dead-end removal

use serde::{Deserialize, Serialize};

use crate::dungeon::{DungeonMap, TileKind};

/// Fills dead ends back in with stone, one whole-grid pass per step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeadEndPruner {
    passes: u32,
    removed: usize,
}

impl DeadEndPruner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Cells turned back into stone so far
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Run one pass. Returns true when the pass found nothing to remove.
    pub fn step(&mut self, map: &mut DungeonMap) -> bool {
        let dead_ends: Vec<(i32, i32)> = map
            .terrain
            .iter()
            .filter(|&(x, y, _)| map.is_dead_end(x, y))
            .map(|(x, y, _)| (x, y))
            .collect();

        self.passes += 1;
        if dead_ends.is_empty() {
            log::debug!(
                "pruning settled after {} passes, {} cells removed",
                self.passes,
                self.removed
            );
            return true;
        }

        for &(x, y) in &dead_ends {
            map.paint(x, y, TileKind::Stone, None);
        }
        self.removed += dead_ends.len();
        log::debug!("pruning pass {} removed {} dead ends", self.passes, dead_ends.len());
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::RegionId;

    fn prune_all(map: &mut DungeonMap) -> DeadEndPruner {
        let mut pruner = DeadEndPruner::new();
        while !pruner.step(map) {}
        pruner
    }

    #[test]
    fn test_spur_is_removed() {
        // 3x3 room with a three-cell corridor running east from its middle row
        let mut map = DungeonMap::new(9, 5);
        let room = map.region_table.mint();
        map.terrain.fill_rect(1, 1, 3, 3, TileKind::Room);
        map.regions.fill_rect(1, 1, 3, 3, Some(room));
        map.paint(4, 2, TileKind::Door, Some(room));
        for x in 5..8 {
            map.paint(x, 2, TileKind::Corridor, Some(room));
        }

        let pruner = prune_all(&mut map);

        assert_eq!(pruner.removed(), 4);
        // One pass per removed cell, plus the pass that finds nothing
        assert_eq!(pruner.passes(), 5);
        assert_eq!(map.walkable_count(), 9);
        for x in 4..8 {
            assert_eq!(map.tile_at(x, 2), TileKind::Stone);
            assert_eq!(map.region_at(x, 2), None);
        }
    }

    #[test]
    fn test_room_cells_are_kept() {
        let mut map = DungeonMap::new(5, 5);
        let room = map.region_table.mint();
        map.terrain.fill_rect(1, 1, 3, 3, TileKind::Room);
        map.regions.fill_rect(1, 1, 3, 3, Some(room));

        let pruner = prune_all(&mut map);

        assert_eq!(pruner.removed(), 0);
        assert_eq!(pruner.passes(), 1);
        assert_eq!(map.walkable_count(), 9);
    }

    #[test]
    fn test_loop_survives() {
        let mut map = DungeonMap::new(5, 5);
        let region = RegionId(0);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3), (1, 2)] {
            map.paint(x, y, TileKind::Corridor, Some(region));
        }

        let pruner = prune_all(&mut map);

        assert_eq!(pruner.removed(), 0);
        assert_eq!(map.walkable_count(), 8);
    }

    #[test]
    fn test_lone_corridor_line_collapses_to_one_cell() {
        let mut map = DungeonMap::new(9, 3);
        for x in 1..8 {
            map.paint(x, 1, TileKind::Corridor, Some(RegionId(0)));
        }

        prune_all(&mut map);

        // Both tips go each pass until a single isolated cell is left
        assert_eq!(map.walkable_count(), 1);
        assert_eq!(map.tile_at(4, 1), TileKind::Corridor);
        assert!(!map.is_dead_end(4, 1));
    }
}
