//! Region joining
//!
//! Picks a root region and grows it one door at a time: each accepted
//! connector becomes a door and the region on its far side is folded into
//! the root, until a single region is left.

use serde::{Deserialize, Serialize};

use crate::dungeon::{DungeonMap, RegionId, TileKind};
use crate::rng::MapRng;

use super::connectors::Connector;

/// Merges all regions into one by opening connectors as doors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionConnector {
    root: Option<RegionId>,
    /// Connectors not yet known to touch the root
    pool: Vec<Connector>,
    /// Shuffled connectors touching the root, consumed from the back
    root_connectors: Vec<Connector>,
    /// Indices into the room list of rooms not yet joined to the root
    unconnected_rooms: Vec<usize>,
    doors: usize,
}

impl RegionConnector {
    pub fn new(connectors: Vec<Connector>) -> Self {
        Self {
            pool: connectors,
            ..Self::default()
        }
    }

    pub fn root(&self) -> Option<RegionId> {
        self.root
    }

    /// Doors opened so far
    pub fn doors(&self) -> usize {
        self.doors
    }

    pub fn unconnected_rooms(&self) -> usize {
        self.unconnected_rooms.len()
    }

    /// Open at most one door. Returns true once one region remains, or when
    /// nothing more can be joined.
    pub fn step(&mut self, map: &mut DungeonMap, rng: &mut MapRng) -> bool {
        if map.region_table.len() <= 1 {
            return true;
        }

        let root = match self.root {
            Some(root) => root,
            None => match self.select_root(map, rng) {
                Some(root) => root,
                None => return true,
            },
        };

        if self.root_connectors.is_empty() {
            self.refresh(root, rng);
            if self.root_connectors.is_empty() {
                log::error!(
                    "{} regions remain but no connector reaches root region {}",
                    map.region_table.len(),
                    root
                );
                debug_assert!(
                    false,
                    "unreachable regions: {} remain with no connector to the root",
                    map.region_table.len()
                );
                return true;
            }
        }

        while let Some(connector) = self.root_connectors.pop() {
            if map.is_beside_door(connector.x, connector.y) {
                continue;
            }
            if let Some(other) = connector.other_side(root) {
                self.open_door(map, connector, root, other);
                return map.region_table.len() <= 1;
            }
        }

        false
    }

    /// Choose the root region from a random room, or from any live region
    /// when no rooms were placed
    fn select_root(&mut self, map: &DungeonMap, rng: &mut MapRng) -> Option<RegionId> {
        log::info!(
            "joining {} regions ({} rooms, {} connectors)",
            map.region_table.len(),
            map.rooms.len(),
            self.pool.len()
        );

        self.unconnected_rooms = (0..map.rooms.len()).collect();
        rng.shuffle(&mut self.unconnected_rooms);

        let root = match self.unconnected_rooms.pop() {
            Some(index) => {
                let room = &map.rooms[index];
                log::info!(
                    "room at {},{} selected as root region {}",
                    room.rect.x,
                    room.rect.y,
                    room.region
                );
                room.region
            }
            None => {
                let live: Vec<RegionId> = map.region_table.ids().collect();
                let region = *rng.choose(&live)?;
                log::info!("no rooms; region {} selected as root", region);
                region
            }
        };

        self.root = Some(root);
        Some(root)
    }

    /// Move every pooled connector with exactly one side in the root into
    /// the root list, dropping those with both sides in it
    fn refresh(&mut self, root: RegionId, rng: &mut MapRng) {
        rng.shuffle(&mut self.pool);

        let mut rest = Vec::with_capacity(self.pool.len());
        for connector in self.pool.drain(..) {
            if connector.other_side(root).is_some() {
                self.root_connectors.push(connector);
            } else if !connector.touches(root) {
                rest.push(connector);
            }
        }
        self.pool = rest;

        rng.shuffle(&mut self.root_connectors);
        log::debug!(
            "{} connectors touch the root, {} still pooled",
            self.root_connectors.len(),
            self.pool.len()
        );
    }

    fn open_door(&mut self, map: &mut DungeonMap, connector: Connector, root: RegionId, other: RegionId) {
        map.paint(connector.x, connector.y, TileKind::Door, Some(root));
        let moved = map.region_table.merge(&mut map.regions, other, root);

        for c in self.pool.iter_mut().chain(self.root_connectors.iter_mut()) {
            c.retarget(other, root);
        }
        self.unconnected_rooms
            .retain(|&index| map.rooms[index].region != other);
        self.doors += 1;

        log::debug!(
            "door at {},{} merged region {} ({} cells) into {}; {} regions left",
            connector.x,
            connector.y,
            other,
            moved,
            root,
            map.region_table.len()
        );
    }
}
