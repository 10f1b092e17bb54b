use mapgen_core::dungeon::{MAX_ROOM_SIZE, MIN_ROOM_SIZE};
use mapgen_core::{DungeonMap, GenerationPhase, MapGenerator, TileKind};
use proptest::prelude::*;

fn generate(width: usize, height: usize, seed: u64, attempts: u32) -> MapGenerator {
    let mut generator = MapGenerator::new(width, height, seed, attempts);
    generator.run_to_completion();
    generator
}

fn assert_no_dead_ends(map: &DungeonMap) {
    for (x, y, _) in map.terrain.iter() {
        assert!(!map.is_dead_end(x, y), "dead end left at ({x},{y})");
    }
}

fn assert_rooms_valid(generator: &MapGenerator) {
    let (w, h) = (generator.width() as i32, generator.height() as i32);
    let rooms = generator.rooms();
    for (i, room) in rooms.iter().enumerate() {
        let r = room.rect;
        assert!(r.x >= 1 && r.y >= 1, "{r:?}");
        assert!(r.right() <= w - 1 && r.bottom() <= h - 1, "{r:?}");
        for side in [r.width, r.height] {
            assert!(side % 2 == 1, "{r:?}");
            assert!((MIN_ROOM_SIZE..=MAX_ROOM_SIZE).contains(&side), "{r:?}");
        }
        for other in &rooms[i + 1..] {
            assert!(!room.overlaps(other), "{room:?} overlaps {other:?}");
        }
    }
}

#[test]
fn test_tiny_grid_single_attempt() {
    for seed in 0..20 {
        let generator = generate(5, 5, seed, 1);

        assert!(generator.rooms().len() <= 1);
        for room in generator.rooms() {
            assert_eq!((room.rect.width, room.rect.height), (3, 3));
        }
        assert!(generator.map().walkable_components() <= 1);
        assert_no_dead_ends(generator.map());
    }
}

#[test]
fn test_zero_attempts_pure_maze() {
    let mut generator = MapGenerator::new(21, 21, 2024, 0);

    while generator.phase() != GenerationPhase::Connectors {
        generator.step();
    }
    assert!(generator.rooms().is_empty());
    for y in (1..20).step_by(2) {
        for x in (1..20).step_by(2) {
            assert_eq!(generator.tile_at(x, y), TileKind::Corridor, "({x},{y})");
        }
    }

    generator.run_to_completion();
    assert!(generator.map().walkable_components() <= 1);
    assert_no_dead_ends(generator.map());
    // A lone maze is a tree, so pruning eats it down to at most one cell
    assert!(generator.map().walkable_count() <= 1);
}

#[test]
fn test_dense_rooms() {
    let mut generator = MapGenerator::new(41, 41, 31337, 200);

    while generator.phase() != GenerationPhase::RemoveDeadEnds {
        generator.step();
    }
    assert!(!generator.rooms().is_empty());
    assert!(generator.rooms().len() <= 200);
    assert_rooms_valid(&generator);
    assert_eq!(generator.stats().live_regions, 1);

    generator.run_to_completion();
    let again = generate(41, 41, 31337, 200);
    assert_eq!(generator.rooms(), again.rooms());
    assert_eq!(generator.map().terrain, again.map().terrain);
    assert_eq!(generator.map().walkable_components(), 1);
}

#[test]
fn test_rooms_survive_pruning() {
    let generator = generate(61, 41, 5, 150);

    for room in generator.rooms() {
        let r = room.rect;
        for y in r.y..r.bottom() {
            for x in r.x..r.right() {
                assert_eq!(generator.tile_at(x, y), TileKind::Room);
            }
        }
    }
}

#[test]
fn test_every_door_joins_two_sides() {
    let generator = generate(51, 31, 77, 120);

    let mut doors = 0;
    for (x, y, tile) in generator.map().terrain.iter() {
        if tile != TileKind::Door {
            continue;
        }
        doors += 1;
        let horizontal = generator.tile_at(x - 1, y).is_walkable()
            && generator.tile_at(x + 1, y).is_walkable();
        let vertical = generator.tile_at(x, y - 1).is_walkable()
            && generator.tile_at(x, y + 1).is_walkable();
        assert!(horizontal || vertical, "door at ({x},{y}) leads nowhere");
    }
    assert!(doors > 0);
    assert!(doors <= generator.stats().doors);
}

#[test]
fn test_walkable_cells_share_one_region() {
    let generator = generate(45, 33, 404, 90);

    let mut regions = generator
        .map()
        .terrain
        .iter()
        .filter(|&(_, _, t)| t.is_walkable())
        .map(|(x, y, _)| generator.region_at(x, y));
    let first = regions.next().flatten();
    assert!(first.is_some());
    assert!(regions.all(|r| r == first));
}

#[test]
fn test_snapshot_resumes_identically() {
    let mut generator = MapGenerator::new(41, 31, 99, 80);
    generator.step_n(150);
    assert!(!generator.is_done());

    let json = serde_json::to_string(&generator).unwrap();
    let mut restored: MapGenerator = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.phase(), generator.phase());

    generator.run_to_completion();
    restored.run_to_completion();

    assert_eq!(restored.to_ascii(), generator.to_ascii());
    assert_eq!(restored.stats(), generator.stats());
}

#[test]
fn test_ascii_dimensions() {
    let generator = generate(30, 12, 1, 40);
    let ascii = generator.to_ascii();

    let lines: Vec<&str> = ascii.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|l| l.chars().count() == 30));
    assert!(lines[0].chars().all(|c| c == ' '));
}

#[test]
fn test_out_of_bounds_queries() {
    let generator = generate(21, 15, 6, 20);

    assert_eq!(generator.tile_at(-1, 0), TileKind::Stone);
    assert_eq!(generator.tile_at(21, 3), TileKind::Stone);
    assert_eq!(generator.tile_at(3, 1000), TileKind::Stone);
    assert_eq!(generator.region_at(-5, -5), None);
    assert!(!generator.is_connector(-1, -1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_deterministic(seed: u64, w in 5usize..40, h in 5usize..40, attempts in 0u32..60) {
        let a = generate(w, h, seed, attempts);
        let b = generate(w, h, seed, attempts);
        prop_assert_eq!(a.to_ascii(), b.to_ascii());
        prop_assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn prop_done_map_is_valid(seed: u64, w in 3usize..48, h in 3usize..48, attempts in 0u32..80) {
        let generator = generate(w, h, seed, attempts);
        let map = generator.map();

        prop_assert!(map.walkable_components() <= 1);
        for (x, y, tile) in map.terrain.iter() {
            prop_assert!(!map.is_dead_end(x, y), "dead end at ({}, {})", x, y);
            prop_assert_eq!(tile.is_walkable(), map.region_at(x, y).is_some());
            if !map.terrain.in_interior(x, y) {
                prop_assert_eq!(tile, TileKind::Stone);
            }
        }
        assert_rooms_valid(&generator);
        prop_assert!(generator.stats().live_regions <= 1);
    }

    #[test]
    fn prop_step_after_done_is_idempotent(seed: u64, w in 5usize..30, h in 5usize..30) {
        let mut generator = generate(w, h, seed, 30);
        let before = generator.to_ascii();
        let stats = generator.stats();

        generator.step();
        generator.step_n(5);

        prop_assert_eq!(generator.phase(), GenerationPhase::Done);
        prop_assert_eq!(generator.to_ascii(), before);
        prop_assert_eq!(generator.stats(), stats);
    }
}
