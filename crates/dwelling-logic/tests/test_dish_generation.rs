//! Integration tests for the full dish generation pipeline.
//!
//! Exercises: layout grid → preference allocation → kitchen scan
//! → dish placement → summary / report.
//!
//! All tests are pure logic with seeded RNGs.

use std::collections::HashSet;

use dwelling_logic::config::DishConfig;
use dwelling_logic::dishes::{generate_dishes_and_preferences, DishGeneration};
use dwelling_logic::eligibility::eligible_cells;
use dwelling_logic::grid::{Cell, Coord, Grid, OccupiedSet, RoomLayout, RoomRegion};
use dwelling_logic::preferences::{count_preference, DietaryPreference};
use dwelling_logic::summary::{render_report, summarize};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

/// Small house: kitchen on the left (rows 1..5, cols 1..6), living room on
/// the right. Counter along the top of the kitchen, one fridge.
fn house() -> (Grid, RoomLayout) {
    let grid = Grid::from_rows(&[
        "WWWWWWWWWWWW",
        "WkkkkFWLLLLW",
        "WKKKKKdLLLLW",
        "WKKKKKWLLLLW",
        "WKKKKKWLLLLW",
        "WWWdWWWWWWWW",
    ])
    .unwrap();
    let mut rooms = RoomLayout::new();
    rooms.insert('K', RoomRegion::new(1..5, 1..6));
    rooms.insert('L', RoomRegion::new(1..5, 7..11));
    (grid, rooms)
}

fn people(n: usize) -> Vec<Coord> {
    // Everyone stands in the living room.
    (0..n).map(|i| Coord::new(1 + i % 4, 7 + (i / 4) % 4)).collect()
}

fn run(
    grid: &Grid,
    rooms: &RoomLayout,
    people: &[Coord],
    occupied: &OccupiedSet,
    seed: u64,
) -> DishGeneration {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_dishes_and_preferences(
        grid,
        rooms,
        people,
        occupied,
        &DishConfig::default(),
        &mut rng,
    )
    .unwrap()
}

/// Occupy every kitchen floor cell except `keep`.
fn occupy_all_but(grid: &Grid, region: &RoomRegion, keep: &[Coord]) -> OccupiedSet {
    region
        .cells()
        .filter(|c| grid.get(*c) == Some(Cell::KitchenFloor) && !keep.contains(c))
        .collect()
}

// ── Property sweeps ────────────────────────────────────────────────────

#[test]
fn preference_keys_are_exactly_one_to_n() {
    let (grid, rooms) = house();
    for n in 0..12 {
        let result = run(&grid, &rooms, &people(n), &OccupiedSet::new(), n as u64);
        let keys: Vec<usize> = result.preferences.keys().copied().collect();
        assert_eq!(keys, (1..=n).collect::<Vec<_>>());
    }
}

#[test]
fn both_labels_present_for_two_or_more() {
    let (grid, rooms) = house();
    for seed in 0..50 {
        for n in 2..10 {
            let result = run(&grid, &rooms, &people(n), &OccupiedSet::new(), seed);
            assert!(count_preference(&result.preferences, DietaryPreference::Vegan) >= 1);
            assert!(count_preference(&result.preferences, DietaryPreference::NonVegetarian) >= 1);
        }
    }
}

#[test]
fn placements_are_valid_distinct_and_counted() {
    let (grid, rooms) = house();
    let kitchen = &rooms[&'K'];
    let mut occupied = OccupiedSet::new();
    occupied.insert(Coord::new(3, 3));
    occupied.insert(Coord::new(4, 1));

    for seed in 0..50 {
        for n in [1, 4, 8, 13, 20] {
            let result = run(&grid, &rooms, &people(n), &occupied, seed);
            let eligible = eligible_cells(&grid, kitchen, &occupied).len();

            assert_eq!(result.placements.len(), eligible.min(n));
            assert_eq!(result.placements.len() + result.unplaced.len(), n);

            let mut seen = HashSet::new();
            for p in &result.placements {
                let c = p.coord();
                assert!(kitchen.contains(c), "seed {seed}: {c} outside kitchen");
                assert!(!occupied.contains(&c), "seed {seed}: {c} was occupied");
                assert_eq!(grid.get(c), Some(Cell::KitchenFloor));
                assert!(seen.insert(c), "seed {seed}: {c} placed twice");
            }
        }
    }
}

#[test]
fn grid_copy_differs_only_at_placements() {
    let (grid, rooms) = house();
    let before = grid.clone();
    for seed in 0..20 {
        let result = run(&grid, &rooms, &people(7), &OccupiedSet::new(), seed);
        assert_eq!(grid, before, "input grid must not change");

        let mut changed = grid.diff(&result.grid);
        changed.sort();
        let mut placed: Vec<Coord> = result.placements.iter().map(|p| p.coord()).collect();
        placed.sort();
        assert_eq!(changed, placed);
        for p in &result.placements {
            assert_eq!(result.grid.get(p.coord()), Some(p.dish.dish_cell()));
        }
    }
}

#[test]
fn dish_counts_bounded_by_preference_counts() {
    let (grid, rooms) = house();
    for seed in 0..30 {
        // 15 eligible kitchen cells: 12 fits, 18 does not.
        for n in [12, 18] {
            let result = run(&grid, &rooms, &people(n), &OccupiedSet::new(), seed);
            let summary = summarize(&result.preferences, &result.placements);
            assert!(summary.vegan_dishes_count <= summary.vegan_people_count);
            assert!(summary.non_vegetarian_dishes_count <= summary.non_vegetarian_people_count);
            if result.all_placed() {
                assert_eq!(summary.vegan_dishes_count, summary.vegan_people_count);
                assert_eq!(
                    summary.non_vegetarian_dishes_count,
                    summary.non_vegetarian_people_count
                );
            }
        }
    }
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn three_cells_five_people_degrades_without_error() {
    let (grid, rooms) = house();
    let keep = [Coord::new(2, 1), Coord::new(3, 5), Coord::new(4, 2)];
    let occupied = occupy_all_but(&grid, &rooms[&'K'], &keep);

    let result = run(&grid, &rooms, &people(5), &occupied, 9);
    assert_eq!(result.placements.len(), 3);
    assert_eq!(result.unplaced.len(), 2);
    assert!(!result.all_placed());
    assert_eq!(result.preferences.len(), 5);
}

#[test]
fn zero_people_changes_nothing() {
    let (grid, rooms) = house();
    let result = run(&grid, &rooms, &[], &OccupiedSet::new(), 1);
    assert!(result.preferences.is_empty());
    assert!(result.placements.is_empty());
    assert_eq!(result.grid, grid);
}

#[test]
fn four_people_four_cells_fills_them_all() {
    let (grid, rooms) = house();
    let keep = [
        Coord::new(2, 2),
        Coord::new(2, 5),
        Coord::new(3, 1),
        Coord::new(4, 4),
    ];
    let occupied = occupy_all_but(&grid, &rooms[&'K'], &keep);

    for seed in 0..20 {
        let result = run(&grid, &rooms, &people(4), &occupied, seed);
        assert_eq!(result.placements.len(), 4);
        let placed: HashSet<Coord> = result.placements.iter().map(|p| p.coord()).collect();
        let expected: HashSet<Coord> = keep.iter().copied().collect();
        assert_eq!(placed, expected);
        assert!(count_preference(&result.preferences, DietaryPreference::Vegan) >= 1);
        assert!(count_preference(&result.preferences, DietaryPreference::NonVegetarian) >= 1);
    }
}

#[test]
fn report_renders_for_full_run() {
    let (grid, rooms) = house();
    let occupants = people(6);
    let result = run(&grid, &rooms, &occupants, &OccupiedSet::new(), 42);
    let report = render_report(&result.preferences, &result.placements, &occupants);

    assert!(report.contains("Total People: 6"));
    assert_eq!(report.matches("dietary ").count(), 6);
}
