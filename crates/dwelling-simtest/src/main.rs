//! Dwelling Headless Simulation Harness
//!
//! Builds a sample house, places occupants, generates dishes and prints the
//! dietary report, then sweeps the dish generator over many seeds and
//! checks its invariants. Runs entirely in-process, stdout only.
//!
//! Usage:
//!   cargo run -p dwelling-simtest
//!   cargo run -p dwelling-simtest -- --seed 7 --people 8 --verbose
//!   cargo run -p dwelling-simtest -- --json

use std::collections::HashSet;

use dwelling_logic::config::DishConfig;
use dwelling_logic::constants::room_keys;
use dwelling_logic::dishes::{generate_dishes_and_preferences, DishGeneration};
use dwelling_logic::eligibility::eligible_cells;
use dwelling_logic::grid::{Cell, Coord, Grid, OccupiedSet, RoomLayout, RoomRegion};
use dwelling_logic::preferences::{count_preference, DietaryPreference};
use dwelling_logic::summary::{render_report, summarize};
use dwelling_logic::validation::{validate_inputs, Severity};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DEFAULT_PEOPLE: usize = 8;
const SWEEP_SEEDS: u64 = 200;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Args {
    seed: Option<u64>,
    people: usize,
    verbose: bool,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .and_then(|v| v.parse::<u64>().ok())
    };
    Args {
        seed: value_of("--seed"),
        people: value_of("--people").map_or(DEFAULT_PEOPLE, |n| n as usize),
        verbose: args.iter().any(|a| a == "--verbose"),
        json: args.iter().any(|a| a == "--json"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();
    let config = DishConfig {
        seed: args.seed,
        ..DishConfig::default()
    };

    println!("=== Dwelling Dish Harness ===\n");

    // 1. Sample run
    let (grid, rooms) = sample_house();
    let mut rng = config.rng();
    let people = place_people(&grid, &rooms, args.people, &mut rng);
    let occupied: OccupiedSet = people.iter().copied().collect();

    for issue in validate_inputs(&grid, &rooms, &people, &config) {
        let level = match issue.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        println!("[{}] {}: {}", level, issue.category, issue.message);
    }

    let result = match generate_dishes_and_preferences(
        &grid, &rooms, &people, &occupied, &config, &mut rng,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Dish generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        let summary = summarize(&result.preferences, &result.placements);
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("JSON encode error: {}", e),
        }
    } else {
        println!("{}", overlay_people(&result.grid, &people));
        print!(
            "{}",
            render_report(&result.preferences, &result.placements, &people)
        );
        if !result.all_placed() {
            println!(
                "\nWarning: {} dishes could not be placed",
                result.unplaced.len()
            );
        }
    }

    // 2. Invariant sweep
    println!();
    let results = sweep_invariants(&grid, &rooms);

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Sample layout ───────────────────────────────────────────────────────

/// A 10×16 house: kitchen and living room on top, bedroom and bathroom
/// below. Counters line the top of the kitchen with a fridge at the end.
fn sample_house() -> (Grid, RoomLayout) {
    let mut grid = Grid::new(10, 16, Cell::Wall);
    let mut rooms = RoomLayout::new();

    let kitchen = RoomRegion::new(1..5, 1..7);
    let living = RoomRegion::new(1..5, 8..15);
    let bedroom = RoomRegion::new(6..9, 1..7);
    let bathroom = RoomRegion::new(6..9, 8..11);

    grid.fill_region(&kitchen, Cell::KitchenFloor);
    grid.fill_region(&living, Cell::Other(room_keys::LIVING_ROOM));
    grid.fill_region(&bedroom, Cell::Other(room_keys::BEDROOM));
    grid.fill_region(&bathroom, Cell::Other(room_keys::BATHROOM));

    for col in 1..6 {
        grid.set(Coord::new(1, col), Cell::Counter);
    }
    grid.set(Coord::new(1, 6), Cell::Fridge);

    for door in [Coord::new(3, 7), Coord::new(5, 3), Coord::new(7, 7), Coord::new(9, 12)] {
        grid.set(door, Cell::Door);
    }

    rooms.insert(room_keys::KITCHEN, kitchen);
    rooms.insert(room_keys::LIVING_ROOM, living);
    rooms.insert(room_keys::BEDROOM, bedroom);
    rooms.insert(room_keys::BATHROOM, bathroom);
    (grid, rooms)
}

/// Pick `count` distinct walkable cells (any room floor) for occupants.
fn place_people(grid: &Grid, rooms: &RoomLayout, count: usize, rng: &mut impl Rng) -> Vec<Coord> {
    let mut free: Vec<Coord> = rooms
        .values()
        .flat_map(|r| r.cells())
        .filter(|&c| matches!(grid.get(c), Some(Cell::KitchenFloor | Cell::Other(_))))
        .collect();
    free.sort();
    free.dedup();
    free.shuffle(rng);
    free.truncate(count);
    free
}

fn overlay_people(grid: &Grid, people: &[Coord]) -> String {
    let mut shown = grid.clone();
    for &p in people {
        shown.set(p, Cell::Occupant);
    }
    shown.render()
}

// ── Invariant sweep ─────────────────────────────────────────────────────

fn sweep_invariants(grid: &Grid, rooms: &RoomLayout) -> Vec<TestResult> {
    println!("--- Dish Generation Sweep ---");
    let mut results = Vec::new();
    let kitchen = &rooms[&room_keys::KITCHEN];
    let capacity = eligible_cells(grid, kitchen, &OccupiedSet::new()).len();

    let mut bad_keys = 0;
    let mut missing_label = 0;
    let mut bad_cells = 0;
    let mut duplicates = 0;
    let mut wrong_len = 0;
    let mut grid_leaks = 0;
    let mut over_count = 0;
    let mut runs = 0;

    for seed in 0..SWEEP_SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        // Crowd sizes range past kitchen capacity to exercise the shortfall path.
        let n = rng.gen_range(0..capacity + 6);
        let people = place_people(grid, rooms, n, &mut rng);
        let occupied: OccupiedSet = people.iter().copied().collect();
        let config = DishConfig::default();

        let result: DishGeneration = match generate_dishes_and_preferences(
            grid, rooms, &people, &occupied, &config, &mut rng,
        ) {
            Ok(r) => r,
            Err(e) => {
                results.push(TestResult {
                    name: format!("sweep_seed_{}", seed),
                    passed: false,
                    detail: e.to_string(),
                });
                continue;
            }
        };
        runs += 1;
        let n = people.len();

        let keys: Vec<usize> = result.preferences.keys().copied().collect();
        if keys != (1..=n).collect::<Vec<_>>() {
            bad_keys += 1;
        }

        let vegan = count_preference(&result.preferences, DietaryPreference::Vegan);
        let non_veg = count_preference(&result.preferences, DietaryPreference::NonVegetarian);
        if n >= 2 && (vegan == 0 || non_veg == 0) {
            missing_label += 1;
        }

        let mut seen = HashSet::new();
        for p in &result.placements {
            let c = p.coord();
            if !kitchen.contains(c)
                || occupied.contains(&c)
                || grid.get(c) != Some(Cell::KitchenFloor)
            {
                bad_cells += 1;
            }
            if !seen.insert(c) {
                duplicates += 1;
            }
        }

        let eligible = eligible_cells(grid, kitchen, &occupied).len();
        if result.placements.len() != eligible.min(n) {
            wrong_len += 1;
        }

        let changed: HashSet<Coord> = grid.diff(&result.grid).into_iter().collect();
        if changed != seen {
            grid_leaks += 1;
        }

        let summary = summarize(&result.preferences, &result.placements);
        if summary.vegan_dishes_count > summary.vegan_people_count
            || summary.non_vegetarian_dishes_count > summary.non_vegetarian_people_count
        {
            over_count += 1;
        }
    }

    log::info!("Sweep finished: {} runs over {} seeds", runs, SWEEP_SEEDS);

    let checks = [
        ("preference_keys", bad_keys, "keys are 1..=N"),
        ("both_labels", missing_label, "both labels present for N >= 2"),
        ("eligible_cells_only", bad_cells, "dishes on free kitchen floor"),
        ("distinct_cells", duplicates, "no cell holds two dishes"),
        ("placement_count", wrong_len, "placed = min(eligible, N)"),
        ("grid_changes", grid_leaks, "grid copy differs only at dishes"),
        ("dish_counts", over_count, "dishes never exceed preference counts"),
    ];
    for (name, failures, what) in checks {
        results.push(TestResult {
            name: name.into(),
            passed: failures == 0,
            detail: format!("{} ({} of {} runs failed)", what, failures, runs),
        });
    }

    results
}
