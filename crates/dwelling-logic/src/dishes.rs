//! Dish generation entry point.
//!
//! Assigns a dietary preference to every occupant, scans the kitchen for
//! free floor cells, and places one dish per occupant on a copy of the grid.
//! The caller keeps the original grid; the result owns the new one.

use rand::Rng;

use crate::config::DishConfig;
use crate::eligibility::eligible_cells;
use crate::grid::{Coord, Grid, OccupiedSet, RoomLayout};
use crate::placement::{place_dishes, DishPlacement};
use crate::preferences::{assign_preferences, count_preference, DietaryPreference, PreferenceMap};

/// Everything one generation run produces.
#[derive(Debug, Clone)]
pub struct DishGeneration {
    /// Copy of the input grid with dishes written in.
    pub grid: Grid,
    pub preferences: PreferenceMap,
    /// Placed dishes in pairing order. Shorter than the occupant list when
    /// the kitchen ran out of free floor.
    pub placements: Vec<DishPlacement>,
    /// Dishes that found no cell.
    pub unplaced: Vec<DietaryPreference>,
}

impl DishGeneration {
    /// True when every occupant's dish was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Generate preferences for `people` and place their dishes in the kitchen.
///
/// Fails only when `rooms` has no region for `config.kitchen_key`.
pub fn generate_dishes_and_preferences(
    grid: &Grid,
    rooms: &RoomLayout,
    people: &[Coord],
    occupied: &OccupiedSet,
    config: &DishConfig,
    rng: &mut impl Rng,
) -> Result<DishGeneration, DishError> {
    let kitchen = rooms
        .get(&config.kitchen_key)
        .ok_or(DishError::MissingRegion {
            key: config.kitchen_key,
        })?;

    let preferences = assign_preferences(people.len(), rng);
    let cells = eligible_cells(grid, kitchen, occupied);

    let vegan = count_preference(&preferences, DietaryPreference::Vegan);
    let non_veg = count_preference(&preferences, DietaryPreference::NonVegetarian);
    let outcome = place_dishes(grid, cells, vegan, non_veg, rng);

    log::info!(
        "Placed {}/{} dishes ({} vegan, {} non-vegetarian people)",
        outcome.placements.len(),
        people.len(),
        vegan,
        non_veg
    );

    Ok(DishGeneration {
        grid: outcome.grid,
        preferences,
        placements: outcome.placements,
        unplaced: outcome.unplaced,
    })
}

/// Same as [`generate_dishes_and_preferences`], drawing from `config.rng()`.
pub fn generate_with_config(
    grid: &Grid,
    rooms: &RoomLayout,
    people: &[Coord],
    occupied: &OccupiedSet,
    config: &DishConfig,
) -> Result<DishGeneration, DishError> {
    let mut rng = config.rng();
    generate_dishes_and_preferences(grid, rooms, people, occupied, config, &mut rng)
}

/// Errors from dish generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DishError {
    MissingRegion { key: char },
}

impl std::fmt::Display for DishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DishError::MissingRegion { key } => {
                write!(f, "Room layout has no region for key '{}'", key)
            }
        }
    }
}

impl std::error::Error for DishError {}
