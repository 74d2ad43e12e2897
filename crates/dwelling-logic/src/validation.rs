//! Input precondition checks for dish generation.
//!
//! Dish generation does not validate its inputs. Collaborators that build
//! layouts can run these checks first; each returns a list of problems
//! rather than failing on the first one.

use crate::config::DishConfig;
use crate::grid::{Coord, Grid, RoomLayout};

/// A precondition violation.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Check that every room region lies inside the grid and is non-empty.
pub fn check_regions_within_grid(grid: &Grid, rooms: &RoomLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (key, region) in rooms {
        if !region.fits_within(grid) {
            errors.push(ValidationError {
                category: "region_bounds",
                severity: Severity::Error,
                message: format!(
                    "Room '{}' spans rows {:?} cols {:?}, outside {}×{} grid",
                    key,
                    region.rows,
                    region.cols,
                    grid.rows(),
                    grid.cols()
                ),
            });
        } else if region.area() == 0 {
            errors.push(ValidationError {
                category: "region_bounds",
                severity: Severity::Warning,
                message: format!("Room '{}' is empty", key),
            });
        }
    }
    errors
}

/// Check that the configured kitchen region exists.
pub fn check_kitchen_present(rooms: &RoomLayout, config: &DishConfig) -> Vec<ValidationError> {
    if rooms.contains_key(&config.kitchen_key) {
        return Vec::new();
    }
    vec![ValidationError {
        category: "kitchen",
        severity: Severity::Error,
        message: format!("No room region for kitchen key '{}'", config.kitchen_key),
    }]
}

/// Check that every occupant stands inside the grid.
pub fn check_people_within_grid(grid: &Grid, people: &[Coord]) -> Vec<ValidationError> {
    people
        .iter()
        .enumerate()
        .filter(|(_, &coord)| grid.get(coord).is_none())
        .map(|(i, coord)| ValidationError {
            category: "occupant_bounds",
            severity: Severity::Error,
            message: format!("Person {} at {} is outside the grid", i + 1, coord),
        })
        .collect()
}

/// Run all input checks and return combined results.
pub fn validate_inputs(
    grid: &Grid,
    rooms: &RoomLayout,
    people: &[Coord],
    config: &DishConfig,
) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_kitchen_present(rooms, config));
    all.extend(check_regions_within_grid(grid, rooms));
    all.extend(check_people_within_grid(grid, people));
    all
}
