//! Dish placement — random matching of dishes to eligible cells.
//!
//! Cells and dishes are shuffled independently, then paired by index. The
//! input grid is only read; dishes are written into a clone that the
//! outcome owns. Running out of cells is not an error: the leftover dishes
//! are reported in [`PlacementOutcome::unplaced`].

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid};
use crate::preferences::DietaryPreference;

/// A dish written into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DishPlacement {
    pub row: usize,
    pub col: usize,
    pub dish: DietaryPreference,
}

impl DishPlacement {
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Result of one placement pass.
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    /// Copy of the input grid with the dishes written in.
    pub grid: Grid,
    /// Placed dishes, in pairing order.
    pub placements: Vec<DishPlacement>,
    /// Dishes that found no cell, in shuffled order.
    pub unplaced: Vec<DietaryPreference>,
}

impl PlacementOutcome {
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Shuffled dish multiset: `vegan` Vegan dishes and `non_veg` NonVegetarian.
pub fn dish_items(vegan: usize, non_veg: usize, rng: &mut impl Rng) -> Vec<DietaryPreference> {
    let mut items = Vec::with_capacity(vegan + non_veg);
    items.extend(std::iter::repeat(DietaryPreference::Vegan).take(vegan));
    items.extend(std::iter::repeat(DietaryPreference::NonVegetarian).take(non_veg));
    items.shuffle(rng);
    items
}

/// Place `vegan + non_veg` dishes on a copy of `grid`, one per cell.
///
/// `cells` must be pairwise distinct (as [`crate::eligibility::eligible_cells`]
/// produces them). Places `min(cells.len(), vegan + non_veg)` dishes.
pub fn place_dishes(
    grid: &Grid,
    mut cells: Vec<Coord>,
    vegan: usize,
    non_veg: usize,
    rng: &mut impl Rng,
) -> PlacementOutcome {
    let wanted = vegan + non_veg;
    if cells.len() < wanted {
        log::warn!(
            "Only {} valid positions found in kitchen for {} dishes",
            cells.len(),
            wanted
        );
    }

    cells.shuffle(rng);
    let items = dish_items(vegan, non_veg, rng);

    let mut out = grid.clone();
    let mut placements = Vec::with_capacity(wanted.min(cells.len()));
    let mut unplaced = Vec::new();

    for (i, &dish) in items.iter().enumerate() {
        match cells.get(i) {
            Some(&coord) => {
                out.set(coord, dish.dish_cell());
                placements.push(DishPlacement {
                    row: coord.row,
                    col: coord.col,
                    dish,
                });
            }
            None => {
                log::debug!("Could not place dish {} ({}): no free cell", i + 1, dish);
                unplaced.push(dish);
            }
        }
    }

    PlacementOutcome {
        grid: out,
        placements,
        unplaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn floor(rows: usize, cols: usize) -> (Grid, Vec<Coord>) {
        let grid = Grid::new(rows, cols, Cell::KitchenFloor);
        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Coord::new(r, c)))
            .collect();
        (grid, cells)
    }

    #[test]
    fn test_dish_items_has_exact_counts() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = dish_items(4, 2, &mut rng);
        assert_eq!(items.len(), 6);
        assert_eq!(
            items
                .iter()
                .filter(|&&d| d == DietaryPreference::Vegan)
                .count(),
            4
        );
    }

    #[test]
    fn test_places_every_dish_when_room_suffices() {
        let (grid, cells) = floor(3, 4);
        let mut rng = StdRng::seed_from_u64(11);
        let outcome = place_dishes(&grid, cells.clone(), 3, 2, &mut rng);

        assert!(outcome.is_complete());
        assert_eq!(outcome.placements.len(), 5);
        let coords: HashSet<Coord> = outcome.placements.iter().map(|p| p.coord()).collect();
        assert_eq!(coords.len(), 5);
        assert!(coords.iter().all(|c| cells.contains(c)));
        let vegan = outcome
            .placements
            .iter()
            .filter(|p| p.dish == DietaryPreference::Vegan)
            .count();
        assert_eq!(vegan, 3);
    }

    #[test]
    fn test_grid_copy_changes_only_at_placements() {
        let (grid, cells) = floor(4, 4);
        let before = grid.clone();
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = place_dishes(&grid, cells, 2, 2, &mut rng);

        assert_eq!(grid, before);
        let mut changed = grid.diff(&outcome.grid);
        changed.sort();
        let mut placed: Vec<Coord> = outcome.placements.iter().map(|p| p.coord()).collect();
        placed.sort();
        assert_eq!(changed, placed);
        for p in &outcome.placements {
            assert_eq!(outcome.grid.get(p.coord()), Some(p.dish.dish_cell()));
        }
    }

    #[test]
    fn test_shortfall_is_reported_not_fatal() {
        let (grid, cells) = floor(1, 3);
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = place_dishes(&grid, cells, 3, 2, &mut rng);

        assert_eq!(outcome.placements.len(), 3);
        assert_eq!(outcome.unplaced.len(), 2);
        assert!(!outcome.is_complete());
    }

    #[test]
    fn test_surplus_cells_stay_untouched() {
        let (grid, cells) = floor(5, 5);
        let mut rng = StdRng::seed_from_u64(2);
        let outcome = place_dishes(&grid, cells, 1, 1, &mut rng);
        assert_eq!(outcome.placements.len(), 2);
        assert_eq!(grid.diff(&outcome.grid).len(), 2);
    }

    #[test]
    fn test_placement_serializes_dish_name() {
        let placement = DishPlacement {
            row: 1,
            col: 2,
            dish: DietaryPreference::NonVegetarian,
        };
        let json = serde_json::to_string(&placement).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2,"dish":"non-vegetarian"}"#);

        let back: DishPlacement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, placement);
    }

    #[test]
    fn test_no_dishes_no_changes() {
        let (grid, cells) = floor(2, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = place_dishes(&grid, cells, 0, 0, &mut rng);
        assert!(outcome.placements.is_empty());
        assert_eq!(outcome.grid, grid);
    }
}
