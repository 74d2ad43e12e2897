//! Eligible cell scanning for dish placement.

use crate::grid::{Cell, Coord, Grid, OccupiedSet, RoomRegion};

/// Free kitchen-floor cells inside `region`, in row-major scan order.
///
/// A cell qualifies when it is inside the region, not in `occupied`, and
/// labeled exactly kitchen floor. Cells outside the grid never qualify.
pub fn eligible_cells(grid: &Grid, region: &RoomRegion, occupied: &OccupiedSet) -> Vec<Coord> {
    region
        .cells()
        .filter(|coord| !occupied.contains(coord))
        .filter(|&coord| grid.get(coord) == Some(Cell::KitchenFloor))
        .collect()
}
