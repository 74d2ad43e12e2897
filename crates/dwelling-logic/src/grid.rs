//! Layout grid — 2D array of cell labels plus rectangular room regions.
//!
//! The grid is row-major and owned. Callers that need a modified layout
//! clone it; nothing in this crate mutates a grid it was only lent.

use std::collections::{BTreeMap, HashSet};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::cell_codes;

/// A single labeled cell of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Door,
    Counter,
    Fridge,
    KitchenFloor,
    Occupant,
    DishVegan,
    DishNonVegan,
    /// Any other room or furniture code, kept verbatim.
    Other(char),
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        match c {
            cell_codes::WALL => Cell::Wall,
            cell_codes::DOOR => Cell::Door,
            cell_codes::COUNTER => Cell::Counter,
            cell_codes::FRIDGE => Cell::Fridge,
            cell_codes::KITCHEN_FLOOR => Cell::KitchenFloor,
            cell_codes::OCCUPANT => Cell::Occupant,
            cell_codes::DISH_VEGAN => Cell::DishVegan,
            cell_codes::DISH_NON_VEGAN => Cell::DishNonVegan,
            other => Cell::Other(other),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Wall => cell_codes::WALL,
            Cell::Door => cell_codes::DOOR,
            Cell::Counter => cell_codes::COUNTER,
            Cell::Fridge => cell_codes::FRIDGE,
            Cell::KitchenFloor => cell_codes::KITCHEN_FLOOR,
            Cell::Occupant => cell_codes::OCCUPANT,
            Cell::DishVegan => cell_codes::DISH_VEGAN,
            Cell::DishNonVegan => cell_codes::DISH_NON_VEGAN,
            Cell::Other(c) => c,
        }
    }
}

/// Grid coordinate, (row, col).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Coordinates already claimed by occupants, furniture, etc.
pub type OccupiedSet = HashSet<Coord>;

/// Room key → region. Ordered so reports and validators are stable.
pub type RoomLayout = BTreeMap<char, RoomRegion>;

/// Rectangular sub-range of the grid. Both ranges are half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRegion {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl RoomRegion {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.rows.contains(&coord.row) && self.cols.contains(&coord.col)
    }

    pub fn area(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Every coordinate in the region, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rows
            .clone()
            .flat_map(move |row| self.cols.clone().map(move |col| Coord::new(row, col)))
    }

    /// True when the whole region lies inside the grid.
    pub fn fits_within(&self, grid: &Grid) -> bool {
        self.rows.end <= grid.rows() && self.cols.end <= grid.cols()
    }
}

/// Owned, rectangular layout grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Parse a grid from text rows, one character per cell.
    pub fn from_rows(lines: &[&str]) -> Result<Self, GridError> {
        let first = lines.first().ok_or(GridError::Empty)?;
        let cols = first.chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            cells.extend(line.chars().map(Cell::from_char));
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.row * self.cols + coord.col)
    }

    /// Cell at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite one cell. Returns false (and does nothing) outside the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill the in-bounds part of a region with one label.
    pub fn fill_region(&mut self, region: &RoomRegion, cell: Cell) {
        for coord in region.cells() {
            self.set(coord, cell);
        }
    }

    /// Coordinates whose labels differ between two equally sized grids.
    pub fn diff(&self, other: &Grid) -> Vec<Coord> {
        let rows = self.rows.min(other.rows);
        let cols = self.cols.min(other.cols);
        let mut changed = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let coord = Coord::new(row, col);
                if self.get(coord) != other.get(coord) {
                    changed.push(coord);
                }
            }
        }
        changed
    }

    /// One text line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols.max(1)) {
            out.extend(row.iter().map(|c| c.to_char()));
            out.push('\n');
        }
        out
    }
}

/// Errors from building a grid out of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::Empty => write!(f, "Grid has no rows or no columns"),
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for GridError {}
