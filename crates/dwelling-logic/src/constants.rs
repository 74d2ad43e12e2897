//! Layout constants — cell label characters and room keys.
//!
//! Plain `char` constants so collaborators that build grids from text
//! (house generators, test fixtures) share one vocabulary.

pub mod cell_codes {
    // Structure
    pub const WALL: char = 'W';
    pub const DOOR: char = 'd';
    pub const COUNTER: char = 'k';
    pub const FRIDGE: char = 'F';
    // Floors
    pub const KITCHEN_FLOOR: char = 'K';
    pub const FLOOR: char = '.';
    // Entities
    pub const OCCUPANT: char = 'P';
    pub const DISH_VEGAN: char = 'V';
    pub const DISH_NON_VEGAN: char = 'N';
}

pub mod room_keys {
    pub const KITCHEN: char = 'K';
    pub const LIVING_ROOM: char = 'L';
    pub const BEDROOM: char = 'B';
    pub const BATHROOM: char = 'T';
}

/// Returned by preference lookups for person numbers with no entry.
pub const UNKNOWN_PREFERENCE: &str = "unknown";
