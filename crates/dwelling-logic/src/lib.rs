//! Pure dwelling logic: dietary preferences and kitchen dish placement.
//!
//! Functions take plain data (a layout grid, room regions, occupant
//! coordinates) and return new owned results. Nothing here touches files,
//! the network or global random state; every random choice draws from an
//! RNG the caller passes in.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Cell label characters, default kitchen key, sentinels |
//! | [`grid`] | Layout grid, coordinates, rectangular room regions |
//! | [`preferences`] | Balanced vegan / non-vegetarian allocation |
//! | [`eligibility`] | Free kitchen-floor cell scanning |
//! | [`placement`] | Random dish-to-cell matching on a grid copy |
//! | [`dishes`] | Entry point tying allocation, scanning and placement together |
//! | [`config`] | Generation config and RNG construction |
//! | [`validation`] | Optional input precondition checks |
//! | [`summary`] | Aggregate counts, lookups and the text report |

pub mod config;
pub mod constants;
pub mod dishes;
pub mod eligibility;
pub mod grid;
pub mod placement;
pub mod preferences;
pub mod summary;
pub mod validation;
