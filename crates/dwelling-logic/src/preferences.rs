//! Dietary preference allocation — balanced binary labels for N occupants.
//!
//! The first half of the occupants (by person number) pick uniformly at
//! random. Every later occupant first checks the running counts: a label
//! nobody holds yet is forced, otherwise the pick is uniform again. For any
//! N >= 2 both labels end up present at least once. There is no stronger
//! balance guarantee than that.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_PREFERENCE;
use crate::grid::Cell;

/// One of exactly two dietary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    Vegan,
    NonVegetarian,
}

impl DietaryPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::NonVegetarian => "non-vegetarian",
        }
    }

    /// Grid label of the matching dish.
    pub fn dish_cell(self) -> Cell {
        match self {
            DietaryPreference::Vegan => Cell::DishVegan,
            DietaryPreference::NonVegetarian => Cell::DishNonVegan,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            DietaryPreference::Vegan
        } else {
            DietaryPreference::NonVegetarian
        }
    }
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person number (1-based) → preference. Iterates in person-number order.
pub type PreferenceMap = BTreeMap<usize, DietaryPreference>;

/// Assign a preference to persons `1..=count`.
///
/// When both running counts are zero in the balancing half (only possible
/// for `count == 1`), Vegan wins the tie, so a single occupant is always
/// Vegan.
pub fn assign_preferences(count: usize, rng: &mut impl Rng) -> PreferenceMap {
    let mut prefs = PreferenceMap::new();
    let free_choices = count / 2;
    let mut vegan = 0usize;
    let mut non_veg = 0usize;

    for person in 1..=count {
        let pref = if person <= free_choices {
            DietaryPreference::random(rng)
        } else if vegan == 0 {
            DietaryPreference::Vegan
        } else if non_veg == 0 {
            DietaryPreference::NonVegetarian
        } else {
            DietaryPreference::random(rng)
        };

        match pref {
            DietaryPreference::Vegan => vegan += 1,
            DietaryPreference::NonVegetarian => non_veg += 1,
        }
        prefs.insert(person, pref);
    }

    prefs
}

/// Number of people holding `pref`.
pub fn count_preference(prefs: &PreferenceMap, pref: DietaryPreference) -> usize {
    prefs.values().filter(|&&p| p == pref).count()
}

/// Person numbers holding `pref`, ascending.
pub fn people_with(prefs: &PreferenceMap, pref: DietaryPreference) -> Vec<usize> {
    prefs
        .iter()
        .filter(|(_, &p)| p == pref)
        .map(|(&person, _)| person)
        .collect()
}

pub fn preference_of(person: usize, prefs: &PreferenceMap) -> Option<DietaryPreference> {
    prefs.get(&person).copied()
}

/// Display name of a person's preference, or `"unknown"` when absent.
pub fn preference_label(person: usize, prefs: &PreferenceMap) -> &'static str {
    preference_of(person, prefs).map_or(UNKNOWN_PREFERENCE, DietaryPreference::as_str)
}
