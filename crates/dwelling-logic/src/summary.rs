//! Summaries and reporting over a finished dish generation.
//!
//! Everything here is a read-only projection of a [`PreferenceMap`] and a
//! placement list. Note that the person → dish mapping in the report is
//! positional: the n-th person in number order is shown next to the n-th
//! placed dish. Dishes are not assigned to specific people, so that pairing
//! is for display only.

use serde::{Deserialize, Serialize};

use crate::grid::Coord;
use crate::placement::DishPlacement;
use crate::preferences::{people_with, DietaryPreference, PreferenceMap};

/// Aggregate counts and positions per preference category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishSummary {
    pub total_people: usize,
    pub vegan_people: Vec<usize>,
    pub non_vegetarian_people: Vec<usize>,
    pub vegan_people_count: usize,
    pub non_vegetarian_people_count: usize,
    pub vegan_dishes_positions: Vec<Coord>,
    pub non_vegetarian_dishes_positions: Vec<Coord>,
    pub vegan_dishes_count: usize,
    pub non_vegetarian_dishes_count: usize,
}

/// Positions of all dishes of one kind, in placement order.
pub fn dishes_by_type(placements: &[DishPlacement], dish: DietaryPreference) -> Vec<Coord> {
    placements
        .iter()
        .filter(|p| p.dish == dish)
        .map(DishPlacement::coord)
        .collect()
}

pub fn summarize(prefs: &PreferenceMap, placements: &[DishPlacement]) -> DishSummary {
    let vegan_people = people_with(prefs, DietaryPreference::Vegan);
    let non_vegetarian_people = people_with(prefs, DietaryPreference::NonVegetarian);
    let vegan_dishes = dishes_by_type(placements, DietaryPreference::Vegan);
    let non_veg_dishes = dishes_by_type(placements, DietaryPreference::NonVegetarian);

    DishSummary {
        total_people: prefs.len(),
        vegan_people_count: vegan_people.len(),
        non_vegetarian_people_count: non_vegetarian_people.len(),
        vegan_people,
        non_vegetarian_people,
        vegan_dishes_count: vegan_dishes.len(),
        non_vegetarian_dishes_count: non_veg_dishes.len(),
        vegan_dishes_positions: vegan_dishes,
        non_vegetarian_dishes_positions: non_veg_dishes,
    }
}

/// One display row of the person/dish listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPairing {
    pub person: usize,
    pub preference: DietaryPreference,
    /// Where the person stands; `None` when the number is past the occupant list.
    pub person_position: Option<Coord>,
    pub dish_position: Coord,
}

/// Zip people (number order) with placements (pairing order).
///
/// Stops at the shorter list. Position-based, display only.
pub fn positional_pairings(
    prefs: &PreferenceMap,
    placements: &[DishPlacement],
    people: &[Coord],
) -> Vec<DisplayPairing> {
    prefs
        .iter()
        .zip(placements)
        .map(|((&person, &preference), placement)| DisplayPairing {
            person,
            preference,
            person_position: person.checked_sub(1).and_then(|i| people.get(i)).copied(),
            dish_position: placement.coord(),
        })
        .collect()
}

fn format_people(people: &[usize]) -> String {
    let list: Vec<String> = people.iter().map(usize::to_string).collect();
    format!("[{}]", list.join(", "))
}

/// Human-readable report of preferences and dish positions.
pub fn render_report(
    prefs: &PreferenceMap,
    placements: &[DishPlacement],
    people: &[Coord],
) -> String {
    let summary = summarize(prefs, placements);
    let rule = "=".repeat(60);

    let mut lines = vec![
        String::new(),
        rule.clone(),
        "DISH GENERATION AND DIETARY PREFERENCES SUMMARY".to_string(),
        rule,
        String::new(),
        format!("Total People: {}", summary.total_people),
        format!(
            "Vegan People: {} - {}",
            summary.vegan_people_count,
            format_people(&summary.vegan_people)
        ),
        format!(
            "Non-Vegetarian People: {} - {}",
            summary.non_vegetarian_people_count,
            format_people(&summary.non_vegetarian_people)
        ),
        String::new(),
        "Person-Preference Mapping:".to_string(),
    ];

    lines.extend(
        positional_pairings(prefs, placements, people)
            .into_iter()
            .map(|pairing| {
                let at = pairing
                    .person_position
                    .map_or_else(|| "Unknown".to_string(), |c| c.to_string());
                format!(
                    "Person {} at {}: dietary {} at {}",
                    pairing.person, at, pairing.preference, pairing.dish_position
                )
            }),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
