//! Dish generation configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::constants::room_keys;

/// Knobs for one dish generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishConfig {
    /// Room key of the region dishes are placed in.
    pub kitchen_key: char,
    /// Random seed (None = seed from entropy).
    pub seed: Option<u64>,
}

impl Default for DishConfig {
    fn default() -> Self {
        Self {
            kitchen_key: room_keys::KITCHEN,
            seed: None,
        }
    }
}

impl DishConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_kitchen_key(mut self, key: char) -> Self {
        self.kitchen_key = key;
        self
    }

    /// Fresh RNG for a run: seeded when `seed` is set, from entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
