//! Game configuration

use crate::board::FOUR_TILE_CHANCE;
use serde::{Deserialize, Serialize};

/// Game configuration with all engine parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Random seed for tile spawning (None = random)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Probability that a spawned tile is a 4 (default: 0.1)
    #[serde(default = "default_four_tile_chance")]
    pub four_tile_chance: f32,

    /// Tiles placed on a fresh or reset board (default: 2)
    #[serde(default = "default_initial_tiles")]
    pub initial_tiles: u8,
}

fn default_four_tile_chance() -> f32 {
    FOUR_TILE_CHANCE
}

fn default_initial_tiles() -> u8 {
    2
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            four_tile_chance: FOUR_TILE_CHANCE,
            initial_tiles: 2,
        }
    }
}

impl GameConfig {
    /// Create a config for a reproducible game
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
