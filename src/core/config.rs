//! Colony configuration with documented constants
//!
//! All seasonal probabilities and thresholds are collected here with
//! explanations of their purpose. Pack-internal formulas (level weights,
//! litter bounds) live in `pack::constants`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{PackError, Result};

/// Configuration for the seasonal colony driver
///
/// The defaults reproduce the reference pacing: a mating season every
/// twelve seasons, rare transformations, and splits once a pack grows
/// past fifteen members.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Seed for the colony's random source
    pub seed: u64,

    // === SPLITTING ===
    /// A pack splits only when it has strictly more members than this
    pub split_threshold: usize,

    /// Minimum level for a non-alpha adult to lead a split-off pack
    pub alpha_candidate_level: f32,

    // === MATING ===
    /// Every pack reproduces when `season % mating_interval == 0`
    pub mating_interval: u32,

    // === HIERARCHY EVOLUTION ===
    /// Number of domination rolls per pack per season
    pub domination_attempts: u32,

    /// Probability that each roll turns into an actual attempt
    pub domination_chance: f64,

    // === AGING ===
    /// Probability that a werewolf ages one year in a season
    pub aging_chance: f64,

    // === HOWLING ===
    /// Probability that a werewolf howls in a season
    pub howl_chance: f64,

    // === TRANSFORMATION ===
    /// Probability that a werewolf in wolf form turns human in a season
    pub transform_chance: f64,

    /// Pre-transform level at or above which a transformed werewolf may leave
    pub leave_level: f32,

    /// Probability that an eligible transformed werewolf leaves its pack
    pub leave_chance: f64,

    // === GENERATION ===
    /// Packs created when seeding a fresh colony
    pub starting_packs: usize,

    /// Members (alphas included) per seeded pack
    pub starting_pack_size: usize,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            seed: 42,

            split_threshold: 15,
            alpha_candidate_level: 30.0,

            mating_interval: 12,

            domination_attempts: 3,
            domination_chance: 0.3,

            aging_chance: 0.1,

            howl_chance: 0.2,

            transform_chance: 0.05,
            leave_level: 50.0,
            leave_chance: 0.3,

            starting_packs: 3,
            starting_pack_size: 10,
        }
    }
}

impl ColonyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ColonyConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.mating_interval == 0 {
            return Err(PackError::InvalidConfig(
                "mating_interval must be at least 1".into(),
            ));
        }

        let chances = [
            ("domination_chance", self.domination_chance),
            ("aging_chance", self.aging_chance),
            ("howl_chance", self.howl_chance),
            ("transform_chance", self.transform_chance),
            ("leave_chance", self.leave_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(PackError::InvalidConfig(format!(
                    "{} ({}) must be within 0.0..=1.0",
                    name, value
                )));
            }
        }

        // Seeded packs need room for an alpha pair
        if self.starting_packs > 0 && self.starting_pack_size < 2 {
            return Err(PackError::InvalidConfig(format!(
                "starting_pack_size ({}) must be at least 2",
                self.starting_pack_size
            )));
        }

        Ok(())
    }
}
