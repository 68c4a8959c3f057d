//! Game configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{GameError, Result};

/// Configuration for the combat and progression rules
///
/// These values have been tuned so a fresh character survives the weaker
/// half of the enemy catalog and needs a few fights per level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === STARTING CHARACTER ===
    /// Maximum (and starting) HP of a new character
    pub starting_hp: i32,

    /// Attack stat of a new character
    pub starting_attack: i32,

    /// Defense stat of a new character
    ///
    /// At 4, the weakest enemies (attack 4-5) chip for 0-1 HP per round,
    /// so early fights are lost to attrition rather than single hits.
    pub starting_defense: i32,

    /// Potions in a new character's inventory
    pub starting_potions: u32,

    // === PROGRESSION ===
    /// XP needed to go from level 1 to level 2
    ///
    /// Thresholds grow linearly: `exp_base + (level - 1) * exp_step`.
    pub exp_base: i32,

    /// Additional XP needed per level beyond the first
    pub exp_step: i32,

    /// Max HP gained per level-up
    pub level_hp_gain: i32,

    /// Attack gained per level-up
    pub level_attack_gain: i32,

    /// Defense gained per level-up
    pub level_defense_gain: i32,

    // === ITEMS ===
    /// HP restored by one Potion (before the max-HP clamp)
    pub potion_heal: i32,

    // === FLEEING ===
    /// Flee rolls are uniform in `0..=flee_roll_max`
    pub flee_roll_max: u32,

    /// A flee succeeds when the roll is strictly greater than this
    ///
    /// With max 10 and threshold 5 that is 5 winning rolls out of 11,
    /// roughly a 45% escape chance.
    pub flee_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hp: 30,
            starting_attack: 7,
            starting_defense: 4,
            starting_potions: 2,

            exp_base: 20,
            exp_step: 15,
            level_hp_gain: 5,
            level_attack_gain: 2,
            level_defense_gain: 1,

            potion_heal: 15,

            flee_roll_max: 10,
            flee_threshold: 5,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file, falling back to defaults for
    /// missing keys
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate().map_err(GameError::Config)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.starting_hp <= 0 {
            return Err(format!("starting_hp ({}) must be positive", self.starting_hp));
        }

        if self.starting_attack < 0 || self.starting_defense < 0 {
            return Err("starting stats must be non-negative".into());
        }

        if self.exp_base <= 0 || self.exp_step < 0 {
            return Err(format!(
                "exp thresholds must grow: base {} step {}",
                self.exp_base, self.exp_step
            ));
        }

        if self.potion_heal <= 0 {
            return Err(format!("potion_heal ({}) must be positive", self.potion_heal));
        }

        // A threshold at or above the roll max would make fleeing impossible
        if self.flee_threshold >= self.flee_roll_max {
            return Err(format!(
                "flee_threshold ({}) must be below flee_roll_max ({})",
                self.flee_threshold, self.flee_roll_max
            ));
        }

        Ok(())
    }
}
