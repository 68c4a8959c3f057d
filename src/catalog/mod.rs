//! Static enemy catalog
//!
//! Enemy templates are keyed by id in a JSON table. The catalog is read-only
//! after construction; every lookup stamps out an independent [`Enemy`] so
//! battle damage never leaks between encounters.

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::core::error::{GameError, Result};
use crate::entity::Enemy;

/// Default enemy table compiled into the binary
const BUILTIN_ENEMIES: &str = include_str!("../../data/enemies.json");

/// Raw enemy record as stored in the catalog file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_reward: i32,
}

impl EnemyTemplate {
    fn instantiate(&self) -> Enemy {
        Enemy::new(
            self.name.clone(),
            self.hp,
            self.attack,
            self.defense,
            self.xp_reward,
        )
    }
}

/// Read-only table of enemy templates keyed by id
#[derive(Debug, Clone)]
pub struct EnemyCatalog {
    /// BTreeMap keeps id iteration sorted, so random selection is
    /// reproducible for a given seed.
    templates: BTreeMap<String, EnemyTemplate>,
}

impl EnemyCatalog {
    /// The catalog shipped with the game
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_ENEMIES).expect("embedded enemy table is valid")
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: BTreeMap<String, EnemyTemplate> = serde_json::from_str(json)?;
        let catalog = Self { templates };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded enemy catalog from {} ({} entries)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(GameError::Catalog("catalog has no entries".into()));
        }
        for (id, template) in &self.templates {
            if template.hp <= 0 {
                return Err(GameError::Catalog(format!(
                    "enemy '{}' has non-positive hp {}",
                    id, template.hp
                )));
            }
            if template.attack < 0 || template.defense < 0 || template.xp_reward < 0 {
                return Err(GameError::Catalog(format!(
                    "enemy '{}' has negative stats",
                    id
                )));
            }
        }
        Ok(())
    }

    /// Instantiate the enemy with the given id
    pub fn get(&self, id: &str) -> Result<Enemy> {
        self.templates
            .get(id)
            .map(EnemyTemplate::instantiate)
            .ok_or_else(|| GameError::EnemyNotFound(id.to_string()))
    }

    /// Instantiate an enemy chosen uniformly at random
    pub fn random<R: Rng>(&self, rng: &mut R) -> Enemy {
        // Validation guarantees at least one entry
        let index = rng.gen_range(0..self.templates.len());
        let template = self
            .templates
            .values()
            .nth(index)
            .expect("index drawn within catalog bounds");
        template.instantiate()
    }

    /// Template ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for EnemyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
