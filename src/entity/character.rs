//! The player character: stats, inventory, and leveling
//!
//! One character is created at session start and mutated in place for the
//! whole run. Leveling fully heals; thresholds grow linearly per level.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::GameConfig;
use crate::entity::combatant::{resolve_damage, Combatant};

/// Player-controlled combatant with inventory and experience
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub level: i32,
    pub exp: i32,
    /// Item name -> quantity. BTreeMap so menu listings are stable.
    pub inventory: BTreeMap<String, u32>,
}

impl Character {
    /// Create a fresh level-1 character from the configured starting stats
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        let mut inventory = BTreeMap::new();
        if config.starting_potions > 0 {
            inventory.insert("Potion".to_string(), config.starting_potions);
        }

        Self {
            name: name.into(),
            hp: config.starting_hp,
            max_hp: config.starting_hp,
            attack: config.starting_attack,
            defense: config.starting_defense,
            level: 1,
            exp: 0,
            inventory,
        }
    }

    /// Restore HP, clamped to max. Returns the HP actually gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let gain = amount.min(self.max_hp - self.hp).max(0);
        self.hp += gain;
        gain
    }

    /// XP required to advance from the current level
    pub fn exp_to_next_level(&self, config: &GameConfig) -> i32 {
        config.exp_base + (self.level - 1) * config.exp_step
    }

    /// Award XP, applying as many level-ups as the total allows
    ///
    /// Each level-up costs the current threshold, raises max HP / attack /
    /// defense by the configured gains, and fully heals. Returns whether at
    /// least one level-up occurred.
    pub fn gain_exp(&mut self, amount: i32, config: &GameConfig) -> bool {
        self.exp += amount;
        let mut leveled = false;

        while self.exp >= self.exp_to_next_level(config) {
            self.exp -= self.exp_to_next_level(config);
            self.level += 1;
            self.max_hp += config.level_hp_gain;
            self.attack += config.level_attack_gain;
            self.defense += config.level_defense_gain;
            self.hp = self.max_hp;
            leveled = true;
        }

        leveled
    }

    /// Add items to the inventory, creating the entry if absent
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32) {
        *self.inventory.entry(name.into()).or_insert(0) += quantity;
    }

    /// Quantity held of an item (absent entries count as zero)
    pub fn quantity(&self, name: &str) -> u32 {
        self.inventory.get(name).copied().unwrap_or(0)
    }

    /// Items currently held with a non-zero quantity, in name order
    pub fn held_items(&self) -> impl Iterator<Item = (&str, u32)> {
        self.inventory
            .iter()
            .filter(|(_, &qty)| qty > 0)
            .map(|(name, &qty)| (name.as_str(), qty))
    }
}

impl Combatant for Character {
    fn is_alive(&self) -> bool {
        self.hp > 0
    }

    fn take_damage(&mut self, raw: i32) -> i32 {
        let (hp, dealt) = resolve_damage(self.hp, self.defense, raw);
        self.hp = hp;
        dealt
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: HP {}/{}, ATK {}, DEF {}, EXP {}, Level {}",
            self.name, self.hp, self.max_hp, self.attack, self.defense, self.exp, self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> (Character, GameConfig) {
        let config = GameConfig::default();
        (Character::new("Hero", &config), config)
    }

    #[test]
    fn test_new_character_starting_state() {
        let (hero, _) = hero();
        assert_eq!(hero.hp, 30);
        assert_eq!(hero.max_hp, 30);
        assert_eq!(hero.attack, 7);
        assert_eq!(hero.defense, 4);
        assert_eq!(hero.level, 1);
        assert_eq!(hero.quantity("Potion"), 2);
    }

    #[test]
    fn test_heal_clamps_at_max_hp() {
        let (mut hero, _) = hero();
        hero.hp = 25;
        assert_eq!(hero.heal(15), 5);
        assert_eq!(hero.hp, 30);
    }

    #[test]
    fn test_heal_reports_actual_gain() {
        let (mut hero, _) = hero();
        hero.hp = 10;
        assert_eq!(hero.heal(15), 15);
        assert_eq!(hero.hp, 25);
    }

    #[test]
    fn test_heal_at_full_hp_is_zero() {
        let (mut hero, _) = hero();
        assert_eq!(hero.heal(15), 0);
        assert_eq!(hero.hp, 30);
    }

    #[test]
    fn test_exp_threshold_formula() {
        let (mut hero, config) = hero();
        assert_eq!(hero.exp_to_next_level(&config), 20);
        hero.level = 5;
        assert_eq!(hero.exp_to_next_level(&config), 80);
    }

    #[test]
    fn test_exact_threshold_levels_once() {
        let (mut hero, config) = hero();
        hero.hp = 12;

        assert!(hero.gain_exp(20, &config));

        assert_eq!(hero.level, 2);
        assert_eq!(hero.exp, 0);
        assert_eq!(hero.max_hp, 35);
        assert_eq!(hero.hp, 35); // full heal on level-up
        assert_eq!(hero.attack, 9);
        assert_eq!(hero.defense, 5);
    }

    #[test]
    fn test_large_reward_levels_twice() {
        let (mut hero, config) = hero();

        // 20 to reach level 2, 35 more to reach level 3
        assert!(hero.gain_exp(55, &config));

        assert_eq!(hero.level, 3);
        assert_eq!(hero.exp, 0);
        assert_eq!(hero.max_hp, 40);
        assert_eq!(hero.attack, 11);
        assert_eq!(hero.defense, 6);
    }

    #[test]
    fn test_below_threshold_accumulates() {
        let (mut hero, config) = hero();
        assert!(!hero.gain_exp(19, &config));
        assert_eq!(hero.level, 1);
        assert_eq!(hero.exp, 19);
    }

    #[test]
    fn test_add_item_creates_and_increments() {
        let (mut hero, _) = hero();
        hero.add_item("Elixir", 1);
        hero.add_item("Elixir", 2);
        assert_eq!(hero.quantity("Elixir"), 3);
        assert_eq!(hero.quantity("Unknown"), 0);
    }

    #[test]
    fn test_take_damage_through_trait() {
        let (mut hero, _) = hero();
        assert_eq!(hero.take_damage(5), 1); // 5 - 4 defense
        assert_eq!(hero.hp, 29);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_display_format() {
        let (hero, _) = hero();
        assert_eq!(
            hero.to_string(),
            "Hero: HP 30/30, ATK 7, DEF 4, EXP 0, Level 1"
        );
    }
}
