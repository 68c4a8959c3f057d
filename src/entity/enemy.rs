//! Enemy combatants
//!
//! Enemies are stamped out of catalog templates, live for one battle, and
//! are dropped afterwards whatever the outcome.

use std::fmt;

use crate::entity::combatant::{resolve_damage, Combatant};

/// A single opponent for one encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp_reward: i32,
}

impl Enemy {
    pub fn new(
        name: impl Into<String>,
        hp: i32,
        attack: i32,
        defense: i32,
        xp_reward: i32,
    ) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp: hp,
            attack,
            defense,
            xp_reward,
        }
    }
}

impl Combatant for Enemy {
    fn is_alive(&self) -> bool {
        self.hp > 0
    }

    fn take_damage(&mut self, raw: i32) -> i32 {
        let (hp, dealt) = resolve_damage(self.hp, self.defense, raw);
        self.hp = hp;
        dealt
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enemy: {}\nHP: {}\nAttack: {}\nDefense: {}\nXP Reward: {}",
            self.name, self.hp, self.attack, self.defense, self.xp_reward
        )
    }
}
