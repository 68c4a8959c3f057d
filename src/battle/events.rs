//! Battle event stream
//!
//! Every state-changing step of a battle is emitted as one event, in the
//! order it happened. Presentation decides how to render them; the engine
//! never prints.

use std::fmt;

/// One state-changing occurrence during a battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    RoundStarted { round: u32 },
    /// Player hit the enemy for `damage` (post-defense)
    PlayerAttacked { enemy: String, damage: i32 },
    /// Item consumed, `healed` HP restored
    ItemUsed { item: String, healed: i32 },
    ItemUnavailable { item: String },
    ItemNotUsable { item: String },
    FleeSucceeded,
    FleeFailed,
    /// Enemy hit the player for `damage` (post-defense)
    EnemyAttacked { enemy: String, damage: i32 },
    EnemyDefeated { enemy: String, xp: i32 },
    LeveledUp { from: i32, to: i32 },
    PlayerDefeated,
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::RoundStarted { round } => write!(f, "--- Round {} ---", round),
            BattleEvent::PlayerAttacked { enemy, damage } => {
                write!(f, "You dealt {} damage to {}!", damage, enemy)
            }
            BattleEvent::ItemUsed { item, healed } => {
                write!(f, "Used a {} and healed {} HP!", item, healed)
            }
            BattleEvent::ItemUnavailable { item } => write!(f, "No {} left!", item),
            BattleEvent::ItemNotUsable { item } => write!(f, "{} cannot be used!", item),
            BattleEvent::FleeSucceeded => write!(f, "You successfully ran away!"),
            BattleEvent::FleeFailed => write!(f, "Failed to run away!"),
            BattleEvent::EnemyAttacked { enemy, damage } => {
                write!(f, "{} dealt {} damage to you!", enemy, damage)
            }
            BattleEvent::EnemyDefeated { enemy, xp } => {
                write!(f, "You defeated the {}! Gained {} XP.", enemy, xp)
            }
            BattleEvent::LeveledUp { from, to } => {
                write!(f, "Level UP! {} -> level {}", from, to)
            }
            BattleEvent::PlayerDefeated => write!(f, "You have been defeated..."),
        }
    }
}

/// Receives battle events in occurrence order
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

/// Collects events for inspection in tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<BattleEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}
