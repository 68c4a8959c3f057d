//! Battle loop and outcome resolution
//!
//! One battle runs rounds until a terminal state: the player wins, dies, or
//! escapes. The player always acts first; the enemy only gets its turn when
//! the player's action neither killed it nor ended the battle by fleeing.

use rand::Rng;

use crate::battle::actions::{ActionSource, BattleAction};
use crate::battle::events::{BattleEvent, EventSink};
use crate::core::GameConfig;
use crate::entity::{Character, Combatant, Enemy};
use crate::inventory::{use_item, ItemUse};

/// Battle progress, including the three ways it can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Ongoing,
    PlayerWon,
    PlayerLost,
    PlayerFled,
}

impl BattleState {
    /// True once the battle can no longer continue
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattleState::Ongoing)
    }

    /// Whether the player is still standing; the session ends when false
    pub fn survived(&self) -> bool {
        !matches!(self, BattleState::PlayerLost)
    }
}

/// Runs encounters against a shared config and random source
pub struct BattleEngine<'a, R: Rng> {
    config: &'a GameConfig,
    rng: &'a mut R,
}

impl<'a, R: Rng> BattleEngine<'a, R> {
    pub fn new(config: &'a GameConfig, rng: &'a mut R) -> Self {
        Self { config, rng }
    }

    /// Run one battle to termination
    ///
    /// The player and enemy are mutated in place; the enemy is expected to
    /// be discarded afterwards. Every state change is emitted to `sink` in
    /// the order it happens.
    pub fn run(
        &mut self,
        player: &mut Character,
        enemy: &mut Enemy,
        actions: &mut dyn ActionSource,
        sink: &mut dyn EventSink,
    ) -> BattleState {
        debug_assert!(
            player.is_alive() && enemy.is_alive(),
            "battle requires living combatants"
        );
        tracing::debug!("Battle started: {} vs {}", player.name, enemy.name);
        let mut round = 0u32;

        while player.is_alive() && enemy.is_alive() {
            round += 1;
            sink.emit(BattleEvent::RoundStarted { round });

            match actions.next_action(player, enemy) {
                BattleAction::Attack => {
                    let damage = enemy.take_damage(player.attack);
                    sink.emit(BattleEvent::PlayerAttacked {
                        enemy: enemy.name.clone(),
                        damage,
                    });
                }
                BattleAction::UseItem(name) => {
                    // A wasted attempt still costs the turn
                    match use_item(player, &name, self.config) {
                        ItemUse::Healed(healed) => {
                            sink.emit(BattleEvent::ItemUsed { item: name, healed });
                        }
                        ItemUse::Unavailable => {
                            sink.emit(BattleEvent::ItemUnavailable { item: name });
                        }
                        ItemUse::NotUsable => {
                            sink.emit(BattleEvent::ItemNotUsable { item: name });
                        }
                    }
                }
                BattleAction::Run => {
                    let roll = self.rng.gen_range(0..=self.config.flee_roll_max);
                    if roll > self.config.flee_threshold {
                        sink.emit(BattleEvent::FleeSucceeded);
                        tracing::debug!("Battle ended: {} fled", player.name);
                        return BattleState::PlayerFled;
                    }
                    sink.emit(BattleEvent::FleeFailed);
                }
            }

            if !enemy.is_alive() {
                sink.emit(BattleEvent::EnemyDefeated {
                    enemy: enemy.name.clone(),
                    xp: enemy.xp_reward,
                });
                let from = player.level;
                if player.gain_exp(enemy.xp_reward, self.config) {
                    sink.emit(BattleEvent::LeveledUp {
                        from,
                        to: player.level,
                    });
                }
                tracing::debug!("Battle ended: {} defeated {}", player.name, enemy.name);
                return BattleState::PlayerWon;
            }

            let damage = player.take_damage(enemy.attack);
            sink.emit(BattleEvent::EnemyAttacked {
                enemy: enemy.name.clone(),
                damage,
            });

            if !player.is_alive() {
                sink.emit(BattleEvent::PlayerDefeated);
                tracing::debug!("Battle ended: {} was defeated", player.name);
                return BattleState::PlayerLost;
            }
        }

        // Loop guard only exits through a terminal return above
        BattleState::Ongoing
    }
}
