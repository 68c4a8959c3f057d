//! Player action selection
//!
//! The engine asks an [`ActionSource`] for exactly one action per round and
//! blocks until it gets one. Interactive play reads stdin; tests feed a
//! scripted queue.

use std::collections::VecDeque;

use crate::entity::{Character, Enemy};

/// One choice per battle round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    /// Use the named item from the player's inventory
    UseItem(String),
    /// Attempt to flee the battle
    Run,
}

/// Supplies the next player action, one discrete choice per call
pub trait ActionSource {
    fn next_action(&mut self, player: &Character, enemy: &Enemy) -> BattleAction;
}

/// Pre-scripted action sequence for tests and simulations
///
/// Falls back to `Attack` when the script runs out, so a short script still
/// drives a battle to termination.
#[derive(Debug, Default)]
pub struct ScriptedActions {
    queue: VecDeque<BattleAction>,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = BattleAction>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }
}

impl ActionSource for ScriptedActions {
    fn next_action(&mut self, _player: &Character, _enemy: &Enemy) -> BattleAction {
        self.queue.pop_front().unwrap_or(BattleAction::Attack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_scripted_actions_fall_back_to_attack() {
        let config = GameConfig::default();
        let player = Character::new("Hero", &config);
        let enemy = Enemy::new("Goblin", 20, 5, 2, 15);

        let mut source = ScriptedActions::new([BattleAction::Run]);
        assert_eq!(source.next_action(&player, &enemy), BattleAction::Run);
        assert_eq!(source.next_action(&player, &enemy), BattleAction::Attack);
    }
}
