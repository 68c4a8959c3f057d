//! Shared combat behavior for anything that can take a hit
//!
//! Damage is flat subtraction: defense comes off the raw hit, never below
//! zero. The clamps here are the only thing keeping HP in range.

/// Anything with HP that can fight and be fought
pub trait Combatant {
    /// True while HP is above zero
    fn is_alive(&self) -> bool;

    /// Apply a raw hit, returning the damage actually dealt after defense
    ///
    /// `dealt = max(0, raw - defense)`; HP never drops below zero.
    fn take_damage(&mut self, raw: i32) -> i32;
}

/// Resolve a raw hit against a defense value and current HP
///
/// Returns `(new_hp, dealt)`. Shared by every [`Combatant`] impl so the
/// clamping rules cannot drift between player and enemy.
pub fn resolve_damage(hp: i32, defense: i32, raw: i32) -> (i32, i32) {
    let dealt = (raw - defense).max(0);
    ((hp - dealt).max(0), dealt)
}
