//! Item use and consumption
//!
//! Effects are a closed dispatch from item name to outcome. Only consumable
//! items decrement quantity; anything without an effect arm reports
//! [`ItemUse::NotUsable`] and leaves the inventory untouched.

use crate::core::GameConfig;
use crate::entity::Character;

/// Outcome of attempting to use one item
///
/// `Unavailable` and `NotUsable` are negative results, not errors; the
/// caller reports them and play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUse {
    /// Item consumed, HP restored by the contained amount (post-clamp)
    Healed(i32),
    /// Quantity is zero or the item is not in the inventory
    Unavailable,
    /// Item is held but has no use effect
    NotUsable,
}

/// Use one item by name, applying its effect to the character
pub fn use_item(character: &mut Character, name: &str, config: &GameConfig) -> ItemUse {
    if character.quantity(name) == 0 {
        return ItemUse::Unavailable;
    }

    // Closed effect table: extend by adding arms, not call sites
    match name {
        "Potion" => {
            let healed = character.heal(config.potion_heal);
            consume(character, name);
            ItemUse::Healed(healed)
        }
        _ => ItemUse::NotUsable,
    }
}

fn consume(character: &mut Character, name: &str) {
    if let Some(qty) = character.inventory.get_mut(name) {
        *qty = qty.saturating_sub(1);
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
    fn test_potion_heals_and_decrements() {
        let (mut hero, config) = hero();
        hero.hp = 10;

        let result = use_item(&mut hero, "Potion", &config);

        assert_eq!(result, ItemUse::Healed(15));
        assert_eq!(hero.hp, 25);
        assert_eq!(hero.quantity("Potion"), 1);
    }

    #[test]
    fn test_potion_heal_clamps_at_max_hp() {
        let (mut hero, config) = hero();
        hero.hp = 28;

        let result = use_item(&mut hero, "Potion", &config);

        assert_eq!(result, ItemUse::Healed(2));
        assert_eq!(hero.hp, 30);
        assert_eq!(hero.quantity("Potion"), 1);
    }

    #[test]
    fn test_empty_quantity_is_unavailable() {
        let (mut hero, config) = hero();
        hero.inventory.insert("Potion".to_string(), 0);
        hero.hp = 10;

        let result = use_item(&mut hero, "Potion", &config);

        assert_eq!(result, ItemUse::Unavailable);
        assert_eq!(hero.hp, 10);
    }

    #[test]
    fn test_absent_item_is_unavailable() {
        let (mut hero, config) = hero();
        assert_eq!(use_item(&mut hero, "Elixir", &config), ItemUse::Unavailable);
    }

    #[test]
    fn test_unusable_item_keeps_quantity() {
        let (mut hero, config) = hero();
        hero.add_item("Sword", 1);

        let result = use_item(&mut hero, "Sword", &config);

        assert_eq!(result, ItemUse::NotUsable);
        assert_eq!(hero.quantity("Sword"), 1);
    }
}
