pub mod character;
pub mod combatant;
pub mod enemy;

pub use character::Character;
pub use combatant::Combatant;
pub use enemy::Enemy;
