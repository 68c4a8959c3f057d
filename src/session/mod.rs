//! Interactive session driver
//!
//! The outer game loop: explore for a random encounter, rest in town, use
//! items, check status, quit. All rendering is plain line output; the combat
//! core is driven purely through its trait seams.

use std::io::{self, BufRead, Write};

use rand_chacha::ChaCha8Rng;

use crate::battle::{ActionSource, BattleAction, BattleEngine, BattleEvent, EventSink};
use crate::catalog::EnemyCatalog;
use crate::core::{GameConfig, Result};
use crate::entity::{Character, Enemy};
use crate::inventory::{use_item, ItemUse};

/// Renders battle events as stdout lines, in order
struct PrintSink;

impl EventSink for PrintSink {
    fn emit(&mut self, event: BattleEvent) {
        println!("{}", event);
    }
}

/// Reads battle actions from stdin, one prompt per round
struct PromptActionSource;

impl ActionSource for PromptActionSource {
    fn next_action(&mut self, player: &Character, enemy: &Enemy) -> BattleAction {
        loop {
            println!(
                "\n{} HP {}/{}  |  {} HP {}/{}",
                player.name, player.hp, player.max_hp, enemy.name, enemy.hp, enemy.max_hp
            );
            let Some(input) = prompt("[a]ttack / [i] use item / [r]un > ") else {
                // stdin closed mid-battle: keep trying to escape
                return BattleAction::Run;
            };

            match input.trim().to_lowercase().as_str() {
                "a" | "attack" => return BattleAction::Attack,
                "r" | "run" => return BattleAction::Run,
                "i" | "item" | "use item" => match pick_item(player) {
                    Some(name) => return BattleAction::UseItem(name),
                    None => continue, // cancelled, back to the action menu
                },
                _ => println!("Unknown command."),
            }
        }
    }
}

/// Item selection submenu; None means the player cancelled
fn pick_item(player: &Character) -> Option<String> {
    let items: Vec<(String, u32)> = player
        .held_items()
        .map(|(name, qty)| (name.to_string(), qty))
        .collect();

    if items.is_empty() {
        println!("Your inventory is empty.");
        return None;
    }

    println!("Inventory:");
    for (i, (name, qty)) in items.iter().enumerate() {
        println!("  {}. {} x{}", i + 1, name, qty);
    }
    println!("  c. Cancel");

    let input = prompt("Use which item? > ")?;
    let input = input.trim();
    if input.eq_ignore_ascii_case("c") || input.eq_ignore_ascii_case("cancel") {
        return None;
    }

    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 && index <= items.len() {
            return Some(items[index - 1].0.clone());
        }
    }

    // Allow picking by name as well
    items
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(name, _)| name.clone())
}

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    let _ = io::stdout().flush();
    read_input(&mut io::stdin().lock())
}

/// Read one line; None means EOF or a read error, so callers must stop
/// re-prompting
fn read_input<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

/// One play session: a character, a catalog, and the loop that ties the
/// engine pieces together
pub struct Session {
    player: Character,
    catalog: EnemyCatalog,
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl Session {
    pub fn new(player: Character, catalog: EnemyCatalog, config: GameConfig, rng: ChaCha8Rng) -> Self {
        Self {
            player,
            catalog,
            config,
            rng,
        }
    }

    /// Run the menu loop until the player quits or is defeated
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started for {}", self.player.name);

        loop {
            println!("\n=== {} ===", self.player.name);
            println!("  1. Explore");
            println!("  2. Rest in Town");
            println!("  3. Use Item");
            println!("  4. Show Status");
            println!("  q. Quit Game");

            let Some(input) = prompt("> ") else {
                tracing::info!("Input closed; ending session");
                return Ok(());
            };
            match input.trim().to_lowercase().as_str() {
                "1" | "explore" => {
                    if !self.explore() {
                        println!("\nGame Over! You have been defeated.");
                        tracing::info!("Session ended in defeat");
                        return Ok(());
                    }
                }
                "2" | "rest" => self.rest_in_town(),
                "3" | "use item" => self.use_items(),
                "4" | "status" => self.show_status(),
                "q" | "quit" => {
                    println!("Thank you for playing! Goodbye!");
                    tracing::info!("Session ended by quit");
                    return Ok(());
                }
                _ => println!("Unknown command."),
            }
        }
    }

    /// Fight a random enemy; returns whether the player survived
    fn explore(&mut self) -> bool {
        let mut enemy = self.catalog.random(&mut self.rng);
        println!("\nA wild {} appears!", enemy.name);

        let outcome = BattleEngine::new(&self.config, &mut self.rng).run(
            &mut self.player,
            &mut enemy,
            &mut PromptActionSource,
            &mut PrintSink,
        );

        debug_assert!(outcome.is_terminal());
        outcome.survived()
    }

    fn rest_in_town(&mut self) {
        let gained = self.player.heal(self.player.max_hp);
        println!("{} rested and restored {} HP!", self.player.name, gained);
    }

    /// Out-of-battle item menu; loops until the player cancels
    fn use_items(&mut self) {
        loop {
            match pick_item(&self.player) {
                None => return,
                Some(name) => match use_item(&mut self.player, &name, &self.config) {
                    ItemUse::Healed(healed) => {
                        println!(
                            "{} used a {} and healed {} HP!",
                            self.player.name, name, healed
                        );
                    }
                    ItemUse::Unavailable => println!("No {} left!", name),
                    ItemUse::NotUsable => println!("{} cannot be used!", name),
                },
            }
        }
    }

    fn show_status(&self) {
        let player = &self.player;
        println!("\n--- Character Status ---");
        println!("Name: {}    Level: {}", player.name, player.level);
        println!("HP: {}/{}", player.hp, player.max_hp);
        println!("Attack: {}", player.attack);
        println!("Defense: {}", player.defense);
        println!(
            "EXP: {}/{}",
            player.exp,
            player.exp_to_next_level(&self.config)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_input_returns_the_line() {
        let mut reader = Cursor::new("attack\n");
        assert_eq!(read_input(&mut reader), Some("attack\n".to_string()));
    }

    #[test]
    fn test_closed_input_is_none_not_empty() {
        // A closed stream must not look like an (endlessly re-promptable)
        // blank command
        let mut reader = Cursor::new("");
        assert_eq!(read_input(&mut reader), None);
        assert_eq!(read_input(&mut reader), None);
    }

    #[test]
    fn test_read_input_then_eof() {
        let mut reader = Cursor::new("q\n");
        assert_eq!(read_input(&mut reader), Some("q\n".to_string()));
        assert_eq!(read_input(&mut reader), None);
    }
}
