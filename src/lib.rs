//! Gloomvale - turn-based terminal RPG
//!
//! The combat and progression core is deterministic under a seeded RNG and
//! presentation-free: battles are driven through [`battle::ActionSource`]
//! and observed through [`battle::EventSink`]. The [`session`] module wires
//! those seams to stdin/stdout for interactive play.

pub mod battle;
pub mod catalog;
pub mod core;
pub mod entity;
pub mod inventory;
pub mod session;
