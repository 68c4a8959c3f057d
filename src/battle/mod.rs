pub mod actions;
pub mod engine;
pub mod events;

pub use actions::{ActionSource, BattleAction, ScriptedActions};
pub use engine::{BattleEngine, BattleState};
pub use events::{BattleEvent, EventSink, RecordingSink};
