mod engine;
mod types;

pub use engine::{Engine, Session};
pub use types::{
    Capabilities, CapabilityIssue, CreatureEntry, Game, ItemEntry, PokedexCounts, Snapshot,
    TrainerInfo,
};

pub use crate::error::{CoreError, CoreErrorCode};
