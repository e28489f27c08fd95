use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gba::GbaVariant;
use crate::gba::pk3::RecordStatus;
use crate::gender::Gender;
use crate::nds::NdsVariant;
use crate::play_time::PlayTime;
use crate::slot::{SlotId, SlotStatus};
use crate::stat::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    Gba(GbaVariant),
    Nds(NdsVariant),
}

impl Game {
    pub fn generation(self) -> u8 {
        match self {
            Self::Gba(_) => 3,
            Self::Nds(_) => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gba(v) => v.as_str(),
            Self::Nds(v) => v.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        GbaVariant::parse(s)
            .map(Self::Gba)
            .or_else(|| NdsVariant::parse(s).map(Self::Nds))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerInfo {
    pub name: String,
    pub gender: Gender,
    pub id: u16,
    pub secret_id: u16,
    pub money: u32,
    pub play_time: PlayTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatureEntry {
    pub slot: usize,
    pub status: RecordStatus,
    pub species: u16,
    pub species_name: Option<String>,
    pub nickname: String,
    pub level: u8,
    pub pid: u32,
    pub nature: String,
    pub shiny: bool,
    pub egg: bool,
    pub held_item: u16,
    pub moves: [u16; 4],
    pub ivs: [u8; 6],
    pub evs: [u8; 6],
    pub stats: Stats,
    pub current_hp: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemEntry {
    pub slot: usize,
    pub index: u16,
    pub amount: u16,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokedexCounts {
    pub seen: usize,
    pub owned: usize,
    pub national: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub game: Game,
    pub trainer: TrainerInfo,
    pub party_count: usize,
    pub active_slot: Option<SlotId>,
    pub slots: Vec<SlotStatus>,
    pub pokedex: Option<PokedexCounts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityIssue {
    /// Item pockets are only mapped for generation 3.
    NoItemPockets,
    NoPcStorage,
    NoPokedex,
    /// A slot other than the active one was opened.
    BackupSlotLoaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capabilities {
    pub can_query: bool,
    pub can_apply_edits: bool,
    pub issues: Vec<CapabilityIssue>,
}
