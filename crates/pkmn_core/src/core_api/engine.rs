use crate::data;
use crate::error::CoreError;
use crate::gba::items::ItemSlot;
use crate::gba::pk3::{Pk3, RecordStatus};
use crate::gba::sections::IMAGE_SIZE as GBA_IMAGE_SIZE;
use crate::gba::{self, GbaSave, Pocket};
use crate::gender::Gender;
use crate::nds::pk4::Pk4;
use crate::nds::types::IMAGE_SIZE as NDS_IMAGE_SIZE;
use crate::nds::{self, NdsSave};
use crate::play_time::PlayTime;
use crate::slot::SlotChoice;
use crate::stat::BaseStats;

use super::types::{
    Capabilities, CapabilityIssue, CreatureEntry, Game, ItemEntry, PokedexCounts, Snapshot,
    TrainerInfo,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug, Clone)]
enum LoadedSave {
    Gba(Box<GbaSave>),
    Nds(Box<NdsSave>),
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    snapshot: Snapshot,
    capabilities: Capabilities,
    save: LoadedSave,
    original: Vec<u8>,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Opens the active slot. The hardware family is picked by image size and
    /// the release by the save contents unless `hint` names one.
    pub fn open_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        hint: Option<Game>,
    ) -> Result<Session, CoreError> {
        self.open_bytes_with(bytes, hint, SlotChoice::Active)
    }

    pub fn open_bytes_with<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        hint: Option<Game>,
        slot: SlotChoice,
    ) -> Result<Session, CoreError> {
        let bytes = bytes.as_ref();
        let save = match (hint, bytes.len()) {
            (Some(Game::Gba(v)), _) => open_gba(bytes, Some(v), slot)?,
            (Some(Game::Nds(v)), _) => open_nds(bytes, Some(v), slot)?,
            (None, GBA_IMAGE_SIZE) => open_gba(bytes, None, slot)?,
            (None, NDS_IMAGE_SIZE) => open_nds(bytes, None, slot)?,
            (None, actual) => {
                return Err(CoreError::InvalidLength {
                    what: "save image (expected 0x20000 or 0x80000 bytes)",
                    expected: GBA_IMAGE_SIZE,
                    actual,
                });
            }
        };
        Session::new(save, bytes.to_vec(), slot)
    }

    /// A session over an erased image; committing it produces a first save.
    pub fn blank(&self, game: Game) -> Result<Session, CoreError> {
        let save = match game {
            Game::Gba(v) => LoadedSave::Gba(Box::new(GbaSave::blank(v))),
            Game::Nds(v) => LoadedSave::Nds(Box::new(NdsSave::blank(v))),
        };
        let original = match &save {
            LoadedSave::Gba(s) => s.image().to_vec(),
            LoadedSave::Nds(s) => s.image().to_vec(),
        };
        Session::new(save, original, SlotChoice::Active)
    }
}

fn open_gba(bytes: &[u8], variant: Option<gba::GbaVariant>, slot: SlotChoice) -> Result<LoadedSave, CoreError> {
    let save = GbaSave::open(bytes, gba::OpenOptions { variant, slot })?;
    Ok(LoadedSave::Gba(Box::new(save)))
}

fn open_nds(bytes: &[u8], variant: Option<nds::NdsVariant>, slot: SlotChoice) -> Result<LoadedSave, CoreError> {
    let save = NdsSave::open(bytes, nds::OpenOptions { variant, slot })?;
    Ok(LoadedSave::Nds(Box::new(save)))
}

impl Session {
    fn new(save: LoadedSave, original: Vec<u8>, slot: SlotChoice) -> Result<Self, CoreError> {
        let game = match &save {
            LoadedSave::Gba(s) => Game::Gba(s.variant()),
            LoadedSave::Nds(s) => Game::Nds(s.variant()),
        };
        let mut issues = Vec::new();
        if matches!(game, Game::Nds(_)) {
            issues.extend([
                CapabilityIssue::NoItemPockets,
                CapabilityIssue::NoPcStorage,
                CapabilityIssue::NoPokedex,
            ]);
        }
        if slot == SlotChoice::Backup {
            issues.push(CapabilityIssue::BackupSlotLoaded);
        }
        let capabilities = Capabilities {
            can_query: true,
            can_apply_edits: true,
            issues,
        };
        let mut session = Self {
            game,
            snapshot: placeholder_snapshot(game),
            capabilities,
            save,
            original,
        };
        session.refresh()?;
        Ok(session)
    }

    fn refresh(&mut self) -> Result<(), CoreError> {
        let trainer = self.trainer();
        self.snapshot = match &self.save {
            LoadedSave::Gba(s) => Snapshot {
                game: self.game,
                trainer,
                party_count: s.party().count()?,
                active_slot: s.active_slot(),
                slots: s.slots(),
                pokedex: Some(gba_pokedex_counts(s)),
            },
            LoadedSave::Nds(s) => Snapshot {
                game: self.game,
                trainer,
                party_count: s.party().count()?,
                active_slot: s.active_general(),
                slots: s.general_slots().to_vec(),
                pokedex: None,
            },
        };
        Ok(())
    }

    pub fn game(&self) -> Game {
        self.game
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn gba(&self) -> Option<&GbaSave> {
        match &self.save {
            LoadedSave::Gba(s) => Some(&**s),
            LoadedSave::Nds(_) => None,
        }
    }

    pub fn nds(&self) -> Option<&NdsSave> {
        match &self.save {
            LoadedSave::Nds(s) => Some(&**s),
            LoadedSave::Gba(_) => None,
        }
    }

    pub fn trainer(&self) -> TrainerInfo {
        match &self.save {
            LoadedSave::Gba(s) => {
                let t = s.trainer();
                TrainerInfo {
                    name: t.name(),
                    gender: t.gender(),
                    id: t.id(),
                    secret_id: t.secret_id(),
                    money: s.money(),
                    play_time: t.play_time(),
                }
            }
            LoadedSave::Nds(s) => {
                let t = s.trainer();
                TrainerInfo {
                    name: t.name(),
                    gender: t.gender(),
                    id: t.id(),
                    secret_id: t.secret_id(),
                    money: t.money(),
                    play_time: t.play_time(),
                }
            }
        }
    }

    pub fn party(&self) -> Result<Vec<CreatureEntry>, CoreError> {
        match &self.save {
            LoadedSave::Gba(s) => Ok(s
                .party()
                .members()?
                .iter()
                .enumerate()
                .map(|(slot, pk)| pk3_entry(slot, pk))
                .collect()),
            LoadedSave::Nds(s) => Ok(s
                .party()
                .members()?
                .iter()
                .enumerate()
                .map(|(slot, pk)| pk4_entry(slot, pk))
                .collect()),
        }
    }

    /// All thirty slots of a PC box, empty ones included.
    pub fn pc_box(&self, box_index: usize) -> Result<Vec<CreatureEntry>, CoreError> {
        let save = self.require_gba("pc storage")?;
        Ok(save
            .pc()
            .pc_box(box_index)?
            .iter()
            .enumerate()
            .map(|(slot, pk)| pk3_entry(slot, pk))
            .collect())
    }

    pub fn pocket(&self, pocket: Pocket) -> Result<Vec<ItemEntry>, CoreError> {
        let save = self.require_gba("item pockets")?;
        Ok(save
            .pocket(pocket)
            .slots()
            .into_iter()
            .enumerate()
            .map(|(slot, item)| ItemEntry {
                slot,
                index: item.index,
                amount: item.amount,
                name: data::item_name(item.index)
                    .filter(|_| !item.is_empty())
                    .map(str::to_string),
            })
            .collect())
    }

    pub fn pokedex_counts(&self) -> Result<PokedexCounts, CoreError> {
        Ok(gba_pokedex_counts(self.require_gba("pokedex")?))
    }

    pub fn set_money(&mut self, money: u32) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gba(s) => s.set_money(money)?,
            LoadedSave::Nds(s) => s.trainer_mut().set_money(money)?,
        }
        self.refresh()
    }

    pub fn set_trainer_name(&mut self, name: &str) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gba(s) => s.trainer_mut().set_name(name),
            LoadedSave::Nds(s) => s.trainer_mut().set_name(name),
        }
        self.refresh()
    }

    pub fn set_trainer_gender(&mut self, gender: Gender) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gba(s) => s.trainer_mut().set_gender(gender),
            LoadedSave::Nds(s) => s.trainer_mut().set_gender(gender),
        }
        self.refresh()
    }

    pub fn set_played_time(&mut self, time: PlayTime) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gba(s) => s.trainer_mut().set_play_time(time)?,
            LoadedSave::Nds(s) => s.trainer_mut().set_play_time(time)?,
        }
        self.refresh()
    }

    pub fn set_pokedex_seen(&mut self, dex: u16, seen: bool) -> Result<(), CoreError> {
        self.require_gba_mut("pokedex")?
            .pokedex_mut()
            .set_seen(dex, seen)?;
        self.refresh()
    }

    pub fn set_pokedex_owned(&mut self, dex: u16, owned: bool) -> Result<(), CoreError> {
        self.require_gba_mut("pokedex")?
            .pokedex_mut()
            .set_owned(dex, owned)?;
        self.refresh()
    }

    pub fn set_item(&mut self, pocket: Pocket, slot: usize, item: ItemSlot) -> Result<(), CoreError> {
        self.require_gba_mut("item pockets")?
            .pocket_mut(pocket)
            .set(slot, item)
    }

    /// Sets a party member's level and, for species with known base stats,
    /// recomputes its stats.
    pub fn set_party_level(&mut self, index: usize, level: u8) -> Result<(), CoreError> {
        CoreError::check_index("level", usize::from(level), 101)?;
        match &mut self.save {
            LoadedSave::Gba(s) => {
                let mut party = s.party_mut();
                CoreError::check_index("party member", index, party.count()?)?;
                let mut pk = party.get(index)?;
                check_editable(index, pk.status())?;
                pk.set_level(level);
                if let Some(base) = base_stats(pk.species()) {
                    pk.recalculate_stats(&base);
                }
                party.set(index, &pk)?;
            }
            LoadedSave::Nds(s) => {
                let mut party = s.party_mut();
                CoreError::check_index("party member", index, party.count()?)?;
                let mut pk = party.get(index)?;
                check_editable(index, pk.status())?;
                pk.set_level(level);
                if let Some(base) = base_stats(pk.species()) {
                    pk.recalculate_stats(&base);
                }
                party.set(index, &pk)?;
            }
        }
        self.refresh()
    }

    /// Commits into the inactive slot and returns the image. The session now
    /// treats the new slot as active.
    pub fn commit(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = match &mut self.save {
            LoadedSave::Gba(s) => s.commit()?,
            LoadedSave::Nds(s) => s.commit()?,
        };
        self.refresh()?;
        Ok(bytes)
    }

    /// The image a commit would produce, without changing the session.
    pub fn to_bytes_committed(&self) -> Result<Vec<u8>, CoreError> {
        match self.save.clone() {
            LoadedSave::Gba(mut s) => s.commit(),
            LoadedSave::Nds(mut s) => s.commit(),
        }
    }

    pub fn to_bytes_unmodified(&self) -> Vec<u8> {
        self.original.clone()
    }

    fn require_gba(&self, what: &str) -> Result<&GbaSave, CoreError> {
        self.gba()
            .ok_or_else(|| CoreError::unsupported(format!("{what} not mapped for {}", self.game)))
    }

    fn require_gba_mut(&mut self, what: &str) -> Result<&mut GbaSave, CoreError> {
        let game = self.game;
        match &mut self.save {
            LoadedSave::Gba(s) => Ok(&mut **s),
            LoadedSave::Nds(_) => Err(CoreError::unsupported(format!(
                "{what} not mapped for {game}"
            ))),
        }
    }
}

/// Only intact, occupied records may be edited.
fn check_editable(index: usize, status: RecordStatus) -> Result<(), CoreError> {
    match status {
        RecordStatus::Valid => Ok(()),
        RecordStatus::Empty => Err(CoreError::corrupt(format!(
            "party member {index} is an empty record"
        ))),
        RecordStatus::BadEgg => Err(CoreError::corrupt(format!(
            "party member {index} is a bad egg"
        ))),
        RecordStatus::Invalid => Err(CoreError::corrupt(format!(
            "party member {index} fails its checksum"
        ))),
    }
}

fn base_stats(species: u16) -> Option<BaseStats> {
    data::species(species).ok().map(|s| s.base)
}

fn gba_pokedex_counts(save: &GbaSave) -> PokedexCounts {
    let dex = save.pokedex();
    PokedexCounts {
        seen: dex.seen_count(),
        owned: dex.owned_count(),
        national: dex.national(),
    }
}

fn placeholder_snapshot(game: Game) -> Snapshot {
    Snapshot {
        game,
        trainer: TrainerInfo {
            name: String::new(),
            gender: Gender::Male,
            id: 0,
            secret_id: 0,
            money: 0,
            play_time: PlayTime::default(),
        },
        party_count: 0,
        active_slot: None,
        slots: Vec::new(),
        pokedex: None,
    }
}

fn pk3_entry(slot: usize, pk: &Pk3) -> CreatureEntry {
    CreatureEntry {
        slot,
        status: pk.status(),
        species: pk.species(),
        species_name: data::species_name(pk.species()).map(str::to_string),
        nickname: pk.nickname(),
        level: pk.level(),
        pid: pk.pid(),
        nature: pk.nature().name().to_string(),
        shiny: pk.is_shiny(),
        egg: pk.is_egg(),
        held_item: pk.held_item(),
        moves: [0, 1, 2, 3].map(|i| pk.move_id(i).unwrap_or(0)),
        ivs: pk.ivs(),
        evs: pk.evs(),
        stats: pk.stats(),
        current_hp: pk.current_hp(),
    }
}

fn pk4_entry(slot: usize, pk: &Pk4) -> CreatureEntry {
    CreatureEntry {
        slot,
        status: pk.status(),
        species: pk.species(),
        species_name: data::species_name(pk.species()).map(str::to_string),
        nickname: pk.nickname(),
        level: pk.level(),
        pid: pk.pid(),
        nature: pk.nature().name().to_string(),
        shiny: pk.is_shiny(),
        egg: pk.is_egg(),
        held_item: pk.held_item(),
        moves: [0, 1, 2, 3].map(|i| pk.move_id(i).unwrap_or(0)),
        ivs: pk.ivs(),
        evs: pk.evs(),
        stats: pk.stats(),
        current_hp: pk.current_hp(),
    }
}
