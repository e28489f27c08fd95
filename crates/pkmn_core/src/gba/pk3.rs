//! Generation 3 creature records.
//!
//! A [`Pk3`] is always held decrypted, with its data blocks in canonical
//! Growth, Attacks, EVs, Misc order. Box records (80 bytes) load with a zeroed
//! party extension.

use serde::{Deserialize, Serialize};

use crate::checksum::record_checksum;
use crate::crypt::pk3::{self, BOX_SIZE, DATA_OFFSET, DATA_SIZE, PARTY_SIZE};
use crate::error::CoreError;
use crate::gender::Gender;
use crate::layout::{bits, read_u16, read_u32, with_bits, write_u16, write_u32};
use crate::stat::{BaseStats, Nature, StatKind, Stats, calc_stats};
use crate::text::gba as text;

const PID: usize = 0x00;
const OT_FID: usize = 0x04;
const NICKNAME: usize = 0x08;
const NICKNAME_LEN: usize = 10;
const LANGUAGE: usize = 0x12;
const FLAGS: usize = 0x13;
const OT_NAME: usize = 0x14;
const OT_NAME_LEN: usize = 7;
const MARKINGS: usize = 0x1B;
const CHECKSUM: usize = 0x1C;

// Growth
const SPECIES: usize = 0x20;
const HELD_ITEM: usize = 0x22;
const EXPERIENCE: usize = 0x24;
const PP_UPS: usize = 0x28;
const FRIENDSHIP: usize = 0x29;
// Attacks
const MOVES: usize = 0x2C;
const MOVE_PP: usize = 0x34;
// EVs and contest
const EVS: usize = 0x38;
const CONTEST: usize = 0x3E;
// Misc
const POKERUS: usize = 0x44;
const MET_LOCATION: usize = 0x45;
const ORIGINS: usize = 0x46;
const IVS: usize = 0x48;
const RIBBONS: usize = 0x4C;
// Party extension
const STATUS: usize = 0x50;
const LEVEL: usize = 0x54;
const POKERUS_TIME: usize = 0x55;
const CURRENT_HP: usize = 0x56;
const STATS: usize = 0x58;

const FLAG_BAD_EGG: u8 = 1 << 0;
const FLAG_HAS_SPECIES: u8 = 1 << 1;
const FLAG_EGG_NAME: u8 = 1 << 2;

const IV_EGG_BIT: u32 = 30;
const IV_ABILITY_BIT: u32 = 31;

pub const MOVE_SLOTS: usize = 4;
pub const MAX_IV: u8 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// No creature in this slot.
    Empty,
    Valid,
    /// Flagged as a bad egg by the game itself.
    BadEgg,
    /// Stored checksum does not match the payload.
    Invalid,
}

/// Primary status condition from the party extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Healthy,
    Asleep(u8),
    Poisoned,
    Burned,
    Frozen,
    Paralyzed,
    BadlyPoisoned,
}

impl Condition {
    pub fn from_raw(raw: u32) -> Self {
        let sleep = bits(raw, 0, 3) as u8;
        if sleep != 0 {
            Self::Asleep(sleep)
        } else if raw & (1 << 3) != 0 {
            Self::Poisoned
        } else if raw & (1 << 4) != 0 {
            Self::Burned
        } else if raw & (1 << 5) != 0 {
            Self::Frozen
        } else if raw & (1 << 6) != 0 {
            Self::Paralyzed
        } else if raw & (1 << 7) != 0 {
            Self::BadlyPoisoned
        } else {
            Self::Healthy
        }
    }

    /// Sleep turns must fit the three-bit counter.
    pub fn raw(self) -> Result<u32, CoreError> {
        Ok(match self {
            Self::Healthy => 0,
            Self::Asleep(turns) => {
                CoreError::check_index("sleep turns", usize::from(turns), 8)?;
                u32::from(turns)
            }
            Self::Poisoned => 1 << 3,
            Self::Burned => 1 << 4,
            Self::Frozen => 1 << 5,
            Self::Paralyzed => 1 << 6,
            Self::BadlyPoisoned => 1 << 7,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pk3 {
    raw: [u8; PARTY_SIZE],
}

impl Default for Pk3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Pk3 {
    pub fn empty() -> Self {
        Self {
            raw: [0; PARTY_SIZE],
        }
    }

    /// Decrypts an 80-byte box or 100-byte party record as stored in a save.
    pub fn from_stored(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() != BOX_SIZE && bytes.len() != PARTY_SIZE {
            return Err(CoreError::InvalidLength {
                what: "gen 3 record",
                expected: PARTY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut raw = [0u8; PARTY_SIZE];
        raw[..bytes.len()].copy_from_slice(bytes);
        pk3::decrypt(&mut raw)?;
        Ok(Self { raw })
    }

    /// Builds from an already decrypted record.
    pub fn from_decrypted(bytes: &[u8]) -> Result<Self, CoreError> {
        let mut raw = [0u8; PARTY_SIZE];
        let len = bytes.len().min(PARTY_SIZE);
        if len < BOX_SIZE {
            return Err(CoreError::InvalidLength {
                what: "gen 3 record",
                expected: BOX_SIZE,
                actual: bytes.len(),
            });
        }
        raw[..len].copy_from_slice(&bytes[..len]);
        Ok(Self { raw })
    }

    pub fn as_bytes(&self) -> &[u8; PARTY_SIZE] {
        &self.raw
    }

    /// The stored form: blocks shuffled and masked. The checksum is written
    /// as held; call [`Pk3::update_checksum`] after editing payload fields.
    pub fn to_stored(&self) -> [u8; PARTY_SIZE] {
        let mut out = self.raw;
        pk3::encrypt_party(&mut out);
        out
    }

    /// Fails with `CorruptImage` unless the record can be written back as is.
    pub fn check_writable(&self) -> Result<(), CoreError> {
        match self.status() {
            RecordStatus::Invalid => Err(CoreError::corrupt(format!(
                "record checksum {:#06x} does not match payload {:#06x}",
                self.stored_checksum(),
                self.computed_checksum()
            ))),
            _ => Ok(()),
        }
    }

    pub fn status(&self) -> RecordStatus {
        if self.raw[FLAGS] & FLAG_BAD_EGG != 0 {
            RecordStatus::BadEgg
        } else if self.stored_checksum() != self.computed_checksum() {
            RecordStatus::Invalid
        } else if self.species() == 0 {
            RecordStatus::Empty
        } else {
            RecordStatus::Valid
        }
    }

    pub fn stored_checksum(&self) -> u16 {
        read_u16(&self.raw, CHECKSUM)
    }

    pub fn computed_checksum(&self) -> u16 {
        record_checksum(&self.raw[DATA_OFFSET..DATA_OFFSET + DATA_SIZE])
    }

    pub fn update_checksum(&mut self) {
        let sum = self.computed_checksum();
        write_u16(&mut self.raw, CHECKSUM, sum);
    }

    pub fn pid(&self) -> u32 {
        read_u32(&self.raw, PID)
    }

    /// Changing the PID reshuffles the stored form; the decrypted fields keep
    /// their values.
    pub fn set_pid(&mut self, pid: u32) {
        write_u32(&mut self.raw, PID, pid);
    }

    pub fn ot_id(&self) -> u16 {
        read_u16(&self.raw, OT_FID)
    }

    pub fn ot_secret_id(&self) -> u16 {
        read_u16(&self.raw, OT_FID + 2)
    }

    pub fn set_ot_ids(&mut self, id: u16, secret_id: u16) {
        write_u16(&mut self.raw, OT_FID, id);
        write_u16(&mut self.raw, OT_FID + 2, secret_id);
    }

    pub fn nickname(&self) -> String {
        text::decode_string(&self.raw[NICKNAME..NICKNAME + NICKNAME_LEN])
    }

    pub fn set_nickname(&mut self, name: &str) {
        let encoded = text::encode_str(name, NICKNAME_LEN);
        self.raw[NICKNAME..NICKNAME + NICKNAME_LEN].copy_from_slice(&encoded);
    }

    pub fn ot_name(&self) -> String {
        text::decode_string(&self.raw[OT_NAME..OT_NAME + OT_NAME_LEN])
    }

    pub fn set_ot_name(&mut self, name: &str) {
        let encoded = text::encode_str(name, OT_NAME_LEN);
        self.raw[OT_NAME..OT_NAME + OT_NAME_LEN].copy_from_slice(&encoded);
    }

    pub fn language(&self) -> u8 {
        self.raw[LANGUAGE]
    }

    pub fn set_language(&mut self, language: u8) {
        self.raw[LANGUAGE] = language;
    }

    pub fn is_bad_egg(&self) -> bool {
        self.raw[FLAGS] & FLAG_BAD_EGG != 0
    }

    pub fn has_species(&self) -> bool {
        self.raw[FLAGS] & FLAG_HAS_SPECIES != 0
    }

    pub fn uses_egg_name(&self) -> bool {
        self.raw[FLAGS] & FLAG_EGG_NAME != 0
    }

    pub fn markings(&self) -> u8 {
        self.raw[MARKINGS]
    }

    pub fn set_markings(&mut self, markings: u8) {
        self.raw[MARKINGS] = markings;
    }

    pub fn species(&self) -> u16 {
        read_u16(&self.raw, SPECIES)
    }

    /// Also maintains the "has species" flag the game keys slot occupancy on.
    pub fn set_species(&mut self, species: u16) {
        write_u16(&mut self.raw, SPECIES, species);
        if species == 0 {
            self.raw[FLAGS] &= !FLAG_HAS_SPECIES;
        } else {
            self.raw[FLAGS] |= FLAG_HAS_SPECIES;
        }
    }

    pub fn held_item(&self) -> u16 {
        read_u16(&self.raw, HELD_ITEM)
    }

    pub fn set_held_item(&mut self, item: u16) {
        write_u16(&mut self.raw, HELD_ITEM, item);
    }

    pub fn experience(&self) -> u32 {
        read_u32(&self.raw, EXPERIENCE)
    }

    pub fn set_experience(&mut self, exp: u32) {
        write_u32(&mut self.raw, EXPERIENCE, exp);
    }

    /// PP Ups applied to move `slot` (two bits per move).
    pub fn pp_ups(&self, slot: usize) -> Result<u8, CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        Ok(bits(u32::from(self.raw[PP_UPS]), slot as u32 * 2, 2) as u8)
    }

    pub fn set_pp_ups(&mut self, slot: usize, count: u8) -> Result<(), CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        CoreError::check_index("pp ups", usize::from(count), 4)?;
        let packed = with_bits(
            u32::from(self.raw[PP_UPS]),
            slot as u32 * 2,
            2,
            u32::from(count),
        );
        self.raw[PP_UPS] = packed as u8;
        Ok(())
    }

    pub fn friendship(&self) -> u8 {
        self.raw[FRIENDSHIP]
    }

    pub fn set_friendship(&mut self, friendship: u8) {
        self.raw[FRIENDSHIP] = friendship;
    }

    pub fn move_id(&self, slot: usize) -> Result<u16, CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        Ok(read_u16(&self.raw, MOVES + slot * 2))
    }

    pub fn set_move(&mut self, slot: usize, id: u16, pp: u8) -> Result<(), CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        write_u16(&mut self.raw, MOVES + slot * 2, id);
        self.raw[MOVE_PP + slot] = pp;
        Ok(())
    }

    pub fn move_pp(&self, slot: usize) -> Result<u8, CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        Ok(self.raw[MOVE_PP + slot])
    }

    pub fn ev(&self, stat: StatKind) -> u8 {
        self.raw[EVS + stat.index()]
    }

    pub fn set_ev(&mut self, stat: StatKind, value: u8) {
        self.raw[EVS + stat.index()] = value;
    }

    pub fn evs(&self) -> [u8; 6] {
        StatKind::ALL.map(|s| self.ev(s))
    }

    /// Contest conditions: cool, beauty, cute, smart, tough, then feel.
    pub fn contest_stat(&self, index: usize) -> Result<u8, CoreError> {
        CoreError::check_index("contest stat", index, 6)?;
        Ok(self.raw[CONTEST + index])
    }

    pub fn pokerus(&self) -> u8 {
        self.raw[POKERUS]
    }

    pub fn met_location(&self) -> u8 {
        self.raw[MET_LOCATION]
    }

    pub fn set_met_location(&mut self, location: u8) {
        self.raw[MET_LOCATION] = location;
    }

    fn origins(&self) -> u32 {
        u32::from(read_u16(&self.raw, ORIGINS))
    }

    fn set_origins(&mut self, value: u32) {
        write_u16(&mut self.raw, ORIGINS, value as u16);
    }

    pub fn level_met(&self) -> u8 {
        bits(self.origins(), 0, 7) as u8
    }

    pub fn set_level_met(&mut self, level: u8) -> Result<(), CoreError> {
        CoreError::check_index("level met", usize::from(level), 1 << 7)?;
        self.set_origins(with_bits(self.origins(), 0, 7, u32::from(level)));
        Ok(())
    }

    pub fn origin_game(&self) -> u8 {
        bits(self.origins(), 7, 4) as u8
    }

    pub fn set_origin_game(&mut self, game: u8) -> Result<(), CoreError> {
        CoreError::check_index("origin game", usize::from(game), 1 << 4)?;
        self.set_origins(with_bits(self.origins(), 7, 4, u32::from(game)));
        Ok(())
    }

    pub fn ball(&self) -> u8 {
        bits(self.origins(), 11, 4) as u8
    }

    pub fn set_ball(&mut self, ball: u8) -> Result<(), CoreError> {
        CoreError::check_index("ball", usize::from(ball), 1 << 4)?;
        self.set_origins(with_bits(self.origins(), 11, 4, u32::from(ball)));
        Ok(())
    }

    pub fn ot_gender(&self) -> Gender {
        Gender::from_female_flag(bits(self.origins(), 15, 1) != 0)
    }

    pub fn set_ot_gender(&mut self, gender: Gender) {
        let flag = u32::from(gender.is_female());
        self.set_origins(with_bits(self.origins(), 15, 1, flag));
    }

    fn iv_word(&self) -> u32 {
        read_u32(&self.raw, IVS)
    }

    pub fn iv(&self, stat: StatKind) -> u8 {
        bits(self.iv_word(), stat.index() as u32 * 5, 5) as u8
    }

    pub fn set_iv(&mut self, stat: StatKind, value: u8) -> Result<(), CoreError> {
        CoreError::check_index("iv", usize::from(value), usize::from(MAX_IV) + 1)?;
        let word = with_bits(self.iv_word(), stat.index() as u32 * 5, 5, u32::from(value));
        write_u32(&mut self.raw, IVS, word);
        Ok(())
    }

    pub fn ivs(&self) -> [u8; 6] {
        StatKind::ALL.map(|s| self.iv(s))
    }

    pub fn is_egg(&self) -> bool {
        bits(self.iv_word(), IV_EGG_BIT, 1) != 0
    }

    pub fn set_egg(&mut self, egg: bool) {
        let word = with_bits(self.iv_word(), IV_EGG_BIT, 1, u32::from(egg));
        write_u32(&mut self.raw, IVS, word);
    }

    /// Which of the species' two abilities is active.
    pub fn ability_slot(&self) -> u8 {
        bits(self.iv_word(), IV_ABILITY_BIT, 1) as u8
    }

    pub fn ribbons(&self) -> u32 {
        read_u32(&self.raw, RIBBONS)
    }

    pub fn set_ribbons(&mut self, ribbons: u32) {
        write_u32(&mut self.raw, RIBBONS, ribbons);
    }

    pub fn nature(&self) -> Nature {
        Nature::from_pid(self.pid())
    }

    pub fn is_shiny(&self) -> bool {
        let pid = self.pid();
        let value = u32::from(self.ot_id())
            ^ u32::from(self.ot_secret_id())
            ^ (pid >> 16)
            ^ (pid & 0xFFFF);
        value < 8
    }

    pub fn condition(&self) -> Condition {
        Condition::from_raw(read_u32(&self.raw, STATUS))
    }

    pub fn set_condition(&mut self, condition: Condition) -> Result<(), CoreError> {
        write_u32(&mut self.raw, STATUS, condition.raw()?);
        Ok(())
    }

    pub fn level(&self) -> u8 {
        self.raw[LEVEL]
    }

    pub fn set_level(&mut self, level: u8) {
        self.raw[LEVEL] = level;
    }

    pub fn pokerus_days(&self) -> u8 {
        self.raw[POKERUS_TIME]
    }

    pub fn current_hp(&self) -> u16 {
        read_u16(&self.raw, CURRENT_HP)
    }

    pub fn set_current_hp(&mut self, hp: u16) {
        write_u16(&mut self.raw, CURRENT_HP, hp);
    }

    pub fn stats(&self) -> Stats {
        let at = |i: usize| read_u16(&self.raw, STATS + i * 2);
        Stats {
            hp: at(0),
            atk: at(1),
            def: at(2),
            spd: at(3),
            satk: at(4),
            sdef: at(5),
        }
    }

    pub fn set_stats(&mut self, stats: &Stats) {
        let values = [
            stats.hp, stats.atk, stats.def, stats.spd, stats.satk, stats.sdef,
        ];
        for (i, v) in values.into_iter().enumerate() {
            write_u16(&mut self.raw, STATS + i * 2, v);
        }
    }

    /// Recomputes the party stats for the current level. A creature at full
    /// health stays at full health; otherwise HP is clamped to the new maximum.
    pub fn recalculate_stats(&mut self, base: &BaseStats) {
        let old_max = self.stats().hp;
        let stats = calc_stats(base, self.level(), self.ivs(), self.evs(), self.nature());
        let hp = if self.current_hp() >= old_max {
            stats.hp
        } else {
            self.current_hp().min(stats.hp)
        };
        self.set_stats(&stats);
        self.set_current_hp(hp);
    }
}
