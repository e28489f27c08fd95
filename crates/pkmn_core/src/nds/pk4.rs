//! Generation 4 creature records, held decrypted.

use crate::checksum::record_checksum;
use crate::crypt::pk4::{self, BOX_SIZE, CHECKSUM_OFFSET, DATA_OFFSET, DATA_SIZE, PARTY_SIZE};
use crate::error::CoreError;
use crate::gba::pk3::RecordStatus;
use crate::layout::{bits, read_u16, read_u32, with_bits, write_u16, write_u32};
use crate::stat::{BaseStats, Nature, StatKind, Stats, calc_stats};
use crate::text::nds as text;

const PID: usize = 0x00;
const FLAGS: usize = 0x04;
const FLAG_BAD_EGG: u8 = 1 << 2;

// Block A
const SPECIES: usize = 0x08;
const HELD_ITEM: usize = 0x0A;
const OT_ID: usize = 0x0C;
const OT_SECRET_ID: usize = 0x0E;
const EXPERIENCE: usize = 0x10;
const FRIENDSHIP: usize = 0x14;
const ABILITY: usize = 0x15;
const MARKINGS: usize = 0x16;
const LANGUAGE: usize = 0x17;
const EVS: usize = 0x18;
const RIBBONS: usize = 0x24;
// Block B
const MOVES: usize = 0x28;
const MOVE_PP: usize = 0x30;
const PP_UPS: usize = 0x34;
const IVS: usize = 0x38;
// Block C
const NICKNAME: usize = 0x48;
const NICKNAME_LEN: usize = 11;
// Block D
const OT_NAME: usize = 0x68;
const OT_NAME_LEN: usize = 8;
// Party extension
const STATUS: usize = 0x88;
const LEVEL: usize = 0x8C;
const CURRENT_HP: usize = 0x8E;
const STATS: usize = 0x90;

const IV_EGG_BIT: u32 = 30;
const IV_NICKNAMED_BIT: u32 = 31;

pub const MOVE_SLOTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pk4 {
    raw: [u8; PARTY_SIZE],
}

impl Default for Pk4 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Pk4 {
    pub fn empty() -> Self {
        Self {
            raw: [0; PARTY_SIZE],
        }
    }

    /// Decrypts a 136-byte box or 236-byte party record.
    pub fn from_stored(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() != BOX_SIZE && bytes.len() != PARTY_SIZE {
            return Err(CoreError::InvalidLength {
                what: "gen 4 record",
                expected: PARTY_SIZE,
                actual: bytes.len(),
            });
        }
        // Unused slots are left zeroed rather than masked.
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::empty());
        }
        let mut raw = [0u8; PARTY_SIZE];
        raw[..bytes.len()].copy_from_slice(bytes);
        pk4::decrypt(&mut raw[..bytes.len()])?;
        Ok(Self { raw })
    }

    pub fn as_bytes(&self) -> &[u8; PARTY_SIZE] {
        &self.raw
    }

    /// The stored form, masked with the checksum as held. A zeroed record
    /// stays zeroed.
    pub fn to_stored(&self) -> [u8; PARTY_SIZE] {
        let mut out = self.raw;
        if out.iter().any(|&b| b != 0) {
            pk4::encrypt_party(&mut out);
        }
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
        read_u16(&self.raw, CHECKSUM_OFFSET)
    }

    pub fn computed_checksum(&self) -> u16 {
        record_checksum(&self.raw[DATA_OFFSET..DATA_OFFSET + DATA_SIZE])
    }

    pub fn update_checksum(&mut self) {
        let sum = self.computed_checksum();
        write_u16(&mut self.raw, CHECKSUM_OFFSET, sum);
    }

    pub fn pid(&self) -> u32 {
        read_u32(&self.raw, PID)
    }

    pub fn set_pid(&mut self, pid: u32) {
        write_u32(&mut self.raw, PID, pid);
    }

    pub fn species(&self) -> u16 {
        read_u16(&self.raw, SPECIES)
    }

    pub fn set_species(&mut self, species: u16) {
        write_u16(&mut self.raw, SPECIES, species);
    }

    pub fn held_item(&self) -> u16 {
        read_u16(&self.raw, HELD_ITEM)
    }

    pub fn set_held_item(&mut self, item: u16) {
        write_u16(&mut self.raw, HELD_ITEM, item);
    }

    pub fn ot_id(&self) -> u16 {
        read_u16(&self.raw, OT_ID)
    }

    pub fn ot_secret_id(&self) -> u16 {
        read_u16(&self.raw, OT_SECRET_ID)
    }

    pub fn set_ot_ids(&mut self, id: u16, secret_id: u16) {
        write_u16(&mut self.raw, OT_ID, id);
        write_u16(&mut self.raw, OT_SECRET_ID, secret_id);
    }

    pub fn experience(&self) -> u32 {
        read_u32(&self.raw, EXPERIENCE)
    }

    pub fn set_experience(&mut self, exp: u32) {
        write_u32(&mut self.raw, EXPERIENCE, exp);
    }

    pub fn friendship(&self) -> u8 {
        self.raw[FRIENDSHIP]
    }

    pub fn set_friendship(&mut self, value: u8) {
        self.raw[FRIENDSHIP] = value;
    }

    pub fn ability(&self) -> u8 {
        self.raw[ABILITY]
    }

    pub fn markings(&self) -> u8 {
        self.raw[MARKINGS]
    }

    pub fn language(&self) -> u8 {
        self.raw[LANGUAGE]
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

    pub fn ribbons(&self) -> u32 {
        read_u32(&self.raw, RIBBONS)
    }

    pub fn move_id(&self, slot: usize) -> Result<u16, CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        Ok(read_u16(&self.raw, MOVES + slot * 2))
    }

    pub fn move_pp(&self, slot: usize) -> Result<u8, CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        Ok(self.raw[MOVE_PP + slot])
    }

    pub fn pp_ups(&self, slot: usize) -> Result<u8, CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        Ok(self.raw[PP_UPS + slot])
    }

    pub fn set_move(&mut self, slot: usize, id: u16, pp: u8) -> Result<(), CoreError> {
        CoreError::check_index("move slot", slot, MOVE_SLOTS)?;
        write_u16(&mut self.raw, MOVES + slot * 2, id);
        self.raw[MOVE_PP + slot] = pp;
        Ok(())
    }

    fn iv_word(&self) -> u32 {
        read_u32(&self.raw, IVS)
    }

    pub fn iv(&self, stat: StatKind) -> u8 {
        bits(self.iv_word(), stat.index() as u32 * 5, 5) as u8
    }

    pub fn set_iv(&mut self, stat: StatKind, value: u8) -> Result<(), CoreError> {
        CoreError::check_index("iv", usize::from(value), 32)?;
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

    pub fn is_nicknamed(&self) -> bool {
        bits(self.iv_word(), IV_NICKNAMED_BIT, 1) != 0
    }

    pub fn nickname(&self) -> String {
        text::decode_string(&self.raw[NICKNAME..NICKNAME + NICKNAME_LEN * 2])
    }

    pub fn set_nickname(&mut self, name: &str) {
        let encoded = text::encode_str(name, NICKNAME_LEN);
        self.raw[NICKNAME..NICKNAME + NICKNAME_LEN * 2].copy_from_slice(&encoded);
        let word = with_bits(self.iv_word(), IV_NICKNAMED_BIT, 1, 1);
        write_u32(&mut self.raw, IVS, word);
    }

    pub fn ot_name(&self) -> String {
        text::decode_string(&self.raw[OT_NAME..OT_NAME + OT_NAME_LEN * 2])
    }

    pub fn set_ot_name(&mut self, name: &str) {
        let encoded = text::encode_str(name, OT_NAME_LEN);
        self.raw[OT_NAME..OT_NAME + OT_NAME_LEN * 2].copy_from_slice(&encoded);
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

    pub fn status_condition(&self) -> u32 {
        read_u32(&self.raw, STATUS)
    }

    pub fn level(&self) -> u8 {
        self.raw[LEVEL]
    }

    pub fn set_level(&mut self, level: u8) {
        self.raw[LEVEL] = level;
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
