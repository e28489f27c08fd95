//! Party and PC storage views.

use crate::crypt::pk3::{BOX_SIZE, PARTY_SIZE};
use crate::error::CoreError;
use crate::layout::{ByteRange, read_u32, write_u32};
use crate::text::gba as text;

use super::pk3::Pk3;

pub const PARTY_CAPACITY: usize = 6;
/// Count word plus six party records.
pub const PARTY_BYTES: usize = 4 + PARTY_CAPACITY * PARTY_SIZE;

pub const BOX_COUNT: usize = 14;
pub const BOX_CAPACITY: usize = 30;
pub const BOX_NAME_LEN: usize = 9;

const PC_RECORDS: usize = 4;
const PC_NAMES: usize = PC_RECORDS + BOX_COUNT * BOX_CAPACITY * BOX_SIZE;
const PC_WALLPAPERS: usize = PC_NAMES + BOX_COUNT * BOX_NAME_LEN;

fn party_slot(index: usize) -> ByteRange {
    ByteRange::at(4, PARTY_CAPACITY * PARTY_SIZE).element(index, PARTY_SIZE)
}

/// The party: a count word followed by six slots. Slots past the count are
/// still addressable; positions never move except through [`Party::remove`].
#[derive(Debug)]
pub struct Party<B> {
    buf: B,
}

impl<B: AsRef<[u8]>> Party<B> {
    pub(crate) fn new(buf: B) -> Self {
        Self { buf }
    }

    pub fn raw_count(&self) -> u32 {
        read_u32(self.buf.as_ref(), 0)
    }

    /// Fails with `CorruptImage` when the stored count exceeds the capacity.
    pub fn count(&self) -> Result<usize, CoreError> {
        let count = self.raw_count() as usize;
        if count > PARTY_CAPACITY {
            return Err(CoreError::corrupt(format!(
                "party count {count} exceeds capacity {PARTY_CAPACITY}"
            )));
        }
        Ok(count)
    }

    pub fn get(&self, index: usize) -> Result<Pk3, CoreError> {
        CoreError::check_index("party slot", index, PARTY_CAPACITY)?;
        Pk3::from_stored(party_slot(index).slice(self.buf.as_ref())?)
    }

    /// Every slot in order, empty ones included.
    pub fn slots(&self) -> Result<Vec<Pk3>, CoreError> {
        (0..PARTY_CAPACITY).map(|i| self.get(i)).collect()
    }

    /// The first `count` members.
    pub fn members(&self) -> Result<Vec<Pk3>, CoreError> {
        (0..self.count()?).map(|i| self.get(i)).collect()
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Party<B> {
    /// Stores a record as held. Records whose checksum does not match are
    /// refused; re-sign edits with `update_checksum` first.
    pub fn set(&mut self, index: usize, pk: &Pk3) -> Result<(), CoreError> {
        CoreError::check_index("party slot", index, PARTY_CAPACITY)?;
        pk.check_writable()?;
        party_slot(index)
            .slice_mut(self.buf.as_mut())?
            .copy_from_slice(&pk.to_stored());
        Ok(())
    }

    /// Appends after the last member and returns its slot.
    pub fn push(&mut self, pk: &Pk3) -> Result<usize, CoreError> {
        let count = self.count()?;
        CoreError::check_index("party slot", count, PARTY_CAPACITY)?;
        self.set(count, pk)?;
        write_u32(self.buf.as_mut(), 0, count as u32 + 1);
        Ok(count)
    }

    /// Removes a member, shifting later members down and clearing the freed
    /// last slot.
    pub fn remove(&mut self, index: usize) -> Result<Pk3, CoreError> {
        let count = self.count()?;
        CoreError::check_index("party member", index, count)?;
        let removed = self.get(index)?;
        let records = ByteRange::at(4, PARTY_CAPACITY * PARTY_SIZE).slice_mut(self.buf.as_mut())?;
        records.copy_within((index + 1) * PARTY_SIZE..count * PARTY_SIZE, index * PARTY_SIZE);
        records[(count - 1) * PARTY_SIZE..count * PARTY_SIZE].fill(0);
        write_u32(self.buf.as_mut(), 0, count as u32 - 1);
        Ok(removed)
    }
}

fn box_slot(box_index: usize, slot: usize) -> ByteRange {
    ByteRange::at(PC_RECORDS + box_index * BOX_CAPACITY * BOX_SIZE, BOX_CAPACITY * BOX_SIZE)
        .element(slot, BOX_SIZE)
}

fn box_name(box_index: usize) -> ByteRange {
    ByteRange::at(PC_NAMES, BOX_COUNT * BOX_NAME_LEN).element(box_index, BOX_NAME_LEN)
}

/// PC storage: current box, fourteen boxes of thirty records, names and
/// wallpapers.
#[derive(Debug)]
pub struct Pc<B> {
    buf: B,
}

impl<B: AsRef<[u8]>> Pc<B> {
    pub(crate) fn new(buf: B) -> Self {
        Self { buf }
    }

    pub fn current_box(&self) -> u32 {
        read_u32(self.buf.as_ref(), 0)
    }

    pub fn get(&self, box_index: usize, slot: usize) -> Result<Pk3, CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        CoreError::check_index("box slot", slot, BOX_CAPACITY)?;
        Pk3::from_stored(box_slot(box_index, slot).slice(self.buf.as_ref())?)
    }

    pub fn pc_box(&self, box_index: usize) -> Result<Vec<Pk3>, CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        (0..BOX_CAPACITY).map(|s| self.get(box_index, s)).collect()
    }

    pub fn box_name(&self, box_index: usize) -> Result<String, CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        Ok(text::decode_string(box_name(box_index).slice(self.buf.as_ref())?))
    }

    pub fn wallpaper(&self, box_index: usize) -> Result<u8, CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        Ok(self.buf.as_ref()[PC_WALLPAPERS + box_index])
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Pc<B> {
    pub fn set_current_box(&mut self, box_index: usize) -> Result<(), CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        write_u32(self.buf.as_mut(), 0, box_index as u32);
        Ok(())
    }

    /// Stores the box part of `pk`; the party extension is dropped.
    pub fn set(&mut self, box_index: usize, slot: usize, pk: &Pk3) -> Result<(), CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        CoreError::check_index("box slot", slot, BOX_CAPACITY)?;
        pk.check_writable()?;
        box_slot(box_index, slot)
            .slice_mut(self.buf.as_mut())?
            .copy_from_slice(&pk.to_stored()[..BOX_SIZE]);
        Ok(())
    }

    pub fn set_box_name(&mut self, box_index: usize, name: &str) -> Result<(), CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        box_name(box_index)
            .slice_mut(self.buf.as_mut())?
            .copy_from_slice(&text::encode_str(name, BOX_NAME_LEN));
        Ok(())
    }

    pub fn set_wallpaper(&mut self, box_index: usize, wallpaper: u8) -> Result<(), CoreError> {
        CoreError::check_index("pc box", box_index, BOX_COUNT)?;
        self.buf.as_mut()[PC_WALLPAPERS + box_index] = wallpaper;
        Ok(())
    }
}
