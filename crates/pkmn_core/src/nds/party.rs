use crate::crypt::pk4::PARTY_SIZE;
use crate::error::CoreError;
use crate::layout::{ByteRange, read_u32, write_u32};

use super::pk4::Pk4;

pub const PARTY_CAPACITY: usize = 6;
pub const PARTY_BYTES: usize = 4 + PARTY_CAPACITY * PARTY_SIZE;

fn slot(index: usize) -> ByteRange {
    ByteRange::at(4, PARTY_CAPACITY * PARTY_SIZE).element(index, PARTY_SIZE)
}

/// Count word followed by six 236-byte party records.
#[derive(Debug)]
pub struct Party<B> {
    buf: B,
}

impl<B: AsRef<[u8]>> Party<B> {
    pub(crate) fn new(buf: B) -> Self {
        Self { buf }
    }

    pub fn count(&self) -> Result<usize, CoreError> {
        let count = read_u32(self.buf.as_ref(), 0) as usize;
        if count > PARTY_CAPACITY {
            return Err(CoreError::corrupt(format!(
                "party count {count} exceeds capacity {PARTY_CAPACITY}"
            )));
        }
        Ok(count)
    }

    pub fn get(&self, index: usize) -> Result<Pk4, CoreError> {
        CoreError::check_index("party slot", index, PARTY_CAPACITY)?;
        Pk4::from_stored(slot(index).slice(self.buf.as_ref())?)
    }

    pub fn slots(&self) -> Result<Vec<Pk4>, CoreError> {
        (0..PARTY_CAPACITY).map(|i| self.get(i)).collect()
    }

    pub fn members(&self) -> Result<Vec<Pk4>, CoreError> {
        (0..self.count()?).map(|i| self.get(i)).collect()
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Party<B> {
    /// Stores a record as held. Records whose checksum does not match are
    /// refused; re-sign edits with `update_checksum` first.
    pub fn set(&mut self, index: usize, pk: &Pk4) -> Result<(), CoreError> {
        CoreError::check_index("party slot", index, PARTY_CAPACITY)?;
        pk.check_writable()?;
        slot(index)
            .slice_mut(self.buf.as_mut())?
            .copy_from_slice(&pk.to_stored());
        Ok(())
    }

    pub fn push(&mut self, pk: &Pk4) -> Result<usize, CoreError> {
        let count = self.count()?;
        CoreError::check_index("party slot", count, PARTY_CAPACITY)?;
        self.set(count, pk)?;
        write_u32(self.buf.as_mut(), 0, count as u32 + 1);
        Ok(count)
    }
}
