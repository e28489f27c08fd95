use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::layout::{read_u16, write_u16};

pub const SLOT_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub index: u16,
    pub amount: u16,
}

impl ItemSlot {
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }
}

/// One pocket's slots. Quantities are stored XOR'd with `mask`, which is
/// zero for unmasked storage.
#[derive(Debug)]
pub struct ItemPocket<B> {
    buf: B,
    mask: u16,
}

impl<B: AsRef<[u8]>> ItemPocket<B> {
    pub(crate) fn new(buf: B, mask: u16) -> Self {
        Self { buf, mask }
    }

    pub fn capacity(&self) -> usize {
        self.buf.as_ref().len() / SLOT_SIZE
    }

    pub fn get(&self, index: usize) -> Result<ItemSlot, CoreError> {
        CoreError::check_index("pocket slot", index, self.capacity())?;
        let b = self.buf.as_ref();
        Ok(ItemSlot {
            index: read_u16(b, index * SLOT_SIZE),
            amount: read_u16(b, index * SLOT_SIZE + 2) ^ self.mask,
        })
    }

    pub fn slots(&self) -> Vec<ItemSlot> {
        (0..self.capacity()).filter_map(|i| self.get(i).ok()).collect()
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ItemPocket<B> {
    pub fn set(&mut self, index: usize, slot: ItemSlot) -> Result<(), CoreError> {
        CoreError::check_index("pocket slot", index, self.capacity())?;
        let mask = self.mask;
        let b = self.buf.as_mut();
        write_u16(b, index * SLOT_SIZE, slot.index);
        write_u16(b, index * SLOT_SIZE + 2, slot.amount ^ mask);
        Ok(())
    }
}
