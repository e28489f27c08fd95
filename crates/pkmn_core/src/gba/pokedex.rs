use crate::error::CoreError;
use crate::layout::{bit, set_bit};

use super::types::{DEX_BYTES, DEX_OWNED, DEX_SEEN, NATIONAL_DEX_MAX, VariantLayout};

/// Seen/owned flags by national dex number. Works on the whole logical buffer
/// because the seen flags are mirrored into sections 1 and 4.
#[derive(Debug)]
pub struct Pokedex<B> {
    buf: B,
    layout: &'static VariantLayout,
}

fn flag_index(dex: u16) -> Result<usize, CoreError> {
    if dex == 0 || dex > NATIONAL_DEX_MAX {
        return Err(CoreError::out_of_range(
            "pokedex number",
            usize::from(dex),
            usize::from(NATIONAL_DEX_MAX) + 1,
        ));
    }
    Ok(usize::from(dex - 1))
}

impl<B: AsRef<[u8]>> Pokedex<B> {
    pub(crate) fn new(buf: B, layout: &'static VariantLayout) -> Self {
        Self { buf, layout }
    }

    pub fn owned(&self, dex: u16) -> Result<bool, CoreError> {
        let i = flag_index(dex)?;
        Ok(bit(&self.buf.as_ref()[DEX_OWNED..DEX_OWNED + DEX_BYTES], i))
    }

    pub fn seen(&self, dex: u16) -> Result<bool, CoreError> {
        let i = flag_index(dex)?;
        Ok(bit(&self.buf.as_ref()[DEX_SEEN..DEX_SEEN + DEX_BYTES], i))
    }

    pub fn owned_count(&self) -> usize {
        count_bits(&self.buf.as_ref()[DEX_OWNED..DEX_OWNED + DEX_BYTES])
    }

    pub fn seen_count(&self) -> usize {
        count_bits(&self.buf.as_ref()[DEX_SEEN..DEX_SEEN + DEX_BYTES])
    }

    pub fn national(&self) -> bool {
        let (offset, magic) = self.layout.national_flag;
        self.buf.as_ref()[offset] == magic
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Pokedex<B> {
    pub fn set_owned(&mut self, dex: u16, on: bool) -> Result<(), CoreError> {
        let i = flag_index(dex)?;
        set_bit(&mut self.buf.as_mut()[DEX_OWNED..DEX_OWNED + DEX_BYTES], i, on);
        Ok(())
    }

    pub fn set_seen(&mut self, dex: u16, on: bool) -> Result<(), CoreError> {
        let i = flag_index(dex)?;
        let mirrors = self.layout.seen_mirrors;
        let buf = self.buf.as_mut();
        for base in [DEX_SEEN, mirrors[0], mirrors[1]] {
            set_bit(&mut buf[base..base + DEX_BYTES], i, on);
        }
        Ok(())
    }

    pub fn set_national(&mut self, on: bool) {
        let (offset, magic) = self.layout.national_flag;
        self.buf.as_mut()[offset] = if on { magic } else { 0 };
    }
}

fn count_bits(bytes: &[u8]) -> usize {
    // Bits past the last dex number are padding.
    (0..usize::from(NATIONAL_DEX_MAX))
        .filter(|&i| bit(bytes, i))
        .count()
}
