//! Generation 4 record obfuscation.
//!
//! Four 32-byte blocks at `0x08..0x88`, shuffled by bits 13..17 of the PID and
//! masked with an LCG stream seeded by the stored checksum. The party extension
//! uses the same stream seeded by the PID.

use super::{BLOCK_ORDERS, shuffle, unshuffle};
use crate::error::CoreError;
use crate::layout::{read_u16, read_u32};

pub const BOX_SIZE: usize = 0x88;
pub const PARTY_SIZE: usize = 0xEC;
pub const DATA_OFFSET: usize = 0x08;
pub const DATA_SIZE: usize = 0x80;
pub const BLOCK_SIZE: usize = 0x20;
pub const CHECKSUM_OFFSET: usize = 0x06;

pub fn block_order(pid: u32) -> &'static [u8; 4] {
    &BLOCK_ORDERS[(((pid & 0x3E000) >> 13) % 24) as usize]
}

pub fn decrypt(record: &mut [u8]) -> Result<(), CoreError> {
    check_len(record)?;
    let pid = read_u32(record, 0);
    let seed = u32::from(read_u16(record, CHECKSUM_OFFSET));
    let data = &mut record[DATA_OFFSET..DATA_OFFSET + DATA_SIZE];
    lcg_xor(data, seed);
    unshuffle(data, BLOCK_SIZE, block_order(pid));
    if record.len() >= PARTY_SIZE {
        lcg_xor(&mut record[BOX_SIZE..PARTY_SIZE], pid);
    }
    Ok(())
}

/// Masks a decrypted record in place. The stored checksum must already match
/// the decrypted payload because it seeds the stream.
pub fn encrypt(record: &mut [u8]) -> Result<(), CoreError> {
    check_len(record)?;
    mask(record);
    Ok(())
}

/// [`encrypt`] for a full party record, which is always long enough.
pub(crate) fn encrypt_party(record: &mut [u8; PARTY_SIZE]) {
    mask(record);
}

fn mask(record: &mut [u8]) {
    let pid = read_u32(record, 0);
    let seed = u32::from(read_u16(record, CHECKSUM_OFFSET));
    let data = &mut record[DATA_OFFSET..DATA_OFFSET + DATA_SIZE];
    shuffle(data, BLOCK_SIZE, block_order(pid));
    lcg_xor(data, seed);
    if record.len() >= PARTY_SIZE {
        lcg_xor(&mut record[BOX_SIZE..PARTY_SIZE], pid);
    }
}

fn check_len(record: &[u8]) -> Result<(), CoreError> {
    if record.len() < BOX_SIZE {
        return Err(CoreError::InvalidLength {
            what: "gen 4 record",
            expected: BOX_SIZE,
            actual: record.len(),
        });
    }
    Ok(())
}

fn lcg_xor(data: &mut [u8], mut seed: u32) {
    for word in data.chunks_exact_mut(2) {
        seed = seed.wrapping_mul(0x41C6_4E6D).wrapping_add(0x6073);
        let mask = ((seed >> 16) as u16).to_le_bytes();
        word[0] ^= mask[0];
        word[1] ^= mask[1];
    }
}
