//! Generation 3 record obfuscation.
//!
//! The 48-byte payload at offset 32 is four 12-byte blocks, shuffled by
//! `pid % 24` and masked with `pid ^ ot_fid` as little-endian u32 words.

use super::{BLOCK_ORDERS, shuffle, unshuffle};
use crate::error::CoreError;
use crate::layout::read_u32;

pub const BOX_SIZE: usize = 80;
pub const PARTY_SIZE: usize = 100;
pub const DATA_OFFSET: usize = 32;
pub const DATA_SIZE: usize = 48;
pub const BLOCK_SIZE: usize = 12;

pub fn block_order(pid: u32) -> &'static [u8; 4] {
    &BLOCK_ORDERS[(pid % 24) as usize]
}

pub fn decrypt(record: &mut [u8]) -> Result<(), CoreError> {
    let (pid, key) = keys(record)?;
    let data = &mut record[DATA_OFFSET..DATA_OFFSET + DATA_SIZE];
    xor_words(data, key);
    unshuffle(data, BLOCK_SIZE, block_order(pid));
    Ok(())
}

pub fn encrypt(record: &mut [u8]) -> Result<(), CoreError> {
    let (pid, key) = keys(record)?;
    mask(record, pid, key);
    Ok(())
}

/// [`encrypt`] for a full party record, which always has room for the keys.
pub(crate) fn encrypt_party(record: &mut [u8; PARTY_SIZE]) {
    let pid = read_u32(record, 0);
    let key = pid ^ read_u32(record, 4);
    mask(record, pid, key);
}

fn mask(record: &mut [u8], pid: u32, key: u32) {
    let data = &mut record[DATA_OFFSET..DATA_OFFSET + DATA_SIZE];
    shuffle(data, BLOCK_SIZE, block_order(pid));
    xor_words(data, key);
}

fn keys(record: &[u8]) -> Result<(u32, u32), CoreError> {
    if record.len() < BOX_SIZE {
        return Err(CoreError::InvalidLength {
            what: "gen 3 record",
            expected: BOX_SIZE,
            actual: record.len(),
        });
    }
    let pid = read_u32(record, 0);
    Ok((pid, pid ^ read_u32(record, 4)))
}

fn xor_words(data: &mut [u8], key: u32) {
    let key = key.to_le_bytes();
    for word in data.chunks_exact_mut(4) {
        for (b, k) in word.iter_mut().zip(key) {
            *b ^= k;
        }
    }
}
