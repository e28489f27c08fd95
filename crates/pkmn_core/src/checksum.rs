//! Integrity codes used by the supported save formats.
//!
//! Every routine here is a pure function over bytes. The 16-bit word sum is
//! the record checksum for both generations; sectors and blocks use their own
//! generation-specific codes.

use crate::error::CoreError;

/// Wrapping 16-bit sum of little-endian u16 words over `buf[start..start + len]`.
///
/// A trailing odd byte is added as a low byte. Panics if the range is outside
/// `buf`; use [`checked_checksum`] for untrusted ranges.
pub fn compute_checksum(buf: &[u8], start: usize, len: usize) -> u16 {
    record_checksum(&buf[start..start + len])
}

pub fn checked_checksum(buf: &[u8], start: usize, len: usize) -> Result<u16, CoreError> {
    let end = start.checked_add(len).ok_or(CoreError::InvalidLength {
        what: "checksum range",
        expected: usize::MAX,
        actual: buf.len(),
    })?;
    let bytes = buf.get(start..end).ok_or(CoreError::InvalidLength {
        what: "checksum range",
        expected: end,
        actual: buf.len(),
    })?;
    Ok(record_checksum(bytes))
}

pub fn record_checksum(bytes: &[u8]) -> u16 {
    let mut chunks = bytes.chunks_exact(2);
    let mut sum = chunks.by_ref().fold(0u16, |acc, w| {
        acc.wrapping_add(u16::from_le_bytes([w[0], w[1]]))
    });
    if let [last] = chunks.remainder() {
        sum = sum.wrapping_add(u16::from(*last));
    }
    sum
}

/// GBA sector checksum: 32-bit sum of u32 words folded into 16 bits.
pub fn gba_section_checksum(bytes: &[u8]) -> u16 {
    let sum = bytes.chunks(4).fold(0u32, |acc, w| {
        let mut word = [0u8; 4];
        word[..w.len()].copy_from_slice(w);
        acc.wrapping_add(u32::from_le_bytes(word))
    });
    ((sum >> 16) as u16).wrapping_add(sum as u16)
}

/// CRC-16/CCITT-FALSE, used by NDS block footers.
pub fn crc16_ccitt(bytes: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &b in bytes {
        crc ^= u16::from(b) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
