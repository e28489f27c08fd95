//! In-game text transcoding.
//!
//! Both generations decode into UCS-2 code units. Decoding and encoding never
//! fail: anything without a mapping degrades to the `?` glyph.

pub mod gba;
pub mod nds;

pub const PLACEHOLDER: u16 = b'?' as u16;

/// Converts code units to a `String`, stopping at the first zero unit.
pub fn units_to_string(units: &[u16]) -> String {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    char::decode_utf16(units[..end].iter().copied())
        .map(|r| r.unwrap_or('?'))
        .collect()
}

/// Converts a string to UCS-2 code units. Characters outside the basic
/// multilingual plane become the placeholder.
pub fn str_to_units(s: &str) -> Vec<u16> {
    s.chars()
        .map(|c| u16::try_from(u32::from(c)).unwrap_or(PLACEHOLDER))
        .collect()
}
