use super::{PLACEHOLDER, str_to_units, units_to_string};

pub const TERMINATOR: u8 = 0xFF;
pub const PLACEHOLDER_BYTE: u8 = 0xAC;

// Western character set. Zero marks bytes without a single-character glyph
// (control codes, two-letter ligatures, unused slots).
#[rustfmt::skip]
const CHARSET: [u16; 256] = [
    // 0x00
    0x0020, 0x00C0, 0x00C1, 0x00C2, 0x00C7, 0x00C8, 0x00C9, 0x00CA,
    0x00CB, 0x00CC, 0x0000, 0x00CE, 0x00CF, 0x00D2, 0x00D3, 0x00D4,
    // 0x10
    0x0152, 0x00D9, 0x00DA, 0x00DB, 0x00D1, 0x00DF, 0x00E0, 0x00E1,
    0x0000, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x0000,
    // 0x20
    0x00EE, 0x00EF, 0x00F2, 0x00F3, 0x00F4, 0x0153, 0x00F9, 0x00FA,
    0x00FB, 0x00F1, 0x00BA, 0x00AA, 0x0000, 0x0026, 0x002B, 0x0000,
    // 0x30
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x003D, 0x003B, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x40
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x50
    0x0000, 0x00BF, 0x00A1, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x00CD, 0x0025, 0x0028, 0x0029, 0x0000, 0x0000,
    // 0x60
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x00E2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00ED,
    // 0x70
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x2191, 0x2193, 0x2190, 0x2192, 0x0000, 0x0000, 0x0000,
    // 0x80
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x003C, 0x003E, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0x90
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 0xA0
    0x0000, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036,
    0x0037, 0x0038, 0x0039, 0x0021, 0x003F, 0x002E, 0x002D, 0x30FB,
    // 0xB0
    0x2026, 0x201C, 0x201D, 0x2018, 0x2019, 0x2642, 0x2640, 0x0024,
    0x002C, 0x00D7, 0x002F, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045,
    // 0xC0
    0x0046, 0x0047, 0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D,
    0x004E, 0x004F, 0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055,
    // 0xD0
    0x0056, 0x0057, 0x0058, 0x0059, 0x005A, 0x0061, 0x0062, 0x0063,
    0x0064, 0x0065, 0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B,
    // 0xE0
    0x006C, 0x006D, 0x006E, 0x006F, 0x0070, 0x0071, 0x0072, 0x0073,
    0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x25B6,
    // 0xF0
    0x003A, 0x00C4, 0x00D6, 0x00DC, 0x00E4, 0x00F6, 0x00FC, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

pub fn decode_byte(b: u8) -> u16 {
    match CHARSET[usize::from(b)] {
        0 => PLACEHOLDER,
        unit => unit,
    }
}

pub fn encode_unit(unit: u16) -> u8 {
    CHARSET
        .iter()
        .position(|&c| c == unit)
        .map(|i| i as u8)
        .unwrap_or(PLACEHOLDER_BYTE)
}

/// Decodes a fixed-width text field. The result has one unit per input byte;
/// everything from the terminator on is zero.
pub fn decode(raw: &[u8]) -> Vec<u16> {
    let mut out = vec![0u16; raw.len()];
    for (dst, &b) in out.iter_mut().zip(raw) {
        if b == TERMINATOR {
            break;
        }
        *dst = decode_byte(b);
    }
    out
}

/// Encodes units into a `len`-byte field. Input stops at the first zero unit;
/// the output is terminated when it fits and padded with terminator bytes.
pub fn encode(units: &[u16], len: usize) -> Vec<u8> {
    let mut out = vec![TERMINATOR; len];
    for (dst, &unit) in out.iter_mut().zip(units.iter().take_while(|&&u| u != 0)) {
        *dst = encode_unit(unit);
    }
    out
}

pub fn decode_string(raw: &[u8]) -> String {
    units_to_string(&decode(raw))
}

pub fn encode_str(s: &str, len: usize) -> Vec<u8> {
    encode(&str_to_units(s), len)
}
