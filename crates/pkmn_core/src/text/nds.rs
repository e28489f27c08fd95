use super::{str_to_units, units_to_string};

pub const TERMINATOR: u16 = 0xFFFF;
pub const PLACEHOLDER_CODE: u16 = 0x01AC;

const DIGITS_START: u16 = 0x0121;
const UPPER_START: u16 = 0x012B;
const LOWER_START: u16 = 0x0145;
const LATIN_START: u16 = 0x015F;
const PUNCT_START: u16 = 0x01AB;
const SPACE: u16 = 0x01DE;
const NEWLINE: u16 = 0xE000;

#[rustfmt::skip]
const LATIN: [char; 74] = [
    'À', 'Á', 'Â', 'Ã', 'Ä', 'Å', 'Æ', 'Ç', 'È', 'É', 'Ê', 'Ë', 'Ì', 'Í', 'Î', 'Ï',
    'Ð', 'Ñ', 'Ò', 'Ó', 'Ô', 'Õ', 'Ö', '×', 'Ø', 'Ù', 'Ú', 'Û', 'Ü', 'Ý', 'Þ', 'ß',
    'à', 'á', 'â', 'ã', 'ä', 'å', 'æ', 'ç', 'è', 'é', 'ê', 'ë', 'ì', 'í', 'î', 'ï',
    'ð', 'ñ', 'ò', 'ó', 'ô', 'õ', 'ö', '÷', 'ø', 'ù', 'ú', 'û', 'ü', 'ý', 'þ', 'ÿ',
    'Œ', 'œ', 'Ş', 'ş', 'ª', 'º',
    // 0x01A5..0x01A7 are superscript ligatures without a single code point.
    '\0', '\0', '\0',
    '₽',
];

#[rustfmt::skip]
const PUNCT: [char; 27] = [
    '!', '?', ',', '.', '…', '・', '/', '‘', '’', '“', '”', '„', '«', '»', '(', ')',
    '♂', '♀', '+', '-', '*', '#', '=', '&', '~', ':', ';',
];

// '¡' and '¿' sit between the latin block and punctuation.
const INVERTED_EXCLAMATION: u16 = 0x01A9;
const INVERTED_QUESTION: u16 = 0x01AA;

pub fn decode_code(code: u16) -> u16 {
    let ch = match code {
        DIGITS_START..=0x012A => Some(char::from(b'0' + (code - DIGITS_START) as u8)),
        UPPER_START..=0x0144 => Some(char::from(b'A' + (code - UPPER_START) as u8)),
        LOWER_START..=0x015E => Some(char::from(b'a' + (code - LOWER_START) as u8)),
        LATIN_START..=0x01A8 => Some(LATIN[usize::from(code - LATIN_START)]).filter(|&c| c != '\0'),
        INVERTED_EXCLAMATION => Some('¡'),
        INVERTED_QUESTION => Some('¿'),
        PUNCT_START..=0x01C5 => Some(PUNCT[usize::from(code - PUNCT_START)]),
        SPACE => Some(' '),
        NEWLINE => Some('\n'),
        _ => None,
    };
    ch.map(|c| c as u16).unwrap_or(super::PLACEHOLDER)
}

pub fn encode_unit(unit: u16) -> u16 {
    let Some(c) = char::from_u32(u32::from(unit)) else {
        return PLACEHOLDER_CODE;
    };
    match c {
        '0'..='9' => DIGITS_START + (unit - u16::from(b'0')),
        'A'..='Z' => UPPER_START + (unit - u16::from(b'A')),
        'a'..='z' => LOWER_START + (unit - u16::from(b'a')),
        ' ' => SPACE,
        '\n' => NEWLINE,
        '¡' => INVERTED_EXCLAMATION,
        '¿' => INVERTED_QUESTION,
        '\0' => PLACEHOLDER_CODE,
        _ => {
            if let Some(i) = PUNCT.iter().position(|&p| p == c) {
                PUNCT_START + i as u16
            } else if let Some(i) = LATIN.iter().position(|&p| p == c) {
                LATIN_START + i as u16
            } else {
                PLACEHOLDER_CODE
            }
        }
    }
}

/// Decodes a field of little-endian 16-bit codes; one unit per code, zero
/// from the terminator on.
pub fn decode(raw: &[u8]) -> Vec<u16> {
    let mut out = vec![0u16; raw.len() / 2];
    for (dst, pair) in out.iter_mut().zip(raw.chunks_exact(2)) {
        let code = u16::from_le_bytes([pair[0], pair[1]]);
        if code == TERMINATOR {
            break;
        }
        *dst = decode_code(code);
    }
    out
}

/// Encodes into a field of `len` codes (`2 * len` bytes), terminator padded.
pub fn encode(units: &[u16], len: usize) -> Vec<u8> {
    let mut codes = vec![TERMINATOR; len];
    for (dst, &unit) in codes
        .iter_mut()
        .zip(units.iter().take_while(|&&u| u != 0))
    {
        *dst = encode_unit(unit);
    }
    codes.iter().flat_map(|c| c.to_le_bytes()).collect()
}

pub fn decode_string(raw: &[u8]) -> String {
    units_to_string(&decode(raw))
}

pub fn encode_str(s: &str, len: usize) -> Vec<u8> {
    encode(&str_to_units(s), len)
}
