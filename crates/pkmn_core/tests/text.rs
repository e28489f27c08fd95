use pkmn_core::text::{self, gba, nds};

#[test]
fn gba_encodes_letters_and_pads_with_terminator() {
    assert_eq!(gba::encode_str("ABC", 4), vec![0xBB, 0xBC, 0xBD, 0xFF]);
    assert_eq!(gba::encode_str("AB", 5), vec![0xBB, 0xBC, 0xFF, 0xFF, 0xFF]);
    assert_eq!(gba::encode_str("ABCDEFGH", 7).len(), 7);
}

#[test]
fn gba_decode_stops_at_terminator_and_zero_fills() {
    let units = gba::decode(&[0xBB, 0xD5, 0xFF, 0xBC]);
    assert_eq!(units, vec![u16::from(b'A'), u16::from(b'a'), 0, 0]);
    assert_eq!(gba::decode_string(&[0xC2, 0xC3, 0xFF, 0, 0]), "HI");
    assert_eq!(gba::decode_string(&[0xA1, 0xA2, 0x00, 0xAD]), "01 .");
}

#[test]
fn gba_unmapped_bytes_degrade_to_placeholder() {
    assert_eq!(gba::decode_byte(0x40), text::PLACEHOLDER);
    assert_eq!(gba::encode_unit(u16::from(b'@')), gba::PLACEHOLDER_BYTE);
    assert_eq!(gba::encode_str("A@", 2), vec![0xBB, 0xAC]);
}

#[test]
fn nds_maps_ranges_and_terminates() {
    let raw = nds::encode_str("Az9 !", 8);
    assert_eq!(raw.len(), 16);
    let codes: Vec<u16> = raw
        .chunks_exact(2)
        .map(|p| u16::from_le_bytes([p[0], p[1]]))
        .collect();
    assert_eq!(
        codes,
        vec![0x012B, 0x015E, 0x012A, 0x01DE, 0x01AB, 0xFFFF, 0xFFFF, 0xFFFF]
    );
    assert_eq!(nds::decode_string(&raw), "Az9 !");
}

#[test]
fn nds_round_trips_latin_and_degrades_the_rest() {
    let raw = nds::encode_str("Éclair♂", 10);
    assert_eq!(nds::decode_string(&raw), "Éclair♂");
    assert_eq!(nds::encode_unit(0x4E00), nds::PLACEHOLDER_CODE);
    assert_eq!(nds::decode_code(0x0001), text::PLACEHOLDER);
    assert_eq!(nds::decode_code(0x01A5), text::PLACEHOLDER);
}

#[test]
fn every_mapped_gba_byte_encodes_back_to_itself() {
    let mut mapped = 0;
    for b in 0..gba::TERMINATOR {
        let unit = gba::decode_byte(b);
        if unit == text::PLACEHOLDER && b != gba::PLACEHOLDER_BYTE {
            continue;
        }
        assert_eq!(gba::encode_unit(unit), b, "byte {b:#04x}");
        mapped += 1;
    }
    assert!(mapped > 140, "only {mapped} bytes mapped");
}

#[test]
fn every_mapped_nds_code_encodes_back_to_itself() {
    let mut mapped = 0;
    for code in 0..nds::TERMINATOR {
        let unit = nds::decode_code(code);
        if unit == text::PLACEHOLDER && code != nds::PLACEHOLDER_CODE {
            continue;
        }
        assert_eq!(nds::encode_unit(unit), code, "code {code:#06x}");
        mapped += 1;
    }
    assert!(mapped > 150, "only {mapped} codes mapped");
}
