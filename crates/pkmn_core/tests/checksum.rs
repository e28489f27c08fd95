use pkmn_core::checksum::{
    checked_checksum, compute_checksum, crc16_ccitt, gba_section_checksum, record_checksum,
};

#[test]
fn word_sum_wraps_and_counts_a_trailing_byte() {
    assert_eq!(record_checksum(&[]), 0);
    assert_eq!(record_checksum(&[0x01, 0x02, 0x03, 0x04]), 0x0201 + 0x0403);
    assert_eq!(record_checksum(&[0xFF, 0xFF, 0x02, 0x00]), 0x0001);
    assert_eq!(record_checksum(&[0x10, 0x00, 0x05]), 0x0015);
}

#[test]
fn word_sum_is_deterministic_and_order_sensitive_across_words() {
    let a = [1u8, 0, 2, 0, 3, 0];
    assert_eq!(record_checksum(&a), record_checksum(&a));
    // Swapping bytes within a word moves weight between high and low halves.
    assert_ne!(record_checksum(&[1, 2]), record_checksum(&[2, 1]));
}

#[test]
fn ranged_checksum_matches_slice_and_rejects_overrun() {
    let buf = [0u8, 0, 5, 0, 6, 0, 9, 9];
    assert_eq!(compute_checksum(&buf, 2, 4), 11);
    assert_eq!(checked_checksum(&buf, 2, 4).unwrap(), 11);
    assert!(checked_checksum(&buf, 6, 4).is_err());
    assert!(checked_checksum(&buf, usize::MAX, 2).is_err());
}

#[test]
fn section_checksum_folds_the_high_half() {
    // 0x0001_0000 + 0x0000_FFFF = 0x0001_FFFF -> 0x0001 + 0xFFFF
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0001_0000u32.to_le_bytes());
    bytes.extend_from_slice(&0x0000_FFFFu32.to_le_bytes());
    assert_eq!(gba_section_checksum(&bytes), 0x0000);
    assert_eq!(gba_section_checksum(&[0x34, 0x12, 0, 0]), 0x1234);
    assert_eq!(gba_section_checksum(&[0; 3968]), 0);
}

#[test]
fn crc_matches_the_standard_check_value() {
    assert_eq!(crc16_ccitt(b"123456789"), 0x29B1);
    assert_eq!(crc16_ccitt(&[]), 0xFFFF);
}
