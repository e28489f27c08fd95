#![allow(dead_code)]

use pkmn_core::checksum::{crc16_ccitt, gba_section_checksum};
use pkmn_core::gba::sections::{IMAGE_SIZE, SECTION_SIZES, SECTOR_SIZE, SIGNATURE, SLOT_STRIDE};
use pkmn_core::gba::types::{LOGICAL_SIZE, SECTION_STRIDE};

pub const GBA_IMAGE_SIZE: usize = IMAGE_SIZE;
pub const NDS_IMAGE_SIZE: usize = 0x80000;

/// Logical save data with the game code a release writes into section 0.
pub fn gba_logical(game_code: u32) -> Vec<u8> {
    let mut data = vec![0u8; LOGICAL_SIZE];
    data[0xAC..0xB0].copy_from_slice(&game_code.to_le_bytes());
    data
}

/// Writes one slot by hand, sections in id order starting at sector 0.
pub fn write_gba_slot(image: &mut [u8], slot: usize, logical: &[u8], counter: u32) {
    for id in 0..14 {
        let base = slot * SLOT_STRIDE + id * SECTOR_SIZE;
        let sector = &mut image[base..base + SECTOR_SIZE];
        sector[..SECTION_STRIDE]
            .copy_from_slice(&logical[id * SECTION_STRIDE..(id + 1) * SECTION_STRIDE]);
        let checksum = gba_section_checksum(&sector[..SECTION_SIZES[id]]);
        sector[0xFF4..0xFF6].copy_from_slice(&(id as u16).to_le_bytes());
        sector[0xFF6..0xFF8].copy_from_slice(&checksum.to_le_bytes());
        sector[0xFF8..0xFFC].copy_from_slice(&SIGNATURE.to_le_bytes());
        sector[0xFFC..0x1000].copy_from_slice(&counter.to_le_bytes());
    }
}

pub fn gba_image(logical_a: &[u8], counter_a: u32, logical_b: &[u8], counter_b: u32) -> Vec<u8> {
    let mut image = vec![0xFF; GBA_IMAGE_SIZE];
    write_gba_slot(&mut image, 0, logical_a, counter_a);
    write_gba_slot(&mut image, 1, logical_b, counter_b);
    image
}

/// Flips a byte inside slot `slot`'s first sector so its checksum fails.
pub fn corrupt_gba_slot(image: &mut [u8], slot: usize) {
    image[slot * SLOT_STRIDE + 0x10] ^= 0x5A;
}

pub fn gba_slot_bytes(image: &[u8], slot: usize) -> &[u8] {
    &image[slot * SLOT_STRIDE..(slot + 1) * SLOT_STRIDE]
}

pub fn gba_sector_counter(image: &[u8], slot: usize, sector: usize) -> u32 {
    let at = slot * SLOT_STRIDE + sector * SECTOR_SIZE + 0xFFC;
    u32::from_le_bytes([image[at], image[at + 1], image[at + 2], image[at + 3]])
}

pub fn gba_sector_id(image: &[u8], slot: usize, sector: usize) -> u16 {
    let at = slot * SLOT_STRIDE + sector * SECTOR_SIZE + 0xFF4;
    u16::from_le_bytes([image[at], image[at + 1]])
}

/// Gen 4 release parameters: general size, storage offset, storage size,
/// footer length, magic.
#[derive(Debug, Clone, Copy)]
pub struct NdsLayout {
    pub general_size: usize,
    pub storage_offset: usize,
    pub storage_size: usize,
    pub footer: usize,
    pub magic: u32,
}

pub const DP: NdsLayout = NdsLayout {
    general_size: 0xC100,
    storage_offset: 0xC100,
    storage_size: 0x121E0,
    footer: 0x14,
    magic: 0x2006_0623,
};

pub const PT: NdsLayout = NdsLayout {
    general_size: 0xCF2C,
    storage_offset: 0xCF2C,
    storage_size: 0x121E4,
    footer: 0x14,
    magic: 0x2007_0903,
};

pub const HGSS: NdsLayout = NdsLayout {
    general_size: 0xF628,
    storage_offset: 0xF700,
    storage_size: 0x12310,
    footer: 0x10,
    magic: 0x2008_1031,
};

fn stamp_nds_block(block: &mut [u8], layout: &NdsLayout, id: u16, counter: u32) {
    let len = block.len();
    let f = len - layout.footer;
    let fields_at = if layout.footer == 0x14 { f + 4 } else { f };
    block[fields_at..fields_at + 4].copy_from_slice(&counter.to_le_bytes());
    block[fields_at + 4..fields_at + 8].copy_from_slice(&(len as u32).to_le_bytes());
    block[fields_at + 8..fields_at + 12].copy_from_slice(&layout.magic.to_le_bytes());
    block[fields_at + 12..fields_at + 14].copy_from_slice(&id.to_le_bytes());
    let crc = crc16_ccitt(&block[..f]);
    block[fields_at + 14..fields_at + 16].copy_from_slice(&crc.to_le_bytes());
}

/// Writes general and storage blocks into half `half` with `counter`.
/// `general` is copied into the start of the general block.
pub fn write_nds_half(image: &mut [u8], layout: &NdsLayout, half: usize, general: &[u8], counter: u32) {
    let base = half * 0x40000;
    let block = &mut image[base..base + layout.general_size];
    block.fill(0);
    block[..general.len()].copy_from_slice(general);
    stamp_nds_block(block, layout, 0, counter);

    let start = base + layout.storage_offset;
    let block = &mut image[start..start + layout.storage_size];
    block.fill(0);
    stamp_nds_block(block, layout, 1, counter);
}

pub fn nds_image(layout: &NdsLayout, general: &[u8], counter_a: u32, counter_b: u32) -> Vec<u8> {
    let mut image = vec![0xFF; NDS_IMAGE_SIZE];
    write_nds_half(&mut image, layout, 0, general, counter_a);
    write_nds_half(&mut image, layout, 1, general, counter_b);
    image
}

/// Encodes ASCII letters and digits with the gen 4 table.
pub fn nds_text(s: &str, len: usize) -> Vec<u8> {
    let mut codes = vec![0xFFFFu16; len];
    for (dst, c) in codes.iter_mut().zip(s.chars()) {
        *dst = match c {
            '0'..='9' => 0x0121 + (c as u16 - '0' as u16),
            'A'..='Z' => 0x012B + (c as u16 - 'A' as u16),
            'a'..='z' => 0x0145 + (c as u16 - 'a' as u16),
            _ => 0x01DE,
        };
    }
    codes.iter().flat_map(|c| c.to_le_bytes()).collect()
}

/// A checksummed party record with the fields the tests look at.
pub fn sample_pk3(pid: u32, species: u16, nickname: &str) -> pkmn_core::gba::pk3::Pk3 {
    let mut pk = pkmn_core::gba::pk3::Pk3::empty();
    pk.set_pid(pid);
    pk.set_ot_ids(12345, 54321);
    pk.set_species(species);
    pk.set_nickname(nickname);
    pk.set_ot_name("ASH");
    pk.set_level(5);
    pk.update_checksum();
    pk
}

/// The gen 4 counterpart of [`sample_pk3`].
pub fn sample_pk4(pid: u32, species: u16, nickname: &str) -> pkmn_core::nds::pk4::Pk4 {
    let mut pk = pkmn_core::nds::pk4::Pk4::empty();
    pk.set_pid(pid);
    pk.set_ot_ids(12345, 54321);
    pk.set_species(species);
    pk.set_nickname(nickname);
    pk.set_ot_name("Lucas");
    pk.set_level(5);
    pk.update_checksum();
    pk
}
