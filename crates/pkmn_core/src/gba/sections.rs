//! Physical sector layout of a GBA flash image.

use crate::checksum::gba_section_checksum;
use crate::error::CoreError;
use crate::layout::{ByteRange, read_u16, read_u32, write_u16, write_u32};
use crate::slot::{SlotId, SlotStatus};

use super::types::{LOGICAL_SIZE, SECTION_COUNT, SECTION_STRIDE, section};

pub const IMAGE_SIZE: usize = 0x20000;
pub const SECTOR_SIZE: usize = 0x1000;
pub const SLOT_STRIDE: usize = SECTION_COUNT * SECTOR_SIZE;
pub const SIGNATURE: u32 = 0x0801_2025;

const FOOTER_ID: usize = 0xFF4;
const FOOTER_CHECKSUM: usize = 0xFF6;
const FOOTER_SIGNATURE: usize = 0xFF8;
const FOOTER_COUNTER: usize = 0xFFC;

/// Bytes of each section covered by the sector checksum.
pub const SECTION_SIZES: [usize; SECTION_COUNT] = [
    3884, 3968, 3968, 3968, 3848, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 3968, 2000,
];

fn sector(slot: SlotId, physical: usize) -> ByteRange {
    ByteRange::at(slot.index() * SLOT_STRIDE + physical * SECTOR_SIZE, SECTOR_SIZE)
}

/// Validation of one slot plus where its rotation starts.
#[derive(Debug, Clone)]
pub struct SlotScan {
    pub status: SlotStatus,
    /// Section id stored in the slot's first physical sector.
    pub first_section: usize,
}

pub fn scan_slot(image: &[u8], slot: SlotId) -> Result<SlotScan, CoreError> {
    let first = sector(slot, 0).slice(image)?;
    let counter = read_u32(first, FOOTER_COUNTER);
    let first_section = usize::from(read_u16(first, FOOTER_ID));

    let mut seen = [false; SECTION_COUNT];
    let mut problem = None;
    for physical in 0..SECTION_COUNT {
        let bytes = sector(slot, physical).slice(image)?;
        if let Some(reason) = check_sector(bytes, counter, &mut seen) {
            problem = Some(format!("sector {physical}: {reason}"));
            break;
        }
    }

    let status = match problem {
        None => SlotStatus::valid(slot, counter),
        Some(p) => SlotStatus::invalid(slot, counter, p),
    };
    log::debug!(
        "gba {} slot: counter {} valid {}",
        slot.as_str(),
        counter,
        status.valid
    );
    Ok(SlotScan {
        status,
        first_section,
    })
}

fn check_sector(bytes: &[u8], counter: u32, seen: &mut [bool; SECTION_COUNT]) -> Option<String> {
    let signature = read_u32(bytes, FOOTER_SIGNATURE);
    if signature != SIGNATURE {
        return Some(format!("bad signature {signature:#010x}"));
    }
    let id = usize::from(read_u16(bytes, FOOTER_ID));
    if id >= SECTION_COUNT {
        return Some(format!("section id {id} out of range"));
    }
    if std::mem::replace(&mut seen[id], true) {
        return Some(format!("duplicate section {id}"));
    }
    let stored = read_u16(bytes, FOOTER_CHECKSUM);
    let computed = gba_section_checksum(&bytes[..SECTION_SIZES[id]]);
    if stored != computed {
        return Some(format!(
            "section {id} checksum {stored:#06x} != {computed:#06x}"
        ));
    }
    let sector_counter = read_u32(bytes, FOOTER_COUNTER);
    if sector_counter != counter {
        return Some(format!("counter {sector_counter} != {counter}"));
    }
    None
}

/// Copies a validated slot's sections into logical order.
pub fn gather(image: &[u8], slot: SlotId) -> Result<Vec<u8>, CoreError> {
    let mut data = vec![0u8; LOGICAL_SIZE];
    for physical in 0..SECTION_COUNT {
        let bytes = sector(slot, physical).slice(image)?;
        let id = usize::from(read_u16(bytes, FOOTER_ID));
        CoreError::check_index("section", id, SECTION_COUNT)?;
        section(id)
            .slice_mut(&mut data)?
            .copy_from_slice(&bytes[..SECTION_STRIDE]);
    }
    Ok(data)
}

/// Writes every section into `slot`, starting the rotation at `first_section`,
/// and stamps the footers.
pub fn scatter(
    image: &mut [u8],
    slot: SlotId,
    data: &[u8],
    counter: u32,
    first_section: usize,
) -> Result<(), CoreError> {
    for physical in 0..SECTION_COUNT {
        let id = (first_section + physical) % SECTION_COUNT;
        let src = section(id).slice(data)?;
        let dst = sector(slot, physical).slice_mut(image)?;
        dst[..SECTION_STRIDE].copy_from_slice(src);
        let checksum = gba_section_checksum(&dst[..SECTION_SIZES[id]]);
        write_u16(dst, FOOTER_ID, id as u16);
        write_u16(dst, FOOTER_CHECKSUM, checksum);
        write_u32(dst, FOOTER_SIGNATURE, SIGNATURE);
        write_u32(dst, FOOTER_COUNTER, counter);
    }
    log::debug!(
        "gba {} slot written: counter {}, first section {}",
        slot.as_str(),
        counter,
        first_section
    );
    Ok(())
}
