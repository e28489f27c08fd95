//! Footer-checked blocks inside each half of an NDS image.

use crate::checksum::crc16_ccitt;
use crate::error::CoreError;
use crate::layout::{ByteRange, read_u16, read_u32, write_u16, write_u32};
use crate::slot::{SlotId, SlotStatus};

use super::types::{FooterKind, HALF_SIZE, VariantLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    General,
    Storage,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Storage => "storage",
        }
    }

    fn id(self) -> u16 {
        match self {
            Self::General => 0,
            Self::Storage => 1,
        }
    }

    pub(crate) fn range(self, layout: &VariantLayout, slot: SlotId) -> ByteRange {
        let base = slot.index() * HALF_SIZE;
        match self {
            Self::General => ByteRange::at(base, layout.general_size),
            Self::Storage => ByteRange::at(base + layout.storage_offset, layout.storage_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub link: u32,
    pub counter: u32,
    pub size: u32,
    pub magic: u32,
    pub id: u16,
    pub crc: u16,
}

impl Footer {
    pub(crate) fn read(block: &[u8], kind: FooterKind) -> Self {
        let f = &block[block.len() - kind.len()..];
        match kind {
            FooterKind::Linked => Self {
                link: read_u32(f, 0x00),
                counter: read_u32(f, 0x04),
                size: read_u32(f, 0x08),
                magic: read_u32(f, 0x0C),
                id: read_u16(f, 0x10),
                crc: read_u16(f, 0x12),
            },
            FooterKind::Short => Self {
                link: 0,
                counter: read_u32(f, 0x00),
                size: read_u32(f, 0x04),
                magic: read_u32(f, 0x08),
                id: read_u16(f, 0x0C),
                crc: read_u16(f, 0x0E),
            },
        }
    }

    fn write(&self, block: &mut [u8], kind: FooterKind) {
        let start = block.len() - kind.len();
        let f = &mut block[start..];
        match kind {
            FooterKind::Linked => {
                write_u32(f, 0x00, self.link);
                write_u32(f, 0x04, self.counter);
                write_u32(f, 0x08, self.size);
                write_u32(f, 0x0C, self.magic);
                write_u16(f, 0x10, self.id);
                write_u16(f, 0x12, self.crc);
            }
            FooterKind::Short => {
                write_u32(f, 0x00, self.counter);
                write_u32(f, 0x04, self.size);
                write_u32(f, 0x08, self.magic);
                write_u16(f, 0x0C, self.id);
                write_u16(f, 0x0E, self.crc);
            }
        }
    }
}

fn payload(block: &[u8], kind: FooterKind) -> &[u8] {
    &block[..block.len() - kind.len()]
}

/// Whether a block carries this release's magic and size, regardless of CRC.
pub(crate) fn matches_layout(image: &[u8], layout: &VariantLayout, slot: SlotId) -> bool {
    let Ok(block) = BlockKind::General.range(layout, slot).slice(image) else {
        return false;
    };
    let footer = Footer::read(block, layout.footer);
    footer.magic == layout.magic && footer.size as usize == block.len()
}

pub(crate) fn scan_block(
    image: &[u8],
    layout: &VariantLayout,
    kind: BlockKind,
    slot: SlotId,
) -> Result<SlotStatus, CoreError> {
    let block = kind.range(layout, slot).slice(image)?;
    let footer = Footer::read(block, layout.footer);
    let problem = if footer.magic != layout.magic {
        Some(format!("bad magic {:#010x}", footer.magic))
    } else if footer.size as usize != block.len() {
        Some(format!("size {:#x} != {:#x}", footer.size, block.len()))
    } else {
        let crc = crc16_ccitt(payload(block, layout.footer));
        (crc != footer.crc).then(|| format!("crc {:#06x} != {crc:#06x}", footer.crc))
    };
    log::debug!(
        "nds {} block in {} half: counter {} valid {}",
        kind.as_str(),
        slot.as_str(),
        footer.counter,
        problem.is_none()
    );
    Ok(match problem {
        None => SlotStatus::valid(slot, footer.counter),
        Some(p) => SlotStatus::invalid(slot, footer.counter, format!("{} block: {p}", kind.as_str())),
    })
}

/// Copies `data` (a whole block, footer included) into `slot` and restamps
/// the footer with `counter` and a fresh CRC.
pub(crate) fn write_block(
    image: &mut [u8],
    layout: &VariantLayout,
    kind: BlockKind,
    slot: SlotId,
    data: &[u8],
    counter: u32,
) -> Result<(), CoreError> {
    let block = kind.range(layout, slot).slice_mut(image)?;
    if data.len() != block.len() {
        return Err(CoreError::InvalidLength {
            what: "nds block",
            expected: block.len(),
            actual: data.len(),
        });
    }
    block.copy_from_slice(data);
    let link = Footer::read(block, layout.footer).link;
    let footer = Footer {
        link,
        counter,
        size: block.len() as u32,
        magic: layout.magic,
        id: kind.id(),
        crc: crc16_ccitt(payload(block, layout.footer)),
    };
    footer.write(block, layout.footer);
    log::debug!(
        "nds {} block written to {} half: counter {}",
        kind.as_str(),
        slot.as_str(),
        counter
    );
    Ok(())
}
