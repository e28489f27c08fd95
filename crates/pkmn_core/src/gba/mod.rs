//! Generation 3 (GBA) saves.
//!
//! The flash image holds two slots of fourteen rotating sectors. Opening a
//! save gathers one slot into a flat logical buffer, which every view edits in
//! place; [`GbaSave::commit`] writes it back into the other slot.

pub mod items;
pub mod pk3;
pub mod pokedex;
pub mod sections;
pub mod storage;
pub mod trainer;
pub mod types;

use crate::error::CoreError;
use crate::layout::{ByteRange, read_u32, write_u32};
use crate::slot::{self, SlotChoice, SlotId, SlotStatus};

use items::{ItemPocket, ItemSlot, SLOT_SIZE};
use pokedex::Pokedex;
use sections::{IMAGE_SIZE, SlotScan};
use storage::{PARTY_BYTES, Party, Pc};
use trainer::Trainer;
use types::{GAME_CODE, LOGICAL_SIZE, MONEY_MAX, PC, SECTION_COUNT, section};

pub use types::{GbaVariant, Pocket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Skips detection when set.
    pub variant: Option<GbaVariant>,
    pub slot: SlotChoice,
}

#[derive(Debug, Clone)]
pub struct GbaSave {
    image: Vec<u8>,
    data: Vec<u8>,
    variant: GbaVariant,
    scans: Vec<SlotScan>,
    active: Option<SlotId>,
    loaded: Option<SlotId>,
}

impl GbaSave {
    pub fn open(bytes: &[u8], options: OpenOptions) -> Result<Self, CoreError> {
        if bytes.len() != IMAGE_SIZE {
            return Err(CoreError::InvalidLength {
                what: "gba image",
                expected: IMAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let scans = [SlotId::Primary, SlotId::Secondary]
            .into_iter()
            .map(|id| sections::scan_slot(bytes, id))
            .collect::<Result<Vec<_>, _>>()?;
        let statuses: Vec<SlotStatus> = scans.iter().map(|s| s.status.clone()).collect();
        let active = slot::select_active(&statuses)?;
        let loaded = slot::resolve_choice(&statuses, options.slot)?;
        let data = sections::gather(bytes, loaded)?;

        let variant = match options.variant {
            Some(v) => v,
            None => {
                let code = read_u32(&data, GAME_CODE);
                let v = GbaVariant::from_game_code(code);
                log::debug!("game code {code:#010x}: detected {v}");
                v
            }
        };

        Ok(Self {
            image: bytes.to_vec(),
            data,
            variant,
            scans,
            active: Some(active),
            loaded: Some(loaded),
        })
    }

    /// A fresh erased image with zeroed save data and no valid slot.
    pub fn blank(variant: GbaVariant) -> Self {
        let mut data = vec![0u8; LOGICAL_SIZE];
        if variant == GbaVariant::FireRedLeafGreen {
            write_u32(&mut data, GAME_CODE, 1);
        }
        let scans = [SlotId::Primary, SlotId::Secondary]
            .into_iter()
            .map(|id| SlotScan {
                status: SlotStatus::invalid(id, 0, "erased"),
                first_section: 0,
            })
            .collect();
        Self {
            image: vec![0xFF; IMAGE_SIZE],
            data,
            variant,
            scans,
            active: None,
            loaded: None,
        }
    }

    pub fn variant(&self) -> GbaVariant {
        self.variant
    }

    pub fn slots(&self) -> Vec<SlotStatus> {
        self.scans.iter().map(|s| s.status.clone()).collect()
    }

    pub fn active_slot(&self) -> Option<SlotId> {
        self.active
    }

    pub fn loaded_slot(&self) -> Option<SlotId> {
        self.loaded
    }

    pub fn active_counter(&self) -> Option<u32> {
        self.active.map(|id| self.scans[id.index()].status.counter)
    }

    /// The raw image as last opened or committed.
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn logical(&self) -> &[u8] {
        &self.data
    }

    pub fn logical_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Packs the logical buffer into the inactive slot with the next counter
    /// and returns the whole image. The previously active slot is left as is.
    pub fn commit(&mut self) -> Result<Vec<u8>, CoreError> {
        let (target, counter, first_section) = match self.active {
            Some(active) => {
                let scan = &self.scans[active.index()];
                (
                    active.other(),
                    scan.status.counter.wrapping_add(1),
                    (scan.first_section + SECTION_COUNT - 1) % SECTION_COUNT,
                )
            }
            None => (SlotId::Primary, 0, 0),
        };
        self.write_slot(target, counter, first_section)?;
        self.active = Some(target);
        self.loaded = Some(target);
        Ok(self.image.clone())
    }

    /// Restamps the loaded slot with its existing counter and rotation.
    /// A blank save has no loaded slot and falls back to [`GbaSave::commit`].
    pub fn write_in_place(&mut self) -> Result<Vec<u8>, CoreError> {
        let Some(loaded) = self.loaded else {
            return self.commit();
        };
        let scan = &self.scans[loaded.index()];
        let (counter, first_section) = (scan.status.counter, scan.first_section);
        self.write_slot(loaded, counter, first_section)?;
        Ok(self.image.clone())
    }

    fn write_slot(&mut self, target: SlotId, counter: u32, first_section: usize) -> Result<(), CoreError> {
        sections::scatter(&mut self.image, target, &self.data, counter, first_section)?;
        self.scans[target.index()] = SlotScan {
            status: SlotStatus::valid(target, counter),
            first_section,
        };
        Ok(())
    }

    fn section0(&self) -> &[u8] {
        &self.data[section(0).start..section(0).end]
    }

    pub fn trainer(&self) -> Trainer<&[u8]> {
        Trainer::new(self.section0())
    }

    pub fn trainer_mut(&mut self) -> Trainer<&mut [u8]> {
        let r = section(0);
        Trainer::new(&mut self.data[r.start..r.end])
    }

    /// Per-save XOR key for money and bag quantities; zero where the release
    /// has none.
    pub fn security_key(&self) -> u32 {
        self.variant
            .layout()
            .security_key
            .map_or(0, |offset| read_u32(self.section0(), offset))
    }

    pub fn money(&self) -> u32 {
        read_u32(&self.data, self.variant.layout().money) ^ self.security_key()
    }

    pub fn set_money(&mut self, money: u32) -> Result<(), CoreError> {
        CoreError::check_index("money", money as usize, MONEY_MAX as usize + 1)?;
        let stored = money ^ self.security_key();
        write_u32(&mut self.data, self.variant.layout().money, stored);
        Ok(())
    }

    fn party_range(&self) -> ByteRange {
        ByteRange::at(self.variant.layout().party - 4, PARTY_BYTES)
    }

    pub fn party(&self) -> Party<&[u8]> {
        let r = self.party_range();
        Party::new(&self.data[r.start..r.end])
    }

    pub fn party_mut(&mut self) -> Party<&mut [u8]> {
        let r = self.party_range();
        Party::new(&mut self.data[r.start..r.end])
    }

    pub fn pc(&self) -> Pc<&[u8]> {
        Pc::new(&self.data[PC.start..PC.end])
    }

    pub fn pc_mut(&mut self) -> Pc<&mut [u8]> {
        Pc::new(&mut self.data[PC.start..PC.end])
    }

    fn pocket_range(&self, pocket: Pocket) -> (ByteRange, u16) {
        let (offset, capacity) = self.variant.layout().pockets[pocket.index()];
        let mask = if pocket.is_masked() {
            self.security_key() as u16
        } else {
            0
        };
        (ByteRange::at(offset, capacity * SLOT_SIZE), mask)
    }

    pub fn pocket(&self, pocket: Pocket) -> ItemPocket<&[u8]> {
        let (r, mask) = self.pocket_range(pocket);
        ItemPocket::new(&self.data[r.start..r.end], mask)
    }

    pub fn pocket_mut(&mut self, pocket: Pocket) -> ItemPocket<&mut [u8]> {
        let (r, mask) = self.pocket_range(pocket);
        ItemPocket::new(&mut self.data[r.start..r.end], mask)
    }

    /// Total slots across every pocket.
    pub fn item_capacity(&self) -> usize {
        self.variant.layout().pockets.iter().map(|(_, c)| c).sum()
    }

    /// Maps a flat item index onto its pocket and slot.
    fn locate_item(&self, index: usize) -> Result<(Pocket, usize), CoreError> {
        let mut rest = index;
        for pocket in Pocket::ALL {
            let capacity = self.variant.layout().pockets[pocket.index()].1;
            if rest < capacity {
                return Ok((pocket, rest));
            }
            rest -= capacity;
        }
        Err(CoreError::out_of_range("item", index, self.item_capacity()))
    }

    pub fn item(&self, index: usize) -> Result<ItemSlot, CoreError> {
        let (pocket, slot) = self.locate_item(index)?;
        self.pocket(pocket).get(slot)
    }

    pub fn set_item(&mut self, index: usize, item: ItemSlot) -> Result<(), CoreError> {
        let (pocket, slot) = self.locate_item(index)?;
        self.pocket_mut(pocket).set(slot, item)
    }

    pub fn pokedex(&self) -> Pokedex<&[u8]> {
        Pokedex::new(&self.data, self.variant.layout())
    }

    pub fn pokedex_mut(&mut self) -> Pokedex<&mut [u8]> {
        let layout = self.variant.layout();
        Pokedex::new(&mut self.data, layout)
    }
}
