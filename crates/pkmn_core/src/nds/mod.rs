//! Generation 4 (NDS) saves.
//!
//! Each half of the image holds a general block and a storage block, and the
//! two blocks are selected and committed independently.

pub mod blocks;
pub mod party;
pub mod pk4;
pub mod trainer;
pub mod types;

use crate::error::CoreError;
use crate::layout::ByteRange;
use crate::slot::{self, SlotChoice, SlotId, SlotStatus};

use blocks::BlockKind;
use party::{PARTY_BYTES, Party};
use trainer::Trainer;
use types::{IMAGE_SIZE, TRAINER_BYTES, VariantLayout};

pub use types::NdsVariant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptions {
    pub variant: Option<NdsVariant>,
    pub slot: SlotChoice,
}

/// One independently versioned block.
#[derive(Debug, Clone)]
struct BlockState {
    kind: BlockKind,
    statuses: Vec<SlotStatus>,
    active: Option<SlotId>,
    data: Vec<u8>,
}

impl BlockState {
    fn open(
        image: &[u8],
        layout: &VariantLayout,
        kind: BlockKind,
        choice: SlotChoice,
    ) -> Result<Self, CoreError> {
        let statuses = [SlotId::Primary, SlotId::Secondary]
            .into_iter()
            .map(|id| blocks::scan_block(image, layout, kind, id))
            .collect::<Result<Vec<_>, _>>()?;
        let active = slot::select_active(&statuses)?;
        let loaded = slot::resolve_choice(&statuses, choice)?;
        let data = kind.range(layout, loaded).slice(image)?.to_vec();
        Ok(Self {
            kind,
            statuses,
            active: Some(active),
            data,
        })
    }

    fn blank(layout: &VariantLayout, kind: BlockKind) -> Self {
        let len = kind.range(layout, SlotId::Primary).len();
        Self {
            kind,
            statuses: [SlotId::Primary, SlotId::Secondary]
                .into_iter()
                .map(|id| SlotStatus::invalid(id, 0, "erased"))
                .collect(),
            active: None,
            data: vec![0u8; len],
        }
    }

    fn commit(&mut self, image: &mut [u8], layout: &VariantLayout) -> Result<(), CoreError> {
        let (target, counter) = match self.active {
            Some(active) => (
                active.other(),
                self.statuses[active.index()].counter.wrapping_add(1),
            ),
            None => (SlotId::Primary, 0),
        };
        blocks::write_block(image, layout, self.kind, target, &self.data, counter)?;
        // Re-read so the held copy carries the stamped footer.
        self.data = self.kind.range(layout, target).slice(image)?.to_vec();
        self.statuses[target.index()] = SlotStatus::valid(target, counter);
        self.active = Some(target);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NdsSave {
    image: Vec<u8>,
    variant: NdsVariant,
    general: BlockState,
    storage: BlockState,
}

impl NdsSave {
    pub fn open(bytes: &[u8], options: OpenOptions) -> Result<Self, CoreError> {
        if bytes.len() != IMAGE_SIZE {
            return Err(CoreError::InvalidLength {
                what: "nds image",
                expected: IMAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let variant = match options.variant {
            Some(v) => v,
            None => detect(bytes)?,
        };
        let layout = variant.layout();
        let general = BlockState::open(bytes, layout, BlockKind::General, options.slot)?;
        let storage = BlockState::open(bytes, layout, BlockKind::Storage, options.slot)?;
        Ok(Self {
            image: bytes.to_vec(),
            variant,
            general,
            storage,
        })
    }

    pub fn blank(variant: NdsVariant) -> Self {
        let layout = variant.layout();
        Self {
            image: vec![0xFF; IMAGE_SIZE],
            variant,
            general: BlockState::blank(layout, BlockKind::General),
            storage: BlockState::blank(layout, BlockKind::Storage),
        }
    }

    pub fn variant(&self) -> NdsVariant {
        self.variant
    }

    pub fn general_slots(&self) -> &[SlotStatus] {
        &self.general.statuses
    }

    pub fn storage_slots(&self) -> &[SlotStatus] {
        &self.storage.statuses
    }

    pub fn active_general(&self) -> Option<SlotId> {
        self.general.active
    }

    pub fn active_storage(&self) -> Option<SlotId> {
        self.storage.active
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn general(&self) -> &[u8] {
        &self.general.data
    }

    pub fn general_mut(&mut self) -> &mut [u8] {
        &mut self.general.data
    }

    pub fn storage(&self) -> &[u8] {
        &self.storage.data
    }

    pub fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.storage.data
    }

    /// Writes both blocks into their inactive halves with the next counters.
    pub fn commit(&mut self) -> Result<Vec<u8>, CoreError> {
        let layout = self.variant.layout();
        self.general.commit(&mut self.image, layout)?;
        self.storage.commit(&mut self.image, layout)?;
        Ok(self.image.clone())
    }

    fn trainer_range(&self) -> ByteRange {
        ByteRange::at(self.variant.layout().trainer, TRAINER_BYTES)
    }

    pub fn trainer(&self) -> Trainer<&[u8]> {
        let r = self.trainer_range();
        Trainer::new(&self.general.data[r.start..r.end])
    }

    pub fn trainer_mut(&mut self) -> Trainer<&mut [u8]> {
        let r = self.trainer_range();
        Trainer::new(&mut self.general.data[r.start..r.end])
    }

    fn party_range(&self) -> ByteRange {
        ByteRange::at(self.variant.layout().party - 4, PARTY_BYTES)
    }

    pub fn party(&self) -> Party<&[u8]> {
        let r = self.party_range();
        Party::new(&self.general.data[r.start..r.end])
    }

    pub fn party_mut(&mut self) -> Party<&mut [u8]> {
        let r = self.party_range();
        Party::new(&mut self.general.data[r.start..r.end])
    }
}

/// First release whose magic and block size appear in either half.
fn detect(image: &[u8]) -> Result<NdsVariant, CoreError> {
    for variant in NdsVariant::ALL {
        let layout = variant.layout();
        if [SlotId::Primary, SlotId::Secondary]
            .into_iter()
            .any(|id| blocks::matches_layout(image, layout, id))
        {
            log::debug!("detected {variant}");
            return Ok(variant);
        }
    }
    Err(CoreError::unsupported("no known gen 4 block footer found"))
}
