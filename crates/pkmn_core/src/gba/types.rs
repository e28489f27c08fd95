use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::POCKET_LABELS;
use crate::layout::ByteRange;

pub const SECTION_COUNT: usize = 14;
pub const SECTION_STRIDE: usize = 0xF80;
pub const LOGICAL_SIZE: usize = 0xD900;

pub const fn section(id: usize) -> ByteRange {
    ByteRange::at(id * SECTION_STRIDE, SECTION_STRIDE)
}

// Section-relative offsets shared by every release.
pub const TRAINER_NAME: ByteRange = ByteRange::at(0x00, 7);
pub const TRAINER_GENDER: usize = 0x08;
pub const TRAINER_ID: usize = 0x0A;
pub const TRAINER_SECRET_ID: usize = 0x0C;
pub const TIME_HOURS: usize = 0x0E;
pub const TIME_MINUTES: usize = 0x10;
pub const TIME_SECONDS: usize = 0x11;
pub const TIME_FRAMES: usize = 0x12;
pub const GAME_CODE: usize = 0xAC;

/// Largest amount the money counter displays.
pub const MONEY_MAX: u32 = 999_999;

pub const DEX_OWNED: usize = 0x28;
pub const DEX_SEEN: usize = 0x5C;
pub const DEX_BYTES: usize = 49;
pub const NATIONAL_DEX_MAX: u16 = 386;

pub const PC: ByteRange = ByteRange::at(5 * SECTION_STRIDE, 4 + 14 * 30 * 80 + 14 * 9 + 14);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GbaVariant {
    RubySapphire,
    Emerald,
    FireRedLeafGreen,
}

impl GbaVariant {
    pub const ALL: [GbaVariant; 3] = [Self::RubySapphire, Self::Emerald, Self::FireRedLeafGreen];

    /// Classifies by the section 0 game code word.
    pub fn from_game_code(code: u32) -> Self {
        match code {
            0 => Self::RubySapphire,
            1 => Self::FireRedLeafGreen,
            _ => Self::Emerald,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RubySapphire => "Ruby/Sapphire",
            Self::Emerald => "Emerald",
            Self::FireRedLeafGreen => "FireRed/LeafGreen",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rs" | "ruby" | "sapphire" | "ruby-sapphire" => Some(Self::RubySapphire),
            "e" | "emerald" => Some(Self::Emerald),
            "frlg" | "firered" | "leafgreen" | "firered-leafgreen" => Some(Self::FireRedLeafGreen),
            _ => None,
        }
    }

    pub(crate) fn layout(self) -> &'static VariantLayout {
        match self {
            Self::RubySapphire => &RS,
            Self::Emerald => &EMERALD,
            Self::FireRedLeafGreen => &FRLG,
        }
    }
}

impl fmt::Display for GbaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pocket {
    Pc,
    Items,
    KeyItems,
    Balls,
    TmHm,
    Berries,
}

impl Pocket {
    pub const ALL: [Pocket; 6] = [
        Self::Pc,
        Self::Items,
        Self::KeyItems,
        Self::Balls,
        Self::TmHm,
        Self::Berries,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        POCKET_LABELS[self.index()]
    }

    /// PC storage quantities are stored in the clear; bag pockets are masked.
    pub fn is_masked(self) -> bool {
        self != Self::Pc
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pc" => Some(Self::Pc),
            "items" | "item" => Some(Self::Items),
            "key" | "key-items" => Some(Self::KeyItems),
            "balls" | "ball" => Some(Self::Balls),
            "tm" | "tmhm" | "tm-hm" => Some(Self::TmHm),
            "berries" | "berry" => Some(Self::Berries),
            _ => None,
        }
    }
}

/// Per-release offsets, absolute within the logical buffer.
#[derive(Debug)]
pub(crate) struct VariantLayout {
    pub party: usize,
    pub money: usize,
    pub pockets: [(usize, usize); 6],
    pub security_key: Option<usize>,
    pub seen_mirrors: [usize; 2],
    pub national_flag: (usize, u8),
}

const S1: usize = SECTION_STRIDE;
const S4: usize = 4 * SECTION_STRIDE;

static RS: VariantLayout = VariantLayout {
    party: S1 + 0x238,
    money: S1 + 0x490,
    pockets: [
        (S1 + 0x498, 50),
        (S1 + 0x560, 20),
        (S1 + 0x5B0, 20),
        (S1 + 0x600, 16),
        (S1 + 0x640, 64),
        (S1 + 0x740, 46),
    ],
    security_key: None,
    seen_mirrors: [S1 + 0x938, S4 + 0xC0C],
    national_flag: (0x19, 0xDA),
};

static EMERALD: VariantLayout = VariantLayout {
    party: S1 + 0x238,
    money: S1 + 0x490,
    pockets: [
        (S1 + 0x498, 50),
        (S1 + 0x560, 30),
        (S1 + 0x5D8, 30),
        (S1 + 0x650, 16),
        (S1 + 0x690, 64),
        (S1 + 0x790, 46),
    ],
    security_key: Some(0xAC),
    seen_mirrors: [S1 + 0x988, S4 + 0xCA4],
    national_flag: (0x19, 0xDA),
};

static FRLG: VariantLayout = VariantLayout {
    party: S1 + 0x038,
    money: S1 + 0x290,
    pockets: [
        (S1 + 0x298, 30),
        (S1 + 0x310, 42),
        (S1 + 0x3B8, 30),
        (S1 + 0x430, 13),
        (S1 + 0x464, 58),
        (S1 + 0x54C, 43),
    ],
    security_key: Some(0xF20),
    seen_mirrors: [S1 + 0x5F8, S4 + 0xB98],
    national_flag: (0x1B, 0xB9),
};
