use std::fmt;

use serde::{Deserialize, Serialize};

pub const IMAGE_SIZE: usize = 0x80000;
pub const HALF_SIZE: usize = 0x40000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NdsVariant {
    DiamondPearl,
    Platinum,
    HeartGoldSoulSilver,
}

impl NdsVariant {
    pub const ALL: [NdsVariant; 3] = [
        Self::DiamondPearl,
        Self::Platinum,
        Self::HeartGoldSoulSilver,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DiamondPearl => "Diamond/Pearl",
            Self::Platinum => "Platinum",
            Self::HeartGoldSoulSilver => "HeartGold/SoulSilver",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dp" | "diamond" | "pearl" | "diamond-pearl" => Some(Self::DiamondPearl),
            "pt" | "platinum" => Some(Self::Platinum),
            "hgss" | "heartgold" | "soulsilver" | "heartgold-soulsilver" => {
                Some(Self::HeartGoldSoulSilver)
            }
            _ => None,
        }
    }

    pub(crate) fn layout(self) -> &'static VariantLayout {
        match self {
            Self::DiamondPearl => &DP,
            Self::Platinum => &PT,
            Self::HeartGoldSoulSilver => &HGSS,
        }
    }
}

impl fmt::Display for NdsVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FooterKind {
    /// link, counter, size, magic, id, crc
    Linked,
    /// counter, size, magic, id, crc
    Short,
}

impl FooterKind {
    pub fn len(self) -> usize {
        match self {
            Self::Linked => 0x14,
            Self::Short => 0x10,
        }
    }
}

#[derive(Debug)]
pub(crate) struct VariantLayout {
    pub general_size: usize,
    pub storage_offset: usize,
    pub storage_size: usize,
    pub footer: FooterKind,
    pub magic: u32,
    pub trainer: usize,
    pub party: usize,
}

static DP: VariantLayout = VariantLayout {
    general_size: 0xC100,
    storage_offset: 0xC100,
    storage_size: 0x121E0,
    footer: FooterKind::Linked,
    magic: 0x2006_0623,
    trainer: 0x64,
    party: 0x98,
};

static PT: VariantLayout = VariantLayout {
    general_size: 0xCF2C,
    storage_offset: 0xCF2C,
    storage_size: 0x121E4,
    footer: FooterKind::Linked,
    magic: 0x2007_0903,
    trainer: 0x68,
    party: 0xA0,
};

static HGSS: VariantLayout = VariantLayout {
    general_size: 0xF628,
    storage_offset: 0xF700,
    storage_size: 0x12310,
    footer: FooterKind::Short,
    magic: 0x2008_1031,
    trainer: 0x64,
    party: 0x98,
};

// Trainer-relative offsets.
pub const TRAINER_NAME_LEN: usize = 8;
pub const TRAINER_ID: usize = 0x10;
pub const TRAINER_SECRET_ID: usize = 0x12;
pub const TRAINER_MONEY: usize = 0x14;
pub const TRAINER_GENDER: usize = 0x18;
pub const TRAINER_LANGUAGE: usize = 0x19;
pub const TRAINER_BADGES: usize = 0x1A;
pub const TIME_HOURS: usize = 0x22;
pub const TIME_MINUTES: usize = 0x24;
pub const TIME_SECONDS: usize = 0x25;
pub const TRAINER_BYTES: usize = 0x26;

pub const MONEY_MAX: u32 = 999_999;
