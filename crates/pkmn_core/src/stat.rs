//! Stat formulas for generations 1 through 4.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::NATURE_NAMES;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    Speed,
    SpAttack,
    SpDefense,
}

impl StatKind {
    /// Record order for IVs, EVs and base stats.
    pub const ALL: [StatKind; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::Speed,
        Self::SpAttack,
        Self::SpDefense,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spd: u8,
    pub satk: u8,
    pub sdef: u8,
}

impl BaseStats {
    pub fn get(&self, stat: StatKind) -> u8 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.atk,
            StatKind::Defense => self.def,
            StatKind::Speed => self.spd,
            StatKind::SpAttack => self.satk,
            StatKind::SpDefense => self.sdef,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spd: u16,
    pub satk: u16,
    pub sdef: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NatureEffect {
    Neutral,
    Raised,
    Lowered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature(u8);

// Stats a nature can affect, in nature-table order.
const NATURE_STATS: [StatKind; 5] = [
    StatKind::Attack,
    StatKind::Defense,
    StatKind::Speed,
    StatKind::SpAttack,
    StatKind::SpDefense,
];

impl Nature {
    pub const COUNT: u8 = 25;

    pub fn from_pid(pid: u32) -> Self {
        Self((pid % u32::from(Self::COUNT)) as u8)
    }

    pub fn from_index(index: u8) -> Result<Self, CoreError> {
        CoreError::check_index("nature", usize::from(index), usize::from(Self::COUNT))?;
        Ok(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NATURE_NAMES[usize::from(self.0)]
    }

    pub fn raised(self) -> Option<StatKind> {
        if self.is_neutral() {
            None
        } else {
            Some(NATURE_STATS[usize::from(self.0 / 5)])
        }
    }

    pub fn lowered(self) -> Option<StatKind> {
        if self.is_neutral() {
            None
        } else {
            Some(NATURE_STATS[usize::from(self.0 % 5)])
        }
    }

    pub fn is_neutral(self) -> bool {
        self.0 / 5 == self.0 % 5
    }

    pub fn effect(self, stat: StatKind) -> NatureEffect {
        if self.raised() == Some(stat) {
            NatureEffect::Raised
        } else if self.lowered() == Some(stat) {
            NatureEffect::Lowered
        } else {
            NatureEffect::Neutral
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn core(level: u8, base: u8, iv: u8, ev: u8) -> u32 {
    (2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4) * u32::from(level) / 100
}

/// Generation 3/4 HP.
pub fn calc_hp_stat(level: u8, base: u8, iv: u8, ev: u8) -> u16 {
    (core(level, base, iv, ev) + u32::from(level) + 10) as u16
}

/// Generation 3/4 non-HP stat.
pub fn calc_stat(level: u8, base: u8, iv: u8, ev: u8, effect: NatureEffect) -> u16 {
    let stat = core(level, base, iv, ev) + 5;
    let stat = match effect {
        NatureEffect::Neutral => stat,
        NatureEffect::Raised => stat * 110 / 100,
        NatureEffect::Lowered => stat * 90 / 100,
    };
    stat as u16
}

/// All six stats. `ivs` and `evs` follow [`StatKind::ALL`] order.
pub fn calc_stats(base: &BaseStats, level: u8, ivs: [u8; 6], evs: [u8; 6], nature: Nature) -> Stats {
    let other = |stat: StatKind| {
        let i = stat.index();
        calc_stat(level, base.get(stat), ivs[i], evs[i], nature.effect(stat))
    };
    Stats {
        hp: calc_hp_stat(level, base.hp, ivs[0], evs[0]),
        atk: other(StatKind::Attack),
        def: other(StatKind::Defense),
        spd: other(StatKind::Speed),
        satk: other(StatKind::SpAttack),
        sdef: other(StatKind::SpDefense),
    }
}

/// Generation 1/2 EV term: `ceil(sqrt(stat_exp)) / 4`, capped at 64.
pub fn gb_stat_exp_bonus(stat_exp: u16) -> u32 {
    if stat_exp >= 0xFE02 {
        return 64;
    }
    let mut root = 0u32;
    while root * root < u32::from(stat_exp) {
        root += 1;
    }
    root >> 2
}

fn gb_core(level: u8, base: u8, iv: u8, stat_exp: u16) -> u32 {
    ((u32::from(base) + u32::from(iv)) * 2 + gb_stat_exp_bonus(stat_exp)) * u32::from(level) / 100
}

pub fn gb_calc_hp_stat(level: u8, base: u8, iv: u8, stat_exp: u16) -> u16 {
    (gb_core(level, base, iv, stat_exp) + u32::from(level) + 10) as u16
}

pub fn gb_calc_stat(level: u8, base: u8, iv: u8, stat_exp: u16) -> u16 {
    (gb_core(level, base, iv, stat_exp) + 5) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_exp_bonus_rounds_root_up_and_caps() {
        assert_eq!(gb_stat_exp_bonus(0), 0);
        assert_eq!(gb_stat_exp_bonus(1), 0);
        assert_eq!(gb_stat_exp_bonus(17), 1);
        assert_eq!(gb_stat_exp_bonus(0xFE01), 63);
        assert_eq!(gb_stat_exp_bonus(0xFE02), 64);
        assert_eq!(gb_stat_exp_bonus(u16::MAX), 64);
    }

    #[test]
    fn nature_grid_matches_names() {
        let adamant = Nature::from_index(3).unwrap();
        assert_eq!(adamant.name(), "Adamant");
        assert_eq!(adamant.raised(), Some(StatKind::Attack));
        assert_eq!(adamant.lowered(), Some(StatKind::SpAttack));
        let hardy = Nature::from_pid(25);
        assert!(hardy.is_neutral());
        assert_eq!(hardy.effect(StatKind::Attack), NatureEffect::Neutral);
        assert!(Nature::from_index(25).is_err());
    }
}
