use pkmn_core::stat::{
    BaseStats, Nature, NatureEffect, StatKind, calc_hp_stat, calc_stat, calc_stats,
    gb_calc_hp_stat, gb_calc_stat,
};

#[test]
fn modern_formulas_at_level_50() {
    assert_eq!(calc_hp_stat(50, 100, 31, 0), 175);
    assert_eq!(calc_stat(50, 100, 31, 0, NatureEffect::Neutral), 120);
    assert_eq!(calc_stat(50, 100, 31, 0, NatureEffect::Raised), 132);
    assert_eq!(calc_stat(50, 100, 31, 0, NatureEffect::Lowered), 108);
    assert_eq!(calc_hp_stat(100, 255, 31, 252), 714);
}

#[test]
fn nature_adjusts_only_its_two_stats() {
    let base = BaseStats {
        hp: 100,
        atk: 100,
        def: 100,
        spd: 100,
        satk: 100,
        sdef: 100,
    };
    // Adamant: +Attack, -Sp. Attack.
    let nature = Nature::from_index(3).unwrap();
    let stats = calc_stats(&base, 50, [31; 6], [0; 6], nature);
    assert_eq!(stats.hp, 175);
    assert_eq!(stats.atk, 132);
    assert_eq!(stats.satk, 108);
    assert_eq!(stats.def, 120);
    assert_eq!(stats.spd, 120);
    assert_eq!(stats.sdef, 120);
    assert_eq!(nature.effect(StatKind::Hp), NatureEffect::Neutral);
}

#[test]
fn game_boy_formulas() {
    assert_eq!(gb_calc_hp_stat(50, 35, 15, 0), 110);
    assert_eq!(gb_calc_stat(50, 55, 15, 0), 75);
    assert_eq!(gb_calc_stat(100, 55, 15, u16::MAX), 209);
}
