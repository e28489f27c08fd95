mod common;

use common::{DP, HGSS, NdsLayout, PT, nds_image, nds_text, sample_pk4};
use pkmn_core::CoreErrorCode;
use pkmn_core::PlayTime;
use pkmn_core::gba::pk3::RecordStatus;
use pkmn_core::gender::Gender;
use pkmn_core::nds::{NdsSave, NdsVariant, OpenOptions};
use pkmn_core::slot::{SlotChoice, SlotId};

const DP_TRAINER: usize = 0x64;

fn dp_general() -> Vec<u8> {
    let mut general = vec![0u8; 0x100];
    general[DP_TRAINER..DP_TRAINER + 16].copy_from_slice(&nds_text("Dawn", 8));
    general[DP_TRAINER + 0x10..DP_TRAINER + 0x12].copy_from_slice(&4242u16.to_le_bytes());
    general[DP_TRAINER + 0x12..DP_TRAINER + 0x14].copy_from_slice(&777u16.to_le_bytes());
    general[DP_TRAINER + 0x14..DP_TRAINER + 0x18].copy_from_slice(&31_337u32.to_le_bytes());
    general[DP_TRAINER + 0x18] = 1;
    general[DP_TRAINER + 0x22..DP_TRAINER + 0x24].copy_from_slice(&12u16.to_le_bytes());
    general[DP_TRAINER + 0x24] = 34;
    general[DP_TRAINER + 0x25] = 56;
    general
}

fn open(image: &[u8]) -> NdsSave {
    NdsSave::open(image, OpenOptions::default()).expect("open nds save")
}

fn half_bytes(image: &[u8], layout: &NdsLayout, half: usize) -> Vec<u8> {
    let base = half * 0x40000;
    let mut out = image[base..base + layout.general_size].to_vec();
    let storage = base + layout.storage_offset;
    out.extend_from_slice(&image[storage..storage + layout.storage_size]);
    out
}

#[test]
fn detects_each_release_from_its_footer() {
    let cases = [
        (DP, NdsVariant::DiamondPearl),
        (PT, NdsVariant::Platinum),
        (HGSS, NdsVariant::HeartGoldSoulSilver),
    ];
    for (layout, expected) in cases {
        let save = open(&nds_image(&layout, &[], 1, 2));
        assert_eq!(save.variant(), expected);
    }
}

#[test]
fn unknown_footer_is_unsupported() {
    let image = vec![0xFFu8; 0x80000];
    let err = NdsSave::open(&image, OpenOptions::default()).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::UnsupportedVariant);
}

#[test]
fn wrong_image_size_is_rejected() {
    let err = NdsSave::open(&vec![0u8; 0x40000], OpenOptions::default()).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::InvalidLength);
}

#[test]
fn newer_half_is_active_unless_its_crc_fails() {
    let image = nds_image(&DP, &dp_general(), 3, 4);
    let save = open(&image);
    assert_eq!(save.active_general(), Some(SlotId::Secondary));
    assert_eq!(save.active_storage(), Some(SlotId::Secondary));

    let mut broken = image.clone();
    broken[0x40000 + 0x200] ^= 0xFF;
    let save = open(&broken);
    assert_eq!(save.active_general(), Some(SlotId::Primary));
    assert_eq!(save.active_storage(), Some(SlotId::Secondary));
    assert!(!save.general_slots()[1].valid);
}

#[test]
fn reads_trainer_fields() {
    let save = open(&nds_image(&DP, &dp_general(), 1, 0));
    let trainer = save.trainer();
    assert_eq!(trainer.name(), "Dawn");
    assert_eq!(trainer.id(), 4242);
    assert_eq!(trainer.secret_id(), 777);
    assert_eq!(trainer.money(), 31_337);
    assert_eq!(trainer.gender(), Gender::Female);
    assert_eq!(
        trainer.play_time(),
        PlayTime {
            hours: 12,
            minutes: 34,
            seconds: 56,
            frames: 0,
        }
    );
}

#[test]
fn money_above_the_cap_is_rejected() {
    let mut save = open(&nds_image(&DP, &dp_general(), 1, 0));
    let err = save.trainer_mut().set_money(1_000_000).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::OutOfRange);
    save.trainer_mut().set_money(999_999).unwrap();
    assert_eq!(save.trainer().money(), 999_999);
}

#[test]
fn commit_targets_the_inactive_half_for_both_blocks() {
    let original = nds_image(&DP, &dp_general(), 8, 7);
    let mut save = open(&original);
    save.trainer_mut().set_name("Barry");
    let committed = save.commit().unwrap();

    assert_eq!(half_bytes(&committed, &DP, 0), half_bytes(&original, &DP, 0));
    let reopened = open(&committed);
    assert_eq!(reopened.active_general(), Some(SlotId::Secondary));
    assert_eq!(reopened.active_storage(), Some(SlotId::Secondary));
    assert_eq!(reopened.general_slots()[1].counter, 9);
    assert_eq!(reopened.storage_slots()[1].counter, 9);
    assert_eq!(reopened.trainer().name(), "Barry");
    assert_eq!(reopened.trainer().money(), 31_337);
}

#[test]
fn backup_half_can_be_opened() {
    let mut older = dp_general();
    older[DP_TRAINER..DP_TRAINER + 16].copy_from_slice(&nds_text("Old", 8));
    let mut image = nds_image(&DP, &dp_general(), 5, 0);
    common::write_nds_half(&mut image, &DP, 1, &older, 4);

    let save = NdsSave::open(
        &image,
        OpenOptions {
            variant: None,
            slot: SlotChoice::Backup,
        },
    )
    .unwrap();
    assert_eq!(save.active_general(), Some(SlotId::Primary));
    assert_eq!(save.trainer().name(), "Old");
}

#[test]
fn party_records_round_trip_through_a_commit() {
    let mut save = open(&nds_image(&DP, &dp_general(), 1, 0));
    let mut pk = sample_pk4(0x0003_E123, 393, "Piplup");
    pk.set_level(12);
    assert_eq!(save.party_mut().push(&pk).unwrap(), 0);
    let image = save.commit().unwrap();

    let reopened = open(&image);
    let members = reopened.party().members().unwrap();
    assert_eq!(members.len(), 1);
    let stored = &members[0];
    assert_eq!(stored.status(), RecordStatus::Valid);
    assert_eq!(stored.pid(), 0x0003_E123);
    assert_eq!(stored.species(), 393);
    assert_eq!(stored.nickname(), "Piplup");
    assert_eq!(stored.ot_name(), "Lucas");
    assert_eq!(stored.level(), 12);
    assert!(stored.is_nicknamed());
}

/// DP general block with one stored party record whose payload has one
/// byte flipped after encryption.
fn dp_general_with_tampered_member() -> Vec<u8> {
    let mut general = dp_general();
    general.resize(0x200, 0);
    general[0x94..0x98].copy_from_slice(&1u32.to_le_bytes());
    let stored = sample_pk4(0x0003_E123, 393, "Piplup").to_stored();
    general[0x98..0x98 + stored.len()].copy_from_slice(&stored);
    general[0x98 + 0x08 + 5] ^= 0x40;
    general
}

#[test]
fn tampered_party_record_reads_invalid_and_is_not_written_back() {
    let mut save = open(&nds_image(&DP, &dp_general_with_tampered_member(), 1, 0));
    let pk = save.party().get(0).unwrap();
    assert_eq!(pk.status(), RecordStatus::Invalid);

    let mut party = save.party_mut();
    assert_eq!(
        party.set(0, &pk).unwrap_err().code(),
        CoreErrorCode::CorruptImage
    );
    assert_eq!(
        party.push(&pk).unwrap_err().code(),
        CoreErrorCode::CorruptImage
    );
    assert_eq!(party.count().unwrap(), 1);
    assert_eq!(save.party().get(0).unwrap().status(), RecordStatus::Invalid);
}

#[test]
fn blank_party_slots_are_empty() {
    let save = NdsSave::blank(NdsVariant::DiamondPearl);
    let slots = save.party().slots().unwrap();
    assert_eq!(slots.len(), 6);
    assert!(slots.iter().all(|pk| pk.status() == RecordStatus::Empty));
}

#[test]
fn platinum_uses_its_own_trainer_offset() {
    let mut general = vec![0u8; 0x100];
    general[0x68..0x68 + 16].copy_from_slice(&nds_text("Cynthia", 8));
    let save = open(&nds_image(&PT, &general, 2, 1));
    assert_eq!(save.variant(), NdsVariant::Platinum);
    assert_eq!(save.trainer().name(), "Cynthia");
}

#[test]
fn hint_skips_detection() {
    let save = NdsSave::open(
        &nds_image(&HGSS, &[], 1, 0),
        OpenOptions {
            variant: Some(NdsVariant::HeartGoldSoulSilver),
            slot: SlotChoice::Active,
        },
    )
    .unwrap();
    assert_eq!(save.variant(), NdsVariant::HeartGoldSoulSilver);
}
