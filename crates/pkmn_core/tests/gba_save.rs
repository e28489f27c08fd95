mod common;

use common::{
    corrupt_gba_slot, gba_image, gba_logical, gba_sector_counter, gba_sector_id, gba_slot_bytes,
    sample_pk3,
};
use pkmn_core::CoreErrorCode;
use pkmn_core::gba::items::ItemSlot;
use pkmn_core::gba::pk3::RecordStatus;
use pkmn_core::gba::types::{DEX_SEEN, SECTION_STRIDE};
use pkmn_core::gba::{GbaSave, GbaVariant, OpenOptions, Pocket};
use pkmn_core::slot::{SlotChoice, SlotId};

const RS: u32 = 0;
const FRLG: u32 = 1;
const EMERALD_KEY: u32 = 0x1234_5678;

fn open(image: &[u8]) -> GbaSave {
    GbaSave::open(image, OpenOptions::default()).expect("open gba save")
}

fn named_logical(code: u32, name: &str) -> Vec<u8> {
    let mut save = GbaSave::blank(GbaVariant::from_game_code(code));
    save.logical_mut()[0xAC..0xB0].copy_from_slice(&code.to_le_bytes());
    save.trainer_mut().set_name(name);
    save.logical().to_vec()
}

#[test]
fn corrupt_newer_slot_falls_back_to_older_counter() {
    let logical = gba_logical(RS);
    let mut image = gba_image(&logical, 5, &logical, 6);
    corrupt_gba_slot(&mut image, 1);

    let save = open(&image);
    assert_eq!(save.active_slot(), Some(SlotId::Primary));
    assert_eq!(save.active_counter(), Some(5));
    let slots = save.slots();
    assert!(slots[0].valid);
    assert!(!slots[1].valid);
    assert!(slots[1].problem.as_deref().unwrap_or("").contains("checksum"));
}

#[test]
fn higher_counter_wins_when_both_slots_validate() {
    let image = gba_image(&named_logical(RS, "OLD"), 7, &named_logical(RS, "NEW"), 8);
    let save = open(&image);
    assert_eq!(save.active_slot(), Some(SlotId::Secondary));
    assert_eq!(save.trainer().name(), "NEW");
}

#[test]
fn no_valid_slot_and_equal_counters_are_corrupt() {
    let logical = gba_logical(RS);
    let mut image = gba_image(&logical, 1, &logical, 2);
    corrupt_gba_slot(&mut image, 0);
    corrupt_gba_slot(&mut image, 1);
    let err = GbaSave::open(&image, OpenOptions::default()).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::CorruptImage);

    let tied = gba_image(&logical, 3, &logical, 3);
    let err = GbaSave::open(&tied, OpenOptions::default()).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::CorruptImage);
}

#[test]
fn wrong_image_size_is_rejected() {
    let err = GbaSave::open(&[0u8; 0x1000], OpenOptions::default()).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::InvalidLength);
}

#[test]
fn commit_writes_other_slot_and_keeps_the_old_one() {
    let logical = gba_logical(RS);
    let original = gba_image(&logical, 5, &logical, 4);
    let mut save = open(&original);
    save.set_money(4321).unwrap();
    let committed = save.commit().unwrap();

    assert_eq!(gba_slot_bytes(&committed, 0), gba_slot_bytes(&original, 0));
    for sector in 0..14 {
        assert_eq!(gba_sector_counter(&committed, 1, sector), 6);
    }
    // Rotation moves back by one section on every save.
    assert_eq!(gba_sector_id(&committed, 1, 0), 13);
    assert_eq!(gba_sector_id(&committed, 1, 1), 0);

    let reopened = open(&committed);
    assert_eq!(reopened.active_slot(), Some(SlotId::Secondary));
    assert_eq!(reopened.active_counter(), Some(6));
    assert_eq!(reopened.money(), 4321);
    assert_eq!(reopened.logical(), save.logical());
}

#[test]
fn repeated_commits_alternate_slots_and_keep_rotating() {
    let logical = gba_logical(RS);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    let first = save.commit().unwrap();
    let mut reopened = open(&first);
    let second = reopened.commit().unwrap();

    assert_eq!(gba_sector_counter(&second, 0, 0), 3);
    assert_eq!(gba_sector_id(&second, 0, 0), 12);
    assert_eq!(gba_slot_bytes(&second, 1), gba_slot_bytes(&first, 1));
    assert_eq!(open(&second).active_slot(), Some(SlotId::Primary));
}

#[test]
fn backup_choice_loads_the_older_valid_slot() {
    let image = gba_image(&named_logical(RS, "NEW"), 9, &named_logical(RS, "OLD"), 8);
    let backup = GbaSave::open(
        &image,
        OpenOptions {
            variant: None,
            slot: SlotChoice::Backup,
        },
    )
    .unwrap();
    assert_eq!(backup.active_slot(), Some(SlotId::Primary));
    assert_eq!(backup.loaded_slot(), Some(SlotId::Secondary));
    assert_eq!(backup.trainer().name(), "OLD");

    let mut broken = image.clone();
    corrupt_gba_slot(&mut broken, 1);
    let err = GbaSave::open(
        &broken,
        OpenOptions {
            variant: None,
            slot: SlotChoice::Backup,
        },
    )
    .unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::CorruptImage);
}

#[test]
fn write_in_place_restamps_the_loaded_slot() {
    let logical = gba_logical(RS);
    let original = gba_image(&logical, 5, &logical, 4);
    let mut save = open(&original);
    save.trainer_mut().set_name("MAY");
    let written = save.write_in_place().unwrap();

    assert_eq!(gba_slot_bytes(&written, 1), gba_slot_bytes(&original, 1));
    assert_eq!(gba_sector_counter(&written, 0, 0), 5);
    let reopened = open(&written);
    assert_eq!(reopened.active_slot(), Some(SlotId::Primary));
    assert_eq!(reopened.trainer().name(), "MAY");
}

#[test]
fn variant_follows_game_code_unless_overridden() {
    let cases = [
        (RS, GbaVariant::RubySapphire),
        (FRLG, GbaVariant::FireRedLeafGreen),
        (EMERALD_KEY, GbaVariant::Emerald),
    ];
    for (code, expected) in cases {
        let logical = gba_logical(code);
        let save = open(&gba_image(&logical, 1, &logical, 0));
        assert_eq!(save.variant(), expected, "game code {code:#x}");
    }

    let logical = gba_logical(RS);
    let forced = GbaSave::open(
        &gba_image(&logical, 1, &logical, 0),
        OpenOptions {
            variant: Some(GbaVariant::Emerald),
            slot: SlotChoice::Active,
        },
    )
    .unwrap();
    assert_eq!(forced.variant(), GbaVariant::Emerald);
}

#[test]
fn emerald_money_and_bag_are_masked_with_the_security_key() {
    let logical = gba_logical(EMERALD_KEY);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    assert_eq!(save.security_key(), EMERALD_KEY);

    save.set_money(123_456).unwrap();
    assert_eq!(save.money(), 123_456);
    let stored = SECTION_STRIDE + 0x490;
    let raw = u32::from_le_bytes(save.logical()[stored..stored + 4].try_into().unwrap());
    assert_eq!(raw, 123_456 ^ EMERALD_KEY);

    save.pocket_mut(Pocket::Balls)
        .set(0, ItemSlot { index: 4, amount: 10 })
        .unwrap();
    assert_eq!(
        save.pocket(Pocket::Balls).get(0).unwrap(),
        ItemSlot { index: 4, amount: 10 }
    );
    let balls = SECTION_STRIDE + 0x650;
    let raw_amount = u16::from_le_bytes([save.logical()[balls + 2], save.logical()[balls + 3]]);
    assert_eq!(raw_amount, 10 ^ 0x5678);

    save.pocket_mut(Pocket::Pc)
        .set(0, ItemSlot { index: 13, amount: 3 })
        .unwrap();
    let pc = SECTION_STRIDE + 0x498;
    assert_eq!(save.logical()[pc + 2], 3);
}

#[test]
fn ruby_money_is_stored_in_the_clear() {
    let logical = gba_logical(RS);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    assert_eq!(save.security_key(), 0);
    save.set_money(999_999).unwrap();
    let stored = SECTION_STRIDE + 0x490;
    assert_eq!(
        u32::from_le_bytes(save.logical()[stored..stored + 4].try_into().unwrap()),
        999_999
    );
}

#[test]
fn pocket_and_flat_item_indexes_are_bounds_checked() {
    let logical = gba_logical(FRLG);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    let capacity = save.pocket(Pocket::KeyItems).capacity();
    assert_eq!(capacity, 30);
    let err = save
        .pocket_mut(Pocket::KeyItems)
        .set(capacity, ItemSlot { index: 1, amount: 1 })
        .unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::OutOfRange);

    // Flat index 30 is the first Items slot after the 30-slot PC pocket.
    save.set_item(30, ItemSlot { index: 13, amount: 5 }).unwrap();
    assert_eq!(save.pocket(Pocket::Items).get(0).unwrap().amount, 5);
    let total = save.item_capacity();
    assert_eq!(total, 30 + 42 + 30 + 13 + 58 + 43);
    assert_eq!(
        save.item(total).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
}

#[test]
fn party_push_remove_and_capacity() {
    let logical = gba_logical(RS);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    {
        let mut party = save.party_mut();
        for i in 0..6u32 {
            let slot = party
                .push(&sample_pk3(0x1000 + i, 1 + i as u16, "MON"))
                .unwrap();
            assert_eq!(slot, i as usize);
        }
        let err = party.push(&sample_pk3(7, 25, "EXTRA")).unwrap_err();
        assert_eq!(err.code(), CoreErrorCode::OutOfRange);

        let removed = party.remove(1).unwrap();
        assert_eq!(removed.species(), 2);
    }

    let party = save.party();
    assert_eq!(party.count().unwrap(), 5);
    let species: Vec<u16> = party.members().unwrap().iter().map(|p| p.species()).collect();
    assert_eq!(species, vec![1, 3, 4, 5, 6]);
    assert_eq!(party.get(5).unwrap().status(), RecordStatus::Empty);
}

#[test]
fn party_records_survive_commit() {
    let logical = gba_logical(EMERALD_KEY);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    let pk = sample_pk3(0xDEAD_BEEF, 25, "SPARKY");
    save.party_mut().push(&pk).unwrap();
    let image = save.commit().unwrap();

    let reopened = open(&image);
    let members = reopened.party().members().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0], pk);
    assert_eq!(members[0].status(), RecordStatus::Valid);
    assert_eq!(members[0].nickname(), "SPARKY");
}

#[test]
fn tampered_records_are_refused_by_party_and_pc() {
    let mut logical = gba_logical(RS);
    let party_at = SECTION_STRIDE + 0x238;
    logical[party_at - 4..party_at].copy_from_slice(&1u32.to_le_bytes());
    logical[party_at..party_at + 100].copy_from_slice(&sample_pk3(0x19, 25, "PIKA").to_stored());
    logical[party_at + 32 + 5] ^= 0x40;
    let mut save = open(&gba_image(&logical, 1, &logical, 0));

    let pk = save.party().get(0).unwrap();
    assert_eq!(pk.status(), RecordStatus::Invalid);
    assert_eq!(
        save.party_mut().set(0, &pk).unwrap_err().code(),
        CoreErrorCode::CorruptImage
    );
    assert_eq!(
        save.pc_mut().set(0, 0, &pk).unwrap_err().code(),
        CoreErrorCode::CorruptImage
    );
    assert_eq!(save.party().get(0).unwrap().status(), RecordStatus::Invalid);
    assert_eq!(save.pc().get(0, 0).unwrap().status(), RecordStatus::Empty);
}

#[test]
fn money_above_the_display_cap_is_rejected() {
    let logical = gba_logical(EMERALD_KEY);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    save.set_money(500).unwrap();
    assert_eq!(
        save.set_money(1_000_000).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
    assert_eq!(save.money(), 500);
}

#[test]
fn oversized_party_count_is_corrupt() {
    let mut logical = gba_logical(RS);
    let count_at = SECTION_STRIDE + 0x234;
    logical[count_at..count_at + 4].copy_from_slice(&7u32.to_le_bytes());
    let save = open(&gba_image(&logical, 1, &logical, 0));
    assert_eq!(
        save.party().count().unwrap_err().code(),
        CoreErrorCode::CorruptImage
    );
}

#[test]
fn seen_flags_are_written_to_every_mirror() {
    let logical = gba_logical(RS);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    save.pokedex_mut().set_seen(25, true).unwrap();
    save.pokedex_mut().set_owned(25, true).unwrap();

    let data = save.logical();
    for base in [DEX_SEEN, SECTION_STRIDE + 0x938, 4 * SECTION_STRIDE + 0xC0C] {
        assert_eq!(data[base + 3] & 1, 1, "mirror at {base:#x}");
    }
    let dex = save.pokedex();
    assert!(dex.seen(25).unwrap());
    assert!(dex.owned(25).unwrap());
    assert!(!dex.owned(26).unwrap());
    assert_eq!(dex.seen_count(), 1);
    assert_eq!(
        dex.seen(0).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
    assert_eq!(
        dex.owned(387).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
}

#[test]
fn pc_boxes_hold_names_and_box_records() {
    let logical = gba_logical(RS);
    let mut save = open(&gba_image(&logical, 1, &logical, 0));
    let mut pk = sample_pk3(42, 150, "MEWTWO");
    pk.set_level(70);
    {
        let mut pc = save.pc_mut();
        pc.set_box_name(13, "FAVS").unwrap();
        pc.set(13, 29, &pk).unwrap();
        pc.set_current_box(13).unwrap();
        assert_eq!(
            pc.set(14, 0, &pk).unwrap_err().code(),
            CoreErrorCode::OutOfRange
        );
    }

    let pc = save.pc();
    assert_eq!(pc.current_box(), 13);
    assert_eq!(pc.box_name(13).unwrap(), "FAVS");
    let stored = pc.get(13, 29).unwrap();
    assert_eq!(stored.species(), 150);
    assert_eq!(stored.nickname(), "MEWTWO");
    // Box records carry no party extension.
    assert_eq!(stored.level(), 0);
    assert_eq!(pc.pc_box(0).unwrap().len(), 30);
}

#[test]
fn blank_firered_commits_into_a_readable_image() {
    let mut save = GbaSave::blank(GbaVariant::FireRedLeafGreen);
    assert_eq!(save.active_slot(), None);
    save.trainer_mut().set_name("RED");
    let image = save.commit().unwrap();

    let reopened = open(&image);
    assert_eq!(reopened.variant(), GbaVariant::FireRedLeafGreen);
    assert_eq!(reopened.active_slot(), Some(SlotId::Primary));
    assert_eq!(reopened.active_counter(), Some(0));
    assert_eq!(reopened.trainer().name(), "RED");
}
