mod common;

use common::{DP, gba_image, gba_logical, nds_image, nds_text, sample_pk3, sample_pk4};
use pkmn_core::core_api::{CapabilityIssue, Engine, Game};
use pkmn_core::gba::items::ItemSlot;
use pkmn_core::gba::pk3::RecordStatus;
use pkmn_core::gba::{GbaSave, GbaVariant, OpenOptions, Pocket};
use pkmn_core::gender::Gender;
use pkmn_core::nds::NdsVariant;
use pkmn_core::slot::{SlotChoice, SlotId};
use pkmn_core::{CoreErrorCode, PlayTime, read_save, write_save};

fn emerald_image() -> Vec<u8> {
    let logical = gba_logical(0x0BAD_F00D);
    let mut save = GbaSave::open(
        &gba_image(&logical, 1, &logical, 0),
        OpenOptions::default(),
    )
    .unwrap();
    save.trainer_mut().set_name("BRENDAN");
    save.trainer_mut().set_ids(100, 200);
    let mut pk = sample_pk3(0x0000_0019, 25, "PIKA");
    pk.set_level(10);
    save.party_mut().push(&pk).unwrap();
    save.commit().unwrap()
}

fn dp_image() -> Vec<u8> {
    let mut general = vec![0u8; 0x100];
    general[0x64..0x64 + 16].copy_from_slice(&nds_text("Lucas", 8));
    nds_image(&DP, &general, 1, 0)
}

#[test]
fn detects_generation_by_size_and_release_by_content() {
    let engine = Engine::new();
    let gba = engine.open_bytes(emerald_image(), None).unwrap();
    assert_eq!(gba.game(), Game::Gba(GbaVariant::Emerald));
    assert_eq!(gba.game().generation(), 3);

    let nds = engine.open_bytes(dp_image(), None).unwrap();
    assert_eq!(nds.game(), Game::Nds(NdsVariant::DiamondPearl));
    assert_eq!(nds.snapshot().trainer.name, "Lucas");
}

#[test]
fn rejects_images_of_unknown_size() {
    let err = Engine::new().open_bytes(vec![0u8; 1234], None).unwrap_err();
    assert_eq!(err.code(), CoreErrorCode::InvalidLength);
}

#[test]
fn snapshot_summarizes_trainer_party_and_slots() {
    let session = read_save(&emerald_image()).unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.trainer.name, "BRENDAN");
    assert_eq!(snapshot.trainer.id, 100);
    assert_eq!(snapshot.trainer.secret_id, 200);
    assert_eq!(snapshot.party_count, 1);
    assert_eq!(snapshot.active_slot, Some(SlotId::Secondary));
    assert_eq!(snapshot.slots.len(), 2);
    assert!(snapshot.pokedex.is_some());

    let party = session.party().unwrap();
    assert_eq!(party[0].species, 25);
    assert_eq!(party[0].species_name.as_deref(), Some("Pikachu"));
    assert_eq!(party[0].nickname, "PIKA");
    assert_eq!(party[0].level, 10);
    assert_eq!(party[0].nature, "Hardy");
}

#[test]
fn set_money_survives_commit_and_reopen() {
    let mut session = read_save(&emerald_image()).unwrap();
    session.set_money(54_321).unwrap();
    assert_eq!(session.snapshot().trainer.money, 54_321);

    let bytes = write_save(&session).unwrap();
    let reopened = read_save(&bytes).unwrap();
    assert_eq!(reopened.snapshot().trainer.money, 54_321);
    assert_eq!(reopened.snapshot().active_slot, Some(SlotId::Primary));
}

#[test]
fn money_is_capped_for_both_generations() {
    let mut gba = read_save(&emerald_image()).unwrap();
    assert_eq!(
        gba.set_money(1_000_000).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
    let mut nds = read_save(&dp_image()).unwrap();
    assert_eq!(
        nds.set_money(1_000_000).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
    nds.set_money(999_999).unwrap();
    assert_eq!(nds.trainer().money, 999_999);
}

#[test]
fn trainer_edits_are_reflected_in_the_snapshot() {
    let mut session = read_save(&emerald_image()).unwrap();
    session.set_trainer_name("MAY").unwrap();
    session.set_trainer_gender(Gender::Female).unwrap();
    let time = PlayTime {
        hours: 99,
        minutes: 59,
        seconds: 30,
        frames: 12,
    };
    session.set_played_time(time).unwrap();

    let trainer = &session.snapshot().trainer;
    assert_eq!(trainer.name, "MAY");
    assert_eq!(trainer.gender, Gender::Female);
    assert_eq!(trainer.play_time, time);

    let bad = PlayTime {
        minutes: 60,
        ..time
    };
    assert_eq!(
        session.set_played_time(bad).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
}

#[test]
fn pokedex_and_items_edit_through_the_session() {
    let mut session = read_save(&emerald_image()).unwrap();
    session.set_pokedex_seen(150, true).unwrap();
    session.set_pokedex_owned(150, true).unwrap();
    let counts = session.pokedex_counts().unwrap();
    assert_eq!((counts.seen, counts.owned), (1, 1));

    session
        .set_item(Pocket::Items, 0, ItemSlot { index: 13, amount: 7 })
        .unwrap();
    let items = session.pocket(Pocket::Items).unwrap();
    assert_eq!(items[0].amount, 7);
    assert_eq!(items[0].name.as_deref(), Some("Potion"));
    assert_eq!(items[1].name, None);

    let bytes = write_save(&session).unwrap();
    let reopened = read_save(&bytes).unwrap();
    assert_eq!(reopened.pocket(Pocket::Items).unwrap()[0].amount, 7);
    assert_eq!(reopened.pokedex_counts().unwrap().owned, 1);
}

#[test]
fn level_edit_recomputes_known_species_stats() {
    let mut session = read_save(&emerald_image()).unwrap();
    session.set_party_level(0, 50).unwrap();
    let party = session.party().unwrap();
    assert_eq!(party[0].level, 50);
    // Pikachu base HP 35, zero IVs and EVs: (70 * 50 / 100) + 50 + 10.
    assert_eq!(party[0].stats.hp, 95);
    assert_eq!(party[0].current_hp, 95);

    assert_eq!(
        session.set_party_level(0, 101).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
    assert_eq!(
        session.set_party_level(3, 10).unwrap_err().code(),
        CoreErrorCode::OutOfRange
    );
}

#[test]
fn level_edit_refuses_tampered_records() {
    let mut logical = gba_logical(0x0BAD_F00D);
    let party_at = 0xF80 + 0x238;
    logical[party_at - 4..party_at].copy_from_slice(&1u32.to_le_bytes());
    logical[party_at..party_at + 100].copy_from_slice(&sample_pk3(0x19, 25, "PIKA").to_stored());
    logical[party_at + 32 + 5] ^= 0x40;
    let mut gba = read_save(&gba_image(&logical, 1, &logical, 0)).unwrap();

    let mut general = vec![0u8; 0x200];
    general[0x94..0x98].copy_from_slice(&1u32.to_le_bytes());
    let stored = sample_pk4(0x0003_E123, 393, "Piplup").to_stored();
    general[0x98..0x98 + stored.len()].copy_from_slice(&stored);
    general[0x98 + 0x08 + 5] ^= 0x40;
    let mut nds = read_save(&nds_image(&DP, &general, 1, 0)).unwrap();

    for session in [&mut gba, &mut nds] {
        assert_eq!(session.party().unwrap()[0].status, RecordStatus::Invalid);
        assert_eq!(
            session.set_party_level(0, 20).unwrap_err().code(),
            CoreErrorCode::CorruptImage
        );
        let member = &session.party().unwrap()[0];
        assert_eq!(member.status, RecordStatus::Invalid);
        assert_eq!(member.level, 5);
    }
}

#[test]
fn generation_four_reports_unmapped_regions() {
    let mut session = read_save(&dp_image()).unwrap();
    let issues = &session.capabilities().issues;
    assert!(issues.contains(&CapabilityIssue::NoItemPockets));
    assert!(issues.contains(&CapabilityIssue::NoPokedex));

    assert_eq!(
        session.pocket(Pocket::Items).unwrap_err().code(),
        CoreErrorCode::UnsupportedVariant
    );
    assert_eq!(
        session.pc_box(0).unwrap_err().code(),
        CoreErrorCode::UnsupportedVariant
    );
    assert_eq!(
        session.set_pokedex_seen(1, true).unwrap_err().code(),
        CoreErrorCode::UnsupportedVariant
    );
    assert_eq!(session.snapshot().pokedex, None);
}

#[test]
fn unmodified_bytes_match_the_input() {
    let image = emerald_image();
    let mut session = read_save(&image).unwrap();
    session.set_money(1).unwrap();
    assert_eq!(session.to_bytes_unmodified(), image);
}

#[test]
fn committed_bytes_do_not_change_the_session() {
    let image = emerald_image();
    let session = read_save(&image).unwrap();
    let first = session.to_bytes_committed().unwrap();
    let second = session.to_bytes_committed().unwrap();
    assert_eq!(first, second);
    assert_eq!(session.snapshot().active_slot, Some(SlotId::Secondary));
}

#[test]
fn session_commit_flips_the_active_slot() {
    let mut session = read_save(&emerald_image()).unwrap();
    let bytes = session.commit().unwrap();
    assert_eq!(session.snapshot().active_slot, Some(SlotId::Primary));
    assert_eq!(read_save(&bytes).unwrap().snapshot().active_slot, Some(SlotId::Primary));
}

#[test]
fn backup_sessions_flag_the_loaded_slot() {
    let session = Engine::new()
        .open_bytes_with(emerald_image(), None, SlotChoice::Backup)
        .unwrap();
    assert!(
        session
            .capabilities()
            .issues
            .contains(&CapabilityIssue::BackupSlotLoaded)
    );
    // The older slot predates the trainer edits.
    assert_eq!(session.snapshot().trainer.name.trim(), "");
}

#[test]
fn hint_overrides_detection() {
    let session = Engine::new()
        .open_bytes(emerald_image(), Some(Game::Gba(GbaVariant::RubySapphire)))
        .unwrap();
    assert_eq!(session.game(), Game::Gba(GbaVariant::RubySapphire));
}

#[test]
fn blank_sessions_commit_into_openable_images() {
    let mut session = Engine::new()
        .blank(Game::Gba(GbaVariant::FireRedLeafGreen))
        .unwrap();
    session.set_trainer_name("RED").unwrap();
    let bytes = session.commit().unwrap();
    let reopened = read_save(&bytes).unwrap();
    assert_eq!(reopened.game(), Game::Gba(GbaVariant::FireRedLeafGreen));
    assert_eq!(reopened.snapshot().trainer.name, "RED");
}

#[test]
fn snapshot_serializes_to_json() {
    let session = read_save(&emerald_image()).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["trainer"]["name"], "BRENDAN");
    assert_eq!(json["party_count"], 1);
}
