use pkmn_core::core_api::{Engine, Game, Session};
use pkmn_core::gba::items::ItemSlot;
use pkmn_core::gba::pk3::Pk3;
use pkmn_core::gba::{GbaSave, GbaVariant, OpenOptions, Pocket};
use pkmn_core::read_save;
use pkmn_render::{
    FieldSelection, JsonStyle, TextRenderOptions, TextStyle, render_box_json, render_json_full,
    render_json_selected, render_text, render_text_with_options, render_trainer_card,
};
use serde_json::Value;

fn firered_session() -> Session {
    let mut blank = Engine::new()
        .blank(Game::Gba(GbaVariant::FireRedLeafGreen))
        .expect("blank save should build");
    blank.set_trainer_name("RED").expect("name should fit");
    blank.set_money(1_234_567 / 2).expect("money within cap");
    blank
        .set_item(Pocket::Items, 0, ItemSlot { index: 13, amount: 3 })
        .expect("potion slot");
    let bytes = blank.commit().expect("commit blank");

    let mut save = GbaSave::open(&bytes, OpenOptions::default()).expect("reopen blank");
    let mut pk = Pk3::empty();
    pk.set_pid(0x0000_0019);
    pk.set_ot_ids(1, 2);
    pk.set_species(25);
    pk.set_nickname("PIKA");
    pk.set_ot_name("RED");
    pk.set_level(10);
    pk.update_checksum();
    save.party_mut().push(&pk).expect("party has room");
    let bytes = save.commit().expect("commit party");

    read_save(&bytes).expect("committed image should open")
}

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let session = firered_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1);

    assert_eq!(
        keys(&value),
        vec![
            "game",
            "generation",
            "name",
            "gender",
            "trainer_id",
            "secret_id",
            "money",
            "play_time",
            "active_slot",
            "slots",
            "party",
            "pokedex",
            "items",
        ]
    );
    assert_eq!(value["game"], "FireRed/LeafGreen");
    assert_eq!(value["generation"], 3);
    assert_eq!(value["name"], "RED");
    assert_eq!(value["money"], 617_283);
}

#[test]
fn selected_json_only_contains_requested_fields() {
    let session = firered_session();
    let fields = FieldSelection {
        name: true,
        money: true,
        ..FieldSelection::default()
    };
    assert!(fields.is_any_selected());
    assert!(!FieldSelection::default().is_any_selected());

    let value = render_json_selected(&session, &fields, JsonStyle::CanonicalV1);
    assert_eq!(keys(&value), vec!["name", "money"]);
}

#[test]
fn party_members_render_with_names_and_stats() {
    let session = firered_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1);
    let party = value["party"].as_array().expect("party should be an array");
    assert_eq!(party.len(), 1);

    let pika = &party[0];
    assert_eq!(pika["species"], 25);
    assert_eq!(pika["species_name"], "Pikachu");
    assert_eq!(pika["nickname"], "PIKA");
    assert_eq!(pika["level"], 10);
    assert_eq!(pika["nature"], "Hardy");
    assert_eq!(
        keys(&pika["stats"]),
        vec!["hp", "atk", "def", "spd", "satk", "sdef"]
    );
}

#[test]
fn items_list_only_occupied_slots_per_pocket() {
    let session = firered_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1);
    let items = value["items"].as_object().expect("items should be an object");
    assert_eq!(items.len(), Pocket::ALL.len());

    let bag = items["Items Pocket"].as_array().expect("pocket array");
    assert_eq!(bag.len(), 1);
    assert_eq!(bag[0]["name"], "Potion");
    assert_eq!(bag[0]["amount"], 3);
    assert!(items["PC Items"].as_array().expect("pc array").is_empty());
}

#[test]
fn slots_report_the_active_copy() {
    let session = firered_session();
    let value = render_json_full(&session, JsonStyle::CanonicalV1);
    let active = value["active_slot"].as_str().expect("active slot name");
    let slots = value["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 2);
    assert!(slots.iter().any(|s| s["id"] == active && s["valid"] == true));
}

#[test]
fn pc_box_renders_thirty_slots() {
    let session = firered_session();
    let value = render_box_json(&session, 0).expect("box 0 exists");
    assert_eq!(value.as_array().map(Vec::len), Some(30));
    assert!(render_box_json(&session, 14).is_err());
}

#[test]
fn trainer_card_contains_key_lines() {
    let session = firered_session();
    let card = render_trainer_card(&session);

    assert!(card.contains("FIRERED/LEAFGREEN"));
    assert!(card.contains("TRAINER CARD"));
    assert!(card.contains("Name: RED"));
    assert!(card.contains("Money: $617,283"));
    assert!(card.contains("Pikachu"));
    assert!(card.contains("Potion x3"));
    assert!(!card.contains("Save Slots"));
    assert!(card.lines().all(|line| !line.ends_with(' ')));
    assert_eq!(card, render_text(&session, TextStyle::TrainerCard));
}

#[test]
fn verbose_card_lists_slots_and_empty_item_rows() {
    let session = firered_session();
    let card = render_text_with_options(
        &session,
        TextStyle::TrainerCard,
        TextRenderOptions { verbose: true },
    );
    assert!(card.contains("::: Save Slots :::"));
    assert!(card.contains("primary"));
    assert!(card.contains("secondary"));
    assert!(card.lines().any(|line| line.trim().starts_with('-')));
}
