use std::fmt::Write as _;

use pkmn_core::CoreError;
use pkmn_core::PlayTime;
use pkmn_core::core_api::{CreatureEntry, Game, ItemEntry, PokedexCounts, Session};
use pkmn_core::data;
use pkmn_core::gba::Pocket;
use pkmn_core::slot::SlotStatus;
use pkmn_core::stat::Stats;
use serde_json::{Map as JsonMap, Value as JsonValue};

const SHEET_WIDTH: usize = 72;
const TWO_COL_WIDTH_LEFT: usize = 30;
const PARTY_COL_SPECIES: usize = 12;
const PARTY_COL_NICKNAME: usize = 12;
const PARTY_COL_NATURE: usize = 9;
const ITEM_COL_WIDTH: usize = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    TrainerCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Also list empty item slots and rejected save slots.
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub game: bool,
    pub name: bool,
    pub gender: bool,
    pub trainer_id: bool,
    pub secret_id: bool,
    pub money: bool,
    pub play_time: bool,
    pub slots: bool,
    pub party: bool,
    pub pokedex: bool,
    pub items: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.game
            || self.name
            || self.gender
            || self.trainer_id
            || self.secret_id
            || self.money
            || self.play_time
            || self.slots
            || self.party
            || self.pokedex
            || self.items
    }

    pub fn all() -> Self {
        Self {
            game: true,
            name: true,
            gender: true,
            trainer_id: true,
            secret_id: true,
            money: true,
            play_time: true,
            slots: true,
            party: true,
            pokedex: true,
            items: true,
        }
    }
}

pub fn render_json_full(session: &Session, style: JsonStyle) -> JsonValue {
    render_json_selected(session, &FieldSelection::all(), style)
}

pub fn render_json_selected(
    session: &Session,
    fields: &FieldSelection,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_json(fields, session)),
    }
}

/// One PC box as a JSON array of its thirty slots.
pub fn render_box_json(session: &Session, box_index: usize) -> Result<JsonValue, CoreError> {
    let game = session.game();
    Ok(JsonValue::Array(
        session
            .pc_box(box_index)?
            .iter()
            .map(|c| creature_to_json(game, c))
            .collect(),
    ))
}

pub fn render_trainer_card(session: &Session) -> String {
    render_trainer_card_with_options(session, TextRenderOptions::default())
}

pub fn render_trainer_card_with_options(session: &Session, options: TextRenderOptions) -> String {
    render_trainer_card_impl(session, options)
}

pub fn render_text(session: &Session, style: TextStyle) -> String {
    render_text_with_options(session, style, TextRenderOptions::default())
}

pub fn render_text_with_options(
    session: &Session,
    style: TextStyle,
    options: TextRenderOptions,
) -> String {
    match style {
        TextStyle::TrainerCard => render_trainer_card_impl(session, options),
    }
}

fn selected_json(fields: &FieldSelection, session: &Session) -> JsonMap<String, JsonValue> {
    let snapshot = session.snapshot();
    let trainer = &snapshot.trainer;
    let mut out = JsonMap::new();

    if fields.game {
        out.insert(
            "game".to_string(),
            JsonValue::String(session.game().to_string()),
        );
        out.insert(
            "generation".to_string(),
            JsonValue::from(session.game().generation()),
        );
    }
    if fields.name {
        out.insert("name".to_string(), JsonValue::String(trainer.name.clone()));
    }
    if fields.gender {
        out.insert(
            "gender".to_string(),
            JsonValue::String(trainer.gender.to_string()),
        );
    }
    if fields.trainer_id {
        out.insert("trainer_id".to_string(), JsonValue::from(trainer.id));
    }
    if fields.secret_id {
        out.insert("secret_id".to_string(), JsonValue::from(trainer.secret_id));
    }
    if fields.money {
        out.insert("money".to_string(), JsonValue::from(trainer.money));
    }
    if fields.play_time {
        out.insert(
            "play_time".to_string(),
            JsonValue::String(format_play_time(&trainer.play_time)),
        );
    }
    if fields.slots {
        out.insert(
            "active_slot".to_string(),
            match snapshot.active_slot {
                Some(id) => JsonValue::String(id.as_str().to_string()),
                None => JsonValue::Null,
            },
        );
        out.insert("slots".to_string(), slots_to_json(&snapshot.slots));
    }
    if fields.party {
        out.insert("party".to_string(), party_to_json(session));
    }
    if fields.pokedex {
        out.insert(
            "pokedex".to_string(),
            match &snapshot.pokedex {
                Some(counts) => pokedex_to_json(counts),
                None => JsonValue::Null,
            },
        );
    }
    if fields.items {
        out.insert("items".to_string(), items_to_json(session));
    }

    out
}

fn slots_to_json(slots: &[SlotStatus]) -> JsonValue {
    JsonValue::Array(
        slots
            .iter()
            .map(|s| {
                let mut m = JsonMap::new();
                m.insert("id".to_string(), JsonValue::String(s.id.as_str().to_string()));
                m.insert("counter".to_string(), JsonValue::from(s.counter));
                m.insert("valid".to_string(), JsonValue::Bool(s.valid));
                if let Some(problem) = &s.problem {
                    m.insert("problem".to_string(), JsonValue::String(problem.clone()));
                }
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn party_to_json(session: &Session) -> JsonValue {
    party_json(session.game(), &session.party())
}

/// The member array, or an object carrying the read error.
fn party_json(game: Game, party: &Result<Vec<CreatureEntry>, CoreError>) -> JsonValue {
    match party {
        Ok(party) => JsonValue::Array(party.iter().map(|c| creature_to_json(game, c)).collect()),
        Err(e) => {
            let mut m = JsonMap::new();
            m.insert("error".to_string(), JsonValue::String(e.to_string()));
            JsonValue::Object(m)
        }
    }
}

fn creature_to_json(game: Game, c: &CreatureEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("slot".to_string(), JsonValue::from(c.slot));
    m.insert(
        "status".to_string(),
        JsonValue::String(format!("{:?}", c.status)),
    );
    m.insert("species".to_string(), JsonValue::from(c.species));
    m.insert(
        "species_name".to_string(),
        match &c.species_name {
            Some(name) => JsonValue::String(name.clone()),
            None => JsonValue::Null,
        },
    );
    m.insert("nickname".to_string(), JsonValue::String(c.nickname.clone()));
    m.insert("level".to_string(), JsonValue::from(c.level));
    m.insert("pid".to_string(), JsonValue::from(c.pid));
    m.insert("nature".to_string(), JsonValue::String(c.nature.clone()));
    m.insert("shiny".to_string(), JsonValue::Bool(c.shiny));
    m.insert("egg".to_string(), JsonValue::Bool(c.egg));
    m.insert("held_item".to_string(), JsonValue::from(c.held_item));
    if let Some(name) = held_item_name(game, c.held_item) {
        m.insert("held_item_name".to_string(), JsonValue::String(name.to_string()));
    }
    m.insert(
        "moves".to_string(),
        JsonValue::Array(
            c.moves
                .iter()
                .filter(|&&id| id != 0)
                .map(|&id| match data::move_info(id) {
                    Ok(info) => JsonValue::String(info.name.to_string()),
                    Err(_) => JsonValue::from(id),
                })
                .collect(),
        ),
    );
    m.insert("ivs".to_string(), JsonValue::from(c.ivs.to_vec()));
    m.insert("evs".to_string(), JsonValue::from(c.evs.to_vec()));
    m.insert("stats".to_string(), stats_to_json(&c.stats));
    m.insert("current_hp".to_string(), JsonValue::from(c.current_hp));
    JsonValue::Object(m)
}

/// Item names are indexed by the generation 3 item list only.
fn held_item_name(game: Game, item: u16) -> Option<&'static str> {
    match game {
        Game::Gba(_) if item != 0 => data::item_name(item),
        _ => None,
    }
}

fn stats_to_json(stats: &Stats) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("hp".to_string(), JsonValue::from(stats.hp));
    m.insert("atk".to_string(), JsonValue::from(stats.atk));
    m.insert("def".to_string(), JsonValue::from(stats.def));
    m.insert("spd".to_string(), JsonValue::from(stats.spd));
    m.insert("satk".to_string(), JsonValue::from(stats.satk));
    m.insert("sdef".to_string(), JsonValue::from(stats.sdef));
    JsonValue::Object(m)
}

fn pokedex_to_json(counts: &PokedexCounts) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("seen".to_string(), JsonValue::from(counts.seen));
    m.insert("owned".to_string(), JsonValue::from(counts.owned));
    m.insert("national".to_string(), JsonValue::Bool(counts.national));
    JsonValue::Object(m)
}

/// Non-empty slots of every pocket, keyed by pocket label. Null where the
/// release has no mapped pockets.
fn items_to_json(session: &Session) -> JsonValue {
    let mut out = JsonMap::new();
    for pocket in Pocket::ALL {
        let Ok(entries) = session.pocket(pocket) else {
            return JsonValue::Null;
        };
        out.insert(
            pocket.label().to_string(),
            JsonValue::Array(
                entries
                    .iter()
                    .filter(|e| e.index != 0)
                    .map(item_to_json)
                    .collect(),
            ),
        );
    }
    JsonValue::Object(out)
}

fn item_to_json(item: &ItemEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("slot".to_string(), JsonValue::from(item.slot));
    m.insert("index".to_string(), JsonValue::from(item.index));
    m.insert("amount".to_string(), JsonValue::from(item.amount));
    if let Some(name) = &item.name {
        m.insert("name".to_string(), JsonValue::String(name.clone()));
    }
    JsonValue::Object(m)
}

fn render_trainer_card_impl(session: &Session, options: TextRenderOptions) -> String {
    let snapshot = session.snapshot();
    let trainer = &snapshot.trainer;
    let title = session.game().to_string().to_uppercase();

    let mut out = String::new();
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(&mut out, "{}", centered_no_trailing(&title, SHEET_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(&mut out, "{}", centered_no_trailing("TRAINER CARD", SHEET_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    let left = format!("  Name: {}", trainer.name.trim_end());
    writeln!(
        &mut out,
        "{:<w$}ID No.: {:05}",
        left,
        trainer.id,
        w = TWO_COL_WIDTH_LEFT
    )
    .expect("writing to String cannot fail");
    let left = format!("  Gender: {}", trainer.gender);
    writeln!(
        &mut out,
        "{:<w$}Money: ${}",
        left,
        format_number_with_commas(trainer.money),
        w = TWO_COL_WIDTH_LEFT
    )
    .expect("writing to String cannot fail");
    let left = format!("  Time: {}", format_play_time(&trainer.play_time));
    let slot = match snapshot.active_slot {
        Some(id) => id.as_str(),
        None => "none",
    };
    writeln!(
        &mut out,
        "{:<w$}Slot: {}",
        left,
        slot,
        w = TWO_COL_WIDTH_LEFT
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    if options.verbose {
        write_slots_section(&mut out, &snapshot.slots);
        writeln!(&mut out).expect("writing to String cannot fail");
    }

    write_party_section(&mut out, &session.party());
    writeln!(&mut out).expect("writing to String cannot fail");

    if let Some(counts) = &snapshot.pokedex {
        writeln!(&mut out, " ::: Pokedex :::").expect("writing to String cannot fail");
        writeln!(
            &mut out,
            "  Seen: {:<6}Owned: {:<6}National: {}",
            counts.seen,
            counts.owned,
            if counts.national { "yes" } else { "no" }
        )
        .expect("writing to String cannot fail");
        writeln!(&mut out).expect("writing to String cannot fail");
    }

    if matches!(session.game(), Game::Gba(_)) {
        write_items_section(session, &mut out, options.verbose);
        writeln!(&mut out).expect("writing to String cannot fail");
    }

    out
}

fn write_slots_section(out: &mut String, slots: &[SlotStatus]) {
    writeln!(out, " ::: Save Slots :::").expect("writing to String cannot fail");
    for s in slots {
        let state = match &s.problem {
            None => "ok".to_string(),
            Some(problem) => format!("rejected ({problem})"),
        };
        writeln!(
            out,
            "  {:<10} counter {:<10} {}",
            s.id.as_str(),
            s.counter,
            state
        )
        .expect("writing to String cannot fail");
    }
}

fn write_party_section(out: &mut String, party: &Result<Vec<CreatureEntry>, CoreError>) {
    writeln!(out, " ::: Party :::").expect("writing to String cannot fail");
    let party = match party {
        Ok(party) => party,
        Err(e) => {
            writeln!(out, "  unreadable ({e})").expect("writing to String cannot fail");
            return;
        }
    };
    if party.is_empty() {
        writeln!(out, "  none").expect("writing to String cannot fail");
        return;
    }
    for c in party {
        let species = c
            .species_name
            .clone()
            .unwrap_or_else(|| format!("#{}", c.species));
        let mut flags = String::new();
        if c.shiny {
            flags.push_str(" *");
        }
        if c.egg {
            flags.push_str(" (egg)");
        }
        let line = format!(
            "  {}. {:<a$}{:<b$}Lv {:<4}{:<c$}HP {:03}/{:03}{}",
            c.slot + 1,
            fit_column(&species, PARTY_COL_SPECIES - 1),
            fit_column(&c.nickname, PARTY_COL_NICKNAME - 1),
            c.level,
            c.nature,
            c.current_hp,
            c.stats.hp,
            flags,
            a = PARTY_COL_SPECIES,
            b = PARTY_COL_NICKNAME,
            c = PARTY_COL_NATURE
        );
        writeln!(out, "{}", line.trim_end()).expect("writing to String cannot fail");
    }
}

fn write_items_section(session: &Session, out: &mut String, verbose: bool) {
    writeln!(out, " ::: Items :::").expect("writing to String cannot fail");
    for pocket in Pocket::ALL {
        let Ok(entries) = session.pocket(pocket) else {
            continue;
        };
        let rows: Vec<String> = entries
            .iter()
            .filter(|e| verbose || e.index != 0)
            .map(|e| match &e.name {
                Some(name) => format!("{name} x{}", e.amount),
                None if e.index == 0 => "-".to_string(),
                None => format!("item {} x{}", e.index, e.amount),
            })
            .collect();
        writeln!(out, "  {}:", pocket.label()).expect("writing to String cannot fail");
        if rows.is_empty() {
            writeln!(out, "    none").expect("writing to String cannot fail");
            continue;
        }
        for chunk in rows.chunks(2) {
            let col1 = chunk.first().map(String::as_str).unwrap_or("");
            let col2 = chunk.get(1).map(String::as_str).unwrap_or("");
            let line = format!(
                "    {:<w$}{}",
                fit_column(col1, ITEM_COL_WIDTH - 1),
                fit_column(col2, ITEM_COL_WIDTH - 1),
                w = ITEM_COL_WIDTH
            );
            writeln!(out, "{}", line.trim_end()).expect("writing to String cannot fail");
        }
    }
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}

fn format_play_time(time: &PlayTime) -> String {
    format!("{}:{:02}:{:02}", time.hours, time.minutes, time.seconds)
}

fn format_number_with_commas(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
