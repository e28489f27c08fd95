use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::{debug, info};
use pkmn_core::core_api::{CreatureEntry, Engine, Game, Session};
use pkmn_core::gba::Pocket;
use pkmn_core::gba::items::ItemSlot;
use pkmn_core::gender::Gender;
use pkmn_core::slot::SlotChoice;
use pkmn_core::{CoreError, PlayTime};
use pkmn_render::{
    FieldSelection, JsonStyle, TextRenderOptions, TextStyle, render_box_json, render_json_full,
    render_json_selected, render_text_with_options,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.SAV")]
    path: PathBuf,
    #[arg(
        long,
        value_name = "rs|emerald|frlg|dp|pt|hgss",
        value_parser = parse_game
    )]
    game: Option<Game>,
    /// Open the older save slot instead of the active one.
    #[arg(long)]
    backup: bool,
    #[arg(long, short)]
    verbose: bool,
    #[arg(long)]
    release: bool,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    gender: bool,
    #[arg(long = "trainer-id")]
    trainer_id: bool,
    #[arg(long = "secret-id")]
    secret_id: bool,
    #[arg(long)]
    money: bool,
    #[arg(long = "play-time")]
    play_time: bool,
    #[arg(long)]
    slots: bool,
    #[arg(long)]
    party: bool,
    #[arg(long)]
    pokedex: bool,
    #[arg(long)]
    items: bool,
    /// Dump one PC box (0-13) as JSON.
    #[arg(long = "box", value_name = "N")]
    pc_box: Option<usize>,
    #[arg(long)]
    json: bool,
    #[arg(long = "set-money")]
    set_money: Option<u32>,
    #[arg(long = "set-name")]
    set_name: Option<String>,
    #[arg(long = "set-gender")]
    set_gender: Option<GenderArg>,
    #[arg(long = "set-time", value_name = "H:MM:SS", value_parser = parse_play_time)]
    set_time: Option<PlayTime>,
    #[arg(long = "set-seen", value_name = "DEX")]
    set_seen: Vec<u16>,
    #[arg(long = "set-owned", value_name = "DEX")]
    set_owned: Vec<u16>,
    #[arg(
        long = "set-item",
        value_name = "POCKET:SLOT:ITEM:COUNT",
        value_parser = parse_item_edit
    )]
    set_item: Vec<ItemEdit>,
    #[arg(
        long = "set-level",
        value_name = "PARTY_SLOT:LEVEL",
        value_parser = parse_level_edit
    )]
    set_level: Vec<LevelEdit>,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
struct ItemEdit {
    pocket: Pocket,
    slot: usize,
    item: ItemSlot,
}

#[derive(Debug, Clone, Copy)]
struct LevelEdit {
    slot: usize,
    level: u8,
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            game: self.release,
            name: self.name,
            gender: self.gender,
            trainer_id: self.trainer_id,
            secret_id: self.secret_id,
            money: self.money,
            play_time: self.play_time,
            slots: self.slots,
            party: self.party,
            pokedex: self.pokedex,
            items: self.items,
        }
    }

    fn has_edits(&self) -> bool {
        self.set_money.is_some()
            || self.set_name.is_some()
            || self.set_gender.is_some()
            || self.set_time.is_some()
            || !self.set_seen.is_empty()
            || !self.set_owned.is_empty()
            || !self.set_item.is_empty()
            || !self.set_level.is_empty()
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fields = cli.field_selection();
    let has_edits = cli.has_edits();
    if has_edits && cli.output.is_none() {
        eprintln!("--set-* flags require --output <PATH>");
        process::exit(2);
    }
    if !has_edits && cli.output.is_some() {
        eprintln!("--output requires at least one --set-* flag");
        process::exit(2);
    }

    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });
    debug!("read {} bytes from {}", bytes.len(), cli.path.display());

    let slot = if cli.backup {
        SlotChoice::Backup
    } else {
        SlotChoice::Active
    };
    let mut session = Engine::new()
        .open_bytes_with(bytes, cli.game, slot)
        .unwrap_or_else(|e| {
            eprintln!("Error parsing save file: {}", cli.path.display());
            eprintln!("  {}", e);
            process::exit(1);
        });
    info!("detected {}", session.game());

    if let Err(e) = apply_edits(&mut session, &cli) {
        eprintln!("Error applying edit: {e}");
        process::exit(1);
    }

    if let Some(out_path) = &cli.output {
        let edited = session.commit().unwrap_or_else(|e| {
            eprintln!("Error creating modified save bytes: {e}");
            process::exit(1);
        });
        fs::write(out_path, edited).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
        info!("wrote {}", out_path.display());
    }

    if let Some(box_index) = cli.pc_box {
        let value = render_box_json(&session, box_index).unwrap_or_else(|e| {
            eprintln!("Error reading PC box {box_index}: {e}");
            process::exit(1);
        });
        print_json(&value);
        return;
    }

    if cli.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&session, &fields, JsonStyle::CanonicalV1)
        } else {
            render_json_full(&session, JsonStyle::CanonicalV1)
        };
        print_json(&json);
        return;
    }

    if fields.is_any_selected() {
        let pairs = selected_pairs(&fields, &session).unwrap_or_else(|e| {
            eprintln!("Error reading party: {e}");
            process::exit(1);
        });
        for (key, value) in pairs {
            println!("{key}={value}");
        }
        return;
    }

    if let Some(out_path) = &cli.output {
        println!("Wrote edited save to {}", out_path.display());
        return;
    }

    print!(
        "{}",
        render_text_with_options(
            &session,
            TextStyle::TrainerCard,
            TextRenderOptions {
                verbose: cli.verbose,
            },
        )
    );
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn apply_edits(session: &mut Session, cli: &Cli) -> Result<(), CoreError> {
    if let Some(money) = cli.set_money {
        session.set_money(money)?;
    }
    if let Some(name) = &cli.set_name {
        session.set_trainer_name(name)?;
    }
    if let Some(gender) = cli.set_gender {
        session.set_trainer_gender(to_core_gender(gender))?;
    }
    if let Some(time) = cli.set_time {
        session.set_played_time(time)?;
    }
    for &dex in &cli.set_seen {
        session.set_pokedex_seen(dex, true)?;
    }
    for &dex in &cli.set_owned {
        session.set_pokedex_owned(dex, true)?;
    }
    for edit in &cli.set_item {
        session.set_item(edit.pocket, edit.slot, edit.item)?;
    }
    for edit in &cli.set_level {
        session.set_party_level(edit.slot, edit.level)?;
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn selected_pairs(
    fields: &FieldSelection,
    session: &Session,
) -> Result<Vec<(&'static str, String)>, CoreError> {
    let snapshot = session.snapshot();
    let trainer = &snapshot.trainer;
    let mut out = Vec::new();

    if fields.game {
        out.push(("game", session.game().to_string()));
    }
    if fields.name {
        out.push(("name", trainer.name.clone()));
    }
    if fields.gender {
        out.push(("gender", trainer.gender.to_string()));
    }
    if fields.trainer_id {
        out.push(("trainer_id", trainer.id.to_string()));
    }
    if fields.secret_id {
        out.push(("secret_id", trainer.secret_id.to_string()));
    }
    if fields.money {
        out.push(("money", trainer.money.to_string()));
    }
    if fields.play_time {
        let t = &trainer.play_time;
        out.push((
            "play_time",
            format!("{}:{:02}:{:02}", t.hours, t.minutes, t.seconds),
        ));
    }
    if fields.slots {
        out.push((
            "active_slot",
            snapshot
                .active_slot
                .map(|id| id.as_str().to_string())
                .unwrap_or_else(|| "none".to_string()),
        ));
        for s in &snapshot.slots {
            let state = if s.valid { "valid" } else { "invalid" };
            out.push(("slot", format!("{} counter={} {state}", s.id.as_str(), s.counter)));
        }
    }
    if fields.party {
        out.extend(party_pairs(session.party()?));
    }
    if fields.pokedex {
        out.push((
            "pokedex",
            match &snapshot.pokedex {
                Some(d) => format!("seen={} owned={}", d.seen, d.owned),
                None => "unsupported".to_string(),
            },
        ));
    }
    if fields.items {
        for pocket in Pocket::ALL {
            let Ok(entries) = session.pocket(pocket) else {
                out.push(("item", "unsupported".to_string()));
                break;
            };
            for e in entries.iter().filter(|e| e.index != 0) {
                let name = e
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("item {}", e.index));
                out.push(("item", format!("{}: {} x{}", pocket.label(), name, e.amount)));
            }
        }
    }

    Ok(out)
}

fn party_pairs(party: Vec<CreatureEntry>) -> Vec<(&'static str, String)> {
    party
        .iter()
        .map(|c| {
            let species = c
                .species_name
                .clone()
                .unwrap_or_else(|| format!("#{}", c.species));
            (
                "party",
                format!("{} {} {} Lv{}", c.slot + 1, species, c.nickname, c.level),
            )
        })
        .collect()
}

fn to_core_gender(gender: GenderArg) -> Gender {
    match gender {
        GenderArg::Male => Gender::Male,
        GenderArg::Female => Gender::Female,
    }
}

fn parse_game(value: &str) -> Result<Game, String> {
    Game::parse(value).ok_or_else(|| {
        format!("invalid game '{value}'; expected one of: rs, emerald, frlg, dp, pt, hgss")
    })
}

fn parse_play_time(value: &str) -> Result<PlayTime, String> {
    let bad = || format!("invalid play time '{value}'; expected H:MM:SS");
    let parts: Vec<&str> = value.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(bad());
    };
    Ok(PlayTime {
        hours: hours.parse().map_err(|_| bad())?,
        minutes: minutes.parse().map_err(|_| bad())?,
        seconds: seconds.parse().map_err(|_| bad())?,
        frames: 0,
    })
}

fn parse_item_edit(value: &str) -> Result<ItemEdit, String> {
    let bad = || format!("invalid item edit '{value}'; expected POCKET:SLOT:ITEM:COUNT");
    let parts: Vec<&str> = value.split(':').collect();
    let [pocket, slot, index, amount] = parts.as_slice() else {
        return Err(bad());
    };
    Ok(ItemEdit {
        pocket: Pocket::parse(pocket).ok_or_else(bad)?,
        slot: slot.parse().map_err(|_| bad())?,
        item: ItemSlot {
            index: index.parse().map_err(|_| bad())?,
            amount: amount.parse().map_err(|_| bad())?,
        },
    })
}

fn parse_level_edit(value: &str) -> Result<LevelEdit, String> {
    let bad = || format!("invalid level edit '{value}'; expected PARTY_SLOT:LEVEL");
    let (slot, level) = value.split_once(':').ok_or_else(bad)?;
    Ok(LevelEdit {
        slot: slot
            .parse::<usize>()
            .ok()
            .and_then(|s| s.checked_sub(1))
            .ok_or_else(bad)?,
        level: level.parse().map_err(|_| bad())?,
    })
}
