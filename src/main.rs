use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use solomon_battle::battle::{Battle, Side, Snapshot};
use solomon_battle::dex;
use solomon_battle::event::BattleEvent;
use solomon_battle::model::{Roster, MAX_ROSTER};
use solomon_battle::roster::{search_catalogue, TeamSelection};
use solomon_battle::session::Session;
use solomon_battle::simulate::play_random_battle;
use solomon_battle::types::Type;
use solomon_battle::{parse_team, resolve_options, run_simulation, SimulateOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Meme-coin creature battle simulator
#[derive(Parser, Debug)]
#[command(name = "solomon-battle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Diagnostic log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a battle interactively
    Play {
        /// Comma-separated creature names
        #[arg(short, long, conflicts_with = "quick")]
        team: Option<String>,

        /// Skip team building and use the quick-start team
        #[arg(long)]
        quick: bool,

        /// Session seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pause between replayed events, in milliseconds
        #[arg(long, default_value = "600")]
        delay_ms: u64,

        /// Battle options JSON file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Play one battle with random player moves
    Auto {
        #[arg(short, long)]
        team: Option<String>,

        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Print the event stream as JSON instead of the log
        #[arg(long)]
        json: bool,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Estimate the team's win rate over many random battles
    Simulate {
        #[arg(short, long)]
        team: Option<String>,

        #[arg(short, long, default_value = "1000")]
        battles: usize,

        #[arg(short, long, default_value = "0")]
        seed: u64,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// List creatures
    Dex {
        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,

        /// Type filter, classic or crypto name (e.g. fire or PUMP)
        #[arg(long = "type")]
        type_filter: Option<String>,
    },
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    match args.command {
        Commands::Play {
            team,
            quick,
            seed,
            delay_ms,
            config,
        } => {
            let team = match (team, quick) {
                (Some(raw), _) => Some(parse_team(Some(&raw))?),
                (None, true) => Some(TeamSelection::quick_start()),
                (None, false) => None,
            };
            play(team, seed, Duration::from_millis(delay_ms), config)
        }
        Commands::Auto {
            team,
            seed,
            json,
            config,
        } => auto(team.as_deref(), seed, json, config),
        Commands::Simulate {
            team,
            battles,
            seed,
            config,
            json,
        } => run_simulation(SimulateOptions {
            team: parse_team(team.as_deref())?,
            battles,
            seed,
            config_path: config,
            json,
        }),
        Commands::Dex {
            search,
            type_filter,
        } => list_dex(search.as_deref(), type_filter.as_deref()),
    }
}

fn auto(team: Option<&str>, seed: u64, json: bool, config: Option<PathBuf>) -> anyhow::Result<()> {
    let options = resolve_options(config.as_deref())?;
    let team = parse_team(team)?;
    let record = play_random_battle(team.names(), &options, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        for line in &record.log {
            println!("{line}");
        }
        println!("-- {:?} after {} rounds", record.outcome, record.rounds);
    }
    Ok(())
}

fn list_dex(search: Option<&str>, type_filter: Option<&str>) -> anyhow::Result<()> {
    let type_filter = type_filter.map(str::parse::<Type>).transpose()?;
    for entry in dex::search(search, type_filter) {
        let types: Vec<&str> = entry.types.iter().map(|t| t.label()).collect();
        match entry.base_stats {
            Some(s) => println!(
                "{:<12} {:<22} hp {:>3} atk {:>3} def {:>3} spe {:>3} spc {:>3}",
                entry.name,
                types.join("/"),
                s.hp,
                s.attack,
                s.defense,
                s.speed,
                s.special
            ),
            None => println!("{:<12} {}", entry.name, types.join("/")),
        }
    }
    Ok(())
}

fn play(team: Option<TeamSelection>, seed: Option<u64>, delay: Duration, config: Option<PathBuf>) -> anyhow::Result<()> {
    let options = resolve_options(config.as_deref())?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut session = Session::new(options, seed)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match &team {
            Some(team) => session.set_selection(team.clone()),
            None => {
                if !build_team(&mut session, &mut lines)? {
                    return Ok(());
                }
            }
        }
        session.start_battle()?;
        while let Some(battle) = session.battle() {
            if battle.is_over() {
                break;
            }
            render(&battle.snapshot());
            let Some(choice) = prompt_move(battle, &mut lines)? else {
                return Ok(());
            };
            let (attacker, target) = (
                battle.active_index(Side::Player),
                battle.active_index(Side::Opponent),
            );
            if let Err(err) = session.submit_move(&choice, attacker, target) {
                println!("({err})");
                continue;
            }
            while let Some(event) = session.next_event() {
                thread::sleep(delay);
                show_event(&event);
            }
        }
        print!("New battle? [y/N] ");
        io::stdout().flush()?;
        let again = lines.next().transpose()?.unwrap_or_default();
        session.reset_battle();
        if !again.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// Interactive team builder; returns false when input ends or the user quits.
fn build_team<B: BufRead>(session: &mut Session, lines: &mut io::Lines<B>) -> anyhow::Result<bool> {
    println!("Build your team: `search TEXT`, `add NAME`, `remove NAME`, `quick`, `done`, `q`.");
    loop {
        let team = session.selection();
        println!("Team ({}/{MAX_ROSTER}): [{}]", team.len(), team.names().join(", "));
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(false);
        };
        let (command, arg) = match line.trim().split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line.trim(), ""),
        };
        let outcome = match command {
            "q" | "quit" => return Ok(false),
            "quick" => {
                session.set_selection(TeamSelection::quick_start());
                Ok(())
            }
            "search" => {
                println!("{}", search_catalogue(arg).join(", "));
                Ok(())
            }
            "add" | "remove" if arg.is_empty() => {
                println!("Usage: {command} NAME");
                Ok(())
            }
            "add" => session.selection_mut().add(arg),
            "remove" => session.selection_mut().remove(arg),
            "done" => match session.selection().finish() {
                Ok(_) => return Ok(true),
                Err(err) => Err(err),
            },
            _ => {
                println!("Unknown command {command:?}.");
                Ok(())
            }
        };
        if let Err(err) = outcome {
            println!("({err})");
        }
    }
}

fn prompt_move<B: BufRead>(battle: &Battle, lines: &mut io::Lines<B>) -> anyhow::Result<Option<String>> {
    let moves = &battle.active(Side::Player).moves;
    loop {
        for (idx, mv) in moves.iter().enumerate() {
            println!("  {}) {} [{} {}]", idx + 1, mv.name, mv.move_type, mv.power);
        }
        print!("Move (q to quit): ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(|i| moves.get(i)) {
            Some(mv) => return Ok(Some(mv.name.clone())),
            None => println!("Pick a number between 1 and {}.", moves.len()),
        }
    }
}

fn render(snapshot: &Snapshot) {
    let bar = |side: &str, roster: &Roster, active: usize| {
        let c = &roster[active];
        let team: Vec<String> = roster
            .iter()
            .map(|m| format!("{} {}/{}", m.name, m.current_health(), m.max_health()))
            .collect();
        println!(
            "{side:<9} {} HP {}/{}   [{}]",
            c.name,
            c.current_health(),
            c.max_health(),
            team.join(", ")
        );
    };
    println!();
    bar("You", &snapshot.player, snapshot.active_player);
    bar("Opponent", &snapshot.opponent, snapshot.active_opponent);
}

fn show_event(event: &BattleEvent) {
    match event {
        BattleEvent::Damage {
            remaining,
            max_health,
            ..
        } => println!("{}  ({remaining}/{max_health})", event.log_line()),
        BattleEvent::Victory { .. } => println!("*** {} ***", event.log_line()),
        _ => println!("{}", event.log_line()),
    }
}
