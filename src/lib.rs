//! Turn-based battles between meme-coin creatures.
//!
//! [`session::Session`] wraps the whole flow: build a team, start a
//! [`battle::Battle`], submit moves and replay the resulting events.

pub mod battle;
pub mod config;
pub mod damage;
pub mod data;
pub mod dex;
pub mod error;
pub mod event;
pub mod model;
pub mod roster;
pub mod session;
pub mod simulate;
pub mod types;

use crate::config::{load_options, BattleOptions};
use crate::roster::TeamSelection;
use crate::simulate::estimate_win_rate;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SimulateOptions {
    pub team: TeamSelection,
    pub battles: usize,
    pub seed: u64,
    pub config_path: Option<PathBuf>,
    pub json: bool,
}

/// Defaults, or the options file at `path`.
pub fn resolve_options(path: Option<&Path>) -> anyhow::Result<BattleOptions> {
    match path {
        Some(path) => load_options(path),
        None => Ok(BattleOptions::default()),
    }
}

/// Comma-separated names, or the quick-start team when none are given.
pub fn parse_team(raw: Option<&str>) -> anyhow::Result<TeamSelection> {
    let Some(raw) = raw else {
        return Ok(TeamSelection::quick_start());
    };
    let names: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();
    let selection = TeamSelection::from_names(names)?;
    selection.finish()?;
    Ok(selection)
}

pub fn run_simulation(opts: SimulateOptions) -> anyhow::Result<()> {
    if opts.battles == 0 {
        anyhow::bail!("--battles must be > 0");
    }
    let options = resolve_options(opts.config_path.as_deref())?;
    let rate = estimate_win_rate(opts.team.names(), &options, opts.battles, opts.seed)?;
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&rate)?);
    } else {
        println!(
            "{} battles with [{}]: {} won, {} lost, {} drawn (win rate {:.4})",
            rate.battles,
            opts.team.names().join(", "),
            rate.wins,
            rate.losses,
            rate.draws,
            rate.win_rate
        );
    }
    Ok(())
}
