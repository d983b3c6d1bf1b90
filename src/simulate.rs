use crate::battle::{Battle, Side};
use crate::config::BattleOptions;
use crate::error::StartError;
use crate::event::BattleEvent;
use crate::roster::{build_roster, opponent_roster};
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleRecord {
    pub seed: u64,
    pub outcome: Outcome,
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
    pub log: Vec<String>,
}

/// Plays random player moves until the battle ends or `max_rounds` is reached.
pub fn autoplay<R: Rng>(battle: &mut Battle<R>, events: &mut Vec<BattleEvent>) -> Outcome {
    while !battle.is_over() && (battle.round() as usize) < battle.options().max_rounds {
        let Some(mv) = battle.random_player_move() else {
            break;
        };
        let attacker = battle.active_index(Side::Player);
        let target = battle.active_index(Side::Opponent);
        match battle.submit_move(&mv, attacker, target) {
            Ok(round) => events.extend(round),
            Err(err) => {
                debug!("autoplay stopped: {err}");
                break;
            }
        }
    }
    match battle.winner() {
        Some(Side::Player) => Outcome::Win,
        Some(Side::Opponent) => Outcome::Loss,
        None => Outcome::Draw,
    }
}

/// One complete battle for `names` against a random opponent, reproducible from `seed`.
pub fn play_random_battle<S: AsRef<str>>(
    names: &[S],
    opts: &BattleOptions,
    seed: u64,
) -> Result<BattleRecord, StartError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let player = build_roster(names, opts, &mut rng)?;
    let opponent = opponent_roster(&player, opts, &mut rng)?;
    let mut battle = Battle::new(player, opponent, opts.clone(), rng.gen())?;
    let mut events = Vec::new();
    let outcome = autoplay(&mut battle, &mut events);
    Ok(BattleRecord {
        seed,
        outcome,
        rounds: battle.round(),
        events,
        log: battle.log().to_vec(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRate {
    pub battles: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: f64,
}

/// Runs `battles` independent battles in parallel; draws count as half a win.
pub fn estimate_win_rate<S: AsRef<str> + Sync>(
    names: &[S],
    opts: &BattleOptions,
    battles: usize,
    seed: u64,
) -> Result<WinRate, StartError> {
    let mut seeder = SmallRng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..battles).map(|_| seeder.gen()).collect();
    let outcomes: Vec<Outcome> = seeds
        .par_iter()
        .map(|&battle_seed| play_random_battle(names, opts, battle_seed).map(|r| r.outcome))
        .collect::<Result<_, _>>()?;
    let count = |wanted: Outcome| outcomes.iter().filter(|o| **o == wanted).count();
    let (wins, losses, draws) = (count(Outcome::Win), count(Outcome::Loss), count(Outcome::Draw));
    let win_rate = if battles == 0 {
        0.0
    } else {
        (wins as f64 + 0.5 * draws as f64) / battles as f64
    };
    Ok(WinRate {
        battles,
        wins,
        losses,
        draws,
        win_rate,
    })
}
