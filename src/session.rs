//! One player's session: team building, a running battle and its event playback.

use crate::battle::{Battle, Snapshot};
use crate::config::BattleOptions;
use crate::error::{ConfigError, Rejection, StartError};
use crate::event::BattleEvent;
use crate::roster::{build_roster, opponent_roster, TeamSelection};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub struct Session {
    options: BattleOptions,
    rng: SmallRng,
    selection: TeamSelection,
    battle: Option<Battle>,
    playback: VecDeque<BattleEvent>,
}

impl Session {
    /// Fails when `options` could not drive a battle.
    pub fn new(options: BattleOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Session {
            options,
            rng: SmallRng::seed_from_u64(seed),
            selection: TeamSelection::new(),
            battle: None,
            playback: VecDeque::new(),
        })
    }

    pub fn selection(&self) -> &TeamSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut TeamSelection {
        &mut self.selection
    }

    pub fn set_selection(&mut self, selection: TeamSelection) {
        self.selection = selection;
    }

    /// Builds both rosters from the current selection and starts a fresh battle.
    pub fn start_battle(&mut self) -> Result<&Battle, StartError> {
        let names = self.selection.finish()?;
        let player = build_roster(names, &self.options, &mut self.rng)?;
        let opponent = opponent_roster(&player, &self.options, &mut self.rng)?;
        let seed = self.rng.gen();
        self.playback.clear();
        info!(
            "new battle: [{}] vs [{}]",
            player.names().collect::<Vec<_>>().join(", "),
            opponent.names().collect::<Vec<_>>().join(", ")
        );
        let battle = Battle::new(player, opponent, self.options.clone(), seed)?;
        Ok(self.battle.insert(battle))
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.battle.as_ref().map(Battle::snapshot)
    }

    /// True while events of the last round are still waiting to be shown.
    ///
    /// This is the gate that refuses moves in practice: [`Battle`] only holds
    /// `Phase::Resolving` inside `submit_move` itself.
    pub fn is_animating(&self) -> bool {
        !self.playback.is_empty()
    }

    /// Submits a move; refused until the previous round has been played back.
    pub fn submit_move(&mut self, move_name: &str, attacker: usize, target: usize) -> Result<usize, Rejection> {
        if self.is_animating() {
            return Err(Rejection::Resolving);
        }
        let battle = self.battle.as_mut().ok_or(Rejection::NoBattle)?;
        let events = battle.submit_move(move_name, attacker, target)?;
        let queued = events.len();
        self.playback.extend(events);
        Ok(queued)
    }

    /// Next event for the view to present, in resolution order.
    pub fn next_event(&mut self) -> Option<BattleEvent> {
        self.playback.pop_front()
    }

    pub fn skip_playback(&mut self) -> Vec<BattleEvent> {
        self.playback.drain(..).collect()
    }

    /// Discards the battle and returns to an empty team selection.
    pub fn reset_battle(&mut self) {
        self.battle = None;
        self.playback.clear();
        self.selection = TeamSelection::new();
    }
}
