use crate::config::BattleOptions;
use crate::damage::{compute_damage, first_mover};
use crate::error::{ConfigError, Rejection};
use crate::event::{BattleEvent, VisualEffect};
use crate::model::{Combatant, Move, Roster};
use log::{debug, info, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Where the battle stands between calls.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    AwaitingPlayerMove,
    /// Held only while a round is being applied.
    Resolving,
    Over { winner: Side },
}

/// Read-only view of the whole battle for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: Roster,
    pub opponent: Roster,
    pub active_player: usize,
    pub active_opponent: usize,
    pub turn_owner: Side,
    pub phase: Phase,
    pub round: u32,
    pub log: Vec<String>,
}

pub struct Battle<R = SmallRng> {
    player: Roster,
    opponent: Roster,
    active_player: usize,
    active_opponent: usize,
    turn_owner: Side,
    phase: Phase,
    round: u32,
    log: Vec<String>,
    options: BattleOptions,
    rng: R,
}

impl Battle<SmallRng> {
    pub fn new(player: Roster, opponent: Roster, options: BattleOptions, seed: u64) -> Result<Self, ConfigError> {
        Battle::with_rng(player, opponent, options, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Battle<R> {
    /// Starts a battle with the first able combatant of each roster active.
    ///
    /// Fails when `options` do not validate.
    pub fn with_rng(player: Roster, opponent: Roster, options: BattleOptions, rng: R) -> Result<Self, ConfigError> {
        options.validate()?;
        let mut battle = Battle {
            active_player: player.next_available().unwrap_or(0),
            active_opponent: opponent.next_available().unwrap_or(0),
            player,
            opponent,
            turn_owner: Side::Player,
            phase: Phase::AwaitingPlayerMove,
            round: 0,
            log: Vec::new(),
            options,
            rng,
        };
        let start = BattleEvent::Start {
            player: battle.active(Side::Player).name.clone(),
            opponent: battle.active(Side::Opponent).name.clone(),
        };
        battle.log.push(start.log_line());
        info!("{}", start.log_line());
        if battle.player.next_available().is_none() {
            battle.finish(Side::Opponent, &mut Vec::new());
        } else if battle.opponent.next_available().is_none() {
            battle.finish(Side::Player, &mut Vec::new());
        }
        Ok(battle)
    }

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn active_index(&self, side: Side) -> usize {
        match side {
            Side::Player => self.active_player,
            Side::Opponent => self.active_opponent,
        }
    }

    fn set_active_index(&mut self, side: Side, idx: usize) {
        match side {
            Side::Player => self.active_player = idx,
            Side::Opponent => self.active_opponent = idx,
        }
    }

    pub fn active(&self, side: Side) -> &Combatant {
        // Active indices always come from next_available() on a non-empty roster.
        &self.roster(side)[self.active_index(side)]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            Phase::AwaitingPlayerMove | Phase::Resolving => None,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            opponent: self.opponent.clone(),
            active_player: self.active_player,
            active_opponent: self.active_opponent,
            turn_owner: self.turn_owner,
            phase: self.phase,
            round: self.round,
            log: self.log.clone(),
        }
    }

    /// Resolves one round: the player's move and, unless a faint ends the
    /// round first, the opponent's random counter-move.
    ///
    /// A rejected call leaves the battle exactly as it was.
    pub fn submit_move(
        &mut self,
        move_name: &str,
        attacker: usize,
        target: usize,
    ) -> Result<Vec<BattleEvent>, Rejection> {
        let chosen = self
            .validate_submission(move_name, attacker, target)
            .inspect_err(|err| debug!("ignored {move_name:?} from #{attacker} on #{target}: {err}"))?;
        self.phase = Phase::Resolving;
        let events = self.resolve_round(chosen);
        if self.phase == Phase::Resolving {
            self.phase = Phase::AwaitingPlayerMove;
        }
        Ok(events)
    }

    fn validate_submission(&self, move_name: &str, attacker: usize, target: usize) -> Result<Move, Rejection> {
        match self.phase {
            Phase::Over { .. } => return Err(Rejection::BattleOver),
            Phase::Resolving => return Err(Rejection::Resolving),
            Phase::AwaitingPlayerMove => {}
        }
        if self.turn_owner != Side::Player {
            return Err(Rejection::NotPlayersTurn);
        }
        if attacker != self.active_player {
            return Err(Rejection::InactiveAttacker(attacker));
        }
        let mover = self.active(Side::Player);
        let chosen = mover.find_move(move_name).cloned().ok_or_else(|| Rejection::UnknownMove {
            attacker: mover.name.clone(),
            name: move_name.to_string(),
        })?;
        let target_alive = self.opponent.get(target).is_some_and(|c| !c.is_fainted());
        if target != self.active_opponent || !target_alive {
            return Err(Rejection::InvalidTarget(target));
        }
        Ok(chosen)
    }

    /// Random move for the player's active combatant, for autoplay.
    pub fn random_player_move(&mut self) -> Option<String> {
        let idx = self.active_player;
        let moves = &self.player.get(idx)?.moves;
        moves.choose(&mut self.rng).map(|m| m.name.clone())
    }

    fn choose_opponent_move(&mut self) -> Option<Move> {
        let idx = self.active_opponent;
        let moves = &self.opponent.get(idx)?.moves;
        moves.choose(&mut self.rng).cloned()
    }

    fn resolve_round(&mut self, player_move: Move) -> Vec<BattleEvent> {
        self.round += 1;
        let mut events = Vec::new();
        let mut opponent_move = if self.options.honor_opponent_priority {
            self.choose_opponent_move()
        } else {
            None
        };
        let opponent_priority = opponent_move.as_ref().map(|m| m.priority).unwrap_or(0);
        let first = first_mover(
            player_move.priority,
            opponent_priority,
            self.active(Side::Player).stats.speed,
            self.active(Side::Opponent).stats.speed,
        );
        debug!(
            "round {}: {} uses {} (priority {}), {:?} moves first",
            self.round,
            self.active(Side::Player).name,
            player_move.name,
            player_move.priority,
            first
        );

        let mut player_move = Some(player_move);
        for side in [first, first.opponent()] {
            let action = match side {
                Side::Player => player_move.take(),
                Side::Opponent => opponent_move.take().or_else(|| self.choose_opponent_move()),
            };
            let Some(action) = action else {
                trace!("{side:?} has no move to use");
                continue;
            };
            self.turn_owner = side;
            if self.execute_move(side, &action, &mut events) {
                break;
            }
        }
        self.turn_owner = Side::Player;
        events
    }

    /// Applies one attack; returns true when the defender fainted, which ends the round.
    fn execute_move(&mut self, side: Side, mv: &Move, events: &mut Vec<BattleEvent>) -> bool {
        let defender_side = side.opponent();
        let (own, other) = match side {
            Side::Player => (&self.player, &self.opponent),
            Side::Opponent => (&self.opponent, &self.player),
        };
        let (Some(attacker), Some(defender)) = (
            own.get(self.active_index(side)),
            other.get(self.active_index(defender_side)),
        ) else {
            return false;
        };
        let attacker_name = attacker.name.clone();
        let roll = compute_damage(attacker, defender, mv, &self.options, &mut self.rng);

        let defender_idx = self.active_index(defender_side);
        let Some(defender) = self.roster_mut(defender_side).get_mut(defender_idx) else {
            return false;
        };
        defender.take_damage(roll.damage);
        let target_name = defender.name.clone();
        let remaining = defender.current_health();
        let max_health = defender.max_health();
        self.record(
            BattleEvent::Damage {
                side,
                attacker: attacker_name,
                move_name: mv.name.clone(),
                target: target_name.clone(),
                damage: roll.damage,
                remaining,
                max_health,
                effect: VisualEffect::for_move(&mv.name),
            },
            events,
        );
        if remaining > 0 {
            return false;
        }
        self.record(
            BattleEvent::Faint {
                side: defender_side,
                name: target_name,
            },
            events,
        );
        match self.roster(defender_side).next_available() {
            Some(next) => {
                self.set_active_index(defender_side, next);
                let name = self.active(defender_side).name.clone();
                self.record(
                    BattleEvent::SwitchIn {
                        side: defender_side,
                        name,
                        index: next,
                    },
                    events,
                );
            }
            None => self.finish(side, events),
        }
        true
    }

    fn finish(&mut self, winner: Side, events: &mut Vec<BattleEvent>) {
        self.phase = Phase::Over { winner };
        self.record(BattleEvent::Victory { winner }, events);
        info!("battle over after {} rounds, {winner:?} wins", self.round);
    }

    fn record(&mut self, event: BattleEvent, events: &mut Vec<BattleEvent>) {
        self.log.push(event.log_line());
        events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MoveCategory, Stats};
    use crate::types::Type;

    fn strike(power: u32) -> Move {
        Move {
            name: "STRIKE".to_string(),
            move_type: Type::Normal,
            category: MoveCategory::Physical,
            power,
            accuracy: 100,
            priority: 0,
        }
    }

    fn mon(name: &str, speed: u32, health: u32) -> Combatant {
        Combatant::new(
            name,
            vec![Type::Fire],
            Stats {
                attack: 80,
                defense: 80,
                speed,
                special: 80,
            },
            vec![strike(60)],
            health,
        )
    }

    fn battle(player: Vec<Combatant>, opponent: Vec<Combatant>) -> Battle {
        Battle::new(
            Roster::new(player).expect("player roster"),
            Roster::new(opponent).expect("opponent roster"),
            BattleOptions::default(),
            11,
        )
        .expect("default options")
    }

    #[test]
    fn starts_awaiting_the_player() {
        let b = battle(vec![mon("BONK", 90, 70)], vec![mon("CAT", 30, 320)]);
        assert_eq!(b.phase(), Phase::AwaitingPlayerMove);
        assert_eq!(b.turn_owner(), Side::Player);
        assert_eq!(b.log(), ["Battle started! BONK vs CAT"]);
    }

    #[test]
    fn opponent_turn_rejects_without_change() {
        let mut b = battle(vec![mon("BONK", 90, 70)], vec![mon("CAT", 30, 320)]);
        b.turn_owner = Side::Opponent;
        let before = b.snapshot();
        assert_eq!(b.submit_move("STRIKE", 0, 0), Err(Rejection::NotPlayersTurn));
        assert_eq!(b.snapshot(), before);
    }

    #[test]
    fn resolving_rejects_without_change() {
        let mut b = battle(vec![mon("BONK", 90, 70)], vec![mon("CAT", 30, 320)]);
        b.phase = Phase::Resolving;
        let before = b.snapshot();
        assert_eq!(b.submit_move("STRIKE", 0, 0), Err(Rejection::Resolving));
        assert_eq!(b.snapshot(), before);
    }

    #[test]
    fn malformed_calls_are_ignored() {
        let mut b = battle(
            vec![mon("BONK", 90, 70), mon("WIF", 100, 156)],
            vec![mon("CAT", 30, 320), mon("SLERF", 20, 230)],
        );
        let before = b.snapshot();
        assert_eq!(b.submit_move("STRIKE", 1, 0), Err(Rejection::InactiveAttacker(1)));
        assert!(matches!(
            b.submit_move("HYPERPUMP", 0, 0),
            Err(Rejection::UnknownMove { .. })
        ));
        assert_eq!(b.submit_move("STRIKE", 0, 1), Err(Rejection::InvalidTarget(1)));
        assert_eq!(b.submit_move("STRIKE", 0, 9), Err(Rejection::InvalidTarget(9)));
        assert_eq!(b.snapshot(), before);
    }

    #[test]
    fn single_combatant_faint_ends_battle() {
        let mut b = battle(vec![mon("BONK", 90, 300)], vec![mon("CAT", 30, 1)]);
        let events = b.submit_move("STRIKE", 0, 0).expect("accepted");
        assert!(b.is_over());
        assert_eq!(b.winner(), Some(Side::Player));
        assert_eq!(b.active_index(Side::Opponent), 0);
        assert!(!events.iter().any(|e| matches!(e, BattleEvent::SwitchIn { .. })));
        assert_eq!(b.log().last().map(String::as_str), Some("You win the battle!"));
    }

    #[test]
    fn faint_switches_to_next_living_combatant() {
        let mut b = battle(
            vec![mon("BONK", 90, 300)],
            vec![mon("CAT", 30, 1), mon("SLERF", 20, 230)],
        );
        b.submit_move("STRIKE", 0, 0).expect("accepted");
        assert!(!b.is_over());
        assert_eq!(b.active_index(Side::Opponent), 1);
        assert_eq!(b.turn_owner(), Side::Player);
        assert_eq!(b.phase(), Phase::AwaitingPlayerMove);
        let fainted = b.log().iter().position(|l| l == "CAT fainted!");
        let sent = b.log().iter().position(|l| l == "Opponent sent in SLERF!");
        assert!(matches!((fainted, sent), (Some(f), Some(s)) if f < s));
    }

    #[test]
    fn player_ko_skips_opponent_counter() {
        let mut b = battle(
            vec![mon("BONK", 90, 300)],
            vec![mon("CAT", 30, 1), mon("SLERF", 20, 230)],
        );
        let events = b.submit_move("STRIKE", 0, 0).expect("accepted");
        let attacks = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::Damage { .. }))
            .count();
        assert_eq!(attacks, 1);
        assert_eq!(b.active(Side::Player).current_health(), 300);
    }

    #[test]
    fn faster_opponent_ko_cancels_player_action() {
        let mut b = battle(
            vec![mon("BONK", 10, 1), mon("WIF", 100, 156)],
            vec![mon("CAT", 200, 320)],
        );
        let events = b.submit_move("STRIKE", 0, 0).expect("accepted");
        assert!(matches!(
            events.first(),
            Some(BattleEvent::Damage { side: Side::Opponent, .. })
        ));
        assert_eq!(b.active_index(Side::Player), 1);
        assert_eq!(b.active(Side::Opponent).current_health(), 320);
        assert_eq!(b.log().last().map(String::as_str), Some("You sent in WIF!"));
    }

    #[test]
    fn full_round_has_two_attacks_and_returns_turn() {
        let mut b = battle(vec![mon("BONK", 90, 300)], vec![mon("CAT", 30, 320)]);
        let events = b.submit_move("STRIKE", 0, 0).expect("accepted");
        let sides: Vec<Side> = events
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Damage { side, .. } => Some(*side),
                _ => None,
            })
            .collect();
        assert_eq!(sides, vec![Side::Player, Side::Opponent]);
        assert_eq!(b.turn_owner(), Side::Player);
        assert_eq!(b.round(), 1);
        assert_eq!(b.log().len(), 3);
    }

    #[test]
    fn over_is_terminal() {
        let mut b = battle(vec![mon("BONK", 90, 300)], vec![mon("CAT", 30, 1)]);
        b.submit_move("STRIKE", 0, 0).expect("accepted");
        let before = b.snapshot();
        assert_eq!(b.submit_move("STRIKE", 0, 0), Err(Rejection::BattleOver));
        assert_eq!(b.snapshot(), before);
    }

    #[test]
    fn invalid_options_are_refused_up_front() {
        let inverted = BattleOptions {
            random_min: 1.0,
            random_max: 0.9,
            ..BattleOptions::default()
        };
        let result = Battle::new(
            Roster::new(vec![mon("BONK", 90, 70)]).expect("player roster"),
            Roster::new(vec![mon("CAT", 30, 320)]).expect("opponent roster"),
            inverted,
            11,
        );
        assert!(matches!(result, Err(ConfigError::RandomRange { .. })));
    }

    #[test]
    fn roster_without_living_members_starts_over() {
        let b = battle(vec![mon("BONK", 90, 300)], vec![mon("CAT", 30, 5).with_health(0)]);
        assert_eq!(b.winner(), Some(Side::Player));
    }
}
