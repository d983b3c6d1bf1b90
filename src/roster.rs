//! Roster building: team selection, combatant creation and opponent generation.

use crate::config::{BattleOptions, OpponentSize};
use crate::data::{
    base_stats, creature_types, featured_creatures, fixed_moves, lookup_move, move_pool,
    resolve_name, DEFAULT_BASE_STATS, QUICK_START_TEAM, TEAM_BUILDER_CATALOGUE,
};
use crate::error::{RosterError, SelectionError};
use crate::model::{BaseStats, Combatant, Roster, MAX_MOVES, MAX_ROSTER};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The player's chosen creature names, validated as they are added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSelection {
    names: Vec<String>,
}

impl TeamSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quick_start() -> Self {
        TeamSelection {
            names: QUICK_START_TEAM.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn from_names<I, S>(names: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = TeamSelection::new();
        for name in names {
            selection.add(name.as_ref())?;
        }
        Ok(selection)
    }

    /// Adds a creature; names resolving to the same creature count as duplicates.
    pub fn add(&mut self, name: &str) -> Result<(), SelectionError> {
        let name = name.trim();
        if self.names.len() >= MAX_ROSTER {
            return Err(SelectionError::Full(MAX_ROSTER));
        }
        let resolved = resolve_name(name);
        if self.names.iter().any(|n| resolve_name(n) == resolved) {
            return Err(SelectionError::Duplicate(resolved.to_string()));
        }
        self.names.push(name.to_string());
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), SelectionError> {
        let idx = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| SelectionError::NotSelected(name.to_string()))?;
        self.names.remove(idx);
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= MAX_ROSTER
    }

    /// The finished team; an empty selection cannot start a battle.
    pub fn finish(&self) -> Result<&[String], SelectionError> {
        if self.names.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(&self.names)
    }
}

/// Team-builder catalogue filtered by a case-insensitive substring.
pub fn search_catalogue(query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    TEAM_BUILDER_CATALOGUE
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&query))
        .collect()
}

/// Builds a full-health combatant, degrading to defaults for unknown names.
pub fn create_combatant<R: Rng + ?Sized>(name: &str, opts: &BattleOptions, rng: &mut R) -> Combatant {
    let resolved = resolve_name(name);
    let stats = base_stats(resolved).unwrap_or_else(|| {
        warn!("no base stats for {resolved:?}, using defaults");
        BaseStats {
            hp: opts.default_base_hp,
            ..DEFAULT_BASE_STATS
        }
    });
    let move_names: Vec<&str> = match fixed_moves(resolved) {
        Some(fixed) => fixed.to_vec(),
        None => {
            let pool = move_pool();
            let picked: Vec<&str> = pool.choose_multiple(rng, MAX_MOVES).copied().collect();
            debug!("{resolved} has no fixed moves, sampled {picked:?}");
            picked
        }
    };
    Combatant::new(
        resolved,
        creature_types(resolved),
        stats.battle_stats(),
        move_names.into_iter().map(lookup_move).collect(),
        stats.hp * opts.health_multiplier,
    )
}

pub fn build_roster<R, S>(names: &[S], opts: &BattleOptions, rng: &mut R) -> Result<Roster, RosterError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    Roster::new(
        names
            .iter()
            .map(|name| create_combatant(name.as_ref(), opts, rng))
            .collect(),
    )
}

/// Random opponent drawn from the featured creatures not already on the player's side.
pub fn opponent_roster<R: Rng + ?Sized>(
    player: &Roster,
    opts: &BattleOptions,
    rng: &mut R,
) -> Result<Roster, RosterError> {
    let mut pool: Vec<&str> = featured_creatures()
        .into_iter()
        .filter(|candidate| !player.names().any(|taken| taken == *candidate))
        .collect();
    let wanted = match opts.opponent_size {
        OpponentSize::MatchPlayer => player.len(),
        OpponentSize::Fixed(n) => n,
    };
    pool.shuffle(rng);
    pool.truncate(wanted.min(MAX_ROSTER));
    debug!("opponent roster {pool:?}");
    build_roster(&pool, opts, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn selection_rejects_duplicates_and_overflow() {
        let mut team = TeamSelection::new();
        team.add("Pikachu").expect("first add");
        assert_eq!(team.add("Pikachu"), Err(SelectionError::Duplicate("BONK".into())));
        for name in ["Mew", "Onix", "Jynx", "Eevee", "Lapras"] {
            team.add(name).expect("room left");
        }
        assert!(team.is_full());
        assert_eq!(team.add("Zapdos"), Err(SelectionError::Full(6)));
    }

    #[test]
    fn names_resolving_to_one_creature_are_duplicates() {
        assert_eq!(
            TeamSelection::from_names(["Bulbasaur", "Venusaur"]),
            Err(SelectionError::Duplicate("BOOK".into()))
        );
        let mut team = TeamSelection::new();
        team.add("Pikachu").expect("first add");
        assert_eq!(team.add("BONK"), Err(SelectionError::Duplicate("BONK".into())));
        assert_eq!(team.names(), ["Pikachu"]);
    }

    #[test]
    fn building_a_roster_rejects_repeated_creatures() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(
            build_roster(&["Bulbasaur", "Venusaur"], &BattleOptions::default(), &mut rng),
            Err(RosterError::DuplicateName("BOOK".into()))
        );
    }

    #[test]
    fn empty_selection_cannot_finish() {
        let mut team = TeamSelection::new();
        assert_eq!(team.finish(), Err(SelectionError::Empty));
        team.add("Mew").expect("add");
        team.remove("Mew").expect("remove");
        assert_eq!(team.remove("Mew"), Err(SelectionError::NotSelected("Mew".into())));
        assert!(team.finish().is_err());
    }

    #[test]
    fn catalogue_search_ignores_case() {
        assert_eq!(search_catalogue("CHAR"), vec!["Charizard"]);
        assert_eq!(search_catalogue("").len(), TEAM_BUILDER_CATALOGUE.len());
    }

    #[test]
    fn known_creature_uses_table_values() {
        let mut rng = SmallRng::seed_from_u64(1);
        let bonk = create_combatant("Pikachu", &BattleOptions::default(), &mut rng);
        assert_eq!(bonk.name, "BONK");
        assert_eq!(bonk.max_health(), 70);
        assert_eq!(bonk.current_health(), 70);
        assert_eq!(bonk.stats.speed, 90);
        assert_eq!(bonk.types, vec![Type::Electric]);
        let names: Vec<&str> = bonk.moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["VIRAL TWEET", "BREAKOUT", "MICRO SHOCK", "SNIPE"]);
    }

    #[test]
    fn unknown_creature_gets_defaults_and_four_distinct_moves() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mystery = create_combatant("Missingno", &BattleOptions::default(), &mut rng);
        assert_eq!(mystery.max_health(), 140);
        assert_eq!(mystery.stats.attack, 70);
        assert_eq!(mystery.types, vec![Type::Normal]);
        assert_eq!(mystery.moves.len(), 4);
        let mut names: Vec<&str> = mystery.moves.iter().map(|m| m.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn opponents_never_repeat_player_creatures() {
        let opts = BattleOptions::default();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let player = build_roster(&QUICK_START_TEAM, &opts, &mut rng).expect("player");
            let opponent = opponent_roster(&player, &opts, &mut rng).expect("opponent");
            assert_eq!(opponent.len(), player.len());
            for name in opponent.names() {
                assert!(!player.names().any(|p| p == name), "{name} on both sides");
            }
        }
    }

    #[test]
    fn fixed_opponent_size() {
        let opts = BattleOptions {
            opponent_size: OpponentSize::Fixed(3),
            ..BattleOptions::default()
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let player = build_roster(&["Mew"], &opts, &mut rng).expect("player");
        let opponent = opponent_roster(&player, &opts, &mut rng).expect("opponent");
        assert_eq!(opponent.len(), 3);
    }
}
