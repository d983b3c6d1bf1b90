use crate::error::RosterError;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub const MAX_MOVES: usize = 4;
pub const MAX_ROSTER: usize = 6;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Static move definition. `accuracy` is carried but never rolled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: u32,
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
    #[serde(default)]
    pub priority: i32,
}

fn default_accuracy() -> u8 {
    100
}

/// Battle stats, immutable for the duration of a battle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special: u32,
}

/// Table row: battle stats plus the base HP used to derive max health.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub special: u32,
}

impl BaseStats {
    pub const fn uniform(value: u32) -> Self {
        BaseStats {
            hp: value,
            attack: value,
            defense: value,
            speed: value,
            special: value,
        }
    }

    pub fn battle_stats(&self) -> Stats {
        Stats {
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            special: self.special,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combatant {
    pub name: String,
    pub types: Vec<Type>,
    pub stats: Stats,
    pub moves: Vec<Move>,
    current_health: u32,
    max_health: u32,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(
        name: impl Into<String>,
        types: Vec<Type>,
        stats: Stats,
        moves: Vec<Move>,
        max_health: u32,
    ) -> Self {
        Combatant {
            name: name.into(),
            types,
            stats,
            moves,
            current_health: max_health,
            max_health,
        }
    }

    /// Sets current health, clamped to `max_health`.
    pub fn with_health(mut self, current: u32) -> Self {
        self.current_health = current.min(self.max_health);
        self
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_fainted(&self) -> bool {
        self.current_health == 0
    }

    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    /// Subtracts `amount` without going below zero; returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_health);
        self.current_health -= lost;
        lost
    }
}

/// One side's ordered team of 1..=6 uniquely named combatants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Combatant>,
}

impl Roster {
    pub fn new(members: Vec<Combatant>) -> Result<Self, RosterError> {
        if members.is_empty() {
            return Err(RosterError::Empty);
        }
        if members.len() > MAX_ROSTER {
            return Err(RosterError::TooLarge(members.len()));
        }
        for (idx, member) in members.iter().enumerate() {
            if members[..idx].iter().any(|earlier| earlier.name == member.name) {
                return Err(RosterError::DuplicateName(member.name.clone()));
            }
        }
        Ok(Roster { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Combatant> {
        self.members.get(idx)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Combatant> {
        self.members.get_mut(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|c| c.name.as_str())
    }

    /// First combatant in roster order that can still fight.
    pub fn next_available(&self) -> Option<usize> {
        self.members.iter().position(|c| !c.is_fainted())
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|c| !c.is_fainted()).count()
    }
}

impl Index<usize> for Roster {
    type Output = Combatant;

    fn index(&self, idx: usize) -> &Combatant {
        &self.members[idx]
    }
}
