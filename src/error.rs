use thiserror::Error;

/// Why the engine ignored a `submit_move` call. The battle is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no battle is in progress")]
    NoBattle,

    #[error("the battle is already over")]
    BattleOver,

    #[error("a round is still being resolved")]
    Resolving,

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("combatant #{0} is not the player's active combatant")]
    InactiveAttacker(usize),

    #[error("{attacker} does not know {name}")]
    UnknownMove { attacker: String, name: String },

    #[error("combatant #{0} is not a valid opponent target")]
    InvalidTarget(usize),
}

/// Team-builder validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("team is full: at most {0} creatures")]
    Full(usize),

    #[error("{0} is already in the team")]
    Duplicate(String),

    #[error("{0} is not in the team")]
    NotSelected(String),

    #[error("add at least one creature to the team")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("a roster needs at least one combatant")]
    Empty,

    #[error("a roster holds at most 6 combatants, got {0}")]
    TooLarge(usize),

    #[error("{0} appears more than once in the roster")]
    DuplicateName(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("damage roll range must satisfy 0 < min <= max, got {min}..={max}")]
    RandomRange { min: f64, max: f64 },

    #[error("stab_multiplier must be positive, got {0}")]
    Stab(f64),

    #[error("fixed opponent size must be 1..=6, got {0}")]
    OpponentSize(usize),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Failure to turn a team selection into a running battle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StartError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
