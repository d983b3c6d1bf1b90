use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elemental type tag. Only consulted for the same-type attack bonus.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Classic type name, e.g. `Fire`.
    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// Crypto-themed label shown to players, e.g. `PUMP` for fire.
    pub fn label(self) -> &'static str {
        match self {
            Type::Normal => "MEME",
            Type::Fire => "PUMP",
            Type::Water => "LIQUID",
            Type::Electric => "LIGHTNING",
            Type::Grass => "FARMING",
            Type::Ice => "FROZEN",
            Type::Fighting => "LEVERAGE",
            Type::Poison => "RUGPULL",
            Type::Ground => "FOUNDATION",
            Type::Flying => "AIRDROP",
            Type::Psychic => "ALPHA",
            Type::Bug => "GLITCH",
            Type::Rock => "HODL",
            Type::Ghost => "PHANTOM",
            Type::Dragon => "WHALE",
            Type::Dark => "SHADOW",
            Type::Steel => "BLOCKCHAIN",
            Type::Fairy => "FOMO",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type {0:?}")]
pub struct UnknownType(pub String);

impl FromStr for Type {
    type Err = UnknownType;

    /// Accepts either the classic name or the crypto label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Type::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted) || t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}

/// Same-type attack bonus applies when the move's type is one of the attacker's.
pub fn is_stab(move_type: Type, attacker_types: &[Type]) -> bool {
    attacker_types.contains(&move_type)
}
