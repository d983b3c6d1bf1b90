use crate::error::ConfigError;
use crate::model::MAX_ROSTER;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentSize {
    MatchPlayer,
    Fixed(usize),
}

/// Tunables for roster building and battle resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleOptions {
    /// Level used in the damage formula. The level term is `2*level/5 + 2`,
    /// which is 22 at the default of 50; `level = 55` gives a term of 24.
    pub level: u32,
    pub stab_multiplier: f64,
    pub random_min: f64,
    pub random_max: f64,
    pub default_base_hp: u32,
    pub health_multiplier: u32,
    pub opponent_size: OpponentSize,
    /// Pick the opponent's move before ordering and compare its real priority.
    pub honor_opponent_priority: bool,
    pub max_rounds: usize,
}

impl Default for BattleOptions {
    fn default() -> Self {
        BattleOptions {
            level: 50,
            stab_multiplier: 1.5,
            random_min: 0.85,
            random_max: 1.0,
            default_base_hp: 70,
            health_multiplier: 2,
            opponent_size: OpponentSize::MatchPlayer,
            honor_opponent_priority: false,
            max_rounds: 500,
        }
    }
}

impl BattleOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.random_min > 0.0 && self.random_min <= self.random_max && self.random_max.is_finite()) {
            return Err(ConfigError::RandomRange {
                min: self.random_min,
                max: self.random_max,
            });
        }
        if !(self.stab_multiplier > 0.0 && self.stab_multiplier.is_finite()) {
            return Err(ConfigError::Stab(self.stab_multiplier));
        }
        if let OpponentSize::Fixed(n) = self.opponent_size {
            if n == 0 || n > MAX_ROSTER {
                return Err(ConfigError::OpponentSize(n));
            }
        }
        if self.health_multiplier == 0 {
            return Err(ConfigError::Zero("health_multiplier"));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::Zero("max_rounds"));
        }
        Ok(())
    }

    /// Level term of the damage formula, `2 * level / 5 + 2`.
    pub fn level_factor(&self) -> f64 {
        2.0 * self.level as f64 / 5.0 + 2.0
    }
}

pub fn load_options(path: &Path) -> anyhow::Result<BattleOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;
    let parsed: BattleOptions = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    parsed
        .validate()
        .with_context(|| format!("Invalid options in {}", path.display()))?;
    Ok(parsed)
}
