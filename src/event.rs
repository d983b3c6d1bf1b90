//! Discrete battle events.
//!
//! The engine resolves a round instantly and reports what happened as an
//! ordered list of [`BattleEvent`]s. A view replays them at its own pace; the
//! player-facing log is the rendered text of the same events.

use crate::battle::Side;
use serde::Serialize;

/// Coarse animation hint for a move, picked from keywords in its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualEffect {
    Fire,
    Water,
    Lightning,
    Grass,
    Psychic,
    Ground,
    Ice,
    Normal,
}

const EFFECT_KEYWORDS: [(VisualEffect, &[&str]); 7] = [
    (VisualEffect::Fire, &["PUMP", "MOON", "FIRE", "BURN", "APY", "BULLISH"]),
    (VisualEffect::Water, &["LIQUID", "POOL", "WAVE", "DUMP", "WATER", "FREEZE"]),
    (VisualEffect::Lightning, &["VIRAL", "TWEET", "SHOCK", "SPARK", "BREAK", "ELON"]),
    (VisualEffect::Grass, &["FARM", "STAKE", "SEED", "TOKEN", "LAUNCH"]),
    (VisualEffect::Psychic, &["MIND", "MANIPULATION", "ALPHA", "PREDICT", "CONFUSION"]),
    (VisualEffect::Ground, &["CRASH", "FOUNDATION", "SUPPORT", "DIP", "RESEARCH"]),
    (VisualEffect::Ice, &["FROZEN", "COLD", "ASSETS", "DEAD"]),
];

impl VisualEffect {
    /// First matching keyword group wins, so `MOON SHOT` is fire and `WHALE DUMP` is water.
    pub fn for_move(name: &str) -> VisualEffect {
        EFFECT_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| name.contains(w)))
            .map(|(effect, _)| *effect)
            .unwrap_or(VisualEffect::Normal)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleEvent {
    Start {
        player: String,
        opponent: String,
    },
    Damage {
        side: Side,
        attacker: String,
        move_name: String,
        target: String,
        damage: u32,
        remaining: u32,
        max_health: u32,
        effect: VisualEffect,
    },
    Faint {
        side: Side,
        name: String,
    },
    SwitchIn {
        side: Side,
        name: String,
        index: usize,
    },
    Victory {
        winner: Side,
    },
}

impl BattleEvent {
    /// The battle-log line this event appends.
    pub fn log_line(&self) -> String {
        match self {
            BattleEvent::Start { player, opponent } => {
                format!("Battle started! {player} vs {opponent}")
            }
            BattleEvent::Damage {
                attacker,
                move_name,
                target,
                damage,
                ..
            } => format!("{attacker} used {move_name}! Dealt {damage} damage to {target}."),
            BattleEvent::Faint { name, .. } => format!("{name} fainted!"),
            BattleEvent::SwitchIn { side, name, .. } => match side {
                Side::Player => format!("You sent in {name}!"),
                Side::Opponent => format!("Opponent sent in {name}!"),
            },
            BattleEvent::Victory { winner } => match winner {
                Side::Player => "You win the battle!".to_string(),
                Side::Opponent => "You lost the battle!".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_follow_keyword_order() {
        assert_eq!(VisualEffect::for_move("MOON SHOT"), VisualEffect::Fire);
        assert_eq!(VisualEffect::for_move("WHALE DUMP"), VisualEffect::Water);
        assert_eq!(VisualEffect::for_move("VIRAL TWEET"), VisualEffect::Lightning);
        assert_eq!(VisualEffect::for_move("MARKET CRASH"), VisualEffect::Ground);
        assert_eq!(VisualEffect::for_move("COLD WALLET"), VisualEffect::Ice);
        assert_eq!(VisualEffect::for_move("APE IN"), VisualEffect::Normal);
    }

    #[test]
    fn damage_line_names_both_sides() {
        let event = BattleEvent::Damage {
            side: Side::Player,
            attacker: "BONK".into(),
            move_name: "SNIPE".into(),
            target: "CAT".into(),
            damage: 12,
            remaining: 308,
            max_health: 320,
            effect: VisualEffect::Normal,
        };
        assert_eq!(event.log_line(), "BONK used SNIPE! Dealt 12 damage to CAT.");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(BattleEvent::Victory {
            winner: Side::Player,
        })
        .expect("serialize");
        assert_eq!(json["type"], "victory");
        assert_eq!(json["winner"], "player");
    }
}
