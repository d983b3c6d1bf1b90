use crate::battle::Side;
use crate::config::BattleOptions;
use crate::model::{Combatant, Move, MoveCategory};
use crate::types::is_stab;
use log::trace;
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

/// One resolved damage roll with the terms that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageRoll {
    pub base: f64,
    pub stab: f64,
    pub random: f64,
    pub damage: u32,
}

/// `floor(((2*level/5 + 2) * power * atk / def) / 50 + 2)`; zero for moves without power.
pub fn base_damage(attacker: &Combatant, defender: &Combatant, mv: &Move, opts: &BattleOptions) -> f64 {
    if mv.power == 0 || mv.category == MoveCategory::Status {
        return 0.0;
    }
    let (atk, def) = match mv.category {
        MoveCategory::Special => (attacker.stats.special, defender.stats.special),
        _ => (attacker.stats.attack, defender.stats.defense),
    };
    let def = def.max(1) as f64;
    ((opts.level_factor() * mv.power as f64 * atk as f64 / def) / 50.0 + 2.0).floor()
}

pub fn stab_multiplier(attacker: &Combatant, mv: &Move, opts: &BattleOptions) -> f64 {
    if is_stab(mv.move_type, &attacker.types) {
        opts.stab_multiplier
    } else {
        1.0
    }
}

pub fn compute_damage<R: Rng + ?Sized>(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    opts: &BattleOptions,
    rng: &mut R,
) -> DamageRoll {
    let base = base_damage(attacker, defender, mv, opts);
    let stab = stab_multiplier(attacker, mv, opts);
    let random = rng.gen_range(opts.random_min..=opts.random_max);
    let damage = (base * stab * random).floor().max(0.0) as u32;
    trace!(
        "{} -> {} with {}: base={base} stab={stab} roll={random:.4} damage={damage}",
        attacker.name,
        defender.name,
        mv.name
    );
    DamageRoll {
        base,
        stab,
        random,
        damage,
    }
}

/// Inclusive `(min, max)` damage over the whole roll range.
pub fn damage_bounds(attacker: &Combatant, defender: &Combatant, mv: &Move, opts: &BattleOptions) -> (u32, u32) {
    let scaled = base_damage(attacker, defender, mv, opts) * stab_multiplier(attacker, mv, opts);
    (
        (scaled * opts.random_min).floor() as u32,
        (scaled * opts.random_max).floor() as u32,
    )
}

/// Which side moves first: higher priority, then higher speed, then the player.
pub fn first_mover(
    player_priority: i32,
    opponent_priority: i32,
    player_speed: u32,
    opponent_speed: u32,
) -> Side {
    let order = player_priority
        .cmp(&opponent_priority)
        .then_with(|| player_speed.cmp(&opponent_speed));
    match order {
        Ordering::Less => Side::Opponent,
        Ordering::Equal | Ordering::Greater => Side::Player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stats;
    use crate::types::Type;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn fighter(types: &[Type], attack: u32, defense: u32, special: u32) -> Combatant {
        Combatant::new(
            "TEST",
            types.to_vec(),
            Stats {
                attack,
                defense,
                speed: 50,
                special,
            },
            Vec::new(),
            200,
        )
    }

    fn strike(move_type: Type, category: MoveCategory, power: u32) -> Move {
        Move {
            name: "STRIKE".to_string(),
            move_type,
            category,
            power,
            accuracy: 100,
            priority: 0,
        }
    }

    #[test]
    fn physical_base_at_level_fifty() {
        let attacker = fighter(&[Type::Normal], 100, 50, 50);
        let defender = fighter(&[Type::Normal], 50, 50, 50);
        let mv = strike(Type::Fire, MoveCategory::Physical, 75);
        let opts = BattleOptions::default();
        assert_eq!(base_damage(&attacker, &defender, &mv, &opts), 68.0);
        assert_eq!(damage_bounds(&attacker, &defender, &mv, &opts), (57, 68));
    }

    #[test]
    fn level_fifty_five_gives_a_level_term_of_24() {
        let attacker = fighter(&[Type::Normal], 100, 50, 50);
        let defender = fighter(&[Type::Normal], 50, 50, 50);
        let mv = strike(Type::Fire, MoveCategory::Physical, 75);
        let opts = BattleOptions {
            level: 55,
            ..BattleOptions::default()
        };
        assert_eq!(base_damage(&attacker, &defender, &mv, &opts), 74.0);
        assert_eq!(damage_bounds(&attacker, &defender, &mv, &opts), (62, 74));
    }

    #[test]
    fn special_moves_use_special_on_both_sides() {
        let attacker = fighter(&[Type::Normal], 10, 50, 120);
        let defender = fighter(&[Type::Normal], 50, 200, 60);
        let mv = strike(Type::Psychic, MoveCategory::Special, 90);
        let opts = BattleOptions::default();
        // 22 * 90 * 120 / 60 = 3960; / 50 = 79.2; + 2 = 81.2
        assert_eq!(base_damage(&attacker, &defender, &mv, &opts), 81.0);
    }

    #[test]
    fn status_moves_deal_nothing() {
        let attacker = fighter(&[Type::Normal], 100, 50, 50);
        let defender = fighter(&[Type::Normal], 50, 50, 50);
        let mv = strike(Type::Normal, MoveCategory::Status, 0);
        let opts = BattleOptions::default();
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(compute_damage(&attacker, &defender, &mv, &opts, &mut rng).damage, 0);
    }

    #[test]
    fn stab_applies_for_matching_type() {
        let attacker = fighter(&[Type::Fire, Type::Flying], 100, 50, 50);
        let defender = fighter(&[Type::Normal], 50, 50, 50);
        let opts = BattleOptions::default();
        let fire = strike(Type::Fire, MoveCategory::Physical, 75);
        let water = strike(Type::Water, MoveCategory::Physical, 75);
        assert_eq!(damage_bounds(&attacker, &defender, &fire, &opts), (86, 102));
        assert_eq!(damage_bounds(&attacker, &defender, &water, &opts), (57, 68));
    }

    #[test]
    fn zero_defense_does_not_divide_by_zero() {
        let attacker = fighter(&[Type::Normal], 100, 50, 50);
        let defender = fighter(&[Type::Normal], 50, 0, 50);
        let mv = strike(Type::Ground, MoveCategory::Physical, 10);
        let opts = BattleOptions::default();
        assert!(base_damage(&attacker, &defender, &mv, &opts).is_finite());
    }

    #[test]
    fn ordering_rules() {
        assert_eq!(first_mover(1, 0, 10, 200), Side::Player);
        assert_eq!(first_mover(0, 1, 200, 10), Side::Opponent);
        assert_eq!(first_mover(0, 0, 90, 91), Side::Opponent);
        assert_eq!(first_mover(0, 0, 91, 90), Side::Player);
        assert_eq!(first_mover(0, 0, 90, 90), Side::Player);
    }
}
