//! Property-based tests for damage rolls and battle resolution.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use solomon_battle::battle::Side;
use solomon_battle::config::BattleOptions;
use solomon_battle::damage::{compute_damage, damage_bounds};
use solomon_battle::model::{Combatant, Move, MoveCategory, Stats};
use solomon_battle::roster::TeamSelection;
use solomon_battle::session::Session;
use solomon_battle::types::Type;

fn fighter(types: Vec<Type>, attack: u32, defense: u32, special: u32) -> Combatant {
    Combatant::new(
        "PROP",
        types,
        Stats {
            attack,
            defense,
            speed: 50,
            special,
        },
        Vec::new(),
        100,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every roll lands inside the inclusive window for its inputs.
    #[test]
    fn prop_damage_within_bounds(
        attack in 1u32..300,
        defense in 0u32..300,
        special in 1u32..300,
        power in 0u32..250,
        special_move in any::<bool>(),
        stab in any::<bool>(),
        seed in any::<u64>()
    ) {
        let category = if special_move { MoveCategory::Special } else { MoveCategory::Physical };
        let mv = Move {
            name: "PROBE".to_string(),
            move_type: Type::Fire,
            category,
            power,
            accuracy: 100,
            priority: 0,
        };
        let attacker_types = if stab { vec![Type::Fire] } else { vec![Type::Water] };
        let attacker = fighter(attacker_types, attack, 50, special);
        let defender = fighter(vec![Type::Normal], 50, defense, 50);
        let opts = BattleOptions::default();
        let (lo, hi) = damage_bounds(&attacker, &defender, &mv, &opts);
        let roll = compute_damage(&attacker, &defender, &mv, &opts, &mut SmallRng::seed_from_u64(seed));
        prop_assert!(lo <= roll.damage && roll.damage <= hi, "{} not in [{lo}, {hi}]", roll.damage);
        if power == 0 {
            prop_assert_eq!(roll.damage, 0);
        }
    }

    /// Health stays within [0, max], the turn always returns to the player
    /// and once over the battle never resumes.
    #[test]
    fn prop_battle_state_stays_consistent(seed in any::<u64>(), picks in prop::collection::vec(0usize..4, 1..60)) {
        let mut session = Session::new(BattleOptions::default(), seed).expect("default options");
        session.set_selection(TeamSelection::quick_start());
        session.start_battle().expect("battle starts");
        let mut was_over = false;
        for pick in picks {
            let Some(battle) = session.battle() else { break };
            let moves = &battle.active(Side::Player).moves;
            let name = moves[pick % moves.len()].name.clone();
            let (attacker, target) = (battle.active_index(Side::Player), battle.active_index(Side::Opponent));
            let _ = session.submit_move(&name, attacker, target);
            session.skip_playback();

            let battle = session.battle().expect("still running");
            for side in [Side::Player, Side::Opponent] {
                for member in battle.roster(side).iter() {
                    prop_assert!(member.current_health() <= member.max_health());
                }
            }
            prop_assert_eq!(battle.turn_owner(), Side::Player);
            if was_over {
                prop_assert!(battle.is_over());
            }
            was_over = battle.is_over();
            if !was_over {
                prop_assert!(!battle.active(Side::Player).is_fainted());
                prop_assert!(!battle.active(Side::Opponent).is_fainted());
            }
        }
    }
}
