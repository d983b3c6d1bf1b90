use crate::data::{all_creatures, base_stats, creature_types, fixed_moves};
use crate::model::BaseStats;
use crate::types::Type;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DexEntry {
    pub name: &'static str,
    pub types: Vec<Type>,
    /// `None` when the creature falls back to default stats in battle.
    pub base_stats: Option<BaseStats>,
    pub moves: Option<&'static [&'static str]>,
}

impl DexEntry {
    fn new(name: &'static str) -> Self {
        DexEntry {
            name,
            types: creature_types(name),
            base_stats: base_stats(name),
            moves: fixed_moves(name),
        }
    }
}

/// Every creature, optionally narrowed by a case-insensitive name substring and a type.
pub fn search(query: Option<&str>, type_filter: Option<Type>) -> Vec<DexEntry> {
    let query = query.map(str::to_lowercase);
    all_creatures()
        .into_iter()
        .filter(|name| match &query {
            Some(q) => name.to_lowercase().contains(q.as_str()),
            None => true,
        })
        .map(DexEntry::new)
        .filter(|entry| type_filter.map_or(true, |t| entry.types.contains(&t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_creature_without_filters() {
        assert_eq!(search(None, None).len(), 126);
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let names: Vec<&str> = search(Some("bonk"), None).iter().map(|e| e.name).collect();
        assert_eq!(names, ["BONK", "BONKPRO"]);
    }

    #[test]
    fn type_filter_matches_either_slot() {
        let dragons = search(None, Some(Type::Dragon));
        let names: Vec<&str> = dragons.iter().map(|e| e.name).collect();
        assert_eq!(names, ["DRAGONBABY", "DRAGONCOIN", "SLOTH"]);
        assert!(dragons.iter().all(|e| e.types.contains(&Type::Dragon)));
    }

    #[test]
    fn featured_entries_carry_stats() {
        let cat = search(Some("cat"), Some(Type::Normal));
        let entry = cat.iter().find(|e| e.name == "CAT").expect("CAT listed");
        assert_eq!(entry.base_stats.map(|s| s.hp), Some(160));
        assert!(entry.moves.is_some());
    }
}
