//! Static lookup tables: creature names, base stats, move sets, types and moves.

use crate::model::{BaseStats, Move, MoveCategory};
use crate::types::Type;
use log::warn;
use phf::phf_map;

/// Static move definition as stored in [`MOVES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSpec {
    pub move_type: Type,
    pub category: MoveCategory,
    pub power: u32,
    pub accuracy: u8,
    pub priority: i32,
}

impl MoveSpec {
    const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn to_move(&self, name: &str) -> Move {
        Move {
            name: name.to_string(),
            move_type: self.move_type,
            category: self.category,
            power: self.power,
            accuracy: self.accuracy,
            priority: self.priority,
        }
    }
}

const fn physical(move_type: Type, power: u32, accuracy: u8) -> MoveSpec {
    MoveSpec {
        move_type,
        category: MoveCategory::Physical,
        power,
        accuracy,
        priority: 0,
    }
}

const fn special(move_type: Type, power: u32, accuracy: u8) -> MoveSpec {
    MoveSpec {
        move_type,
        category: MoveCategory::Special,
        power,
        accuracy,
        priority: 0,
    }
}

const fn status(move_type: Type, accuracy: u8) -> MoveSpec {
    MoveSpec {
        move_type,
        category: MoveCategory::Status,
        power: 0,
        accuracy,
        priority: 0,
    }
}

/// Used for any move name missing from [`MOVES`].
pub const FALLBACK_MOVE: MoveSpec = physical(Type::Normal, 40, 100);

pub const DEFAULT_BASE_STATS: BaseStats = BaseStats::uniform(70);

/// Classic creature name to its meme-coin name.
pub static NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "Venusaur" => "BOOK",
    "Charizard" => "WIF",
    "Blastoise" => "BODEN",
    "Pikachu" => "BONK",
    "Jigglypuff" => "SLERF",
    "Gengar" => "POPCAT",
    "Gyarados" => "GOATED",
    "Dragonite" => "SLOTH",
    "Mewtwo" => "SAMO",
    "Snorlax" => "CAT",
    "Bulbasaur" => "BOOK",
    "Ivysaur" => "BOOK",
    "Charmander" => "WIF",
    "Charmeleon" => "WIF",
    "Squirtle" => "BODEN",
    "Wartortle" => "BODEN",
    "Caterpie" => "TINY",
    "Metapod" => "TINY",
    "Butterfree" => "FLYBOI",
    "Weedle" => "SMOL",
    "Kakuna" => "SMOL",
    "Beedrill" => "BUZZEE",
    "Pidgey" => "BIRB",
    "Pidgeotto" => "BIRB",
    "Pidgeot" => "EAGLE",
    "Rattata" => "RAT",
    "Raticate" => "BIGRAT",
    "Spearow" => "PECK",
    "Fearow" => "PECK",
    "Ekans" => "SNEK",
    "Arbok" => "HIGSNEK",
    "Raichu" => "BONKPRO",
    "Sandshrew" => "SAND",
    "Sandslash" => "SANDBRO",
    "Nidoran♀" => "PINKNIDO",
    "Nidorina" => "PINKNIDO",
    "Nidoqueen" => "NIDOQUEEN",
    "Nidoran♂" => "BLUENIDO",
    "Nidorino" => "BLUENIDO",
    "Nidoking" => "NIDOKING",
    "Clefairy" => "CLEF",
    "Clefable" => "CLEFKING",
    "Vulpix" => "FOXIE",
    "Ninetales" => "SUPAFOX",
    "Zubat" => "SOLANABAT",
    "Golbat" => "SOLANABAT",
    "Oddish" => "GRASSY",
    "Gloom" => "GRASSY",
    "Vileplume" => "PLANTBRO",
    "Paras" => "BUGGY",
    "Parasect" => "BUGGY",
    "Venonat" => "MOTHRA",
    "Venomoth" => "MOTHRA",
    "Diglett" => "DIGGER",
    "Dugtrio" => "DIGGER",
    "Meowth" => "MEOWITCOIN",
    "Persian" => "RICHCAT",
    "Psyduck" => "PONZI",
    "Golduck" => "PONZIDUCK",
    "Mankey" => "APE",
    "Primeape" => "APEBRO",
    "Growlithe" => "DOGGO",
    "Arcanine" => "SUPERDOGGO",
    "Poliwag" => "TADPOLE",
    "Poliwhirl" => "TADPOLE",
    "Poliwrath" => "FROGKING",
    "Abra" => "MIND",
    "Kadabra" => "MIND",
    "Alakazam" => "PSYCHIC",
    "Machop" => "HODL",
    "Machoke" => "HODLBRO",
    "Machamp" => "DIAMONDHAND",
    "Bellsprout" => "PLANT",
    "Weepinbell" => "PLANT",
    "Victreebel" => "DEFI",
    "Tentacool" => "JELLY",
    "Tentacruel" => "JELLYBOSS",
    "Geodude" => "ROCK",
    "Graveler" => "ROCK",
    "Golem" => "BOULDER",
    "Ponyta" => "HORSEPUMP",
    "Rapidash" => "MEGAPUMP",
    "Slowpoke" => "RUGPULL",
    "Slowbro" => "RUGMSTR",
    "Magnemite" => "MAGNET",
    "Magneton" => "MAGNET",
    "Farfetch'd" => "LEEK",
    "Doduo" => "TWOBIRD",
    "Dodrio" => "TRIBIRD",
    "Seel" => "SEA",
    "Dewgong" => "SEALORD",
    "Grimer" => "DEGENS",
    "Muk" => "MEGADEGEN",
    "Shellder" => "SHELL",
    "Cloyster" => "OYSTER",
    "Gastly" => "GHOST",
    "Haunter" => "GHOST",
    "Onix" => "SNAKE",
    "Drowzee" => "SLEEP",
    "Hypno" => "HYPEMAN",
    "Krabby" => "CRAB",
    "Kingler" => "CRABRAVE",
    "Voltorb" => "REDBALL",
    "Electrode" => "PUMPBALL",
    "Exeggcute" => "EGGS",
    "Exeggutor" => "TREELORD",
    "Cubone" => "SKULL",
    "Marowak" => "SKULLBRO",
    "Hitmonlee" => "KICKCHAD",
    "Hitmonchan" => "PUNCHGUY",
    "Lickitung" => "LICK",
    "Koffing" => "GAS",
    "Weezing" => "GASFEES",
    "Rhyhorn" => "RHINO",
    "Rhydon" => "RHINOBOSS",
    "Chansey" => "LUCKY",
    "Tangela" => "VINE",
    "Kangaskhan" => "MOMMY",
    "Horsea" => "SEAHORSE",
    "Seadra" => "SEAHORSE",
    "Goldeen" => "GOLDFISH",
    "Seaking" => "FISHKING",
    "Staryu" => "STAR",
    "Starmie" => "STARKING",
    "Mr. Mime" => "MIMER",
    "Scyther" => "BLADE",
    "Jynx" => "ICEWITCH",
    "Electabuzz" => "BZZBZZ",
    "Magmar" => "FIRE",
    "Pinsir" => "PINCERS",
    "Tauros" => "BULL",
    "Magikarp" => "SHRIMP",
    "Lapras" => "TRANSPORT",
    "Ditto" => "COPYCAT",
    "Eevee" => "ADAPTCOIN",
    "Vaporeon" => "WATER",
    "Jolteon" => "LIGHTNING",
    "Flareon" => "FRYE",
    "Porygon" => "NFT",
    "Omanyte" => "FOSSIL",
    "Omastar" => "FOSSILKING",
    "Kabuto" => "OLDCOIN",
    "Kabutops" => "OLDKING",
    "Aerodactyl" => "FLYKING",
    "Articuno" => "ICEBIRD",
    "Zapdos" => "ZAPBIRD",
    "Moltres" => "FIREBIRD",
    "Dratini" => "DRAGONBABY",
    "Dragonair" => "DRAGONCOIN",
    "Mew" => "SOLANA",
};

pub static BASE_STATS: phf::Map<&'static str, BaseStats> = phf_map! {
    "BOOK" => BaseStats { hp: 80, attack: 82, defense: 83, speed: 80, special: 100 },
    "WIF" => BaseStats { hp: 78, attack: 84, defense: 78, speed: 100, special: 85 },
    "BODEN" => BaseStats { hp: 79, attack: 83, defense: 100, speed: 78, special: 85 },
    "BONK" => BaseStats { hp: 35, attack: 55, defense: 40, speed: 90, special: 50 },
    "BONKPRO" => BaseStats { hp: 60, attack: 90, defense: 55, speed: 110, special: 90 },
    "SLERF" => BaseStats { hp: 115, attack: 45, defense: 20, speed: 20, special: 25 },
    "POPCAT" => BaseStats { hp: 60, attack: 65, defense: 60, speed: 110, special: 130 },
    "GOATED" => BaseStats { hp: 95, attack: 125, defense: 79, speed: 81, special: 100 },
    "SLOTH" => BaseStats { hp: 91, attack: 134, defense: 95, speed: 80, special: 100 },
    "SAMO" => BaseStats { hp: 106, attack: 110, defense: 90, speed: 130, special: 154 },
    "CAT" => BaseStats { hp: 160, attack: 110, defense: 65, speed: 30, special: 65 },
    "SOLANA" => BaseStats { hp: 100, attack: 100, defense: 100, speed: 100, special: 100 },
    "DIAMONDHAND" => BaseStats { hp: 90, attack: 130, defense: 80, speed: 55, special: 65 },
    "SHRIMP" => BaseStats { hp: 20, attack: 10, defense: 55, speed: 80, special: 20 },
    "CRABRAVE" => BaseStats { hp: 55, attack: 130, defense: 115, speed: 75, special: 50 },
    "MEGADEGEN" => BaseStats { hp: 105, attack: 105, defense: 75, speed: 50, special: 65 },
    "PSYCHIC" => BaseStats { hp: 55, attack: 50, defense: 45, speed: 120, special: 135 },
    "PUMPBALL" => BaseStats { hp: 60, attack: 50, defense: 70, speed: 150, special: 80 },
    "BOULDER" => BaseStats { hp: 80, attack: 120, defense: 130, speed: 45, special: 55 },
    "MEGAPUMP" => BaseStats { hp: 65, attack: 100, defense: 70, speed: 105, special: 80 },
};

pub static FIXED_MOVES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "BOOK" => &["LIQUIDITY DRAIN", "VIRAL TWEET", "MARKET MANIPULATION", "SLEEP POWDER"],
    "WIF" => &["DEGEN PUMP", "MOON SHOT", "MOON MISSION", "APE IN"],
    "BODEN" => &["WHALE DUMP", "MARKET CRASH", "LIQUIDITY POOL", "DIAMOND HANDS"],
    "BONK" => &["VIRAL TWEET", "BREAKOUT", "MICRO SHOCK", "SNIPE"],
    "BONKPRO" => &["BREAKOUT", "VIRAL TWEET", "ELON TWEET", "MARKET MANIPULATION"],
    "SLERF" => &["DIP BUY", "STAKING", "FUD CAMPAIGN", "MARKET CONFUSION"],
    "POPCAT" => &["SHADOW TRADE", "DARK POOL", "EXIT SCAM", "MARKET MANIPULATION"],
    "GOATED" => &["MARKET CRASH", "LIQUIDATE", "MARKET WAVE", "MOON MISSION"],
    "SLOTH" => &["MARKET CRASH", "WHALE PUMP", "LIQUIDATION CASCADE", "MOON MISSION"],
    "SAMO" => &["MARKET MANIPULATION", "SHADOW TRADE", "BREAKOUT", "MARKET RECOVERY"],
    "CAT" => &["MARKET CRASH", "STAKING", "LIQUIDITY WITHDRAWAL", "MARKET RECOVERY"],
    "SOLANA" => &["MARKET MANIPULATION", "VIRAL TWEET", "MOON SHOT", "MARKET RECOVERY"],
    "DIAMONDHAND" => &["LEVERAGE LONG", "MARKET CRASH", "CROSS-CHAIN", "HOSTILE TAKEOVER"],
    "SHRIMP" => &["APE IN"],
    "CRABRAVE" => &["MARKET CRASH", "DIAMOND HANDS", "LIQUIDATE", "SNIPE"],
    "MEGADEGEN" => &["EXIT SCAM", "SLOW RUG", "MARKET CRASH", "DOUBLE RUG"],
    "PSYCHIC" => &["MARKET MANIPULATION", "PRICE PREDICTION", "MARKET CONFUSION", "MIND GAMES"],
    "PUMPBALL" => &["BREAKOUT", "ELON TWEET", "MARKET CRASH", "MICRO SHOCK"],
    "BOULDER" => &["DIAMOND HANDS", "MARKET CRASH", "STOP LOSS CASCADE", "HARD FORK"],
    "MEGAPUMP" => &["MOON SHOT", "DEGEN PUMP", "SNIPE", "MARKET SPARK"],
};

pub static CREATURE_TYPES: phf::Map<&'static str, &'static [Type]> = phf_map! {
    "BOOK" => &[Type::Grass, Type::Poison],
    "WIF" => &[Type::Fire, Type::Flying],
    "BODEN" => &[Type::Water],
    "BONK" => &[Type::Electric],
    "SLERF" => &[Type::Normal, Type::Fairy],
    "POPCAT" => &[Type::Ghost, Type::Poison],
    "GOATED" => &[Type::Water, Type::Flying],
    "SLOTH" => &[Type::Dragon, Type::Flying],
    "SAMO" => &[Type::Psychic],
    "CAT" => &[Type::Normal],
    "TINY" => &[Type::Bug],
    "FLYBOI" => &[Type::Bug, Type::Flying],
    "SMOL" => &[Type::Bug, Type::Poison],
    "BUZZEE" => &[Type::Bug, Type::Poison],
    "BIRB" => &[Type::Normal, Type::Flying],
    "EAGLE" => &[Type::Normal, Type::Flying],
    "RAT" => &[Type::Normal],
    "BIGRAT" => &[Type::Normal],
    "PECK" => &[Type::Normal, Type::Flying],
    "SNEK" => &[Type::Poison],
    "HIGSNEK" => &[Type::Poison],
    "BONKPRO" => &[Type::Electric],
    "SAND" => &[Type::Ground],
    "SANDBRO" => &[Type::Ground],
    "PINKNIDO" => &[Type::Poison],
    "NIDOQUEEN" => &[Type::Poison, Type::Ground],
    "BLUENIDO" => &[Type::Poison],
    "NIDOKING" => &[Type::Poison, Type::Ground],
    "CLEF" => &[Type::Fairy],
    "CLEFKING" => &[Type::Fairy],
    "FOXIE" => &[Type::Fire],
    "SUPAFOX" => &[Type::Fire],
    "SOLANABAT" => &[Type::Poison, Type::Flying],
    "GRASSY" => &[Type::Grass, Type::Poison],
    "PLANTBRO" => &[Type::Grass, Type::Poison],
    "BUGGY" => &[Type::Bug, Type::Grass],
    "MOTHRA" => &[Type::Bug, Type::Poison],
    "DIGGER" => &[Type::Ground],
    "MEOWITCOIN" => &[Type::Normal],
    "RICHCAT" => &[Type::Normal],
    "PONZI" => &[Type::Water],
    "PONZIDUCK" => &[Type::Water],
    "APE" => &[Type::Fighting],
    "APEBRO" => &[Type::Fighting],
    "DOGGO" => &[Type::Fire],
    "SUPERDOGGO" => &[Type::Fire],
    "TADPOLE" => &[Type::Water],
    "FROGKING" => &[Type::Water, Type::Fighting],
    "MIND" => &[Type::Psychic],
    "PSYCHIC" => &[Type::Psychic],
    "HODL" => &[Type::Fighting],
    "HODLBRO" => &[Type::Fighting],
    "DIAMONDHAND" => &[Type::Fighting],
    "PLANT" => &[Type::Grass, Type::Poison],
    "DEFI" => &[Type::Grass, Type::Poison],
    "JELLY" => &[Type::Water, Type::Poison],
    "JELLYBOSS" => &[Type::Water, Type::Poison],
    "ROCK" => &[Type::Rock, Type::Ground],
    "BOULDER" => &[Type::Rock, Type::Ground],
    "HORSEPUMP" => &[Type::Fire],
    "MEGAPUMP" => &[Type::Fire],
    "RUGPULL" => &[Type::Water, Type::Psychic],
    "RUGMSTR" => &[Type::Water, Type::Psychic],
    "MAGNET" => &[Type::Electric, Type::Steel],
    "LEEK" => &[Type::Normal, Type::Flying],
    "TWOBIRD" => &[Type::Normal, Type::Flying],
    "TRIBIRD" => &[Type::Normal, Type::Flying],
    "SEA" => &[Type::Water],
    "SEALORD" => &[Type::Water, Type::Ice],
    "DEGENS" => &[Type::Poison],
    "MEGADEGEN" => &[Type::Poison],
    "SHELL" => &[Type::Water],
    "OYSTER" => &[Type::Water, Type::Ice],
    "GHOST" => &[Type::Ghost, Type::Poison],
    "SNAKE" => &[Type::Rock, Type::Ground],
    "SLEEP" => &[Type::Psychic],
    "HYPEMAN" => &[Type::Psychic],
    "CRAB" => &[Type::Water],
    "CRABRAVE" => &[Type::Water],
    "REDBALL" => &[Type::Electric],
    "PUMPBALL" => &[Type::Electric],
    "EGGS" => &[Type::Grass, Type::Psychic],
    "TREELORD" => &[Type::Grass, Type::Psychic],
    "SKULL" => &[Type::Ground],
    "SKULLBRO" => &[Type::Ground],
    "KICKCHAD" => &[Type::Fighting],
    "PUNCHGUY" => &[Type::Fighting],
    "LICK" => &[Type::Normal],
    "GAS" => &[Type::Poison],
    "GASFEES" => &[Type::Poison],
    "RHINO" => &[Type::Ground, Type::Rock],
    "RHINOBOSS" => &[Type::Ground, Type::Rock],
    "LUCKY" => &[Type::Normal],
    "VINE" => &[Type::Grass],
    "MOMMY" => &[Type::Normal],
    "SEAHORSE" => &[Type::Water],
    "GOLDFISH" => &[Type::Water],
    "FISHKING" => &[Type::Water],
    "STAR" => &[Type::Water],
    "STARKING" => &[Type::Water, Type::Psychic],
    "MIMER" => &[Type::Psychic, Type::Fairy],
    "BLADE" => &[Type::Bug, Type::Flying],
    "ICEWITCH" => &[Type::Ice, Type::Psychic],
    "BZZBZZ" => &[Type::Electric],
    "FIRE" => &[Type::Fire],
    "PINCERS" => &[Type::Bug],
    "BULL" => &[Type::Normal],
    "SHRIMP" => &[Type::Water],
    "TRANSPORT" => &[Type::Water, Type::Ice],
    "COPYCAT" => &[Type::Normal],
    "ADAPTCOIN" => &[Type::Normal],
    "WATER" => &[Type::Water],
    "LIGHTNING" => &[Type::Electric],
    "FRYE" => &[Type::Fire],
    "NFT" => &[Type::Normal],
    "FOSSIL" => &[Type::Rock, Type::Water],
    "FOSSILKING" => &[Type::Rock, Type::Water],
    "OLDCOIN" => &[Type::Rock, Type::Water],
    "OLDKING" => &[Type::Rock, Type::Water],
    "FLYKING" => &[Type::Rock, Type::Flying],
    "ICEBIRD" => &[Type::Ice, Type::Flying],
    "ZAPBIRD" => &[Type::Electric, Type::Flying],
    "FIREBIRD" => &[Type::Fire, Type::Flying],
    "DRAGONBABY" => &[Type::Dragon],
    "DRAGONCOIN" => &[Type::Dragon],
    "SOLANA" => &[Type::Psychic],
};

pub static MOVES: phf::Map<&'static str, MoveSpec> = phf_map! {
    "APE IN" => physical(Type::Normal, 40, 100),
    "SNIPE" => physical(Type::Normal, 40, 100).with_priority(1),
    "PAPER HAND" => physical(Type::Normal, 40, 100),
    "DIP BUY" => physical(Type::Normal, 40, 100),
    "SELL WALL" => physical(Type::Normal, 50, 95),
    "FUD" => physical(Type::Normal, 70, 100),
    "LIQUIDATE" => physical(Type::Normal, 90, 85),
    "ALL IN" => physical(Type::Normal, 120, 100),
    "AIRDROP" => physical(Type::Normal, 40, 100),
    "DUMP IT" => physical(Type::Normal, 80, 75),
    "SPIKE UP" => physical(Type::Normal, 65, 100),
    "SHORT SQUEEZE" => physical(Type::Normal, 65, 100),
    "MEGA PUMP" => physical(Type::Normal, 80, 85),
    "KICKSTARTER" => physical(Type::Normal, 120, 75),
    "HYPERPUMP" => special(Type::Normal, 150, 90),
    "MOON MISSION" => physical(Type::Normal, 150, 90),
    "MICRO PUMP" => special(Type::Fire, 40, 100),
    "DEGEN PUMP" => special(Type::Fire, 90, 100),
    "MOON SHOT" => special(Type::Fire, 110, 85),
    "BURN SHORTS" => physical(Type::Fire, 75, 100),
    "APY FARMING" => special(Type::Fire, 100, 50),
    "BULLISH TREND" => special(Type::Fire, 95, 90),
    "MICRO CAP" => special(Type::Water, 40, 100),
    "LIQUIDITY POOL" => special(Type::Water, 40, 100),
    "WHALE DUMP" => special(Type::Water, 110, 80),
    "MARKET WAVE" => special(Type::Water, 90, 100),
    "HOT WALLET" => special(Type::Water, 80, 100),
    "QUICK FLIP" => physical(Type::Water, 40, 100).with_priority(1),
    "MICRO SHOCK" => special(Type::Electric, 40, 100),
    "VIRAL TWEET" => special(Type::Electric, 90, 100),
    "BREAKOUT" => special(Type::Electric, 110, 70),
    "MARKET SPARK" => physical(Type::Electric, 65, 100),
    "CHAIN SWAP" => special(Type::Electric, 70, 100),
    "ELON TWEET" => physical(Type::Electric, 75, 100),
    "STAKE SLAP" => physical(Type::Grass, 45, 100),
    "PAPER CUT" => physical(Type::Grass, 55, 95),
    "APY BEAM" => special(Type::Grass, 120, 100),
    "TOKEN LAUNCH" => special(Type::Grass, 130, 90),
    "SEED ROUND" => physical(Type::Grass, 80, 100),
    "LIQUIDITY DRAIN" => special(Type::Grass, 75, 100),
    "FREEZE ASSETS" => special(Type::Ice, 90, 100),
    "MARKET FREEZE" => special(Type::Ice, 110, 70),
    "COLD STORAGE" => physical(Type::Ice, 75, 100),
    "COLD WALLET" => special(Type::Ice, 65, 100),
    "DEAD COIN" => special(Type::Ice, 60, 90),
    "MARGIN CALL" => physical(Type::Fighting, 50, 100),
    "MARKET DIP" => physical(Type::Fighting, 60, 100),
    "BUY HIGH" => physical(Type::Fighting, 130, 90),
    "LEVERAGE LONG" => physical(Type::Fighting, 100, 50),
    "HOSTILE TAKEOVER" => physical(Type::Fighting, 120, 100),
    "SUPPORT BREAK" => physical(Type::Fighting, 75, 100),
    "MICRO RUGPULL" => physical(Type::Poison, 15, 100),
    "SLOW RUG" => special(Type::Poison, 65, 100),
    "MAJOR RUGPULL" => special(Type::Poison, 90, 100),
    "EXIT SCAM" => status(Type::Poison, 90),
    "DOUBLE RUG" => special(Type::Poison, 65, 100),
    "INSIDER TRADING" => physical(Type::Poison, 80, 100),
    "FUD SPREAD" => status(Type::Ground, 100),
    "MARKET CRASH" => physical(Type::Ground, 100, 100),
    "DEEP RESEARCH" => physical(Type::Ground, 80, 100),
    "FOUNDATION BUY" => special(Type::Ground, 90, 100),
    "SHILL POST" => special(Type::Ground, 55, 95),
    "COORDINATED FUD" => special(Type::Ground, 65, 85),
    "PORTFOLIO GUST" => special(Type::Flying, 40, 100),
    "SWING TRADE" => physical(Type::Flying, 60, 100),
    "CHART PIERCE" => physical(Type::Flying, 80, 100),
    "TREND SURF" => physical(Type::Flying, 60, 100),
    "MARKET STORM" => special(Type::Flying, 110, 70),
    "RESISTANCE BREAK" => special(Type::Flying, 75, 95),
    "MARKET CONFUSION" => special(Type::Psychic, 50, 100),
    "MARKET MANIPULATION" => special(Type::Psychic, 90, 100),
    "MIND GAMES" => special(Type::Psychic, 65, 100),
    "PRICE PREDICTION" => special(Type::Psychic, 120, 100),
    "DEGEN YOLO" => physical(Type::Psychic, 80, 90),
    "SMART MONEY" => physical(Type::Psychic, 70, 100),
    "NFT FLIP" => physical(Type::Bug, 80, 100),
    "BOT ATTACK" => physical(Type::Bug, 25, 95),
    "SOCIAL BUZZ" => special(Type::Bug, 90, 100),
    "CROSS-CHAIN" => physical(Type::Bug, 80, 100),
    "MOMENTUM TRADE" => special(Type::Bug, 60, 100),
    "DIAMOND HANDS" => physical(Type::Rock, 50, 90),
    "STOP LOSS CASCADE" => physical(Type::Rock, 75, 90),
    "HARD FORK" => physical(Type::Rock, 100, 80),
    "OG MOVE" => special(Type::Rock, 60, 100),
    "GEM UNLOCK" => special(Type::Rock, 80, 100),
    "STEALTH BUY" => physical(Type::Ghost, 30, 100),
    "DARK POOL" => special(Type::Ghost, 50, 100),
    "SHADOW TRADE" => special(Type::Ghost, 80, 100),
    "GHOST LIQUIDITY" => physical(Type::Ghost, 70, 100),
    "CURSE TOKEN" => special(Type::Ghost, 65, 100),
    "WHALE RAGE" => special(Type::Dragon, 40, 100),
    "WHALE BREATH" => special(Type::Dragon, 60, 100),
    "MARKET MAKER" => physical(Type::Dragon, 80, 100),
    "LIQUIDATION CASCADE" => physical(Type::Dragon, 120, 100),
    "WHALE PUMP" => special(Type::Dragon, 85, 100),
    "FUD CAMPAIGN" => status(Type::Normal, 100),
    "LOWER SUPPORT" => status(Type::Normal, 100),
    "BEARISH SIGNAL" => status(Type::Normal, 100),
    "SLOW BLEED" => status(Type::Bug, 95),
    "FEAR MONGERING" => status(Type::Normal, 85),
    "WALLET OBFUSCATION" => status(Type::Normal, 100),
    "HODL TIGHT" => status(Type::Normal, 100),
    "LIQUIDITY WITHDRAWAL" => status(Type::Water, 100),
    "LOW CAP GEM" => status(Type::Normal, 100),
    "MULTI WALLET" => status(Type::Normal, 100),
    "BULLISH WALL" => status(Type::Psychic, 100),
    "PRICE FLOOR" => status(Type::Psychic, 100),
    "ACCUMULATION" => status(Type::Normal, 100),
    "MEMORY WIPE" => status(Type::Psychic, 100),
    "MARKET CAP GROWTH" => status(Type::Normal, 100),
    "TECHNICAL BREAKOUT" => status(Type::Normal, 100),
    "MARKET RECOVERY" => status(Type::Normal, 100),
    "VAULT SECURITY" => status(Type::Poison, 100),
    "STAKING" => status(Type::Psychic, 100),
    "PRICE DISCOVERY" => status(Type::Normal, 100),
    "TOKEN SWAP" => status(Type::Normal, 100),
    "PROXY TRADE" => status(Type::Normal, 100),
    "SLEEP POWDER" => status(Type::Grass, 75),
};

/// Classic names offered by the team builder.
pub const TEAM_BUILDER_CATALOGUE: [&str; 31] = [
    "Bulbasaur", "Charizard", "Blastoise", "Pikachu", "Jigglypuff", "Meowth", "Psyduck",
    "Gengar", "Onix", "Electrode", "Exeggutor", "Hitmonlee", "Weezing", "Chansey",
    "Kangaskhan", "Starmie", "Scyther", "Jynx", "Electabuzz", "Magmar", "Gyarados", "Lapras",
    "Eevee", "Porygon", "Snorlax", "Articuno", "Zapdos", "Moltres", "Dragonite", "Mewtwo", "Mew",
];

/// Team used when the player skips team building.
pub const QUICK_START_TEAM: [&str; 6] =
    ["Pikachu", "Charizard", "Blastoise", "Venusaur", "Mewtwo", "Dragonite"];

/// Maps a classic name to its meme-coin name; unknown names pass through.
pub fn resolve_name(name: &str) -> &str {
    NAMES.get(name).copied().unwrap_or(name)
}

pub fn base_stats(name: &str) -> Option<BaseStats> {
    BASE_STATS.get(name).copied()
}

pub fn fixed_moves(name: &str) -> Option<&'static [&'static str]> {
    FIXED_MOVES.get(name).copied()
}

pub fn creature_types(name: &str) -> Vec<Type> {
    CREATURE_TYPES
        .get(name)
        .map(|types| types.to_vec())
        .unwrap_or_else(|| vec![Type::Normal])
}

pub fn move_spec(name: &str) -> Option<MoveSpec> {
    MOVES.get(name).copied()
}

/// Resolves a move by name, degrading to [`FALLBACK_MOVE`] on a miss.
pub fn lookup_move(name: &str) -> Move {
    match move_spec(name) {
        Some(spec) => spec.to_move(name),
        None => {
            warn!("unknown move {name:?}, using fallback definition");
            FALLBACK_MOVE.to_move(name)
        }
    }
}

/// Every known move name, sorted so sampling is stable for a given seed.
pub fn move_pool() -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = MOVES.keys().copied().collect();
    pool.sort_unstable();
    pool
}

/// Creatures with a base-stat entry; the opponent candidate pool.
pub fn featured_creatures() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BASE_STATS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Every distinct meme-coin name, sorted.
pub fn all_creatures() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = NAMES.values().copied().collect();
    names.sort_unstable();
    names.dedup();
    names
}
