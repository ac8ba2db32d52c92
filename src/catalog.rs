//! Static species catalog: stats, types, move sets and the evolution table.
//!
//! Lookups are total over the `Species` enum, so battle code never deals with
//! a missing entry. Encounter pools reference catalog entries by species.

use schema::MoveEffect as Effect;
use schema::StatPair::{Defense, Offense};
use schema::{BaseStats, MoveData, PokemonType, Species, SpeciesData};

/// The three starter choices offered at the beginning of a playthrough.
pub const STARTERS: [Species; 3] = [Species::Charmander, Species::Squirtle, Species::Bulbasaur];

/// The normal wild encounter pool, sampled by rarity tier.
pub const WILD_POOL: [Species; 55] = [
    Species::Magikarp,
    Species::Metapod,
    Species::Kakuna,
    Species::Caterpie,
    Species::Weedle,
    Species::Pidgey,
    Species::Rattata,
    Species::Snorlax,
    Species::Gastly,
    Species::Tentacool,
    Species::Vulpix,
    Species::Meowth,
    Species::Zubat,
    Species::Onix,
    Species::Oddish,
    Species::Poliwag,
    Species::Paras,
    Species::Venonat,
    Species::Krabby,
    Species::Horsea,
    Species::Goldeen,
    Species::Staryu,
    Species::Psyduck,
    Species::Pikachu,
    Species::Diglett,
    Species::Geodude,
    Species::Spearow,
    Species::Magnemite,
    Species::Cubone,
    Species::Drowzee,
    Species::Slowpoke,
    Species::Shellder,
    Species::Voltorb,
    Species::Exeggcute,
    Species::Growlithe,
    Species::Bellsprout,
    Species::Sandshrew,
    Species::Machop,
    Species::Mankey,
    Species::Ponyta,
    Species::Rhyhorn,
    Species::Tangela,
    Species::Lickitung,
    Species::Chansey,
    Species::Abra,
    Species::Electabuzz,
    Species::Magmar,
    Species::Pinsir,
    Species::Tauros,
    Species::Scyther,
    Species::Ditto,
    Species::Eevee,
    Species::Porygon,
    Species::Lapras,
    Species::Aerodactyl,
];

/// High-tier encounters that replace the normal pool once the legendary has
/// been defeated or caught.
pub const FINAL_POOL: [Species; 10] = [
    Species::Charizard,
    Species::Blastoise,
    Species::Venusaur,
    Species::Pidgeot,
    Species::Gengar,
    Species::Machamp,
    Species::Golem,
    Species::Victreebel,
    Species::Dragonite,
    Species::Gyarados,
];

/// The scripted legendary gate encounter.
pub const LEGENDARY_SPECIES: Species = Species::Mewtwo;

/// The rare out-of-pool mythical encounter.
pub const MYTHICAL_SPECIES: Species = Species::Mew;

/// Fallback identity for unknown species names arriving over the host
/// boundary.
pub const DEFAULT_SPECIES: Species = Species::Rattata;

const fn mv(name: &'static str, move_type: PokemonType) -> Option<MoveData> {
    Some(MoveData {
        name,
        move_type,
        effect: Effect::Damage,
    })
}

const fn status(name: &'static str, move_type: PokemonType, effect: Effect) -> Option<MoveData> {
    Some(MoveData {
        name,
        move_type,
        effect,
    })
}

const fn stats(hp: u8, attack: u8, defense: u8, sp_attack: u8, sp_defense: u8) -> BaseStats {
    BaseStats {
        hp,
        attack,
        defense,
        sp_attack,
        sp_defense,
    }
}

/// Catalog lookup. Total: every `Species` variant has an entry.
pub fn get_species_data(species: Species) -> SpeciesData {
    use PokemonType::*;

    match species {
        // --- Starter lines ---
        Species::Bulbasaur => SpeciesData {
            name: "Bulbasaur",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(45, 49, 49, 65, 65),
            moves: [
                mv("Tackle", Normal),
                mv("Vine Whip", Grass),
                status("Growl", Normal, Effect::LowerStat(Offense)),
                mv("Razor Leaf", Grass),
            ],
        },
        Species::Ivysaur => SpeciesData {
            name: "Ivysaur",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(60, 62, 63, 80, 80),
            moves: [
                mv("Vine Whip", Grass),
                mv("Razor Leaf", Grass),
                status("Poison Powder", Poison, Effect::Poison),
                mv("Mega Drain", Grass),
            ],
        },
        Species::Venusaur => SpeciesData {
            name: "Venusaur",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(95, 82, 83, 100, 100),
            moves: [
                mv("Solar Beam", Grass),
                mv("Sludge Bomb", Poison),
                mv("Earthquake", Ground),
                mv("Petal Dance", Grass),
            ],
        },
        Species::Charmander => SpeciesData {
            name: "Charmander",
            glyph: "🔥",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(39, 52, 43, 60, 50),
            moves: [
                mv("Scratch", Normal),
                mv("Ember", Fire),
                status("Growl", Normal, Effect::LowerStat(Offense)),
                mv("Flame Burst", Fire),
            ],
        },
        Species::Charmeleon => SpeciesData {
            name: "Charmeleon",
            glyph: "🔥",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(58, 64, 58, 80, 65),
            moves: [
                mv("Ember", Fire),
                mv("Slash", Normal),
                mv("Flame Burst", Fire),
                mv("Flamethrower", Fire),
            ],
        },
        Species::Charizard => SpeciesData {
            name: "Charizard",
            glyph: "🔥",
            primary_type: Fire,
            secondary_type: Some(Flying),
            base_stats: stats(90, 84, 78, 109, 85),
            moves: [
                mv("Flamethrower", Fire),
                mv("Wing Attack", Flying),
                mv("Fire Blast", Fire),
                mv("Dragon Claw", Dragon),
            ],
        },
        Species::Squirtle => SpeciesData {
            name: "Squirtle",
            glyph: "💧",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(44, 48, 65, 50, 64),
            moves: [
                mv("Tackle", Normal),
                mv("Water Gun", Water),
                status("Withdraw", Water, Effect::RaiseStat(Defense)),
                mv("Bubble Beam", Water),
            ],
        },
        Species::Wartortle => SpeciesData {
            name: "Wartortle",
            glyph: "💧",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(59, 63, 80, 65, 80),
            moves: [
                mv("Water Gun", Water),
                mv("Bite", Dark),
                status("Withdraw", Water, Effect::RaiseStat(Defense)),
                mv("Bubble Beam", Water),
            ],
        },
        Species::Blastoise => SpeciesData {
            name: "Blastoise",
            glyph: "💧",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(95, 83, 100, 85, 105),
            moves: [
                mv("Hydro Pump", Water),
                mv("Bite", Dark),
                mv("Ice Beam", Ice),
                mv("Skull Bash", Normal),
            ],
        },

        // --- Bug lines ---
        Species::Caterpie => SpeciesData {
            name: "Caterpie",
            glyph: "🐛",
            primary_type: Bug,
            secondary_type: None,
            base_stats: stats(45, 30, 35, 20, 20),
            moves: [
                mv("Tackle", Normal),
                status("String Shot", Bug, Effect::LowerStat(Defense)),
                mv("Bug Bite", Bug),
                None,
            ],
        },
        Species::Metapod => SpeciesData {
            name: "Metapod",
            glyph: "🥚",
            primary_type: Bug,
            secondary_type: None,
            base_stats: stats(25, 15, 55, 25, 25),
            moves: [
                status("Harden", Normal, Effect::RaiseStat(Defense)),
                mv("Tackle", Normal),
                None,
                None,
            ],
        },
        Species::Butterfree => SpeciesData {
            name: "Butterfree",
            glyph: "🦋",
            primary_type: Bug,
            secondary_type: Some(Flying),
            base_stats: stats(60, 45, 50, 90, 80),
            moves: [
                mv("Gust", Flying),
                mv("Confusion", Psychic),
                status("Sleep Powder", Grass, Effect::Sleep),
                mv("Psybeam", Psychic),
            ],
        },
        Species::Weedle => SpeciesData {
            name: "Weedle",
            glyph: "🐝",
            primary_type: Bug,
            secondary_type: Some(Poison),
            base_stats: stats(40, 25, 30, 20, 20),
            moves: [
                mv("Poison Sting", Poison),
                status("String Shot", Bug, Effect::LowerStat(Defense)),
                mv("Bug Bite", Bug),
                None,
            ],
        },
        Species::Kakuna => SpeciesData {
            name: "Kakuna",
            glyph: "🐝",
            primary_type: Bug,
            secondary_type: None,
            base_stats: stats(25, 15, 50, 25, 25),
            moves: [
                status("Harden", Normal, Effect::RaiseStat(Defense)),
                mv("Poison Sting", Poison),
                None,
                None,
            ],
        },
        Species::Beedrill => SpeciesData {
            name: "Beedrill",
            glyph: "🐝",
            primary_type: Bug,
            secondary_type: Some(Poison),
            base_stats: stats(65, 90, 40, 45, 80),
            moves: [
                mv("Poison Sting", Poison),
                mv("Fury Attack", Normal),
                mv("Pin Missile", Bug),
                mv("X-Scissor", Bug),
            ],
        },
        Species::Paras => SpeciesData {
            name: "Paras",
            glyph: "🍄",
            primary_type: Bug,
            secondary_type: Some(Grass),
            base_stats: stats(35, 45, 55, 45, 55),
            moves: [
                mv("Scratch", Normal),
                status("Stun Spore", Grass, Effect::Poison),
                mv("Leech Life", Bug),
                status("Spore", Grass, Effect::Sleep),
            ],
        },
        Species::Venonat => SpeciesData {
            name: "Venonat",
            glyph: "🔮",
            primary_type: Bug,
            secondary_type: Some(Poison),
            base_stats: stats(60, 45, 50, 40, 55),
            moves: [
                mv("Tackle", Normal),
                mv("Confusion", Psychic),
                status("Poison Powder", Poison, Effect::Poison),
                mv("Psybeam", Psychic),
            ],
        },
        Species::Scyther => SpeciesData {
            name: "Scyther",
            glyph: "🦗",
            primary_type: Bug,
            secondary_type: Some(Flying),
            base_stats: stats(70, 110, 80, 55, 80),
            moves: [
                mv("Quick Attack", Normal),
                mv("Fury Cutter", Bug),
                mv("Slash", Normal),
                mv("X-Scissor", Bug),
            ],
        },
        Species::Pinsir => SpeciesData {
            name: "Pinsir",
            glyph: "🪲",
            primary_type: Bug,
            secondary_type: None,
            base_stats: stats(65, 125, 100, 55, 70),
            moves: [
                mv("Vice Grip", Normal),
                mv("X-Scissor", Bug),
                mv("Guillotine", Normal),
                mv("Superpower", Fighting),
            ],
        },

        // --- Birds ---
        Species::Pidgey => SpeciesData {
            name: "Pidgey",
            glyph: "🐦",
            primary_type: Normal,
            secondary_type: Some(Flying),
            base_stats: stats(40, 30, 40, 35, 35),
            moves: [
                mv("Peck", Flying),
                mv("Gust", Flying),
                status("Sand Attack", Ground, Effect::LowerStat(Defense)),
                mv("Wing Attack", Flying),
            ],
        },
        Species::Pidgeotto => SpeciesData {
            name: "Pidgeotto",
            glyph: "🐦",
            primary_type: Normal,
            secondary_type: Some(Flying),
            base_stats: stats(63, 60, 55, 50, 50),
            moves: [
                mv("Gust", Flying),
                mv("Quick Attack", Normal),
                mv("Wing Attack", Flying),
                mv("Aerial Ace", Flying),
            ],
        },
        Species::Pidgeot => SpeciesData {
            name: "Pidgeot",
            glyph: "🐦",
            primary_type: Normal,
            secondary_type: Some(Flying),
            base_stats: stats(85, 80, 75, 70, 70),
            moves: [
                mv("Hurricane", Flying),
                mv("Wing Attack", Flying),
                mv("Aerial Ace", Flying),
                mv("Quick Attack", Normal),
            ],
        },
        Species::Spearow => SpeciesData {
            name: "Spearow",
            glyph: "🐦",
            primary_type: Normal,
            secondary_type: Some(Flying),
            base_stats: stats(40, 60, 30, 31, 31),
            moves: [
                mv("Peck", Flying),
                mv("Fury Attack", Normal),
                mv("Aerial Ace", Flying),
                mv("Drill Peck", Flying),
            ],
        },
        Species::Fearow => SpeciesData {
            name: "Fearow",
            glyph: "🐦",
            primary_type: Normal,
            secondary_type: Some(Flying),
            base_stats: stats(65, 90, 65, 61, 61),
            moves: [
                mv("Peck", Flying),
                mv("Fury Attack", Normal),
                mv("Aerial Ace", Flying),
                mv("Drill Peck", Flying),
            ],
        },

        // --- Normal ---
        Species::Rattata => SpeciesData {
            name: "Rattata",
            glyph: "🐀",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(30, 28, 35, 25, 35),
            moves: [
                mv("Tackle", Normal),
                mv("Quick Attack", Normal),
                mv("Bite", Dark),
                mv("Hyper Fang", Normal),
            ],
        },
        Species::Raticate => SpeciesData {
            name: "Raticate",
            glyph: "🐀",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(55, 81, 60, 50, 70),
            moves: [
                mv("Quick Attack", Normal),
                mv("Hyper Fang", Normal),
                mv("Bite", Dark),
                mv("Take Down", Normal),
            ],
        },
        Species::Meowth => SpeciesData {
            name: "Meowth",
            glyph: "🐱",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(40, 45, 35, 40, 40),
            moves: [
                mv("Scratch", Normal),
                mv("Bite", Dark),
                mv("Fury Swipes", Normal),
                mv("Pay Day", Normal),
            ],
        },
        Species::Persian => SpeciesData {
            name: "Persian",
            glyph: "🐱",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(65, 70, 60, 65, 65),
            moves: [
                mv("Scratch", Normal),
                mv("Bite", Dark),
                mv("Fury Swipes", Normal),
                mv("Slash", Normal),
            ],
        },
        Species::Lickitung => SpeciesData {
            name: "Lickitung",
            glyph: "👅",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(90, 75, 75, 60, 75),
            moves: [
                mv("Lick", Ghost),
                mv("Stomp", Normal),
                mv("Slam", Normal),
                mv("Power Whip", Grass),
            ],
        },
        Species::Chansey => SpeciesData {
            name: "Chansey",
            glyph: "🥚",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(250, 15, 5, 35, 105),
            moves: [
                mv("Pound", Normal),
                mv("Double Slap", Normal),
                mv("Egg Bomb", Normal),
                status("Softboiled", Normal, Effect::HealHalf),
            ],
        },
        Species::Tauros => SpeciesData {
            name: "Tauros",
            glyph: "🐂",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(75, 100, 95, 40, 70),
            moves: [
                mv("Tackle", Normal),
                mv("Horn Attack", Normal),
                mv("Thrash", Normal),
                mv("Giga Impact", Normal),
            ],
        },
        Species::Snorlax => SpeciesData {
            name: "Snorlax",
            glyph: "😴",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(160, 110, 65, 65, 110),
            moves: [
                mv("Body Slam", Normal),
                status("Rest", Psychic, Effect::Rest),
                mv("Crunch", Dark),
                mv("Hyper Beam", Normal),
            ],
        },
        Species::Ditto => SpeciesData {
            name: "Ditto",
            glyph: "🟣",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(48, 48, 48, 48, 48),
            moves: [
                status("Transform", Normal, Effect::Transform),
                mv("Struggle", Normal),
                None,
                None,
            ],
        },
        Species::Eevee => SpeciesData {
            name: "Eevee",
            glyph: "🦊",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(55, 55, 50, 45, 65),
            moves: [
                mv("Tackle", Normal),
                mv("Quick Attack", Normal),
                mv("Bite", Dark),
                mv("Take Down", Normal),
            ],
        },
        Species::Vaporeon => SpeciesData {
            name: "Vaporeon",
            glyph: "💧",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(130, 65, 60, 110, 95),
            moves: [
                mv("Water Gun", Water),
                mv("Quick Attack", Normal),
                mv("Aqua Tail", Water),
                mv("Hydro Pump", Water),
            ],
        },
        Species::Jolteon => SpeciesData {
            name: "Jolteon",
            glyph: "⚡",
            primary_type: Electric,
            secondary_type: None,
            base_stats: stats(65, 65, 60, 110, 95),
            moves: [
                mv("Thunder Shock", Electric),
                mv("Quick Attack", Normal),
                mv("Thunderbolt", Electric),
                mv("Thunder", Electric),
            ],
        },
        Species::Flareon => SpeciesData {
            name: "Flareon",
            glyph: "🔥",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(65, 130, 60, 95, 110),
            moves: [
                mv("Ember", Fire),
                mv("Quick Attack", Normal),
                mv("Fire Fang", Fire),
                mv("Flamethrower", Fire),
            ],
        },
        Species::Porygon => SpeciesData {
            name: "Porygon",
            glyph: "🤖",
            primary_type: Normal,
            secondary_type: None,
            base_stats: stats(65, 60, 70, 85, 75),
            moves: [
                mv("Tackle", Normal),
                mv("Psybeam", Psychic),
                mv("Tri Attack", Normal),
                mv("Hyper Beam", Normal),
            ],
        },

        // --- Electric ---
        Species::Pikachu => SpeciesData {
            name: "Pikachu",
            glyph: "⚡",
            primary_type: Electric,
            secondary_type: None,
            base_stats: stats(35, 55, 40, 50, 50),
            moves: [
                mv("Thunder Shock", Electric),
                mv("Quick Attack", Normal),
                mv("Thunderbolt", Electric),
                mv("Iron Tail", Steel),
            ],
        },
        Species::Magnemite => SpeciesData {
            name: "Magnemite",
            glyph: "🧲",
            primary_type: Electric,
            secondary_type: Some(Steel),
            base_stats: stats(25, 60, 70, 95, 55),
            moves: [
                mv("Thunder Shock", Electric),
                mv("Sonic Boom", Normal),
                mv("Spark", Electric),
                mv("Thunderbolt", Electric),
            ],
        },
        Species::Magneton => SpeciesData {
            name: "Magneton",
            glyph: "🧲",
            primary_type: Electric,
            secondary_type: Some(Steel),
            base_stats: stats(50, 60, 95, 120, 70),
            moves: [
                mv("Thunder Shock", Electric),
                mv("Sonic Boom", Normal),
                mv("Spark", Electric),
                mv("Thunderbolt", Electric),
            ],
        },
        Species::Voltorb => SpeciesData {
            name: "Voltorb",
            glyph: "🔴",
            primary_type: Electric,
            secondary_type: None,
            base_stats: stats(40, 55, 50, 55, 55),
            moves: [
                mv("Tackle", Normal),
                mv("Spark", Electric),
                status("Self-Destruct", Normal, Effect::SelfDestruct),
                mv("Thunderbolt", Electric),
            ],
        },
        Species::Electabuzz => SpeciesData {
            name: "Electabuzz",
            glyph: "⚡",
            primary_type: Electric,
            secondary_type: None,
            base_stats: stats(65, 83, 57, 95, 85),
            moves: [
                mv("Thunder Punch", Electric),
                mv("Spark", Electric),
                mv("Thunderbolt", Electric),
                mv("Thunder", Electric),
            ],
        },

        // --- Ground / Rock ---
        Species::Sandshrew => SpeciesData {
            name: "Sandshrew",
            glyph: "🦔",
            primary_type: Ground,
            secondary_type: None,
            base_stats: stats(50, 75, 85, 20, 30),
            moves: [
                mv("Scratch", Normal),
                status("Sand Attack", Ground, Effect::LowerStat(Defense)),
                mv("Dig", Ground),
                mv("Earthquake", Ground),
            ],
        },
        Species::Sandslash => SpeciesData {
            name: "Sandslash",
            glyph: "🦔",
            primary_type: Ground,
            secondary_type: None,
            base_stats: stats(75, 100, 110, 45, 55),
            moves: [
                mv("Scratch", Normal),
                mv("Slash", Normal),
                mv("Dig", Ground),
                mv("Earthquake", Ground),
            ],
        },
        Species::Diglett => SpeciesData {
            name: "Diglett",
            glyph: "🕳️",
            primary_type: Ground,
            secondary_type: None,
            base_stats: stats(10, 55, 25, 35, 45),
            moves: [
                mv("Scratch", Normal),
                mv("Dig", Ground),
                mv("Mud Slap", Ground),
                mv("Earthquake", Ground),
            ],
        },
        Species::Dugtrio => SpeciesData {
            name: "Dugtrio",
            glyph: "🕳️",
            primary_type: Ground,
            secondary_type: None,
            base_stats: stats(35, 100, 50, 50, 70),
            moves: [
                mv("Scratch", Normal),
                mv("Slash", Normal),
                mv("Mud Slap", Ground),
                mv("Earthquake", Ground),
            ],
        },
        Species::Cubone => SpeciesData {
            name: "Cubone",
            glyph: "💀",
            primary_type: Ground,
            secondary_type: None,
            base_stats: stats(50, 65, 95, 40, 50),
            moves: [
                mv("Bone Club", Ground),
                mv("Headbutt", Normal),
                mv("Bonemerang", Ground),
                mv("Earthquake", Ground),
            ],
        },
        Species::Rhyhorn => SpeciesData {
            name: "Rhyhorn",
            glyph: "🦏",
            primary_type: Ground,
            secondary_type: Some(Rock),
            base_stats: stats(80, 85, 95, 30, 30),
            moves: [
                mv("Horn Attack", Normal),
                mv("Stomp", Normal),
                mv("Rock Blast", Rock),
                mv("Earthquake", Ground),
            ],
        },
        Species::Geodude => SpeciesData {
            name: "Geodude",
            glyph: "🪨",
            primary_type: Rock,
            secondary_type: Some(Ground),
            base_stats: stats(40, 55, 100, 30, 30),
            moves: [
                mv("Tackle", Normal),
                mv("Rock Throw", Rock),
                status("Defense Curl", Normal, Effect::RaiseStat(Defense)),
                mv("Rock Blast", Rock),
            ],
        },
        Species::Graveler => SpeciesData {
            name: "Graveler",
            glyph: "🪨",
            primary_type: Rock,
            secondary_type: Some(Ground),
            base_stats: stats(55, 95, 115, 45, 45),
            moves: [
                mv("Tackle", Normal),
                mv("Rock Throw", Rock),
                mv("Rock Blast", Rock),
                mv("Rock Slide", Rock),
            ],
        },
        Species::Golem => SpeciesData {
            name: "Golem",
            glyph: "🪨",
            primary_type: Rock,
            secondary_type: Some(Ground),
            base_stats: stats(90, 120, 130, 55, 65),
            moves: [
                mv("Earthquake", Ground),
                mv("Rock Slide", Rock),
                mv("Stone Edge", Rock),
                status("Explosion", Normal, Effect::SelfDestruct),
            ],
        },
        Species::Onix => SpeciesData {
            name: "Onix",
            glyph: "🐍",
            primary_type: Rock,
            secondary_type: Some(Ground),
            base_stats: stats(35, 45, 160, 30, 45),
            moves: [
                mv("Rock Throw", Rock),
                mv("Bind", Normal),
                mv("Rock Slide", Rock),
                mv("Dig", Ground),
            ],
        },
        Species::Steelix => SpeciesData {
            name: "Steelix",
            glyph: "🐍",
            primary_type: Steel,
            secondary_type: Some(Ground),
            base_stats: stats(75, 85, 200, 55, 65),
            moves: [
                mv("Iron Tail", Steel),
                mv("Rock Slide", Rock),
                mv("Dig", Ground),
                mv("Crunch", Dark),
            ],
        },
        Species::Aerodactyl => SpeciesData {
            name: "Aerodactyl",
            glyph: "🦖",
            primary_type: Rock,
            secondary_type: Some(Flying),
            base_stats: stats(80, 105, 65, 60, 75),
            moves: [
                mv("Wing Attack", Flying),
                mv("Bite", Dark),
                mv("Rock Slide", Rock),
                mv("Hyper Beam", Normal),
            ],
        },

        // --- Poison / Grass ---
        Species::Zubat => SpeciesData {
            name: "Zubat",
            glyph: "🦇",
            primary_type: Poison,
            secondary_type: Some(Flying),
            base_stats: stats(40, 45, 35, 30, 40),
            moves: [
                mv("Bite", Dark),
                mv("Wing Attack", Flying),
                mv("Air Slash", Flying),
                mv("Poison Fang", Poison),
            ],
        },
        Species::Golbat => SpeciesData {
            name: "Golbat",
            glyph: "🦇",
            primary_type: Poison,
            secondary_type: Some(Flying),
            base_stats: stats(75, 80, 70, 65, 75),
            moves: [
                mv("Bite", Dark),
                mv("Wing Attack", Flying),
                mv("Air Slash", Flying),
                mv("Poison Fang", Poison),
            ],
        },
        Species::Crobat => SpeciesData {
            name: "Crobat",
            glyph: "🦇",
            primary_type: Poison,
            secondary_type: Some(Flying),
            base_stats: stats(85, 90, 80, 70, 80),
            moves: [
                mv("Bite", Dark),
                mv("Wing Attack", Flying),
                mv("Air Slash", Flying),
                mv("Poison Fang", Poison),
            ],
        },
        Species::Oddish => SpeciesData {
            name: "Oddish",
            glyph: "🌱",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(45, 50, 55, 75, 65),
            moves: [
                mv("Absorb", Grass),
                mv("Acid", Poison),
                status("Poison Powder", Poison, Effect::Poison),
                mv("Mega Drain", Grass),
            ],
        },
        Species::Gloom => SpeciesData {
            name: "Gloom",
            glyph: "🌱",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(60, 65, 70, 85, 75),
            moves: [
                mv("Absorb", Grass),
                mv("Acid", Poison),
                status("Poison Powder", Poison, Effect::Poison),
                mv("Mega Drain", Grass),
            ],
        },
        Species::Vileplume => SpeciesData {
            name: "Vileplume",
            glyph: "🌺",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(75, 80, 85, 110, 90),
            moves: [
                mv("Mega Drain", Grass),
                mv("Acid", Poison),
                mv("Petal Dance", Grass),
                mv("Sludge Bomb", Poison),
            ],
        },
        Species::Bellsprout => SpeciesData {
            name: "Bellsprout",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(50, 75, 35, 70, 30),
            moves: [
                mv("Vine Whip", Grass),
                mv("Acid", Poison),
                mv("Wrap", Normal),
                mv("Razor Leaf", Grass),
            ],
        },
        Species::Weepinbell => SpeciesData {
            name: "Weepinbell",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(65, 90, 50, 85, 45),
            moves: [
                mv("Vine Whip", Grass),
                mv("Acid", Poison),
                mv("Wrap", Normal),
                mv("Razor Leaf", Grass),
            ],
        },
        Species::Victreebel => SpeciesData {
            name: "Victreebel",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: Some(Poison),
            base_stats: stats(85, 105, 65, 100, 70),
            moves: [
                mv("Razor Leaf", Grass),
                mv("Sludge Bomb", Poison),
                mv("Solar Beam", Grass),
                mv("Leaf Blade", Grass),
            ],
        },
        Species::Tangela => SpeciesData {
            name: "Tangela",
            glyph: "🌿",
            primary_type: Grass,
            secondary_type: None,
            base_stats: stats(65, 75, 115, 100, 40),
            moves: [
                mv("Vine Whip", Grass),
                mv("Bind", Normal),
                mv("Mega Drain", Grass),
                mv("Power Whip", Grass),
            ],
        },
        Species::Exeggcute => SpeciesData {
            name: "Exeggcute",
            glyph: "🥚",
            primary_type: Grass,
            secondary_type: Some(Psychic),
            base_stats: stats(60, 60, 80, 60, 45),
            moves: [
                mv("Barrage", Normal),
                mv("Confusion", Psychic),
                status("Leech Seed", Grass, Effect::HealQuarter),
                mv("Psychic", Psychic),
            ],
        },

        // --- Fire ---
        Species::Vulpix => SpeciesData {
            name: "Vulpix",
            glyph: "🦊",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(38, 41, 40, 50, 65),
            moves: [
                mv("Ember", Fire),
                mv("Quick Attack", Normal),
                mv("Flame Burst", Fire),
                mv("Flamethrower", Fire),
            ],
        },
        Species::Ninetales => SpeciesData {
            name: "Ninetales",
            glyph: "🦊",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(73, 76, 75, 81, 100),
            moves: [
                mv("Ember", Fire),
                mv("Quick Attack", Normal),
                mv("Flamethrower", Fire),
                mv("Fire Blast", Fire),
            ],
        },
        Species::Growlithe => SpeciesData {
            name: "Growlithe",
            glyph: "🐕",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(55, 70, 45, 70, 50),
            moves: [
                mv("Ember", Fire),
                mv("Bite", Dark),
                mv("Flame Wheel", Fire),
                mv("Fire Fang", Fire),
            ],
        },
        Species::Arcanine => SpeciesData {
            name: "Arcanine",
            glyph: "🐕",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(90, 110, 80, 100, 80),
            moves: [
                mv("Flame Wheel", Fire),
                mv("Bite", Dark),
                mv("Flamethrower", Fire),
                mv("Fire Blast", Fire),
            ],
        },
        Species::Ponyta => SpeciesData {
            name: "Ponyta",
            glyph: "🐴",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(50, 85, 55, 65, 65),
            moves: [
                mv("Ember", Fire),
                mv("Stomp", Normal),
                mv("Flame Charge", Fire),
                mv("Fire Blast", Fire),
            ],
        },
        Species::Rapidash => SpeciesData {
            name: "Rapidash",
            glyph: "🐴",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(65, 100, 70, 80, 80),
            moves: [
                mv("Ember", Fire),
                mv("Stomp", Normal),
                mv("Flame Charge", Fire),
                mv("Fire Blast", Fire),
            ],
        },
        Species::Magmar => SpeciesData {
            name: "Magmar",
            glyph: "🔥",
            primary_type: Fire,
            secondary_type: None,
            base_stats: stats(65, 95, 57, 100, 85),
            moves: [
                mv("Fire Punch", Fire),
                mv("Ember", Fire),
                mv("Flamethrower", Fire),
                mv("Fire Blast", Fire),
            ],
        },

        // --- Water ---
        Species::Psyduck => SpeciesData {
            name: "Psyduck",
            glyph: "🦆",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(50, 52, 48, 65, 50),
            moves: [
                mv("Scratch", Normal),
                mv("Water Gun", Water),
                mv("Confusion", Psychic),
                mv("Aqua Tail", Water),
            ],
        },
        Species::Golduck => SpeciesData {
            name: "Golduck",
            glyph: "🦆",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(80, 82, 78, 95, 80),
            moves: [
                mv("Water Gun", Water),
                mv("Confusion", Psychic),
                mv("Aqua Tail", Water),
                mv("Hydro Pump", Water),
            ],
        },
        Species::Poliwag => SpeciesData {
            name: "Poliwag",
            glyph: "💧",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(40, 50, 40, 40, 40),
            moves: [
                mv("Water Gun", Water),
                mv("Bubble", Water),
                status("Hypnosis", Psychic, Effect::Sleep),
                mv("Bubble Beam", Water),
            ],
        },
        Species::Poliwhirl => SpeciesData {
            name: "Poliwhirl",
            glyph: "💧",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(65, 65, 65, 50, 50),
            moves: [
                mv("Water Gun", Water),
                mv("Bubble Beam", Water),
                status("Hypnosis", Psychic, Effect::Sleep),
                mv("Body Slam", Normal),
            ],
        },
        Species::Poliwrath => SpeciesData {
            name: "Poliwrath",
            glyph: "💧",
            primary_type: Water,
            secondary_type: Some(Fighting),
            base_stats: stats(90, 95, 95, 70, 90),
            moves: [
                mv("Bubble Beam", Water),
                mv("Seismic Toss", Fighting),
                mv("Body Slam", Normal),
                mv("Hydro Pump", Water),
            ],
        },
        Species::Tentacool => SpeciesData {
            name: "Tentacool",
            glyph: "🪼",
            primary_type: Water,
            secondary_type: Some(Poison),
            base_stats: stats(40, 40, 35, 50, 100),
            moves: [
                mv("Acid", Poison),
                mv("Poison Sting", Poison),
                mv("Water Gun", Water),
                mv("Wrap", Normal),
            ],
        },
        Species::Tentacruel => SpeciesData {
            name: "Tentacruel",
            glyph: "🪼",
            primary_type: Water,
            secondary_type: Some(Poison),
            base_stats: stats(80, 70, 65, 80, 120),
            moves: [
                mv("Acid", Poison),
                mv("Water Gun", Water),
                mv("Sludge Bomb", Poison),
                mv("Hydro Pump", Water),
            ],
        },
        Species::Slowpoke => SpeciesData {
            name: "Slowpoke",
            glyph: "🐚",
            primary_type: Water,
            secondary_type: Some(Psychic),
            base_stats: stats(90, 65, 65, 40, 40),
            moves: [
                mv("Tackle", Normal),
                mv("Water Gun", Water),
                mv("Confusion", Psychic),
                mv("Psychic", Psychic),
            ],
        },
        Species::Shellder => SpeciesData {
            name: "Shellder",
            glyph: "🐚",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(30, 65, 100, 45, 25),
            moves: [
                mv("Tackle", Normal),
                mv("Water Gun", Water),
                mv("Clamp", Water),
                mv("Ice Beam", Ice),
            ],
        },
        Species::Krabby => SpeciesData {
            name: "Krabby",
            glyph: "🦀",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(30, 50, 90, 25, 25),
            moves: [
                mv("Bubble", Water),
                mv("Vice Grip", Normal),
                mv("Crabhammer", Water),
                mv("Stomp", Normal),
            ],
        },
        Species::Horsea => SpeciesData {
            name: "Horsea",
            glyph: "🐴",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(30, 40, 70, 70, 25),
            moves: [
                mv("Bubble", Water),
                mv("Water Gun", Water),
                mv("Twister", Dragon),
                mv("Hydro Pump", Water),
            ],
        },
        Species::Goldeen => SpeciesData {
            name: "Goldeen",
            glyph: "🐠",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(45, 48, 60, 35, 50),
            moves: [
                mv("Peck", Flying),
                mv("Water Gun", Water),
                mv("Horn Attack", Normal),
                mv("Waterfall", Water),
            ],
        },
        Species::Staryu => SpeciesData {
            name: "Staryu",
            glyph: "⭐",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(30, 45, 55, 70, 55),
            moves: [
                mv("Tackle", Normal),
                mv("Water Gun", Water),
                mv("Swift", Normal),
                mv("Hydro Pump", Water),
            ],
        },
        Species::Magikarp => SpeciesData {
            name: "Magikarp",
            glyph: "🐟",
            primary_type: Water,
            secondary_type: None,
            base_stats: stats(20, 10, 55, 15, 20),
            moves: [
                status("Splash", Normal, Effect::Flavor),
                mv("Tackle", Normal),
                None,
                None,
            ],
        },
        Species::Gyarados => SpeciesData {
            name: "Gyarados",
            glyph: "🐉",
            primary_type: Water,
            secondary_type: Some(Flying),
            base_stats: stats(105, 125, 79, 60, 100),
            moves: [
                mv("Hydro Pump", Water),
                mv("Bite", Dark),
                mv("Ice Beam", Ice),
                status("Dragon Dance", Dragon, Effect::RaiseStat(Offense)),
            ],
        },
        Species::Lapras => SpeciesData {
            name: "Lapras",
            glyph: "🐋",
            primary_type: Water,
            secondary_type: Some(Ice),
            base_stats: stats(130, 85, 80, 85, 95),
            moves: [
                mv("Water Gun", Water),
                mv("Ice Beam", Ice),
                mv("Body Slam", Normal),
                mv("Hydro Pump", Water),
            ],
        },

        // --- Fighting ---
        Species::Mankey => SpeciesData {
            name: "Mankey",
            glyph: "🐵",
            primary_type: Fighting,
            secondary_type: None,
            base_stats: stats(40, 80, 35, 35, 45),
            moves: [
                mv("Scratch", Normal),
                mv("Karate Chop", Fighting),
                mv("Fury Swipes", Normal),
                mv("Cross Chop", Fighting),
            ],
        },
        Species::Primeape => SpeciesData {
            name: "Primeape",
            glyph: "🐵",
            primary_type: Fighting,
            secondary_type: None,
            base_stats: stats(65, 105, 60, 60, 70),
            moves: [
                mv("Karate Chop", Fighting),
                mv("Fury Swipes", Normal),
                mv("Cross Chop", Fighting),
                mv("Thrash", Normal),
            ],
        },
        Species::Machop => SpeciesData {
            name: "Machop",
            glyph: "💪",
            primary_type: Fighting,
            secondary_type: None,
            base_stats: stats(70, 80, 50, 35, 35),
            moves: [
                mv("Karate Chop", Fighting),
                mv("Low Kick", Fighting),
                status("Focus Energy", Normal, Effect::RaiseStat(Offense)),
                mv("Seismic Toss", Fighting),
            ],
        },
        Species::Machoke => SpeciesData {
            name: "Machoke",
            glyph: "💪",
            primary_type: Fighting,
            secondary_type: None,
            base_stats: stats(80, 100, 70, 50, 60),
            moves: [
                mv("Karate Chop", Fighting),
                mv("Low Kick", Fighting),
                mv("Seismic Toss", Fighting),
                mv("Cross Chop", Fighting),
            ],
        },
        Species::Machamp => SpeciesData {
            name: "Machamp",
            glyph: "💪",
            primary_type: Fighting,
            secondary_type: None,
            base_stats: stats(110, 130, 80, 65, 85),
            moves: [
                mv("Dynamic Punch", Fighting),
                mv("Cross Chop", Fighting),
                mv("Stone Edge", Rock),
                mv("Earthquake", Ground),
            ],
        },

        // --- Psychic ---
        Species::Abra => SpeciesData {
            name: "Abra",
            glyph: "🔮",
            primary_type: Psychic,
            secondary_type: None,
            base_stats: stats(25, 20, 15, 105, 55),
            moves: [
                status("Teleport", Psychic, Effect::Teleport),
                mv("Confusion", Psychic),
                mv("Psybeam", Psychic),
                mv("Psychic", Psychic),
            ],
        },
        Species::Drowzee => SpeciesData {
            name: "Drowzee",
            glyph: "😴",
            primary_type: Psychic,
            secondary_type: None,
            base_stats: stats(60, 48, 45, 43, 90),
            moves: [
                mv("Pound", Normal),
                status("Hypnosis", Psychic, Effect::Sleep),
                mv("Confusion", Psychic),
                mv("Psychic", Psychic),
            ],
        },
        Species::Mewtwo => SpeciesData {
            name: "Mewtwo",
            glyph: "🧬",
            primary_type: Psychic,
            secondary_type: None,
            base_stats: stats(150, 110, 90, 154, 90),
            moves: [
                mv("Psychic", Psychic),
                mv("Shadow Ball", Ghost),
                mv("Ice Beam", Ice),
                mv("Aura Sphere", Fighting),
            ],
        },
        Species::Mew => SpeciesData {
            name: "Mew",
            glyph: "✨",
            primary_type: Psychic,
            secondary_type: None,
            base_stats: stats(100, 100, 100, 100, 100),
            moves: [
                mv("Psychic", Psychic),
                status("Recover", Normal, Effect::HealFull),
                status("Transform", Normal, Effect::Transform),
                mv("Ancient Power", Rock),
            ],
        },

        // --- Ghost ---
        Species::Gastly => SpeciesData {
            name: "Gastly",
            glyph: "👻",
            primary_type: Ghost,
            secondary_type: Some(Poison),
            base_stats: stats(30, 35, 30, 100, 35),
            moves: [
                mv("Lick", Ghost),
                status("Hypnosis", Psychic, Effect::Sleep),
                mv("Shadow Ball", Ghost),
                mv("Night Shade", Ghost),
            ],
        },
        Species::Haunter => SpeciesData {
            name: "Haunter",
            glyph: "👻",
            primary_type: Ghost,
            secondary_type: Some(Poison),
            base_stats: stats(45, 50, 45, 115, 55),
            moves: [
                mv("Lick", Ghost),
                status("Hypnosis", Psychic, Effect::Sleep),
                mv("Shadow Ball", Ghost),
                mv("Night Shade", Ghost),
            ],
        },
        Species::Gengar => SpeciesData {
            name: "Gengar",
            glyph: "👻",
            primary_type: Ghost,
            secondary_type: Some(Poison),
            base_stats: stats(70, 65, 60, 130, 75),
            moves: [
                mv("Shadow Ball", Ghost),
                mv("Sludge Bomb", Poison),
                mv("Dark Pulse", Dark),
                status("Hypnosis", Psychic, Effect::Sleep),
            ],
        },

        // --- Dragon ---
        Species::Dragonite => SpeciesData {
            name: "Dragonite",
            glyph: "🐉",
            primary_type: Dragon,
            secondary_type: Some(Flying),
            base_stats: stats(110, 134, 95, 100, 100),
            moves: [
                mv("Dragon Claw", Dragon),
                mv("Wing Attack", Flying),
                mv("Thunder", Electric),
                mv("Outrage", Dragon),
            ],
        },
    }
}

/// How a species evolves when its experience crosses a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evolution {
    /// Regular table entry: new name and secondary type, flat stat bonus on
    /// top of the current stats.
    NextForm {
        into: Species,
        secondary: Option<PokemonType>,
    },
    /// Bespoke: the evolved form replaces types, stats and moves wholesale
    /// with its own catalog block.
    FullForm { into: Species },
    /// Bespoke: one of several full forms, chosen uniformly at random.
    Branch { options: [Species; 3] },
}

/// Evolution table. `None` means the species is at a terminal form and is
/// strengthened in place instead.
pub fn evolution_for(species: Species) -> Option<Evolution> {
    use PokemonType::*;
    use Species::*;

    let next = |into, secondary| Some(Evolution::NextForm { into, secondary });

    match species {
        Charmander => next(Charmeleon, None),
        Charmeleon => next(Charizard, Some(Flying)),
        Squirtle => next(Wartortle, None),
        Wartortle => next(Blastoise, None),
        Bulbasaur => next(Ivysaur, Some(Poison)),
        Ivysaur => next(Venusaur, Some(Poison)),
        Rattata => next(Raticate, None),
        Pidgey => next(Pidgeotto, Some(Flying)),
        Pidgeotto => next(Pidgeot, Some(Flying)),
        Caterpie => next(Metapod, None),
        Metapod => next(Butterfree, Some(Flying)),
        Weedle => next(Kakuna, Some(Poison)),
        Kakuna => next(Beedrill, Some(Poison)),
        Geodude => next(Graveler, Some(Ground)),
        Graveler => next(Golem, Some(Ground)),
        Zubat => next(Golbat, Some(Flying)),
        Golbat => next(Crobat, Some(Flying)),
        Oddish => next(Gloom, Some(Poison)),
        Gloom => next(Vileplume, Some(Poison)),
        Bellsprout => next(Weepinbell, Some(Poison)),
        Weepinbell => next(Victreebel, Some(Poison)),
        Machop => next(Machoke, None),
        Machoke => next(Machamp, None),
        Mankey => next(Primeape, None),
        Gastly => next(Haunter, Some(Poison)),
        Haunter => next(Gengar, Some(Poison)),
        Onix => next(Steelix, Some(Ground)),
        Growlithe => next(Arcanine, None),
        Vulpix => next(Ninetales, None),
        Ponyta => next(Rapidash, None),
        Sandshrew => next(Sandslash, None),
        Diglett => next(Dugtrio, None),
        Meowth => next(Persian, None),
        Psyduck => next(Golduck, None),
        Poliwag => next(Poliwhirl, None),
        Poliwhirl => next(Poliwrath, Some(Fighting)),
        Tentacool => next(Tentacruel, Some(Poison)),
        Magnemite => next(Magneton, Some(Steel)),
        Spearow => next(Fearow, Some(Flying)),
        // Bespoke rules: Magikarp jumps straight to its full evolved block,
        // Eevee branches into one of three elemental forms.
        Magikarp => Some(Evolution::FullForm { into: Gyarados }),
        Eevee => Some(Evolution::Branch {
            options: [Vaporeon, Jolteon, Flareon],
        }),
        _ => None,
    }
}
