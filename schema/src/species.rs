use serde::{Deserialize, Serialize};
use std::fmt;

/// Every species the engine can instantiate: the three starters and their
/// lines, the wild encounter pool and its evolved forms, the final-evolution
/// pool, and the two scripted encounters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub enum Species {
    // Starter lines
    Bulbasaur,
    Ivysaur,
    Venusaur,
    Charmander,
    Charmeleon,
    Charizard,
    Squirtle,
    Wartortle,
    Blastoise,

    // Bug lines
    Caterpie,
    Metapod,
    Butterfree,
    Weedle,
    Kakuna,
    Beedrill,
    Paras,
    Venonat,
    Scyther,
    Pinsir,

    // Birds
    Pidgey,
    Pidgeotto,
    Pidgeot,
    Spearow,
    Fearow,

    // Normal
    Rattata,
    Raticate,
    Meowth,
    Persian,
    Lickitung,
    Chansey,
    Tauros,
    Snorlax,
    Ditto,
    Eevee,
    Vaporeon,
    Jolteon,
    Flareon,
    Porygon,

    // Electric
    Pikachu,
    Magnemite,
    Magneton,
    Voltorb,
    Electabuzz,

    // Ground / Rock
    Sandshrew,
    Sandslash,
    Diglett,
    Dugtrio,
    Cubone,
    Rhyhorn,
    Geodude,
    Graveler,
    Golem,
    Onix,
    Steelix,
    Aerodactyl,

    // Poison / Grass
    Zubat,
    Golbat,
    Crobat,
    Oddish,
    Gloom,
    Vileplume,
    Bellsprout,
    Weepinbell,
    Victreebel,
    Tangela,
    Exeggcute,

    // Fire
    Vulpix,
    Ninetales,
    Growlithe,
    Arcanine,
    Ponyta,
    Rapidash,
    Magmar,

    // Water
    Psyduck,
    Golduck,
    Poliwag,
    Poliwhirl,
    Poliwrath,
    Tentacool,
    Tentacruel,
    Slowpoke,
    Shellder,
    Krabby,
    Horsea,
    Goldeen,
    Staryu,
    Magikarp,
    Gyarados,
    Lapras,

    // Fighting
    Mankey,
    Primeape,
    Machop,
    Machoke,
    Machamp,

    // Psychic
    Abra,
    Drowzee,
    Mewtwo,
    Mew,

    // Ghost
    Gastly,
    Haunter,
    Gengar,

    // Dragon
    Dragonite,
}

impl Species {
    /// Display name. Every variant ident is already the display form.
    pub fn name(&self) -> &'static str {
        use Species::*;
        match self {
            Bulbasaur => "Bulbasaur",
            Ivysaur => "Ivysaur",
            Venusaur => "Venusaur",
            Charmander => "Charmander",
            Charmeleon => "Charmeleon",
            Charizard => "Charizard",
            Squirtle => "Squirtle",
            Wartortle => "Wartortle",
            Blastoise => "Blastoise",
            Caterpie => "Caterpie",
            Metapod => "Metapod",
            Butterfree => "Butterfree",
            Weedle => "Weedle",
            Kakuna => "Kakuna",
            Beedrill => "Beedrill",
            Paras => "Paras",
            Venonat => "Venonat",
            Scyther => "Scyther",
            Pinsir => "Pinsir",
            Pidgey => "Pidgey",
            Pidgeotto => "Pidgeotto",
            Pidgeot => "Pidgeot",
            Spearow => "Spearow",
            Fearow => "Fearow",
            Rattata => "Rattata",
            Raticate => "Raticate",
            Meowth => "Meowth",
            Persian => "Persian",
            Lickitung => "Lickitung",
            Chansey => "Chansey",
            Tauros => "Tauros",
            Snorlax => "Snorlax",
            Ditto => "Ditto",
            Eevee => "Eevee",
            Vaporeon => "Vaporeon",
            Jolteon => "Jolteon",
            Flareon => "Flareon",
            Porygon => "Porygon",
            Pikachu => "Pikachu",
            Magnemite => "Magnemite",
            Magneton => "Magneton",
            Voltorb => "Voltorb",
            Electabuzz => "Electabuzz",
            Sandshrew => "Sandshrew",
            Sandslash => "Sandslash",
            Diglett => "Diglett",
            Dugtrio => "Dugtrio",
            Cubone => "Cubone",
            Rhyhorn => "Rhyhorn",
            Geodude => "Geodude",
            Graveler => "Graveler",
            Golem => "Golem",
            Onix => "Onix",
            Steelix => "Steelix",
            Aerodactyl => "Aerodactyl",
            Zubat => "Zubat",
            Golbat => "Golbat",
            Crobat => "Crobat",
            Oddish => "Oddish",
            Gloom => "Gloom",
            Vileplume => "Vileplume",
            Bellsprout => "Bellsprout",
            Weepinbell => "Weepinbell",
            Victreebel => "Victreebel",
            Tangela => "Tangela",
            Exeggcute => "Exeggcute",
            Vulpix => "Vulpix",
            Ninetales => "Ninetales",
            Growlithe => "Growlithe",
            Arcanine => "Arcanine",
            Ponyta => "Ponyta",
            Rapidash => "Rapidash",
            Magmar => "Magmar",
            Psyduck => "Psyduck",
            Golduck => "Golduck",
            Poliwag => "Poliwag",
            Poliwhirl => "Poliwhirl",
            Poliwrath => "Poliwrath",
            Tentacool => "Tentacool",
            Tentacruel => "Tentacruel",
            Slowpoke => "Slowpoke",
            Shellder => "Shellder",
            Krabby => "Krabby",
            Horsea => "Horsea",
            Goldeen => "Goldeen",
            Staryu => "Staryu",
            Magikarp => "Magikarp",
            Gyarados => "Gyarados",
            Lapras => "Lapras",
            Mankey => "Mankey",
            Primeape => "Primeape",
            Machop => "Machop",
            Machoke => "Machoke",
            Machamp => "Machamp",
            Abra => "Abra",
            Drowzee => "Drowzee",
            Mewtwo => "Mewtwo",
            Mew => "Mew",
            Gastly => "Gastly",
            Haunter => "Haunter",
            Gengar => "Gengar",
            Dragonite => "Dragonite",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Species> {
        ALL_SPECIES
            .iter()
            .copied()
            .find(|species| species.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Every variant, in declaration order. Kept alongside the enum so
/// `from_name` and exhaustiveness checks stay total.
pub const ALL_SPECIES: [Species; 102] = {
    use Species::*;
    [
        Bulbasaur, Ivysaur, Venusaur, Charmander, Charmeleon, Charizard, Squirtle, Wartortle,
        Blastoise, Caterpie, Metapod, Butterfree, Weedle, Kakuna, Beedrill, Paras, Venonat,
        Scyther, Pinsir, Pidgey, Pidgeotto, Pidgeot, Spearow, Fearow, Rattata, Raticate, Meowth,
        Persian, Lickitung, Chansey, Tauros, Snorlax, Ditto, Eevee, Vaporeon, Jolteon, Flareon,
        Porygon, Pikachu, Magnemite, Magneton, Voltorb, Electabuzz, Sandshrew, Sandslash, Diglett,
        Dugtrio, Cubone, Rhyhorn, Geodude, Graveler, Golem, Onix, Steelix, Aerodactyl, Zubat,
        Golbat, Crobat, Oddish, Gloom, Vileplume, Bellsprout, Weepinbell, Victreebel, Tangela,
        Exeggcute, Vulpix, Ninetales, Growlithe, Arcanine, Ponyta, Rapidash, Magmar, Psyduck,
        Golduck, Poliwag, Poliwhirl, Poliwrath, Tentacool, Tentacruel, Slowpoke, Shellder, Krabby,
        Horsea, Goldeen, Staryu, Magikarp, Gyarados, Lapras, Mankey, Primeape, Machop, Machoke,
        Machamp, Abra, Drowzee, Mewtwo, Mew, Gastly, Haunter, Gengar, Dragonite,
    ]
};
