use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
}

/// Which stat pair a stat-changing move touches. Offense covers attack and
/// sp_attack together, Defense covers defense and sp_defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum StatPair {
    Offense,
    Defense,
}

/// The resolvable effect of a move, attached to the move definition in the
/// catalog. Damaging moves carry `Damage`; everything else is a status move
/// dispatched by tag, never by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveEffect {
    Damage,
    RaiseStat(StatPair),
    LowerStat(StatPair),
    Sleep,
    Poison,
    HealFull,
    HealHalf,
    HealQuarter,
    Rest,
    SelfDestruct,
    Teleport,
    Transform,
    Flavor,
}

impl MoveEffect {
    pub fn is_damaging(&self) -> bool {
        matches!(self, MoveEffect::Damage)
    }
}

/// A move as defined in the species catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: PokemonType,
    pub effect: MoveEffect,
}

/// Immutable catalog entry for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesData {
    pub name: &'static str,
    pub glyph: &'static str,
    pub primary_type: PokemonType,
    pub secondary_type: Option<PokemonType>,
    pub base_stats: BaseStats,
    pub moves: [Option<MoveData>; 4],
}

impl SpeciesData {
    /// Moves actually defined for this species, in slot order.
    pub fn move_list(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.iter().flatten()
    }
}
