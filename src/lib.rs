//! Wildgrass Battle Engine
//!
//! The rules engine of a single-player wild-encounter battler: turn
//! resolution, type effectiveness, status effects, capture rolls, evolution
//! and meta-progression, exposed as a synchronous state machine. Rendering,
//! audio and input focus are the host's concern; the host drives the engine
//! with intents and owns the timers behind every deferred continuation.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod combatant;
pub mod engine;
pub mod errors;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Core data definitions and static enums.
pub use schema::{
    BaseStats,
    MoveData,
    MoveEffect,
    PokemonType,
    Species,
    SpeciesData,
    StatPair,
};

// --- From this crate's modules (`src/`) ---

// Core runtime types for a battle.
pub use combatant::{Combatant, FormSnapshot, MoveInstance, Roster};

// The session state machine and its vocabulary.
pub use engine::session::{GameSession, Intent};
pub use engine::state::{
    ApplyOutcome, BattleEvent, ContinuationAction, Difficulty, EventLog, GamePhase,
    PendingContinuation, TurnRng,
};

// Primary data access functions.
pub use catalog::{evolution_for, get_species_data, Evolution};

// Crate-specific error type.
pub use errors::IntentError;
