//! Meta-progression: experience, evolution, the legendary gate and the
//! periodic theft event.

use crate::catalog::{self, Evolution};
use crate::combatant::Combatant;
use crate::engine::state::{BattleEvent, TurnRng};
use serde::{Deserialize, Serialize};

/// Evolution (or strengthening) triggers whenever experience reaches a
/// multiple of this.
pub const EVOLUTION_EXP_INTERVAL: u32 = 3;

/// Flat bonus to max HP and all four stats on a mapped evolution.
pub const EVOLUTION_STAT_BONUS: u16 = 15;

/// Smaller flat bonus applied in place at a terminal form.
pub const TERMINAL_STAT_BONUS: u16 = 5;

/// Experience at which the legendary gate arms.
pub const LEGENDARY_EXP_THRESHOLD: u32 = 20;

// The theft event fires every 4..=6 battles; the interval is redrawn after
// each trigger.
const THEFT_INTERVAL_MIN: u8 = 4;
const THEFT_INTERVAL_SPREAD: u8 = 3;

/// Session-wide progression state, threaded through every engine transition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    pub battles_won: u32,
    pub total_battles: u32,
    /// One-shot: armed when experience reaches the threshold, consumed when
    /// the legendary challenge is accepted.
    pub gate_armed: bool,
    /// One-shot: never resets within a session; unlocks the final-evolution
    /// encounter pool.
    pub legendary_defeated: bool,
    battles_until_theft: u8,
}

impl Progression {
    pub fn new(rng: &mut TurnRng) -> Self {
        Progression {
            battles_won: 0,
            total_battles: 0,
            gate_armed: false,
            legendary_defeated: false,
            battles_until_theft: draw_theft_interval(rng),
        }
    }

    /// Count a concluded encounter (victory or capture) toward totals and
    /// the theft countdown.
    pub fn record_battle_end(&mut self) {
        self.total_battles += 1;
        self.battles_until_theft = self.battles_until_theft.saturating_sub(1);
    }

    pub fn record_victory(&mut self) {
        self.battles_won += 1;
    }

    pub fn theft_due(&self) -> bool {
        self.battles_until_theft == 0
    }

    pub fn rearm_theft(&mut self, rng: &mut TurnRng) {
        self.battles_until_theft = draw_theft_interval(rng);
    }
}

#[cfg(test)]
impl Progression {
    pub(crate) fn set_theft_countdown_for_test(&mut self, battles: u8) {
        self.battles_until_theft = battles;
    }
}

fn draw_theft_interval(rng: &mut TurnRng) -> u8 {
    THEFT_INTERVAL_MIN + rng.next_outcome("theft interval") % THEFT_INTERVAL_SPREAD
}

/// Whether the given (already incremented) experience value triggers an
/// evolution or strengthening.
pub fn evolution_pending(exp: u32) -> bool {
    exp > 0 && exp % EVOLUTION_EXP_INTERVAL == 0
}

/// Commit a pending evolution on the combatant. Mapped forms change name and
/// secondary type and gain the flat bonus; the two bespoke rules adopt a
/// full catalog block; terminal forms are strengthened in place.
pub fn commit_evolution(
    combatant: &mut Combatant,
    events: &mut Vec<BattleEvent>,
    rng: &mut TurnRng,
) {
    let from = combatant.name().to_string();

    match catalog::evolution_for(combatant.species) {
        Some(Evolution::NextForm { into, secondary }) => {
            combatant.species = into;
            combatant.secondary_type = secondary;
            combatant.apply_flat_bonus(EVOLUTION_STAT_BONUS);
            events.push(BattleEvent::Evolved {
                from,
                into: into.name().to_string(),
            });
            events.push(BattleEvent::StatsRose {
                bonus: EVOLUTION_STAT_BONUS,
            });
        }
        Some(Evolution::FullForm { into }) => {
            combatant.adopt_full_form(into);
            events.push(BattleEvent::Evolved {
                from,
                into: into.name().to_string(),
            });
        }
        Some(Evolution::Branch { options }) => {
            let into = options[rng.next_index("evolution branch", options.len())];
            combatant.adopt_full_form(into);
            events.push(BattleEvent::Evolved {
                from,
                into: into.name().to_string(),
            });
        }
        None => {
            combatant.apply_flat_bonus(TERMINAL_STAT_BONUS);
            events.push(BattleEvent::MaxEvolution { name: from });
            events.push(BattleEvent::StatsRose {
                bonus: TERMINAL_STAT_BONUS,
            });
        }
    }
}
