//! Damage resolution for damaging moves.

use crate::combatant::{Combatant, MoveInstance};
use crate::engine::state::TurnRng;
use schema::PokemonType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    pub damage: u16,
    pub effectiveness: f32,
}

/// Resolve a damaging move.
///
/// `enemy_power` is the difficulty's enemy-damage multiplier when the wild
/// side attacks, 1.0 for the player. The roll consumes one random value
/// (variance 0..=9).
pub fn damage_roll(
    attacker: &Combatant,
    defender: &Combatant,
    move_: &MoveInstance,
    enemy_power: f32,
    rng: &mut TurnRng,
) -> DamageRoll {
    // Special-category move types read the special stat pair, everything
    // else reads the physical pair.
    let (attack_stat, defense_stat) = if move_.move_type.is_special() {
        (attacker.sp_attack, defender.sp_defense)
    } else {
        (attacker.attack, defender.defense)
    };

    let variance = (rng.next_outcome("damage variance") % 10) as i32;
    // floor(attack * 0.4) - floor(defense * 0.2) + random(0..10), minimum 1
    let mut base = (attack_stat as i32 * 2) / 5 - (defense_stat as i32) / 5 + variance;
    base = base.max(1);

    if enemy_power != 1.0 {
        base = ((base as f32) * enemy_power).floor() as i32;
    }

    let stab = if attacker.has_stab(move_.move_type) {
        1.5
    } else {
        1.0
    };
    let effectiveness = PokemonType::dual_effectiveness(
        move_.move_type,
        defender.primary_type,
        defender.secondary_type,
    );

    // A 0x matchup short-circuits the minimum-1 rule; anything else lands
    // for at least 1.
    let damage = if effectiveness == 0.0 {
        0
    } else {
        ((base as f32 * effectiveness * stab).floor() as i64).max(1) as u16
    };

    DamageRoll {
        damage,
        effectiveness,
    }
}

/// Damage dealt to the opponent by a self-destructing move, before the cap
/// at the opponent's remaining HP.
pub fn self_destruct_damage(attacker: &Combatant) -> u16 {
    attacker.attack.saturating_mul(3) / 2
}
