//! Status-move resolution, dispatched on the catalog's `MoveEffect` tag.

use crate::combatant::Combatant;
use crate::engine::damage::self_destruct_damage;
use crate::engine::state::{BattleEvent, TurnRng};
use schema::MoveEffect;

/// Flat start-of-turn poison damage.
pub const POISON_DAMAGE: u16 = 10;

/// Stat delta applied by stat-raising and stat-lowering moves.
pub const STAT_MOVE_DELTA: u16 = 10;

/// Sleep inflicted by Rest lasts this many of the user's turns.
pub const REST_SLEEP_TURNS: u8 = 2;

/// What a status move did, beyond the events it emitted. The session decides
/// faint and encounter-end outcomes from these flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusResolution {
    /// The user zeroed its own HP (self-destruct).
    pub user_fainted: bool,
    /// The opponent's HP reached zero.
    pub foe_fainted: bool,
    /// The user fled; the encounter is over with no victor.
    pub teleported: bool,
}

/// Apply a status move from `user` against `foe`. Targets are fixed per
/// effect: raises, heals, rest, transform and teleport act on the user;
/// lowers, sleep and poison act on the opponent.
pub fn apply_status_move(
    user: &mut Combatant,
    foe: &mut Combatant,
    effect: MoveEffect,
    events: &mut Vec<BattleEvent>,
    rng: &mut TurnRng,
) -> StatusResolution {
    let mut resolution = StatusResolution::default();

    match effect {
        MoveEffect::Damage => {
            debug_assert!(false, "damaging moves are resolved by the damage module");
        }
        MoveEffect::RaiseStat(pair) => {
            user.raise_stat_pair(pair, STAT_MOVE_DELTA);
            events.push(BattleEvent::StatRaised {
                target: user.name().to_string(),
                pair,
            });
        }
        MoveEffect::LowerStat(pair) => {
            foe.lower_stat_pair(pair, STAT_MOVE_DELTA);
            events.push(BattleEvent::StatLowered {
                target: foe.name().to_string(),
                pair,
            });
        }
        MoveEffect::Sleep => {
            let turns = 1 + rng.next_outcome("sleep duration") % 2;
            foe.asleep = turns;
            events.push(BattleEvent::FellAsleep {
                target: foe.name().to_string(),
            });
        }
        MoveEffect::Poison => {
            foe.poisoned = true;
            events.push(BattleEvent::Poisoned {
                target: foe.name().to_string(),
            });
        }
        MoveEffect::HealFull => {
            let amount = user.max_hp;
            heal(user, amount, events);
        }
        MoveEffect::HealHalf => {
            let amount = user.max_hp / 2;
            heal(user, amount, events);
        }
        MoveEffect::HealQuarter => {
            let amount = user.max_hp / 4;
            heal(user, amount, events);
        }
        MoveEffect::Rest => {
            let amount = user.max_hp;
            heal(user, amount, events);
            user.asleep = REST_SLEEP_TURNS;
            events.push(BattleEvent::FellAsleep {
                target: user.name().to_string(),
            });
        }
        MoveEffect::SelfDestruct => {
            let amount = self_destruct_damage(user);
            let applied = foe.take_damage(amount);
            if applied > 0 {
                events.push(BattleEvent::DamageDealt {
                    target: foe.name().to_string(),
                    amount: applied,
                });
            }
            user.hp = 0;
            resolution.user_fainted = true;
            resolution.foe_fainted = foe.is_fainted();
        }
        MoveEffect::Teleport => {
            events.push(BattleEvent::TeleportedAway {
                name: user.name().to_string(),
            });
            resolution.teleported = true;
        }
        MoveEffect::Transform => {
            user.transform_into(foe);
            events.push(BattleEvent::Transformed {
                user: user.name().to_string(),
                into: foe.name().to_string(),
            });
        }
        MoveEffect::Flavor => {
            events.push(BattleEvent::NothingHappened);
        }
    }

    resolution
}

fn heal(target: &mut Combatant, amount: u16, events: &mut Vec<BattleEvent>) {
    let restored = target.heal(amount);
    events.push(BattleEvent::Healed {
        target: target.name().to_string(),
        amount: restored,
    });
}

/// Start-of-turn poison tick for one side, applied before that side's own
/// move resolves. Lethal poison faints immediately.
pub fn poison_tick(target: &mut Combatant, events: &mut Vec<BattleEvent>) {
    if !target.poisoned {
        return;
    }
    let applied = target.take_damage(POISON_DAMAGE);
    events.push(BattleEvent::PoisonDamage {
        target: target.name().to_string(),
        amount: applied,
    });
}

/// Outcome of a sleeping side's attempt to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepCheck {
    Awake,
    /// Woke up this turn and acts normally.
    WokeUp,
    /// Still asleep; the turn is forfeited.
    Forfeit,
}

/// Decrement the sleep counter when a side would act. On the final asleep
/// turn the combatant wakes up and acts that same turn.
pub fn sleep_check(target: &mut Combatant, events: &mut Vec<BattleEvent>) -> SleepCheck {
    if target.asleep == 0 {
        return SleepCheck::Awake;
    }
    target.asleep -= 1;
    if target.asleep == 0 {
        events.push(BattleEvent::WokeUp {
            target: target.name().to_string(),
        });
        SleepCheck::WokeUp
    } else {
        events.push(BattleEvent::FastAsleep {
            target: target.name().to_string(),
        });
        SleepCheck::Forfeit
    }
}
