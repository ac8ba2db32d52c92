//! The game session aggregate and its intent-driven transition function.
//!
//! All engine state changes go through [`GameSession::apply`] (player
//! intents) or [`GameSession::resume`] (host-scheduled continuations). Both
//! are synchronous; anything the original game deferred behind a timer is
//! returned as a [`PendingContinuation`] for the host to feed back in.

use crate::catalog::LEGENDARY_SPECIES;
use crate::combatant::{Combatant, Roster};
use crate::engine::state::{
    ApplyOutcome, BattleEvent, ContinuationAction, Difficulty, EventLog, GamePhase,
    PendingContinuation, TurnRng, CAPTURE_DELAY_MS, DEFEAT_DELAY_MS, ENEMY_TURN_DELAY_MS,
    EVOLUTION_COMMIT_DELAY_MS, VICTORY_DELAY_MS,
};
use crate::engine::{damage, effects, encounter, progression};
use crate::engine::effects::SleepCheck;
use crate::engine::progression::{Progression, LEGENDARY_EXP_THRESHOLD};
use crate::errors::IntentError;
use schema::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything the presentation layer can ask the engine to do.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SelectDifficulty(Difficulty),
    ChooseStarter(Species),
    /// Move slot 0..=3 of the active combatant.
    SelectMove(usize),
    UseItem,
    AttemptCapture,
    SwitchActive(usize),
    /// Advance past victory/defeat/capture/theft screens.
    Continue,
    AcceptLegendaryChallenge,
    ResetSession,
    /// Debug shortcut: set the active combatant's experience directly.
    SetExperience(u32),
}

/// One playthrough's worth of state. Serializable so the host can snapshot
/// the full observable state at any point.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameSession {
    phase: GamePhase,
    difficulty: Difficulty,
    roster: Option<Roster>,
    wild: Option<Combatant>,
    is_player_turn: bool,
    potion_used: bool,
    log: EventLog,
    collection: BTreeSet<String>,
    progression: Progression,
    /// Bumped on every new encounter; pending continuations carry the id
    /// they were scheduled under and are ignored once it moves on.
    encounter_id: u64,
}

impl GameSession {
    pub fn new(rng: &mut TurnRng) -> Self {
        GameSession {
            phase: GamePhase::DifficultySelect,
            difficulty: Difficulty::Medium,
            roster: None,
            wild: None,
            is_player_turn: true,
            potion_used: false,
            log: EventLog::new(),
            collection: BTreeSet::new(),
            progression: Progression::new(rng),
            encounter_id: 0,
        }
    }

    // --- Observable state ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    pub fn potion_used(&self) -> bool {
        self.potion_used
    }

    pub fn wild(&self) -> Option<&Combatant> {
        self.wild.as_ref()
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    pub fn collection(&self) -> &BTreeSet<String> {
        &self.collection
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn wins(&self) -> u32 {
        self.progression.battles_won
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn encounter_id(&self) -> u64 {
        self.encounter_id
    }

    // --- Transitions ---

    /// Apply a player intent. Illegal intents do not change state, emit no
    /// events and add nothing to the log.
    pub fn apply(&mut self, intent: Intent, rng: &mut TurnRng) -> ApplyOutcome {
        match self.validate(&intent) {
            Ok(()) => self.dispatch(intent, rng),
            Err(error) => {
                tracing::debug!(intent = ?intent, error = %error, "ignoring illegal intent");
                ApplyOutcome::none()
            }
        }
    }

    /// Feed a previously returned continuation back in once its delay has
    /// elapsed. Continuations from a finished or replaced encounter are
    /// stale and ignored.
    pub fn resume(&mut self, continuation: PendingContinuation, rng: &mut TurnRng) -> ApplyOutcome {
        if continuation.encounter_id != self.encounter_id {
            tracing::debug!(
                scheduled = continuation.encounter_id,
                current = self.encounter_id,
                "dropping stale continuation"
            );
            return ApplyOutcome::none();
        }

        match continuation.action {
            ContinuationAction::EnemyTurn => {
                if self.phase != GamePhase::Battle || self.is_player_turn {
                    return ApplyOutcome::none();
                }
                self.enemy_turn(rng)
            }
            ContinuationAction::CommitEvolution => {
                if self.phase != GamePhase::Evolving {
                    return ApplyOutcome::none();
                }
                let mut events = Vec::new();
                let Some(roster) = self.roster.as_mut() else {
                    return ApplyOutcome::none();
                };
                progression::commit_evolution(roster.active_mut(), &mut events, rng);
                self.phase = GamePhase::Victory;
                self.finish(events, None)
            }
            ContinuationAction::FinishVictory => self.settle(GamePhase::Victory),
            ContinuationAction::FinishDefeat => self.settle(GamePhase::Defeat),
            ContinuationAction::FinishCapture => self.settle(GamePhase::Captured),
        }
    }

    fn settle(&mut self, terminal: GamePhase) -> ApplyOutcome {
        if self.phase == GamePhase::Battle {
            self.phase = terminal;
        }
        ApplyOutcome::none()
    }

    // --- Validation ---

    fn validate(&self, intent: &Intent) -> Result<(), IntentError> {
        match intent {
            Intent::ResetSession => Ok(()),
            Intent::SelectDifficulty(_) => self.require_phase(GamePhase::DifficultySelect),
            Intent::ChooseStarter(_) => self.require_phase(GamePhase::StarterSelect),
            Intent::SelectMove(index) => {
                self.require_battle_turn()?;
                let moves = self.roster.as_ref().map(|r| r.active().moves.len());
                if moves.is_some_and(|len| *index < len) {
                    Ok(())
                } else {
                    Err(IntentError::InvalidMoveIndex(*index))
                }
            }
            Intent::UseItem => {
                self.require_battle_turn()?;
                if self.potion_used {
                    Err(IntentError::PotionAlreadyUsed)
                } else {
                    Ok(())
                }
            }
            Intent::AttemptCapture => self.require_battle_turn(),
            Intent::SwitchActive(index) => {
                self.require_battle_turn()?;
                let Some(roster) = self.roster.as_ref() else {
                    return Err(IntentError::InvalidRosterIndex(*index));
                };
                if *index >= roster.len() {
                    Err(IntentError::InvalidRosterIndex(*index))
                } else if *index == roster.active_index() {
                    Err(IntentError::AlreadyActive(*index))
                } else {
                    Ok(())
                }
            }
            Intent::Continue => match self.phase {
                GamePhase::Victory
                | GamePhase::Captured
                | GamePhase::Defeat
                | GamePhase::TheftEvent => Ok(()),
                phase => Err(IntentError::InvalidPhase(phase)),
            },
            Intent::AcceptLegendaryChallenge => self.require_phase(GamePhase::LegendaryIntro),
            Intent::SetExperience(_) => self.require_phase(GamePhase::Battle),
        }
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), IntentError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(IntentError::InvalidPhase(self.phase))
        }
    }

    fn require_battle_turn(&self) -> Result<(), IntentError> {
        if self.phase != GamePhase::Battle {
            Err(IntentError::InvalidPhase(self.phase))
        } else if !self.is_player_turn {
            Err(IntentError::NotPlayersTurn)
        } else {
            Ok(())
        }
    }

    // --- Intent handlers ---

    fn dispatch(&mut self, intent: Intent, rng: &mut TurnRng) -> ApplyOutcome {
        match intent {
            Intent::SelectDifficulty(difficulty) => {
                self.difficulty = difficulty;
                self.phase = GamePhase::StarterSelect;
                ApplyOutcome::none()
            }
            Intent::ChooseStarter(species) => self.handle_choose_starter(species, rng),
            Intent::SelectMove(index) => self.handle_select_move(index, rng),
            Intent::UseItem => self.handle_use_item(),
            Intent::AttemptCapture => self.handle_capture(rng),
            Intent::SwitchActive(index) => self.handle_switch(index),
            Intent::Continue => self.handle_continue(rng),
            Intent::AcceptLegendaryChallenge => self.handle_accept_legendary(),
            Intent::ResetSession => {
                *self = GameSession::new(rng);
                ApplyOutcome::none()
            }
            Intent::SetExperience(exp) => self.handle_set_experience(exp),
        }
    }

    fn handle_choose_starter(&mut self, species: Species, rng: &mut TurnRng) -> ApplyOutcome {
        let mut events = Vec::new();
        let starter = Combatant::from_species(species);
        events.push(BattleEvent::StarterChosen {
            name: starter.name().to_string(),
        });
        self.roster = Some(Roster::new(starter));
        self.start_encounter(&mut events, rng);
        self.finish(events, None)
    }

    fn handle_select_move(&mut self, index: usize, rng: &mut TurnRng) -> ApplyOutcome {
        let mut events = Vec::new();

        // Poison ticks before the side's own move resolves, and a lethal
        // tick ends the battle outright.
        let fainted_by_poison = {
            let Some(roster) = self.roster.as_mut() else {
                return ApplyOutcome::none();
            };
            let active = roster.active_mut();
            effects::poison_tick(active, &mut events);
            active.is_fainted()
        };
        if fainted_by_poison {
            let pending = self.player_defeated(&mut events);
            return self.finish(events, pending);
        }

        let sleep = {
            let Some(roster) = self.roster.as_mut() else {
                return ApplyOutcome::none();
            };
            effects::sleep_check(roster.active_mut(), &mut events)
        };
        if sleep == SleepCheck::Forfeit {
            self.is_player_turn = false;
            let pending = self.schedule(ContinuationAction::EnemyTurn, ENEMY_TURN_DELAY_MS);
            return self.finish(events, Some(pending));
        }

        let (Some(roster), Some(wild)) = (self.roster.as_mut(), self.wild.as_mut()) else {
            return ApplyOutcome::none();
        };
        let active = roster.active_mut();
        let Some(chosen) = active.moves.get(index).cloned() else {
            return ApplyOutcome::none();
        };

        if chosen.effect.is_damaging() {
            let roll = damage::damage_roll(active, wild, &chosen, 1.0, rng);
            events.push(BattleEvent::MoveUsed {
                user: active.name().to_string(),
                target: wild.name().to_string(),
                move_name: chosen.name.clone(),
                effectiveness: Some(roll.effectiveness),
            });
            let applied = wild.take_damage(roll.damage);
            if applied > 0 {
                events.push(BattleEvent::DamageDealt {
                    target: wild.name().to_string(),
                    amount: applied,
                });
            }
            if wild.is_fainted() {
                let pending = self.resolve_victory(&mut events);
                return self.finish(events, pending);
            }
            self.is_player_turn = false;
            let pending = self.schedule(ContinuationAction::EnemyTurn, ENEMY_TURN_DELAY_MS);
            return self.finish(events, Some(pending));
        }

        // Status move.
        events.push(BattleEvent::MoveUsed {
            user: active.name().to_string(),
            target: wild.name().to_string(),
            move_name: chosen.name.clone(),
            effectiveness: None,
        });
        let resolution = effects::apply_status_move(active, wild, chosen.effect, &mut events, rng);

        if resolution.teleported {
            // The encounter ends with no victor; the player keeps HP and
            // status, and a fresh encounter starts immediately.
            self.start_encounter(&mut events, rng);
            return self.finish(events, None);
        }
        if resolution.foe_fainted {
            // Acting side's kill resolves first, even on a mutual faint.
            let pending = self.resolve_victory(&mut events);
            return self.finish(events, pending);
        }
        if resolution.user_fainted {
            let pending = self.player_defeated(&mut events);
            return self.finish(events, pending);
        }

        self.is_player_turn = false;
        let pending = self.schedule(ContinuationAction::EnemyTurn, ENEMY_TURN_DELAY_MS);
        self.finish(events, Some(pending))
    }

    fn handle_use_item(&mut self) -> ApplyOutcome {
        let mut events = Vec::new();
        let Some(roster) = self.roster.as_mut() else {
            return ApplyOutcome::none();
        };
        let active = roster.active_mut();
        let restored = active.max_hp - active.hp;
        active.hp = active.max_hp;
        events.push(BattleEvent::PotionUsed { restored });
        self.potion_used = true;
        self.is_player_turn = false;
        let pending = self.schedule(ContinuationAction::EnemyTurn, ENEMY_TURN_DELAY_MS);
        self.finish(events, Some(pending))
    }

    fn handle_capture(&mut self, rng: &mut TurnRng) -> ApplyOutcome {
        let mut events = Vec::new();
        let Some(wild) = self.wild.as_mut() else {
            return ApplyOutcome::none();
        };

        let draw = rng.next_fraction("capture draw");
        let threshold = wild.hp_fraction() * (0.7 / self.difficulty.catch_multiplier());

        if draw > threshold {
            // Caught: revert any transform, heal, and join the roster.
            wild.revert_form();
            wild.clear_ailments();
            wild.hp = wild.max_hp;
            let caught = wild.clone();
            let name = caught.name().to_string();
            let legendary = caught.species == LEGENDARY_SPECIES;

            events.push(BattleEvent::CaptureSucceeded { name: name.clone() });
            self.collection.insert(name);
            if let Some(roster) = self.roster.as_mut() {
                roster.add(caught);
                if legendary {
                    for member in roster.members_mut() {
                        member.beat_legendary = true;
                    }
                }
            }
            if legendary {
                self.progression.legendary_defeated = true;
                self.progression.gate_armed = false;
            }
            self.progression.record_battle_end();
            self.is_player_turn = false;
            let pending = self.schedule(ContinuationAction::FinishCapture, CAPTURE_DELAY_MS);
            self.finish(events, Some(pending))
        } else {
            events.push(BattleEvent::CaptureFailed {
                name: wild.name().to_string(),
            });
            self.is_player_turn = false;
            let pending = self.schedule(ContinuationAction::EnemyTurn, ENEMY_TURN_DELAY_MS);
            self.finish(events, Some(pending))
        }
    }

    fn handle_switch(&mut self, index: usize) -> ApplyOutcome {
        let mut events = Vec::new();
        let Some(roster) = self.roster.as_mut() else {
            return ApplyOutcome::none();
        };
        let outgoing = roster.active().name().to_string();
        if !roster.switch_to(index) {
            return ApplyOutcome::none();
        }
        events.push(BattleEvent::Recalled { name: outgoing });
        events.push(BattleEvent::SentOut {
            name: roster.active().name().to_string(),
        });
        self.is_player_turn = false;
        let pending = self.schedule(ContinuationAction::EnemyTurn, ENEMY_TURN_DELAY_MS);
        self.finish(events, Some(pending))
    }

    fn handle_continue(&mut self, rng: &mut TurnRng) -> ApplyOutcome {
        match self.phase {
            GamePhase::Defeat => {
                self.phase = GamePhase::GameOver;
                ApplyOutcome::none()
            }
            GamePhase::TheftEvent => {
                let mut events = Vec::new();
                self.start_encounter(&mut events, rng);
                self.finish(events, None)
            }
            GamePhase::Victory | GamePhase::Captured => {
                let mut events = Vec::new();

                // The active combatant is patched up between encounters.
                if let Some(roster) = self.roster.as_mut() {
                    let active = roster.active_mut();
                    active.revert_form();
                    active.clear_ailments();
                    active.hp = active.max_hp;
                }

                if self.progression.gate_armed {
                    self.phase = GamePhase::LegendaryIntro;
                    return self.finish(events, None);
                }

                if self.progression.theft_due() {
                    let roster_len = self.roster.as_ref().map_or(0, Roster::len);
                    self.progression.rearm_theft(rng);
                    if roster_len > 1 {
                        if let Some(roster) = self.roster.as_mut() {
                            let bench = roster.bench_indices();
                            let victim = bench[rng.next_index("theft victim", bench.len())];
                            if let Some(stolen) = roster.remove(victim) {
                                events.push(BattleEvent::RosterMemberStolen {
                                    name: stolen.name().to_string(),
                                });
                            }
                        }
                        self.phase = GamePhase::TheftEvent;
                        return self.finish(events, None);
                    }
                }

                self.start_encounter(&mut events, rng);
                self.finish(events, None)
            }
            _ => ApplyOutcome::none(),
        }
    }

    fn handle_accept_legendary(&mut self) -> ApplyOutcome {
        let mut events = Vec::new();
        // The gate is one-shot: consumed on acceptance.
        self.progression.gate_armed = false;
        self.begin_battle(LEGENDARY_SPECIES, true, &mut events);
        self.finish(events, None)
    }

    fn handle_set_experience(&mut self, exp: u32) -> ApplyOutcome {
        let mut events = Vec::new();
        let Some(roster) = self.roster.as_mut() else {
            return ApplyOutcome::none();
        };
        roster.active_mut().exp = exp;
        events.push(BattleEvent::ExperienceSet { exp });
        self.finish(events, None)
    }

    // --- Shared battle flow ---

    fn start_encounter(&mut self, events: &mut Vec<BattleEvent>, rng: &mut TurnRng) {
        let species = encounter::generate(&self.progression, self.difficulty, rng);
        self.begin_battle(species, false, events);
    }

    fn begin_battle(&mut self, species: Species, legendary: bool, events: &mut Vec<BattleEvent>) {
        self.wild = Some(Combatant::from_species(species));
        self.encounter_id += 1;
        self.potion_used = false;
        self.is_player_turn = true;
        self.phase = GamePhase::Battle;
        events.push(BattleEvent::EncounterStarted {
            name: species.name().to_string(),
            legendary,
        });
    }

    /// The wild side fainted: award experience, check the gate, and hand off
    /// to the evolution or victory continuation.
    fn resolve_victory(&mut self, events: &mut Vec<BattleEvent>) -> Option<PendingContinuation> {
        let wild_species = self.wild.as_ref().map(|w| w.species)?;
        events.push(BattleEvent::Fainted {
            name: wild_species.name().to_string(),
        });
        self.is_player_turn = false;

        if wild_species == LEGENDARY_SPECIES {
            self.progression.legendary_defeated = true;
            self.progression.gate_armed = false;
            if let Some(roster) = self.roster.as_mut() {
                for member in roster.members_mut() {
                    member.beat_legendary = true;
                }
            }
            events.push(BattleEvent::LegendaryDefeated {
                name: wild_species.name().to_string(),
            });
        }

        let (new_exp, name) = {
            let roster = self.roster.as_mut()?;
            let active = roster.active_mut();
            active.exp += 1;
            (active.exp, active.name().to_string())
        };
        events.push(BattleEvent::ExperienceGained { name: name.clone() });

        if new_exp >= LEGENDARY_EXP_THRESHOLD
            && !self.progression.legendary_defeated
            && !self.progression.gate_armed
        {
            self.progression.gate_armed = true;
            events.push(BattleEvent::LegendaryStirs);
        }

        self.progression.record_victory();
        self.progression.record_battle_end();

        if progression::evolution_pending(new_exp) {
            events.push(BattleEvent::EvolutionStarted { name });
            self.phase = GamePhase::Evolving;
            Some(self.schedule(ContinuationAction::CommitEvolution, EVOLUTION_COMMIT_DELAY_MS))
        } else {
            Some(self.schedule(ContinuationAction::FinishVictory, VICTORY_DELAY_MS))
        }
    }

    /// The player's active combatant fainted; there is no forced switch.
    fn player_defeated(&mut self, events: &mut Vec<BattleEvent>) -> Option<PendingContinuation> {
        let name = self
            .roster
            .as_ref()
            .map(|r| r.active().name().to_string())?;
        events.push(BattleEvent::Fainted { name });
        self.is_player_turn = false;
        Some(self.schedule(ContinuationAction::FinishDefeat, DEFEAT_DELAY_MS))
    }

    /// The wild side acts. Reached only via the EnemyTurn continuation.
    fn enemy_turn(&mut self, rng: &mut TurnRng) -> ApplyOutcome {
        let mut events = Vec::new();

        // Wild-side poison ticks before its own move.
        let wild_fainted = {
            let Some(wild) = self.wild.as_mut() else {
                return ApplyOutcome::none();
            };
            effects::poison_tick(wild, &mut events);
            wild.is_fainted()
        };
        if wild_fainted {
            let pending = self.resolve_victory(&mut events);
            return self.finish(events, pending);
        }

        let sleep = {
            let Some(wild) = self.wild.as_mut() else {
                return ApplyOutcome::none();
            };
            effects::sleep_check(wild, &mut events)
        };
        if sleep == SleepCheck::Forfeit {
            self.is_player_turn = true;
            return self.finish(events, None);
        }

        let (Some(roster), Some(wild)) = (self.roster.as_mut(), self.wild.as_mut()) else {
            return ApplyOutcome::none();
        };
        let active = roster.active_mut();
        let chosen = wild.moves[rng.next_index("enemy move", wild.moves.len())].clone();

        if chosen.effect.is_damaging() {
            let roll = damage::damage_roll(wild, active, &chosen, self.difficulty.enemy_power(), rng);
            events.push(BattleEvent::MoveUsed {
                user: wild.name().to_string(),
                target: active.name().to_string(),
                move_name: chosen.name.clone(),
                effectiveness: Some(roll.effectiveness),
            });
            let applied = active.take_damage(roll.damage);
            if applied > 0 {
                events.push(BattleEvent::DamageDealt {
                    target: active.name().to_string(),
                    amount: applied,
                });
            }
            if active.is_fainted() {
                let pending = self.player_defeated(&mut events);
                return self.finish(events, pending);
            }
            self.is_player_turn = true;
            return self.finish(events, None);
        }

        // Wild status move: user is the wild side, opponent is the player.
        events.push(BattleEvent::MoveUsed {
            user: wild.name().to_string(),
            target: active.name().to_string(),
            move_name: chosen.name.clone(),
            effectiveness: None,
        });
        let resolution = effects::apply_status_move(wild, active, chosen.effect, &mut events, rng);

        if resolution.teleported {
            // The wild side fled; a fresh encounter starts immediately while
            // the player's side keeps its HP and status.
            self.start_encounter(&mut events, rng);
            return self.finish(events, None);
        }
        if resolution.foe_fainted {
            // Wild self-destruct that takes the player down is the acting
            // side's kill, so it resolves as a defeat even on a mutual faint.
            let pending = self.player_defeated(&mut events);
            return self.finish(events, pending);
        }
        if resolution.user_fainted {
            let pending = self.resolve_victory(&mut events);
            return self.finish(events, pending);
        }

        self.is_player_turn = true;
        self.finish(events, None)
    }

    // --- Plumbing ---

    fn schedule(&self, action: ContinuationAction, after_ms: u64) -> PendingContinuation {
        PendingContinuation {
            after_ms,
            action,
            encounter_id: self.encounter_id,
        }
    }

    /// Record the transition's events in the bounded log and package the
    /// outcome.
    fn finish(
        &mut self,
        events: Vec<BattleEvent>,
        pending: Option<PendingContinuation>,
    ) -> ApplyOutcome {
        for event in &events {
            self.log.push(event.format());
        }
        ApplyOutcome { events, pending }
    }
}

// Test-only seams for scripting exact battle situations without fishing for
// the right encounter rolls.
#[cfg(test)]
impl GameSession {
    pub(crate) fn force_wild_for_test(&mut self, species: Species) {
        self.wild = Some(Combatant::from_species(species));
    }

    pub(crate) fn wild_mut_for_test(&mut self) -> &mut Combatant {
        self.wild.as_mut().expect("no wild combatant")
    }

    pub(crate) fn roster_mut_for_test(&mut self) -> &mut Roster {
        self.roster.as_mut().expect("no roster")
    }

    pub(crate) fn progression_mut_for_test(&mut self) -> &mut Progression {
        &mut self.progression
    }
}
