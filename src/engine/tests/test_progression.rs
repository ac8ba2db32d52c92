use super::common::{encounter_rolls, session_in_battle, snapshot};
use crate::catalog::FINAL_POOL;
use crate::engine::session::Intent;
use crate::engine::state::{
    BattleEvent, ContinuationAction, GamePhase, TurnRng, EVOLUTION_COMMIT_DELAY_MS,
};
use pretty_assertions::assert_eq;
use schema::Species;

#[test]
fn third_experience_point_triggers_a_locked_evolution() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.apply(Intent::SetExperience(2), &mut TurnRng::new_for_test(vec![]));
    session.wild_mut_for_test().hp = 1;

    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));

    assert_eq!(session.phase(), GamePhase::Evolving);
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::EvolutionStarted { .. })));
    let pending = outcome.pending.unwrap();
    assert_eq!(pending.action, ContinuationAction::CommitEvolution);
    assert_eq!(pending.after_ms, EVOLUTION_COMMIT_DELAY_MS);

    // Input is locked while evolving.
    let before = snapshot(&session);
    session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.apply(Intent::UseItem, &mut TurnRng::new_for_test(vec![]));
    session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));
    assert_eq!(before, snapshot(&session), "evolving ignores all actions");

    // The commit lands the new form and the flat bonus on the roster entry.
    session.resume(pending, &mut TurnRng::new_for_test(vec![]));
    assert_eq!(session.phase(), GamePhase::Victory);
    let active = session.roster().unwrap().active();
    assert_eq!(active.species, Species::Charmeleon);
    assert_eq!(active.exp, 3);
    assert_eq!(active.max_hp, 39 + 15);
    assert_eq!(active.attack, 52 + 15);
    assert_eq!(active.sp_attack, 60 + 15);
    assert_eq!(active.defense, 43 + 15);
    assert_eq!(active.sp_defense, 50 + 15);
}

#[test]
fn experience_only_evolves_on_exact_multiples_of_three() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.apply(Intent::SetExperience(3), &mut TurnRng::new_for_test(vec![]));
    session.wild_mut_for_test().hp = 1;

    // 3 -> 4 is not a multiple of three: straight to the victory screen.
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    assert_eq!(
        outcome.pending.unwrap().action,
        ContinuationAction::FinishVictory
    );
    assert_eq!(session.roster().unwrap().active().species, Species::Charmander);
}

#[test]
fn twentieth_experience_point_arms_the_legendary_gate() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.apply(Intent::SetExperience(19), &mut TurnRng::new_for_test(vec![]));
    session.wild_mut_for_test().hp = 1;

    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::LegendaryStirs)));
    assert!(session.progression().gate_armed);

    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));

    // The armed gate redirects the next continue, consuming no encounter
    // rolls.
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(vec![]));
    assert_eq!(session.phase(), GamePhase::LegendaryIntro);

    let outcome = session.apply(
        Intent::AcceptLegendaryChallenge,
        &mut TurnRng::new_for_test(vec![]),
    );
    assert_eq!(session.phase(), GamePhase::Battle);
    assert!(!session.progression().gate_armed, "gate is one-shot");
    assert_eq!(session.wild().unwrap().species, Species::Mewtwo);
    assert_eq!(session.wild().unwrap().hp, 150);
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::EncounterStarted { legendary: true, .. })));
}

#[test]
fn defeating_the_legendary_unlocks_the_final_pool() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.apply(Intent::SetExperience(19), &mut TurnRng::new_for_test(vec![]));
    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(vec![]));
    session.apply(
        Intent::AcceptLegendaryChallenge,
        &mut TurnRng::new_for_test(vec![]),
    );

    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));

    assert!(session.progression().legendary_defeated);
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::LegendaryDefeated { .. })));
    assert!(session
        .roster()
        .unwrap()
        .members()
        .iter()
        .all(|m| m.beat_legendary));

    // Exp went 20 -> 21, so the win also evolves the starter.
    let pending = outcome.pending.unwrap();
    assert_eq!(pending.action, ContinuationAction::CommitEvolution);
    session.resume(pending, &mut TurnRng::new_for_test(vec![]));
    assert_eq!(session.phase(), GamePhase::Victory);

    // From here on, normal encounters come from the final-evolution pool
    // (two rolls: tier and pick, no mythical roll).
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(vec![0, 0]));
    assert_eq!(session.phase(), GamePhase::Battle);
    let wild = session.wild().unwrap();
    assert!(
        FINAL_POOL.contains(&wild.species),
        "{:?} should come from the final pool",
        wild.species
    );
}

#[test]
fn capturing_the_legendary_also_flags_the_playthrough() {
    let mut session = session_in_battle(Species::Charmander, Species::Mewtwo);

    session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));

    assert!(session.progression().legendary_defeated);
    assert!(session.collection().contains("Mewtwo"));
    let roster = session.roster().unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.members().iter().all(|m| m.beat_legendary));
}

#[test]
fn mythical_encounter_interrupts_normal_generation() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));

    // Mythical roll of 1 beats the 2-in-100 rate.
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(vec![1]));

    assert_eq!(session.wild().unwrap().species, Species::Mew);
}

#[test]
fn theft_event_removes_a_random_bench_member() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);

    // Catch the Magikarp so the roster has a bench.
    let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    session
        .progression_mut_for_test()
        .set_theft_countdown_for_test(0);

    // Continue: the countdown has run out, so the theft event fires before
    // any encounter is generated (rolls: rearm interval, victim pick).
    let outcome = session.apply(Intent::Continue, &mut TurnRng::new_for_test(vec![0, 0]));

    assert_eq!(session.phase(), GamePhase::TheftEvent);
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::RosterMemberStolen { name } if name == "Magikarp")));
    let roster = session.roster().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.active().species, Species::Charmander, "active member is never stolen");
    assert!(!session.progression().theft_due(), "countdown re-armed");

    // Continuing past the theft screen generates the next encounter.
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(encounter_rolls()));
    assert_eq!(session.phase(), GamePhase::Battle);
}

#[test]
fn theft_is_skipped_quietly_with_a_single_member_roster() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    session
        .progression_mut_for_test()
        .set_theft_countdown_for_test(0);

    // Rolls: rearm interval, then a normal encounter generation.
    let outcome = session.apply(
        Intent::Continue,
        &mut TurnRng::new_for_test(vec![0, 50, 0, 0]),
    );

    assert_eq!(session.phase(), GamePhase::Battle);
    assert!(!outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::RosterMemberStolen { .. })));
    assert!(!session.progression().theft_due());
}

#[test]
fn wins_count_victories_but_not_captures() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    assert_eq!(session.wins(), 1);
    assert_eq!(session.progression().total_battles, 1);

    session.apply(Intent::Continue, &mut TurnRng::new_for_test(encounter_rolls()));
    session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));

    assert_eq!(session.wins(), 1, "capture is not a victory");
    assert_eq!(session.progression().total_battles, 2);
}
