use super::common::{encounter_rolls, session_in_battle, session_in_battle_at};
use crate::engine::session::Intent;
use crate::engine::state::{
    BattleEvent, ContinuationAction, Difficulty, GamePhase, TurnRng, CAPTURE_DELAY_MS,
};
use pretty_assertions::assert_eq;
use schema::Species;

#[test]
fn low_hp_wild_is_nearly_always_caught() {
    // Wild at 1/20 HP on medium: success threshold is 0.05 * 0.7 = 0.035.
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.wild_mut_for_test().hp = 1;

    // Draw 0.04 clears the threshold.
    let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![4]));
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::CaptureSucceeded { .. })));

    // Draw 0.03 does not.
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![3]));
    assert!(outcome
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::CaptureFailed { .. })));
    assert_eq!(
        outcome.pending.unwrap().action,
        ContinuationAction::EnemyTurn
    );
}

#[test]
fn capture_odds_improve_with_lower_hp_and_easier_difficulty() {
    // Hold the draw at 0.5 and vary one factor at a time.
    let caught = |difficulty: Difficulty, hp: u16| {
        let mut session = session_in_battle_at(Species::Charmander, Species::Magikarp, difficulty);
        session.wild_mut_for_test().hp = hp;
        let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![50]));
        outcome
            .events
            .iter()
            .any(|e| matches!(e, BattleEvent::CaptureSucceeded { .. }))
    };

    // Full HP: only the easy multiplier brings the threshold under 0.5.
    assert!(!caught(Difficulty::Medium, 20));
    assert!(caught(Difficulty::Easy, 20));
    assert!(!caught(Difficulty::Hard, 20));

    // Half HP lowers the threshold on the same difficulty.
    assert!(caught(Difficulty::Medium, 10));
}

#[test]
fn successful_capture_joins_roster_and_collection_without_experience() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);

    let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));

    let pending = outcome.pending.unwrap();
    assert_eq!(pending.action, ContinuationAction::FinishCapture);
    assert_eq!(pending.after_ms, CAPTURE_DELAY_MS);

    let roster = session.roster().unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.members()[1].species, Species::Magikarp);
    assert_eq!(roster.members()[1].hp, roster.members()[1].max_hp);
    assert!(session.collection().contains("Magikarp"));
    assert_eq!(session.wins(), 0, "capture grants no victory");
    assert_eq!(roster.active().exp, 0, "capture grants no experience");

    session.resume(pending, &mut TurnRng::new_for_test(vec![]));
    assert_eq!(session.phase(), GamePhase::Captured);
}

#[test]
fn caught_duplicate_species_does_not_grow_the_collection() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);

    let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(encounter_rolls()));
    session.force_wild_for_test(Species::Magikarp);

    session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));

    assert_eq!(session.collection().len(), 1);
    assert_eq!(session.roster().unwrap().len(), 3, "roster still grows");
}

#[test]
fn transformed_wild_reverts_to_its_original_form_when_caught() {
    let mut session = session_in_battle(Species::Charmander, Species::Ditto);

    // Ditto's first move is Transform.
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![0]));
    assert!(session.wild().unwrap().is_transformed());
    assert_eq!(session.wild().unwrap().attack, 52);

    session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));

    let caught = &session.roster().unwrap().members()[1];
    assert_eq!(caught.species, Species::Ditto);
    assert!(!caught.is_transformed());
    assert_eq!(caught.attack, 48, "original stats restored");
    assert_eq!(caught.moves[0].name, "Transform");
    assert_eq!(caught.hp, caught.max_hp);
}
