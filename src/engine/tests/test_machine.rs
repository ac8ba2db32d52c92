use super::common::{encounter_rolls, session_in_battle, snapshot};
use crate::engine::session::{GameSession, Intent};
use crate::engine::state::{GamePhase, TurnRng, LOG_CAPACITY};
use pretty_assertions::assert_eq;
use schema::Species;

#[test]
fn acting_out_of_turn_changes_nothing() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    let pending = session
        .apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]))
        .pending
        .unwrap();

    // It is now the wild side's turn: every battle action is a silent no-op.
    let before = snapshot(&session);
    let log_len = session.log().len();
    for intent in [
        Intent::SelectMove(0),
        Intent::UseItem,
        Intent::AttemptCapture,
        Intent::SwitchActive(1),
    ] {
        let outcome = session.apply(intent, &mut TurnRng::new_for_test(vec![99, 99]));
        assert!(outcome.events.is_empty());
        assert!(outcome.pending.is_none());
    }
    assert_eq!(before, snapshot(&session));
    assert_eq!(session.log().len(), log_len, "no log entries were added");

    // The battle still proceeds normally afterwards.
    session.resume(pending, &mut TurnRng::new_for_test(vec![1, 0]));
    assert!(session.is_player_turn());
}

#[test]
fn intents_outside_their_phase_are_ignored() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    let before = snapshot(&session);

    session.apply(Intent::Continue, &mut TurnRng::new_for_test(vec![99; 4]));
    session.apply(
        Intent::AcceptLegendaryChallenge,
        &mut TurnRng::new_for_test(vec![]),
    );
    session.apply(
        Intent::SelectDifficulty(crate::engine::state::Difficulty::Hard),
        &mut TurnRng::new_for_test(vec![]),
    );
    session.apply(
        Intent::ChooseStarter(Species::Squirtle),
        &mut TurnRng::new_for_test(vec![99; 4]),
    );

    assert_eq!(before, snapshot(&session));
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    let before = snapshot(&session);

    session.apply(Intent::SelectMove(7), &mut TurnRng::new_for_test(vec![0]));
    session.apply(Intent::SwitchActive(5), &mut TurnRng::new_for_test(vec![]));
    // Re-selecting the already-active member is also a no-op.
    session.apply(Intent::SwitchActive(0), &mut TurnRng::new_for_test(vec![]));

    assert_eq!(before, snapshot(&session));
    assert!(session.is_player_turn(), "no turn was consumed");
}

#[test]
fn the_potion_is_single_use_per_encounter() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);

    let outcome = session.apply(Intent::UseItem, &mut TurnRng::new_for_test(vec![]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![1, 0]));
    assert!(session.is_player_turn());

    let before = snapshot(&session);
    let outcome = session.apply(Intent::UseItem, &mut TurnRng::new_for_test(vec![]));
    assert!(outcome.events.is_empty());
    assert_eq!(before, snapshot(&session));

    // A fresh encounter restores the charge.
    session.wild_mut_for_test().hp = 1;
    let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(encounter_rolls()));
    assert!(!session.potion_used());
}

#[test]
fn switching_persists_the_outgoing_hp_and_spends_the_turn() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    let outcome = session.apply(Intent::AttemptCapture, &mut TurnRng::new_for_test(vec![99]));
    session.resume(outcome.pending.unwrap(), &mut TurnRng::new_for_test(vec![]));
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(encounter_rolls()));

    session.roster_mut_for_test().active_mut().hp = 17;
    let outcome = session.apply(Intent::SwitchActive(1), &mut TurnRng::new_for_test(vec![]));

    let roster = session.roster().unwrap();
    assert_eq!(roster.active_index(), 1);
    assert_eq!(roster.active().species, Species::Magikarp);
    assert_eq!(
        roster.members()[0].hp,
        17,
        "outgoing HP visible from the roster"
    );
    assert!(!session.is_player_turn());
    assert!(outcome.pending.is_some());
}

#[test]
fn stale_continuations_are_dropped_after_a_reset() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    let pending = session
        .apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]))
        .pending
        .unwrap();

    session.apply(Intent::ResetSession, &mut TurnRng::new_for_test(vec![0]));
    let before = snapshot(&session);

    let outcome = session.resume(pending, &mut TurnRng::new_for_test(vec![1, 9]));

    assert!(outcome.events.is_empty());
    assert!(outcome.pending.is_none());
    assert_eq!(before, snapshot(&session));
}

#[test]
fn continuations_from_a_replaced_encounter_are_stale() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.wild_mut_for_test().hp = 1;
    let victory = session
        .apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]))
        .pending
        .unwrap();
    session.resume(victory, &mut TurnRng::new_for_test(vec![]));
    session.apply(Intent::Continue, &mut TurnRng::new_for_test(encounter_rolls()));

    // Feeding the old victory continuation back in does nothing to the new
    // encounter.
    let before = snapshot(&session);
    let outcome = session.resume(victory, &mut TurnRng::new_for_test(vec![]));
    assert!(outcome.events.is_empty());
    assert_eq!(before, snapshot(&session));
    assert_eq!(session.phase(), GamePhase::Battle);
}

#[test]
fn the_battle_log_never_exceeds_its_cap() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);

    for _ in 0..4 {
        let outcome = session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));
        if let Some(pending) = outcome.pending {
            session.resume(pending, &mut TurnRng::new_for_test(vec![1, 0]));
        }
        assert!(session.log().len() <= LOG_CAPACITY);
    }
    assert_eq!(session.log().len(), LOG_CAPACITY);
}

#[test]
fn session_state_round_trips_through_serde() {
    let mut session = session_in_battle(Species::Charmander, Species::Magikarp);
    session.apply(Intent::SelectMove(0), &mut TurnRng::new_for_test(vec![0]));

    let json = serde_json::to_string(&session).expect("serialize");
    let restored: GameSession = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(json, serde_json::to_string(&restored).expect("re-serialize"));
    assert_eq!(restored.phase(), session.phase());
    assert_eq!(restored.encounter_id(), session.encounter_id());
}
