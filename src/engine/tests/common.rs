use crate::engine::session::{GameSession, Intent};
use crate::engine::state::{Difficulty, TurnRng};
use schema::Species;

/// RNG outcomes that drive a normal encounter generation to a harmless
/// result: no mythical, very-common tier, first member of the tier.
pub fn encounter_rolls() -> Vec<u8> {
    vec![50, 0, 0]
}

/// A fresh session standing in a battle: difficulty selected, starter
/// chosen, and the wild replaced with the requested species.
pub fn session_in_battle(starter: Species, wild: Species) -> GameSession {
    session_in_battle_at(starter, wild, Difficulty::Medium)
}

pub fn session_in_battle_at(
    starter: Species,
    wild: Species,
    difficulty: Difficulty,
) -> GameSession {
    let mut session = GameSession::new(&mut TurnRng::new_for_test(vec![0]));
    session.apply(
        Intent::SelectDifficulty(difficulty),
        &mut TurnRng::new_for_test(vec![]),
    );
    session.apply(
        Intent::ChooseStarter(starter),
        &mut TurnRng::new_for_test(encounter_rolls()),
    );
    session.force_wild_for_test(wild);
    session
}

/// Serialized snapshot for whole-state "nothing changed" assertions.
pub fn snapshot(session: &GameSession) -> String {
    serde_json::to_string(session).expect("session serializes")
}
