use schema::StatPair;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// High-level screen the session is on. Battle-internal turn sequencing is
/// tracked separately by the session's turn flag.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    DifficultySelect,
    StarterSelect,
    Battle,
    Evolving,
    Victory,
    Defeat,
    Captured,
    LegendaryIntro,
    TheftEvent,
    GameOver,
}

/// Named difficulty preset. Each preset fixes the five encounter-tier
/// probabilities, a capture-rate multiplier and an enemy-damage multiplier;
/// nothing else is tunable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tier probabilities in percent, very-common first. Always sums to 100.
    pub fn encounter_rates(&self) -> [u8; 5] {
        match self {
            Difficulty::Easy => [35, 30, 25, 5, 5],
            Difficulty::Medium => [30, 25, 20, 15, 10],
            Difficulty::Hard => [15, 20, 30, 20, 15],
        }
    }

    pub fn catch_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 0.9,
        }
    }

    pub fn enemy_power(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.9,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.1,
        }
    }
}

/// Everything observable that happened during one engine transition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    StarterChosen {
        name: String,
    },
    EncounterStarted {
        name: String,
        legendary: bool,
    },
    MoveUsed {
        user: String,
        target: String,
        move_name: String,
        /// Type effectiveness of a damaging move; None for status moves.
        effectiveness: Option<f32>,
    },
    DamageDealt {
        target: String,
        amount: u16,
    },
    Healed {
        target: String,
        amount: u16,
    },
    PotionUsed {
        restored: u16,
    },
    StatRaised {
        target: String,
        pair: StatPair,
    },
    StatLowered {
        target: String,
        pair: StatPair,
    },
    FellAsleep {
        target: String,
    },
    FastAsleep {
        target: String,
    },
    WokeUp {
        target: String,
    },
    Poisoned {
        target: String,
    },
    PoisonDamage {
        target: String,
        amount: u16,
    },
    Transformed {
        user: String,
        into: String,
    },
    TeleportedAway {
        name: String,
    },
    NothingHappened,
    Fainted {
        name: String,
    },
    ExperienceGained {
        name: String,
    },
    EvolutionStarted {
        name: String,
    },
    Evolved {
        from: String,
        into: String,
    },
    MaxEvolution {
        name: String,
    },
    StatsRose {
        bonus: u16,
    },
    CaptureSucceeded {
        name: String,
    },
    CaptureFailed {
        name: String,
    },
    Recalled {
        name: String,
    },
    SentOut {
        name: String,
    },
    LegendaryStirs,
    LegendaryDefeated {
        name: String,
    },
    RosterMemberStolen {
        name: String,
    },
    ExperienceSet {
        exp: u32,
    },
}

impl BattleEvent {
    /// Human-readable form of the event, as shown in the battle log.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::StarterChosen { name } => format!("You chose {}!", name),
            BattleEvent::EncounterStarted { name, legendary } => {
                if *legendary {
                    format!("A legendary {} appeared!", name)
                } else {
                    format!("A wild {} appeared!", name)
                }
            }
            BattleEvent::MoveUsed {
                user,
                target,
                move_name,
                effectiveness,
            } => {
                let suffix = match effectiveness {
                    Some(e) if *e == 0.0 => format!(" It doesn't affect {}...", target),
                    Some(e) if *e >= 4.0 => " EXTREMELY effective!".to_string(),
                    Some(e) if *e > 1.0 => " Super effective!".to_string(),
                    Some(e) if *e < 1.0 => " Not very effective...".to_string(),
                    _ => String::new(),
                };
                format!("{} used {}!{}", user, move_name, suffix)
            }
            BattleEvent::DamageDealt { target, amount } => {
                format!("{} took {} damage!", target, amount)
            }
            BattleEvent::Healed { target, amount } => {
                format!("{} recovered {} HP!", target, amount)
            }
            BattleEvent::PotionUsed { restored } => {
                format!("Used Potion! Restored {} HP!", restored)
            }
            BattleEvent::StatRaised { target, pair } => match pair {
                StatPair::Offense => format!("{}'s Attack and Sp. Atk rose!", target),
                StatPair::Defense => format!("{}'s Defense and Sp. Def rose!", target),
            },
            BattleEvent::StatLowered { target, pair } => match pair {
                StatPair::Offense => format!("{}'s Attack and Sp. Atk fell!", target),
                StatPair::Defense => format!("{}'s Defense and Sp. Def fell!", target),
            },
            BattleEvent::FellAsleep { target } => format!("{} fell asleep!", target),
            BattleEvent::FastAsleep { target } => format!("{} is fast asleep.", target),
            BattleEvent::WokeUp { target } => format!("{} woke up!", target),
            BattleEvent::Poisoned { target } => format!("{} was poisoned!", target),
            BattleEvent::PoisonDamage { target, amount } => {
                format!("{} is hurt by poison! ({} damage)", target, amount)
            }
            BattleEvent::Transformed { user, into } => {
                format!("{} transformed into {}!", user, into)
            }
            BattleEvent::TeleportedAway { name } => format!("{} teleported away!", name),
            BattleEvent::NothingHappened => "But nothing happened!".to_string(),
            BattleEvent::Fainted { name } => format!("{} fainted!", name),
            BattleEvent::ExperienceGained { name } => format!("{} gained 1 EXP!", name),
            BattleEvent::EvolutionStarted { name } => format!("{} is evolving!", name),
            BattleEvent::Evolved { from, into } => format!("{} evolved into {}!", from, into),
            BattleEvent::MaxEvolution { name } => format!("{} is at max evolution!", name),
            BattleEvent::StatsRose { bonus } => format!("All stats +{}!", bonus),
            BattleEvent::CaptureSucceeded { name } => format!("Success! {} was caught!", name),
            BattleEvent::CaptureFailed { name } => format!("{} broke free!", name),
            BattleEvent::Recalled { name } => format!("Come back, {}!", name),
            BattleEvent::SentOut { name } => format!("Go, {}!", name),
            BattleEvent::LegendaryStirs => "A powerful presence stirs...".to_string(),
            BattleEvent::LegendaryDefeated { name } => {
                format!("You defeated the legendary {}!", name)
            }
            BattleEvent::RosterMemberStolen { name } => {
                format!("Team Rocket stole {}!", name)
            }
            BattleEvent::ExperienceSet { exp } => format!("DEBUG: EXP set to {}.", exp),
        }
    }
}

/// Most recent battle messages, oldest first, capped at [`LOG_CAPACITY`].
pub const LOG_CAPACITY: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    entries: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: String) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

/// Pre-drawn random outcomes for one engine transition. Production code
/// fills it from `rand`; tests script the exact values.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // More than any single transition can consume.
        let outcomes: Vec<u8> = (0..100).map(|_| rng.random_range(0..100)).collect();
        Self { outcomes, index: 0 }
    }

    /// Next outcome in 0..=99. The reason string names what the value is
    /// consumed for, which makes scripted tests readable when they go wrong.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }

    /// Uniform draw in [0, 0.99].
    pub fn next_fraction(&mut self, reason: &str) -> f32 {
        self.next_outcome(reason) as f32 / 100.0
    }

    /// Uniform index into a non-empty collection.
    pub fn next_index(&mut self, reason: &str, len: usize) -> usize {
        debug_assert!(len > 0);
        self.next_outcome(reason) as usize % len
    }
}

// Delays the host should wait before feeding a continuation back in. They
// mirror the pacing of the original game's battle screen.
pub const ENEMY_TURN_DELAY_MS: u64 = 1500;
pub const EVOLUTION_COMMIT_DELAY_MS: u64 = 2000;
pub const VICTORY_DELAY_MS: u64 = 2500;
pub const DEFEAT_DELAY_MS: u64 = 500;
pub const CAPTURE_DELAY_MS: u64 = 1000;

/// Deferred follow-up to a transition. The engine never self-schedules: the
/// host owns timing and feeds the continuation back via
/// [`crate::GameSession::resume`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationAction {
    EnemyTurn,
    CommitEvolution,
    FinishVictory,
    FinishDefeat,
    FinishCapture,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingContinuation {
    pub after_ms: u64,
    pub action: ContinuationAction,
    /// Identity of the encounter the continuation belongs to. A resume
    /// against a different encounter is stale and ignored.
    pub encounter_id: u64,
}

/// Result of one `apply`/`resume` call: the typed events that occurred plus
/// at most one deferred continuation.
#[derive(Debug, Clone, Default)]
pub struct ApplyOutcome {
    pub events: Vec<BattleEvent>,
    pub pending: Option<PendingContinuation>,
}

impl ApplyOutcome {
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_bounded_to_five_entries() {
        let mut log = EventLog::new();
        for i in 0..8 {
            log.push(format!("entry {}", i));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        let entries: Vec<&str> = log.entries().collect();
        assert_eq!(entries[0], "entry 3");
        assert_eq!(log.last(), Some("entry 7"));
    }

    #[test]
    fn scripted_rng_replays_in_order() {
        let mut rng = TurnRng::new_for_test(vec![7, 42, 99]);
        assert_eq!(rng.next_outcome("first"), 7);
        assert_eq!(rng.next_fraction("second"), 0.42);
        assert_eq!(rng.next_index("third", 10), 9);
    }

    #[test]
    #[should_panic(expected = "TurnRng exhausted")]
    fn exhausted_rng_panics_with_reason() {
        let mut rng = TurnRng::new_for_test(vec![]);
        rng.next_outcome("nothing left");
    }

    #[test]
    fn difficulty_rates_sum_to_one_hundred() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let total: u32 = difficulty.encounter_rates().iter().map(|&r| r as u32).sum();
            assert_eq!(total, 100);
        }
    }

    #[test]
    fn effectiveness_suffixes() {
        let event = |e: f32| BattleEvent::MoveUsed {
            user: "Pikachu".into(),
            target: "Gastly".into(),
            move_name: "Quick Attack".into(),
            effectiveness: Some(e),
        };
        assert!(event(0.0).format().contains("doesn't affect"));
        assert!(event(4.0).format().contains("EXTREMELY effective"));
        assert!(event(2.0).format().contains("Super effective"));
        assert!(event(0.5).format().contains("Not very effective"));
        assert_eq!(event(1.0).format(), "Pikachu used Quick Attack!");
    }
}
