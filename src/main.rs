use std::thread;
use std::time::Duration;

use wildgrass::{ApplyOutcome, Difficulty, GamePhase, GameSession, Intent, Species, TurnRng};

// Demo host loop. The engine never sleeps on its own: every deferred step
// comes back as a PendingContinuation and the host owns the clock. The demo
// compresses the delays so a full run takes a few seconds.
const TIME_SCALE: u64 = 10;

fn main() {
    println!("=== Wildgrass battle demo ===");
    let mut session = GameSession::new(&mut TurnRng::new_random());

    drive(&mut session, Intent::SelectDifficulty(Difficulty::Medium));
    drive(&mut session, Intent::ChooseStarter(Species::Charmander));

    let mut battles_finished = 0;
    let mut steps = 0;
    while battles_finished < 6 && steps < 300 {
        steps += 1;
        match session.phase() {
            GamePhase::Battle if session.is_player_turn() => {
                let intent = choose_action(&session);
                drive(&mut session, intent);
            }
            GamePhase::Battle | GamePhase::Evolving => {
                // Waiting on a continuation the drive loop already consumed;
                // nothing to do but should not happen in practice.
                break;
            }
            GamePhase::Victory | GamePhase::Captured => {
                battles_finished += 1;
                print_status(&session);
                drive(&mut session, Intent::Continue);
            }
            GamePhase::TheftEvent => drive(&mut session, Intent::Continue),
            GamePhase::LegendaryIntro => {
                println!("  A legendary challenge awaits!");
                drive(&mut session, Intent::AcceptLegendaryChallenge);
            }
            GamePhase::Defeat => {
                battles_finished += 1;
                drive(&mut session, Intent::Continue);
            }
            GamePhase::GameOver => {
                println!("  Game over.");
                break;
            }
            _ => break,
        }
    }

    println!();
    println!("Demo finished after {} battle(s).", battles_finished);
    println!("  Wins: {}", session.wins());
    if let Some(roster) = session.roster() {
        println!("  Roster:");
        for member in roster.members() {
            println!(
                "    {} {} (HP {}/{}, EXP {})",
                member.glyph(),
                member.name(),
                member.hp,
                member.max_hp,
                member.exp
            );
        }
    }
    if !session.collection().is_empty() {
        let caught: Vec<&str> = session.collection().iter().map(String::as_str).collect();
        println!("  Collection: {}", caught.join(", "));
    }
}

/// Simple policy: capture weakened wilds, otherwise use the first damaging
/// move.
fn choose_action(session: &GameSession) -> Intent {
    if let Some(wild) = session.wild() {
        if wild.hp_fraction() < 0.25 {
            return Intent::AttemptCapture;
        }
    }
    let slot = session
        .roster()
        .and_then(|roster| {
            roster
                .active()
                .moves
                .iter()
                .position(|m| m.effect.is_damaging())
        })
        .unwrap_or(0);
    Intent::SelectMove(slot)
}

/// Apply an intent, print what happened, and chase every continuation the
/// engine hands back after its (scaled-down) delay.
fn drive(session: &mut GameSession, intent: Intent) {
    let mut outcome = session.apply(intent, &mut TurnRng::new_random());
    print_events(&outcome);
    while let Some(pending) = outcome.pending {
        thread::sleep(Duration::from_millis(pending.after_ms / TIME_SCALE));
        outcome = session.resume(pending, &mut TurnRng::new_random());
        print_events(&outcome);
    }
}

fn print_events(outcome: &ApplyOutcome) {
    for event in &outcome.events {
        println!("  ▸ {}", event.format());
    }
}

fn print_status(session: &GameSession) {
    if let Some(roster) = session.roster() {
        let active = roster.active();
        println!(
            "  -- {} HP {}/{} | EXP {} | Wins {} --",
            active.name(),
            active.hp,
            active.max_hp,
            active.exp,
            session.wins()
        );
    }
}
