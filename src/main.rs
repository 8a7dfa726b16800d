//! Gapwing headless demo
//!
//! Runs one autoplayed level to a terminal state and feeds the event stream
//! into the progression ledger and the economy, the way a real host would.

use gapwing::consts::*;
use gapwing::level::LevelDescriptor;
use gapwing::sim::{tick, GameEvent, GamePhase, GameState, TickInput};
use gapwing::{EconomyState, ProgressState};

/// Safety cap so a pathological policy cannot spin forever
const MAX_TICKS: u64 = 120_000;

/// Flap whenever the bird's center sinks below the center of the next gap
/// (or mid-screen when no obstacle is ahead).
fn autopilot(state: &GameState) -> TickInput {
    let target_y = state
        .obstacles
        .iter()
        .find(|pair| pair.right() > BIRD_X)
        .map(|pair| pair.top_height + state.descriptor.gap / 2.0)
        .unwrap_or(GAME_HEIGHT / 2.0);

    TickInput {
        flap: state.bird.center().y > target_y,
    }
}

fn main() {
    env_logger::init();

    let descriptor = LevelDescriptor::generate(1, 1);
    log::info!(
        "playing chapter {} level {}: target {}, speed {:.2}, gap {:.1}, theme {:?}",
        descriptor.chapter,
        descriptor.level,
        descriptor.target_score,
        descriptor.obstacle_speed,
        descriptor.gap,
        descriptor.theme
    );

    let mut state = GameState::new(descriptor, 0xC0FFEE);
    let mut progress = ProgressState::new();
    let mut economy = EconomyState::new();

    // First flap leaves Idle; after that the autopilot decides.
    let mut events = tick(&mut state, &TickInput { flap: true });

    while !state.phase.is_terminal() && state.ticks < MAX_TICKS {
        let input = autopilot(&state);
        events.extend(tick(&mut state, &input));

        for event in events.drain(..) {
            match event {
                GameEvent::Scored => log::debug!("score: {}", state.score),
                GameEvent::CoinCollected => economy.credit_coin(),
                GameEvent::RunEnded(outcome) => {
                    log::info!("run ended: {:?}", outcome);
                    progress.apply_outcome(&descriptor, &outcome);
                }
            }
        }
    }

    println!(
        "{} after {} ticks: score {}/{}, {} coins banked",
        match state.phase {
            GamePhase::Victory => "victory",
            GamePhase::Failed => "failed",
            _ => "stalled",
        },
        state.ticks,
        state.score,
        descriptor.target_score,
        economy.coins
    );
    println!(
        "level 1-2 unlocked: {}",
        progress.is_level_unlocked(1, 2)
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("final snapshot:\n{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
