//! Fixed timestep simulation tick
//!
//! One call advances the run by exactly one tick. The host schedules calls
//! from a display-synchronized timer; no two ticks ever run concurrently,
//! and ticks against a terminal state are no-ops, so a late-firing timer
//! after teardown cannot corrupt anything.

use super::collision::{check_collision, collect_coins, floor_y};
use super::spawn::spawn_obstacle;
use super::state::{star_rating, EndCause, GameEvent, GamePhase, GameState, HitKind};
use crate::consts::*;

/// Vertical target the bird eases toward while flying off-screen
const FINISH_TARGET_Y: f32 = GAME_HEIGHT / 2.0 - 50.0;
/// Rightward speed during the victory fly-off, pixels per tick
const FINISH_SPEED: f32 = 6.0;
/// Fraction of the remaining vertical distance closed per finishing tick
const FINISH_EASE: f32 = 0.05;
/// Small upward hop at the moment of an obstacle death
const DEATH_BOUNCE: f32 = -3.0;

/// Input for a single tick
///
/// `flap` is edge-triggered: however many flap events arrived during the
/// frame window, they collapse to this one flag and a single impulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub flap: bool,
}

/// Advance the run by one tick, returning the events it produced.
///
/// Event order within a tick: scoring, then coin collection, then the
/// collision verdict. `RunEnded` is emitted exactly once per run.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle => tick_idle(state, input),
        GamePhase::Active => tick_active(state, input, &mut events),
        GamePhase::Finishing => tick_finishing(state, &mut events),
        GamePhase::Failed => tick_failed(state),
        // Terminal; flaps and timers are ignored
        GamePhase::Victory => {}
    }

    events
}

/// Cosmetic bob around the resting position; no physics, no collisions.
fn tick_idle(state: &mut GameState, input: &TickInput) {
    state.ticks += 1;

    if input.flap {
        state.bird.vel_y = FLAP_IMPULSE;
        state.phase = GamePhase::Active;
        log::info!(
            "run started: chapter {} level {} (target {})",
            state.descriptor.chapter,
            state.descriptor.level,
            state.descriptor.target_score
        );
        return;
    }

    let t = state.ticks as f32 / 18.0;
    let center_y = (GAME_HEIGHT - BIRD_SIZE) / 2.0;
    state.bird.pos.y = center_y + t.sin() * 8.0;
    state.bird.rotation = t.sin() * 5.0;
}

fn tick_active(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    state.ticks += 1;
    state.spawn_clock += 1;

    // Flap impulse replaces the velocity outright; repeated events within
    // one frame window are idempotent, never additive.
    if input.flap {
        state.bird.vel_y = FLAP_IMPULSE;
    }

    // Kinematics
    state.bird.vel_y += GRAVITY;
    state.bird.pos.y += state.bird.vel_y;

    // Rotation tracks velocity: nose up while rising, tipping toward 90°
    // in fall. Display feedback only.
    if state.bird.vel_y < 0.0 {
        state.bird.rotation = (state.bird.rotation - 10.0).max(-25.0);
    } else {
        state.bird.rotation = (state.bird.vel_y * 4.0).min(90.0);
    }

    // Advance the world leftward
    let speed = state.descriptor.obstacle_speed;
    for pair in &mut state.obstacles {
        pair.x -= speed;
    }
    for coin in &mut state.coins {
        coin.pos.x -= speed;
    }

    // Retire entities fully past the left edge
    state
        .obstacles
        .retain(|p| p.right() >= -RETIRE_MARGIN);
    state
        .coins
        .retain(|c| c.pos.x + COIN_SIZE >= -RETIRE_MARGIN);

    // Spawn on cadence
    if state.spawn_clock % state.descriptor.spawn_interval() == 0 {
        let obstacle_id = state.next_entity_id();
        let coin_id = state.next_entity_id();
        let descriptor = state.descriptor;
        let (pair, coin) = spawn_obstacle(&descriptor, &mut state.rng, obstacle_id, coin_id);
        log::debug!("spawned pair {} (top {})", pair.id, pair.top_height);
        state.obstacles.push(pair);
        if let Some(coin) = coin {
            state.coins.push(coin);
        }
    }

    // Pass-through scoring: one point the first tick a pair's trailing edge
    // crosses the bird's fixed x. The `passed` flag makes it exactly once.
    for pair in &mut state.obstacles {
        if !pair.passed && pair.right() < BIRD_X {
            pair.passed = true;
            state.score += 1;
            log::trace!("passed pair {}, score {}", pair.id, state.score);
            events.push(GameEvent::Scored);
        }
    }

    let target_reached = state.score >= state.descriptor.target_score;
    if target_reached {
        // Stars are captured at this instant; coins collected during the
        // fly-off no longer change the rating.
        state.stars = star_rating(state.coins_collected);
        state.phase = GamePhase::Finishing;
        log::info!(
            "target reached: score {} with {} coins ({} stars)",
            state.score,
            state.coins_collected,
            state.stars
        );
    }

    // Coin collection still counts on the target-crossing tick
    for id in collect_coins(&state.bird, &mut state.coins) {
        state.coins_collected += 1;
        log::trace!("collected coin {}", id);
        events.push(GameEvent::CoinCollected);
    }

    if target_reached {
        return;
    }

    // Collision verdict ends the run immediately; no retries in the loop.
    if let Some(hit) = check_collision(&state.bird, &state.obstacles, state.descriptor.gap) {
        state.hit = Some(hit);
        state.phase = GamePhase::Failed;
        let cause = match hit {
            HitKind::Obstacle => {
                // Small hop before the death fall
                state.bird.vel_y = DEATH_BOUNCE;
                EndCause::ObstacleCollision
            }
            HitKind::Boundary => EndCause::BoundaryCollision,
        };
        log::info!("run failed ({:?}) at score {}", hit, state.score);
        if state.try_report_outcome() {
            events.push(GameEvent::RunEnded(state.outcome(cause)));
        }
    }
}

/// Critically-damped approach to the display position while accelerating
/// off the right edge. Not physical gravity; the run can no longer fail.
fn tick_finishing(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.ticks += 1;

    state.bird.pos.x += FINISH_SPEED;
    state.bird.pos.y += (FINISH_TARGET_Y - state.bird.pos.y) * FINISH_EASE;
    state.bird.rotation += 15.0;

    if state.bird.pos.x > GAME_WIDTH + RETIRE_MARGIN {
        state.phase = GamePhase::Victory;
        log::info!(
            "victory: score {} coins {} stars {}",
            state.score,
            state.coins_collected,
            state.stars
        );
        if state.try_report_outcome() {
            events.push(GameEvent::RunEnded(state.outcome(EndCause::TargetReached)));
        }
    }
}

/// Cosmetic death fall after an obstacle hit: amplified gravity down to the
/// floor, then freeze. Boundary-cause failures freeze where they are.
fn tick_failed(state: &mut GameState) {
    if state.hit != Some(HitKind::Obstacle) {
        return;
    }
    if state.bird.bottom() >= floor_y() {
        return;
    }
    state.ticks += 1;
    state.bird.vel_y += GRAVITY * 1.5;
    state.bird.pos.y += state.bird.vel_y;
    state.bird.rotation = (state.bird.rotation + 10.0).min(90.0);
}
