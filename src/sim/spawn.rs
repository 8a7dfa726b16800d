//! Obstacle and coin spawning
//!
//! New pairs enter at the right edge with a uniformly random top-segment
//! height; the gap itself is fixed by the level descriptor, so bounding the
//! top height bounds the whole gap away from the ceiling and floor.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, ObstaclePair};
use crate::consts::*;
use crate::level::LevelDescriptor;

/// Chance that a coin rides along with a freshly spawned pair
const COIN_CHANCE: f64 = 0.75;

/// Spawn one obstacle pair at the right edge, possibly with a coin centered
/// in its gap. IDs are assigned by the caller.
pub fn spawn_obstacle<R: Rng>(
    descriptor: &LevelDescriptor,
    rng: &mut R,
    obstacle_id: u32,
    coin_id: u32,
) -> (ObstaclePair, Option<Coin>) {
    let top_height = random_top_height(descriptor.gap, rng);

    let pair = ObstaclePair {
        id: obstacle_id,
        x: GAME_WIDTH,
        top_height,
        passed: false,
    };

    let coin = if rng.random_bool(COIN_CHANCE) {
        Some(Coin {
            id: coin_id,
            pos: Vec2::new(
                GAME_WIDTH + OBSTACLE_WIDTH / 2.0 - COIN_SIZE / 2.0,
                top_height + descriptor.gap / 2.0 - COIN_SIZE / 2.0,
            ),
            collected: false,
        })
    } else {
        None
    };

    (pair, coin)
}

/// Uniform integer top height within the legal band.
///
/// If the gap is so large that the upper bound falls below the lower bound,
/// the range degenerates to the lower bound; it must never invert.
fn random_top_height<R: Rng>(gap: f32, rng: &mut R) -> f32 {
    let min = OBSTACLE_MIN_TOP as i32;
    let max = (GAME_HEIGHT - gap - OBSTACLE_MIN_TOP - 50.0) as i32;
    if max <= min {
        return min as f32;
    }
    rng.random_range(min..=max) as f32
}
