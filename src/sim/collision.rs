//! Collision detection
//!
//! Axis-aligned tests between the bird's square hull and obstacle segments,
//! plus a circular test for coin collection. All functions are stateless;
//! they read entity positions and nothing else.

use super::state::{Bird, Coin, HitKind, ObstaclePair};
use crate::consts::*;

/// Y of the walkable floor line (top of the floor strip)
#[inline]
pub fn floor_y() -> f32 {
    GAME_HEIGHT - FLOOR_HEIGHT
}

/// Bird's bottom edge at or beyond the floor, or top edge at or above the
/// ceiling.
pub fn boundary_hit(bird: &Bird) -> bool {
    bird.bottom() >= floor_y() || bird.top() <= 0.0
}

/// Overlap on the horizontal axis AND outside the gap on the vertical axis.
///
/// Pairs not overlapping the bird horizontally are skipped; that is an
/// early exit, not a correctness requirement.
pub fn obstacle_hit(bird: &Bird, obstacles: &[ObstaclePair], gap: f32) -> bool {
    for pair in obstacles {
        if bird.right() > pair.x && bird.left() < pair.right() {
            if bird.top() < pair.top_height || bird.bottom() > pair.gap_bottom(gap) {
                return true;
            }
        }
    }
    false
}

/// Full per-tick collision test. Boundary hits win over obstacle hits when
/// both would trigger on the same tick.
pub fn check_collision(bird: &Bird, obstacles: &[ObstaclePair], gap: f32) -> Option<HitKind> {
    if boundary_hit(bird) {
        return Some(HitKind::Boundary);
    }
    if obstacle_hit(bird, obstacles, gap) {
        return Some(HitKind::Obstacle);
    }
    None
}

/// Circular-distance coin collection.
///
/// The coin hit radius is intentionally larger than its visual radius so
/// collection feels forgiving. Sets the `collected` flag and returns the
/// IDs of newly collected coins; already-collected coins are skipped, so a
/// coin can be credited at most once.
pub fn collect_coins(bird: &Bird, coins: &mut [Coin]) -> Vec<u32> {
    let bird_center = bird.center();
    let radius_sum = BIRD_SIZE / 2.0 + COIN_HITBOX / 2.0;

    let mut collected = Vec::new();
    for coin in coins.iter_mut() {
        if coin.collected {
            continue;
        }
        if bird_center.distance(coin.center()) < radius_sum {
            coin.collected = true;
            collected.push(coin.id);
        }
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bird_at(y: f32) -> Bird {
        Bird {
            pos: Vec2::new(BIRD_X, y),
            vel_y: 0.0,
            rotation: 0.0,
        }
    }

    fn pair_at(x: f32, top_height: f32) -> ObstaclePair {
        ObstaclePair {
            id: 1,
            x,
            top_height,
            passed: false,
        }
    }

    #[test]
    fn test_ceiling_is_a_boundary_hit() {
        // Player at y = 0 is a boundary hit regardless of obstacle positions
        let bird = bird_at(0.0);
        let obstacles = [pair_at(BIRD_X, 200.0)];
        assert_eq!(
            check_collision(&bird, &obstacles, 190.0),
            Some(HitKind::Boundary)
        );
    }

    #[test]
    fn test_floor_hit() {
        let bird = bird_at(floor_y() - BIRD_SIZE);
        assert!(boundary_hit(&bird));
        let bird = bird_at(floor_y() - BIRD_SIZE - 0.1);
        assert!(!boundary_hit(&bird));
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        // Gap from 200 to 390; bird hull 250..284 sits well inside
        let bird = bird_at(250.0);
        let obstacles = [pair_at(BIRD_X, 200.0)];
        assert_eq!(check_collision(&bird, &obstacles, 190.0), None);
    }

    #[test]
    fn test_bird_clips_top_segment() {
        let bird = bird_at(190.0); // top edge above gap top at 200
        let obstacles = [pair_at(BIRD_X, 200.0)];
        assert_eq!(
            check_collision(&bird, &obstacles, 190.0),
            Some(HitKind::Obstacle)
        );
    }

    #[test]
    fn test_bird_clips_bottom_segment() {
        // Gap bottom at 390; bird bottom at 400
        let bird = bird_at(366.0);
        let obstacles = [pair_at(BIRD_X, 200.0)];
        assert_eq!(
            check_collision(&bird, &obstacles, 190.0),
            Some(HitKind::Obstacle)
        );
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        // Same vertical clip, but the pair is far to the right
        let bird = bird_at(190.0);
        let obstacles = [pair_at(300.0, 200.0)];
        assert_eq!(check_collision(&bird, &obstacles, 190.0), None);
    }

    #[test]
    fn test_coin_collected_within_hit_radius() {
        let bird = bird_at(250.0);
        let mut coins = vec![Coin {
            id: 5,
            // Coin center ~30px from the bird center; radius sum is 37
            pos: Vec2::new(BIRD_X + 30.0, 252.0),
            collected: false,
        }];
        let got = collect_coins(&bird, &mut coins);
        assert_eq!(got, vec![5]);
        assert!(coins[0].collected);
    }

    #[test]
    fn test_collected_coin_is_never_counted_again() {
        let bird = bird_at(250.0);
        let mut coins = vec![Coin {
            id: 5,
            pos: Vec2::new(BIRD_X + 10.0, 252.0),
            collected: false,
        }];
        assert_eq!(collect_coins(&bird, &mut coins).len(), 1);
        // Second pass on the same tick's positions yields nothing
        assert!(collect_coins(&bird, &mut coins).is_empty());
    }

    #[test]
    fn test_far_coin_not_collected() {
        let bird = bird_at(250.0);
        let mut coins = vec![Coin {
            id: 5,
            pos: Vec2::new(BIRD_X + 100.0, 252.0),
            collected: false,
        }];
        assert!(collect_coins(&bird, &mut coins).is_empty());
        assert!(!coins[0].collected);
    }
}
