//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable entity IDs
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{boundary_hit, check_collision, collect_coins, obstacle_hit};
pub use spawn::spawn_obstacle;
pub use state::{
    Bird, BirdView, Coin, EndCause, GameEvent, GamePhase, GameState, HitKind, ObstaclePair,
    ObstacleView, RunOutcome, Snapshot, star_rating,
};
pub use tick::{TickInput, tick};
