//! Gapwing - a side-scrolling gap-dodger simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, lifecycle state)
//! - `level`: Procedural per-level difficulty generation
//! - `progress`: Level/chapter unlock ledger
//! - `economy`: Coin balance and cosmetic unlocks
//!
//! Rendering, audio and menus are external collaborators: they consume the
//! per-tick [`sim::Snapshot`] and the [`sim::GameEvent`] stream, and feed
//! back nothing but discrete flap inputs.

pub mod economy;
pub mod level;
pub mod progress;
pub mod sim;

pub use economy::EconomyState;
pub use level::{LevelDescriptor, Theme};
pub use progress::ProgressState;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const GAME_WIDTH: f32 = 400.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick²
    pub const GRAVITY: f32 = 0.55;
    /// Velocity applied by one flap (negative = up)
    pub const FLAP_IMPULSE: f32 = -8.0;
    /// Obstacle speed floor; chapter 1 starts just above this
    pub const BASE_SPEED: f32 = 2.8;
    /// Gap size ceiling; shrinks with chapter down to MIN_GAP
    pub const BASE_GAP: f32 = 190.0;
    /// Obstacle speed cap
    pub const MAX_SPEED: f32 = 6.0;
    /// Gap size floor
    pub const MIN_GAP: f32 = 120.0;

    /// Obstacle column width
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    /// Bird hull is a BIRD_SIZE × BIRD_SIZE square
    pub const BIRD_SIZE: f32 = 34.0;
    /// The bird never moves horizontally during play
    pub const BIRD_X: f32 = 50.0;
    /// Coin sprite size (square)
    pub const COIN_SIZE: f32 = 30.0;
    /// Coin hitbox diameter; larger than the sprite so collection is forgiving
    pub const COIN_HITBOX: f32 = 40.0;
    /// Solid floor strip at the bottom of the playfield
    pub const FLOOR_HEIGHT: f32 = 16.0;

    /// Minimum top-segment height; also the floor-side margin, so the gap
    /// never touches the ceiling or the floor strip
    pub const OBSTACLE_MIN_TOP: f32 = 50.0;

    /// Entities are retired once this far past the left edge
    pub const RETIRE_MARGIN: f32 = 50.0;

    /// Chapter/level layout
    pub const TOTAL_CHAPTERS: u32 = 50;
    pub const LEVELS_PER_CHAPTER: u32 = 5;
}
