//! Run state and core simulation types
//!
//! Everything the loop mutates per tick lives here. State is deterministic:
//! seeded RNG, stable entity IDs, no wall-clock reads.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::level::LevelDescriptor;

/// Lifecycle state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap; bird bobs cosmetically
    Idle,
    /// Active gameplay
    Active,
    /// Target reached; bird flies off-screen before victory is declared
    Finishing,
    /// Run ended on a collision (terminal)
    Failed,
    /// Run completed (terminal)
    Victory,
}

impl GamePhase {
    /// Terminal phases accept no input and tick as no-ops
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Failed | GamePhase::Victory)
    }
}

/// What the bird hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    /// An obstacle segment
    Obstacle,
    /// Floor or ceiling
    Boundary,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    TargetReached,
    ObstacleCollision,
    BoundaryCollision,
}

/// Final result of one run, reported exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub score: u32,
    pub coins_collected: u32,
    /// 1 star baseline, 2 with ≥1 coin, 3 with ≥3 coins; 0 on failure
    pub stars: u8,
    pub ended: EndCause,
}

/// Star rating from the coins collected at the moment the target is reached
pub fn star_rating(coins_collected: u32) -> u8 {
    if coins_collected >= 3 {
        3
    } else if coins_collected >= 1 {
        2
    } else {
        1
    }
}

/// Events emitted by the tick, consumed by progression/economy/rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An obstacle pair was passed; score already incremented
    Scored,
    /// One coin collected; credit exactly one unit of currency
    CoinCollected,
    /// The run reached a terminal phase
    RunEnded(RunOutcome),
}

/// The player entity
///
/// `pos` is the top-left corner of the square hull; the bird's x stays at
/// [`BIRD_X`] for the whole run except the finishing fly-off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity, pixels per tick (positive = down)
    pub vel_y: f32,
    /// Display rotation in degrees, derived from velocity (cosmetic)
    pub rotation: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, GAME_HEIGHT / 2.0),
            vel_y: 0.0,
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + BIRD_SIZE
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + BIRD_SIZE
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BIRD_SIZE / 2.0)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Two vertically opposed segments with a fixed gap between them
///
/// The gap size is constant per level (the descriptor's `gap`); only the
/// top-segment height varies per pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge; decreases each tick
    pub x: f32,
    /// Height of the top segment = y of the gap's upper edge
    pub top_height: f32,
    /// Set once when the trailing edge crosses the bird's x (scoring gate)
    pub passed: bool,
}

impl ObstaclePair {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Y of the gap's lower edge for the given level gap size
    #[inline]
    pub fn gap_bottom(&self, gap: f32) -> f32 {
        self.top_height + gap
    }
}

/// A collectible coin, spawned centered in an obstacle gap
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Top-left corner of the coin sprite
    pub pos: Vec2,
    /// De-duplication gate: a coin is credited at most once
    pub collected: bool,
}

impl Coin {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(COIN_SIZE / 2.0)
    }
}

/// Complete run state, owned by the host and advanced by [`crate::sim::tick`]
#[derive(Debug, Clone)]
pub struct GameState {
    /// Immutable per-run configuration
    pub descriptor: LevelDescriptor,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG (the only consumer of randomness)
    pub rng: Pcg32,
    /// Current lifecycle phase
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active obstacle pairs, ordered left to right (spawn order)
    pub obstacles: Vec<ObstaclePair>,
    /// Active coins, collected ones retained until off-screen
    pub coins: Vec<Coin>,
    pub score: u32,
    pub coins_collected: u32,
    /// Simulation tick counter; drives the idle bob and timing
    pub ticks: u64,
    /// Ticks spent in `Active`; drives the spawn cadence
    pub spawn_clock: u64,
    /// Stars captured at the instant the target was reached
    pub stars: u8,
    /// Collision that ended the run, if any
    pub hit: Option<HitKind>,
    /// Guard: a run reports its outcome exactly once
    outcome_reported: bool,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run for the given level configuration
    pub fn new(descriptor: LevelDescriptor, seed: u64) -> Self {
        Self {
            descriptor,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            bird: Bird::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0,
            coins_collected: 0,
            ticks: 0,
            spawn_clock: 0,
            stars: 0,
            hit: None,
            outcome_reported: false,
            next_id: 1,
        }
    }

    /// Full reset: fresh bird, empty entity lists, zero counters.
    ///
    /// Replay of a level is a brand-new run over the same descriptor; the
    /// RNG is reseeded so the obstacle sequence repeats.
    pub fn reset(&mut self) {
        *self = Self::new(self.descriptor, self.seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Mark the outcome as reported; returns false if it already was.
    pub(crate) fn try_report_outcome(&mut self) -> bool {
        if self.outcome_reported {
            return false;
        }
        self.outcome_reported = true;
        true
    }

    /// Build the terminal outcome for the current state
    pub fn outcome(&self, ended: EndCause) -> RunOutcome {
        RunOutcome {
            score: self.score,
            coins_collected: self.coins_collected,
            stars: self.stars,
            ended,
        }
    }

    /// Per-tick view for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bird: BirdView {
                pos: self.bird.pos,
                vel_y: self.bird.vel_y,
                rotation: self.bird.rotation,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_top: o.top_height,
                    gap_bottom: o.gap_bottom(self.descriptor.gap),
                })
                .collect(),
            coins: self
                .coins
                .iter()
                .filter(|c| !c.collected)
                .map(|c| c.pos)
                .collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}

/// Bird as seen by the renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BirdView {
    pub pos: Vec2,
    pub vel_y: f32,
    pub rotation: f32,
}

/// Obstacle pair as seen by the renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Read-only per-tick output of the simulation, the render boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub bird: BirdView,
    /// Ordered list of active obstacles
    pub obstacles: Vec<ObstacleView>,
    /// Positions of active, uncollected coins
    pub coins: Vec<Vec2>,
    pub score: u32,
    pub phase: GamePhase,
}
