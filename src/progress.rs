//! Level completion ledger and unlock rules
//!
//! Consumes run outcomes; never drives the simulation. Unlocks are strictly
//! adjacent: a level opens when the previous level in its chapter is done,
//! and a chapter opens when the last level of the previous chapter is done.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::LEVELS_PER_CHAPTER;
use crate::level::LevelDescriptor;
use crate::sim::{EndCause, RunOutcome};

/// Per-user completion state: chapter → level → completed
///
/// BTreeMaps keep the serialized form stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressState {
    completed: BTreeMap<u32, BTreeMap<u32, bool>>,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, chapter: u32, level: u32) -> bool {
        self.completed
            .get(&chapter)
            .and_then(|levels| levels.get(&level))
            .copied()
            .unwrap_or(false)
    }

    /// Mark a level completed. Idempotent: re-completing has no extra effect.
    pub fn complete(&mut self, chapter: u32, level: u32) {
        self.completed.entry(chapter).or_default().insert(level, true);
    }

    /// Level 1 is always playable; level N needs level N−1 in the same
    /// chapter.
    pub fn is_level_unlocked(&self, chapter: u32, level: u32) -> bool {
        if level == 1 {
            return true;
        }
        self.is_completed(chapter, level - 1)
    }

    /// Chapter 1 is always playable; chapter C needs the last level of
    /// chapter C−1.
    pub fn is_chapter_unlocked(&self, chapter: u32) -> bool {
        if chapter == 1 {
            return true;
        }
        self.is_completed(chapter - 1, LEVELS_PER_CHAPTER)
    }

    /// Record a finished run. Only victories mark progress; currency was
    /// already credited coin by coin during the run.
    pub fn apply_outcome(&mut self, descriptor: &LevelDescriptor, outcome: &RunOutcome) {
        if outcome.ended != EndCause::TargetReached {
            return;
        }
        log::info!(
            "level {}-{} completed with {} stars",
            descriptor.chapter,
            descriptor.level,
            outcome.stars
        );
        self.complete(descriptor.chapter, descriptor.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn victory(stars: u8) -> RunOutcome {
        RunOutcome {
            score: 12,
            coins_collected: stars as u32,
            stars,
            ended: EndCause::TargetReached,
        }
    }

    #[test]
    fn test_first_level_and_chapter_always_unlocked() {
        let progress = ProgressState::new();
        assert!(progress.is_level_unlocked(1, 1));
        assert!(progress.is_level_unlocked(7, 1));
        assert!(progress.is_chapter_unlocked(1));
        assert!(!progress.is_chapter_unlocked(2));
    }

    #[test]
    fn test_level_unlocks_exactly_on_previous_completion() {
        let mut progress = ProgressState::new();
        assert!(!progress.is_level_unlocked(1, 2));

        progress.complete(1, 1);
        assert!(progress.is_level_unlocked(1, 2));
        assert!(!progress.is_level_unlocked(1, 3));
    }

    #[test]
    fn test_chapter_unlocks_on_last_level_of_previous() {
        let mut progress = ProgressState::new();
        for level in 1..LEVELS_PER_CHAPTER {
            progress.complete(1, level);
        }
        assert!(!progress.is_chapter_unlocked(2));

        progress.complete(1, LEVELS_PER_CHAPTER);
        assert!(progress.is_chapter_unlocked(2));
        assert!(!progress.is_chapter_unlocked(3));
    }

    #[test]
    fn test_apply_outcome_victory_only() {
        let mut progress = ProgressState::new();
        let descriptor = LevelDescriptor::generate(1, 1);

        let failed = RunOutcome {
            score: 3,
            coins_collected: 1,
            stars: 0,
            ended: EndCause::ObstacleCollision,
        };
        progress.apply_outcome(&descriptor, &failed);
        assert!(!progress.is_completed(1, 1));

        progress.apply_outcome(&descriptor, &victory(2));
        assert!(progress.is_completed(1, 1));

        // Idempotent
        progress.apply_outcome(&descriptor, &victory(3));
        assert!(progress.is_completed(1, 1));
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut progress = ProgressState::new();
        progress.complete(1, 1);
        progress.complete(2, 4);

        let json = serde_json::to_string(&progress).unwrap();
        let back: ProgressState = serde_json::from_str(&json).unwrap();
        assert!(back.is_completed(1, 1));
        assert!(back.is_completed(2, 4));
        assert!(!back.is_completed(2, 5));
    }
}
