//! Procedural level parameter generation
//!
//! Difficulty rises with chapter, gently with level-within-chapter, and
//! saturates so high chapters stay playable. Generation is a pure function
//! of (chapter, level) so a descriptor can never desync across session
//! resumes: regenerating it always yields the same run configuration.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ambient weather tag carried by a theme (rendered by collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weather {
    Clear,
    Cloudy,
    Rain,
}

/// Visual theme palette, cycled per chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Daybreak,
    Dusk,
    Midnight,
    Rainforest,
    Desert,
}

/// Palette order matters: chapter 1 maps to the first entry.
pub const THEME_PALETTE: [Theme; 5] = [
    Theme::Daybreak,
    Theme::Dusk,
    Theme::Midnight,
    Theme::Rainforest,
    Theme::Desert,
];

impl Theme {
    /// Theme for a chapter index: `(chapter - 1) mod palette size`,
    /// clamped so anything below chapter 1 maps to the first entry.
    pub fn for_chapter(chapter: u32) -> Self {
        let index = chapter.saturating_sub(1) as usize % THEME_PALETTE.len();
        THEME_PALETTE[index]
    }

    pub fn weather(&self) -> Weather {
        match self {
            Theme::Daybreak => Weather::Clear,
            Theme::Dusk => Weather::Cloudy,
            Theme::Midnight => Weather::Clear,
            Theme::Rainforest => Weather::Rain,
            Theme::Desert => Weather::Clear,
        }
    }
}

/// Immutable per-run difficulty configuration
///
/// One instance per run, produced by [`LevelDescriptor::generate`] and handed
/// to the simulation at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    /// Chapter index (1-based)
    pub chapter: u32,
    /// Level index within the chapter (1-based)
    pub level: u32,
    /// Score that completes the level
    pub target_score: u32,
    /// Leftward obstacle speed, pixels per tick
    pub obstacle_speed: f32,
    /// Vertical gap size between obstacle segments
    pub gap: f32,
    /// Visual theme tag
    pub theme: Theme,
}

impl LevelDescriptor {
    /// Generate the descriptor for a chapter/level pair.
    ///
    /// Indices are expected to be ≥ 1; callers validate. Same inputs always
    /// produce the same descriptor.
    pub fn generate(chapter: u32, level: u32) -> Self {
        let target_score = 10 + ((chapter - 1) as f32 * 0.8).floor() as u32 + level * 2;
        let obstacle_speed = (BASE_SPEED + chapter as f32 * 0.08).min(MAX_SPEED);
        let gap = (BASE_GAP - chapter as f32 * 1.8).max(MIN_GAP);

        Self {
            chapter,
            level,
            target_score,
            obstacle_speed,
            gap,
            theme: Theme::for_chapter(chapter),
        }
    }

    /// Ticks between obstacle spawns.
    ///
    /// Faster obstacles spawn more often, keeping the on-screen spacing
    /// between pairs roughly constant in distance terms.
    pub fn spawn_interval(&self) -> u64 {
        (100.0 / (self.obstacle_speed / 3.0)).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chapter_one_level_one_formula() {
        let d = LevelDescriptor::generate(1, 1);
        assert_eq!(d.target_score, 12); // 10 + floor(0) + 2
        assert!((d.obstacle_speed - 2.88).abs() < 1e-6);
        assert!((d.gap - 188.2).abs() < 1e-4);
        assert_eq!(d.theme, Theme::Daybreak);
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(LevelDescriptor::generate(5, 3), LevelDescriptor::generate(5, 3));
    }

    #[test]
    fn test_speed_clamps_at_max() {
        // 2.8 + 50 * 0.08 = 6.8, clamped to 6.0
        let d = LevelDescriptor::generate(50, 1);
        assert_eq!(d.obstacle_speed, MAX_SPEED);
    }

    #[test]
    fn test_gap_clamps_at_min() {
        // 190 - 50 * 1.8 = 100, clamped to 120
        let d = LevelDescriptor::generate(50, 1);
        assert_eq!(d.gap, MIN_GAP);
    }

    #[test]
    fn test_theme_palette_cycles() {
        assert_eq!(Theme::for_chapter(0), Theme::Daybreak);
        assert_eq!(Theme::for_chapter(1), Theme::Daybreak);
        assert_eq!(Theme::for_chapter(2), Theme::Dusk);
        assert_eq!(Theme::for_chapter(6), Theme::Daybreak);
        assert_eq!(Theme::for_chapter(50), Theme::Desert);
    }

    #[test]
    fn test_spawn_interval_chapter_one() {
        // round(100 / (2.88 / 3)) = round(104.17) = 104
        let d = LevelDescriptor::generate(1, 1);
        assert_eq!(d.spawn_interval(), 104);
    }

    proptest! {
        #[test]
        fn prop_speed_in_range_and_monotone(chapter in 1u32..=200) {
            let d = LevelDescriptor::generate(chapter, 1);
            prop_assert!(d.obstacle_speed >= 2.88 - 1e-6);
            prop_assert!(d.obstacle_speed <= MAX_SPEED);
            let next = LevelDescriptor::generate(chapter + 1, 1);
            prop_assert!(next.obstacle_speed >= d.obstacle_speed);
        }

        #[test]
        fn prop_gap_in_range_and_non_increasing(chapter in 1u32..=200) {
            let d = LevelDescriptor::generate(chapter, 1);
            prop_assert!(d.gap >= MIN_GAP);
            prop_assert!(d.gap <= BASE_GAP);
            let next = LevelDescriptor::generate(chapter + 1, 1);
            prop_assert!(next.gap <= d.gap);
        }

        #[test]
        fn prop_target_score_non_decreasing(chapter in 1u32..=100, level in 1u32..=4) {
            let d = LevelDescriptor::generate(chapter, level);
            prop_assert!(LevelDescriptor::generate(chapter + 1, level).target_score >= d.target_score);
            prop_assert!(LevelDescriptor::generate(chapter, level + 1).target_score >= d.target_score);
        }
    }
}
