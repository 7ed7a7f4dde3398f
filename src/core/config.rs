//! Session configuration.
//!
//! Difficulty is the only rule-affecting setting: how many cards a draw
//! turns over and how many times the waste may be recycled into the stock.
//! The engine reads it but never changes it.

use serde::{Deserialize, Serialize};

/// Cards turned over per draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawCount {
    One,
    Three,
}

impl DrawCount {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

/// How many times the waste may be recycled into the stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedealLimit {
    Unlimited,
    Limited(u32),
}

impl RedealLimit {
    /// Whether another recycle is allowed after `used` recycles.
    #[must_use]
    pub const fn allows(self, used: u32) -> bool {
        match self {
            RedealLimit::Unlimited => true,
            RedealLimit::Limited(max) => used < max,
        }
    }
}

/// Rule settings consumed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty {
    pub draw_count: DrawCount,
    pub max_redeals: RedealLimit,
}

impl Difficulty {
    #[must_use]
    pub const fn new(draw_count: DrawCount, max_redeals: RedealLimit) -> Self {
        Self {
            draw_count,
            max_redeals,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        DifficultyTier::Easy.difficulty()
    }
}

/// Named difficulty presets offered to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    /// Draw 1 card at a time, unlimited redeals.
    #[default]
    Easy,
    /// Draw 3 cards at a time, unlimited redeals.
    Medium,
    /// Draw 3 cards at a time, 3 redeals maximum.
    Hard,
}

impl DifficultyTier {
    /// Redeals allowed under `Hard`.
    pub const HARD_REDEALS: u32 = 3;

    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        match self {
            DifficultyTier::Easy => Difficulty::new(DrawCount::One, RedealLimit::Unlimited),
            DifficultyTier::Medium => Difficulty::new(DrawCount::Three, RedealLimit::Unlimited),
            DifficultyTier::Hard => {
                Difficulty::new(DrawCount::Three, RedealLimit::Limited(Self::HARD_REDEALS))
            }
        }
    }
}

impl From<DifficultyTier> for Difficulty {
    fn from(tier: DifficultyTier) -> Self {
        tier.difficulty()
    }
}

/// Configuration for a `Session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the first deal. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Rule settings.
    pub difficulty: Difficulty,
}

impl SessionConfig {
    /// Create a config with default difficulty and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so deals are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<Difficulty>) -> Self {
        self.difficulty = difficulty.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        let easy = DifficultyTier::Easy.difficulty();
        assert_eq!(easy.draw_count.count(), 1);
        assert_eq!(easy.max_redeals, RedealLimit::Unlimited);

        let medium = DifficultyTier::Medium.difficulty();
        assert_eq!(medium.draw_count.count(), 3);
        assert_eq!(medium.max_redeals, RedealLimit::Unlimited);

        let hard = DifficultyTier::Hard.difficulty();
        assert_eq!(hard.draw_count.count(), 3);
        assert_eq!(hard.max_redeals, RedealLimit::Limited(3));
    }

    #[test]
    fn test_redeal_limit() {
        assert!(RedealLimit::Unlimited.allows(1_000));
        assert!(RedealLimit::Limited(3).allows(2));
        assert!(!RedealLimit::Limited(3).allows(3));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new()
            .with_seed(123)
            .with_difficulty(DifficultyTier::Hard);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.difficulty, DifficultyTier::Hard.difficulty());
    }

    #[test]
    fn test_default_is_easy() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.difficulty, DifficultyTier::Easy.difficulty());
    }
}
