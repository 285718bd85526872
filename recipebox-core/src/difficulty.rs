//! Recipe difficulty classification.
//!
//! Difficulty is derived from cooking time and ingredient count and is never
//! stored. See [`classify`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDifficultyError;

/// Recipes cooking in fewer minutes than this count as quick.
pub const QUICK_COOKING_MINUTES: u32 = 10;

/// Recipes with fewer ingredients than this count as simple.
pub const FEW_INGREDIENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// All levels, from easiest to hardest
    pub const ALL: &'static [Difficulty] = &[
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Intermediate,
        Difficulty::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Labels are matched exactly, as offered by the search form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Classify a recipe by cooking time (minutes) and number of ingredients.
///
/// | quick (< 10 min) | few ingredients (< 4) | result       |
/// |------------------|-----------------------|--------------|
/// | yes              | yes                   | Easy         |
/// | yes              | no                    | Medium       |
/// | no               | yes                   | Intermediate |
/// | no               | no                    | Hard         |
pub fn classify(cooking_time: u32, ingredient_count: usize) -> Difficulty {
    let quick = cooking_time < QUICK_COOKING_MINUTES;
    let few = ingredient_count < FEW_INGREDIENTS;

    match (quick, few) {
        (true, true) => Difficulty::Easy,
        (true, false) => Difficulty::Medium,
        (false, true) => Difficulty::Intermediate,
        (false, false) => Difficulty::Hard,
    }
}
