//! Color-token lookups for difficulty, progress and status badges.
//!
//! All lookups are total: unrecognized input maps to the documented default
//! token instead of failing, because the UI must always have something to
//! render.

use crate::games::catalog::{GameDifficulty, GameStatus};

pub const DIFFICULTY_BEGINNER_COLOR: &str = "from-green-500 to-emerald-500";
pub const DIFFICULTY_INTERMEDIATE_COLOR: &str = "from-blue-500 to-cyan-500";
pub const DIFFICULTY_ADVANCED_COLOR: &str = "from-purple-500 to-pink-500";
pub const DIFFICULTY_EXPERT_COLOR: &str = "from-red-500 to-orange-500";
pub const DIFFICULTY_DEFAULT_COLOR: &str = "from-gray-500 to-slate-500";

pub const PROGRESS_HIGH_COLOR: &str = "from-green-500 to-emerald-500";
pub const PROGRESS_MEDIUM_COLOR: &str = "from-yellow-500 to-orange-500";
pub const PROGRESS_LOW_COLOR: &str = "from-orange-500 to-red-500";
pub const PROGRESS_VERY_LOW_COLOR: &str = "from-red-500 to-pink-500";

pub const STATUS_AVAILABLE_COLOR: &str = "bg-green-500/80";
pub const STATUS_BETA_COLOR: &str = "bg-blue-500/80";
pub const STATUS_DEVELOPMENT_COLOR: &str = "bg-yellow-500/80";
pub const STATUS_COMING_SOON_COLOR: &str = "bg-gray-500/80";
pub const STATUS_DEFAULT_COLOR: &str = "bg-gray-500/80";

/// Gradient token for a completion percentage. Bands use inclusive lower
/// bounds: `>= 80` high, `>= 60` medium, `>= 40` low, below that very low.
pub fn progress_color(progress: u8) -> &'static str {
    if progress >= 80 {
        PROGRESS_HIGH_COLOR
    } else if progress >= 60 {
        PROGRESS_MEDIUM_COLOR
    } else if progress >= 40 {
        PROGRESS_LOW_COLOR
    } else {
        PROGRESS_VERY_LOW_COLOR
    }
}

/// Gradient token for a difficulty name; unrecognized names get the default
/// token.
pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty {
        "Beginner" => DIFFICULTY_BEGINNER_COLOR,
        "Intermediate" => DIFFICULTY_INTERMEDIATE_COLOR,
        "Advanced" => DIFFICULTY_ADVANCED_COLOR,
        "Expert" => DIFFICULTY_EXPERT_COLOR,
        _ => DIFFICULTY_DEFAULT_COLOR,
    }
}

/// Badge token for a status name; unrecognized names get the default token.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "available" => STATUS_AVAILABLE_COLOR,
        "beta" => STATUS_BETA_COLOR,
        "development" => STATUS_DEVELOPMENT_COLOR,
        "coming-soon" => STATUS_COMING_SOON_COLOR,
        _ => STATUS_DEFAULT_COLOR,
    }
}

impl GameDifficulty {
    pub fn color(self) -> &'static str {
        difficulty_color(self.as_str())
    }
}

impl GameStatus {
    pub fn color(self) -> &'static str {
        status_color(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bands_use_inclusive_lower_bounds() {
        assert_eq!(progress_color(85), PROGRESS_HIGH_COLOR);
        assert_eq!(progress_color(80), PROGRESS_HIGH_COLOR);
        assert_eq!(progress_color(79), PROGRESS_MEDIUM_COLOR);
        assert_eq!(progress_color(60), PROGRESS_MEDIUM_COLOR);
        assert_eq!(progress_color(40), PROGRESS_LOW_COLOR);
        assert_eq!(progress_color(10), PROGRESS_VERY_LOW_COLOR);
        assert_eq!(progress_color(0), PROGRESS_VERY_LOW_COLOR);
    }

    #[test]
    fn difficulty_lookup_falls_back_to_default() {
        assert_eq!(difficulty_color("Beginner"), DIFFICULTY_BEGINNER_COLOR);
        assert_eq!(difficulty_color("Expert"), DIFFICULTY_EXPERT_COLOR);
        assert_eq!(difficulty_color("Unknown"), DIFFICULTY_DEFAULT_COLOR);
        assert_eq!(GameDifficulty::Advanced.color(), DIFFICULTY_ADVANCED_COLOR);
    }

    #[test]
    fn status_lookup_falls_back_to_default() {
        assert_eq!(status_color("coming-soon"), STATUS_COMING_SOON_COLOR);
        assert_eq!(status_color("available"), STATUS_AVAILABLE_COLOR);
        assert_eq!(status_color("retired"), STATUS_DEFAULT_COLOR);
        assert_eq!(GameStatus::Beta.color(), STATUS_BETA_COLOR);
    }
}
