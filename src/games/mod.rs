//! Static content for the mini games catalog.
//!
//! Everything here is declared at load time and never mutated: promotional
//! banners, categories, the games themselves, display tuning constants, and
//! the color-token lookup helpers the UI uses for difficulty, status and
//! progress badges. The surrounding application renders this data; this crate
//! only owns the values.

mod catalog;
mod colors;

pub use catalog::{
    GameCategory, GameDifficulty, GameStatus, MiniGame, PromotionalBanner, UnknownGameToken,
    DEFAULT_CATEGORY, DONATION_DISCORD_URL, DONATION_TELEGRAM_URL, GAME_CATEGORIES,
    HOVER_TRANSITION_DURATION_MS, INITIAL_GAMES_PER_PAGE, LOAD_MORE_INCREMENT, MINI_GAMES,
    PROMOTIONAL_BANNERS, PROMO_ROTATION_INTERVAL_MS, PROMO_TRANSITION_DURATION_MS,
};
pub use colors::{
    difficulty_color, progress_color, status_color, DIFFICULTY_ADVANCED_COLOR,
    DIFFICULTY_BEGINNER_COLOR, DIFFICULTY_DEFAULT_COLOR, DIFFICULTY_EXPERT_COLOR,
    DIFFICULTY_INTERMEDIATE_COLOR, PROGRESS_HIGH_COLOR, PROGRESS_LOW_COLOR, PROGRESS_MEDIUM_COLOR,
    PROGRESS_VERY_LOW_COLOR, STATUS_AVAILABLE_COLOR, STATUS_BETA_COLOR, STATUS_COMING_SOON_COLOR,
    STATUS_DEFAULT_COLOR, STATUS_DEVELOPMENT_COLOR,
};
