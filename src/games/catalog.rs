use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Lifecycle stage of a game as shown in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Available,
    Beta,
    Development,
    ComingSoon,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Available => "available",
            GameStatus::Beta => "beta",
            GameStatus::Development => "development",
            GameStatus::ComingSoon => "coming-soon",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = UnknownGameToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(GameStatus::Available),
            "beta" => Ok(GameStatus::Beta),
            "development" => Ok(GameStatus::Development),
            "coming-soon" => Ok(GameStatus::ComingSoon),
            other => Err(UnknownGameToken {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GameDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl GameDifficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            GameDifficulty::Beginner => "Beginner",
            GameDifficulty::Intermediate => "Intermediate",
            GameDifficulty::Advanced => "Advanced",
            GameDifficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for GameDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameDifficulty {
    type Err = UnknownGameToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(GameDifficulty::Beginner),
            "Intermediate" => Ok(GameDifficulty::Intermediate),
            "Advanced" => Ok(GameDifficulty::Advanced),
            "Expert" => Ok(GameDifficulty::Expert),
            other => Err(UnknownGameToken {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownGameToken {
    pub value: String,
}

impl fmt::Display for UnknownGameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown catalog token: '{}'", self.value)
    }
}

impl std::error::Error for UnknownGameToken {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PromotionalBanner {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub gradient: &'static str,
    pub cta: &'static str,
    pub badge: Option<&'static str>,
    pub players: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MiniGame {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub icon: &'static str,
    pub status: GameStatus,
    pub category: &'static str,
    pub difficulty: GameDifficulty,
    pub estimated_time: &'static str,
    pub rewards: &'static str,
    pub current_players: Option<u32>,
    pub rating: f32,
    pub thumbnail: &'static str,
    pub progress: u8,
    pub estimated_release: &'static str,
    pub donation_goal: u32,
    pub current_donations: u32,
    pub features: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

pub static PROMOTIONAL_BANNERS: &[PromotionalBanner] = &[
    PromotionalBanner {
        id: 1,
        title: "🚀 WEB3 LEARNING REVOLUTION",
        subtitle: "Learn blockchain while earning rewards",
        description: "Master smart contracts, earn crypto, and build the future",
        image: "/images/banner/web3-learning.png",
        gradient: "from-purple-600 via-pink-600 to-orange-600",
        cta: "Start Learning Now",
        badge: Some("🔥 HOT"),
        players: Some("2,847 Active Learners"),
    },
    PromotionalBanner {
        id: 2,
        title: "🏆 DAILY CONTESTS & PRIZES",
        subtitle: "Compete with developers worldwide",
        description: "Win XLM, NFTs, and exclusive web3 opportunities",
        image: "/images/banner/daily-contest.png",
        gradient: "from-blue-600 via-cyan-600 to-teal-600",
        cta: "Join Contest",
        badge: Some("⚡ LIVE"),
        players: Some("1,234 Contestants"),
    },
    PromotionalBanner {
        id: 3,
        title: "🎯 SECRET MISSIONS UNLOCKED",
        subtitle: "Hidden challenges await",
        description: "Discover secret quests and earn legendary rewards",
        image: "/images/banner/secret-missions.png",
        gradient: "from-green-600 via-emerald-600 to-teal-600",
        cta: "Explore Missions",
        badge: Some("🌟 NEW"),
        players: Some("567 Mission Hunters"),
    },
    PromotionalBanner {
        id: 4,
        title: "🌟 FEATURED GAME OF THE WEEK 🌟",
        subtitle: "NEXUS Web3 Infinite Runner",
        description: "Master blockchain fundamentals through interactive gameplay!",
        image: "/videos/infinite-runner.mp4",
        gradient: "from-yellow-500 via-orange-500 to-red-500",
        cta: "Play Now",
        badge: Some("⭐ FEATURED"),
        players: None,
    },
];

pub static GAME_CATEGORIES: &[GameCategory] = &[
    GameCategory {
        id: "all",
        name: "🎮 All Games",
        count: 8,
    },
    GameCategory {
        id: "available",
        name: "✅ Available",
        count: 3,
    },
    GameCategory {
        id: "beta",
        name: "🧪 Beta",
        count: 2,
    },
    GameCategory {
        id: "development",
        name: "🚧 In Development",
        count: 2,
    },
    GameCategory {
        id: "coming-soon",
        name: "⏳ Coming Soon",
        count: 1,
    },
];

pub static MINI_GAMES: &[MiniGame] = &[
    MiniGame {
        id: "web3-basics-adventure",
        title: "Web3 Basics Adventure | NEXUS Infinite Runner",
        description: "Embark on an epic journey through blockchain fundamentals. Learn smart contracts, wallets, and DeFi while earning crypto rewards!",
        short_description: "Master blockchain basics through interactive gameplay",
        icon: "🌐",
        status: GameStatus::Beta,
        category: "learning",
        difficulty: GameDifficulty::Beginner,
        estimated_time: "NEXUS Web3 Infinite Runner",
        rewards: "50 XLM + NFT Badge",
        current_players: None,
        rating: 4.8,
        thumbnail: "/images/games/infinite-runner.png",
        progress: 20,
        estimated_release: "Available Now",
        donation_goal: 0,
        current_donations: 0,
        features: &[
            "Smart Contract Basics",
            "Wallet Security",
            "DeFi Fundamentals",
            "Interactive Quests",
        ],
        achievements: &[
            "First Transaction",
            "Smart Contract Master",
            "DeFi Explorer",
            "Blockchain Pioneer",
        ],
    },
    MiniGame {
        id: "escrow-puzzle-master",
        title: "Escrow Puzzle Master",
        description: "Solve complex escrow puzzles while learning Stellar blockchain fundamentals. Complete challenges, unlock achievements, and become a DeFi expert!",
        short_description: "Master the Art of Trustless Transactions",
        icon: "⭐",
        status: GameStatus::Development,
        category: "blockchain",
        difficulty: GameDifficulty::Intermediate,
        estimated_time: "4-5 hours",
        rewards: "100 XLM + Expert Badge",
        current_players: Some(0),
        rating: 0.0,
        thumbnail: "/images/games/blank.png",
        progress: 0,
        estimated_release: "TBA",
        donation_goal: 15000,
        current_donations: 0,
        features: &[
            "Escrow Systems",
            "Multi-Sig Wallets",
            "Trustless Transactions",
            "Stellar Network",
        ],
        achievements: &[
            "Escrow Master",
            "Trust Guardian",
            "Stellar Expert",
            "Security Champion",
        ],
    },
    MiniGame {
        id: "defi-trading-arena",
        title: "DeFi Trading Arena",
        description: "Enter the competitive world of DeFi trading! Learn liquidity pools, yield farming, and automated market making while competing for top rankings.",
        short_description: "Compete in DeFi trading challenges",
        icon: "📈",
        status: GameStatus::Development,
        category: "defi",
        difficulty: GameDifficulty::Advanced,
        estimated_time: "6-8 hours",
        rewards: "200 XLM + Trading Trophy",
        current_players: Some(0),
        rating: 0.0,
        thumbnail: "/images/games/blank.png",
        progress: 0,
        estimated_release: "TBA",
        donation_goal: 15000,
        current_donations: 0,
        features: &[
            "Liquidity Pools",
            "Yield Farming",
            "AMM Strategies",
            "Risk Management",
        ],
        achievements: &[
            "Trading Champion",
            "Yield Master",
            "Risk Taker",
            "DeFi Legend",
        ],
    },
    MiniGame {
        id: "nft-creation",
        title: "NFT Creation Studio",
        description: "Unleash your creativity in the NFT universe! Design, mint, and trade unique digital assets while learning the art of digital ownership.",
        short_description: "Create and trade unique NFTs",
        icon: "🎨",
        status: GameStatus::Development,
        category: "nft",
        difficulty: GameDifficulty::Intermediate,
        estimated_time: "3-4 hours",
        rewards: "75 XLM + Creator Badge",
        current_players: Some(0),
        rating: 0.0,
        thumbnail: "/images/games/blank.png",
        progress: 0,
        estimated_release: "TBA",
        donation_goal: 15000,
        current_donations: 0,
        features: &[
            "NFT Design Tools",
            "Minting Process",
            "Marketplace Trading",
            "Royalty Systems",
        ],
        achievements: &[
            "Creative Genius",
            "NFT Pioneer",
            "Market Master",
            "Digital Artist",
        ],
    },
];

// Promotional banner rotation and pagination tuning for the catalog page.
pub const PROMO_ROTATION_INTERVAL_MS: u64 = 5_000;
pub const INITIAL_GAMES_PER_PAGE: usize = 4;
pub const LOAD_MORE_INCREMENT: usize = 4;
pub const DEFAULT_CATEGORY: &str = "all";
pub const HOVER_TRANSITION_DURATION_MS: u64 = 300;
pub const PROMO_TRANSITION_DURATION_MS: u64 = 1_000;

// Social links for the donation modal.
pub const DONATION_TELEGRAM_URL: &str = "https://t.me/josegomezdev";
pub const DONATION_DISCORD_URL: &str = "https://discord.gg/y8jADgKK";
