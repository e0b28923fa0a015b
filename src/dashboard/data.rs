//! Fixed dashboard content
//!
//! Every list shown on the dashboard is compiled in. Display order is array
//! order; entries have no identity beyond their position.

/// A sidebar navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub icon: &'static str,
    pub label: &'static str,
}

/// A game shown in the preview grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl GameEntry {
    /// Static label announced for the card
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.subtitle)
    }
}

/// A leaderboard row. Not sorted by points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: &'static str,
    pub name: &'static str,
    pub points: u32,
}

impl LeaderboardEntry {
    pub fn row(&self) -> String {
        format!("{} {} – {} pts", self.rank, self.name, self.points)
    }
}

/// A friend and their (fixed) presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendEntry {
    pub online: bool,
    pub name: &'static str,
}

impl FriendEntry {
    /// Presence dot
    pub fn status(&self) -> &'static str {
        if self.online {
            "🟢"
        } else {
            "⚪"
        }
    }

    pub fn row(&self) -> String {
        if self.online {
            format!("{} {}", self.status(), self.name)
        } else {
            format!("{} {} (offline)", self.status(), self.name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationEntry {
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementEntry {
    pub icon: &'static str,
    pub name: &'static str,
}

impl AchievementEntry {
    pub fn row(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub message: &'static str,
}

/// The signed-in user shown in the profile card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub level: u32,
    pub points: u32,
}

impl UserProfile {
    pub fn rows(&self) -> Vec<String> {
        vec![
            format!("Level: {}", self.level),
            format!("Points: {}", self.points),
        ]
    }
}

pub const BRAND_ICON: &str = "🎮";
pub const BRAND_NAME: &str = "Woopen Gamers";

pub const NAV_LINKS: [NavLink; 8] = [
    NavLink { icon: "🏠", label: "Home" },
    NavLink { icon: "🔍", label: "Search" },
    NavLink { icon: "💬", label: "Chat" },
    NavLink { icon: "🧭", label: "Explore" },
    NavLink { icon: "📂", label: "Library" },
    NavLink { icon: "⭐", label: "Reviews" },
    NavLink { icon: "🎁", label: "Rewards" },
    NavLink { icon: "📝", label: "Notes" },
];

pub const GAMES: [GameEntry; 4] = [
    GameEntry { title: "Best game", subtitle: "by football" },
    GameEntry { title: "Spotlight Game", subtitle: "Top Rated" },
    GameEntry { title: "Arcade Frenzy", subtitle: "Most Played" },
    GameEntry { title: "Puzzle Master", subtitle: "Trending" },
];

pub const LEADERBOARD: [LeaderboardEntry; 3] = [
    LeaderboardEntry { rank: "🏆", name: "PlayerOne", points: 1200 },
    LeaderboardEntry { rank: "🥈", name: "GamerX", points: 950 },
    LeaderboardEntry { rank: "🥉", name: "ProHero", points: 870 },
];

pub const FRIENDS: [FriendEntry; 3] = [
    FriendEntry { online: true, name: "Alex" },
    FriendEntry { online: true, name: "Mia" },
    FriendEntry { online: false, name: "Sam" },
];

pub const NOTIFICATIONS: [NotificationEntry; 3] = [
    NotificationEntry { message: "🎮 New game update available" },
    NotificationEntry { message: "⭐ Your review got 5 likes" },
    NotificationEntry { message: "👥 New friend request" },
];

pub const ACHIEVEMENTS: [AchievementEntry; 2] = [
    AchievementEntry { icon: "🏅", name: "First Win" },
    AchievementEntry { icon: "🎯", name: "Sharp Shooter" },
];

pub const ACTIVITIES: [ActivityEntry; 3] = [
    ActivityEntry { message: "Played 'Best game'" },
    ActivityEntry { message: "Earned 'First Win' badge" },
    ActivityEntry { message: "Added Mia as friend" },
];

pub const USER: UserProfile = UserProfile {
    name: "Denzel",
    level: 7,
    points: 3200,
};

/// Quick-action buttons above the game grid, in display order
pub const QUICK_ACTIONS: [&str; 4] = ["MY GAMES", "DOWNLOAD", "Game room", "Leaderboard"];

/// Filter buttons of the advanced search panel, in display order
pub const SEARCH_FILTERS: [&str; 3] = ["Genre", "Sort by Rating", "Platform"];

pub fn leaderboard_rows(entries: &[LeaderboardEntry]) -> Vec<String> {
    entries.iter().map(LeaderboardEntry::row).collect()
}

pub fn friend_rows(entries: &[FriendEntry]) -> Vec<String> {
    entries.iter().map(FriendEntry::row).collect()
}

pub fn notification_rows(entries: &[NotificationEntry]) -> Vec<String> {
    entries.iter().map(|n| n.message.to_string()).collect()
}

pub fn achievement_rows(entries: &[AchievementEntry]) -> Vec<String> {
    entries.iter().map(AchievementEntry::row).collect()
}

pub fn activity_rows(entries: &[ActivityEntry]) -> Vec<String> {
    entries.iter().map(|a| a.message.to_string()).collect()
}
