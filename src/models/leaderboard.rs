//! Leaderboard projection

use serde::{Deserialize, Serialize};

use super::user::Role;

/// One ranked row on the leaderboard. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub rank: i64,
    pub avatar: String,
    pub role: Role,
}
