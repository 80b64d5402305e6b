//! Dashboard statistics

use serde::{Deserialize, Serialize};

/// Aggregate numbers shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_tournaments: i64,
    pub total_participants: i64,
    pub next_contest: Option<String>,
    pub featured_tournament: Option<FeaturedTournament>,
    #[serde(default)]
    pub leaderboard: Vec<DashboardLeader>,
}

/// Highlighted tournament card on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedTournament {
    pub title: String,
    pub description: String,
    pub status: String,
    pub participants: i64,
    pub tasks: i64,
    pub prize_pool: String,
    pub end_date: String,
}

/// Compact leaderboard row embedded in the dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardLeader {
    pub name: String,
    pub score: i64,
    pub rank: i64,
    pub avatar: String,
}
