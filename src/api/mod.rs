//! HTTP access layer
//!
//! [`Backend`] is the typed surface of the remote service, one method per
//! endpoint the views consume. [`ApiClient`] is the reqwest adapter that
//! implements it; tests substitute a canned implementation. Mutating calls
//! whose response body the views ignore return `()`.

pub mod admin;
pub mod auth;
pub mod http;
pub mod tournaments;

pub use admin::AdminUserUpdate;
pub use auth::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
pub use http::ApiClient;
pub use tournaments::{GradeRequest, SubmitSolutionRequest, TournamentDraft};

use crate::error::ApiResult;
use crate::models::{AdminUser, DashboardStats, LeaderboardEntry, Submission, Tournament, UserProfile};

/// Typed client surface of the backend API.
///
/// Futures are `Send` on native targets; on wasm32 the browser fetch future
/// is single-threaded, so the bound is relaxed there.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Backend {
    // Auth
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse>;
    async fn me(&self) -> ApiResult<MeResponse>;

    // Home
    async fn dashboard_stats(&self) -> ApiResult<DashboardStats>;
    async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>>;

    // Tournaments
    async fn tournaments(&self) -> ApiResult<Vec<Tournament>>;
    async fn tournament(&self, id: i64) -> ApiResult<Tournament>;
    async fn create_tournament(&self, draft: &TournamentDraft) -> ApiResult<()>;
    async fn update_tournament(&self, id: i64, draft: &TournamentDraft) -> ApiResult<()>;

    // Submissions
    async fn submit_solution(&self, tournament_id: i64, request: &SubmitSolutionRequest) -> ApiResult<()>;
    async fn submissions(&self, tournament_id: i64) -> ApiResult<Vec<Submission>>;
    async fn grade_submission(
        &self,
        tournament_id: i64,
        submission_id: i64,
        request: &GradeRequest,
    ) -> ApiResult<()>;

    // Users
    async fn user_profile(&self, id: i64) -> ApiResult<UserProfile>;

    // Admin
    async fn admin_users(&self) -> ApiResult<Vec<AdminUser>>;
    async fn admin_update_user(&self, id: i64, update: &AdminUserUpdate) -> ApiResult<()>;
}
