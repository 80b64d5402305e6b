//! Reqwest-backed API client
//!
//! This adapter owns transport details only: URL assembly, header injection,
//! JSON encoding, and the decode of success and failure bodies. On wasm32 it
//! rides the browser's fetch; natively it uses real sockets, which is what
//! the test suite exercises the rest of the crate against.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{AdminUser, DashboardStats, LeaderboardEntry, Submission, Tournament, UserProfile};
use crate::session::SessionStore;

use super::{
    AdminUserUpdate, AuthResponse, Backend, GradeRequest, LoginRequest, MeResponse,
    RegisterRequest, SubmitSolutionRequest, TournamentDraft,
};

/// HTTP client for the POTM backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: SessionStore,
}

impl ApiClient {
    /// Build a client over the configured base URL and session store
    pub fn new(config: &Config, store: SessionStore) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            http: reqwest::Client::new(),
            store,
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "dispatching api request");

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.store.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        decode_response(status, &text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.dispatch(Method::GET, path, None).await
    }

    async fn send_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch(method, path, Some(body)).await
    }

    /// Mutation whose response body the caller does not use. The body must
    /// still be JSON - the backend always replies with one.
    async fn send_ignoring_body<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let _: Value = self.send_json(method, path, body).await?;
        Ok(())
    }
}

/// Decode a response into the expected type, normalizing failures
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(ApiError::from)
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Backend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.send_json(Method::POST, "/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.send_json(Method::POST, "/auth/register", request).await
    }

    async fn me(&self) -> ApiResult<MeResponse> {
        self.get("/auth/me").await
    }

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get("/home/stats").await
    }

    async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        self.get("/home/leaderboard").await
    }

    async fn tournaments(&self) -> ApiResult<Vec<Tournament>> {
        self.get("/tournaments").await
    }

    async fn tournament(&self, id: i64) -> ApiResult<Tournament> {
        self.get(&format!("/tournaments/{id}")).await
    }

    async fn create_tournament(&self, draft: &TournamentDraft) -> ApiResult<()> {
        self.send_ignoring_body(Method::POST, "/tournaments", draft).await
    }

    async fn update_tournament(&self, id: i64, draft: &TournamentDraft) -> ApiResult<()> {
        self.send_ignoring_body(Method::PUT, &format!("/tournaments/{id}"), draft)
            .await
    }

    async fn submit_solution(
        &self,
        tournament_id: i64,
        request: &SubmitSolutionRequest,
    ) -> ApiResult<()> {
        self.send_ignoring_body(
            Method::POST,
            &format!("/tournaments/{tournament_id}/submit"),
            request,
        )
        .await
    }

    async fn submissions(&self, tournament_id: i64) -> ApiResult<Vec<Submission>> {
        self.get(&format!("/tournaments/{tournament_id}/submissions")).await
    }

    async fn grade_submission(
        &self,
        tournament_id: i64,
        submission_id: i64,
        request: &GradeRequest,
    ) -> ApiResult<()> {
        self.send_ignoring_body(
            Method::PUT,
            &format!("/tournaments/{tournament_id}/submissions/{submission_id}"),
            request,
        )
        .await
    }

    async fn user_profile(&self, id: i64) -> ApiResult<UserProfile> {
        self.get(&format!("/users/{id}")).await
    }

    async fn admin_users(&self) -> ApiResult<Vec<AdminUser>> {
        self.get("/admin/users").await
    }

    async fn admin_update_user(&self, id: i64, update: &AdminUserUpdate) -> ApiResult<()> {
        self.send_ignoring_body(Method::PUT, &format!("/admin/users/{id}"), update)
            .await
    }
}
