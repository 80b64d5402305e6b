//! Shared test doubles
//!
//! The crate's outward seams are traits - storage, compiler, backend - so
//! tests swap in deterministic implementations instead of mocking transport.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::api::{
    AdminUserUpdate, AuthResponse, Backend, GradeRequest, LoginRequest, MeResponse,
    RegisterRequest, SubmitSolutionRequest, TournamentDraft,
};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AdminUser, DashboardStats, LeaderboardEntry, SessionUser, Submission, Tournament, UserProfile,
};
use crate::render::{CompileError, MarkupCompiler};
use crate::session::StorageBackend;

/// Install a test subscriber so `RUST_LOG`-driven traces show up in failures
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// STORAGE
// =============================================================================

/// In-memory stand-in for browser localStorage. Clones share the same map,
/// which models two views of the same storage scope.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

// =============================================================================
// COMPILER
// =============================================================================

struct CompileScript {
    result: Result<String, CompileError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Scripted markup compiler. Results are served in call order; a gated
/// script does not resolve until its sender fires, which lets tests control
/// completion order across overlapping renders.
#[derive(Default)]
pub struct FakeCompiler {
    scripts: Mutex<VecDeque<CompileScript>>,
}

impl FakeCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for the next compile call
    pub fn then(self, result: Result<String, CompileError>) -> Self {
        self.push(CompileScript { result, gate: None });
        self
    }

    /// Queue a result that is held back until `gate` fires
    pub fn then_gated(self, result: Result<String, CompileError>, gate: oneshot::Receiver<()>) -> Self {
        self.push(CompileScript {
            result,
            gate: Some(gate),
        });
        self
    }

    fn push(&self, script: CompileScript) {
        self.scripts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(script);
    }
}

#[async_trait::async_trait]
impl MarkupCompiler for FakeCompiler {
    async fn compile(&self, source: &str) -> Result<String, CompileError> {
        let script = self
            .scripts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();

        match script {
            Some(script) => {
                if let Some(gate) = script.gate {
                    let _ = gate.await;
                }
                script.result
            }
            // Unscripted calls echo the source, which is enough for tests
            // that only care about state transitions.
            None => Ok(format!("<svg>{source}</svg>")),
        }
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Canned-response backend. Every endpoint answers from a pre-set slot;
/// calling an endpoint that was never configured fails the test. Mutating
/// calls are recorded so tests can assert what went over the wire (or that
/// nothing did).
#[derive(Default)]
pub struct FakeBackend {
    login: Option<ApiResult<AuthResponse>>,
    register: Option<ApiResult<AuthResponse>>,
    me: Option<ApiResult<MeResponse>>,
    stats: Option<ApiResult<DashboardStats>>,
    leaderboard: Option<ApiResult<Vec<LeaderboardEntry>>>,
    tournaments: Option<ApiResult<Vec<Tournament>>>,
    tournament: Option<ApiResult<Tournament>>,
    save_tournament: Option<ApiResult<()>>,
    submit: Option<ApiResult<()>>,
    submissions: Option<ApiResult<Vec<Submission>>>,
    grade: Option<ApiResult<()>>,
    profile: Option<ApiResult<UserProfile>>,
    admin_users: Option<ApiResult<Vec<AdminUser>>>,
    admin_update: Option<ApiResult<()>>,

    /// Names of every call made, in order
    pub calls: Mutex<Vec<String>>,
    /// Recorded grade requests as `(tournament_id, submission_id, request)`
    pub graded: Mutex<Vec<(i64, i64, GradeRequest)>>,
    /// Recorded admin updates as `(user_id, update)`
    pub admin_updates: Mutex<Vec<(i64, AdminUserUpdate)>>,
    /// Recorded tournament drafts sent to create or update
    pub saved_drafts: Mutex<Vec<TournamentDraft>>,
    /// Recorded solution uploads as `(tournament_id, request)`
    pub submitted: Mutex<Vec<(i64, SubmitSolutionRequest)>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(mut self, result: ApiResult<AuthResponse>) -> Self {
        self.login = Some(result);
        self
    }

    pub fn with_register(mut self, result: ApiResult<AuthResponse>) -> Self {
        self.register = Some(result);
        self
    }

    pub fn with_me(mut self, token: Option<&str>, user: Option<SessionUser>) -> Self {
        self.me = Some(Ok(MeResponse {
            token: token.map(str::to_string),
            user,
        }));
        self
    }

    pub fn with_me_error(mut self) -> Self {
        self.me = Some(Err(ApiError::Transport("connection refused".to_string())));
        self
    }

    pub fn with_stats(mut self, result: ApiResult<DashboardStats>) -> Self {
        self.stats = Some(result);
        self
    }

    pub fn with_leaderboard(mut self, result: ApiResult<Vec<LeaderboardEntry>>) -> Self {
        self.leaderboard = Some(result);
        self
    }

    pub fn with_tournaments(mut self, result: ApiResult<Vec<Tournament>>) -> Self {
        self.tournaments = Some(result);
        self
    }

    pub fn with_tournament(mut self, result: ApiResult<Tournament>) -> Self {
        self.tournament = Some(result);
        self
    }

    pub fn with_save_tournament(mut self, result: ApiResult<()>) -> Self {
        self.save_tournament = Some(result);
        self
    }

    pub fn with_submit(mut self, result: ApiResult<()>) -> Self {
        self.submit = Some(result);
        self
    }

    pub fn with_submissions(mut self, result: ApiResult<Vec<Submission>>) -> Self {
        self.submissions = Some(result);
        self
    }

    pub fn with_grade(mut self, result: ApiResult<()>) -> Self {
        self.grade = Some(result);
        self
    }

    pub fn with_profile(mut self, result: ApiResult<UserProfile>) -> Self {
        self.profile = Some(result);
        self
    }

    pub fn with_admin_users(mut self, result: ApiResult<Vec<AdminUser>>) -> Self {
        self.admin_users = Some(result);
        self
    }

    pub fn with_admin_update(mut self, result: ApiResult<()>) -> Self {
        self.admin_update = Some(result);
        self
    }

    /// All recorded call names
    pub fn call_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn record(&self, name: &str) {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(name.to_string());
    }

    fn answer<T: Clone>(&self, slot: &Option<ApiResult<T>>, name: &str) -> ApiResult<T> {
        self.record(name);
        slot.clone()
            .unwrap_or_else(|| panic!("unexpected call to {name}"))
    }
}

#[async_trait::async_trait]
impl Backend for FakeBackend {
    async fn login(&self, _request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.answer(&self.login, "login")
    }

    async fn register(&self, _request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.answer(&self.register, "register")
    }

    async fn me(&self) -> ApiResult<MeResponse> {
        self.answer(&self.me, "me")
    }

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.answer(&self.stats, "dashboard_stats")
    }

    async fn leaderboard(&self) -> ApiResult<Vec<LeaderboardEntry>> {
        self.answer(&self.leaderboard, "leaderboard")
    }

    async fn tournaments(&self) -> ApiResult<Vec<Tournament>> {
        self.answer(&self.tournaments, "tournaments")
    }

    async fn tournament(&self, _id: i64) -> ApiResult<Tournament> {
        self.answer(&self.tournament, "tournament")
    }

    async fn create_tournament(&self, draft: &TournamentDraft) -> ApiResult<()> {
        if let Ok(mut drafts) = self.saved_drafts.lock() {
            drafts.push(draft.clone());
        }
        self.answer(&self.save_tournament, "create_tournament")
    }

    async fn update_tournament(&self, _id: i64, draft: &TournamentDraft) -> ApiResult<()> {
        if let Ok(mut drafts) = self.saved_drafts.lock() {
            drafts.push(draft.clone());
        }
        self.answer(&self.save_tournament, "update_tournament")
    }

    async fn submit_solution(
        &self,
        tournament_id: i64,
        request: &SubmitSolutionRequest,
    ) -> ApiResult<()> {
        if let Ok(mut submitted) = self.submitted.lock() {
            submitted.push((tournament_id, request.clone()));
        }
        self.answer(&self.submit, "submit_solution")
    }

    async fn submissions(&self, _tournament_id: i64) -> ApiResult<Vec<Submission>> {
        self.answer(&self.submissions, "submissions")
    }

    async fn grade_submission(
        &self,
        tournament_id: i64,
        submission_id: i64,
        request: &GradeRequest,
    ) -> ApiResult<()> {
        if let Ok(mut graded) = self.graded.lock() {
            graded.push((tournament_id, submission_id, request.clone()));
        }
        self.answer(&self.grade, "grade_submission")
    }

    async fn user_profile(&self, _id: i64) -> ApiResult<UserProfile> {
        self.answer(&self.profile, "user_profile")
    }

    async fn admin_users(&self) -> ApiResult<Vec<AdminUser>> {
        self.answer(&self.admin_users, "admin_users")
    }

    async fn admin_update_user(&self, id: i64, update: &AdminUserUpdate) -> ApiResult<()> {
        if let Ok(mut updates) = self.admin_updates.lock() {
            updates.push((id, update.clone()));
        }
        self.answer(&self.admin_update, "admin_update_user")
    }
}
