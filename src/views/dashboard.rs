//! Home dashboard controller

use std::sync::Arc;

use crate::api::Backend;
use crate::models::{DashboardStats, SessionUser};
use crate::session::SessionStore;

use super::ViewState;

/// Controller for the home page stats and greeting
pub struct DashboardController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    state: ViewState<DashboardStats>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<DashboardStats> {
        &self.state
    }

    /// Identity for the greeting card, read from the persisted snapshot so
    /// it renders before (and regardless of) the stats fetch
    pub fn greeting_user(&self) -> Option<SessionUser> {
        self.session.get().map(|session| session.user)
    }

    pub async fn load(&mut self) {
        self.state = ViewState::from_result(self.api.dashboard_stats().await);
    }
}
