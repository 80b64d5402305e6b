//! Leaderboard controller

use std::sync::Arc;

use crate::api::Backend;
use crate::models::LeaderboardEntry;

use super::ViewState;

/// Controller for the leaderboard page. Read-only projection.
pub struct LeaderboardController {
    api: Arc<dyn Backend>,
    state: ViewState<Vec<LeaderboardEntry>>,
}

impl LeaderboardController {
    pub fn new(api: Arc<dyn Backend>) -> Self {
        Self {
            api,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<LeaderboardEntry>> {
        &self.state
    }

    pub async fn load(&mut self) {
        self.state = ViewState::from_result(self.api.leaderboard().await);
    }
}
