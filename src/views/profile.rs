//! Profile controllers

use std::sync::Arc;

use crate::api::Backend;
use crate::models::UserProfile;
use crate::session::SessionStore;

use super::{Nav, ViewState};

/// Controller for a user's public profile page
pub struct ProfileController {
    api: Arc<dyn Backend>,
    user_id: i64,
    state: ViewState<UserProfile>,
}

impl ProfileController {
    pub fn new(api: Arc<dyn Backend>, user_id: i64) -> Self {
        Self {
            api,
            user_id,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<UserProfile> {
        &self.state
    }

    pub async fn load(&mut self) {
        self.state = ViewState::from_result(self.api.user_profile(self.user_id).await);
    }
}

/// Resolve the bare `/profile` route: the stored identity's own profile, or
/// the login view when there is no session. No network call involved.
pub fn own_profile_destination(session: &SessionStore) -> Nav {
    match session.get() {
        Some(session) => Nav::Profile(session.user.id),
        None => Nav::Login,
    }
}
