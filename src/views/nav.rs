//! Navigation effects and display-only route guards
//!
//! Guards here decide which pages render, nothing else. They read the
//! session snapshot or the decoded credential payload - neither of which is
//! verified client-side - so passing a guard proves nothing. The backend
//! authorizes every call these pages make.

use crate::constants::routes;
use crate::session::{SessionStore, claims};

/// Where a controller wants the view layer to navigate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Login,
    Tournaments,
    Tournament(i64),
    Profile(i64),
    Admin,
}

impl Nav {
    /// Route path for the router to push
    pub fn path(&self) -> String {
        match self {
            Self::Home => routes::HOME.to_string(),
            Self::Login => routes::LOGIN.to_string(),
            Self::Tournaments => routes::TOURNAMENTS.to_string(),
            Self::Tournament(id) => format!("{}/{id}", routes::TOURNAMENTS),
            Self::Profile(id) => format!("/profile/{id}"),
            Self::Admin => routes::ADMIN.to_string(),
        }
    }
}

/// Display hint: may this client show tournament create/edit controls?
pub fn can_manage_tournaments(session: &SessionStore) -> bool {
    session
        .token()
        .and_then(|token| claims::decode(&token))
        .is_some_and(|claims| claims.can_manage_tournaments())
}

/// Gate for the admin panel: logged out goes to login, non-admins go home
pub fn require_admin(session: &SessionStore) -> Option<Nav> {
    match session.get() {
        None => Some(Nav::Login),
        Some(session) if !session.user.role.is_admin() => Some(Nav::Home),
        Some(_) => None,
    }
}

/// Gate for the tournament create/edit pages
pub fn require_manager(session: &SessionStore) -> Option<Nav> {
    if session.token().is_none() {
        Some(Nav::Login)
    } else if !can_manage_tournaments(session) {
        Some(Nav::Home)
    } else {
        None
    }
}
