//! Per-page view-state controllers
//!
//! One controller per page, each owning a `loading -> loaded | errored`
//! machine plus whatever page-local sub-state the page needs (inline edit
//! drafts, list filters, modal selection). Controllers are view-layer
//! agnostic: they expose state snapshots and [`Nav`](nav::Nav) effects, and
//! the rendering layer decides what to do with them.
//!
//! Every fetch failure is caught here and turned into local state; nothing
//! propagates to a global handler. Mutations follow the platform's
//! merge-after-success discipline: local list state is only updated after
//! the network call resolves successfully, never before.

pub mod admin_users;
pub mod auth;
pub mod dashboard;
pub mod leaderboard;
pub mod nav;
pub mod profile;
pub mod state;
pub mod submissions;
pub mod tournament_form;
pub mod tournaments;

pub use nav::Nav;
pub use state::ViewState;

/// Flatten validator output into one displayable line, matching the shape
/// field errors take when they come back from the backend
pub(crate) fn validation_summary(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .collect();
    parts.sort();

    if parts.is_empty() {
        crate::constants::GENERIC_ERROR_MESSAGE.to_string()
    } else {
        parts.join(", ")
    }
}
