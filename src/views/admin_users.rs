//! Admin user management controller
//!
//! The user table supports inline editing of the mutable subset (role,
//! total points). Saving PUTs the draft and, on success, merges it into the
//! displayed list by id without a reload. Cancel discards the draft with no
//! network call.

use std::sync::Arc;

use crate::api::{AdminUserUpdate, Backend};
use crate::models::AdminUser;
use crate::session::SessionStore;

use super::{Nav, ViewState, nav};

/// An in-progress inline edit
#[derive(Debug, Clone)]
pub struct UserEdit {
    pub id: i64,
    pub draft: AdminUserUpdate,
}

/// Controller for the admin user table
pub struct AdminUsersController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    state: ViewState<Vec<AdminUser>>,
    editing: Option<UserEdit>,
}

impl AdminUsersController {
    pub fn new(api: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: ViewState::Loading,
            editing: None,
        }
    }

    /// Display-only gate: logged out goes to login, non-admins go home
    pub fn guard(&self) -> Option<Nav> {
        nav::require_admin(&self.session)
    }

    pub fn state(&self) -> &ViewState<Vec<AdminUser>> {
        &self.state
    }

    pub async fn load(&mut self) {
        self.state = ViewState::from_result(self.api.admin_users().await);
    }

    /// Start editing a row, capturing a draft of its mutable fields
    pub fn begin_edit(&mut self, user_id: i64) {
        let Some(row) = self
            .state
            .data()
            .and_then(|list| list.iter().find(|u| u.id == user_id))
        else {
            return;
        };

        self.editing = Some(UserEdit {
            id: user_id,
            draft: AdminUserUpdate {
                role: row.role,
                total_points: row.total_points,
            },
        });
    }

    /// Row currently being edited, if any
    pub fn editing(&self) -> Option<&UserEdit> {
        self.editing.as_ref()
    }

    /// Mutable access to the edit draft
    pub fn draft_mut(&mut self) -> Option<&mut AdminUserUpdate> {
        self.editing.as_mut().map(|edit| &mut edit.draft)
    }

    /// Discard the draft and return to the plain table. No network call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the draft. Success merges it into the in-memory list by id and
    /// ends the edit; failure reports the error and stays in editing.
    pub async fn save_edit(&mut self) -> Result<(), String> {
        let Some(edit) = self.editing.clone() else {
            return Err("No row is being edited".to_string());
        };

        match self.api.admin_update_user(edit.id, &edit.draft).await {
            Ok(()) => {
                if let Some(list) = self.state.data_mut() {
                    if let Some(row) = list.iter_mut().find(|u| u.id == edit.id) {
                        row.role = edit.draft.role;
                        row.total_points = edit.draft.total_points;
                    }
                }
                self.editing = None;
                Ok(())
            }
            Err(err) => Err(err.display_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::Role;
    use crate::test_support::{FakeBackend, MemoryStorage};

    fn admin_user(id: i64, role: &str, points: i64) -> AdminUser {
        serde_json::from_str(&format!(
            r#"{{
                "id": {id},
                "email": "user{id}@potm.dev",
                "name": "User {id}",
                "role": "{role}",
                "totalPoints": {points},
                "createdAt": "2025-01-15T10:00:00Z"
            }}"#
        ))
        .unwrap()
    }

    async fn loaded_controller(api: Arc<FakeBackend>) -> AdminUsersController {
        let mut controller =
            AdminUsersController::new(api, SessionStore::new(MemoryStorage::default()));
        controller.load().await;
        controller
    }

    #[tokio::test]
    async fn test_save_merges_draft_by_id_leaving_other_rows_alone() {
        let api = Arc::new(
            FakeBackend::new()
                .with_admin_users(Ok(vec![
                    admin_user(4, "USER", 5),
                    admin_user(5, "USER", 10),
                ]))
                .with_admin_update(Ok(())),
        );
        let mut controller = loaded_controller(api.clone()).await;

        controller.begin_edit(5);
        {
            let draft = controller.draft_mut().unwrap();
            draft.role = Role::Admin;
            draft.total_points = 50;
        }
        controller.save_edit().await.unwrap();

        let list = controller.state().data().unwrap();
        assert_eq!(list[1].role, Role::Admin);
        assert_eq!(list[1].total_points, 50);
        assert_eq!(list[0].role, Role::User);
        assert_eq!(list[0].total_points, 5);
        assert!(controller.editing().is_none());

        // Merge came from the confirmed PUT, not a reload.
        assert_eq!(api.call_names(), vec!["admin_users", "admin_update_user"]);
        let updates = api.admin_updates.lock().unwrap();
        assert_eq!(updates[0].0, 5);
        assert_eq!(updates[0].1.total_points, 50);
    }

    #[tokio::test]
    async fn test_save_failure_stays_in_editing() {
        let api = Arc::new(
            FakeBackend::new()
                .with_admin_users(Ok(vec![admin_user(4, "USER", 5)]))
                .with_admin_update(Err(ApiError::from_response(
                    400,
                    r#"{"message":"Invalid role"}"#,
                ))),
        );
        let mut controller = loaded_controller(api).await;

        controller.begin_edit(4);
        controller.draft_mut().unwrap().role = Role::Editor;

        let result = controller.save_edit().await;
        assert_eq!(result, Err("Invalid role".to_string()));
        assert!(controller.editing().is_some(), "edit survives the failure");
        assert_eq!(
            controller.state().data().unwrap()[0].role,
            Role::User,
            "no merge without a confirmed save"
        );
    }

    #[tokio::test]
    async fn test_cancel_discards_draft_without_network() {
        let api = Arc::new(
            FakeBackend::new().with_admin_users(Ok(vec![admin_user(4, "USER", 5)])),
        );
        let mut controller = loaded_controller(api.clone()).await;

        controller.begin_edit(4);
        controller.draft_mut().unwrap().total_points = 999;
        controller.cancel_edit();

        assert!(controller.editing().is_none());
        assert_eq!(controller.state().data().unwrap()[0].total_points, 5);
        assert_eq!(api.call_names(), vec!["admin_users"]);
    }

    #[tokio::test]
    async fn test_begin_edit_ignores_unknown_rows() {
        let api = Arc::new(FakeBackend::new().with_admin_users(Ok(vec![])));
        let mut controller = loaded_controller(api).await;

        controller.begin_edit(42);
        assert!(controller.editing().is_none());
    }
}
