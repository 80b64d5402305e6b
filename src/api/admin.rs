//! Admin request DTOs

use serde::Serialize;

use crate::models::Role;

/// Editable subset of a user row in the admin table
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserUpdate {
    pub role: Role,
    pub total_points: i64,
}
