//! User models and the session snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role, as the backend spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "EDITOR")]
    Editor,
    #[serde(rename = "ADMIN")]
    Admin,
    /// Any role string this client does not know. Grants nothing.
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

impl Role {
    /// Role as the backend string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => crate::constants::roles::USER,
            Self::Editor => crate::constants::roles::EDITOR,
            Self::Admin => crate::constants::roles::ADMIN,
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may create and edit tournaments
    pub fn can_manage_tournaments(&self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record persisted alongside the credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl SessionUser {
    /// Name to greet the user with - display name when set, email otherwise
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// The client's record of the authenticated identity and credential
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub token: String,
}

/// User row in the admin management table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
}

/// Public profile projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
    pub total_points: i64,
    pub joined_at: DateTime<Utc>,
    pub rank: i64,
    #[serde(default)]
    pub participations: Vec<Participation>,
}

/// One tournament participation line on a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub tournament_id: i64,
    pub tournament_title: String,
    pub status: String,
    pub joined_at: DateTime<Utc>,
    pub score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_capabilities() {
        assert!(Role::Admin.is_admin());
        assert!(Role::Admin.can_manage_tournaments());
        assert!(Role::Editor.can_manage_tournaments());
        assert!(!Role::Editor.is_admin());
        assert!(!Role::User.can_manage_tournaments());
        assert!(!Role::Unknown.can_manage_tournaments());
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let role: Role = serde_json::from_str(r#""SUPERVISOR""#).unwrap();
        assert_eq!(role, Role::Unknown);
        assert!(!role.is_admin());
    }

    #[test]
    fn test_session_user_display_name_falls_back_to_email() {
        let named: SessionUser = serde_json::from_str(
            r#"{"id":1,"email":"a@potm.dev","name":"Ada","role":"USER"}"#,
        )
        .unwrap();
        assert_eq!(named.display_name(), "Ada");

        let unnamed: SessionUser = serde_json::from_str(
            r#"{"id":2,"email":"b@potm.dev","name":null,"role":"ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(unnamed.display_name(), "b@potm.dev");
    }
}
