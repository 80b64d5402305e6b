//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grading status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SubmissionStatus {
    /// Status as the backend string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Whether this status is a grading decision (not the initial state)
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

/// Identity shown next to a submission row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionUser {
    pub username: String,
    pub email: String,
}

/// One submitted solution, as the grading view receives it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub user_id: i64,
    pub code: String,
    pub language: String,
    pub status: SubmissionStatus,
    pub score: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub user: SubmissionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_case() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Accepted).unwrap(),
            r#""ACCEPTED""#
        );
        let parsed: SubmissionStatus = serde_json::from_str(r#""PENDING""#).unwrap();
        assert_eq!(parsed, SubmissionStatus::Pending);
        assert!(!parsed.is_decision());
    }

    #[test]
    fn test_submission_deserializes() {
        let s: Submission = serde_json::from_str(
            r#"{
                "id": 11,
                "userId": 4,
                "code": "print(42)",
                "language": "python",
                "status": "PENDING",
                "score": null,
                "createdAt": "2025-03-02T12:30:00Z",
                "user": {"username": "ada", "email": "ada@potm.dev"}
            }"#,
        )
        .unwrap();
        assert_eq!(s.user.username, "ada");
        assert_eq!(s.score, None);
    }
}
