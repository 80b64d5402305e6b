//! Tournament and submission request DTOs

use chrono::DateTime;
use serde::Serialize;
use validator::Validate;

use crate::models::{SubmissionStatus, Tournament, TournamentStatus};

/// Editable tournament fields for the create and edit forms.
///
/// Dates are held as `datetime-local` strings (`YYYY-MM-DDThh:mm`) because
/// that is what the form inputs produce and what the backend accepts.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Problem statement markup; optional, empty means none
    pub statement: String,

    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,

    pub prize_pool: String,
    pub status: TournamentStatus,
    pub difficulty: String,
}

impl Default for TournamentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            statement: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            prize_pool: String::new(),
            status: TournamentStatus::Upcoming,
            difficulty: String::new(),
        }
    }
}

impl TournamentDraft {
    /// Prefill a draft from a fetched tournament for the edit form
    pub fn from_tournament(tournament: &Tournament) -> Self {
        Self {
            title: tournament.title.clone(),
            description: tournament.description.clone(),
            statement: tournament.statement.clone().unwrap_or_default(),
            start_date: to_datetime_local(&tournament.start_date),
            end_date: to_datetime_local(&tournament.end_date),
            prize_pool: tournament.prize_pool.clone().unwrap_or_default(),
            status: tournament.status,
            difficulty: tournament.difficulty.clone().unwrap_or_default(),
        }
    }
}

/// Reformat a backend timestamp for a `datetime-local` input.
/// Unparseable input becomes an empty field rather than a broken one.
fn to_datetime_local(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Solution upload request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SubmitSolutionRequest {
    #[validate(length(min = 1, message = "Solution file is empty"))]
    pub code: String,
    pub language: String,
}

/// Grading request
#[derive(Debug, Clone, Serialize)]
pub struct GradeRequest {
    pub status: SubmissionStatus,
    pub score: i64,
}
