//! Submission review and solution upload controllers
//!
//! The grading flow enforces its score rule client-side: accepting requires
//! a non-negative integer score before any network call goes out, rejecting
//! forces the score to zero. On a successful grade the row is merged into
//! the loaded list by id; the list is never re-fetched.

use std::sync::Arc;

use validator::Validate;

use crate::api::{Backend, GradeRequest, SubmitSolutionRequest};
use crate::constants::languages;
use crate::models::{Submission, SubmissionStatus};

use super::{Nav, ViewState, validation_summary};

/// Message shown when the score input does not hold a usable value
const INVALID_SCORE_MESSAGE: &str = "Please enter a valid score.";

/// Controller for the submissions review page
pub struct SubmissionsController {
    api: Arc<dyn Backend>,
    tournament_id: i64,
    state: ViewState<Vec<Submission>>,
    selected: Option<i64>,
    score_input: String,
    grading: Option<i64>,
}

impl SubmissionsController {
    pub fn new(api: Arc<dyn Backend>, tournament_id: i64) -> Self {
        Self {
            api,
            tournament_id,
            state: ViewState::Loading,
            selected: None,
            score_input: String::new(),
            grading: None,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Submission>> {
        &self.state
    }

    /// Fetch the list. An access-denied failure redirects back to the
    /// tournament instead of rendering inline; any other failure becomes
    /// local error state.
    pub async fn load(&mut self) -> Option<Nav> {
        match self.api.submissions(self.tournament_id).await {
            Ok(list) => {
                self.state = ViewState::Loaded(list);
                None
            }
            Err(err) => {
                let denied = err.is_access_denied();
                self.state = ViewState::Errored(err.display_message());
                denied.then_some(Nav::Tournament(self.tournament_id))
            }
        }
    }

    /// Open the code/grading modal for one submission
    pub fn select(&mut self, submission_id: i64) {
        self.selected = Some(submission_id);
    }

    /// Close the modal without grading
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The submission whose modal is open, if any
    pub fn selected(&self) -> Option<&Submission> {
        let id = self.selected?;
        self.state.data()?.iter().find(|s| s.id == id)
    }

    pub fn set_score_input(&mut self, input: impl Into<String>) {
        self.score_input = input.into();
    }

    /// Whether a grade call for this submission is in flight
    pub fn is_grading(&self, submission_id: i64) -> bool {
        self.grading == Some(submission_id)
    }

    /// Grade a submission. Accepting without a valid score is rejected here,
    /// before any network call. Success merges the decision into the list
    /// and closes the modal; failure reports the error and leaves the modal
    /// open.
    pub async fn grade(
        &mut self,
        submission_id: i64,
        decision: SubmissionStatus,
    ) -> Result<(), String> {
        if !decision.is_decision() {
            return Err(INVALID_SCORE_MESSAGE.to_string());
        }

        let score = match decision {
            SubmissionStatus::Accepted => parse_score(&self.score_input)?,
            _ => 0,
        };

        self.grading = Some(submission_id);
        let request = GradeRequest {
            status: decision,
            score,
        };

        match self
            .api
            .grade_submission(self.tournament_id, submission_id, &request)
            .await
        {
            Ok(()) => {
                if let Some(list) = self.state.data_mut() {
                    if let Some(row) = list.iter_mut().find(|s| s.id == submission_id) {
                        row.status = decision;
                        row.score = Some(score);
                    }
                }
                self.score_input.clear();
                self.grading = None;
                self.selected = None;
                Ok(())
            }
            Err(err) => {
                self.grading = None;
                Err(err.display_message())
            }
        }
    }
}

/// Parse the grading score input: a non-negative integer or nothing
fn parse_score(input: &str) -> Result<i64, String> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|score| *score >= 0)
        .ok_or_else(|| INVALID_SCORE_MESSAGE.to_string())
}

/// Controller for the solution upload modal. The embedding layer reads the
/// chosen file's full text and hands it over via [`attach_file`](Self::attach_file);
/// the upload goes out as a JSON string field.
pub struct SolutionUploadController {
    api: Arc<dyn Backend>,
    tournament_id: i64,
    open: bool,
    language: String,
    file_name: Option<String>,
    code: Option<String>,
    error: Option<String>,
}

impl SolutionUploadController {
    pub fn new(api: Arc<dyn Backend>, tournament_id: i64) -> Self {
        Self {
            api,
            tournament_id,
            open: false,
            language: languages::PYTHON.to_string(),
            file_name: None,
            code: None,
            error: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Attach the chosen file's name and already-read text
    pub fn attach_file(&mut self, name: impl Into<String>, contents: String) {
        self.file_name = Some(name.into());
        self.code = Some(contents);
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Inline error shown in the modal
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Send the attached solution. Returns true when the upload succeeded
    /// and the modal closed; on failure the modal stays open with the error
    /// displayed inline.
    pub async fn submit(&mut self) -> bool {
        self.error = None;

        let Some(code) = self.code.clone() else {
            self.error = Some("Attach a solution file first".to_string());
            return false;
        };

        if !languages::ALL.contains(&self.language.as_str()) {
            self.error = Some("Unsupported language".to_string());
            return false;
        }

        let request = SubmitSolutionRequest {
            code,
            language: self.language.clone(),
        };
        if let Err(errors) = request.validate() {
            self.error = Some(validation_summary(&errors));
            return false;
        }

        match self.api.submit_solution(self.tournament_id, &request).await {
            Ok(()) => {
                self.open = false;
                self.file_name = None;
                self.code = None;
                true
            }
            Err(err) => {
                self.error = Some(err.display_message());
                false
            }
        }
    }
}
