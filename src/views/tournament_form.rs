//! Tournament create/edit form controller

use std::sync::Arc;

use validator::Validate;

use crate::api::{Backend, TournamentDraft};
use crate::session::SessionStore;

use super::{Nav, ViewState, nav, validation_summary};

/// Whether the form creates a new tournament or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Controller for the tournament form pages
pub struct TournamentFormController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    mode: FormMode,
    state: ViewState<TournamentDraft>,
    error: Option<String>,
}

impl TournamentFormController {
    /// Create form: starts with an empty draft, no fetch needed
    pub fn new_create(api: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            mode: FormMode::Create,
            state: ViewState::Loaded(TournamentDraft::default()),
            error: None,
        }
    }

    /// Edit form: the draft is prefilled from a fetch in [`load`](Self::load)
    pub fn new_edit(api: Arc<dyn Backend>, session: SessionStore, id: i64) -> Self {
        Self {
            api,
            session,
            mode: FormMode::Edit(id),
            state: ViewState::Loading,
            error: None,
        }
    }

    /// Display-only role gate; redirects away when the credential payload
    /// does not carry a managing role
    pub fn guard(&self) -> Option<Nav> {
        nav::require_manager(&self.session)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn state(&self) -> &ViewState<TournamentDraft> {
        &self.state
    }

    /// Draft under edit, once available
    pub fn draft_mut(&mut self) -> Option<&mut TournamentDraft> {
        self.state.data_mut()
    }

    /// Inline save error, if the last save failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self) {
        if let FormMode::Edit(id) = self.mode {
            self.state = match self.api.tournament(id).await {
                Ok(tournament) => ViewState::Loaded(TournamentDraft::from_tournament(&tournament)),
                Err(err) => ViewState::Errored(err.display_message()),
            };
        }
    }

    /// Validate and save the draft. Success yields where to navigate;
    /// failure keeps the form up with an inline error.
    pub async fn save(&mut self) -> Option<Nav> {
        self.error = None;

        let Some(draft) = self.state.data() else {
            return None;
        };

        if let Err(errors) = draft.validate() {
            self.error = Some(validation_summary(&errors));
            return None;
        }

        let result = match self.mode {
            FormMode::Create => self.api.create_tournament(draft).await,
            FormMode::Edit(id) => self.api.update_tournament(id, draft).await,
        };

        match result {
            Ok(()) => Some(match self.mode {
                FormMode::Create => Nav::Tournaments,
                FormMode::Edit(_) => Nav::Admin,
            }),
            Err(err) => {
                self.error = Some(err.display_message());
                None
            }
        }
    }
}
