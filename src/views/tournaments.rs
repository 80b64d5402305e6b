//! Tournament list and detail controllers

use std::sync::Arc;

use crate::api::Backend;
use crate::models::{Tournament, TournamentStatus};
use crate::render::{DocumentRenderer, MarkupCompiler};
use crate::session::SessionStore;

use super::{ViewState, nav};

/// Local list filter. Purely a predicate over the fetched snapshot; changing
/// it never re-fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TournamentStatus),
}

impl StatusFilter {
    pub fn matches(&self, tournament: &Tournament) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => tournament.status == *status,
        }
    }
}

/// Controller for the tournament list page
pub struct TournamentListController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    state: ViewState<Vec<Tournament>>,
    filter: StatusFilter,
}

impl TournamentListController {
    pub fn new(api: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: ViewState::Loading,
            filter: StatusFilter::All,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Tournament>> {
        &self.state
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Display hint for the create button
    pub fn can_create(&self) -> bool {
        nav::can_manage_tournaments(&self.session)
    }

    pub async fn load(&mut self) {
        self.state = ViewState::from_result(self.api.tournaments().await);
    }

    /// The fetched tournaments that pass the current filter
    pub fn visible(&self) -> Vec<&Tournament> {
        self.state
            .data()
            .map(|list| list.iter().filter(|t| self.filter.matches(t)).collect())
            .unwrap_or_default()
    }
}

/// Controller for one tournament's detail page. Owns the statement renderer
/// so teardown can detach it before any in-flight render resolves.
pub struct TournamentDetailController {
    api: Arc<dyn Backend>,
    session: SessionStore,
    id: i64,
    state: ViewState<Tournament>,
    renderer: DocumentRenderer,
}

impl TournamentDetailController {
    pub fn new(
        api: Arc<dyn Backend>,
        session: SessionStore,
        compiler: Arc<dyn MarkupCompiler>,
        id: i64,
    ) -> Self {
        Self {
            api,
            session,
            id,
            state: ViewState::Loading,
            renderer: DocumentRenderer::new(compiler),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> &ViewState<Tournament> {
        &self.state
    }

    /// Display hint for the edit button
    pub fn can_edit(&self) -> bool {
        nav::can_manage_tournaments(&self.session)
    }

    /// Whether the submit affordance should render
    pub fn can_submit(&self) -> bool {
        self.state
            .data()
            .is_some_and(Tournament::accepts_submissions)
    }

    pub fn renderer(&self) -> &DocumentRenderer {
        &self.renderer
    }

    pub async fn load(&mut self) {
        self.state = ViewState::from_result(self.api.tournament(self.id).await);
    }

    /// Kick a render of the loaded statement, if there is one
    pub async fn render_statement(&self) {
        if let Some(statement) = self.state.data().and_then(|t| t.statement.as_deref()) {
            self.renderer.render(statement).await;
        }
    }

    /// The view navigated away; drop any render still in flight
    pub fn teardown(&self) {
        self.renderer.detach();
    }
}
