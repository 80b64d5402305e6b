//! The per-page state machine

use crate::error::ApiResult;

/// Lifecycle of a page's data: `Loading -> Loaded | Errored`
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Errored(String),
}

impl<T> ViewState<T> {
    /// Collapse a fetch result into view state, rendering the failure as a
    /// displayable message
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Errored(err.display_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable loaded data, used by merge-after-success reducers
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            _ => None,
        }
    }
}
