//! POTM Web - Browser Front-End Core
//!
//! This library is the client-side engine of the POTM coding tournament
//! platform front-end. All business logic lives in the backend service; this
//! crate owns everything the browser has to get right around it:
//!
//! - **Session store**: the persisted identity + credential snapshot, shared
//!   across all open views of the same storage scope
//! - **HTTP access layer**: bearer-authenticated JSON requests with a
//!   normalized, displayable error contract
//! - **View-state controllers**: per-page loading/loaded/errored machines
//!   with inline edit, local filtering, and merge-after-success mutations
//! - **Document renderer**: the markup-to-SVG boundary with last-input-wins
//!   semantics and stale-result discard
//! - **Role-gated UI**: capability hints decoded from the credential payload
//!   (display only - the backend re-authorizes every call)
//!
//! # Architecture
//!
//! The crate is view-layer agnostic: controllers expose state snapshots and
//! navigation effects that a wasm rendering layer consumes. Browser-only glue
//! (localStorage, the `storage` event bridge) is confined to [`web`].

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod render;
pub mod session;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod test_support;

// Re-export commonly used types
pub use api::{ApiClient, Backend};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use session::SessionStore;
