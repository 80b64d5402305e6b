//! Session state shared across every view
//!
//! The session is the one process-wide piece of client state. It is mutated
//! only by login, registration, refresh, and logout, and every other view
//! observes it through the store's watch channel instead of reading the
//! persisted keys ad hoc.

pub mod claims;
pub mod store;

pub use claims::TokenClaims;
pub use store::{SessionStore, StorageBackend};
