//! Application-wide constants
//!
//! This module contains all constant values used throughout the client.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// API DEFAULTS
// =============================================================================

/// Default backend base URL when `POTM_API_URL` is unset
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Fallback error text when a failure response has no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

// =============================================================================
// PERSISTED CLIENT STATE
// =============================================================================

/// Storage key holding the opaque bearer credential
pub const TOKEN_STORAGE_KEY: &str = "potm.token";

/// Storage key holding the serialized identity record
pub const USER_STORAGE_KEY: &str = "potm.user";

// =============================================================================
// ROLES
// =============================================================================

/// Role identifiers as the backend spells them
pub mod roles {
    pub const USER: &str = "USER";
    pub const EDITOR: &str = "EDITOR";
    pub const ADMIN: &str = "ADMIN";
}

// =============================================================================
// SUBMISSION LANGUAGES
// =============================================================================

/// Language identifiers accepted by the solution upload form
pub mod languages {
    pub const C: &str = "c";
    pub const CPP: &str = "cpp";
    pub const RUST: &str = "rust";
    pub const PYTHON: &str = "python";
    pub const JAVASCRIPT: &str = "javascript";

    /// All selectable language identifiers
    pub const ALL: &[&str] = &[C, CPP, RUST, PYTHON, JAVASCRIPT];
}

// =============================================================================
// ROUTES
// =============================================================================

/// Client route paths used by navigation effects
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const TOURNAMENTS: &str = "/tournaments";
    pub const LEADERBOARD: &str = "/leaderboard";
    pub const ADMIN: &str = "/admin";
}
