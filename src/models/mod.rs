//! Wire types shared with the backend
//!
//! Every entity here is a value snapshot fetched per view. There is no
//! client-side cache coherence across views: two open pages can hold
//! independently stale copies of the same entity. That is an accepted
//! property of the platform, not something these types try to hide.

pub mod leaderboard;
pub mod stats;
pub mod submission;
pub mod tournament;
pub mod user;

pub use leaderboard::LeaderboardEntry;
pub use stats::{DashboardLeader, DashboardStats, FeaturedTournament};
pub use submission::{Submission, SubmissionStatus, SubmissionUser};
pub use tournament::{Tournament, TournamentStatus};
pub use user::{AdminUser, Participation, Role, Session, SessionUser, UserProfile};
