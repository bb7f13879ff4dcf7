//! Platform-wide aggregate counts.

use serde::{Deserialize, Serialize};

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlatformStats {
    /// Total registered users.
    pub total_users: i64,
    /// Total registered stores.
    pub total_stores: i64,
    /// Total submitted ratings.
    pub total_ratings: i64,
}
