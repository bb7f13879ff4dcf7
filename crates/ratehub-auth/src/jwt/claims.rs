//! JWT claims structure embedded in every bearer token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ratehub_entity::user::UserRole;

/// JWT claims payload.
///
/// The token carries just enough identity for stateless request
/// authorization: user ID, email, and the role at issuance time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Email address at the time of token issuance.
    pub email: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
