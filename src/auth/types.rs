//! Token state types

use chrono::{DateTime, Utc};

/// Grace buffer against latency and clock skew: a token counts as expired
/// this many seconds before its actual expiry instant.
pub const EXPIRY_BUFFER_SECS: i64 = 10;

/// Cached access token with its absolute expiry instant
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The bearer access token
    pub token: String,
    /// When the token expires
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        Self {
            token,
            expires_at: Utc::now() + chrono::Duration::seconds(seconds),
        }
    }

    /// Whether the token is within the expiry grace buffer
    pub fn is_expired(&self) -> bool {
        Utc::now() + chrono::Duration::seconds(EXPIRY_BUFFER_SECS) >= self.expires_at
    }
}
