//! Token lifecycle management
//!
//! Owns the OAuth2 client-credentials exchange against
//! `POST /api/oauth/token` and the cached access token.
//! [`TokenManager::ensure_valid`] is idempotent and performs no network
//! call while the cached token still has lifetime left.

mod manager;
mod types;

pub use manager::TokenManager;
pub use types::{CachedToken, EXPIRY_BUFFER_SECS};

#[cfg(test)]
mod tests;
