//! # Shopware Admin API Client
//!
//! A credentialed REST client for the Shopware 6 Admin API. The client
//! owns exactly one OAuth2 client-credentials token, refreshes it before
//! it expires, and dispatches requests either synchronously (one at a
//! time, decoded immediately) or asynchronously (batched, awaited
//! together at an explicit join point).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopware_client::{ClientConfig, Method, ShopwareClient};
//!
//! #[tokio::main]
//! async fn main() -> shopware_client::Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://shop.example.com")
//!         .client_id("SWIA...")
//!         .client_secret("...")
//!         .build();
//!     let client = ShopwareClient::new(config)?;
//!
//!     // One call at a time
//!     let products = client.get("/api/product").await?;
//!
//!     // Fire-then-join batch sharing one token snapshot
//!     let mut batch = client.batch().await?;
//!     batch.enqueue(Method::GET, "/api/category", None)?;
//!     batch.enqueue(Method::GET, "/api/currency", None)?;
//!     let results = batch.resolve_all().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller → TokenManager::ensure_valid → ShopwareClient::call → JsonDecoder
//!        → ShopwareClient::batch → RequestBatch::enqueue* → resolve_all
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types shared across modules
pub mod types;

/// Client configuration
pub mod config;

/// Token lifecycle management
pub mod auth;

/// Request dispatch, synchronous and batched
pub mod client;

/// Response body decoding
pub mod decode;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{RequestBatch, ShopwareClient};
pub use config::{ClientConfig, RetryPolicy};
pub use error::{Error, Result};
pub use types::{ApiResponse, IndexingBehavior, Method};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
