//! Admin API client
//!
//! [`ShopwareClient`] is the synchronous surface: one call at a time,
//! token checked first, body decoded immediately. [`RequestBatch`] is the
//! fire-then-join surface: requests are spawned as they are enqueued and
//! results are only collected at the explicit join point.

mod batch;
mod dispatch;

pub use batch::RequestBatch;
pub use dispatch::{ShopwareClient, INDEXING_BEHAVIOR_HEADER};
