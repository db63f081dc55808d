//! Batched asynchronous dispatch
//!
//! Opening a batch validates the token once and snapshots it; every
//! enqueued request is spawned immediately against that snapshot. The
//! validity check is deliberately not re-run per enqueued call, so a
//! token expiring mid-batch surfaces as failed requests at resolve time
//! rather than being silently refreshed.

use super::dispatch::ShopwareClient;
use crate::error::{Error, Result};
use crate::types::Method;
use futures::future;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::debug;

/// An issued-but-not-yet-awaited call, yielding the raw response body
type PendingRequest = JoinHandle<Result<String>>;

/// An open batch of in-flight requests sharing one token snapshot.
///
/// Results are collected with [`RequestBatch::resolve_all`], which is
/// all-or-nothing: the first failure aborts the resolve and discards any
/// results decoded before it.
pub struct RequestBatch<'a> {
    client: &'a ShopwareClient,
    token: String,
    pending: Vec<PendingRequest>,
}

impl ShopwareClient {
    /// Open a batch, validating the token once up front
    pub async fn batch(&self) -> Result<RequestBatch<'_>> {
        let token = self.auth().ensure_valid().await?;
        Ok(RequestBatch {
            client: self,
            token,
            pending: Vec::new(),
        })
    }
}

impl RequestBatch<'_> {
    /// Issue a call without waiting for its result.
    ///
    /// The request is spawned immediately and its handle appended to the
    /// queue in enqueue order.
    pub fn enqueue(&mut self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        let request = self
            .client
            .build_request(method, path, &self.token, body.as_ref())?;

        let handle = tokio::spawn(async move {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;

            if !status.is_success() {
                return Err(Error::http_status(status.as_u16(), text));
            }
            Ok(text)
        });

        self.pending.push(handle);
        Ok(())
    }

    /// Number of in-flight requests
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Await every queued call and decode each body in enqueue order.
    ///
    /// Decoding is strict here: a malformed body fails the whole resolve
    /// instead of being replaced with an empty mapping.
    pub async fn resolve_all(self) -> Result<Vec<Value>> {
        let RequestBatch { client, pending, .. } = self;

        debug!(count = pending.len(), "resolving request batch");
        let joined = future::try_join_all(pending)
            .await
            .map_err(|err| Error::Other(format!("batch task failed: {err}")))?;

        let mut results = Vec::with_capacity(joined.len());
        for body in joined {
            let body = body?;
            results.push(client.decoder().decode_strict(&body)?);
        }
        Ok(results)
    }

    /// Resolve the batch into a concrete type per result
    pub async fn resolve_all_as<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        self.resolve_all()
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(Error::JsonParse))
            .collect()
    }
}
