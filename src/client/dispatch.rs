//! Synchronous request dispatch
//!
//! Every call validates the token first, attaches the bearer header and
//! the indexing hint, and decodes the body immediately. Failures are
//! logged with request context and re-raised unchanged.

use crate::auth::TokenManager;
use crate::config::ClientConfig;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result};
use crate::types::{ApiResponse, IndexingBehavior, Method};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::fmt;
use tracing::{debug, error};

/// Header carrying the search index update hint
pub const INDEXING_BEHAVIOR_HEADER: &str = "indexing-behavior";

const ACCEPT_JSON_API: &str = "application/vnd.api+json";

/// Credentialed client for the Shopware 6 Admin API.
///
/// One instance owns one token; concurrent use from multiple owners is
/// not part of the contract.
pub struct ShopwareClient {
    config: ClientConfig,
    http: Client,
    auth: TokenManager,
    decoder: JsonDecoder,
    indexing: IndexingBehavior,
}

impl ShopwareClient {
    /// Create a client from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder().timeout(config.timeout).build()?;
        let auth = TokenManager::new(config.clone(), http.clone());

        Ok(Self {
            config,
            http,
            auth,
            decoder: JsonDecoder::new(),
            indexing: IndexingBehavior::default(),
        })
    }

    /// Fluent setter for the indexing hint
    pub fn indexing(mut self, behavior: IndexingBehavior) -> Self {
        self.indexing = behavior;
        self
    }

    /// Change the indexing hint on an existing client
    pub fn set_indexing(&mut self, behavior: IndexingBehavior) {
        self.indexing = behavior;
    }

    /// The indexing hint currently attached to requests
    pub fn indexing_behavior(&self) -> IndexingBehavior {
        self.indexing
    }

    /// Dispatch one call and decode the response.
    ///
    /// An empty response body yields [`ApiResponse::NoContent`]; a
    /// malformed JSON body is logged and yields an empty mapping. Token
    /// and transport failures are logged with `{uri, method, body}`
    /// context and propagated unchanged.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        match self.try_call(method, path, body.as_ref()).await {
            Ok(response) => Ok(response),
            Err(err) => {
                error!(
                    uri = path,
                    method = %method,
                    body = ?body,
                    error = %err,
                    "shopware request failed"
                );
                Err(err)
            }
        }
    }

    /// Dispatch a call with a verb given as a string.
    ///
    /// Unknown verbs are rejected before the token check and before any
    /// network call.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let method: Method = method.parse()?;
        self.call(method, path, body).await
    }

    /// GET a resource
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.call(Method::GET, path, None).await
    }

    /// POST a payload
    pub async fn post(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.call(Method::POST, path, Some(body)).await
    }

    /// PATCH a resource
    pub async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.call(Method::PATCH, path, Some(body)).await
    }

    /// PUT a resource
    pub async fn put(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.call(Method::PUT, path, Some(body)).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.call(Method::DELETE, path, None).await
    }

    async fn try_call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let token = self.auth.ensure_valid().await?;
        let request = self.build_request(method, path, &token, body)?;

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), text));
        }

        if text.is_empty() {
            debug!(uri = path, method = %method, "empty response body, success marker");
            return Ok(ApiResponse::NoContent);
        }

        Ok(ApiResponse::Json(self.decoder.decode(&text)))
    }

    /// Build an authenticated request with the standard header set.
    ///
    /// The indexing hint is read here, at request-build time.
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Value>,
    ) -> Result<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        let mut request = self
            .http
            .request(method.into(), url)
            .header(ACCEPT, ACCEPT_JSON_API)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token);

        if let Some(value) = self.indexing.header_value() {
            request = request.header(INDEXING_BEHAVIOR_HEADER, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request)
    }

    pub(crate) fn auth(&self) -> &TokenManager {
        &self.auth
    }

    pub(crate) fn decoder(&self) -> &JsonDecoder {
        &self.decoder
    }
}

impl fmt::Debug for ShopwareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopwareClient")
            .field("base_url", &self.config.base_url)
            .field("client_id", &self.config.client_id)
            .field("indexing", &self.indexing)
            .finish_non_exhaustive()
    }
}
