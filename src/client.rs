//! Outbound HTTP collaborator
//!
//! A single configured client with a base address and a fixed timeout. A
//! bearer token held in an in-memory slot is attached as
//! `Authorization: Bearer <token>` to every outgoing request when present;
//! without a token, requests proceed unauthenticated. Request-construction
//! errors are passed through unchanged to the caller.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Method, Request, RequestBuilder};

use crate::{
    config::BackendConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build backend client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token)),
        })
    }

    /// Store the bearer token used for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token_slot() = Some(token.into());
    }

    /// Drop the stored token; requests go out unauthenticated afterwards.
    pub fn clear_token(&self) {
        *self.token_slot() = None;
    }

    /// Build a request against the configured base address, attaching the
    /// bearer token when one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);

        match self.token_slot().as_deref() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Finalize a builder into a request, forwarding construction errors
    /// unchanged.
    pub fn build(&self, builder: RequestBuilder) -> AppResult<Request> {
        builder.build().map_err(AppError::from)
    }

    fn token_slot(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }
}
