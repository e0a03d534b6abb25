//! Bounded retry with exponential backoff around upstream calls
//!
//! [`Retrying`] wraps any client and implements the same trait, so the
//! pipeline never needs to know whether the calls it makes are retried.

use std::future::Future;
use std::time::Duration;
use async_trait::async_trait;
use tracing::warn;
use crate::errors::UpstreamError;
use crate::models::chat_completion::ChatMessage;
use crate::models::google_places::PlaceDetails;
use crate::repositories::{CompletionClient, PlaceLookup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
}

impl RetryPolicy {
    /// `max_attempts` counts the first call, so 1 means no retries
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the given retry, 1 being the first retry
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }

    pub async fn run<T, F, Fut>(
        &self,
        operation: &str,
        mut call: F,
    ) -> Result<T, UpstreamError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    let backoff = self.backoff_for(attempt);
                    warn!(
                        "{} failed on attempt {}/{} due to: {}, retrying in {:?}",
                        operation, attempt, self.max_attempts, e, backoff
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

pub struct Retrying<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T> Retrying<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<T: CompletionClient> CompletionClient for Retrying<T> {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        self.policy
            .run("Chat completion", || self.inner.complete(messages))
            .await
    }
}

#[async_trait]
impl<T: PlaceLookup> PlaceLookup for Retrying<T> {
    async fn find_place_id(&self, query: &str) -> Result<Option<String>, UpstreamError> {
        self.policy
            .run("Place text search", || self.inner.find_place_id(query))
            .await
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, UpstreamError> {
        self.policy
            .run("Place detail lookup", || self.inner.place_details(place_id))
            .await
    }
}
