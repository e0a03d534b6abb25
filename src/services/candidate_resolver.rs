use std::sync::Arc;
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};
use crate::errors::{FinderError, UpstreamError};
use crate::models::place::ResolvedPlace;
use crate::repositories::PlaceLookup;

/// Verifies candidates against the place API and enriches the ones that exist.
///
/// Each candidate is resolved on its own: a lookup failing for one of them drops
/// that candidate only. The batch as a whole fails when nothing resolved and at
/// least one lookup failed.
pub struct CandidateResolver {
    lookup: Arc<dyn PlaceLookup>,
    max_concurrent_lookups: usize,
}

impl CandidateResolver {
    pub fn new(lookup: Arc<dyn PlaceLookup>, max_concurrent_lookups: usize) -> Self {
        Self {
            lookup,
            max_concurrent_lookups: max_concurrent_lookups.max(1),
        }
    }

    pub async fn resolve(&self, candidates: &[String]) -> Result<Vec<ResolvedPlace>, FinderError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        // Built up front; `buffered` then yields in input order no matter which lookup finishes first
        let lookups = candidates
            .iter()
            .map(|candidate| self.resolve_candidate(candidate))
            .collect::<Vec<_>>();
        let outcomes: Vec<Result<Option<ResolvedPlace>, UpstreamError>> = stream::iter(lookups)
            .buffered(self.max_concurrent_lookups)
            .collect()
            .await;

        let mut places = Vec::new();
        let mut first_error = None;
        for (candidate, outcome) in candidates.iter().zip(outcomes) {
            match outcome {
                Ok(Some(place)) => places.push(place),
                Ok(None) => debug!("No place matched candidate: {}", candidate),
                Err(e) => {
                    warn!("Failed to resolve candidate: {}, due to: {}", candidate, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        // Nothing resolved and something broke: an empty list would read as "no spots"
        if places.is_empty() {
            if let Some(source) = first_error {
                return Err(FinderError::Resolution {
                    attempted: candidates.len(),
                    source,
                });
            }
        }

        Ok(places)
    }

    async fn resolve_candidate(&self, candidate: &str) -> Result<Option<ResolvedPlace>, UpstreamError> {
        let Some(place_id) = self.lookup.find_place_id(candidate).await? else {
            return Ok(None);
        };

        let details = self.lookup.place_details(&place_id).await?;
        Ok(details.map(ResolvedPlace::from))
    }
}
