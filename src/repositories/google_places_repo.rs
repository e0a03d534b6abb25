use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::errors::UpstreamError;
use crate::models::google_places::{FindPlaceResponse, PlaceDetails, PlaceDetailsResponse};
use crate::repositories::PlaceLookup;

/// Statuses that mean the lookup worked but found nothing
const EMPTY_RESULT_STATUSES: [&str; 3] = ["OK", "ZERO_RESULTS", "NOT_FOUND"];

/// Google Places (legacy web service) client
pub struct GooglePlacesRepo {
    http: Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl GooglePlacesRepo {
    pub fn new(
        api_key: String,
        base_url: String,
        language: String,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("language", self.language.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn check_places_status(status: &str, error_message: Option<String>) -> Result<(), UpstreamError> {
    if EMPTY_RESULT_STATUSES.contains(&status) {
        return Ok(());
    }

    Err(UpstreamError::PlacesStatus {
        status: status.to_string(),
        message: error_message.unwrap_or_default(),
    })
}

#[async_trait]
impl PlaceLookup for GooglePlacesRepo {
    async fn find_place_id(&self, query: &str) -> Result<Option<String>, UpstreamError> {
        debug!("Searching places for: {}", query);
        let found: FindPlaceResponse = self
            .get_json(
                "findplacefromtext/json",
                &[("inputtype", "textquery"), ("input", query)],
            ).await?;
        check_places_status(&found.status, found.error_message)?;

        Ok(found.candidates.into_iter().next().map(|candidate| candidate.place_id))
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, UpstreamError> {
        debug!("Fetching place details for: {}", place_id);
        let details: PlaceDetailsResponse = self
            .get_json("details/json", &[("place_id", place_id)])
            .await?;
        check_places_status(&details.status, details.error_message)?;

        Ok(details.result)
    }
}
