use async_trait::async_trait;
use crate::errors::UpstreamError;
use crate::models::chat_completion::ChatMessage;
use crate::models::google_places::PlaceDetails;

pub mod google_places_repo;
pub mod openai_repo;

/// Language model that turns a conversation into a single text reply
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError>;
}

/// Two-step place lookup: free text to place id, place id to full record
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// Id of the first match for `query`, `None` when nothing matched
    async fn find_place_id(&self, query: &str) -> Result<Option<String>, UpstreamError>;

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, UpstreamError>;
}
