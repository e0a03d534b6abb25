use tracing::info;
use crate::errors::FinderError;
use crate::models::meeting_request::MeetingRequest;
use crate::models::place::ResolvedPlace;
use crate::services::candidate_resolver::CandidateResolver;
use crate::services::suggestion_generator::SuggestionGenerator;

/// Suggestion generation followed by candidate resolution, for one request
pub struct MeetingSpotFinder {
    generator: SuggestionGenerator,
    resolver: CandidateResolver,
}

impl MeetingSpotFinder {
    pub fn new(generator: SuggestionGenerator, resolver: CandidateResolver) -> Self {
        Self { generator, resolver }
    }

    pub async fn find(&self, request: &MeetingRequest) -> Result<Vec<ResolvedPlace>, FinderError> {
        let candidates = self
            .generator
            .generate_suggestions(
                request.purpose_or_default(),
                &request.address1,
                &request.address2,
            ).await
            .map_err(FinderError::Suggestions)?;
        info!("Language model suggested {} candidates", candidates.len());

        let places = self.resolver.resolve(&candidates).await?;
        info!("Resolved {} of {} candidates", places.len(), candidates.len());

        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use crate::services::fakes::{FakeCompletion, FakePlaces};
    use super::*;

    fn request(purpose: Option<&str>) -> MeetingRequest {
        MeetingRequest {
            purpose: purpose.map(String::from),
            address1: "10 Main St".to_string(),
            address2: "20 Oak Ave".to_string(),
        }
    }

    #[tokio::test]
    async fn test_coffee_between_two_addresses() {
        let completion = Arc::new(FakeCompletion::replying(
            "Cafe Aroma, 5 Main St\nBad Entry With No Match\n"
        ));
        let places = Arc::new(FakePlaces::default().with_place("Cafe Aroma, 5 Main St", "Cafe Aroma"));
        let finder = MeetingSpotFinder::new(
            SuggestionGenerator::new(completion.clone()),
            CandidateResolver::new(places, 4),
        );

        let found = finder.find(&request(Some("coffee"))).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Cafe Aroma");
        assert_eq!(found[0].reviews[0].text, "Cafe Aroma was lovely");
        assert!(completion.conversations()[0][1]
            .content
            .starts_with("Find the best four spots for coffee between 10 Main St and 20 Oak Ave."));
    }

    #[tokio::test]
    async fn test_missing_purpose_uses_default() {
        let completion = Arc::new(FakeCompletion::replying(""));
        let finder = MeetingSpotFinder::new(
            SuggestionGenerator::new(completion.clone()),
            CandidateResolver::new(Arc::new(FakePlaces::default()), 4),
        );

        let found = finder.find(&request(None)).await.unwrap();

        assert!(found.is_empty());
        assert!(completion.conversations()[0][1]
            .content
            .starts_with("Find the best four spots for a meeting between"));
    }

    #[tokio::test]
    async fn test_generator_failure_skips_lookups() {
        let places = Arc::new(FakePlaces::default());
        let finder = MeetingSpotFinder::new(
            SuggestionGenerator::new(Arc::new(FakeCompletion::failing(500))),
            CandidateResolver::new(places.clone(), 4),
        );

        let err = finder.find(&request(Some("lunch"))).await.unwrap_err();

        assert!(matches!(err, FinderError::Suggestions(_)));
        assert_eq!(places.calls.load(Ordering::SeqCst), 0);
    }
}
