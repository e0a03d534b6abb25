pub mod candidate_resolver;
pub mod meeting_spot_finder;
pub mod suggestion_generator;
