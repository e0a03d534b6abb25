pub mod chat_completion;
pub mod google_places;
pub mod meeting_request;
pub mod place;
