use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::helpers::retry::Retrying;
use crate::repositories::google_places_repo::GooglePlacesRepo;
use crate::repositories::openai_repo::OpenAiCompletionRepo;
use crate::services::candidate_resolver::CandidateResolver;
use crate::services::meeting_spot_finder::MeetingSpotFinder;
use crate::services::suggestion_generator::SuggestionGenerator;

pub mod health_check;
pub mod meeting_spot_controller;

#[derive(Clone)]
pub struct AppState {
    pub finder: Arc<MeetingSpotFinder>,
    pub environment: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let retry_policy = config.retry_policy();

        let completion_repo = OpenAiCompletionRepo::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.openai_model.clone(),
            config.request_timeout(),
        ).context("Failed to build the language model client")?;

        let places_repo = GooglePlacesRepo::new(
            config.google_places_api_key.clone(),
            config.google_places_base_url.clone(),
            config.places_language.clone(),
            config.request_timeout(),
        ).context("Failed to build the places client")?;

        let finder = MeetingSpotFinder::new(
            SuggestionGenerator::new(Arc::new(Retrying::new(completion_repo, retry_policy))),
            CandidateResolver::new(
                Arc::new(Retrying::new(places_repo, retry_policy)),
                config.max_concurrent_lookups,
            ),
        );

        Ok(Self {
            finder: Arc::new(finder),
            environment: config.environment.clone(),
        })
    }
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins = config
        .origins()
        .into_iter()
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<HeaderValue>, _>>()
        .context("Invalid url in ORIGIN_URLS")?;

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        );

    let address: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid HOST or PORT")?;
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router(app_state.clone()))
        .nest("/api", meeting_spot_controller::router(app_state))
        .fallback(page_not_found_handler)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for the shutdown signal due to: {}", e);
        return;
    }
    info!("Shutdown signal received, draining in-flight requests");
}
