use std::time::Duration;
use clap::Parser;
use crate::helpers::retry::RetryPolicy;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "127.0.0.1")]
    pub host: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of origins allowed through CORS
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long, hide_env_values = true)]
    pub openai_api_key: String,

    #[clap(env, long, default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    #[clap(env, long, default_value = "gpt-4o")]
    pub openai_model: String,

    #[clap(env, long, hide_env_values = true)]
    pub google_places_api_key: String,

    #[clap(env, long, default_value = "https://maps.googleapis.com/maps/api/place")]
    pub google_places_base_url: String,

    #[clap(env, long, default_value = "lt")]
    pub places_language: String,

    /// Upper bound on candidates looked up at the same time
    #[clap(env, long, default_value_t = 4)]
    pub max_concurrent_lookups: usize,

    #[clap(env, long, default_value_t = 3)]
    pub retry_max_attempts: u32,

    #[clap(env, long, default_value_t = 250)]
    pub retry_initial_backoff_ms: u64,

    #[clap(env, long, default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Duration::from_millis(self.retry_initial_backoff_ms),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn origins(&self) -> Vec<&str> {
        self.origin_urls
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
