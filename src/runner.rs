// src/runner.rs
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::{AppConfig, EndpointConfig};
use crate::errors::{Result, SolveError};
use crate::models::{ErrorInfo, RequestOutcome, RequestParams, Solution};
use crate::providers::{SolutionProvider, mock::MockProvider, remote::RemoteProvider};

/// Turns a request plus an endpoint configuration into a `RequestOutcome`.
///
/// Holds no per-request state: overlapping `submit` calls are independent,
/// and deciding which result to keep is up to the caller.
#[derive(Debug, Clone)]
pub struct Solver {
    client: Client,
    mock: MockProvider,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Client::new(), MockProvider::default())
    }
}

impl Solver {
    pub fn new(client: Client, mock: MockProvider) -> Self {
        Self { client, mock }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Client::new(), MockProvider::new(config.mock_latency()))
    }

    pub fn mock_latency(&self) -> Duration {
        self.mock.latency()
    }

    /// Run one submission. Never fails: every error ends up in
    /// `RequestOutcome::Failure`.
    pub async fn submit(&self, params: &RequestParams, config: &EndpointConfig) -> RequestOutcome {
        let start = Instant::now();
        match self.try_submit(params, config).await {
            Ok(solution) => {
                log::info!(
                    "✅ Solved {} '{}' in {}ms",
                    params.platform.label(),
                    params.slug,
                    start.elapsed().as_millis()
                );
                RequestOutcome::Success(solution)
            }
            Err(e) => {
                log::warn!("❌ Request for '{}' failed: {}", params.slug, e);
                RequestOutcome::Failure(ErrorInfo::from(&e))
            }
        }
    }

    /// Same as `submit`, but keeps the typed error.
    pub async fn try_submit(&self, params: &RequestParams, config: &EndpointConfig) -> Result<Solution> {
        validate(params, config)?;

        if config.use_mock {
            self.mock.solve(params).await
        } else {
            let provider = RemoteProvider::new(self.client.clone(), config)?;
            provider.solve(params).await
        }
    }
}

/// Checks that run before any mock or network work.
pub fn validate(params: &RequestParams, config: &EndpointConfig) -> Result<()> {
    if params.slug.trim().is_empty() {
        return Err(SolveError::Validation(
            "problem slug must not be empty".to_string(),
        ));
    }
    if !config.use_mock && config.is_placeholder() {
        return Err(SolveError::Validation(
            "no solver endpoint configured; set an API URL or enable mock mode".to_string(),
        ));
    }
    Ok(())
}
