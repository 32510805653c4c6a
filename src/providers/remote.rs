// src/providers/remote.rs

use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Instant;

use crate::config::EndpointConfig;
use crate::errors::{Result, SolveError};
use crate::models::{HttpMethod, Language, Platform, RequestParams, Solution};
use crate::providers::SolutionProvider;

/// Upper bound, in characters, on error details echoed from the service.
pub const ERROR_PREVIEW_LEN: usize = 100;

/// A provider that forwards requests to the configured solver service.
pub struct RemoteProvider {
    client: Client,
    url: Url,
    method: HttpMethod,
}

#[derive(Serialize)]
struct SolveRequest<'a> {
    slug: &'a str,
    platform: Platform,
    language: Language,
}

impl RemoteProvider {
    /// Creates a new `RemoteProvider`. Fails if the endpoint URL is not an
    /// absolute http(s) URL.
    pub fn new(client: Client, config: &EndpointConfig) -> Result<Self> {
        let url = Url::parse(config.url.trim()).map_err(|e| {
            SolveError::Validation(format!("endpoint URL '{}' is invalid: {}", config.url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SolveError::Validation(format!(
                "endpoint URL '{}' must use http or https",
                config.url
            )));
        }
        Ok(Self {
            client,
            url,
            method: config.method,
        })
    }

    /// `<url>?slug=..&platform=..&language=..`, keeping any query already present.
    pub fn query_url(&self, params: &RequestParams) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("slug", &params.slug)
            .append_pair("platform", params.platform.as_str())
            .append_pair("language", params.language.as_str());
        url
    }
}

impl SolutionProvider for RemoteProvider {
    /// Calls the solver service once and decodes its answer.
    async fn solve(&self, params: &RequestParams) -> Result<Solution> {
        let request = match self.method {
            HttpMethod::Post => {
                let body = SolveRequest {
                    slug: &params.slug,
                    platform: params.platform,
                    language: params.language,
                };
                self.client
                    .post(self.url.clone())
                    .header("Content-Type", "application/json")
                    .json(&body)
            }
            HttpMethod::Get => self.client.get(self.query_url(params)),
        };

        log::info!(
            "📡 Calling solver: {} {} for {} '{}'",
            self.method,
            self.url,
            params.platform.label(),
            params.slug
        );

        let start = Instant::now();
        let resp = request.send().await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Solver response status: {} ({}ms)", status, latency_ms);

        let body = resp.text().await?;
        log::debug!("Solver response body: {}", body);

        if !status.is_success() {
            let mut detail = error_detail(&body);
            if detail.trim().is_empty() {
                detail = status.canonical_reason().unwrap_or("no response body").to_string();
            }
            log::warn!("❌ Solver rejected request with status {}: {}", status, detail);
            return Err(SolveError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        parse_solution(&body)
    }
}

/// Decodes a success body. Only `code` is mandatory: a JSON body without a
/// string `code` is rejected as malformed rather than shown as an empty result.
pub fn parse_solution(body: &str) -> Result<Solution> {
    serde_json::from_str(body).map_err(|e| SolveError::MalformedResponse(e.to_string()))
}

/// The `message` field of a JSON error body, or else the raw body, bounded
/// to `ERROR_PREVIEW_LEN` characters.
pub fn error_detail(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("message")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        });

    match message {
        Some(message) => truncate(&message, ERROR_PREVIEW_LEN),
        None => truncate(body, ERROR_PREVIEW_LEN),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
