// src/api/handlers/settings.rs
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::api::AppState;
use crate::models::HttpMethod;

/// Partial update; omitted fields keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigUpdate {
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    pub use_mock: Option<bool>,
}

pub async fn get_config(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.endpoint_snapshot().await))
}

pub async fn update_config(
    state: web::Data<AppState>,
    req: web::Json<ConfigUpdate>,
) -> Result<HttpResponse> {
    let update = req.into_inner();

    let updated = {
        let mut endpoint = state.endpoint.write().await;
        if let Some(url) = update.url {
            endpoint.url = url.trim().to_string();
        }
        if let Some(method) = update.method {
            endpoint.method = method;
        }
        if let Some(use_mock) = update.use_mock {
            endpoint.use_mock = use_mock;
        }
        endpoint.clone()
    };

    log::info!(
        "⚙️  Endpoint updated: {} {} (mock: {})",
        updated.method,
        updated.url,
        updated.use_mock
    );

    Ok(HttpResponse::Ok().json(updated))
}
