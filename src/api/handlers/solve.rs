// src/api/handlers/solve.rs
use actix_web::{web, HttpResponse, Result};
use futures::future;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::EndpointConfig;
use crate::models::{ErrorKind, RequestOutcome, RequestParams};

#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    pub id: String,
    pub mode: String,
    pub completed_at: String,
    pub outcome: RequestOutcome,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSolveResponse {
    pub batch_id: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<SolveResponse>,
}

fn mode(endpoint: &EndpointConfig) -> &'static str {
    if endpoint.use_mock { "mock" } else { "live" }
}

async fn run_one(state: &AppState, endpoint: &EndpointConfig, params: &RequestParams) -> SolveResponse {
    let outcome = state.solver.submit(params, endpoint).await;
    SolveResponse {
        id: Uuid::new_v4().to_string(),
        mode: mode(endpoint).to_string(),
        completed_at: chrono::Utc::now().to_rfc3339(),
        outcome,
    }
}

pub async fn solve(
    state: web::Data<AppState>,
    req: web::Json<RequestParams>,
) -> Result<HttpResponse> {
    let params = req.into_inner();
    let endpoint = state.endpoint_snapshot().await;

    let response = run_one(&state, &endpoint, &params).await;

    let kind = response.outcome.error().map(|e| e.kind);
    match kind {
        None => Ok(HttpResponse::Ok().json(response)),
        Some(ErrorKind::Validation) => Ok(HttpResponse::BadRequest().json(response)),
        Some(_) => Ok(HttpResponse::BadGateway().json(response)),
    }
}

/// Runs every request concurrently against one configuration snapshot.
pub async fn solve_batch(
    state: web::Data<AppState>,
    req: web::Json<Vec<RequestParams>>,
) -> Result<HttpResponse> {
    let batch = req.into_inner();
    let endpoint = state.endpoint_snapshot().await;

    log::info!("📦 Solving batch of {} in {} mode", batch.len(), mode(&endpoint));

    let futures: Vec<_> = batch
        .iter()
        .map(|params| run_one(&state, &endpoint, params))
        .collect();
    let results = future::join_all(futures).await;

    let succeeded = results.iter().filter(|r| r.outcome.is_success()).count();

    Ok(HttpResponse::Ok().json(BatchSolveResponse {
        batch_id: Uuid::new_v4().to_string(),
        total: results.len(),
        succeeded,
        failed: results.len() - succeeded,
        results,
    }))
}
