// src/api/state.rs
use crate::config::{AppConfig, EndpointConfig};
use crate::runner::Solver;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared by every worker. The endpoint settings are mutable through the
/// settings routes; each solve works on a snapshot taken when it starts.
#[derive(Clone)]
pub struct AppState {
    pub solver: Solver,
    pub endpoint: Arc<RwLock<EndpointConfig>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_solver(Solver::from_config(config), config.endpoint.clone())
    }

    pub fn with_solver(solver: Solver, endpoint: EndpointConfig) -> Self {
        Self {
            solver,
            endpoint: Arc::new(RwLock::new(endpoint)),
        }
    }

    pub async fn endpoint_snapshot(&self) -> EndpointConfig {
        self.endpoint.read().await.clone()
    }
}
