// src/api/handlers/mod.rs
mod health;
mod settings;
mod solve;

pub use health::health_check;
pub use settings::{get_config, update_config, ConfigUpdate};
pub use solve::{solve, solve_batch, BatchSolveResponse, SolveResponse};
