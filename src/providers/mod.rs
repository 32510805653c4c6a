// src/providers/mod.rs

use crate::errors::Result;
use crate::models::{RequestParams, Solution};

pub mod mock;
pub mod remote;

/// A common trait for anything that can turn a problem request into a solution.
/// Implemented by the offline mock generator and the live HTTP endpoint.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait SolutionProvider: Send + Sync {
    /// Produces a solution for `params`.
    ///
    /// Implementations always suspend at least once before resolving, so
    /// callers observe the same contract whichever provider is in use.
    fn solve(&self, params: &RequestParams) -> impl std::future::Future<Output = Result<Solution>> + Send;
}
