//! Planning error type.

use thiserror::Error;

use courier_route::RouteError;

/// Errors produced by `courier-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type PlanResult<T> = Result<T, PlanError>;
