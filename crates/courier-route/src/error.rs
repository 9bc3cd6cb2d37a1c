//! Routing error type.

use thiserror::Error;

use courier_core::GeoCoord;

/// The only two ways a routing query declines to produce a path.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The named endpoint is absent from the street network — caller error
    /// or stale map data.
    #[error("coordinate {0} is not on the street network")]
    BadCoordinate(GeoCoord),

    /// Both endpoints are known but the graph disconnects them.
    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoCoord, to: GeoCoord },
}

pub type RouteResult<T> = Result<T, RouteError>;
