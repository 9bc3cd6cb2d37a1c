//! `courier-route` — point-to-point routing and tour optimization.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`router`]    | `Router` trait, `Route`, `AStarRouter`               |
//! | [`optimizer`] | `DeliveryStop`, `TourOptimizer`, `TourDistances`     |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod optimizer;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use optimizer::{DeliveryStop, TourDistances, TourOptimizer};
pub use router::{AStarRouter, Route, Router};
