//! `courier-core` — foundational types for the courier routing workspace.
//!
//! This crate is a dependency of every other `courier-*` crate.  It has no
//! `courier-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`geo`]   | `GeoCoord`, haversine great-circle distance      |
//! | [`rng`]   | `SearchRng` (seedable search randomness)         |
//! | [`error`] | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoCoord;
pub use rng::SearchRng;
