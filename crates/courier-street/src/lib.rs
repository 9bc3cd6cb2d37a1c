//! `courier-street` — street network index, map-file loading, and
//! coordinate snapping.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`segment`] | `StreetSegment`, `SegmentSource` trait                 |
//! | [`map`]     | `StreetMap` (index + R-tree), `StreetMapBuilder`       |
//! | [`loader`]  | `StreetMap::load_file` / `load_reader` text format     |
//! | [`error`]   | `StreetError`, `StreetResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.      |

pub mod error;
pub mod loader;
pub mod map;
pub mod segment;


pub use error::{StreetError, StreetResult};
pub use map::{StreetMap, StreetMapBuilder};
pub use segment::{SegmentSource, StreetSegment};
