//! `courier-store` — the associative store behind the street index and the
//! router's per-query tables.
//!
//! One type lives here: [`ExpandableMap`], a chained hash map with an
//! observable doubling growth policy.  It is fully generic and has no
//! `courier-*` dependencies; `courier-street` keys it by coordinate for the
//! network index, and `courier-route` creates two transient instances per
//! shortest-path query (best-cost and predecessor tables).

pub mod map;

#[cfg(test)]
mod tests;

pub use map::{DefaultHashBuilder, ExpandableMap};
