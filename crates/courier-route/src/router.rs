//! Routing trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The optimizer and planner call routing via the [`Router`] trait, so
//! applications can swap in custom implementations (contraction
//! hierarchies, turn-penalty models) without touching the rest of the
//! stack.  The default [`AStarRouter`] is sufficient for city-scale maps.
//!
//! # Costs
//!
//! Edge weight is the great-circle length of a segment in metres; the
//! heuristic is the great-circle distance to the goal.  The heuristic never
//! overestimates the remaining road distance, so the first time the goal is
//! popped its cost is minimal.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use courier_core::GeoCoord;
use courier_store::ExpandableMap;
use courier_street::{SegmentSource, StreetSegment};

use crate::error::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: contiguous directed segments from source
/// to destination and their summed length.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Segments to traverse in order; each segment's `end` is the next
    /// segment's `start`.
    pub segments: Vec<StreetSegment>,
    /// Cumulative great-circle length of the segments in metres.
    pub total_distance_m: f64,
}

impl Route {
    /// `true` if the source and destination are the same coordinate.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable point-to-point routing engine.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` over `map`.
    ///
    /// `from == to` yields an empty route rather than an error.
    fn route(
        &self,
        map: &dyn SegmentSource,
        from: &GeoCoord,
        to: &GeoCoord,
    ) -> RouteResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the coordinate graph with the straight-line heuristic.
///
/// Per query it allocates two transient [`ExpandableMap`] tables — best
/// known cost per coordinate and the segment used to reach it — both
/// discarded once the path is reconstructed.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(
        &self,
        map: &dyn SegmentSource,
        from: &GeoCoord,
        to: &GeoCoord,
    ) -> RouteResult<Route> {
        astar(map, from, to)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Frontier entry ordered by `f = g + h`, then by insertion sequence.
///
/// The sequence number pins the tie-break among equal priorities to FIFO
/// order, so a query over a graph with several equal-cost shortest paths
/// always reconstructs the same one.
struct FrontierEntry {
    f: f64,
    g: f64,
    seq: u64,
    coord: GeoCoord,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

fn astar(map: &dyn SegmentSource, from: &GeoCoord, to: &GeoCoord) -> RouteResult<Route> {
    if map.segments_from(from).is_none() {
        return Err(RouteError::BadCoordinate(from.clone()));
    }
    if map.segments_from(to).is_none() {
        return Err(RouteError::BadCoordinate(to.clone()));
    }
    if from == to {
        return Ok(Route { segments: Vec::new(), total_distance_m: 0.0 });
    }

    // best_cost[c] = length of the cheapest known path to c.
    let mut best_cost: ExpandableMap<GeoCoord, f64> = ExpandableMap::new();
    // came_by[c] = segment that first reached c on that cheapest path.
    let mut came_by: ExpandableMap<GeoCoord, StreetSegment> = ExpandableMap::new();

    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut seq = 0u64;

    best_cost.associate(from.clone(), 0.0);
    frontier.push(Reverse(FrontierEntry {
        f: from.distance_m(to),
        g: 0.0,
        seq,
        coord: from.clone(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = entry.coord;
        if current == *to {
            return Ok(reconstruct(&came_by, from, to));
        }

        let best = best_cost.find(&current).copied().unwrap_or(f64::INFINITY);
        // Skip stale entries superseded by a cheaper path found later.
        if entry.g > best {
            continue;
        }

        let Some(options) = map.segments_from(&current) else {
            continue;
        };
        for seg in options {
            let next = &seg.end;
            let candidate = best + seg.length_m();
            let improves = match best_cost.find(next) {
                None => true,
                Some(&known) => candidate < known,
            };
            if improves {
                best_cost.associate(next.clone(), candidate);
                came_by.associate(next.clone(), seg.clone());
                seq += 1;
                frontier.push(Reverse(FrontierEntry {
                    f: candidate + next.distance_m(to),
                    g: candidate,
                    seq,
                    coord: next.clone(),
                }));
            }
        }
    }

    Err(RouteError::NoRoute { from: from.clone(), to: to.clone() })
}

fn reconstruct(
    came_by: &ExpandableMap<GeoCoord, StreetSegment>,
    from: &GeoCoord,
    to: &GeoCoord,
) -> Route {
    let mut segments = Vec::new();
    let mut total_m = 0.0;
    let mut cursor = to.clone();
    // Walk predecessors back to the start.  A missing predecessor also ends
    // the walk; every coordinate between goal and start was recorded during
    // relaxation, so that exit can only fire at the start itself.
    while cursor != *from {
        let Some(seg) = came_by.find(&cursor) else {
            break;
        };
        total_m += seg.length_m();
        cursor = seg.start.clone();
        segments.push(seg.clone());
    }
    segments.reverse();
    Route { segments, total_distance_m: total_m }
}
