//! Delivery-order optimization by simulated annealing.
//!
//! # Why annealing
//!
//! Exact optimal ordering is a traveling-salesman instance, intractable at
//! scale, so the optimizer trades guaranteed optimality for a bounded-time
//! heuristic.  True road distance (a full routing query per leg) is
//! computed exactly twice — before and after the search — while the search
//! itself scores candidate orders with a constant-time proxy: the sum of
//! great-circle distances between consecutive tour points.  The proxy
//! correlates well with road distance and is cheap enough for thousands of
//! evaluations.
//!
//! # Schedule
//!
//! Temperature starts at √(stop count), cools by ×0.995 per iteration, and
//! the loop is bounded by a 10 000-iteration cap with an early exit once the
//! temperature reaches 1e-8.  The cap, not the floor, guarantees
//! termination: cooling can stall short of the floor in float arithmetic.
//!
//! Each iteration swaps two distinct random stop positions in the single
//! working copy.  An order that beats the best score seen so far is kept
//! and becomes the new best; otherwise the swap is reverted exactly when
//! `exp((best − candidate)/T)` falls below a uniform draw from `[0, 1)`, so
//! a hot search keeps most regressions and a cold one almost none.

use courier_core::{GeoCoord, SearchRng};
use courier_street::SegmentSource;

use crate::error::RouteResult;
use crate::router::Router;

// ── Delivery stops ────────────────────────────────────────────────────────────

/// One requested delivery: where, and an opaque label for the manifest.
///
/// The optimizer only permutes the sequence of stops; it never alters a
/// stop's fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryStop {
    pub location: GeoCoord,
    pub label: String,
}

impl DeliveryStop {
    pub fn new(location: GeoCoord, label: impl Into<String>) -> Self {
        Self { location, label: label.into() }
    }
}

/// Road distance of the tour before and after optimization, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourDistances {
    pub original_m: f64,
    pub optimized_m: f64,
}

// ── TourOptimizer ─────────────────────────────────────────────────────────────

/// Simulated-annealing reordering of a delivery tour.
pub struct TourOptimizer {
    /// Hard bound on annealing iterations.
    pub max_iterations: usize,
    /// Multiplicative temperature decay per iteration.
    pub cooling_rate: f64,
    /// Early-exit threshold for the temperature.
    pub temperature_floor: f64,
}

impl Default for TourOptimizer {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            cooling_rate: 0.995,
            temperature_floor: 1e-8,
        }
    }
}

impl TourOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reorder `stops` to shorten the round trip depot → stops… → depot.
    ///
    /// Returns the road distance of the original and the optimized order.
    /// `stops` is replaced by the improved order **only** when the
    /// optimized road distance is strictly shorter; otherwise the list is
    /// left untouched and both reported distances are equal — the caller
    /// never ends up worse off.  With fewer than two stops there is nothing
    /// to reorder and both distances are the tour as given.
    ///
    /// # Errors
    ///
    /// The search itself cannot fail; the two road-distance evaluations
    /// propagate the router's [`BadCoordinate`](crate::RouteError) /
    /// [`NoRoute`](crate::RouteError) outcomes for unroutable tours.
    pub fn optimize(
        &self,
        map: &dyn SegmentSource,
        router: &dyn Router,
        depot: &GeoCoord,
        stops: &mut Vec<DeliveryStop>,
        rng: &mut SearchRng,
    ) -> RouteResult<TourDistances> {
        let original_m = road_distance(map, router, depot, stops)?;
        if stops.len() < 2 {
            return Ok(TourDistances { original_m, optimized_m: original_m });
        }

        let mut working = stops.clone();
        let mut temperature = (stops.len() as f64).sqrt();
        let mut best_proxy = proxy_distance(depot, &working);

        for _ in 0..self.max_iterations {
            if temperature <= self.temperature_floor {
                break;
            }

            let (a, b) = distinct_pair(working.len(), rng);
            working.swap(a, b);
            let candidate = proxy_distance(depot, &working);

            if candidate < best_proxy {
                best_proxy = candidate;
            } else if !keep_worse(best_proxy, candidate, temperature, rng.unit_f64()) {
                working.swap(a, b);
            }

            temperature *= self.cooling_rate;
        }

        let optimized_m = road_distance(map, router, depot, &working)?;
        if optimized_m < original_m {
            log::debug!("annealing shortened tour {original_m:.1} m -> {optimized_m:.1} m");
            *stops = working;
            Ok(TourDistances { original_m, optimized_m })
        } else {
            log::debug!("annealing found no improvement over {original_m:.1} m");
            Ok(TourDistances { original_m, optimized_m: original_m })
        }
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// True road distance of the tour: one routing query per leg, including the
/// return to the depot.  Zero stops is the empty tour at the depot.
fn road_distance(
    map: &dyn SegmentSource,
    router: &dyn Router,
    depot: &GeoCoord,
    stops: &[DeliveryStop],
) -> RouteResult<f64> {
    let mut total_m = 0.0;
    let mut previous = depot;
    for stop in stops {
        total_m += router.route(map, previous, &stop.location)?.total_distance_m;
        previous = &stop.location;
    }
    total_m += router.route(map, previous, depot)?.total_distance_m;
    Ok(total_m)
}

/// Constant-time proxy score: summed great-circle distances along the tour.
fn proxy_distance(depot: &GeoCoord, stops: &[DeliveryStop]) -> f64 {
    let mut total_m = 0.0;
    let mut previous = depot;
    for stop in stops {
        total_m += previous.distance_m(&stop.location);
        previous = &stop.location;
    }
    total_m + previous.distance_m(depot)
}

// ── Metropolis step ───────────────────────────────────────────────────────────

/// Decide whether a non-improving candidate order is kept.
///
/// `candidate >= best`, so the acceptance probability
/// `exp((best − candidate)/temperature)` lies in `(0, 1]`.  The candidate
/// is kept unless that probability is strictly below the uniform draw `u` —
/// in particular a candidate tied with the best score is always kept.
pub(crate) fn keep_worse(best: f64, candidate: f64, temperature: f64, u: f64) -> bool {
    !(f64::exp((best - candidate) / temperature) < u)
}

/// Two distinct uniformly random positions in `0..len`.  Requires `len >= 2`.
fn distinct_pair(len: usize, rng: &mut SearchRng) -> (usize, usize) {
    let mut a = 0usize;
    let mut b = 0usize;
    while a == b {
        a = rng.gen_range(0..len);
        b = rng.gen_range(0..len);
    }
    (a, b)
}
