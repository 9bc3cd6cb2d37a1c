//! Delivery plan generation: optimize the stop order, route each leg, fold
//! the segments into driver commands.

use courier_core::{GeoCoord, SearchRng};
use courier_route::{AStarRouter, DeliveryStop, Router, TourOptimizer};
use courier_street::{SegmentSource, StreetSegment};

use crate::command::DeliveryCommand;
use crate::direction::{bearing_deg, turn_angle_deg, CompassDirection, TurnDirection};
use crate::error::PlanResult;

/// A complete delivery run: the command list and the road distance driven.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    pub commands: Vec<DeliveryCommand>,
    pub total_distance_m: f64,
}

/// Plans a delivery run over a street network.
///
/// Generic over the routing engine; [`DeliveryPlanner::new`] wires up the
/// default [`AStarRouter`].
pub struct DeliveryPlanner<R: Router = AStarRouter> {
    router: R,
    optimizer: TourOptimizer,
}

impl DeliveryPlanner<AStarRouter> {
    pub fn new() -> Self {
        Self::with_router(AStarRouter)
    }
}

impl Default for DeliveryPlanner<AStarRouter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> DeliveryPlanner<R> {
    pub fn with_router(router: R) -> Self {
        Self { router, optimizer: TourOptimizer::new() }
    }

    /// Produce a turn-by-turn plan visiting every stop and returning to the
    /// depot.
    ///
    /// The caller's slice is never reordered; the optimizer works on a
    /// copy.  An empty stop list yields an empty plan.
    ///
    /// # Errors
    ///
    /// [`PlanError::Route`](crate::PlanError) when the depot or a stop is
    /// off the network, or the network disconnects a leg.
    pub fn plan(
        &self,
        map: &dyn SegmentSource,
        depot: &GeoCoord,
        stops: &[DeliveryStop],
        rng: &mut SearchRng,
    ) -> PlanResult<DeliveryPlan> {
        let mut ordered = stops.to_vec();
        self.optimizer.optimize(map, &self.router, depot, &mut ordered, rng)?;

        let mut commands = Vec::new();
        let mut total_distance_m = 0.0;
        let mut previous = depot;

        for stop in &ordered {
            let route = self.router.route(map, previous, &stop.location)?;
            total_distance_m += route.total_distance_m;
            append_leg(&mut commands, &route.segments);
            commands.push(DeliveryCommand::Deliver { label: stop.label.clone() });
            previous = &stop.location;
        }

        // Return to the depot: commands only, nothing to deliver.
        let route = self.router.route(map, previous, depot)?;
        total_distance_m += route.total_distance_m;
        append_leg(&mut commands, &route.segments);

        Ok(DeliveryPlan { commands, total_distance_m })
    }
}

/// Fold one leg's segments into proceed/turn commands.
///
/// The first segment always proceeds.  A segment continuing the same street
/// extends the previous proceed's distance; a street change turns left or
/// right unless the heading is within 1° of straight, which proceeds
/// without announcing a turn.
fn append_leg(commands: &mut Vec<DeliveryCommand>, segments: &[StreetSegment]) {
    let mut previous: Option<&StreetSegment> = None;
    for seg in segments {
        match previous {
            None => commands.push(proceed(seg)),
            Some(prev) if prev.name == seg.name => {
                if let Some(DeliveryCommand::Proceed { distance_m, .. }) = commands.last_mut() {
                    *distance_m += seg.length_m();
                }
            }
            Some(prev) => {
                let angle = turn_angle_deg(prev, seg);
                if angle < 1.0 || angle > 359.0 {
                    commands.push(proceed(seg));
                } else {
                    commands.push(DeliveryCommand::Turn {
                        direction: TurnDirection::from_angle(angle),
                        street: seg.name.clone(),
                    });
                    commands.push(proceed(seg));
                }
            }
        }
        previous = Some(seg);
    }
}

fn proceed(seg: &StreetSegment) -> DeliveryCommand {
    DeliveryCommand::Proceed {
        direction: CompassDirection::from_bearing(bearing_deg(seg)),
        street: seg.name.clone(),
        distance_m: seg.length_m(),
    }
}
