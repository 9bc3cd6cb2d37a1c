//! smalltown — smallest end-to-end example for the courier workspace.
//!
//! Plans a three-stop delivery run across a synthetic 4×4 downtown grid,
//! then prints the optimized tour distance and the turn-by-turn commands.

mod network;

use anyhow::Result;

use courier_core::SearchRng;
use courier_plan::DeliveryPlanner;
use courier_route::DeliveryStop;

use network::{at, build_network};

const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let map = build_network();
    println!(
        "network: {} coordinates, {} directed segments",
        map.coord_count(),
        map.segment_count()
    );

    let depot = at(0, 0);
    let stops = vec![
        DeliveryStop::new(at(3, 3), "espresso beans"),
        DeliveryStop::new(at(0, 3), "sourdough loaves"),
        DeliveryStop::new(at(3, 0), "cut flowers"),
    ];

    let mut rng = SearchRng::new(SEED);
    let plan = DeliveryPlanner::new().plan(&map, &depot, &stops, &mut rng)?;

    println!("total distance: {:.0} m", plan.total_distance_m);
    for command in &plan.commands {
        println!("  {command}");
    }

    Ok(())
}
