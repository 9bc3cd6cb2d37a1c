//! Synthetic street grid for the smalltown demo.

use courier_core::GeoCoord;
use courier_street::{StreetMap, StreetMapBuilder};

/// Grid coordinate on a 0.001° lattice (~111 m per step at this latitude).
pub fn at(row: usize, col: usize) -> GeoCoord {
    GeoCoord::from_degrees(30.694 + row as f64 * 0.001, -88.043 + col as f64 * 0.001)
}

/// A 4×4 downtown grid: numbered streets run east-west, numbered avenues
/// run north-south, all two-way.
pub fn build_network() -> StreetMap {
    let mut b = StreetMapBuilder::new();
    for row in 0..4 {
        for col in 0..3 {
            b.add_street(&format!("{} Street", ordinal(row + 1)), at(row, col), at(row, col + 1));
        }
    }
    for col in 0..4 {
        for row in 0..3 {
            b.add_street(&format!("{} Avenue", ordinal(col + 1)), at(row, col), at(row + 1, col));
        }
    }
    b.build()
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "1st".to_owned(),
        2 => "2nd".to_owned(),
        3 => "3rd".to_owned(),
        n => format!("{n}th"),
    }
}
