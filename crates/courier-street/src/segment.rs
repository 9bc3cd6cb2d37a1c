//! Directed street segment and the adjacency capability routers consume.

use courier_core::GeoCoord;

/// One directed stretch of road between two coordinates.
///
/// A two-way street is represented as two segments, one per direction, each
/// discoverable from its own `start`.  Segments are immutable once built and
/// owned by the [`StreetMap`](crate::StreetMap) that indexed them; routing
/// code receives clones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetSegment {
    pub start: GeoCoord,
    pub end: GeoCoord,
    pub name: String,
}

impl StreetSegment {
    pub fn new(start: GeoCoord, end: GeoCoord, name: impl Into<String>) -> Self {
        Self { start, end, name: name.into() }
    }

    /// Great-circle length of the segment in metres.
    #[inline]
    pub fn length_m(&self) -> f64 {
        self.start.distance_m(&self.end)
    }

    /// The same stretch of road travelled the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            name: self.name.clone(),
        }
    }
}

/// Adjacency lookup over previously loaded street data.
///
/// A pure, side-effect-free query: `Some(segments)` lists every directed
/// segment leaving `coord` (possibly empty for a coordinate that only
/// receives traffic), `None` means the coordinate is unknown to the network
/// altogether.  Object-safe so routers can hold `&dyn SegmentSource`.
pub trait SegmentSource {
    fn segments_from(&self, coord: &GeoCoord) -> Option<&[StreetSegment]>;
}
