//! Street network index and builder.
//!
//! # Data layout
//!
//! The network is an [`ExpandableMap`] from coordinate to the `Vec` of
//! directed segments leaving it.  Coordinate identity is textual (see
//! [`GeoCoord`]), so a lookup hits exactly the entry the map file created —
//! no float re-parsing in the hot path.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest known
//! coordinate.  Loaded data is exact-text keyed, so callers holding a
//! free-form GPS position snap it to a network coordinate first.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use courier_core::GeoCoord;
use courier_store::ExpandableMap;

use crate::segment::{SegmentSource, StreetSegment};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: a 2-D `[lat, lon]` point with the
/// network coordinate it represents.
#[derive(Clone)]
struct CoordEntry {
    point: [f64; 2], // [lat, lon]
    coord: GeoCoord,
}

impl RTreeObject for CoordEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CoordEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-coordinate queries within a city (error < 0.1 % at ≤ 60° lat).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── StreetMap ─────────────────────────────────────────────────────────────────

/// Immutable street network: coordinate index plus spatial snap.
///
/// Build with [`StreetMapBuilder`] or load from a map file with
/// [`StreetMap::load_file`](crate::loader) / `load_reader`.
pub struct StreetMap {
    index: ExpandableMap<GeoCoord, Vec<StreetSegment>>,
    spatial_idx: RTree<CoordEntry>,
    segment_count: usize,
}

impl std::fmt::Debug for StreetMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreetMap")
            .field("coord_count", &self.index.len())
            .field("segment_count", &self.segment_count)
            .finish()
    }
}

impl StreetMap {
    /// Number of distinct coordinates known to the network (as segment
    /// start, end, or both).
    pub fn coord_count(&self) -> usize {
        self.index.len()
    }

    /// Number of directed segments.  A two-way street contributes two.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The nearest known network coordinate to a free-form position, or
    /// `None` for an empty network.
    pub fn nearest_coord(&self, lat: f64, lon: f64) -> Option<&GeoCoord> {
        self.spatial_idx
            .nearest_neighbor(&[lat, lon])
            .map(|e| &e.coord)
    }
}

impl SegmentSource for StreetMap {
    fn segments_from(&self, coord: &GeoCoord) -> Option<&[StreetSegment]> {
        self.index.find(coord).map(Vec::as_slice)
    }
}

// ── StreetMapBuilder ──────────────────────────────────────────────────────────

/// Construct a [`StreetMap`] incrementally, then call [`build`](Self::build).
///
/// Segments may be added in any order.  `build()` bulk-loads the R-tree over
/// every registered coordinate.
///
/// # Example
///
/// ```
/// use courier_core::GeoCoord;
/// use courier_street::{SegmentSource, StreetMapBuilder};
///
/// let mut b = StreetMapBuilder::new();
/// let a = GeoCoord::from_degrees(34.0547, -118.4794);
/// let c = GeoCoord::from_degrees(34.0555, -118.4794);
/// b.add_street("Glenmere Way", a.clone(), c);
/// let map = b.build();
/// assert_eq!(map.coord_count(), 2);
/// assert_eq!(map.segment_count(), 2); // two-way
/// assert_eq!(map.segments_from(&a).unwrap().len(), 1);
/// ```
pub struct StreetMapBuilder {
    index: ExpandableMap<GeoCoord, Vec<StreetSegment>>,
    // Registration order of first appearance; feeds the R-tree bulk load.
    coords: Vec<GeoCoord>,
    segment_count: usize,
}

impl StreetMapBuilder {
    pub fn new() -> Self {
        Self {
            index: ExpandableMap::new(),
            coords: Vec::new(),
            segment_count: 0,
        }
    }

    /// Register a **two-way** street between `a` and `b`: one directed
    /// segment in each direction, both under `name`.
    pub fn add_street(&mut self, name: &str, a: GeoCoord, b: GeoCoord) {
        self.add_directed(name, a.clone(), b.clone());
        self.add_directed(name, b, a);
    }

    /// Register a single **directed** segment from `from` to `to`.
    ///
    /// The destination is registered as a known coordinate even when nothing
    /// leaves it, so a routing query naming it fails with "no route" rather
    /// than "unknown coordinate".
    pub fn add_directed(&mut self, name: &str, from: GeoCoord, to: GeoCoord) {
        let segment = StreetSegment::new(from.clone(), to.clone(), name);
        self.register(to);
        match self.index.find_mut(&from) {
            Some(segments) => segments.push(segment),
            None => {
                self.coords.push(from.clone());
                self.index.associate(from, vec![segment]);
            }
        }
        self.segment_count += 1;
    }

    /// Ensure `coord` has an index entry, creating an empty one on first
    /// sight.
    fn register(&mut self, coord: GeoCoord) {
        if self.index.find(&coord).is_none() {
            self.coords.push(coord.clone());
            self.index.associate(coord, Vec::new());
        }
    }

    pub fn coord_count(&self) -> usize {
        self.index.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Consume the builder and produce a [`StreetMap`].
    ///
    /// Time complexity: O(N log N) for the R-tree bulk load over N
    /// registered coordinates.
    pub fn build(self) -> StreetMap {
        let entries: Vec<CoordEntry> = self
            .coords
            .iter()
            .map(|c| CoordEntry { point: [c.lat(), c.lon()], coord: c.clone() })
            .collect();
        StreetMap {
            index: self.index,
            spatial_idx: RTree::bulk_load(entries),
            segment_count: self.segment_count,
        }
    }
}

impl Default for StreetMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
