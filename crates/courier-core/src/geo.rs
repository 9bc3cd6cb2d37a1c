//! Geographic coordinate type and great-circle distance.
//!
//! # Coordinate identity
//!
//! `GeoCoord` keeps the **textual** latitude/longitude exactly as supplied
//! at construction, alongside the parsed `f64` values.  Equality and hashing
//! are defined over the text alone: two coordinates are the same map entity
//! only if their original representations match character for character.
//! Street data keys every index lookup on this identity, so a re-formatted
//! `51.5` must never collide with a loaded `51.5000000`.
//!
//! The texts are held as `Arc<str>`, making clones two reference-count bumps
//! plus two `f64` copies — cheap enough to move coordinates through search
//! frontiers and map keys freely.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};

/// A WGS-84 coordinate whose identity is its original textual representation.
#[derive(Clone, Debug)]
pub struct GeoCoord {
    lat: f64,
    lon: f64,
    lat_text: Arc<str>,
    lon_text: Arc<str>,
}

impl GeoCoord {
    /// Construct from the textual latitude/longitude, e.g. as read from a
    /// street-map file.  The texts are retained verbatim as the coordinate's
    /// identity.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidCoordinate`] if either component does not parse
    /// as a decimal number.
    pub fn new(lat_text: &str, lon_text: &str) -> CoreResult<Self> {
        let lat: f64 = lat_text
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidCoordinate(lat_text.to_owned()))?;
        let lon: f64 = lon_text
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidCoordinate(lon_text.to_owned()))?;
        Ok(Self {
            lat,
            lon,
            lat_text: Arc::from(lat_text.trim()),
            lon_text: Arc::from(lon_text.trim()),
        })
    }

    /// Construct from numeric degrees, formatting to fixed 7-decimal text
    /// (the precision of typical street data).  Intended for synthetic
    /// networks and tests; loaded data should go through [`GeoCoord::new`]
    /// so file text is preserved exactly.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            lat_text: Arc::from(format!("{lat:.7}").as_str()),
            lon_text: Arc::from(format!("{lon:.7}").as_str()),
        }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The exact latitude text supplied at construction.
    pub fn lat_text(&self) -> &str {
        &self.lat_text
    }

    /// The exact longitude text supplied at construction.
    pub fn lon_text(&self) -> &str {
        &self.lon_text
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Non-negative and symmetric, so it doubles as an admissible A*
    /// heuristic: no road path between two points is ever shorter than
    /// their great-circle separation.
    pub fn distance_m(&self, other: &GeoCoord) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

// Identity is the textual representation, never the parsed floats.
impl PartialEq for GeoCoord {
    fn eq(&self, other: &Self) -> bool {
        self.lat_text == other.lat_text && self.lon_text == other.lon_text
    }
}

impl Eq for GeoCoord {}

impl Hash for GeoCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat_text.hash(state);
        self.lon_text.hash(state);
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat_text, self.lon_text)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    //! `GeoCoord` round-trips through its textual representation so that
    //! identity survives serialization.

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::GeoCoord;

    #[derive(Serialize)]
    struct CoordTextRef<'a> {
        lat: &'a str,
        lon: &'a str,
    }

    #[derive(Deserialize)]
    struct CoordText {
        lat: String,
        lon: String,
    }

    impl Serialize for GeoCoord {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            CoordTextRef { lat: self.lat_text(), lon: self.lon_text() }.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for GeoCoord {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = CoordText::deserialize(deserializer)?;
            GeoCoord::new(&text.lat, &text.lon).map_err(D::Error::custom)
        }
    }
}
