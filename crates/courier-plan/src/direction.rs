//! Bearings, compass buckets, and turn classification.

use std::fmt;

use courier_street::StreetSegment;

/// Bearing of a segment in degrees, measured counter-clockwise from due
/// east and normalized to `[0, 360)`.
pub fn bearing_deg(seg: &StreetSegment) -> f64 {
    let angle = (seg.end.lat() - seg.start.lat())
        .atan2(seg.end.lon() - seg.start.lon())
        .to_degrees();
    if angle >= 0.0 { angle } else { angle + 360.0 }
}

/// Angle swept turning off `first` onto `second`, normalized to `[0, 360)`.
pub fn turn_angle_deg(first: &StreetSegment, second: &StreetSegment) -> f64 {
    let diff = bearing_deg(second) - bearing_deg(first);
    if diff < 0.0 { diff + 360.0 } else { diff }
}

/// Eight-way compass direction for proceed instructions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl CompassDirection {
    /// Bucket a bearing into a compass direction.  East owns both ends of
    /// the circle: `[0, 22.5]` and `[337.5, 360)`.
    pub fn from_bearing(deg: f64) -> Self {
        match deg {
            d if (0.0..=22.5).contains(&d) => Self::East,
            d if d < 67.5 => Self::Northeast,
            d if d < 112.5 => Self::North,
            d if d < 157.5 => Self::Northwest,
            d if d < 202.5 => Self::West,
            d if d < 247.5 => Self::Southwest,
            d if d < 292.5 => Self::South,
            d if d < 337.5 => Self::Southeast,
            _ => Self::East,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::Northeast => "northeast",
            Self::North => "north",
            Self::Northwest => "northwest",
            Self::West => "west",
            Self::Southwest => "southwest",
            Self::South => "south",
            Self::Southeast => "southeast",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way to turn at a street change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// A turn angle below 180° sweeps left, above sweeps right.  Callers
    /// treat angles within 1° of straight ahead as no turn at all.
    pub fn from_angle(deg: f64) -> Self {
        if deg < 180.0 { Self::Left } else { Self::Right }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
