//! Driver-facing delivery commands.

use std::fmt;

use crate::direction::{CompassDirection, TurnDirection};

/// One instruction of a delivery plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryCommand {
    /// Drive along one street.  Consecutive segments of the same street are
    /// folded into a single command with their summed distance.
    Proceed {
        direction: CompassDirection,
        street: String,
        distance_m: f64,
    },
    /// Turn onto a different street.
    Turn {
        direction: TurnDirection,
        street: String,
    },
    /// Hand over the labelled package at the current coordinate.
    Deliver { label: String },
}

impl fmt::Display for DeliveryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed { direction, street, distance_m } => {
                write!(f, "Proceed {direction} on {street} for {distance_m:.0} m")
            }
            Self::Turn { direction, street } => {
                write!(f, "Turn {direction} on {street}")
            }
            Self::Deliver { label } => write!(f, "Deliver {label}"),
        }
    }
}
