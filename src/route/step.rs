// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Coordinate;

/// Category of the instruction associated with a [RouteStep].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    /// First step of a route: set off from the origin.
    Depart,

    /// Keep walking in the current compass direction.
    ContinueStraight,

    /// Keep walking, passing a recognizable point of interest.
    ContinuePastLandmark,

    /// Final step of a route: the destination is reached.
    Arrive,
}

impl std::fmt::Display for Maneuver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Depart => write!(f, "depart"),
            Self::ContinueStraight => write!(f, "straight"),
            Self::ContinuePastLandmark => write!(f, "landmark"),
            Self::Arrive => write!(f, "arrive"),
        }
    }
}

/// One waypoint transition of a generated route.
///
/// `position` is the waypoint's own location, the end of the segment this
/// step describes; `distance` and `duration` cover the segment leading into
/// it, which is why both are zero on the depart step.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    /// Human-readable guidance. Opaque to the engine; suitable for display
    /// or speech output.
    pub instruction: String,

    pub maneuver: Maneuver,

    /// Length of the segment leading into this waypoint, in meters.
    pub distance: f64,

    /// Walking time for the segment, in seconds.
    pub duration: f64,

    /// The waypoint itself. Consecutive positions form the route polyline.
    pub position: Coordinate,
}
