// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// One of the eight compass octants, each spanning 45° centered on a
/// cardinal or intercardinal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

const DIRECTIONS: [CompassDirection; 8] = [
    CompassDirection::North,
    CompassDirection::Northeast,
    CompassDirection::East,
    CompassDirection::Southeast,
    CompassDirection::South,
    CompassDirection::Southwest,
    CompassDirection::West,
    CompassDirection::Northwest,
];

impl CompassDirection {
    /// Lowercase form used inside instruction text
    /// ("Head northeast towards CSE Block").
    pub fn lowercase(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::Northeast => write!(f, "Northeast"),
            Self::East => write!(f, "East"),
            Self::Southeast => write!(f, "Southeast"),
            Self::South => write!(f, "South"),
            Self::Southwest => write!(f, "Southwest"),
            Self::West => write!(f, "West"),
            Self::Northwest => write!(f, "Northwest"),
        }
    }
}

/// Converts a bearing into the nearest compass octant.
///
/// Accepts any finite bearing in degrees; values outside [0, 360) are
/// normalized first.
pub fn compass_direction(bearing: f64) -> CompassDirection {
    let index = (bearing.rem_euclid(360.0) / 45.0).round() as usize % 8;
    DIRECTIONS[index]
}

/// Classifies the change between two successive bearings into a spoken
/// turn instruction.
///
/// The relative turn is the signed bearing difference normalized into a
/// half-circle either way; positive values turn right, negative turn left.
pub fn turn_instruction(previous_bearing: f64, current_bearing: f64) -> &'static str {
    let diff = (current_bearing - previous_bearing + 540.0).rem_euclid(360.0) - 180.0;

    if diff.abs() < 15.0 {
        "Continue straight"
    } else if (15.0..75.0).contains(&diff) {
        "Turn slight right"
    } else if (75.0..105.0).contains(&diff) {
        "Turn right"
    } else if (105.0..165.0).contains(&diff) {
        "Turn sharp right"
    } else if diff.abs() >= 165.0 {
        "Make a U-turn"
    } else if diff > -75.0 && diff <= -15.0 {
        "Turn slight left"
    } else if diff > -105.0 && diff <= -75.0 {
        "Turn left"
    } else if diff > -165.0 && diff <= -105.0 {
        "Turn sharp left"
    } else {
        "Continue straight"
    }
}
