// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Coordinate;

/// Mean radius of Earth, in meters.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Mean diameter of Earth, in meters.
const EARTH_DIAMETER: f64 = EARTH_RADIUS + EARTH_RADIUS;

/// Error condition for a latitude/longitude pair which is not finite or
/// lies outside the valid geographic range (latitude beyond ±90°,
/// longitude beyond ±180°).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid coordinate: ({}, {})",
            self.latitude, self.longitude
        )
    }
}

impl std::error::Error for InvalidCoordinate {}

/// Calculates the great-circle distance between two positions on Earth
/// using the `haversine formula <https://en.wikipedia.org/wiki/Haversine_formula>`_.
/// Returns the result in meters.
///
/// Both inputs are validated; use [Coordinate::new] to validate earlier.
pub fn distance(a: Coordinate, b: Coordinate) -> Result<f64, InvalidCoordinate> {
    a.validate()?;
    b.validate()?;
    Ok(haversine(a, b))
}

/// Calculates the initial bearing (forward azimuth) from `a` to `b` using
/// the spherical bearing formula. Returns degrees in the half-open range
/// [0, 360), with 0 pointing north.
///
/// Both inputs are validated; use [Coordinate::new] to validate earlier.
pub fn initial_bearing(a: Coordinate, b: Coordinate) -> Result<f64, InvalidCoordinate> {
    a.validate()?;
    b.validate()?;
    Ok(bearing(a, b))
}

/// [distance] without input validation, for callers which have already
/// validated their coordinates.
pub(crate) fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lon1 = a.longitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let lon2 = b.longitude.to_radians();

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    EARTH_DIAMETER * h.sqrt().asin()
}

/// [initial_bearing] without input validation, for callers which have
/// already validated their coordinates.
pub(crate) fn bearing(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}
