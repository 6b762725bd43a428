// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{compass_direction, geo, Coordinate, Directory, InvalidCoordinate, PointOfInterest};

use super::{Maneuver, RouteStep};

/// Assumed walking speed, in meters per second.
pub const WALKING_SPEED: f64 = 1.4;

/// Target spacing of synthesized waypoints, in meters of straight-line
/// distance.
const WAYPOINT_SPACING: f64 = 100.0;

/// An instruction refers to a point of interest by name only when the
/// waypoint lies strictly closer than this many meters to it.
const LANDMARK_RADIUS: f64 = 50.0;

/// Generates a walking route from `origin` to a destination point of
/// interest, as an ordered sequence of [RouteSteps](RouteStep).
///
/// Waypoints are synthesized along the straight line between the endpoints,
/// roughly one per 100 m and always at least two, so every route has at
/// least 3 steps. The first step is always a [Maneuver::Depart] with zero
/// distance, the last a [Maneuver::Arrive]. An intermediate step refers to
/// the nearest directory entry when it lies within 50 m of the waypoint
/// ("Continue past Arunai Temple"), and to the compass heading otherwise.
///
/// Interpolation is linear in degree space, which is accurate at campus
/// scale; no path network is consulted. An origin equal to the destination
/// yields a degenerate route of zero-length steps, which is not an error.
pub fn generate_route(
    origin: Coordinate,
    destination: &PointOfInterest,
    directory: &Directory,
) -> Result<Vec<RouteStep>, InvalidCoordinate> {
    origin.validate()?;
    destination.coordinate.validate()?;

    let total_distance = geo::haversine(origin, destination.coordinate);

    // The heading does not change along a straight interpolated line,
    // so it is computed once for the whole route.
    let direction = compass_direction(geo::bearing(origin, destination.coordinate));

    let waypoint_count = ((total_distance / WAYPOINT_SPACING).floor() as usize).max(2);

    let mut steps = Vec::with_capacity(waypoint_count + 1);
    let mut previous = origin;

    for i in 0..=waypoint_count {
        let progress = i as f64 / waypoint_count as f64;
        let position = Coordinate {
            latitude: origin.latitude + (destination.coordinate.latitude - origin.latitude) * progress,
            longitude: origin.longitude
                + (destination.coordinate.longitude - origin.longitude) * progress,
        };

        let (instruction, maneuver) = if i == 0 {
            (
                format!(
                    "Head {} towards {}",
                    direction.lowercase(),
                    destination.name
                ),
                Maneuver::Depart,
            )
        } else if i == waypoint_count {
            (format!("Arrive at {}", destination.name), Maneuver::Arrive)
        } else {
            match directory.find_nearest_poi(position) {
                Some(landmark)
                    if geo::haversine(position, landmark.coordinate) < LANDMARK_RADIUS =>
                {
                    (
                        format!("Continue past {}", landmark.name),
                        Maneuver::ContinuePastLandmark,
                    )
                }
                _ => (
                    format!("Continue {}", direction.lowercase()),
                    Maneuver::ContinueStraight,
                ),
            }
        };

        let distance = if i == 0 {
            0.0
        } else {
            geo::haversine(previous, position)
        };

        steps.push(RouteStep {
            instruction,
            maneuver,
            distance,
            duration: distance / WALKING_SPEED,
            position,
        });
        previous = position;
    }

    return Ok(steps);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr, $eps:expr) => {
            assert!(
                (($a - $b).abs() < $eps),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    fn poi(id: &str, name: &str, latitude: f64, longitude: f64) -> PointOfInterest {
        PointOfInterest {
            id: id.to_string(),
            name: name.to_string(),
            coordinate: Coordinate {
                latitude,
                longitude,
            },
            category: Category::Facility,
            description: String::new(),
        }
    }

    #[test]
    fn step_count_and_endpoint_maneuvers() {
        // 556 m due east: 5 waypoint segments, 6 steps.
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let destination = poi("lib", "Library", 0.0, 0.005);
        let route = generate_route(origin, &destination, &Directory::default()).unwrap();

        assert_eq!(route.len(), 6);
        assert_eq!(route[0].maneuver, Maneuver::Depart);
        assert_eq!(route[0].instruction, "Head east towards Library");
        assert_eq!(route[0].distance, 0.0);
        assert_eq!(route[5].maneuver, Maneuver::Arrive);
        assert_eq!(route[5].instruction, "Arrive at Library");

        for step in &route[1..5] {
            assert_eq!(step.maneuver, Maneuver::ContinueStraight);
            assert_eq!(step.instruction, "Continue east");
            assert_almost_eq!(step.distance, 111.195, 0.001);
            assert_almost_eq!(step.duration, step.distance / WALKING_SPEED, 1e-9);
        }

        let total: f64 = route.iter().map(|s| s.distance).sum();
        assert_almost_eq!(total, 555.975, 0.001);
    }

    #[test]
    fn short_routes_get_two_waypoints() {
        // 51 m is well under the 100 m spacing, yet the route still has
        // depart, one intermediate step and arrive.
        let origin = Coordinate {
            latitude: 12.19280,
            longitude: 79.08370,
        };
        let destination = poi("cse", "CSE Block", 12.192838, 79.083230);
        let route = generate_route(origin, &destination, &Directory::default()).unwrap();
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn landmark_radius_is_exclusive() {
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };
        let destination = poi("lib", "Library", 0.0, 0.005);

        // 49.5 m north of the waypoint at longitude 0.002.
        let mut directory = Directory::default();
        directory.add_poi(poi("tower", "Water Tower", 0.00044516419492977166, 0.002));
        let route = generate_route(origin, &destination, &directory).unwrap();
        assert_eq!(route[2].maneuver, Maneuver::ContinuePastLandmark);
        assert_eq!(route[2].instruction, "Continue past Water Tower");
        assert_eq!(route[1].maneuver, Maneuver::ContinueStraight);
        assert_eq!(route[3].maneuver, Maneuver::ContinueStraight);

        // 50.5 m away: no longer a landmark.
        let mut directory = Directory::default();
        directory.add_poi(poi("tower", "Water Tower", 0.00045415741098895897, 0.002));
        let route = generate_route(origin, &destination, &directory).unwrap();
        assert_eq!(route[2].maneuver, Maneuver::ContinueStraight);
        assert_eq!(route[2].instruction, "Continue east");
    }

    #[test]
    fn campus_scenario() {
        let origin = Coordinate {
            latitude: 12.19280,
            longitude: 79.08370,
        };
        let destination = poi("cse", "CSE Block", 12.192838, 79.083230);

        let mut directory = Directory::default();
        directory.add_poi(poi("gate", "Main Gate", 12.193100, 79.084515));
        directory.add_poi(destination.clone());
        directory.add_poi(poi("eee", "EEE Block", 12.193138, 79.083092));
        directory.add_poi(poi("center", "Arunai Center", 12.192708, 79.083666));
        directory.add_poi(poi("acaudi", "AC Auditorium", 12.192382, 79.083698));

        let route = generate_route(origin, &destination, &directory).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route[0].instruction, "Head west towards CSE Block");
        assert_eq!(route[0].distance, 0.0);

        // The Arunai Center sits ~25 m from the route's midpoint, closer
        // even than the destination itself.
        assert_eq!(route[1].maneuver, Maneuver::ContinuePastLandmark);
        assert_eq!(route[1].instruction, "Continue past Arunai Center");

        assert_eq!(route[2].instruction, "Arrive at CSE Block");

        let total: f64 = route.iter().map(|s| s.distance).sum();
        assert_almost_eq!(total, 51.257, 0.01);
    }

    #[test]
    fn degenerate_route_when_origin_is_destination() {
        let destination = poi("cse", "CSE Block", 12.192838, 79.083230);
        let route =
            generate_route(destination.coordinate, &destination, &Directory::default()).unwrap();

        assert_eq!(route.len(), 3);
        assert_eq!(route[0].maneuver, Maneuver::Depart);
        assert_eq!(route[2].maneuver, Maneuver::Arrive);
        assert!(route.iter().all(|s| s.distance == 0.0));
    }

    #[test]
    fn rejects_invalid_origin() {
        let destination = poi("cse", "CSE Block", 12.192838, 79.083230);
        let origin = Coordinate {
            latitude: f64::NAN,
            longitude: 0.0,
        };
        assert!(generate_route(origin, &destination, &Directory::default()).is_err());
    }

    #[test]
    fn rejects_invalid_destination() {
        let destination = poi("off", "Off the map", 12.192838, 200.0);
        let origin = Coordinate {
            latitude: 12.1928,
            longitude: 79.0837,
        };
        assert!(generate_route(origin, &destination, &Directory::default()).is_err());
    }
}
