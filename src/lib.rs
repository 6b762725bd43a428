// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Campus navigation with landmark-aware route guidance.
//!
//! Given a current position and a destination [PointOfInterest], campusnav
//! synthesizes a walking route of interpolated waypoints with human-readable
//! instructions ("Head west towards CSE Block", "Continue past Arunai Temple",
//! "Arrive at CSE Block"), and tracks progress through it with a
//! [NavigationSession]. The directory of known points of interest can be
//! loaded from an [OpenStreetMap](https://www.openstreetmap.org/) extract
//! of the campus.
//!
//! # Example
//!
//! ```no_run
//! let mut directory = campusnav::Directory::default();
//! let options = campusnav::osm::Options {
//!     profile: &campusnav::osm::CAMPUS_PROFILE,
//!     file_format: campusnav::osm::FileFormat::Xml,
//!     bbox: [0.0; 4],
//! };
//! campusnav::osm::add_pois_from_file(&mut directory, &options, "path/to/campus.osm")
//!     .expect("failed to load campus.osm");
//!
//! let origin = campusnav::Coordinate::new(12.19280, 79.08370).unwrap();
//! let destination = directory
//!     .get_poi("cse")
//!     .expect("no such point of interest")
//!     .clone();
//! let route = campusnav::generate_route(origin, &destination, &directory)
//!     .expect("failed to generate route");
//!
//! let mut session = campusnav::NavigationSession::new();
//! session.start(destination, route);
//! println!("{}", session.current_step().unwrap().instruction);
//! ```

mod compass;
mod directory;
mod geo;
mod kd;
pub mod osm;
mod route;
mod session;

pub use compass::{compass_direction, turn_instruction, CompassDirection};
pub use directory::Directory;
pub use geo::{distance, initial_bearing, InvalidCoordinate};
pub use kd::KDTree;
pub use route::{generate_route, Maneuver, RouteStep, WALKING_SPEED};
pub use session::{NavigationSession, SessionStatus};

/// A position on Earth, in degrees.
///
/// Latitude must be within [-90, 90], longitude within [-180, 180], and both
/// components must be finite. The fields themselves are unchecked; the
/// crate's entry points validate their inputs, and [Coordinate::new] can be
/// used to validate eagerly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a [Coordinate], checking that the provided pair is a valid
    /// geographic position.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let c = Self {
            latitude,
            longitude,
        };
        c.validate()?;
        Ok(c)
    }

    /// Checks that both components are finite and within geographic range.
    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        if self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
        {
            Ok(())
        } else {
            Err(InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Category of a [PointOfInterest].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Academic,
    Hostel,
    Facility,
    Administrative,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Academic => write!(f, "academic"),
            Self::Hostel => write!(f, "hostel"),
            Self::Facility => write!(f, "facility"),
            Self::Administrative => write!(f, "administrative"),
        }
    }
}

/// A named place in the campus [Directory].
///
/// `id` must be unique within a directory. Points of interest double as
/// landmarks: route instructions refer to nearby entries by name.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub category: Category,
    pub description: String,
}
