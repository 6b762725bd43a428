// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{geo, Coordinate, PointOfInterest};

/// Holds the campus' known [PointsOfInterest](PointOfInterest) in their
/// externally supplied order.
///
/// A directory is assembled once (for example from an OSM extract via
/// [add_pois_from_file](crate::osm::add_pois_from_file)) and then only read:
/// the route generator treats every entry as a potential landmark.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Directory(Vec<PointOfInterest>);

impl Directory {
    /// Returns the number of points of interest in the directory.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all points of interest, in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.0.iter()
    }

    /// Retrieves the point of interest with the provided id.
    pub fn get_poi(&self, id: &str) -> Option<&PointOfInterest> {
        self.0.iter().find(|poi| poi.id == id)
    }

    /// Retrieves the first point of interest whose name matches,
    /// ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&PointOfInterest> {
        self.0.iter().find(|poi| poi.name.eq_ignore_ascii_case(name))
    }

    /// Creates or updates a point of interest with `poi.id`.
    ///
    /// Replacing an entry keeps its position in the directory order.
    pub fn add_poi(&mut self, poi: PointOfInterest) {
        assert!(!poi.id.is_empty());

        if let Some(existing) = self.0.iter_mut().find(|p| p.id == poi.id) {
            *existing = poi;
        } else {
            self.0.push(poi);
        }
    }

    /// Finds the closest point of interest to the given position.
    ///
    /// This function requires computing the distance to every entry. For
    /// repeated lookups over a large directory, build a [KDTree](crate::KDTree)
    /// instead.
    pub fn find_nearest_poi(&self, position: Coordinate) -> Option<&PointOfInterest> {
        self.0
            .iter()
            .map(|poi| (geo::haversine(position, poi.coordinate), poi))
            .min_by(|(a_dist, _), (b_dist, _)| a_dist.partial_cmp(b_dist).unwrap())
            .map(|(_, poi)| poi)
    }

    /// Returns all points of interest within `radius_meters` of `center`
    /// (boundary inclusive), in directory order.
    pub fn pois_in_radius(&self, center: Coordinate, radius_meters: f64) -> Vec<&PointOfInterest> {
        self.0
            .iter()
            .filter(|poi| geo::haversine(center, poi.coordinate) <= radius_meters)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

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

    fn campus_corner() -> Directory {
        let mut d = Directory::default();
        d.add_poi(poi("gate", "Main Gate", 12.193100, 79.084515));
        d.add_poi(poi("cse", "CSE Block", 12.192838, 79.083230));
        d.add_poi(poi("eee", "EEE Block", 12.193138, 79.083092));
        d.add_poi(poi("center", "Arunai Center", 12.192708, 79.083666));
        d
    }

    #[test]
    fn get_and_lookup_by_name() {
        let d = campus_corner();
        assert_eq!(d.len(), 4);
        assert_eq!(d.get_poi("cse").unwrap().name, "CSE Block");
        assert!(d.get_poi("unknown").is_none());
        assert_eq!(d.find_by_name("cse block").unwrap().id, "cse");
        assert!(d.find_by_name("Physics Block").is_none());
    }

    #[test]
    fn add_poi_upserts_in_place() {
        let mut d = campus_corner();
        d.add_poi(poi("cse", "CSE Block (renovated)", 12.192838, 79.083230));
        assert_eq!(d.len(), 4);
        // Order is preserved: "cse" is still the second entry.
        assert_eq!(d.iter().nth(1).unwrap().name, "CSE Block (renovated)");
    }

    #[test]
    #[should_panic]
    fn add_poi_rejects_empty_id() {
        let mut d = Directory::default();
        d.add_poi(poi("", "Nameless", 0.0, 0.0));
    }

    #[test]
    fn nearest_poi() {
        let d = campus_corner();
        let near_gate = Coordinate {
            latitude: 12.193000,
            longitude: 79.084400,
        };
        assert_eq!(d.find_nearest_poi(near_gate).unwrap().id, "gate");
        assert!(Directory::default().find_nearest_poi(near_gate).is_none());
    }

    #[test]
    fn pois_in_radius_boundary_inclusive() {
        let d = campus_corner();
        let cse = d.get_poi("cse").unwrap().coordinate;
        let within = d.pois_in_radius(cse, 45.0);
        // CSE itself (0 m) and the EEE Block (~37 m) are inside; the Arunai
        // Center (~50 m) and the gate (~143 m) are not.
        assert_eq!(
            within.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["cse", "eee"]
        );
        assert!(d.pois_in_radius(cse, 0.0).len() == 1);
    }
}
