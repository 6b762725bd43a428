// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{geo, Coordinate, Directory};

/// KDTree implements the [k-d tree data structure](https://en.wikipedia.org/wiki/K-d_tree),
/// which can be used to speed up nearest-landmark search for large directories.
/// Regenerating a route on every location fix re-runs
/// [crate::Directory::find_nearest_poi] for each intermediate waypoint; a k-d
/// tree can help with that, trading memory usage for CPU time.
///
/// The tree addresses the originating [Directory] by entry index and must be
/// rebuilt whenever the directory changes.
///
/// This implementation assumes euclidean geometry, even though the distance
/// function used is the haversine formula. This results in undefined behavior
/// when points are close to the ante meridian (180°/-180° longitude) or poles
/// (90°/-90° latitude), or when the data spans multiple continents.
#[derive(Debug, Clone)]
pub struct KDTree {
    pivot: Entry,
    left: Option<Box<KDTree>>,
    right: Option<Box<KDTree>>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    position: Coordinate,
    index: usize,
}

impl KDTree {
    /// Builds a k-d tree over all entries of the provided [Directory].
    /// Returns [None] for an empty directory.
    pub fn build(directory: &Directory) -> Option<Self> {
        let mut entries = directory
            .iter()
            .enumerate()
            .map(|(index, poi)| Entry {
                position: poi.coordinate,
                index,
            })
            .collect::<Vec<_>>();
        Self::build_impl(entries.as_mut_slice(), false)
    }

    /// Finds the directory index of the closest point of interest to the
    /// given position.
    pub fn find_nearest(&self, position: Coordinate) -> usize {
        self.find_nearest_impl(position, false).0.index
    }

    fn find_nearest_impl(&self, position: Coordinate, lon_divides: bool) -> (Entry, f64) {
        // Start by assuming that pivot is the closest
        let mut best = self.pivot;
        let mut best_dist = geo::haversine(position, best.position);

        // Select which branch to recurse into first
        let first_left = if lon_divides {
            position.longitude < best.position.longitude
        } else {
            position.latitude < best.position.latitude
        };
        let (first, second) = if first_left {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };

        // Recurse into the first branch
        if let Some(ref branch) = first {
            let (alt, alt_dist) = branch.find_nearest_impl(position, !lon_divides);
            if alt_dist < best_dist {
                best = alt;
                best_dist = alt_dist;
            }
        }

        // (Optionally) recurse into the second branch
        if let Some(ref branch) = second {
            // A closer entry is possible in the second branch if and only if
            // the splitting axis is closer than the current best candidate.
            let axis = if lon_divides {
                Coordinate {
                    latitude: position.latitude,
                    longitude: self.pivot.position.longitude,
                }
            } else {
                Coordinate {
                    latitude: self.pivot.position.latitude,
                    longitude: position.longitude,
                }
            };
            let dist_to_axis = geo::haversine(position, axis);

            if dist_to_axis < best_dist {
                let (alt, alt_dist) = branch.find_nearest_impl(position, !lon_divides);
                if alt_dist < best_dist {
                    best = alt;
                    best_dist = alt_dist;
                }
            }
        }

        return (best, best_dist);
    }

    fn build_impl(entries: &mut [Entry], lon_divides: bool) -> Option<Self> {
        match entries.len() {
            0 => None,
            1 => Some(Self {
                pivot: entries[0],
                left: None,
                right: None,
            }),
            _ => {
                if lon_divides {
                    entries.sort_by(|a, b| {
                        a.position.longitude.partial_cmp(&b.position.longitude).unwrap()
                    });
                } else {
                    entries.sort_by(|a, b| {
                        a.position.latitude.partial_cmp(&b.position.latitude).unwrap()
                    });
                }
                let median = entries.len() / 2;
                let pivot = entries[median];
                let (left, right_and_pivot) = entries.split_at_mut(median);
                let right = &mut right_and_pivot[1..];
                Some(Self {
                    pivot,
                    left: box_option(Self::build_impl(left, !lon_divides)),
                    right: box_option(Self::build_impl(right, !lon_divides)),
                })
            }
        }
    }
}

#[inline]
fn box_option<T>(o: Option<T>) -> Option<Box<T>> {
    o.map(|thing| Box::new(thing))
}
