// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Coordinate, Directory, PointOfInterest};

use super::{model::RawNode, Error, Options};

/// Helper object used for storing state related to converting
/// [RawNodes](RawNode) into [Directory] entries.
pub(super) struct DirectoryBuilder<'a> {
    d: &'a mut Directory,
    options: &'a Options<'a>,
    ignore_bbox: bool,
}

impl<'a> DirectoryBuilder<'a> {
    pub(super) fn new(d: &'a mut Directory, options: &'a Options<'a>) -> Self {
        let ignore_bbox =
            options.bbox.iter().all(|&x| x == 0.0) || options.bbox.iter().any(|x| !x.is_finite());

        Self {
            d,
            options,
            ignore_bbox,
        }
    }

    /// Add all nodes from the provided iterator, stopping at the first
    /// parse error.
    pub(super) fn add_nodes<I>(mut self, nodes: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Result<RawNode, quick_xml::Error>>,
    {
        for node in nodes {
            self.add_node(node?);
        }
        Ok(())
    }

    fn add_node(&mut self, n: RawNode) {
        if !self.is_in_bbox(n.lat, n.lon) {
            return;
        }

        let coordinate = match Coordinate::new(n.lat, n.lon) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("skipping node {}: {}", n.id, e);
                return;
            }
        };

        let name = match n.tags.get("name") {
            Some(name) => name.clone(),
            None => {
                log::debug!("skipping unnamed node {}", n.id);
                return;
            }
        };

        let category = match self.options.profile.category(&n.tags) {
            Some(category) => category,
            None => {
                log::debug!(
                    "skipping node {} ({}): no {} category rule matches",
                    n.id,
                    name,
                    self.options.profile.name
                );
                return;
            }
        };

        // A "ref" tag overrides the numeric id, letting extracts carry
        // short stable ids like "cse".
        let id = match n.tags.get("ref").filter(|r| !r.is_empty()) {
            Some(r) => r.clone(),
            None => n.id.to_string(),
        };

        self.d.add_poi(PointOfInterest {
            id,
            name,
            coordinate,
            category,
            description: n.tags.get("description").cloned().unwrap_or_default(),
        });
    }

    fn is_in_bbox(&self, lat: f64, lon: f64) -> bool {
        if self.ignore_bbox {
            return true;
        }
        let [min_lon, min_lat, max_lon, max_lat] = self.options.bbox;
        lat >= min_lat && lat <= max_lat && lon >= min_lon && lon <= max_lon
    }
}
