// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::Category;

/// Describes how to interpret OSM nodes as
/// [PointsOfInterest](crate::PointOfInterest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile<'a> {
    /// Human readable name of the ingestion profile.
    pub name: &'a str,

    /// Array of rules deciding which tagged nodes become points of interest.
    ///
    /// A node's tags are matched against all [CategoryRule] objects in
    /// order; the first exact key and value match decides the node's
    /// [Category]. Nodes matching no rule are not points of interest and
    /// are skipped, as are nodes without a `name` tag.
    pub categories: &'a [CategoryRule<'a>],
}

/// Assigns a [Category] to OSM nodes with a specific key and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRule<'a> {
    /// Key of an OSM node tag for which this rule applies
    /// (e.g. "building" or "amenity").
    pub key: &'a str,

    /// Value under [CategoryRule::key] for which this rule applies.
    /// E.g. "university", "dormitory" or "place_of_worship".
    pub value: &'a str,

    /// Category assigned to matching nodes.
    pub category: Category,
}

impl<'a> Profile<'a> {
    /// Returns the [Category] from the first matching [CategoryRule] for a
    /// node with the given tags, or [None] if no rule matches.
    pub fn category(&self, tags: &HashMap<String, String>) -> Option<Category> {
        self.categories.iter().find_map(|rule| {
            if tags.get(rule.key).map(|v| v.as_str()) == Some(rule.value) {
                Some(rule.category)
            } else {
                None
            }
        })
    }
}

/// Profile for campus extracts: department buildings, hostels,
/// administrative offices and common campus facilities.
///
/// `building=yes` is matched last as a generic facility, so specific
/// tagging always wins.
pub const CAMPUS_PROFILE: Profile = Profile {
    name: "campus",
    categories: &[
        CategoryRule {
            key: "building",
            value: "university",
            category: Category::Academic,
        },
        CategoryRule {
            key: "building",
            value: "college",
            category: Category::Academic,
        },
        CategoryRule {
            key: "building",
            value: "school",
            category: Category::Academic,
        },
        CategoryRule {
            key: "building",
            value: "dormitory",
            category: Category::Hostel,
        },
        CategoryRule {
            key: "building",
            value: "residential",
            category: Category::Hostel,
        },
        CategoryRule {
            key: "office",
            value: "administration",
            category: Category::Administrative,
        },
        CategoryRule {
            key: "office",
            value: "security",
            category: Category::Administrative,
        },
        CategoryRule {
            key: "building",
            value: "office",
            category: Category::Administrative,
        },
        CategoryRule {
            key: "amenity",
            value: "place_of_worship",
            category: Category::Facility,
        },
        CategoryRule {
            key: "amenity",
            value: "restaurant",
            category: Category::Facility,
        },
        CategoryRule {
            key: "amenity",
            value: "parking",
            category: Category::Facility,
        },
        CategoryRule {
            key: "tourism",
            value: "guest_house",
            category: Category::Facility,
        },
        CategoryRule {
            key: "shop",
            value: "convenience",
            category: Category::Facility,
        },
        CategoryRule {
            key: "barrier",
            value: "gate",
            category: Category::Facility,
        },
        CategoryRule {
            key: "building",
            value: "yes",
            category: Category::Facility,
        },
    ],
};
