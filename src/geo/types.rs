//! Geographic type definitions.

use std::collections::BTreeMap;

/// A geographic position in decimal degrees.
///
/// Note the field order: latitude first, matching how map centers are
/// written, while the GeoJSON wire format carries `[longitude, latitude]`.
/// The decoder in [`super::parse`] does that swap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    /// Latitude (north-south), positive northwards.
    pub lat: f64,
    /// Longitude (east-west), positive eastwards.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new position.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Properties attached to a monitoring-site feature.
///
/// The site service delivers string values only (site identifier, site type,
/// data-source name, and so on).
pub type SiteProperties = BTreeMap<String, String>;

/// A single monitoring site: a point position plus its properties.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    position: LatLng,
    properties: SiteProperties,
}

impl Feature {
    /// Creates a feature from a position and its properties.
    pub fn new(position: LatLng, properties: SiteProperties) -> Self {
        Self {
            position,
            properties,
        }
    }

    /// The feature's point position.
    pub fn position(&self) -> LatLng {
        self.position
    }

    /// All properties of this feature.
    pub fn properties(&self) -> &SiteProperties {
        &self.properties
    }

    /// Looks up a single property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// An ordered collection of monitoring-site features.
///
/// Order matches the service response; consumers rely on it when adding
/// markers to a layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection from already-decoded features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// The features in response order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the collection holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
