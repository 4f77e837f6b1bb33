//! Strict GeoJSON decoding for site-service responses.

use super::types::{Feature, FeatureCollection, LatLng, SiteProperties};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors produced while decoding a GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    /// The body is not valid JSON at all
    #[error("malformed JSON: {0}")]
    Json(String),
    /// The top-level `type` tag is not `FeatureCollection`
    #[error("expected a FeatureCollection, found '{0}'")]
    NotACollection(String),
    /// A feature's `type` tag is not `Feature`
    #[error("expected a Feature, found '{0}'")]
    NotAFeature(String),
    /// A geometry other than `Point` was encountered
    #[error("unsupported geometry type '{0}', only Point is handled")]
    UnsupportedGeometry(String),
    /// A point geometry with fewer than two coordinate values
    #[error("point coordinates need longitude and latitude, got {0} value(s)")]
    ShortCoordinates(usize),
    /// A property whose value is not a JSON string
    #[error("property '{0}' is not a string value")]
    NonStringProperty(String),
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(rename = "type")]
    kind: String,
    geometry: RawGeometry,
    /// A missing or null properties member means no properties.
    #[serde(default)]
    properties: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<f64>,
}

/// Decodes `text` as a GeoJSON FeatureCollection of point features.
///
/// The decoder is strict: the `type` tags must match, every geometry must be
/// a point with at least longitude and latitude (a trailing altitude is
/// ignored), and every property value must be a string. Anything else is an
/// error rather than a partially-decoded collection.
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection, GeoJsonError> {
    let raw: RawCollection =
        serde_json::from_str(text).map_err(|e| GeoJsonError::Json(e.to_string()))?;

    if raw.kind != "FeatureCollection" {
        return Err(GeoJsonError::NotACollection(raw.kind));
    }

    let mut features = Vec::with_capacity(raw.features.len());
    for feature in raw.features {
        features.push(convert_feature(feature)?);
    }
    Ok(FeatureCollection::new(features))
}

fn convert_feature(raw: RawFeature) -> Result<Feature, GeoJsonError> {
    if raw.kind != "Feature" {
        return Err(GeoJsonError::NotAFeature(raw.kind));
    }
    if raw.geometry.kind != "Point" {
        return Err(GeoJsonError::UnsupportedGeometry(raw.geometry.kind));
    }
    if raw.geometry.coordinates.len() < 2 {
        return Err(GeoJsonError::ShortCoordinates(
            raw.geometry.coordinates.len(),
        ));
    }

    // GeoJSON point order is [longitude, latitude].
    let position = LatLng::new(raw.geometry.coordinates[1], raw.geometry.coordinates[0]);

    let mut properties = SiteProperties::new();
    for (key, value) in raw.properties.unwrap_or_default() {
        match value {
            serde_json::Value::String(text) => {
                properties.insert(key, text);
            }
            _ => return Err(GeoJsonError::NonStringProperty(key)),
        }
    }

    Ok(Feature::new(position, properties))
}

impl FeatureCollection {
    /// Decodes a GeoJSON string. See [`parse_feature_collection`].
    pub fn from_json(text: &str) -> Result<Self, GeoJsonError> {
        parse_feature_collection(text)
    }
}
