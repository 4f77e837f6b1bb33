//! GeoJSON data model for water-quality monitoring sites.
//!
//! The site service answers `GET .../search?...&mimeType=json` with a GeoJSON
//! FeatureCollection of point features whose properties are plain strings.
//! This module holds the typed model plus the strict decoder for that wire
//! format.

mod parse;
mod types;

pub use parse::{GeoJsonError, parse_feature_collection};
pub use types::{Feature, FeatureCollection, LatLng, SiteProperties};
