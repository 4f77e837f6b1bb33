//! Base map view composition.
//!
//! A [`SiteMap`] bundles a container id, display options, and layers; the
//! [`SiteMap::with_sites`] constructor additionally spawns a
//! [`SiteLayer`](crate::sites::SiteLayer) fetch and attaches it, giving the
//! one-call setup path.

mod layers;
mod options;
mod site_map;

pub use layers::{MapLayer, Marker, TileLayer};
pub use options::{DEFAULT_CENTER, DEFAULT_TILE_URL, DEFAULT_ZOOM, MapOptions};
pub use site_map::SiteMap;
