//! AquaMap - Water-quality site mapping widgets
//!
//! This library provides the widget models behind water-quality data pages:
//! a map view with a monitoring-site layer loaded from the Water Quality
//! Portal, plus the supporting search widgets (analyte lookup and picker,
//! choice menus, help content, results-table setup).
//!
//! # High-Level API
//!
//! For the one-call setup, [`map::SiteMap::with_sites`] builds the map view
//! and starts loading its site layer:
//!
//! ```ignore
//! use aquamap::http::ReqwestClient;
//! use aquamap::map::{MapOptions, SiteMap};
//! use aquamap::sites::{LayerOptions, QueryParams};
//!
//! let client = ReqwestClient::new()?;
//! let map = SiteMap::with_sites(
//!     client,
//!     "site-map-div",
//!     MapOptions::new(),
//!     LayerOptions::new().with_query(QueryParams::pairs([("statecode", "US:55")])),
//! );
//!
//! // Wait for the single fetch to finish.
//! let state = map.site_layer().unwrap().settled().await;
//! ```

pub mod analyte;
pub mod geo;
pub mod help;
pub mod http;
pub mod logging;
pub mod map;
pub mod markup;
pub mod menu;
pub mod session;
pub mod sites;
pub mod table;

/// Version of the aquamap library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
