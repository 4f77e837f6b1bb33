//! Monitoring-site layer: one fetch, markers with popups, completion hooks.
//!
//! [`SiteLayer`] issues a single GET against the site service, with
//! [`QueryParams`] serialization always appending the JSON format marker,
//! decodes the GeoJSON feature collection, and binds an identify popup per
//! site unless a custom per-feature hook replaces the default binding.

mod layer;
mod marker;
mod options;
mod popup;
mod query;

pub use layer::{FetchError, LayerState, SiteLayer};
pub use marker::SiteMarker;
pub use options::{DEFAULT_SERVICE_URL, LayerOptions};
pub use popup::{PROP_PROVIDER, PROP_SITE_ID, PROP_SITE_TYPE, default_popup_html};
pub use query::{FORMAT_MARKER, QueryParams};
