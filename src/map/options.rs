//! Base-map configuration.

use crate::geo::LatLng;

use super::layers::{MapLayer, TileLayer};

/// Default map center, framing the contiguous United States.
pub const DEFAULT_CENTER: LatLng = LatLng::new(49.2, -90.5);

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 3;

/// URL template of the default base tile layer.
pub const DEFAULT_TILE_URL: &str =
    "https://services.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}.png";

/// Configuration for a [`SiteMap`](super::SiteMap) view.
///
/// Overrides merge onto the defaults field by field: setting one field
/// leaves the others at their default. The layer list is the one
/// exception within itself: a caller-supplied list fully replaces the
/// default tile layer rather than appending to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    center: LatLng,
    zoom: u8,
    attribution_control: bool,
    zoom_control: bool,
    layers: Vec<MapLayer>,
}

impl MapOptions {
    /// Creates options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial map center.
    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self
    }

    /// Sets the initial zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Shows or hides the attribution control. Default: hidden.
    pub fn with_attribution_control(mut self, enabled: bool) -> Self {
        self.attribution_control = enabled;
        self
    }

    /// Shows or hides the zoom control. Default: shown.
    pub fn with_zoom_control(mut self, enabled: bool) -> Self {
        self.zoom_control = enabled;
        self
    }

    /// Replaces the layer list.
    ///
    /// The default tile layer is dropped, not kept alongside the supplied
    /// layers.
    pub fn with_layers(mut self, layers: Vec<MapLayer>) -> Self {
        self.layers = layers;
        self
    }

    /// The initial map center.
    pub fn center(&self) -> LatLng {
        self.center
    }

    /// The initial zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Whether the attribution control is shown.
    pub fn attribution_control(&self) -> bool {
        self.attribution_control
    }

    /// Whether the zoom control is shown.
    pub fn zoom_control(&self) -> bool {
        self.zoom_control
    }

    /// The configured layer list.
    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            attribution_control: false,
            zoom_control: true,
            layers: vec![MapLayer::Tile(TileLayer::new(DEFAULT_TILE_URL))],
        }
    }
}
