//! Base-map layers.

use crate::geo::LatLng;

/// A tile layer identified by its URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    url_template: String,
}

impl TileLayer {
    /// Creates a tile layer from a `{z}`/`{y}`/`{x}` URL template.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    /// The layer's URL template.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }
}

/// A standalone marker placed directly in the map's layer list.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: LatLng,
    popup_text: Option<String>,
}

impl Marker {
    /// Creates a marker at `position` with no popup.
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            popup_text: None,
        }
    }

    /// Attaches popup text to the marker.
    pub fn with_popup(mut self, text: impl Into<String>) -> Self {
        self.popup_text = Some(text.into());
        self
    }

    /// The marker's position.
    pub fn position(&self) -> LatLng {
        self.position
    }

    /// The popup text, if any.
    pub fn popup_text(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }
}

/// Anything placeable in a map's layer list.
#[derive(Debug, Clone, PartialEq)]
pub enum MapLayer {
    Tile(TileLayer),
    Marker(Marker),
}

impl From<TileLayer> for MapLayer {
    fn from(layer: TileLayer) -> Self {
        MapLayer::Tile(layer)
    }
}

impl From<Marker> for MapLayer {
    fn from(marker: Marker) -> Self {
        MapLayer::Marker(marker)
    }
}
