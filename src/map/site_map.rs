//! Composite map view with an attached site layer.

use crate::geo::LatLng;
use crate::http::HttpClient;
use crate::sites::{LayerOptions, SiteLayer};

use super::layers::MapLayer;
use super::options::MapOptions;

/// A base map view, optionally carrying one monitoring-site layer.
///
/// The view itself is inert data: container, display options, layers.
/// Attaching sites is what triggers network activity, through the
/// [`SiteLayer`] it holds.
#[derive(Debug, Clone)]
pub struct SiteMap {
    container_id: String,
    options: MapOptions,
    site_layer: Option<SiteLayer>,
}

impl SiteMap {
    /// Creates a map view for the given container with no site layer.
    pub fn new(container_id: impl Into<String>, options: MapOptions) -> Self {
        Self {
            container_id: container_id.into(),
            options,
            site_layer: None,
        }
    }

    /// Creates a map view and starts loading a site layer into it.
    ///
    /// The site fetch runs on the current runtime; the map is returned
    /// immediately with the layer in its `Loading` state. Await
    /// [`SiteLayer::settled`] on [`site_layer`](Self::site_layer) to
    /// observe completion. Must be called from within a tokio runtime.
    pub fn with_sites<C>(
        client: C,
        container_id: impl Into<String>,
        map_options: MapOptions,
        layer_options: LayerOptions,
    ) -> Self
    where
        C: HttpClient + 'static,
    {
        let mut map = Self::new(container_id, map_options);
        map.attach_sites(SiteLayer::spawn(client, layer_options));
        map
    }

    /// Attaches a site layer, replacing any previous one.
    pub fn attach_sites(&mut self, layer: SiteLayer) {
        self.site_layer = Some(layer);
    }

    /// The id of the page element hosting the map.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// The view's display options.
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// The initial map center.
    pub fn center(&self) -> LatLng {
        self.options.center()
    }

    /// The initial zoom level.
    pub fn zoom(&self) -> u8 {
        self.options.zoom()
    }

    /// The base layer list.
    pub fn layers(&self) -> &[MapLayer] {
        self.options.layers()
    }

    /// The attached site layer, if any.
    pub fn site_layer(&self) -> Option<&SiteLayer> {
        self.site_layer.as_ref()
    }

    /// True once a site layer has been attached.
    pub fn has_sites(&self) -> bool {
        self.site_layer.is_some()
    }
}
