//! Site-layer configuration.

use std::fmt;
use std::sync::Arc;

use crate::geo::{Feature, FeatureCollection, SiteProperties};

use super::layer::FetchError;
use super::marker::SiteMarker;
use super::popup::default_popup_html;
use super::query::QueryParams;

/// Default site-service endpoint.
pub const DEFAULT_SERVICE_URL: &str = "http://www.waterqualitydata.us/simplestation/search";

type PopupFn = dyn Fn(&SiteProperties) -> String + Send + Sync;
type FeatureFn = dyn Fn(&Feature, &mut SiteMarker) + Send + Sync;
type SuccessFn = dyn Fn(&FeatureCollection) + Send + Sync;
type ErrorFn = dyn Fn(&FetchError) + Send + Sync;

/// Configuration for a [`SiteLayer`](super::SiteLayer).
///
/// Groups the service endpoint, the query parameters, and the per-feature
/// and completion hooks. Every field has a documented default, so callers
/// configure only what they need.
///
/// # Example
///
/// ```
/// use aquamap::sites::{LayerOptions, QueryParams};
///
/// let options = LayerOptions::new()
///     .with_query(QueryParams::pairs([("statecode", "US:55")]))
///     .with_success_handler(|sites| println!("{} sites loaded", sites.len()));
///
/// assert_eq!(
///     options.request_url(),
///     "http://www.waterqualitydata.us/simplestation/search?statecode=US%3A55&mimeType=json"
/// );
/// ```
#[derive(Clone)]
pub struct LayerOptions {
    service_url: String,
    query: QueryParams,
    popup_html: Arc<PopupFn>,
    on_each_feature: Option<Arc<FeatureFn>>,
    success_handler: Arc<SuccessFn>,
    error_handler: Arc<ErrorFn>,
}

impl LayerOptions {
    /// Creates options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site-service endpoint.
    ///
    /// An empty URL is ignored and the current endpoint is kept, so passing
    /// along an unset configuration field behaves like omitting it.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.service_url = url;
        }
        self
    }

    /// Sets the query parameters sent to the service.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets the popup renderer used by the default per-feature binding.
    ///
    /// Has no effect when [`with_on_each_feature`](Self::with_on_each_feature)
    /// is also set, since a custom per-feature hook replaces the default
    /// binding entirely.
    pub fn with_popup_html<F>(mut self, popup: F) -> Self
    where
        F: Fn(&SiteProperties) -> String + Send + Sync + 'static,
    {
        self.popup_html = Arc::new(popup);
        self
    }

    /// Replaces the default per-feature binding with a custom hook.
    ///
    /// The hook runs once per feature, in response order, with the marker
    /// under construction. When set, no popup is bound automatically.
    pub fn with_on_each_feature<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Feature, &mut SiteMarker) + Send + Sync + 'static,
    {
        self.on_each_feature = Some(Arc::new(hook));
        self
    }

    /// Sets the handler invoked once after a successful load.
    pub fn with_success_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FeatureCollection) + Send + Sync + 'static,
    {
        self.success_handler = Arc::new(handler);
        self
    }

    /// Sets the handler invoked once when the load fails.
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&FetchError) + Send + Sync + 'static,
    {
        self.error_handler = Arc::new(handler);
        self
    }

    /// The configured service endpoint.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The configured query parameters.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// The full request URL: endpoint, `?`, serialized query.
    ///
    /// The `?` is always present because the JSON format marker always is.
    pub fn request_url(&self) -> String {
        format!("{}?{}", self.service_url, self.query.to_query_string())
    }

    pub(crate) fn render_popup(&self, properties: &SiteProperties) -> String {
        (self.popup_html)(properties)
    }

    /// Applies the per-feature step to a marker under construction: the
    /// custom hook when one is set, otherwise the default popup binding.
    pub(crate) fn bind_feature(&self, feature: &Feature, marker: &mut SiteMarker) {
        match &self.on_each_feature {
            Some(hook) => hook(feature, marker),
            None => marker.bind_popup(self.render_popup(feature.properties())),
        }
    }

    pub(crate) fn notify_success(&self, sites: &FeatureCollection) {
        (self.success_handler)(sites);
    }

    pub(crate) fn notify_error(&self, error: &FetchError) {
        (self.error_handler)(error);
    }
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            query: QueryParams::default(),
            popup_html: Arc::new(default_popup_html),
            on_each_feature: None,
            success_handler: Arc::new(|_| {}),
            error_handler: Arc::new(|_| {}),
        }
    }
}

impl fmt::Debug for LayerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerOptions")
            .field("service_url", &self.service_url)
            .field("query", &self.query)
            .field("custom_on_each_feature", &self.on_each_feature.is_some())
            .finish()
    }
}
