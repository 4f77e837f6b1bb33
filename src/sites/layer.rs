//! The monitoring-site layer.
//!
//! A [`SiteLayer`] performs exactly one HTTP GET against the site service
//! when it is created, decodes the GeoJSON response, and materializes one
//! marker per feature, in response order. After that the layer never
//! changes: there is no refresh, no retry, and no second request for the
//! lifetime of the instance.
//!
//! Two construction surfaces share the same fetch path:
//!
//! - [`SiteLayer::spawn`] starts the fetch on the current runtime and
//!   returns an empty `Loading` handle immediately. Completion is
//!   observable through [`SiteLayer::state`] and awaitable through
//!   [`SiteLayer::settled`].
//! - [`SiteLayer::fetch`] resolves once the layer has reached a terminal
//!   state.
//!
//! Handles are cheap clones sharing one underlying layer. Dropping every
//! handle does not cancel an in-flight request; it simply completes into
//! state nobody reads.

use std::sync::{Arc, RwLock};

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::geo::FeatureCollection;
use crate::http::{HttpClient, HttpError};

use super::marker::SiteMarker;
use super::options::LayerOptions;

/// Errors that fail a site load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request failed in transit or the service answered with an error
    /// status
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service answered with a success status but the body was not a
    /// usable feature collection
    #[error("invalid site response: {reason}")]
    InvalidBody {
        /// What made the body unusable.
        reason: String,
        /// The body as received.
        body: String,
    },
}

impl FetchError {
    /// The HTTP status code, when the service produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http(error) => error.status(),
            FetchError::InvalidBody { .. } => None,
        }
    }

    /// The raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchError::Http(error) => error.body(),
            FetchError::InvalidBody { body, .. } => Some(body),
        }
    }
}

/// Lifecycle state of a site layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LayerState {
    /// The fetch is still in flight; the layer is empty.
    #[default]
    Loading,
    /// The fetch succeeded and all markers are in place.
    Ready,
    /// The fetch failed; the layer stays empty.
    Failed(FetchError),
}

impl LayerState {
    /// True once the layer will no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LayerState::Loading)
    }

    /// True when the layer loaded successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self, LayerState::Ready)
    }

    /// True when the load failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, LayerState::Failed(_))
    }
}

impl std::fmt::Display for LayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerState::Loading => write!(f, "Loading"),
            LayerState::Ready => write!(f, "Ready"),
            LayerState::Failed(error) => write!(f, "Failed: {}", error),
        }
    }
}

#[derive(Debug)]
struct LayerInner {
    markers: RwLock<Vec<SiteMarker>>,
    state: RwLock<LayerState>,
    settled_tx: watch::Sender<bool>,
}

/// Handle to a monitoring-site layer.
///
/// Cloning is cheap; all clones observe the same markers and state.
#[derive(Debug, Clone)]
pub struct SiteLayer {
    inner: Arc<LayerInner>,
}

impl SiteLayer {
    fn new_loading() -> Self {
        let (settled_tx, _settled_rx) = watch::channel(false);
        Self {
            inner: Arc::new(LayerInner {
                markers: RwLock::new(Vec::new()),
                state: RwLock::new(LayerState::Loading),
                settled_tx,
            }),
        }
    }

    /// Creates the layer and starts its single fetch on the current
    /// runtime.
    ///
    /// Returns immediately; the handle is empty and `Loading` until the
    /// request resolves. Must be called from within a tokio runtime.
    pub fn spawn<C>(client: C, options: LayerOptions) -> Self
    where
        C: HttpClient + 'static,
    {
        let layer = Self::new_loading();
        let inner = Arc::clone(&layer.inner);
        tokio::spawn(async move {
            run_fetch(&client, &options, &inner).await;
        });
        layer
    }

    /// Creates the layer and resolves once its single fetch has completed.
    ///
    /// The returned handle is already in a terminal state and its
    /// completion handler has run.
    pub async fn fetch<C>(client: &C, options: LayerOptions) -> Self
    where
        C: HttpClient,
    {
        let layer = Self::new_loading();
        run_fetch(client, &options, &layer.inner).await;
        layer
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LayerState {
        self.inner.state.read().unwrap().clone()
    }

    /// Snapshot of the layer's markers, in response order.
    pub fn markers(&self) -> Vec<SiteMarker> {
        self.inner.markers.read().unwrap().clone()
    }

    /// Number of markers currently in the layer.
    pub fn marker_count(&self) -> usize {
        self.inner.markers.read().unwrap().len()
    }

    /// True while no markers are present.
    pub fn is_empty(&self) -> bool {
        self.marker_count() == 0
    }

    /// Waits until the layer reaches a terminal state and returns it.
    ///
    /// Resolves immediately when the layer has already settled. By the
    /// time this returns, the completion handler has run.
    pub async fn settled(&self) -> LayerState {
        let mut settled_rx = self.inner.settled_tx.subscribe();
        while !*settled_rx.borrow() {
            if settled_rx.changed().await.is_err() {
                break;
            }
        }
        self.state()
    }
}

/// Runs the layer's single fetch to completion, mutating `inner`.
async fn run_fetch<C>(client: &C, options: &LayerOptions, inner: &LayerInner)
where
    C: HttpClient,
{
    let url = options.request_url();
    debug!(url = %url, "requesting monitoring sites");

    let body = match client.get(&url).await {
        Ok(body) => body,
        Err(error) => {
            settle_failed(inner, options, FetchError::Http(error));
            return;
        }
    };

    let sites = match FeatureCollection::from_json(&body) {
        Ok(sites) => sites,
        Err(error) => {
            settle_failed(
                inner,
                options,
                FetchError::InvalidBody {
                    reason: error.to_string(),
                    body,
                },
            );
            return;
        }
    };

    // One marker per feature, in response order, under a single write lock.
    {
        let mut markers = inner.markers.write().unwrap();
        for feature in sites.features() {
            let mut marker = SiteMarker::new(feature.position());
            options.bind_feature(feature, &mut marker);
            markers.push(marker);
        }
    }

    debug!(count = sites.len(), "monitoring sites loaded");
    options.notify_success(&sites);
    settle(inner, LayerState::Ready);
}

fn settle_failed(inner: &LayerInner, options: &LayerOptions, error: FetchError) {
    warn!(error = %error, "site fetch failed");
    options.notify_error(&error);
    settle(inner, LayerState::Failed(error));
}

/// Records the terminal state and wakes `settled()` waiters. The completion
/// handler has already run, so a waiter never observes a terminal state
/// with its handler still pending.
fn settle(inner: &LayerInner, state: LayerState) {
    *inner.state.write().unwrap() = state;
    let _ = inner.settled_tx.send(true);
}
