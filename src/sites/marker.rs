//! Markers produced by a site layer.

use crate::geo::LatLng;

/// A map marker for a single monitoring site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMarker {
    position: LatLng,
    popup_html: Option<String>,
}

impl SiteMarker {
    /// Creates a marker at `position` with no popup bound.
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            popup_html: None,
        }
    }

    /// Binds popup HTML to this marker, replacing any previous content.
    pub fn bind_popup(&mut self, html: impl Into<String>) {
        self.popup_html = Some(html.into());
    }

    /// The marker's position.
    pub fn position(&self) -> LatLng {
        self.position
    }

    /// The bound popup HTML, if any.
    pub fn popup_html(&self) -> Option<&str> {
        self.popup_html.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marker_has_no_popup() {
        let marker = SiteMarker::new(LatLng::new(42.0331, -93.9397));
        assert_eq!(marker.position(), LatLng::new(42.0331, -93.9397));
        assert_eq!(marker.popup_html(), None);
    }

    #[test]
    fn test_bind_popup_sets_content() {
        let mut marker = SiteMarker::new(LatLng::new(42.0331, -93.9397));
        marker.bind_popup("<b>site</b>");
        assert_eq!(marker.popup_html(), Some("<b>site</b>"));
    }

    #[test]
    fn test_bind_popup_replaces_previous_content() {
        let mut marker = SiteMarker::new(LatLng::default());
        marker.bind_popup("first");
        marker.bind_popup("second");
        assert_eq!(marker.popup_html(), Some("second"));
    }
}
