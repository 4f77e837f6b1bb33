//! Help content assembly.

use crate::markup::prefix_img_sources;

/// Prepares help content for display, qualifying static asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPanel {
    static_url: String,
}

impl HelpPanel {
    /// Creates a panel whose content references assets under `static_url`.
    pub fn new(static_url: impl Into<String>) -> Self {
        Self {
            static_url: static_url.into(),
        }
    }

    /// The configured static asset URL.
    pub fn static_url(&self) -> &str {
        &self.static_url
    }

    /// Builds displayable help content.
    ///
    /// Every `<img src="...">` in `body_html` gets the static asset URL
    /// prepended, so relative image paths resolve wherever the help is
    /// shown.
    pub fn content(&self, title: impl Into<String>, body_html: &str) -> HelpContent {
        HelpContent {
            title: title.into(),
            body_html: prefix_img_sources(body_html, &self.static_url),
        }
    }
}

/// A titled piece of help content, its image sources qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContent {
    title: String,
    body_html: String,
}

impl HelpContent {
    /// The help title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The body HTML.
    pub fn body_html(&self) -> &str {
        &self.body_html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_keeps_title() {
        let panel = HelpPanel::new("/static/");
        let content = panel.content("Media types", "<p>Help text.</p>");
        assert_eq!(content.title(), "Media types");
    }

    #[test]
    fn test_content_prefixes_image_sources() {
        let panel = HelpPanel::new("/static/");
        let content = panel.content(
            "Sort order",
            r#"<p>Click the arrow:</p><img src="images/sort-arrow.png" alt="">"#,
        );

        assert_eq!(
            content.body_html(),
            r#"<p>Click the arrow:</p><img src="/static/images/sort-arrow.png" alt="">"#
        );
    }

    #[test]
    fn test_content_prefixes_every_image() {
        let panel = HelpPanel::new("https://cdn.example.gov/assets/");
        let content = panel.content(
            "Icons",
            r#"<img src="a.png"> and <img src="b.png">"#,
        );

        assert_eq!(
            content.body_html(),
            r#"<img src="https://cdn.example.gov/assets/a.png"> and <img src="https://cdn.example.gov/assets/b.png">"#
        );
    }

    #[test]
    fn test_content_without_images_is_unchanged() {
        let panel = HelpPanel::new("/static/");
        let content = panel.content("Plain", "<p>No pictures here.</p>");
        assert_eq!(content.body_html(), "<p>No pictures here.</p>");
    }
}
