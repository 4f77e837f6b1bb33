//! Default popup content for site markers.

use crate::geo::SiteProperties;
use crate::markup::escape;

/// Property carrying the site identifier.
pub const PROP_SITE_ID: &str = "MonitoringLocationIdentifier";
/// Property carrying the resolved site type.
pub const PROP_SITE_TYPE: &str = "ResolvedMonitoringLocationTypeName";
/// Property carrying the name of the providing data source.
pub const PROP_PROVIDER: &str = "ProviderName";

/// Renders the default identify popup for a site.
///
/// A three-row table showing the site identifier, the site type, and the
/// data source. Values are HTML-escaped; a missing property renders as an
/// empty cell.
pub fn default_popup_html(properties: &SiteProperties) -> String {
    let value = |key: &str| properties.get(key).map(String::as_str).unwrap_or("");

    format!(
        "<table>\
         <tr><th>Site:</th><td>{}</td></tr>\
         <tr><th>Site type:</th><td>{}</td></tr>\
         <tr><th>Data source:</th><td>{}</td></tr>\
         </table>",
        escape(value(PROP_SITE_ID)),
        escape(value(PROP_SITE_TYPE)),
        escape(value(PROP_PROVIDER))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_properties() -> SiteProperties {
        SiteProperties::from([
            (PROP_SITE_ID.to_string(), "ARS-IAWC-IAWC225".to_string()),
            (PROP_SITE_TYPE.to_string(), "Land".to_string()),
            (PROP_PROVIDER.to_string(), "STEWARDS".to_string()),
        ])
    }

    #[test]
    fn test_popup_renders_three_row_table() {
        let html = default_popup_html(&site_properties());
        assert_eq!(
            html,
            "<table>\
             <tr><th>Site:</th><td>ARS-IAWC-IAWC225</td></tr>\
             <tr><th>Site type:</th><td>Land</td></tr>\
             <tr><th>Data source:</th><td>STEWARDS</td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_missing_properties_render_empty_cells() {
        let html = default_popup_html(&SiteProperties::new());
        assert_eq!(
            html,
            "<table>\
             <tr><th>Site:</th><td></td></tr>\
             <tr><th>Site type:</th><td></td></tr>\
             <tr><th>Data source:</th><td></td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_property_values_are_escaped() {
        let mut properties = site_properties();
        properties.insert(
            PROP_SITE_ID.to_string(),
            "<script>alert('x')</script>".to_string(),
        );

        let html = default_popup_html(&properties);
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_unrelated_properties_are_ignored() {
        let mut properties = site_properties();
        properties.insert("OrganizationName".to_string(), "USGS".to_string());

        let html = default_popup_html(&properties);
        assert!(!html.contains("USGS"));
    }
}
