//! Analyte lookup against the method service.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use crate::http::{HttpClient, HttpError};

/// Which identifier an analyte lookup searches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyteKind {
    Code,
    Name,
}

impl AnalyteKind {
    /// The `kind` query-parameter value.
    pub fn as_param(&self) -> &'static str {
        match self {
            AnalyteKind::Code => "code",
            AnalyteKind::Name => "name",
        }
    }

    /// Title for a find-analyte dialog of this kind.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            AnalyteKind::Code => "Find an analyte code",
            AnalyteKind::Name => "Find an analyte name:",
        }
    }

    /// Label shown next to the search prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            AnalyteKind::Code => "analyte code: ",
            AnalyteKind::Name => "analyte name: ",
        }
    }
}

impl std::fmt::Display for AnalyteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

/// Errors from an analyte lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The request failed or the service answered with an error status
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The service answered with success but the body was not a values list
    #[error("invalid analyte response: {0}")]
    InvalidBody(String),
}

/// One analyte offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyteMatch {
    /// Selection value, lowercased.
    pub value: String,
    /// Display label.
    pub label: String,
}

#[derive(Deserialize)]
struct ValuesListResponse {
    values_list: ValuesList,
}

/// The service emits three shapes: a bare empty string when nothing
/// matched, a flat list of codes, or a list of `[name, code]` pairs.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValuesList {
    Empty(String),
    Codes(Vec<String>),
    Names(Vec<(String, String)>),
}

impl ValuesList {
    fn into_matches(self) -> Vec<AnalyteMatch> {
        match self {
            ValuesList::Empty(_) => Vec::new(),
            ValuesList::Codes(codes) => codes
                .into_iter()
                .map(|code| AnalyteMatch {
                    value: code.to_lowercase(),
                    label: code,
                })
                .collect(),
            ValuesList::Names(pairs) => pairs
                .into_iter()
                .map(|(name, code)| AnalyteMatch {
                    value: name.to_lowercase(),
                    label: format!("{} ({})", name, code),
                })
                .collect(),
        }
    }
}

/// Client for the analyte search endpoint.
///
/// Generic over [`HttpClient`] so tests can inject mocks.
pub struct AnalyteLookup<C: HttpClient> {
    http_client: C,
    endpoint: String,
}

impl<C: HttpClient> AnalyteLookup<C> {
    /// Creates a lookup against `endpoint`.
    pub fn new(http_client: C, endpoint: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Searches analytes whose identifier matches `selection`.
    ///
    /// # Arguments
    ///
    /// * `kind` - Whether to match codes or names
    /// * `selection` - The partial identifier typed so far
    ///
    /// # Returns
    ///
    /// The matching analytes, empty when nothing matched.
    pub async fn search(
        &self,
        kind: AnalyteKind,
        selection: &str,
    ) -> Result<Vec<AnalyteMatch>, LookupError> {
        self.request(&[("kind", kind.as_param()), ("selection", selection)])
            .await
    }

    /// Lists every analyte under a method category, the pre-populated
    /// browse path of a name search.
    pub async fn browse(
        &self,
        kind: AnalyteKind,
        category: &str,
        subcategory: &str,
    ) -> Result<Vec<AnalyteMatch>, LookupError> {
        self.request(&[
            ("kind", kind.as_param()),
            ("category", category),
            ("subcategory", subcategory),
            ("selection", ""),
        ])
        .await
    }

    async fn request(&self, params: &[(&str, &str)]) -> Result<Vec<AnalyteMatch>, LookupError> {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }
        let url = format!("{}?{}", self.endpoint, serializer.finish());

        debug!(url = %url, "requesting analyte values");
        let body = self.http_client.get(&url).await?;

        let response: ValuesListResponse = serde_json::from_str(&body)
            .map_err(|e| LookupError::InvalidBody(format!("{}", e)))?;
        Ok(response.values_list.into_matches())
    }
}
