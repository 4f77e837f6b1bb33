//! Choice menus loaded from the service's choices endpoints.
//!
//! A [`ChoiceMenuLoader`] fetches the `{"choices": [...]}` wire shape,
//! builds a [`ChoiceMenu`] model, and restores the menu's previous
//! selection from the injected session store. Selecting through the menu
//! persists the choice back, so a rebuilt menu picks up where the user
//! left off.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use crate::http::{HttpClient, HttpError};
use crate::session::{SessionError, SharedSessionStore};

/// Selection used when the store holds nothing for a menu.
pub const DEFAULT_SELECTION: &str = "all";

/// Placeholder text shown while nothing is selected.
pub const MENU_PLACEHOLDER: &str = "All";

/// Item count at which a menu grows a search box.
pub const MIN_RESULTS_FOR_SEARCH: usize = 15;

/// Separator for persisting multi-selections as one stored value.
const SELECTION_SEPARATOR: &str = "|";

/// Errors from loading a choice menu.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// The request failed or the service answered with an error status
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The service answered with success but the body was not a choices list
    #[error("invalid choices response: {0}")]
    InvalidBody(String),
}

#[derive(Deserialize)]
struct ChoicesResponse {
    choices: Vec<RawChoice>,
}

#[derive(Deserialize)]
struct RawChoice {
    value: String,
    display_value: String,
}

/// One selectable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    /// Value submitted when the item is selected.
    pub id: String,
    /// Text shown to the user.
    pub text: String,
}

/// A select menu bound to a session store.
///
/// Cloning shares the store, not the selection: each clone carries its
/// own selection state and the store keeps whatever was persisted last.
#[derive(Clone)]
pub struct ChoiceMenu {
    id: String,
    items: Vec<ChoiceItem>,
    selected: Vec<String>,
    enabled: bool,
    store: SharedSessionStore,
}

impl ChoiceMenu {
    fn restored(id: &str, items: Vec<ChoiceItem>, store: SharedSessionStore) -> Self {
        let selected = match store.get(id) {
            Some(stored) if !stored.is_empty() => stored
                .split(SELECTION_SEPARATOR)
                .map(str::to_string)
                .collect(),
            _ => vec![DEFAULT_SELECTION.to_string()],
        };

        Self {
            id: id.to_string(),
            items,
            selected,
            enabled: true,
            store,
        }
    }

    /// The menu's id, also its key in the session store.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The selectable items, in service order.
    pub fn items(&self) -> &[ChoiceItem] {
        &self.items
    }

    /// The current selection.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Placeholder text shown while nothing is selected.
    pub fn placeholder(&self) -> &'static str {
        MENU_PLACEHOLDER
    }

    /// Character count of the widest display text, for sizing the menu.
    pub fn width_hint(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.text.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// True when the menu holds enough items to warrant a search box.
    pub fn searchable(&self) -> bool {
        self.items.len() >= MIN_RESULTS_FOR_SEARCH
    }

    /// Whether the menu accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the menu.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Selects a single value and persists it, replacing any stored
    /// selection.
    pub fn select(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        let value = value.into();
        self.store.put(&self.id, &value)?;
        self.selected = vec![value];
        Ok(())
    }

    /// Selects several values and persists them as one separator-joined
    /// stored value.
    pub fn select_many(&mut self, values: Vec<String>) -> Result<(), SessionError> {
        let joined = values.join(SELECTION_SEPARATOR);
        self.store.put(&self.id, &joined)?;
        self.selected = values;
        Ok(())
    }
}

impl fmt::Debug for ChoiceMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceMenu")
            .field("id", &self.id)
            .field("items", &self.items.len())
            .field("selected", &self.selected)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Builds choice menus from a service endpoint and a session store.
pub struct ChoiceMenuLoader<C: HttpClient> {
    http_client: C,
    store: SharedSessionStore,
}

impl<C: HttpClient> ChoiceMenuLoader<C> {
    /// Creates a loader over the given client and store.
    pub fn new(http_client: C, store: SharedSessionStore) -> Self {
        Self { http_client, store }
    }

    /// Loads the menu `menu_id` from `url`.
    ///
    /// # Arguments
    ///
    /// * `menu_id` - The menu's id and session-store key
    /// * `url` - The choices endpoint
    /// * `query` - Extra query parameters, appended when non-empty
    ///
    /// # Returns
    ///
    /// The menu, with its previous selection restored from the store or
    /// the default selection when nothing usable is stored.
    pub async fn load(
        &self,
        menu_id: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<ChoiceMenu, MenuError> {
        let url = if query.is_empty() {
            url.to_string()
        } else {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (key, value) in query {
                serializer.append_pair(key, value);
            }
            format!("{}?{}", url, serializer.finish())
        };

        debug!(url = %url, menu_id = menu_id, "requesting menu choices");
        let body = self.http_client.get(&url).await?;

        let response: ChoicesResponse = serde_json::from_str(&body)
            .map_err(|e| MenuError::InvalidBody(format!("{}", e)))?;

        let items = response
            .choices
            .into_iter()
            .map(|choice| ChoiceItem {
                id: choice.value,
                text: choice.display_value,
            })
            .collect();

        Ok(ChoiceMenu::restored(
            menu_id,
            items,
            Arc::clone(&self.store),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::MockHttpClient;
    use crate::session::MemorySessionStore;

    const MEDIA_CHOICES: &str = r#"{
        "choices": [
            {"value": "air", "display_value": "Air"},
            {"value": "water", "display_value": "Water"},
            {"value": "sediment", "display_value": "Sediment and soil"}
        ]
    }"#;

    fn shared_store() -> SharedSessionStore {
        Arc::new(MemorySessionStore::new())
    }

    async fn load_media_menu(store: SharedSessionStore) -> ChoiceMenu {
        let loader = ChoiceMenuLoader::new(MockHttpClient::ok(MEDIA_CHOICES), store);
        loader
            .load("media-select", "https://methods.example.gov/media", &[])
            .await
            .unwrap()
    }

    // ─── Loading ────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_load_builds_items_in_service_order() {
        let menu = load_media_menu(shared_store()).await;

        assert_eq!(menu.id(), "media-select");
        assert_eq!(
            menu.items(),
            &[
                ChoiceItem {
                    id: "air".to_string(),
                    text: "Air".to_string(),
                },
                ChoiceItem {
                    id: "water".to_string(),
                    text: "Water".to_string(),
                },
                ChoiceItem {
                    id: "sediment".to_string(),
                    text: "Sediment and soil".to_string(),
                },
            ]
        );
        assert!(menu.is_enabled());
    }

    #[tokio::test]
    async fn test_load_appends_query_parameters() {
        let client = MockHttpClient::ok(r#"{"choices": []}"#);
        let loader = ChoiceMenuLoader::new(client.clone(), shared_store());

        loader
            .load(
                "subcategory-select",
                "https://methods.example.gov/subcategories",
                &[("category", "Inorganic chemical")],
            )
            .await
            .unwrap();

        assert_eq!(
            client.requests(),
            vec!["https://methods.example.gov/subcategories?category=Inorganic+chemical"]
        );
    }

    #[tokio::test]
    async fn test_load_without_query_uses_bare_url() {
        let client = MockHttpClient::ok(r#"{"choices": []}"#);
        let loader = ChoiceMenuLoader::new(client.clone(), shared_store());

        loader
            .load("media-select", "https://methods.example.gov/media", &[])
            .await
            .unwrap();

        assert_eq!(
            client.requests(),
            vec!["https://methods.example.gov/media"]
        );
    }

    #[tokio::test]
    async fn test_error_status_is_propagated() {
        let client = MockHttpClient::err(HttpError::Status {
            status: 404,
            url: "https://methods.example.gov/media".to_string(),
            body: String::new(),
        });
        let loader = ChoiceMenuLoader::new(client, shared_store());

        let result = loader
            .load("media-select", "https://methods.example.gov/media", &[])
            .await;

        match result {
            Err(MenuError::Http(error)) => assert_eq!(error.status(), Some(404)),
            other => panic!("Expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid() {
        let loader = ChoiceMenuLoader::new(MockHttpClient::ok("not json"), shared_store());

        let result = loader
            .load("media-select", "https://methods.example.gov/media", &[])
            .await;

        assert!(matches!(result, Err(MenuError::InvalidBody(_))));
    }

    // ─── Presentation hints ─────────────────────────────────────────

    #[tokio::test]
    async fn test_width_hint_is_longest_display_text() {
        let menu = load_media_menu(shared_store()).await;
        assert_eq!(menu.width_hint(), "Sediment and soil".chars().count());
    }

    #[tokio::test]
    async fn test_placeholder() {
        let menu = load_media_menu(shared_store()).await;
        assert_eq!(menu.placeholder(), "All");
    }

    #[tokio::test]
    async fn test_searchable_threshold() {
        let choices: Vec<String> = (0..15)
            .map(|i| format!(r#"{{"value": "v{}", "display_value": "Value {}"}}"#, i, i))
            .collect();
        let body = format!(r#"{{"choices": [{}]}}"#, choices.join(","));

        let loader = ChoiceMenuLoader::new(MockHttpClient::ok(body), shared_store());
        let menu = loader
            .load("big-select", "https://methods.example.gov/choices", &[])
            .await
            .unwrap();
        assert!(menu.searchable());

        let small = load_media_menu(shared_store()).await;
        assert!(!small.searchable());
    }

    // ─── Selection persistence ──────────────────────────────────────

    #[tokio::test]
    async fn test_default_selection_when_store_is_empty() {
        let menu = load_media_menu(shared_store()).await;
        assert_eq!(menu.selected(), &["all".to_string()]);
    }

    #[tokio::test]
    async fn test_selection_restored_from_store() {
        let store = shared_store();
        store.put("media-select", "water").unwrap();

        let menu = load_media_menu(store).await;
        assert_eq!(menu.selected(), &["water".to_string()]);
    }

    #[tokio::test]
    async fn test_multi_selection_restored_from_store() {
        let store = shared_store();
        store.put("media-select", "water|sediment").unwrap();

        let menu = load_media_menu(store).await;
        assert_eq!(
            menu.selected(),
            &["water".to_string(), "sediment".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_stored_value_falls_back_to_default() {
        let store = shared_store();
        store.put("media-select", "").unwrap();

        let menu = load_media_menu(store).await;
        assert_eq!(menu.selected(), &["all".to_string()]);
    }

    #[tokio::test]
    async fn test_select_updates_and_persists() {
        let store = shared_store();
        let mut menu = load_media_menu(Arc::clone(&store)).await;

        menu.select("water").unwrap();

        assert_eq!(menu.selected(), &["water".to_string()]);
        assert_eq!(store.get("media-select"), Some("water".to_string()));
    }

    #[tokio::test]
    async fn test_select_many_persists_joined() {
        let store = shared_store();
        let mut menu = load_media_menu(Arc::clone(&store)).await;

        menu.select_many(vec!["water".to_string(), "air".to_string()])
            .unwrap();

        assert_eq!(
            menu.selected(),
            &["water".to_string(), "air".to_string()]
        );
        assert_eq!(store.get("media-select"), Some("water|air".to_string()));
    }

    #[tokio::test]
    async fn test_last_selection_wins() {
        let store = shared_store();
        let mut menu = load_media_menu(Arc::clone(&store)).await;

        menu.select("water").unwrap();
        menu.select("air").unwrap();

        assert_eq!(store.get("media-select"), Some("air".to_string()));

        let reloaded = load_media_menu(store).await;
        assert_eq!(reloaded.selected(), &["air".to_string()]);
    }

    #[tokio::test]
    async fn test_set_enabled() {
        let mut menu = load_media_menu(shared_store()).await;

        menu.set_enabled(false);
        assert!(!menu.is_enabled());

        menu.set_enabled(true);
        assert!(menu.is_enabled());
    }
}
