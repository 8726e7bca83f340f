//! Page-session state: one context object owning the selection, the
//! memoized catalog and the conversation transcript. Provided via Leptos
//! context so components share a single source of truth instead of module
//! globals.

use crate::domain::a001_product::api::fetch_products;
use crate::domain::a002_selection::storage;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_selection::Selection;
use contracts::domain::a003_routine_chat::Conversation;
use leptos::prelude::*;

/// Lifecycle of the catalog resource. `Loading` is entered synchronously
/// before the fetch is spawned, so repeated triggers while a load is in
/// flight never issue a second fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Idle,
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub catalog: RwSignal<CatalogState>,
    pub selection: RwSignal<Selection>,
    pub conversation: StoredValue<Conversation>,
}

impl SessionContext {
    /// Build the session state for a fresh page load: selection restored
    /// from storage (fails soft to empty), conversation seeded with the
    /// system directive, catalog untouched.
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(CatalogState::Idle),
            selection: RwSignal::new(storage::restore_selection()),
            conversation: StoredValue::new(Conversation::seeded()),
        }
    }

    /// Kick off the catalog load unless it already ran or is running.
    pub fn ensure_catalog(&self) {
        if !matches!(self.catalog.get_untracked(), CatalogState::Idle) {
            return;
        }
        self.catalog.set(CatalogState::Loading);
        let catalog = self.catalog;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products().await {
                Ok(products) => catalog.set(CatalogState::Ready(products)),
                Err(e) => {
                    log::error!("catalog load failed: {e}");
                    catalog.set(CatalogState::Failed(e));
                }
            }
        });
    }

    /// The loaded catalog, or an empty list while it is not `Ready`.
    pub fn products(&self) -> Vec<Product> {
        match self.catalog.get() {
            CatalogState::Ready(products) => products,
            _ => Vec::new(),
        }
    }

    pub fn toggle_selected(&self, id: &str) {
        self.selection.update(|s| s.toggle(id));
        self.persist_selection();
    }

    pub fn remove_selected(&self, id: &str) {
        self.selection.update(|s| s.remove(id));
        self.persist_selection();
    }

    pub fn clear_selected(&self) {
        self.selection.update(|s| s.clear());
        self.persist_selection();
    }

    // Every mutation writes the whole selection back to storage; views
    // follow through the signal.
    fn persist_selection(&self) {
        storage::save_selection(&self.selection.get_untracked());
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to reach the session from any component under `App`.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found. Wrap your app with App.")
}
