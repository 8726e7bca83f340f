//! Selection persistence in localStorage: one key holding the selection as
//! a JSON array of product-id strings.

use contracts::domain::a002_selection::Selection;
use web_sys::window;

const SELECTION_STORAGE_KEY: &str = "selectedProducts";

/// Read the persisted selection. Missing storage, missing key or corrupt
/// data all fall back to an empty selection.
pub fn restore_selection() -> Selection {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SELECTION_STORAGE_KEY).ok().flatten());
    Selection::restore(raw.as_deref())
}

/// Write the whole selection back under the fixed key.
pub fn save_selection(selection: &Selection) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage
            .set_item(SELECTION_STORAGE_KEY, &selection.to_json())
            .is_err()
        {
            log::warn!("selection not persisted: storage write failed");
        }
    }
}
