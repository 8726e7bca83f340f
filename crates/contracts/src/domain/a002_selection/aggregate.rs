use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};

/// The user's selected product ids: an ordered set. Insertion order is the
/// display order of the selected list; duplicates are never held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a selection from its persisted JSON form (an array of id
    /// strings). Missing or corrupt data falls back to an empty selection;
    /// this never fails. Duplicates in stored data are dropped, keeping the
    /// first occurrence.
    pub fn restore(raw: Option<&str>) -> Self {
        let mut selection: Selection = raw
            .and_then(|text| serde_json::from_str(text).ok())
            .unwrap_or_default();
        let mut seen = Vec::with_capacity(selection.ids.len());
        selection.ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
        selection
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// If `id` is present remove it, otherwise append it.
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Remove `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|held| held != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|held| held == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }
}

/// One selected-list row: the id plus the catalog name, if the id resolved.
/// An unresolved id (filtered out or not yet loaded) keeps its row; the view
/// labels it "Unknown".
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRow {
    pub id: String,
    pub name: Option<String>,
}

/// Resolve the selection against the catalog, in selection order.
pub fn resolve_rows(selection: &Selection, products: &[Product]) -> Vec<SelectedRow> {
    selection
        .iter()
        .map(|id| SelectedRow {
            id: id.clone(),
            name: products
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.name.clone()),
        })
        .collect()
}
