use crate::domain::a001_product::Product;
use crate::domain::a002_selection::Selection;
use serde::{Deserialize, Serialize};

/// Fixed directive seeding every conversation. Keeps the assistant on
/// routine and beauty topics.
pub const SYSTEM_PROMPT: &str = "You are a helpful beauty advisor. Only answer \
questions about the generated routine, skincare, haircare, makeup, fragrance, \
or other beauty-related topics. If a question is off-topic, politely respond \
that you can only assist with beauty-related topics.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// The conversation transcript. Invariant: it is never empty and index 0 is
/// always the system directive; no method removes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// A fresh conversation holding only the system directive.
    pub fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::System,
                content: SYSTEM_PROMPT.to_string(),
            }],
        }
    }

    /// Discard everything after the system directive. Used when a new
    /// routine is generated: prior Q&A does not carry over.
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    pub fn push_user(&mut self, content: String) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content,
        });
    }

    pub fn push_assistant(&mut self, content: String) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false in practice: the seeded system entry is never removed.
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::seeded()
    }
}

/// What the chat endpoint gets to see of a product: id and image stay out of
/// the request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
}

/// Resolve the selection into request-ready product data, in selection
/// order. Ids that do not resolve against the catalog are skipped.
pub fn routine_payload(selection: &Selection, products: &[Product]) -> Vec<RoutineProduct> {
    selection
        .iter()
        .filter_map(|id| products.iter().find(|p| &p.id == id))
        .map(|p| RoutineProduct {
            name: p.name.clone(),
            brand: p.brand.clone(),
            category: p.category.clone(),
            description: p.description.clone(),
        })
        .collect()
}

/// Build the user turn that asks for a routine from the selected products.
pub fn routine_prompt(payload: &[RoutineProduct]) -> String {
    let listing = serde_json::to_string_pretty(payload).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Here are my selected products: {}. Please generate a routine using only these products.",
        listing
    )
}
