//! External endpoint configuration.

/// Catalog resource, served next to the page.
pub const PRODUCTS_URL: &str = "products.json";

/// Chat proxy endpoint (a worker holding the API key; the page never sees it).
pub const CHAT_ENDPOINT: &str = "https://routine-chat-proxy.workers.dev/";

pub const CHAT_MODEL: &str = "gpt-4o-search-preview-2025-03-11";

pub const MAX_TOKENS: u32 = 400;
