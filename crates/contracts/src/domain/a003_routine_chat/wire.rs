//! Wire DTOs for the chat endpoint (OpenAI-style request/response shapes).

use super::aggregate::ChatMessage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<SourceLink>>,
    #[serde(default)]
    pub links: Option<Vec<SourceLink>>,
}

/// A cited source. The endpoint sends either a structured object or a bare
/// url string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SourceLink {
    Detailed { url: String, title: Option<String> },
    Bare(String),
}

impl SourceLink {
    pub fn url(&self) -> &str {
        match self {
            SourceLink::Detailed { url, .. } => url,
            SourceLink::Bare(url) => url,
        }
    }

    /// Visible label; falls back to the url when no title is given.
    pub fn label(&self) -> &str {
        match self {
            SourceLink::Detailed {
                title: Some(title), ..
            } => title,
            _ => self.url(),
        }
    }
}

/// Usable assistant output extracted from a response.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub content: String,
    pub sources: Vec<SourceLink>,
}

/// Pull the assistant reply out of a well-formed response. `None` means the
/// response carried no usable content (a soft failure, not a transport
/// error). `citations` takes precedence over `links` when both are present.
pub fn extract_reply(response: ChatResponse) -> Option<AssistantReply> {
    let message = response.choices.into_iter().next()?.message?;
    let content = message.content.filter(|c| !c.is_empty())?;
    let sources = message
        .citations
        .or(message.links)
        .unwrap_or_default();
    Some(AssistantReply { content, sources })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_the_endpoint_shape() {
        use super::super::aggregate::Conversation;
        let mut conversation = Conversation::seeded();
        conversation.push_user("hello".into());
        let request = ChatRequest {
            model: "gpt-4o-search-preview-2025-03-11",
            messages: conversation.messages(),
            max_tokens: 400,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(json["model"], "gpt-4o-search-preview-2025-03-11");
        assert_eq!(json["max_tokens"], 400);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn reply_with_structured_citations() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"ok","citations":[{"url":"http://x"}]}}]}"#,
        )
        .unwrap();
        let reply = extract_reply(response).unwrap();
        assert_eq!(reply.content, "ok");
        assert_eq!(reply.sources.len(), 1);
        assert_eq!(reply.sources[0].url(), "http://x");
        // no title: the label falls back to the url
        assert_eq!(reply.sources[0].label(), "http://x");
    }

    #[test]
    fn reply_with_bare_string_links() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"ok","links":["http://a","http://b"]}}]}"#,
        )
        .unwrap();
        let reply = extract_reply(response).unwrap();
        assert_eq!(reply.sources.len(), 2);
        assert_eq!(reply.sources[1].label(), "http://b");
    }

    #[test]
    fn citations_take_precedence_over_links() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"ok","citations":[{"url":"http://c","title":"C"}],"links":["http://l"]}}]}"#,
        )
        .unwrap();
        let reply = extract_reply(response).unwrap();
        assert_eq!(reply.sources.len(), 1);
        assert_eq!(reply.sources[0].label(), "C");
    }

    #[test]
    fn missing_content_is_a_soft_failure() {
        for raw in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":""}}]}"#,
        ] {
            let response: ChatResponse = serde_json::from_str(raw).unwrap();
            assert!(extract_reply(response).is_none(), "raw: {raw}");
        }
    }

    #[test]
    fn reply_without_sources_is_fine() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"hello"}}]}"#).unwrap();
        let reply = extract_reply(response).unwrap();
        assert_eq!(reply.content, "hello");
        assert!(reply.sources.is_empty());
    }
}
