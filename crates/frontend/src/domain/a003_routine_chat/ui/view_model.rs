//! Routine Chat - View Model

use contracts::domain::a003_routine_chat::SourceLink;
use leptos::prelude::*;

/// What the chat window currently shows. Loading and Reply carry the echoed
/// follow-up question, when there is one; validation messages, soft
/// failures and transport errors all land in Notice.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatSurface {
    Idle,
    Loading {
        question: Option<String>,
        notice: String,
    },
    Reply {
        question: Option<String>,
        html: String,
        sources: Vec<SourceLink>,
    },
    Notice(String),
}

#[derive(Clone, Copy)]
pub struct RoutineChatVm {
    pub surface: RwSignal<ChatSurface>,
    pub input: RwSignal<String>,
    request_seq: StoredValue<u64>,
}

impl RoutineChatVm {
    pub fn new() -> Self {
        Self {
            surface: RwSignal::new(ChatSurface::Idle),
            input: RwSignal::new(String::new()),
            request_seq: StoredValue::new(0),
        }
    }

    /// Take a token for a new request. A completion whose token is no
    /// longer current lost the race to a newer request and must be
    /// discarded instead of overwriting the chat window.
    pub fn begin_request(&self) -> u64 {
        let next = self.request_seq.get_value() + 1;
        self.request_seq.set_value(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.request_seq.get_value() == token
    }
}

impl Default for RoutineChatVm {
    fn default() -> Self {
        Self::new()
    }
}
