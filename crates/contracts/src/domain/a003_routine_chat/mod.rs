pub mod aggregate;
pub mod wire;

pub use aggregate::{
    routine_payload, routine_prompt, ChatMessage, ChatRole, Conversation, RoutineProduct,
};
pub use wire::{extract_reply, AssistantReply, ChatRequest, ChatResponse, SourceLink};
