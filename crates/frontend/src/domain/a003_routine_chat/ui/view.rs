//! Routine Chat - View Component

use super::view_model::{ChatSurface, RoutineChatVm};
use crate::domain::a003_routine_chat::model::post_chat;
use crate::session::use_session;
use contracts::domain::a003_routine_chat::{
    extract_reply, routine_payload, routine_prompt, SourceLink,
};
use contracts::shared::markdown;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn RoutineChat() -> impl IntoView {
    let ctx = use_session();
    let vm = RoutineChatVm::new();

    let generate = move |_| {
        let payload = routine_payload(&ctx.selection.get(), &ctx.products());
        if payload.is_empty() {
            // Validation short-circuit: no network call, history untouched.
            vm.surface.set(ChatSurface::Notice(
                "Please select at least one product to generate a routine.".to_string(),
            ));
            return;
        }

        // A new routine starts a fresh conversation: prior Q&A is dropped.
        ctx.conversation.update_value(|c| {
            c.reset();
            c.push_user(routine_prompt(&payload));
        });
        vm.surface.set(ChatSurface::Loading {
            question: None,
            notice: "Generating your routine...".to_string(),
        });

        let token = vm.begin_request();
        let messages = ctx.conversation.with_value(|c| c.messages().to_vec());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post_chat(&messages).await;
            if !vm.is_current(token) {
                return;
            }
            match outcome {
                Ok(response) => match extract_reply(response) {
                    Some(reply) => {
                        ctx.conversation
                            .update_value(|c| c.push_assistant(reply.content.clone()));
                        vm.surface.set(ChatSurface::Reply {
                            question: None,
                            html: markdown::render(&reply.content),
                            sources: reply.sources,
                        });
                    }
                    None => vm.surface.set(ChatSurface::Notice(
                        "Sorry, I couldn't generate a routine. Please try again.".to_string(),
                    )),
                },
                Err(e) => vm.surface.set(ChatSurface::Notice(format!("Error: {e}"))),
            }
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let question = vm.input.get().trim().to_string();
        if question.is_empty() {
            // Silent no-op, not an error.
            return;
        }
        vm.input.set(String::new());

        ctx.conversation.update_value(|c| c.push_user(question.clone()));
        vm.surface.set(ChatSurface::Loading {
            question: Some(question.clone()),
            notice: "Thinking...".to_string(),
        });

        let token = vm.begin_request();
        let messages = ctx.conversation.with_value(|c| c.messages().to_vec());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post_chat(&messages).await;
            if !vm.is_current(token) {
                return;
            }
            match outcome {
                Ok(response) => match extract_reply(response) {
                    Some(reply) => {
                        ctx.conversation
                            .update_value(|c| c.push_assistant(reply.content.clone()));
                        vm.surface.set(ChatSurface::Reply {
                            question: Some(question),
                            html: markdown::render(&reply.content),
                            // sources are only shown for generated routines
                            sources: Vec::new(),
                        });
                    }
                    None => vm.surface.set(ChatSurface::Notice(
                        "Sorry, I couldn't answer that. Please try again.".to_string(),
                    )),
                },
                Err(e) => vm.surface.set(ChatSurface::Notice(format!("Error: {e}"))),
            }
        });
    };

    view! {
        <section class="routine-chat">
            <button class="generate-btn" on:click=generate>
                "Generate Routine"
            </button>
            <div class="chat-window">{move || render_surface(vm.surface.get())}</div>
            <form class="chat-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Ask a follow-up question..."
                    prop:value=move || vm.input.get()
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </section>
    }
}

fn render_surface(surface: ChatSurface) -> AnyView {
    match surface {
        ChatSurface::Idle => view! {
            <div class="placeholder-message">
                "Select products and generate a routine to get started"
            </div>
        }
        .into_any(),
        ChatSurface::Loading { question, notice } => view! {
            <>
                {question.map(question_view)}
                <div class="placeholder-message">{notice}</div>
            </>
        }
        .into_any(),
        ChatSurface::Reply {
            question,
            html,
            sources,
        } => view! {
            <>
                {question.map(question_view)}
                <div class="ai-response" inner_html=html></div>
                {sources_view(&sources)}
            </>
        }
        .into_any(),
        ChatSurface::Notice(text) => view! {
            <div class="placeholder-message">{text}</div>
        }
        .into_any(),
    }
}

fn question_view(question: String) -> AnyView {
    view! {
        <div class="user-question">
            <strong>"You: "</strong>
            {question}
        </div>
    }
    .into_any()
}

fn sources_view(sources: &[SourceLink]) -> AnyView {
    if sources.is_empty() {
        return view! { <></> }.into_any();
    }
    view! {
        <div class="ai-citations">
            <strong>"Sources:"</strong>
            <ul>
                {sources.iter().map(|link| view! {
                    <li>
                        <a href=link.url().to_string() target="_blank">
                            {link.label().to_string()}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
