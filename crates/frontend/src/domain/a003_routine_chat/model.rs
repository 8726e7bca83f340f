//! Routine Chat - Model (API functions)

use crate::shared::api_utils::{CHAT_ENDPOINT, CHAT_MODEL, MAX_TOKENS};
use contracts::domain::a003_routine_chat::{ChatMessage, ChatRequest, ChatResponse};

/// POST the conversation to the chat endpoint and parse the response.
pub async fn post_chat(messages: &[ChatMessage]) -> Result<ChatResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let dto = ChatRequest {
        model: CHAT_MODEL,
        messages,
        max_tokens: MAX_TOKENS,
    };
    let body = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(CHAT_ENDPOINT, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: ChatResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
