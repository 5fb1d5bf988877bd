use serde::Serialize;
use serde_json::Value;

use super::HookContext;
use crate::coerce::{stringify_opt, truthy_opt};

/// Appended to the assistant reply.
pub const SUFFIX: &str = "喵";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Replaces the assistant message on the host side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePatch {
    pub message: ChatMessage,
}

/// Append [`SUFFIX`] to the assistant reply once a response has been sent.
///
/// Returns `None` (no change) when no response text was produced, when the
/// user interrupted the response, or when `payload.message` is not an object.
pub fn chat_after_send(ctx: &HookContext) -> Option<MessagePatch> {
    let info = &ctx.payload;

    if !truthy_opt(info.get("responseStarted")) {
        tracing::info!("Skipping suffix: no response text was produced");
        return None;
    }
    if truthy_opt(info.get("interrupted")) {
        tracing::info!("Skipping suffix: response was interrupted");
        return None;
    }
    let Some(Value::Object(message)) = info.get("message") else {
        tracing::info!("Skipping suffix: payload.message is not an object");
        return None;
    };

    let content = stringify_opt(message.get("content"));
    let patched = format!("{content}{SUFFIX}");
    tracing::info!(
        before_len = content.chars().count(),
        after_len = patched.chars().count(),
        "Appended reply suffix"
    );

    Some(MessagePatch {
        message: ChatMessage {
            role: "assistant".to_string(),
            content: patched,
        },
    })
}
