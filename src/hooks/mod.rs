//! Hook collaborators.
//!
//! A hook receives the host's event context and either does nothing (`null`)
//! or returns a small patch for the host to apply.

mod app_start;
mod chat_after_send;

pub use app_start::{app_start, AppStartReport};
pub use chat_after_send::{chat_after_send, ChatMessage, MessagePatch, SUFFIX};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DispatchError;

/// Context the host passes to every hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookContext {
    /// Event tag, e.g. `app_start`.
    #[serde(default)]
    pub event: Value,
    /// Event-specific fields.
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub timestamp: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    AppStart,
    ChatAfterSend,
}

impl Hook {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "app_start" => Some(Self::AppStart),
            "chat_after_send" => Some(Self::ChatAfterSend),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppStart => "app_start",
            Self::ChatAfterSend => "chat_after_send",
        }
    }
}

/// Run the named hook. A no-op hook result is `Value::Null`.
pub fn dispatch(name: &str, ctx: &HookContext) -> Result<Value, DispatchError> {
    let hook = Hook::parse(name).ok_or_else(|| DispatchError::UnknownHook(name.to_string()))?;
    tracing::debug!(hook = hook.as_str(), "Running hook");

    let result = match hook {
        Hook::AppStart => serde_json::to_value(app_start(ctx))?,
        Hook::ChatAfterSend => match chat_after_send(ctx) {
            Some(patch) => serde_json::to_value(patch)?,
            None => Value::Null,
        },
    };
    Ok(result)
}
