use serde::Serialize;
use serde_json::Value;

use super::{Hook, HookContext};

/// Debug report returned by [`app_start`]. Has no effect on the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppStartReport {
    pub ok: bool,
    pub hook: &'static str,
    pub event: Value,
}

/// Kept trivial so it never slows down startup.
pub fn app_start(ctx: &HookContext) -> AppStartReport {
    AppStartReport {
        ok: true,
        hook: Hook::AppStart.as_str(),
        event: ctx.event.clone(),
    }
}
