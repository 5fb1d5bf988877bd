//! Tool collaborators.
//!
//! A tool takes a JSON argument map and returns a JSON result for the host
//! to hand back to the model.

mod echo;

pub use echo::{echo, EchoResult, ECHO_TOOL};

use serde_json::Value;

use crate::error::DispatchError;

/// Run the named tool with `args`.
pub fn dispatch(name: &str, args: &Value) -> Result<Value, DispatchError> {
    match name.trim() {
        ECHO_TOOL => Ok(serde_json::to_value(echo(args))?),
        other => Err(DispatchError::UnknownTool(other.to_string())),
    }
}
