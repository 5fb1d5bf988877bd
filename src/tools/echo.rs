use serde::Serialize;
use serde_json::Value;

use crate::coerce::stringify_opt;

pub const ECHO_TOOL: &str = "sample_echo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoResult {
    pub ok: bool,
    pub tool: &'static str,
    pub echo: String,
    /// Length in characters, not bytes.
    pub length: usize,
}

/// Echo `args.text` back. Non-string input is stringified; missing is `""`.
pub fn echo(args: &Value) -> EchoResult {
    let text = stringify_opt(args.get("text"));
    EchoResult {
        ok: true,
        tool: ECHO_TOOL,
        length: text.chars().count(),
        echo: text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_characters() {
        let result = echo(&json!({"text": "你好"}));
        assert_eq!(result.echo, "你好");
        assert_eq!(result.length, 2);
    }

    #[test]
    fn stringifies_non_string_text() {
        assert_eq!(echo(&json!({"text": 12})).echo, "12");
        assert_eq!(echo(&json!({})).echo, "");
        assert_eq!(echo(&json!(null)).length, 0);
    }
}
