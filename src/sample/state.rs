use serde_json::Value;

use crate::page::StateMap;

pub const INPUT_TEXT: &str = "input_text";
pub const FEATURE_ON: &str = "feature_on";
pub const TONE: &str = "tone";

/// Writing tone offered by the select component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Formal,
    Friendly,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        &[Self::Neutral, Self::Formal, Self::Friendly]
    }

    /// Stable value stored in state and in the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Formal => "formal",
            Self::Friendly => "friendly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Neutral => "中性",
            Self::Formal => "专业",
            Self::Friendly => "活泼",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "neutral" => Some(Self::Neutral),
            "formal" => Some(Self::Formal),
            "friendly" => Some(Self::Friendly),
            _ => None,
        }
    }
}

/// Typed view of the sample page's persisted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleState {
    pub input_text: String,
    pub feature_on: bool,
    pub tone: Tone,
}

impl SampleState {
    /// Recover state from a persisted document, field by field.
    ///
    /// A non-object document yields the defaults. Otherwise each field that is
    /// missing, has the wrong JSON type, or is outside its enum falls back to
    /// its own default while valid fields are kept.
    pub fn recover(document: Option<&Value>) -> Self {
        let mut state = Self::default();
        let Some(Value::Object(fields)) = document else {
            return state;
        };

        match fields.get(INPUT_TEXT) {
            Some(Value::String(text)) => state.input_text = text.clone(),
            Some(other) => tracing::warn!(value = %other, "Invalid input_text, using default"),
            None => {}
        }
        match fields.get(FEATURE_ON) {
            Some(Value::Bool(on)) => state.feature_on = *on,
            Some(other) => tracing::warn!(value = %other, "Invalid feature_on, using default"),
            None => {}
        }
        if let Some(value) = fields.get(TONE) {
            match value.as_str().and_then(Tone::parse) {
                Some(tone) => state.tone = tone,
                None => tracing::warn!(%value, "Invalid tone, using default"),
            }
        }

        state
    }

    pub fn to_map(&self) -> StateMap {
        let mut map = StateMap::new();
        map.insert(INPUT_TEXT.into(), Value::String(self.input_text.clone()));
        map.insert(FEATURE_ON.into(), Value::Bool(self.feature_on));
        map.insert(TONE.into(), Value::String(self.tone.as_str().into()));
        map
    }
}
