//! Sample configuration page.
//!
//! Edits a small configuration document (a text, a feature switch and a tone)
//! and persists it through a [`StateStore`] when the save button is clicked.

mod state;

pub use state::{SampleState, Tone, FEATURE_ON, INPUT_TEXT, TONE};

use serde_json::Value;

use crate::coerce::{stringify, stringify_opt, truthy, truthy_opt};
use crate::component::{Button, Component, Select, SelectOption, Switch, TextInput};
use crate::page::{to_page, Event, EventKind, Page, PageRecord, StateMap, TransitionTable};
use crate::storage::StateStore;

pub const SAVE_CONFIG: &str = "save_config";

pub const TITLE: &str = "示例工具插件配置";
pub const SUBTITLE: &str = "修改后点击“保存配置”持久化";

pub const MSG_INPUT_UPDATED: &str = "输入已更新";
pub const MSG_SWITCH_UPDATED: &str = "开关状态已更新";
pub const MSG_SELECT_UPDATED: &str = "下拉选项已更新";
pub const MSG_SAVED: &str = "配置已保存";
pub const MSG_SAVE_FAILED_PREFIX: &str = "保存失败";

/// Configuration page backed by an injected state store.
pub struct SamplePage<S> {
    store: S,
    transitions: TransitionTable<SamplePage<S>>,
}

impl<S: StateStore> SamplePage<S> {
    pub fn new(store: S) -> Self {
        let transitions = TransitionTable::<Self>::new()
            .on(EventKind::InputSubmit, INPUT_TEXT, submit_input)
            .on(EventKind::SwitchToggle, FEATURE_ON, toggle_feature)
            .on(EventKind::SelectChange, TONE, change_tone)
            .on(EventKind::ButtonClick, SAVE_CONFIG, save_config);

        Self { store, transitions }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted configuration, recovering each invalid field.
    pub fn load_saved_state(&self) -> SampleState {
        SampleState::recover(self.store.load().as_ref())
    }

    fn render(&self, state: StateMap, message: impl AsRef<str>) -> PageRecord {
        let components = components_for(&state);
        to_page(TITLE, SUBTITLE, components, Some(state), message)
    }
}

impl<S: StateStore> Page for SamplePage<S> {
    fn build(&self, payload: &Value) -> PageRecord {
        tracing::debug!(
            event = %stringify_opt(payload.get("event")),
            "Building sample page"
        );
        let state = self.load_saved_state();
        self.render(state.to_map(), "")
    }

    fn on_event(&self, event: &Event) -> PageRecord {
        let reduction = self.transitions.reduce(self, event);
        self.render(reduction.state, reduction.message)
    }
}

/// Components rendered for a state map.
///
/// The state may hold anything the host echoed back, so each value is
/// coerced rather than trusted.
fn components_for(state: &StateMap) -> Vec<Component> {
    let tone = state
        .get(TONE)
        .map(stringify)
        .unwrap_or_else(|| Tone::default().as_str().to_string());

    vec![
        TextInput::new(INPUT_TEXT, "输入文本")
            .placeholder("输入任意内容后点击发送")
            .value(stringify_opt(state.get(INPUT_TEXT)))
            .multiline(true)
            .into(),
        Switch::new(FEATURE_ON, "启用高级模式")
            .value(truthy_opt(state.get(FEATURE_ON)))
            .into(),
        Select::new(TONE, "语气风格")
            .options(
                Tone::all()
                    .iter()
                    .map(|tone| SelectOption::new(tone.label(), tone.as_str())),
            )
            .value(tone)
            .into(),
        Button::new(SAVE_CONFIG, "保存配置")
            .description("将当前配置保存到本地 config.json")
            .into(),
    ]
}

fn submit_input<S>(_: &SamplePage<S>, state: &mut StateMap, value: &Value) -> String {
    state.insert(INPUT_TEXT.into(), Value::String(stringify(value)));
    MSG_INPUT_UPDATED.to_string()
}

fn toggle_feature<S>(_: &SamplePage<S>, state: &mut StateMap, value: &Value) -> String {
    state.insert(FEATURE_ON.into(), Value::Bool(truthy(value)));
    MSG_SWITCH_UPDATED.to_string()
}

/// `null` becomes `""` here, not the default tone. Only loading validates the enum.
fn change_tone<S>(_: &SamplePage<S>, state: &mut StateMap, value: &Value) -> String {
    state.insert(TONE.into(), Value::String(stringify(value)));
    MSG_SELECT_UPDATED.to_string()
}

fn save_config<S: StateStore>(page: &SamplePage<S>, state: &mut StateMap, _: &Value) -> String {
    match page.store.save(state) {
        Ok(()) => MSG_SAVED.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to save configuration");
            format!("{MSG_SAVE_FAILED_PREFIX}: {e}")
        }
    }
}
