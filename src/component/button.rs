use super::ComponentBase;

/// Style hint for a button. Hosts map it to their own visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }

    /// Parse a style hint. Blank or unknown input falls back to `Primary`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "secondary" => Self::Secondary,
            "danger" => Self::Danger,
            _ => Self::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub(super) base: ComponentBase,
    pub(super) style: ButtonStyle,
}

impl Button {
    pub fn new(id: impl AsRef<str>, label: impl AsRef<str>) -> Self {
        Self {
            base: ComponentBase::new(id, label),
            style: ButtonStyle::default(),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the style from an untrusted string, see [`ButtonStyle::parse`].
    pub fn style_hint(self, hint: impl AsRef<str>) -> Self {
        self.style(ButtonStyle::parse(hint.as_ref()))
    }

    pub fn current_style(&self) -> ButtonStyle {
        self.style
    }
}
