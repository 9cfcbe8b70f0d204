use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The control kinds a form field can be. Populate and Commit dispatch on
/// these explicitly instead of probing control names at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    Text,
    Password,
    Hidden,
    TextArea,
    Radio,
    Checkbox,
    Select,
}

impl ControlKind {
    /// The kinds Commit reads a scalar from, in application order. When
    /// one field name matches several of these, the last one applied
    /// wins. A radio group contributes only while one of its buttons is
    /// checked.
    pub const COMMIT_CHAIN: [ControlKind; 5] = [
        ControlKind::Text,
        ControlKind::Password,
        ControlKind::Hidden,
        ControlKind::Radio,
        ControlKind::TextArea,
    ];

    /// Parse a control kind name (case-insensitive) into a ControlKind variant.
    pub fn from_name(name: &str) -> Option<ControlKind> {
        match name.to_lowercase().as_str() {
            "text" => Some(ControlKind::Text),
            "password" => Some(ControlKind::Password),
            "hidden" => Some(ControlKind::Hidden),
            "textarea" => Some(ControlKind::TextArea),
            "radio" => Some(ControlKind::Radio),
            "checkbox" => Some(ControlKind::Checkbox),
            "select" => Some(ControlKind::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Password => "password",
            ControlKind::Hidden => "hidden",
            ControlKind::TextArea => "textarea",
            ControlKind::Radio => "radio",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Select => "select",
        }
    }

    /// Kinds whose current value is free-form text.
    pub fn is_scalar_input(&self) -> bool {
        matches!(
            self,
            ControlKind::Text | ControlKind::Password | ControlKind::Hidden | ControlKind::TextArea
        )
    }

    /// Kinds with a fixed value attribute and a checked flag.
    pub fn is_toggle(&self) -> bool {
        matches!(self, ControlKind::Radio | ControlKind::Checkbox)
    }

    /// Kinds Commit reads back as an ordered collection.
    pub fn collects(&self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::Select)
    }
}

/// One entry of a select control's option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }
}

/// An input-like form control. `value` is the current text for scalar
/// kinds and the fixed value attribute for radio/checkbox; `checked`,
/// `options`, and `multiple` only apply to the kinds that use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: Uuid,
    pub name: String,
    pub kind: ControlKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub multiple: bool,
}

impl Control {
    fn with_kind(kind: ControlKind, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
            options: Vec::new(),
            multiple: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::with_kind(ControlKind::Text, name)
    }

    pub fn password(name: impl Into<String>) -> Self {
        Self::with_kind(ControlKind::Password, name)
    }

    pub fn hidden(name: impl Into<String>) -> Self {
        Self::with_kind(ControlKind::Hidden, name)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::with_kind(ControlKind::TextArea, name)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut control = Self::with_kind(ControlKind::Radio, name);
        control.value = value.into();
        control
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut control = Self::with_kind(ControlKind::Checkbox, name);
        control.value = value.into();
        control
    }

    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let mut control = Self::with_kind(ControlKind::Select, name);
        control.options = options;
        control
    }

    pub fn multi_select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let mut control = Self::select(name, options);
        control.multiple = true;
        control
    }

    /// The value this control currently holds, as a single string. For a
    /// select this is the first selected option's value, or empty.
    pub fn current_value(&self) -> String {
        match self.kind {
            ControlKind::Select => self
                .options
                .iter()
                .find(|o| o.selected)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
            _ => self.value.clone(),
        }
    }

    /// Writes a scalar into this control the way its kind accepts it:
    /// scalar inputs take the text, toggles check themselves when their
    /// value attribute matches, selects mark the matching option.
    pub fn set_current_value(&mut self, value: &str) {
        match self.kind {
            ControlKind::Text | ControlKind::Password | ControlKind::Hidden | ControlKind::TextArea => {
                self.value = value.to_string();
            }
            ControlKind::Radio | ControlKind::Checkbox => {
                if self.value == value {
                    self.checked = true;
                }
            }
            ControlKind::Select => self.select_value(value),
        }
    }

    /// Marks any option whose value matches as selected. No-op when no
    /// option matches.
    pub fn select_value(&mut self, value: &str) {
        for option in &mut self.options {
            if option.value == value {
                option.selected = true;
            }
        }
    }

    /// Values of all selected options, in option-list order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }

    /// Resets the control to its empty/unselected state. Value attributes
    /// of toggles and the option list of selects are kept.
    pub fn clear(&mut self) {
        match self.kind {
            ControlKind::Text | ControlKind::Password | ControlKind::Hidden | ControlKind::TextArea => {
                self.value.clear();
            }
            ControlKind::Radio | ControlKind::Checkbox => {
                self.checked = false;
            }
            ControlKind::Select => {
                for option in &mut self.options {
                    option.selected = false;
                }
            }
        }
    }
}
