//! Declarative inputs of a text field.

use serde::{Deserialize, Serialize};

use crate::types::{Size, Variant};

use super::kind::InputType;

/// Everything the host says about a field on one update.
///
/// # Example
///
/// ```
/// use gridkit::field::{FieldProps, InputType};
///
/// let props = FieldProps::new("Password")
///     .input_type(InputType::Password)
///     .value("hunter2")
///     .clearable(true);
/// assert!(props.clearable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldProps {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub variant: Variant,
    pub size: Size,
    pub disabled: bool,
    /// Host-side invalid flag. The email check can also mark a field invalid.
    pub invalid: bool,
    pub loading: bool,
    pub clearable: bool,
    /// Offer a visibility toggle even when the type is not password.
    pub password_toggle: bool,
    /// Message shown while `invalid` is set.
    pub error: Option<String>,
}

impl FieldProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn password_toggle(mut self, password_toggle: bool) -> Self {
        self.password_toggle = password_toggle;
        self
    }

    /// Mark the field invalid with a message.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.invalid = true;
        self.error = Some(message.into());
        self
    }

    /// Whether the field responds to input.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }
}
