//! Event handling for the text field.

use log::{debug, trace};

use super::props::FieldProps;
use super::render::project;
use super::state::FieldState;

/// Whether an event had any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// User interaction with the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    /// The user edited the text.
    Input(String),
    /// The clear affordance was activated.
    Clear,
    /// The visibility toggle was activated.
    ToggleReveal,
}

/// Outcome of handling a field event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResponse {
    pub result: EventResult,
    /// New value for the host to store, when the value changed.
    pub value: Option<String>,
}

impl FieldResponse {
    fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            value: None,
        }
    }

    fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            value: None,
        }
    }

    fn changed(value: String) -> Self {
        Self {
            result: EventResult::Consumed,
            value: Some(value),
        }
    }
}

impl FieldState {
    /// Apply `event` under `props`.
    ///
    /// Disabled and loading fields ignore everything except blur.
    pub fn handle(&mut self, props: &FieldProps, event: FieldEvent) -> FieldResponse {
        if !props.is_interactive() && event != FieldEvent::Blur {
            trace!("[field] '{}' ignoring {:?}", props.label, event);
            return FieldResponse::ignored();
        }

        match event {
            FieldEvent::Focus => {
                self.focused = true;
                FieldResponse::consumed()
            }
            FieldEvent::Blur => {
                if !self.focused {
                    return FieldResponse::ignored();
                }
                self.focused = false;
                FieldResponse::consumed()
            }
            FieldEvent::Input(value) => {
                if value == props.value {
                    return FieldResponse::consumed();
                }
                FieldResponse::changed(value)
            }
            FieldEvent::Clear => {
                if !project(props, self).affordances.clear {
                    return FieldResponse::ignored();
                }
                debug!("[field] '{}' cleared", props.label);
                self.focused = true;
                FieldResponse::changed(String::new())
            }
            FieldEvent::ToggleReveal => {
                if !project(props, self).affordances.toggle_visibility {
                    return FieldResponse::ignored();
                }
                self.revealed = !self.revealed;
                debug!("[field] '{}' revealed: {}", props.label, self.revealed);
                FieldResponse::consumed()
            }
        }
    }

    /// Value after the clear affordance is activated.
    pub fn clear(&self, props: &FieldProps) -> String {
        if project(props, self).affordances.clear {
            String::new()
        } else {
            props.value.clone()
        }
    }
}
