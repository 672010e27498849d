//! Projection of field inputs into display mode and affordances.

use crate::types::{Size, Variant};
use crate::validation::validate_email;

use super::kind::InputType;
use super::props::FieldProps;
use super::state::FieldState;

/// A control shown inside the field only in some states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    Clear,
    ToggleVisibility,
    BusyIndicator,
}

/// Which affordances are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub clear: bool,
    pub toggle_visibility: bool,
    pub busy_indicator: bool,
}

impl Affordances {
    pub fn contains(&self, affordance: Affordance) -> bool {
        match affordance {
            Affordance::Clear => self.clear,
            Affordance::ToggleVisibility => self.toggle_visibility,
            Affordance::BusyIndicator => self.busy_indicator,
        }
    }

    /// Visible affordances in trailing-edge order.
    pub fn visible(&self) -> Vec<Affordance> {
        [
            Affordance::Clear,
            Affordance::ToggleVisibility,
            Affordance::BusyIndicator,
        ]
        .into_iter()
        .filter(|a| self.contains(*a))
        .collect()
    }
}

/// Discrete display mode, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Disabled,
    Loading,
    Invalid,
    Focused,
    Idle,
}

/// Everything a renderer needs to draw the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProjection {
    pub mode: DisplayMode,
    /// Input kind to render; a revealed password renders as text.
    pub effective_kind: InputType,
    pub affordances: Affordances,
    pub invalid: bool,
    /// Message to show under the field.
    pub error: Option<String>,
    pub variant: Variant,
    pub size: Size,
}

/// Project `props` and transient `state` into a display description.
pub fn project(props: &FieldProps, state: &FieldState) -> FieldProjection {
    let interactive = props.is_interactive();
    let affordances = Affordances {
        clear: props.clearable && !props.value.is_empty() && interactive,
        toggle_visibility: (props.password_toggle || props.input_type.is_masked()) && interactive,
        busy_indicator: props.loading,
    };

    let effective_kind = if props.input_type.is_masked() && state.revealed {
        InputType::Text
    } else {
        props.input_type
    };

    let email_error = match props.input_type {
        InputType::Email => validate_email(&props.value).err(),
        _ => None,
    };
    let invalid = props.invalid || email_error.is_some();
    let error = props
        .error
        .clone()
        .filter(|_| props.invalid)
        .or_else(|| email_error.map(|e| e.to_string()));

    let mode = if props.disabled {
        DisplayMode::Disabled
    } else if props.loading {
        DisplayMode::Loading
    } else if invalid {
        DisplayMode::Invalid
    } else if state.focused {
        DisplayMode::Focused
    } else {
        DisplayMode::Idle
    };

    FieldProjection {
        mode,
        effective_kind,
        affordances,
        invalid,
        error,
        variant: props.variant,
        size: props.size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_order() {
        let affordances = Affordances {
            clear: true,
            toggle_visibility: false,
            busy_indicator: true,
        };
        assert_eq!(
            affordances.visible(),
            vec![Affordance::Clear, Affordance::BusyIndicator]
        );
    }

    #[test]
    fn test_host_error_only_shown_when_invalid() {
        let mut props = FieldProps::new("Name").error("Required");
        props.invalid = false;
        let projection = project(&props, &FieldState::default());
        assert!(!projection.invalid);
        assert_eq!(projection.error, None);
    }
}
