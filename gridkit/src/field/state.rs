use super::props::FieldProps;
use super::render::{FieldProjection, project};

/// Transient flags of a text field that the host does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldState {
    pub focused: bool,
    /// Password text shown in clear.
    pub revealed: bool,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the field as it should currently be drawn.
    pub fn project(&self, props: &FieldProps) -> FieldProjection {
        project(props, self)
    }
}
