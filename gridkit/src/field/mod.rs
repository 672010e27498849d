//! Text field engine - maps declarative field inputs to a display mode and
//! the set of affordances to show.
//!
//! The host owns the value. [`FieldState`] carries the two flags the host
//! does not declare (focus and password reveal) and turns [`FieldEvent`]s
//! into value changes for the host to store.

mod events;
mod kind;
mod props;
mod render;
mod state;

pub use events::{EventResult, FieldEvent, FieldResponse};
pub use kind::InputType;
pub use props::FieldProps;
pub use render::{Affordance, Affordances, DisplayMode, FieldProjection, project};
pub use state::FieldState;

