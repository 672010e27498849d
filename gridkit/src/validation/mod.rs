//! Built-in field validation.
//!
//! Only a fixed email-format rule is provided. Required-ness and custom
//! rules belong to the host.

mod email;

pub use email::{ValidationError, validate_email};
