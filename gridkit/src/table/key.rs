//! Row identity: stable keys that survive re-sorting and re-rendering.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

/// Identifier of a row within one data set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Number(n) => write!(f, "{}", n),
            RowKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowKey {
    fn from(n: i64) -> Self {
        RowKey::Number(n)
    }
}

impl From<usize> for RowKey {
    fn from(n: usize) -> Self {
        RowKey::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for RowKey {
    fn from(s: &str) -> Self {
        RowKey::Text(s.to_string())
    }
}

impl From<String> for RowKey {
    fn from(s: String) -> Self {
        RowKey::Text(s)
    }
}

/// Largest magnitude at which every integral `f64` is exact.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

impl RowKey {
    /// Key for a truthy field value; `None` for values that fall back to the index.
    fn from_field(value: FieldValue) -> Option<RowKey> {
        if !value.is_truthy() {
            return None;
        }
        Some(match value {
            FieldValue::Int(n) => RowKey::Number(n),
            FieldValue::Float(x) if x.fract() == 0.0 && x.abs() < MAX_EXACT_FLOAT => {
                RowKey::Number(x as i64)
            }
            FieldValue::Text(s) => RowKey::Text(s),
            other => RowKey::Text(other.to_string()),
        })
    }
}

/// Custom key extractor.
pub type KeyFn<R> = Arc<dyn Fn(&R) -> RowKey + Send + Sync>;

/// How a row's key is derived.
#[derive(Clone)]
pub enum KeySelector<R> {
    /// Read the named field, falling back to the row index when it is
    /// absent or falsy.
    Field(String),
    /// Call a function; its result is trusted as-is.
    Func(KeyFn<R>),
}

/// Field name read by the default selector.
pub const DEFAULT_KEY_FIELD: &str = "id";

impl<R> Default for KeySelector<R> {
    fn default() -> Self {
        KeySelector::Field(DEFAULT_KEY_FIELD.to_string())
    }
}

impl<R> fmt::Debug for KeySelector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            KeySelector::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl<R: Record> KeySelector<R> {
    pub fn field(name: impl Into<String>) -> Self {
        KeySelector::Field(name.into())
    }

    pub fn func(f: impl Fn(&R) -> RowKey + Send + Sync + 'static) -> Self {
        KeySelector::Func(Arc::new(f))
    }

    /// Resolve the key of `record` sitting at `index`.
    pub fn resolve(&self, record: &R, index: usize) -> RowKey {
        match self {
            KeySelector::Func(f) => f(record),
            KeySelector::Field(name) => record
                .field(name)
                .and_then(RowKey::from_field)
                .unwrap_or_else(|| RowKey::from(index)),
        }
    }

    /// Key used for membership tests, where no position is known.
    pub fn membership_key(&self, record: &R) -> RowKey {
        self.resolve(record, 0)
    }
}

/// Resolve the key of `record` sitting at `index`.
pub fn resolve<R: Record>(record: &R, index: usize, selector: &KeySelector<R>) -> RowKey {
    selector.resolve(record, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_field_key() {
        let selector = KeySelector::<Value>::default();
        assert_eq!(selector.resolve(&json!({"id": 12}), 0), RowKey::Number(12));
        assert_eq!(
            selector.resolve(&json!({"id": "abc"}), 0),
            RowKey::Text("abc".into())
        );
        assert_eq!(selector.resolve(&json!({"id": 4.0}), 9), RowKey::Number(4));
        assert_eq!(
            selector.resolve(&json!({"id": 4.5}), 9),
            RowKey::Text("4.5".into())
        );
    }

    #[test]
    fn test_falsy_field_falls_back_to_index() {
        let selector = KeySelector::<Value>::default();
        for row in [
            json!({"name": "x"}),
            json!({"id": null}),
            json!({"id": 0}),
            json!({"id": ""}),
            json!({"id": false}),
        ] {
            assert_eq!(selector.resolve(&row, 2), RowKey::Number(2));
        }
    }

    #[test]
    fn test_custom_field_and_func() {
        let by_email = KeySelector::<Value>::field("email");
        assert_eq!(
            by_email.resolve(&json!({"id": 1, "email": "a@b.c"}), 0),
            RowKey::Text("a@b.c".into())
        );

        let constant = KeySelector::<Value>::func(|_| RowKey::Number(0));
        assert_eq!(constant.resolve(&json!({"id": 5}), 3), RowKey::Number(0));
    }

    #[test]
    fn test_debug_hides_function() {
        let selector = KeySelector::<Value>::func(|_| RowKey::Number(1));
        assert_eq!(format!("{:?}", selector), "Func(..)");
        assert_eq!(
            format!("{:?}", KeySelector::<Value>::default()),
            "Field(\"id\")"
        );
    }
}
