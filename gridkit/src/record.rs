//! Record model: how the table reads fields out of caller-owned rows.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LoadError;

/// The runtime value of a single record field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Whether the value counts as present when used as a row key.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Int(n) => *n != 0,
            FieldValue::Float(f) => *f != 0.0 && !f.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 3,
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Total order used for sorting.
    ///
    /// Numbers compare by exact value across `Int` and `Float` with NaN after
    /// every other number. Different kinds order as
    /// `Bool < number < Text < Null`.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => compare_f64(*a, *b),
            (FieldValue::Int(a), FieldValue::Float(b)) => compare_int_float(*a, *b),
            (FieldValue::Float(a), FieldValue::Int(b)) => compare_int_float(*b, *a).reverse(),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(order) => order,
        // Unordered only when one side is NaN.
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

/// Compares without rounding `n` to the nearest float. Floats outside the
/// `i128` range saturate on the cast, which still orders them past every `i64`.
fn compare_int_float(n: i64, x: f64) -> Ordering {
    if x.is_nan() {
        return Ordering::Less;
    }
    let whole = x.trunc();
    match i128::from(n).cmp(&(whole as i128)) {
        Ordering::Equal if x > whole => Ordering::Less,
        Ordering::Equal if x < whole => Ordering::Greater,
        order => order,
    }
}

/// String coercion used for cell text. `Null` displays as the empty string.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map(FieldValue::Float).unwrap_or_default(),
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::from(&other),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(n.into())
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Trait for rows that can be shown in a table.
///
/// # Example
///
/// ```
/// use gridkit::{FieldValue, Record};
///
/// #[derive(Clone)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for User {
///     fn field(&self, key: &str) -> Option<FieldValue> {
///         match key {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record: Clone + Send + Sync + 'static {
    /// Read a field by key. `None` when the record has no such field.
    fn field(&self, key: &str) -> Option<FieldValue>;
}

impl Record for Map<String, Value> {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.get(key).map(FieldValue::from)
    }
}

/// Only JSON objects have fields; every other shape reads as empty.
impl Record for Value {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.as_object()
            .and_then(|object| object.get(key))
            .map(FieldValue::from)
    }
}

impl Record for HashMap<String, FieldValue> {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.get(key).cloned()
    }
}

/// Parse a JSON array of objects into records.
pub fn records_from_json(json: &str) -> Result<Vec<Map<String, Value>>, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(LoadError::NotAnArray(json_kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => Ok(object),
            _ => Err(LoadError::NotAnObject { index }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_conversion() {
        assert_eq!(FieldValue::from(&json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(&json!(3)), FieldValue::Int(3));
        assert_eq!(FieldValue::from(&json!(2.5)), FieldValue::Float(2.5));
        assert_eq!(FieldValue::from(&json!("x")), FieldValue::Text("x".into()));
        assert_eq!(
            FieldValue::from(&json!([1, 2])),
            FieldValue::Text("[1,2]".into())
        );
    }

    #[test]
    fn test_display_coerces_null_to_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::Int(-4).to_string(), "-4");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Float(1.0).to_string(), "1");
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            FieldValue::Int(2).compare(&FieldValue::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Float(f64::NAN).compare(&FieldValue::Int(100)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Int(3).compare(&FieldValue::Float(3.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_large_int_against_float_is_transitive() {
        // 2^53 + 1 has no exact f64 representation.
        let above = FieldValue::Int(9_007_199_254_740_993);
        let float = FieldValue::Float(9_007_199_254_740_992.0);
        let exact = FieldValue::Int(9_007_199_254_740_992);

        assert_eq!(above.compare(&float), Ordering::Greater);
        assert_eq!(float.compare(&above), Ordering::Less);
        assert_eq!(float.compare(&exact), Ordering::Equal);
        assert_eq!(above.compare(&exact), Ordering::Greater);
    }

    #[test]
    fn test_compare_int_float_edges() {
        let cases = [
            (FieldValue::Int(-2), FieldValue::Float(-2.5), Ordering::Greater),
            (FieldValue::Int(-3), FieldValue::Float(-2.5), Ordering::Less),
            (FieldValue::Int(2), FieldValue::Float(2.5), Ordering::Less),
            (FieldValue::Int(i64::MAX), FieldValue::Float(f64::INFINITY), Ordering::Less),
            (FieldValue::Int(i64::MIN), FieldValue::Float(f64::NEG_INFINITY), Ordering::Greater),
            (FieldValue::Int(i64::MAX), FieldValue::Float(9.3e18), Ordering::Less),
            (FieldValue::Int(0), FieldValue::Float(-0.0), Ordering::Equal),
        ];
        for (int, float, expected) in cases {
            assert_eq!(int.compare(&float), expected, "{:?} vs {:?}", int, float);
            assert_eq!(float.compare(&int), expected.reverse(), "{:?} vs {:?}", float, int);
        }
    }

    #[test]
    fn test_compare_float_nan_sorts_last() {
        let nan = FieldValue::Float(f64::NAN);
        assert_eq!(nan.compare(&FieldValue::Float(f64::INFINITY)), Ordering::Greater);
        assert_eq!(FieldValue::Float(1.0).compare(&nan), Ordering::Less);
        assert_eq!(nan.compare(&FieldValue::Float(f64::NAN)), Ordering::Equal);
        assert_eq!(FieldValue::Int(i64::MAX).compare(&nan), Ordering::Less);
    }

    #[test]
    fn test_compare_across_kinds() {
        assert_eq!(
            FieldValue::Bool(true).compare(&FieldValue::Int(0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Int(9).compare(&FieldValue::Text("1".into())),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("z".into()).compare(&FieldValue::Null),
            Ordering::Less
        );
    }

    #[test]
    fn test_record_for_json_value() {
        let row = json!({"id": 7, "name": "a"});
        assert_eq!(row.field("id"), Some(FieldValue::Int(7)));
        assert_eq!(row.field("missing"), None);
        assert_eq!(json!([1, 2]).field("id"), None);
    }

    #[test]
    fn test_records_from_json() {
        let rows = records_from_json(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].field("id"), Some(FieldValue::Int(2)));
    }

    #[test]
    fn test_records_from_json_rejects_bad_shapes() {
        assert!(matches!(
            records_from_json(r#"{"id": 1}"#),
            Err(LoadError::NotAnArray("an object"))
        ));
        assert!(matches!(
            records_from_json(r#"[{"id": 1}, 3]"#),
            Err(LoadError::NotAnObject { index: 1 })
        ));
        assert!(matches!(records_from_json("[1,"), Err(LoadError::Json(_))));
    }
}
