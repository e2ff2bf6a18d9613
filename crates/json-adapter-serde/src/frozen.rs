//! Owned deep copies of serde_json values.

use json_adapter::{Adapter, AdapterError, FrozenValue, NativeNumber, Result};
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::value::native_number;
use crate::SerdeJsonAdapter;

/// A serde_json value copied out of its source document.
///
/// The copy shares nothing with the source, so it stays valid and equal to
/// the original after the source document has been dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SerdeJsonFrozenValue {
    value: Value,
}

impl SerdeJsonFrozenValue {
    /// Deep-copy `source`.
    ///
    /// Fails without producing a partial copy if any number in the tree has
    /// no native encoding.
    pub fn new(source: &Value) -> Result<Self> {
        match copy(source) {
            Ok(value) => Ok(Self { value }),
            Err(err) => {
                debug!(error = %err, "freeze failed");
                Err(err)
            }
        }
    }

    /// Frozen string constant.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self {
            value: Value::String(s.into()),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Live adapter over the frozen content.
    pub fn adapter(&self) -> SerdeJsonAdapter<'_> {
        SerdeJsonAdapter::new(&self.value)
    }
}

impl From<&str> for SerdeJsonFrozenValue {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for SerdeJsonFrozenValue {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl FrozenValue for SerdeJsonFrozenValue {
    fn clone_boxed(&self) -> Box<dyn FrozenValue> {
        Box::new(self.clone())
    }

    fn equal_to(&self, other: &dyn Adapter, strict: bool) -> bool {
        self.adapter().equal_to(other, strict)
    }
}

fn copy(source: &Value) -> Result<Value> {
    Ok(match source {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(copy_number(n)?),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(elements) => Value::Array(
            elements
                .iter()
                .map(copy)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(members) => {
            let mut dest = Map::new();
            for (key, value) in members {
                dest.insert(key.clone(), copy(value)?);
            }
            Value::Object(dest)
        }
    })
}

fn copy_number(n: &Number) -> Result<Number> {
    let native = native_number(n)
        .ok_or_else(|| AdapterError::Freeze(format!("number {n} has no native encoding")))?;
    Ok(match native {
        NativeNumber::Int32(v) => Number::from(v),
        NativeNumber::Uint32(v) => Number::from(v),
        NativeNumber::Int64(v) => Number::from(v),
        NativeNumber::Uint64(v) => Number::from(v),
        NativeNumber::Double(v) => Number::from_f64(v)
            .ok_or_else(|| AdapterError::Freeze(format!("non-finite number {v}")))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copy_preserves_structure() {
        let doc = json!({"a": [1, -2, 3.25, "x", null, true], "b": {"c": {}}});
        let frozen = SerdeJsonFrozenValue::new(&doc).unwrap();
        assert_eq!(frozen.value(), &doc);
    }

    #[test]
    fn copy_is_independent_of_source() {
        let frozen = {
            let doc = json!({"list": ["a", "b"]});
            SerdeJsonFrozenValue::new(&doc).unwrap()
        };
        assert_eq!(frozen.into_value(), json!({"list": ["a", "b"]}));
    }

    #[test]
    fn numbers_keep_their_values() {
        for doc in [
            json!(i64::MAX),
            json!(i64::MIN),
            json!(u64::MAX),
            json!(u32::MAX),
            json!(1.5),
            json!(-0.25),
        ] {
            let frozen = SerdeJsonFrozenValue::new(&doc).unwrap();
            assert_eq!(frozen.value(), &doc);
        }
    }

    #[test]
    fn from_string_builds_constant() {
        let frozen = SerdeJsonFrozenValue::from("abc");
        assert_eq!(frozen.value(), &json!("abc"));
        let other = json!("abc");
        assert!(frozen.equal_to(&SerdeJsonAdapter::new(&other), true));
    }

    #[test]
    fn clone_boxed_is_equal_copy() {
        let doc = json!([1, {"k": "v"}]);
        let frozen: Box<dyn FrozenValue> = Box::new(SerdeJsonFrozenValue::new(&doc).unwrap());
        let cloned = frozen.clone();
        assert!(cloned.equal_to(&SerdeJsonAdapter::new(&doc), true));
    }
}
