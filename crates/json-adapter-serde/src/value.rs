//! Value reference wrapper over `serde_json::Value`.

use std::sync::OnceLock;

use json_adapter::{FrozenValue, JsonValue, NativeNumber, Result, ValueKind};
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::{SerdeJsonArray, SerdeJsonFrozenValue, SerdeJsonObject};

/// Shared empty object referenced by default-constructed values.
pub(crate) fn empty_object() -> &'static Value {
    static EMPTY: OnceLock<Value> = OnceLock::new();
    EMPTY.get_or_init(|| Value::Object(Map::new()))
}

pub(crate) fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Classify a serde_json number into its most specific native encoding.
///
/// Returns `None` only when the number cannot be read as `i64`, `u64` or
/// `f64`, which can happen with the `arbitrary_precision` feature.
pub(crate) fn native_number(number: &Number) -> Option<NativeNumber> {
    if let Some(n) = number.as_i64() {
        Some(NativeNumber::from_i64(n))
    } else if let Some(n) = number.as_u64() {
        Some(NativeNumber::from_u64(n))
    } else {
        number.as_f64().map(NativeNumber::Double)
    }
}

/// Borrowed reference to one node of a `serde_json::Value` tree.
#[derive(Debug, Clone, Copy)]
pub struct SerdeJsonValue<'a> {
    value: &'a Value,
}

impl<'a> SerdeJsonValue<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying serde_json node.
    pub fn as_value(&self) -> &'a Value {
        self.value
    }

    fn number(&self) -> Option<&'a Number> {
        match self.value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl Default for SerdeJsonValue<'_> {
    fn default() -> Self {
        Self {
            value: empty_object(),
        }
    }
}

impl<'a> From<&'a Value> for SerdeJsonValue<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

impl<'a> JsonValue for SerdeJsonValue<'a> {
    type Array = SerdeJsonArray<'a>;
    type Object = SerdeJsonObject<'a>;

    fn is_array(&self) -> bool {
        self.value.is_array()
    }

    fn is_bool(&self) -> bool {
        self.value.is_boolean()
    }

    /// True for numbers whose native encoding is a float, including integer
    /// literals too large for `u64` under `arbitrary_precision`.
    fn is_double(&self) -> bool {
        matches!(self.get_number(), Some(NativeNumber::Double(_)))
    }

    fn is_integer(&self) -> bool {
        self.number().is_some_and(|n| n.is_i64() || n.is_u64())
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn is_number(&self) -> bool {
        self.value.is_number()
    }

    fn is_object(&self) -> bool {
        self.value.is_object()
    }

    fn is_string(&self) -> bool {
        self.value.is_string()
    }

    fn get_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    fn get_double(&self) -> Option<f64> {
        match self.get_number()? {
            NativeNumber::Double(d) => Some(d),
            _ => None,
        }
    }

    fn get_integer(&self) -> Option<i64> {
        let number = self.number()?;
        let native = native_number(number).filter(NativeNumber::is_integer)?;
        let widened = native.to_i64();
        if widened.is_none() {
            debug!(%number, "integer does not fit in i64");
        }
        widened
    }

    fn get_number(&self) -> Option<NativeNumber> {
        self.number().and_then(native_number)
    }

    fn get_string(&self) -> Option<String> {
        self.value.as_str().map(str::to_owned)
    }

    fn get_array_optional(&self) -> Option<SerdeJsonArray<'a>> {
        SerdeJsonArray::wrap(self.value)
    }

    fn get_object_optional(&self) -> Option<SerdeJsonObject<'a>> {
        SerdeJsonObject::wrap(self.value)
    }

    fn get_array_size(&self) -> Option<usize> {
        self.value.as_array().map(Vec::len)
    }

    fn get_object_size(&self) -> Option<usize> {
        self.value.as_object().map(Map::len)
    }

    fn freeze(&self) -> Result<Box<dyn FrozenValue>> {
        Ok(Box::new(SerdeJsonFrozenValue::new(self.value)?))
    }

    fn has_strict_types() -> bool {
        true
    }

    fn kind(&self) -> ValueKind {
        value_kind(self.value)
    }
}
