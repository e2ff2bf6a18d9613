//! Generic composition of a parser binding into an [`Adapter`].
//!
//! `BasicAdapter` owns the semantics so every binding behaves the same way;
//! the wrapped [`JsonValue`] only supplies the mechanics of reading a node.

use tracing::debug;

use crate::equal::equal_to;
use crate::{
    Adapter, AdapterError, AdapterTraits, ArrayView, FrozenValue, JsonValue, NativeNumber,
    ObjectView, Result, ValueKind,
};

/// Adapter over any [`JsonValue`] implementation.
///
/// `Default` wraps the binding's default value, an empty object.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAdapter<V> {
    value: V,
}

impl<V: JsonValue> BasicAdapter<V> {
    pub fn new(value: impl Into<V>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The wrapped value reference.
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Array view, failing if the value is not natively an array.
    pub fn get_array(&self) -> Result<V::Array> {
        self.value.get_array_optional().ok_or_else(|| {
            let kind = self.value.kind();
            debug!(%kind, "array view requested over non-array value");
            AdapterError::NotAnArray(kind)
        })
    }

    /// Object view, failing if the value is not natively an object.
    pub fn get_object(&self) -> Result<V::Object> {
        self.value.get_object_optional().ok_or_else(|| {
            let kind = self.value.kind();
            debug!(%kind, "object view requested over non-object value");
            AdapterError::NotAnObject(kind)
        })
    }

    /// Array view, also accepting an empty object as an empty array.
    pub fn as_array(&self) -> Result<V::Array> {
        if let Some(array) = self.value.get_array_optional() {
            return Ok(array);
        }
        if self.value.get_object_size() == Some(0) {
            return Ok(V::Array::default());
        }
        Err(AdapterError::NotAnArray(self.value.kind()))
    }

    /// Object view, also accepting an empty array as an empty object.
    pub fn as_object(&self) -> Result<V::Object> {
        if let Some(object) = self.value.get_object_optional() {
            return Ok(object);
        }
        if self.value.get_array_size() == Some(0) {
            return Ok(V::Object::default());
        }
        Err(AdapterError::NotAnObject(self.value.kind()))
    }

    pub fn get_array_optional(&self) -> Option<V::Array> {
        self.value.get_array_optional()
    }

    pub fn get_object_optional(&self) -> Option<V::Object> {
        self.value.get_object_optional()
    }
}

impl<V: JsonValue> From<V> for BasicAdapter<V> {
    fn from(value: V) -> Self {
        Self { value }
    }
}

impl<V: JsonValue + AdapterTraits> AdapterTraits for BasicAdapter<V> {
    type Document = V::Document;

    fn adapter_name() -> &'static str {
        V::adapter_name()
    }

    fn parse_document(text: &str) -> Result<Self::Document> {
        V::parse_document(text)
    }
}

impl<V: JsonValue> Adapter for BasicAdapter<V> {
    fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    fn is_array(&self) -> bool {
        self.value.is_array()
    }

    fn is_bool(&self) -> bool {
        self.value.is_bool()
    }

    fn is_double(&self) -> bool {
        self.value.is_double()
    }

    fn is_integer(&self) -> bool {
        self.value.is_integer()
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
        self.value.get_bool()
    }

    fn get_double(&self) -> Option<f64> {
        self.value.get_double()
    }

    fn get_integer(&self) -> Option<i64> {
        self.value.get_integer()
    }

    fn get_number(&self) -> Option<NativeNumber> {
        self.value.get_number()
    }

    fn get_string(&self) -> Option<String> {
        self.value.get_string()
    }

    fn get_array_size(&self) -> Option<usize> {
        self.value.get_array_size()
    }

    fn get_object_size(&self) -> Option<usize> {
        self.value.get_object_size()
    }

    fn apply_to_array(&self, f: &mut dyn FnMut(&dyn Adapter) -> bool) -> bool {
        let Some(array) = self.value.get_array_optional() else {
            return false;
        };
        array.iter().all(|element| f(&element))
    }

    fn apply_to_object(&self, f: &mut dyn FnMut(&str, &dyn Adapter) -> bool) -> bool {
        let Some(object) = self.value.get_object_optional() else {
            return false;
        };
        object.iter().all(|(name, value)| f(&name, &value))
    }

    fn freeze(&self) -> Result<Box<dyn FrozenValue>> {
        self.value.freeze()
    }

    fn equal_to(&self, other: &dyn Adapter, strict: bool) -> bool {
        equal_to(self, other, strict)
    }

    fn has_strict_types(&self) -> bool {
        V::has_strict_types()
    }
}
