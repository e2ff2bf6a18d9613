//! Per-parser value access.
//!
//! A parser binding implements [`JsonValue`] for a thin, copyable reference to
//! one of its nodes, plus [`ArrayView`] and [`ObjectView`] for the container
//! kinds. These traits cover only the mechanics of reading a node; the
//! semantics of conversions and comparisons live in
//! [`BasicAdapter`](crate::BasicAdapter).

use crate::{BasicAdapter, FrozenValue, NativeNumber, Result, ValueKind};

/// A `(key, value)` pair produced while iterating an object.
///
/// The key is an owned copy; the value still borrows from the document.
pub type ObjectMember<V> = (String, BasicAdapter<V>);

/// Read-only reference to one node of a parsed document.
///
/// `Default` must produce a reference to an empty object, never a dangling or
/// null state.
pub trait JsonValue: Clone + Default {
    type Array: ArrayView<Value = Self>;
    type Object: ObjectView<Value = Self>;

    fn is_array(&self) -> bool;
    fn is_bool(&self) -> bool;
    /// True only for numbers stored in floating-point form.
    fn is_double(&self) -> bool;
    /// True for any signed or unsigned 32/64-bit integer encoding.
    fn is_integer(&self) -> bool;
    fn is_null(&self) -> bool;
    /// True for any numeric encoding.
    fn is_number(&self) -> bool;
    fn is_object(&self) -> bool;
    fn is_string(&self) -> bool;

    fn get_bool(&self) -> Option<bool>;
    /// Value of a floating-point node. Integers are not converted.
    fn get_double(&self) -> Option<f64>;
    /// Value of an integer node widened to `i64`.
    fn get_integer(&self) -> Option<i64>;
    /// Any numeric node, in its native encoding.
    fn get_number(&self) -> Option<NativeNumber>;
    fn get_string(&self) -> Option<String>;

    fn get_array_optional(&self) -> Option<Self::Array>;
    fn get_object_optional(&self) -> Option<Self::Object>;
    fn get_array_size(&self) -> Option<usize>;
    fn get_object_size(&self) -> Option<usize>;

    /// Deep-copy the referenced node into storage owned by the caller.
    fn freeze(&self) -> Result<Box<dyn FrozenValue>>;

    /// Whether the parser keeps numbers, strings, booleans and null as
    /// distinct native kinds.
    fn has_strict_types() -> bool;

    fn kind(&self) -> ValueKind {
        if self.is_object() {
            ValueKind::Object
        } else if self.is_array() {
            ValueKind::Array
        } else if self.is_string() {
            ValueKind::String
        } else if self.is_number() {
            ValueKind::Number
        } else if self.is_bool() {
            ValueKind::Bool
        } else {
            ValueKind::Null
        }
    }
}

/// Sized, iterable, read-only view over an array node.
///
/// `Default` must produce an empty array view.
pub trait ArrayView: Clone + Default {
    type Value: JsonValue;
    type Iter: DoubleEndedIterator<Item = BasicAdapter<Self::Value>> + ExactSizeIterator;

    fn size(&self) -> usize;
    fn iter(&self) -> Self::Iter;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Sized, iterable, read-only view over an object node.
///
/// `Default` must produce an empty object view.
pub trait ObjectView: Clone + Default {
    type Value: JsonValue;
    type Iter: DoubleEndedIterator<Item = ObjectMember<Self::Value>> + ExactSizeIterator;

    fn size(&self) -> usize;
    fn iter(&self) -> Self::Iter;

    /// First member whose key matches `property` byte for byte.
    fn find(&self, property: &str) -> Option<ObjectMember<Self::Value>>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
