//! Structural equality across adapters.

use crate::{Adapter, ArrayView, BasicAdapter, JsonValue, ObjectView};

/// Compare `this` with a value from any adapter.
///
/// Kinds are tried in a fixed order: null, bool, number, string, array,
/// object. In non-strict mode each step accepts values that only loosely
/// convert to the kind, so `"true"` equals `true` and `"2"` equals `2`.
/// Containers recurse with the same strictness; object members are matched
/// by exact key regardless of order. A number compared with a numeric
/// string is matched as an `i64` when both sides read as one, and as an `f64`
/// otherwise.
pub(crate) fn equal_to<V: JsonValue>(
    this: &BasicAdapter<V>,
    other: &dyn Adapter,
    strict: bool,
) -> bool {
    if this.is_null() || (!strict && this.maybe_null()) {
        return other.is_null() || (!strict && other.maybe_null());
    }

    if this.is_bool() || (!strict && this.maybe_bool()) {
        return (other.is_bool() || (!strict && other.maybe_bool()))
            && other.as_bool() == this.as_bool();
    }

    if strict && this.is_number() {
        return match (this.get_number(), other.get_number()) {
            (Some(a), Some(b)) => a.value_eq(&b),
            _ => false,
        };
    }

    if !strict && this.maybe_double() {
        if !other.maybe_double() {
            return false;
        }
        if let (Some(a), Some(b)) = (this.get_number(), other.get_number()) {
            return a.value_eq(&b);
        }
        if let (Some(a), Some(b)) = (this.as_integer(), other.as_integer()) {
            return a == b;
        }
        return match (this.as_double(), other.as_double()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
    }

    if !strict && this.maybe_integer() {
        return other.maybe_integer() && other.as_integer() == this.as_integer();
    }

    if this.is_string() || (!strict && this.maybe_string()) {
        return (other.is_string() || (!strict && other.maybe_string()))
            && other.as_string() == this.as_string();
    }

    if let Some(array) = this.get_array_optional() {
        return other.get_array_size() == Some(array.size()) && {
            let mut elements = array.iter();
            other.apply_to_array(&mut |theirs| match elements.next() {
                Some(ours) => ours.equal_to(theirs, strict),
                None => false,
            })
        };
    }

    if let Some(object) = this.get_object_optional() {
        return other.get_object_size() == Some(object.size())
            && other.apply_to_object(&mut |name, theirs| match object.find(name) {
                Some((_, ours)) => ours.equal_to(theirs, strict),
                None => false,
            });
    }

    false
}
