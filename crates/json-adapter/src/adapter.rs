//! The capability surface a validation engine sees.
//!
//! [`Adapter`] is object safe so that values coming from different parser
//! bindings can be compared against each other through `&dyn Adapter`. The
//! required methods are strict: they answer for the native kind only. The
//! provided `maybe_*`/`as_*` methods layer loose conversions on top, which a
//! schema parser uses to read keywords from loosely-typed documents.

use crate::{FrozenValue, NativeNumber, Result, ValueKind};

pub trait Adapter {
    fn is_array(&self) -> bool;
    fn is_bool(&self) -> bool;
    fn is_double(&self) -> bool;
    fn is_integer(&self) -> bool;
    fn is_null(&self) -> bool;
    fn is_number(&self) -> bool;
    fn is_object(&self) -> bool;
    fn is_string(&self) -> bool;

    fn get_bool(&self) -> Option<bool>;
    fn get_double(&self) -> Option<f64>;
    fn get_integer(&self) -> Option<i64>;
    fn get_number(&self) -> Option<NativeNumber>;
    fn get_string(&self) -> Option<String>;
    fn get_array_size(&self) -> Option<usize>;
    fn get_object_size(&self) -> Option<usize>;

    /// Call `f` on each array element in order.
    ///
    /// Returns `false` if this is not an array or if `f` returned `false`,
    /// which also stops the walk.
    fn apply_to_array(&self, f: &mut dyn FnMut(&dyn Adapter) -> bool) -> bool;

    /// Call `f` on each object member in order.
    ///
    /// Returns `false` if this is not an object or if `f` returned `false`,
    /// which also stops the walk.
    fn apply_to_object(&self, f: &mut dyn FnMut(&str, &dyn Adapter) -> bool) -> bool;

    fn freeze(&self) -> Result<Box<dyn FrozenValue>>;

    /// Structural equality against a value from any adapter.
    ///
    /// With `strict` unset, loose conversions apply: `"1"` equals `1`,
    /// `""` equals `null`, and so on.
    fn equal_to(&self, other: &dyn Adapter, strict: bool) -> bool;

    fn has_strict_types(&self) -> bool;

    fn kind(&self) -> ValueKind;

    fn maybe_array(&self) -> bool {
        self.is_array() || self.get_object_size() == Some(0)
    }

    fn maybe_object(&self) -> bool {
        self.is_object() || self.get_array_size() == Some(0)
    }

    fn maybe_bool(&self) -> bool {
        self.is_bool() || matches!(self.get_string().as_deref(), Some("true" | "false"))
    }

    fn maybe_null(&self) -> bool {
        self.is_null() || self.get_string().is_some_and(|s| s.is_empty())
    }

    fn maybe_double(&self) -> bool {
        self.is_number() || self.get_string().and_then(|s| parse_double(&s)).is_some()
    }

    fn maybe_integer(&self) -> bool {
        self.is_integer() || self.get_string().and_then(|s| parse_integer(&s)).is_some()
    }

    fn maybe_string(&self) -> bool {
        self.is_string()
            || self.is_bool()
            || self.is_number()
            || self.get_array_size() == Some(0)
            || self.get_object_size() == Some(0)
    }

    fn as_bool(&self) -> Option<bool> {
        if self.is_bool() {
            return self.get_bool();
        }
        match self.get_string()?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn as_double(&self) -> Option<f64> {
        if self.is_double() {
            self.get_double()
        } else if self.is_number() {
            self.get_number().map(|n| n.to_f64())
        } else {
            self.get_string().and_then(|s| parse_double(&s))
        }
    }

    fn as_integer(&self) -> Option<i64> {
        if self.is_integer() {
            self.get_integer()
        } else {
            self.get_string().and_then(|s| parse_integer(&s))
        }
    }

    /// Render scalars as text. Null and empty containers become `""`.
    fn as_string(&self) -> Option<String> {
        if self.is_string() {
            self.get_string()
        } else if self.is_null()
            || self.get_array_size() == Some(0)
            || self.get_object_size() == Some(0)
        {
            Some(String::new())
        } else if let Some(b) = self.get_bool() {
            Some(if b { "true" } else { "false" }.to_string())
        } else if let Some(i) = self.get_integer() {
            Some(i.to_string())
        } else {
            self.get_number().map(|n| match n {
                NativeNumber::Uint64(u) => u.to_string(),
                other => other.to_f64().to_string(),
            })
        }
    }
}

/// Parse the whole of `s` as a finite float; partial matches are rejected.
fn parse_double(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Parse the whole of `s` as a signed 64-bit integer.
fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}
