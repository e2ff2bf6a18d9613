//! Array view and element iterator.

use std::iter::FusedIterator;
use std::slice;

use json_adapter::{AdapterError, ArrayView, Result};
use serde_json::Value;
use tracing::debug;

use crate::value::value_kind;
use crate::{SerdeJsonAdapter, SerdeJsonValue};

/// Read-only view over the elements of a serde_json array.
///
/// The default view borrows a shared empty slice, so it is always safe to
/// iterate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonArray<'a> {
    elements: &'a [Value],
}

impl<'a> SerdeJsonArray<'a> {
    /// Wrap `value`, failing if it is not an array.
    pub fn new(value: &'a Value) -> Result<Self> {
        Self::wrap(value).ok_or_else(|| {
            let kind = value_kind(value);
            debug!(%kind, "cannot build array view");
            AdapterError::NotAnArray(kind)
        })
    }

    pub(crate) fn wrap(value: &'a Value) -> Option<Self> {
        value.as_array().map(|elements| Self { elements })
    }

    /// Element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<SerdeJsonAdapter<'a>> {
        self.elements.get(index).map(SerdeJsonAdapter::new)
    }
}

impl<'a> TryFrom<&'a Value> for SerdeJsonArray<'a> {
    type Error = AdapterError;

    fn try_from(value: &'a Value) -> Result<Self> {
        Self::new(value)
    }
}

impl<'a> ArrayView for SerdeJsonArray<'a> {
    type Value = SerdeJsonValue<'a>;
    type Iter = SerdeJsonArrayValueIterator<'a>;

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> SerdeJsonArrayValueIterator<'a> {
        SerdeJsonArrayValueIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<'a> IntoIterator for SerdeJsonArray<'a> {
    type Item = SerdeJsonAdapter<'a>;
    type IntoIter = SerdeJsonArrayValueIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &SerdeJsonArray<'a> {
    type Item = SerdeJsonAdapter<'a>;
    type IntoIter = SerdeJsonArrayValueIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over array elements, yielding an adapter per element.
///
/// Supports iteration from both ends and O(1) skipping through `nth`.
#[derive(Debug, Clone)]
pub struct SerdeJsonArrayValueIterator<'a> {
    inner: slice::Iter<'a, Value>,
}

impl<'a> Iterator for SerdeJsonArrayValueIterator<'a> {
    type Item = SerdeJsonAdapter<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(SerdeJsonAdapter::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(SerdeJsonAdapter::new)
    }

    fn count(self) -> usize {
        self.inner.len()
    }
}

impl DoubleEndedIterator for SerdeJsonArrayValueIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(SerdeJsonAdapter::new)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth_back(n).map(SerdeJsonAdapter::new)
    }
}

impl ExactSizeIterator for SerdeJsonArrayValueIterator<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for SerdeJsonArrayValueIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use json_adapter::{Adapter, AdapterError, ValueKind};
    use serde_json::json;

    #[test]
    fn rejects_non_arrays() {
        for value in [json!("a"), json!({}), json!(1), json!(null)] {
            let err = SerdeJsonArray::new(&value).unwrap_err();
            assert!(matches!(err, AdapterError::NotAnArray(_)));
        }
        let err = SerdeJsonArray::try_from(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, AdapterError::NotAnArray(ValueKind::Object)));
    }

    #[test]
    fn default_is_empty() {
        let array = SerdeJsonArray::default();
        assert_eq!(array.size(), 0);
        assert!(array.is_empty());
        assert!(array.iter().next().is_none());
    }

    #[test]
    fn iterates_both_directions() {
        let doc = json!([1, 2, 3, 4]);
        let array = SerdeJsonArray::new(&doc).unwrap();

        let forward: Vec<_> = array.iter().filter_map(|v| v.get_integer()).collect();
        assert_eq!(forward, vec![1, 2, 3, 4]);

        let backward: Vec<_> = array.iter().rev().filter_map(|v| v.get_integer()).collect();
        assert_eq!(backward, vec![4, 3, 2, 1]);

        let mut it = array.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.nth(2).and_then(|v| v.get_integer()), Some(3));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next_back().and_then(|v| v.get_integer()), Some(4));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn random_access() {
        let doc = json!(["a", "b"]);
        let array = SerdeJsonArray::new(&doc).unwrap();
        assert_eq!(array.get(1).and_then(|v| v.get_string()).as_deref(), Some("b"));
        assert!(array.get(2).is_none());
        assert_eq!(
            array.iter().nth_back(1).and_then(|v| v.get_string()).as_deref(),
            Some("a")
        );
    }
}
