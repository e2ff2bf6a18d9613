//! Object view and member iterator.

use std::iter::FusedIterator;
use std::sync::OnceLock;

use json_adapter::{AdapterError, ObjectView, Result};
use serde_json::{map, Map, Value};
use tracing::debug;

use crate::value::value_kind;
use crate::{SerdeJsonAdapter, SerdeJsonValue};

/// `(key, value)` pair produced by object iteration and lookup.
pub type SerdeJsonObjectMember<'a> = (String, SerdeJsonAdapter<'a>);

fn empty_members() -> &'static Map<String, Value> {
    static EMPTY: OnceLock<Map<String, Value>> = OnceLock::new();
    EMPTY.get_or_init(Map::new)
}

/// Read-only view over the members of a serde_json object.
#[derive(Debug, Clone, Copy)]
pub struct SerdeJsonObject<'a> {
    members: &'a Map<String, Value>,
}

impl<'a> SerdeJsonObject<'a> {
    /// Wrap `value`, failing if it is not an object.
    pub fn new(value: &'a Value) -> Result<Self> {
        Self::wrap(value).ok_or_else(|| {
            let kind = value_kind(value);
            debug!(%kind, "cannot build object view");
            AdapterError::NotAnObject(kind)
        })
    }

    pub(crate) fn wrap(value: &'a Value) -> Option<Self> {
        value.as_object().map(|members| Self { members })
    }
}

impl Default for SerdeJsonObject<'_> {
    fn default() -> Self {
        Self {
            members: empty_members(),
        }
    }
}

impl<'a> TryFrom<&'a Value> for SerdeJsonObject<'a> {
    type Error = AdapterError;

    fn try_from(value: &'a Value) -> Result<Self> {
        Self::new(value)
    }
}

impl<'a> ObjectView for SerdeJsonObject<'a> {
    type Value = SerdeJsonValue<'a>;
    type Iter = SerdeJsonObjectMemberIterator<'a>;

    fn size(&self) -> usize {
        self.members.len()
    }

    fn iter(&self) -> SerdeJsonObjectMemberIterator<'a> {
        SerdeJsonObjectMemberIterator {
            inner: self.members.iter(),
        }
    }

    /// Lookup never yields a position past the end: a missing key is `None`.
    fn find(&self, property: &str) -> Option<SerdeJsonObjectMember<'a>> {
        self.members.get_key_value(property).map(member)
    }
}

impl<'a> IntoIterator for SerdeJsonObject<'a> {
    type Item = SerdeJsonObjectMember<'a>;
    type IntoIter = SerdeJsonObjectMemberIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &SerdeJsonObject<'a> {
    type Item = SerdeJsonObjectMember<'a>;
    type IntoIter = SerdeJsonObjectMemberIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn member<'a>((key, value): (&'a String, &'a Value)) -> SerdeJsonObjectMember<'a> {
    (key.clone(), SerdeJsonAdapter::new(value))
}

/// Iterator over object members. Keys are copied; values stay borrowed.
#[derive(Debug, Clone)]
pub struct SerdeJsonObjectMemberIterator<'a> {
    inner: map::Iter<'a>,
}

impl<'a> Iterator for SerdeJsonObjectMemberIterator<'a> {
    type Item = SerdeJsonObjectMember<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(member)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(member)
    }
}

impl DoubleEndedIterator for SerdeJsonObjectMemberIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(member)
    }
}

impl ExactSizeIterator for SerdeJsonObjectMemberIterator<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for SerdeJsonObjectMemberIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use json_adapter::{Adapter, ValueKind};
    use serde_json::json;

    #[test]
    fn rejects_non_objects() {
        let err = SerdeJsonObject::new(&json!([1])).unwrap_err();
        assert!(matches!(err, AdapterError::NotAnObject(ValueKind::Array)));
        assert!(SerdeJsonObject::try_from(&json!("x")).is_err());
    }

    #[test]
    fn default_is_empty() {
        let object = SerdeJsonObject::default();
        assert_eq!(object.size(), 0);
        assert!(object.iter().next().is_none());
        assert!(object.find("").is_none());
    }

    #[test]
    fn find_matches_exact_key() {
        let doc = json!({"a": 1, "A": 2, "a ": 3});
        let object = SerdeJsonObject::new(&doc).unwrap();

        let (key, value) = object.find("A").unwrap();
        assert_eq!(key, "A");
        assert_eq!(value.get_integer(), Some(2));

        assert!(object.find("b").is_none());
        assert!(object.find("").is_none());
    }

    #[test]
    fn find_on_empty_object_is_none() {
        let doc = json!({});
        let object = SerdeJsonObject::new(&doc).unwrap();
        assert!(object.find("").is_none());
        assert!(object.find("anything").is_none());
    }

    #[test]
    fn iterator_length_tracks_consumption() {
        let doc = json!({"x": 1, "y": 2, "z": 3});
        let object = SerdeJsonObject::new(&doc).unwrap();
        let mut it = object.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        it.next_back();
        assert_eq!(it.len(), 1);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
    }
}
