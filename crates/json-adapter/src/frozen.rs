//! Owned snapshots of JSON values.

use std::fmt;

use crate::Adapter;

/// A deep copy of a JSON value that no longer borrows from its source
/// document.
///
/// Schema parsers keep these for `enum` members, defaults and other constants
/// that must outlive the document they were read from.
pub trait FrozenValue: fmt::Debug + Send + Sync {
    /// Independent copy of this frozen value.
    fn clone_boxed(&self) -> Box<dyn FrozenValue>;

    /// Compare the frozen content against a live value.
    fn equal_to(&self, other: &dyn Adapter, strict: bool) -> bool;
}

impl Clone for Box<dyn FrozenValue> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}
