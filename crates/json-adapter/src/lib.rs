//! json-adapter - parser-independent access to JSON values.
//!
//! A schema validator walks documents through the traits in this crate so it
//! never depends on the node layout of a particular JSON parser. Each parser
//! binding supplies:
//!
//! - a [`JsonValue`] reference type with type tests and typed getters,
//! - [`ArrayView`] and [`ObjectView`] container views with iterators,
//! - a [`FrozenValue`] owning a deep copy for values that must outlive the
//!   document,
//! - an [`AdapterTraits`] impl naming the binding and its document type.
//!
//! [`BasicAdapter`] composes those pieces into the object-safe [`Adapter`]
//! surface, including loose conversions and structural equality.

mod adapter;
mod basic;
mod equal;
mod error;
mod frozen;
mod kind;
mod number;
mod traits;
mod value;

pub use adapter::Adapter;
pub use basic::BasicAdapter;
pub use error::{AdapterError, Result};
pub use frozen::FrozenValue;
pub use kind::ValueKind;
pub use number::NativeNumber;
pub use traits::AdapterTraits;
pub use value::{ArrayView, JsonValue, ObjectMember, ObjectView};
