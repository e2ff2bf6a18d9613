//! json-adapter-serde - `serde_json::Value` binding for json-adapter.
//!
//! Exposes a parsed `serde_json::Value` tree through the json-adapter
//! traits so a schema validator can walk it without knowing about serde_json.
//!
//! - [`SerdeJsonValue`] - borrowed reference to one node
//! - [`SerdeJsonArray`] / [`SerdeJsonObject`] - container views
//! - [`SerdeJsonFrozenValue`] - owned deep copy
//! - [`SerdeJsonAdapter`] - the composed adapter
//!
//! Enable the `preserve_order` feature to iterate object members in document
//! order instead of sorted key order.

mod adapter;
mod array;
mod frozen;
mod object;
mod value;

pub mod utils;

pub use adapter::{SerdeJsonAdapter, ADAPTER_NAME};
pub use array::{SerdeJsonArray, SerdeJsonArrayValueIterator};
pub use frozen::SerdeJsonFrozenValue;
pub use object::{SerdeJsonObject, SerdeJsonObjectMember, SerdeJsonObjectMemberIterator};
pub use utils::{load_document, parse_document};
pub use value::SerdeJsonValue;
