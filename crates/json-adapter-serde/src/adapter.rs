//! Top-level serde_json adapter.

use json_adapter::{AdapterTraits, BasicAdapter, Result};
use serde_json::Value;

use crate::utils::parse_document;
use crate::SerdeJsonValue;

/// Adapter over a borrowed `serde_json::Value`.
///
/// ```
/// use json_adapter::{Adapter, ObjectView};
/// use json_adapter_serde::SerdeJsonAdapter;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": [true, null]});
/// let adapter = SerdeJsonAdapter::new(&doc);
/// let object = adapter.get_object().unwrap();
/// let (_, b) = object.find("b").unwrap();
/// assert_eq!(b.get_array_size(), Some(2));
/// ```
pub type SerdeJsonAdapter<'a> = BasicAdapter<SerdeJsonValue<'a>>;

pub const ADAPTER_NAME: &str = "SerdeJsonAdapter";

impl AdapterTraits for SerdeJsonValue<'_> {
    type Document = Value;

    fn adapter_name() -> &'static str {
        ADAPTER_NAME
    }

    fn parse_document(text: &str) -> Result<Value> {
        parse_document(text)
    }
}
