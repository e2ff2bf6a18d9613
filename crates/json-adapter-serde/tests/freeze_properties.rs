//! Property tests over randomly generated JSON documents.
//!
//! - freezing never fails and the frozen copy equals its source in both
//!   strict and loose mode
//! - array and object sizes agree with iteration length
//! - object lookup finds every present key and nothing else
//! - integer nodes in i64 range extract exactly
use json_adapter::{Adapter, ArrayView, ObjectView};
use json_adapter_serde::{SerdeJsonAdapter, SerdeJsonArray, SerdeJsonObject};
use proptest::prelude::*;
use serde_json::{Map, Number, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::from(n))),
        any::<u64>().prop_map(|n| Value::Number(Number::from(n))),
        (-1.0e12f64..1.0e12f64).prop_map(|f| Number::from_f64(f).map_or(Value::Null, Value::Number)),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{0,4}", inner), 0..6).prop_map(|members| {
                Value::Object(members.into_iter().collect::<Map<String, Value>>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn frozen_copy_equals_source(doc in arb_json()) {
        let adapter = SerdeJsonAdapter::new(&doc);
        let frozen = adapter.freeze().unwrap();
        prop_assert!(frozen.equal_to(&adapter, false));
        prop_assert!(frozen.equal_to(&adapter, true));
        prop_assert!(frozen.clone().equal_to(&adapter, true));
    }

    #[test]
    fn array_size_equals_distance(items in prop::collection::vec(arb_leaf(), 0..16)) {
        let doc = Value::Array(items);
        let array = SerdeJsonArray::new(&doc).unwrap();
        prop_assert_eq!(array.size(), array.iter().len());
        prop_assert_eq!(array.size(), array.iter().rev().count());
    }

    #[test]
    fn object_find_present_and_absent(
        members in prop::collection::btree_map("[a-z]{1,4}", arb_leaf(), 0..8),
        lookup in "[a-z]{1,4}",
    ) {
        let doc = Value::Object(members.clone().into_iter().collect());
        let object = SerdeJsonObject::new(&doc).unwrap();
        prop_assert_eq!(object.size(), object.iter().len());

        for key in members.keys() {
            let (found, _) = object.find(key).unwrap();
            prop_assert_eq!(&found, key);
        }
        prop_assert_eq!(object.find(&lookup).is_some(), members.contains_key(&lookup));
    }

    #[test]
    fn integers_round_trip_through_get_integer(n in any::<i64>()) {
        let doc = Value::Number(Number::from(n));
        let adapter = SerdeJsonAdapter::new(&doc);
        prop_assert_eq!(adapter.get_integer(), Some(n));
        prop_assert!(adapter.is_integer());
        prop_assert!(adapter.is_number());
    }
}
