//! Record accessors never mutate their input.

use prefix::dynamic::{get, merge, remove, set};
use prefix::{Record, Value};

use crate::common::{record_of, user};

fn samples() -> Vec<Record> {
    vec![
        Record::new(),
        user(),
        Record::from_fields([("nested", Value::from(user())), ("flag", Value::from(true))]),
    ]
}

#[test]
fn get_after_set_returns_the_value() {
    for record in samples() {
        for value in [Value::from(1), Value::from("x"), Value::Null, Value::from(user())] {
            let updated = set("field", value.clone())(Value::from(record.clone())).expect("set");
            assert_eq!(get("field")(updated), Ok(value));
        }
    }
}

#[test]
fn set_returns_a_distinct_record_and_leaves_input_alone() {
    for record in samples() {
        let snapshot = record.clone();
        let input = Value::from(record.clone());
        let updated = set("age", 99)(input).expect("set");

        assert_eq!(record, snapshot);
        assert!(!Record::ptr_eq(&record, record_of(&updated)));
    }
}

#[test]
fn remove_undoes_set_of_absent_field() {
    for record in samples() {
        assert!(!record.contains("extra"));
        let round_trip = set("extra", "value")(Value::from(record.clone())).and_then(remove("extra"));
        assert_eq!(round_trip, Ok(Value::from(record)));
    }
}

#[test]
fn merge_takes_extension_fields_and_keeps_the_rest() {
    let extension = Record::from_fields([("age", Value::from(30)), ("city", Value::from("Bonn"))]);
    for record in samples() {
        let snapshot = record.clone();
        let merged = merge(extension.clone())(Value::from(record.clone())).expect("merge");
        let merged = record_of(&merged);

        assert_eq!(record, snapshot);
        assert!(!Record::ptr_eq(&record, merged));
        assert!(!Record::ptr_eq(&extension, merged));

        for (key, value) in &extension {
            assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &record {
            if !extension.contains(key) {
                assert_eq!(merged.get(key), Some(value));
            }
        }
        assert_eq!(extension.len(), 2);
    }
}
