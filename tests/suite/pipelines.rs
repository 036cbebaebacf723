//! End-to-end pipelines composed from the combinators.

use prefix::dynamic::{add, call, call_with, eq, get, gt, modify, mul, not, set};
use prefix::ops;
use prefix::{CombinatorError, Record, Value, coerce, pipe, try_pipe};

use crate::common::{counter, record_of, user};

#[test]
fn record_value_through_arithmetic_to_text() {
    let result = try_pipe!(
        Record::from_fields([("value", 23)]),
        get("value"),
        add(23),
        mul(2),
        call("toString"),
    );
    assert_eq!(result, Ok(Value::from("92")));
}

#[test]
fn text_through_concat_case_and_equality() {
    let result = try_pipe!(
        "light",
        add("See the "),
        call("toUpperCase"),
        eq("SEE THE LIGHT"),
    );
    assert_eq!(result, Ok(Value::from(true)));
}

#[test]
fn birthday_modifies_age_only() {
    let before = user();
    let after = try_pipe!(before.clone(), modify("age", add(1))).expect("modify succeeds");

    assert_eq!(record_of(&after).get("age"), Some(&Value::from(29)));
    assert_eq!(record_of(&after).get("name"), Some(&Value::from("Fritz")));
    assert_eq!(before.get("age"), Some(&Value::from(28)));
}

#[test]
fn first_failure_stops_the_pipeline() {
    let result = try_pipe!(user(), get("email"), call("toUpperCase"));
    assert_eq!(result, Err(CombinatorError::missing_field("email")));
}

#[test]
fn own_methods_see_the_receiver() {
    let result = try_pipe!(
        counter(1),
        call("increment"),
        call_with("increment", [5]),
        get("count"),
    );
    assert_eq!(result, Ok(Value::from(7)));
}

#[test]
fn boolean_steps_compose() {
    let result = try_pipe!(
        Record::from_fields([("score", 40)]),
        get("score"),
        gt(50),
        not,
    );
    assert_eq!(result, Ok(Value::from(false)));
}

#[test]
fn leaving_the_pipeline_with_coerce() {
    let total = try_pipe!(Record::new(), set("n", 21), get("n"), mul(2)).and_then(coerce::<f64>());
    assert_eq!(total, Ok(42.0));
}

#[test]
fn typed_pipeline_matches_dynamic_one() {
    let typed = pipe!(23_i64, ops::add(23), ops::mul(2), |n: i64| n.to_string());
    assert_eq!(typed, "92");

    let shout = pipe!(
        String::from("light"),
        |s: String| ops::add(String::from("See the "))(s.as_str()),
        |s: String| s.to_uppercase(),
        ops::eq(String::from("SEE THE LIGHT")),
    );
    assert!(shout);
}

#[test]
fn empty_pipes_return_their_input() {
    assert_eq!(pipe!(5), 5);
    assert_eq!(try_pipe!(5), Ok(Value::from(5)));
}

#[test]
fn json_input_feeds_a_pipeline() {
    let input = Value::try_from(serde_json::json!({ "value": 23 })).expect("object converts");
    let result = try_pipe!(input, get("value"), add(23), mul(2), call("toString"));
    assert_eq!(result, Ok(Value::from("92")));
}
