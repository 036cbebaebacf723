//! Record accessors: `call`, `get`, `set`, `modify`, `remove`, `merge`.

use std::sync::Arc;

use prefix_types::{CombinatorError, Record, Result, Value};

use super::mismatch;
use crate::builtins;

fn expect_record<'a>(operation: &'static str, value: &'a Value) -> Result<&'a Record> {
    value
        .as_record()
        .ok_or_else(|| mismatch(operation, "a record", value))
}

fn missing(field: &str) -> CombinatorError {
    tracing::debug!(field, "field not found");
    CombinatorError::missing_field(field)
}

/// Invoke the member `method` with no arguments.
///
/// See [`call_with`].
pub fn call(method: impl Into<Arc<str>>) -> impl Fn(Value) -> Result<Value> {
    call_with(method, Vec::<Value>::new())
}

/// Invoke the member `method` with `args`, the input bound as receiver.
///
/// A record's own field wins and must hold a [`Value::Method`]. Without an
/// own field, and for every non-record input, the built-in methods of the
/// input's kind are consulted (`toString`, `toUpperCase`, `toFixed`, ...).
pub fn call_with<I>(method: impl Into<Arc<str>>, args: I) -> impl Fn(Value) -> Result<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let method = method.into();
    let args: Vec<Value> = args.into_iter().map(Into::into).collect();
    move |receiver| {
        let own = receiver.as_record().and_then(|record| record.get(&method));
        match own {
            Some(Value::Method(member)) => member.invoke(&receiver, &args),
            Some(other) => {
                tracing::debug!(field = %method, found = %other.kind(), "member is not invocable");
                Err(CombinatorError::NotInvocable {
                    field: method.to_string(),
                    found: other.kind(),
                })
            }
            None => builtins::invoke(&receiver, &method, &args),
        }
    }
}

pub fn get(field: impl Into<Arc<str>>) -> impl Fn(Value) -> Result<Value> {
    let field = field.into();
    move |value| {
        expect_record("get", &value)?
            .get(&field)
            .cloned()
            .ok_or_else(|| missing(&field))
    }
}

/// New record with `field` set to `value`, created if absent.
pub fn set(field: impl Into<Arc<str>>, value: impl Into<Value>) -> impl Fn(Value) -> Result<Value> {
    let field = field.into();
    let value = value.into();
    move |input| {
        let record = expect_record("set", &input)?;
        Ok(Value::Record(record.with(Arc::clone(&field), value.clone())))
    }
}

/// New record with `field` replaced by `f(old)`. The field must exist.
pub fn modify<F>(field: impl Into<Arc<str>>, f: F) -> impl Fn(Value) -> Result<Value>
where
    F: Fn(Value) -> Result<Value>,
{
    let field = field.into();
    move |input| {
        let record = expect_record("modify", &input)?;
        let old = record.get(&field).cloned().ok_or_else(|| missing(&field))?;
        Ok(Value::Record(record.with(Arc::clone(&field), f(old)?)))
    }
}

/// New record without `field`. Removing an absent field is not an error.
pub fn remove(field: impl Into<Arc<str>>) -> impl Fn(Value) -> Result<Value> {
    let field = field.into();
    move |input| {
        let record = expect_record("remove", &input)?;
        Ok(Value::Record(record.without(&field)))
    }
}

/// Shallow union of the input and `extension`; `extension` wins.
pub fn merge(extension: Record) -> impl Fn(Value) -> Result<Value> {
    move |input| {
        let record = expect_record("merge", &input)?;
        Ok(Value::Record(record.merged(&extension)))
    }
}

#[cfg(test)]
mod tests {
    use prefix_types::{CombinatorError, Record, Value, ValueKind};

    use super::{call, call_with, get, merge, modify, remove, set};
    use crate::dynamic::add;

    fn user() -> Value {
        Value::record([("name", Value::from("Fritz")), ("age", Value::from(28))])
    }

    fn record_of(value: &Value) -> &Record {
        value.as_record().expect("record")
    }

    #[test]
    fn get_reads_field() {
        assert_eq!(get("age")(user()), Ok(Value::from(28)));
    }

    #[test]
    fn get_missing_field_fails() {
        assert_eq!(
            get("email")(user()),
            Err(CombinatorError::missing_field("email"))
        );
    }

    #[test]
    fn get_on_scalar_is_type_mismatch() {
        assert!(matches!(
            get("age")(Value::from(3)),
            Err(CombinatorError::TypeMismatch { operation: "get", .. })
        ));
    }

    #[test]
    fn set_then_get_round_trips() {
        let input = user();
        let updated = set("age", 40)(input.clone()).expect("set");
        assert_eq!(get("age")(updated.clone()), Ok(Value::from(40)));
        assert_eq!(get("age")(input.clone()), Ok(Value::from(28)));
        assert!(!Record::ptr_eq(record_of(&input), record_of(&updated)));
    }

    #[test]
    fn remove_undoes_set_of_new_field() {
        let input = user();
        let round_trip = set("email", "f@example.com")(input.clone()).and_then(remove("email"));
        assert_eq!(round_trip, Ok(input));
    }

    #[test]
    fn modify_applies_combinator() {
        let input = user();
        let older = modify("age", add(1))(input.clone()).expect("modify");
        assert_eq!(record_of(&older).get("age"), Some(&Value::from(29)));
        assert_eq!(record_of(&older).get("name"), Some(&Value::from("Fritz")));
        assert_eq!(record_of(&input).get("age"), Some(&Value::from(28)));
    }

    #[test]
    fn modify_propagates_inner_failure() {
        let result = modify("name", add(1))(user());
        assert!(matches!(
            result,
            Err(CombinatorError::TypeMismatch { operation: "add", .. })
        ));
    }

    #[test]
    fn merge_prefers_extension() {
        let extension = Record::from_fields([("age", Value::from(30)), ("city", Value::from("Bonn"))]);
        let merged = merge(extension)(user()).expect("merge");
        let merged = record_of(&merged);
        assert_eq!(merged.get("age"), Some(&Value::from(30)));
        assert_eq!(merged.get("city"), Some(&Value::from("Bonn")));
        assert_eq!(merged.get("name"), Some(&Value::from("Fritz")));
    }

    #[test]
    fn call_invokes_own_method_with_receiver() {
        let greet = Value::method(|receiver, args| {
            let name = receiver
                .as_record()
                .and_then(|r| r.get("name"))
                .cloned()
                .unwrap_or_default();
            Ok(Value::from(format!("{}, {name}", args[0])))
        });
        let input = Value::record([("name", Value::from("Fritz")), ("greet", greet)]);
        assert_eq!(
            call_with("greet", ["Hello"])(input),
            Ok(Value::from("Hello, Fritz"))
        );
    }

    #[test]
    fn call_non_method_field_is_not_invocable() {
        assert_eq!(
            call("name")(user()),
            Err(CombinatorError::NotInvocable {
                field: "name".to_string(),
                found: ValueKind::Text,
            })
        );
    }

    #[test]
    fn call_falls_back_to_builtins() {
        assert_eq!(call("toString")(user()), Ok(Value::from("[object Object]")));
        assert_eq!(call("toString")(Value::from(34)), Ok(Value::from("34")));
    }

    #[test]
    fn call_unknown_member_is_missing() {
        assert_eq!(
            call("explode")(user()),
            Err(CombinatorError::missing_field("explode"))
        );
    }
}
