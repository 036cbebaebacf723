//! Operator wrappers agree with the native operators they wrap.

use prefix::dynamic::{add, div, eq, exp, gt, gte, lt, lte, mul, neq, neqq, rem, sub};
use prefix::{Value, ops};

const SAMPLES: [f64; 7] = [-3.5, -1.0, 0.0, 0.25, 2.0, 7.0, 1e9];

fn number(result: prefix::Result<Value>) -> f64 {
    result
        .expect("numeric operands are accepted")
        .as_number()
        .expect("numeric result")
}

fn boolean(result: prefix::Result<Value>) -> bool {
    result
        .expect("comparable operands are accepted")
        .as_bool()
        .expect("bool result")
}

fn same_number(actual: f64, expected: f64) -> bool {
    (actual.is_nan() && expected.is_nan()) || actual == expected
}

#[test]
fn dynamic_arithmetic_matches_native() {
    for a in SAMPLES {
        for b in SAMPLES {
            let right = || Value::from(b);
            assert!(same_number(number(add(a)(right())), a + b), "{a} + {b}");
            assert!(same_number(number(sub(a)(right())), a - b), "{a} - {b}");
            assert!(same_number(number(mul(a)(right())), a * b), "{a} * {b}");
            assert!(same_number(number(div(a)(right())), a / b), "{a} / {b}");
            assert!(same_number(number(rem(a)(right())), a % b), "{a} % {b}");
            assert!(same_number(number(exp(a)(right())), a.powf(b)), "{a} ** {b}");
        }
    }
}

#[test]
fn dynamic_comparisons_match_native() {
    for a in SAMPLES {
        for b in SAMPLES {
            let right = || Value::from(b);
            assert_eq!(boolean(lt(a)(right())), a < b, "{a} < {b}");
            assert_eq!(boolean(lte(a)(right())), a <= b, "{a} <= {b}");
            assert_eq!(boolean(gt(a)(right())), a > b, "{a} > {b}");
            assert_eq!(boolean(gte(a)(right())), a >= b, "{a} >= {b}");
        }
    }
}

#[test]
fn typed_wrappers_match_native() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert!(same_number(ops::add(a)(b), a + b));
            assert!(same_number(ops::div(a)(b), a / b));
            assert!(same_number(ops::exp(a)(b), a.powf(b)));
            assert_eq!(ops::lt(a)(b), a < b);
            assert_eq!(ops::gte(a)(b), a >= b);
        }
    }
}

#[test]
fn text_addition_concatenates_in_order() {
    for (a, b) in [("", ""), ("See the ", "light"), ("ü", "ß"), ("1", "2")] {
        assert_eq!(add(a)(Value::from(b)), Ok(Value::from(format!("{a}{b}"))));
    }
}

#[test]
fn loose_and_strict_equality_diverge_on_number_and_text() {
    assert_eq!(eq(1)(Value::from("1")), Ok(Value::from(true)));
    assert_eq!(neq(1)(Value::from("1")), Ok(Value::from(false)));
    assert_eq!(neqq(1)(Value::from("1")), Ok(Value::from(true)));
}

#[test]
fn zero_division_follows_ieee() {
    assert_eq!(number(div(5)(Value::from(0))), f64::INFINITY);
    assert!(number(div(0)(Value::from(0))).is_nan());
    assert!(ops::div(0.0_f64)(0.0).is_nan());
}
