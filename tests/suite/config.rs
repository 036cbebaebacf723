//! Configured coercion policy flows into the equality combinators.

use std::fs;

use prefix::dynamic::{eq_with, neq_with};
use prefix::{CoercionPolicy, PrefixConfig, Value};
use tempfile::tempdir;

#[test]
fn policy_from_file_controls_loose_equality() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[equality]\nnumber_text = false\n").expect("write config");

    let policy = PrefixConfig::load_from(&path)
        .expect("config loads")
        .coercion_policy();

    assert_eq!(eq_with(policy, 1)(Value::from("1")), Ok(Value::from(false)));
    assert_eq!(neq_with(policy, 1)(Value::from("1")), Ok(Value::from(true)));
    assert_eq!(eq_with(policy, true)(Value::from(1)), Ok(Value::from(true)));
}

#[test]
fn default_config_matches_default_policy() {
    assert_eq!(
        PrefixConfig::default().coercion_policy(),
        CoercionPolicy::default()
    );
}
