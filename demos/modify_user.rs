//! Updating a field without mutating the record it came from.

use anyhow::Result;
use prefix::dynamic::{add, get, modify};
use prefix::{Record, Value, try_pipe};
use tracing_subscriber::EnvFilter;

fn describe(user: &Value) -> Result<String> {
    let name = try_pipe!(user.clone(), get("name"))?;
    let age = try_pipe!(user.clone(), get("age"))?;
    Ok(format!("{name} ({age})"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let user = Value::from(Record::from_fields([
        ("name", Value::from("Fritz")),
        ("age", Value::from(28)),
    ]));

    let older = try_pipe!(user.clone(), modify("age", add(1)))?;

    println!("{}", describe(&user)?);
    // --> Fritz (28)
    println!("{}", describe(&older)?);
    // --> Fritz (29)

    Ok(())
}
