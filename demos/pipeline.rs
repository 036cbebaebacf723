//! Record value to text, and text to a comparison, as pipelines.
//!
//! ```bash
//! RUST_LOG=prefix_core=debug cargo run --example pipeline
//! ```

use anyhow::Result;
use prefix::dynamic::{add, call, eq, eq_with, get, mul};
use prefix::{PrefixConfig, Record, try_pipe};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let result1 = try_pipe!(
        Record::from_fields([("value", 23)]),
        get("value"),
        add(23),
        mul(2),
        call("toString"),
    )?;
    println!("{result1}");
    // --> 92

    let result2 = try_pipe!(
        "light",
        add("See the "),
        call("toUpperCase"),
        eq("SEE THE LIGHT"),
    )?;
    println!("{result2}");
    // --> true

    let policy = PrefixConfig::load().unwrap_or_default().coercion_policy();
    let loosely = try_pipe!(result1, eq_with(policy, 92))?;
    tracing::info!(%loosely, ?policy, "\"92\" compared with 92");

    // A failing step surfaces as an error instead of a panic.
    if let Err(err) = try_pipe!(Record::new(), get("value")) {
        println!("error: {err}");
    }

    Ok(())
}
