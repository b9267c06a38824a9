//! Schema generator for the greeting function.
//!
//! Writes `greeting_schema.json` describing the request and response
//! documents, for API gateways and clients that validate payloads.

use anyhow::{Context, Result};
use std::fs;

const OUTPUT_PATH: &str = "greeting_schema.json";

fn main() -> Result<()> {
    let schema = greeting_function::schema::greeting_schema()
        .context("Failed to build greeting schema")?;

    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;

    fs::write(OUTPUT_PATH, json).with_context(|| format!("Failed to write {OUTPUT_PATH}"))?;
    println!("✅ Generated {OUTPUT_PATH}");

    Ok(())
}
