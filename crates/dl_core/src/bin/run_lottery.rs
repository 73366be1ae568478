//! Ad-hoc runner: feed a lottery request JSON file, print the response.
//!
//! Usage: `cargo run --bin run_lottery -- request.json`

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: run_lottery <request.json>")?;
    let request = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path))?;

    let response = dl_core::run_lottery_json(&request)?;
    println!("{}", response);
    Ok(())
}
