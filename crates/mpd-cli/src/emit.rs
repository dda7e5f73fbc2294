//! Render the card, print it, and write `croissant.json`.
//!
//! The sequence matches the card-publishing contract: validate and
//! serialize first, print the JSON text to standard output, then write the
//! same text to the output file followed by exactly one trailing newline,
//! truncating any previous content. Nothing is written when serialization
//! fails.

use std::path::Path;

use anyhow::{Context, Result};

use crate::card;

/// Build and emit the card. With `check` set, validates and prints the
/// issue report instead of writing; returns a non-zero exit code when the
/// card has validation errors.
pub fn run_emit(out: &Path, check: bool) -> Result<u8> {
    let metadata = card::monopath_metadata();

    if check {
        let issues = mpd_croissant::validate_metadata(&metadata);
        if issues.is_empty() {
            println!("{}: no issues", metadata.name);
        } else {
            println!("{}", issues.report());
        }
        return Ok(if issues.has_errors() { 1 } else { 0 });
    }

    let text = metadata
        .to_json_string()
        .context("failed to serialize dataset card")?;
    println!("{text}");
    write_text(out, &text)?;
    tracing::info!(path = %out.display(), "dataset card written");
    Ok(0)
}

/// Write the rendered card text to `out`, terminated by exactly one
/// newline, creating or truncating the file.
fn write_text(out: &Path, text: &str) -> Result<()> {
    let mut contents = String::with_capacity(text.len() + 1);
    contents.push_str(text);
    contents.push('\n');
    std::fs::write(out, contents)
        .with_context(|| format!("failed to write {}", out.display()))
}
