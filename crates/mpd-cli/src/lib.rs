//! # mpd-cli — MonopathPatientDAGs card builder
//!
//! Provides the `mpd` command-line tool. The card content is fixed: the
//! tool assembles the MonopathPatientDAGs Croissant document from literal
//! constants ([`card`]), validates it, and emits it ([`emit`]) to standard
//! output and `croissant.json`.
//!
//! Running `mpd` with no arguments produces the card in the current
//! directory; `--out` overrides the path and `--check` validates without
//! writing.

pub mod card;
pub mod emit;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "croissant.json";
