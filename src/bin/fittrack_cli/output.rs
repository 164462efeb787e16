// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Prints each command result as a text line or a pretty JSON document

use serde_json::Value;

/// Result of a CLI command in both renderings
pub struct Outcome {
    /// Human-readable line
    pub text: String,
    /// Structured payload for `--json`
    pub json: Value,
}

impl Outcome {
    pub fn new(text: impl Into<String>, json: Value) -> Self {
        Self {
            text: text.into(),
            json,
        }
    }
}

/// Print an outcome to stdout
pub fn print(outcome: &Outcome, as_json: bool) -> serde_json::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.json)?);
    } else {
        println!("{}", outcome.text);
    }
    Ok(())
}
