// ABOUTME: Ellipsis truncation for card titles and meal descriptions
// ABOUTME: Counts Unicode scalar values so multi-byte characters are never split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack_core::constants::display::ELLIPSIS;

/// Truncate `text` to at most `max_length` characters followed by `"..."`
///
/// Text whose character count is at most `max_length` is returned unchanged.
/// The result is therefore never longer than `max_length + 3` characters.
#[must_use]
pub fn truncate_text(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        None => text.to_owned(),
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(ELLIPSIS);
            truncated
        }
    }
}
