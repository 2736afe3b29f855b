// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the snippet extractor and the renderers.

/// Lowercase a single character without changing the character count.
///
/// `char::to_lowercase` can expand (`'İ'` becomes `"i̇"`). Keeping only the
/// first char means a folded string lines up with its source char-for-char,
/// which is what snippet offsets rely on.
///
/// Final sigma `ς` folds to `σ`, the same as capital `Σ`, so "ΟΔΟΣ" and "οδος"
/// compare equal whichever sigma the query was typed with. No other
/// context-dependent mapping is applied.
#[inline]
pub fn fold_char(c: char) -> char {
    match c.to_lowercase().next().unwrap_or(c) {
        'ς' => 'σ',
        folded => folded,
    }
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
