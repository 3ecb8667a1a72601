//! Token canonicalization for comparison and display.
//!
//! Tokens coming out of a byte-level BPE tokenizer carry a leading marker
//! (`Ġ` for Llama-style vocabularies) when they start a new word. For fuzzy
//! matching we drop that marker and fold the various Unicode dashes to an
//! ASCII hyphen so "—" typed on one keyboard finds "-" in the vocabulary.

/// Dash-like characters folded to `-` by [`normalize_token`].
pub const DASH_VARIANTS: [char; 7] = [
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2043}', // hyphen bullet
    '\u{02D7}', // modifier letter minus sign
    '\u{2212}', // minus sign
];

/// Canonical form of `token` for comparison.
///
/// Strips one leading `marker` (an empty marker never matches) and replaces
/// every dash variant with `-`. Case is left untouched.
pub fn normalize_token(token: &str, marker: &str) -> String {
    let trimmed = strip_marker(token, marker);
    trimmed
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect()
}

/// Whether `token` begins a new word.
pub fn starts_word(token: &str, marker: &str) -> bool {
    !marker.is_empty() && token.starts_with(marker)
}

/// Split a token into its leading marker (if any) and the visible rest.
pub fn split_marker<'a>(token: &'a str, marker: &str) -> (Option<&'a str>, &'a str) {
    if starts_word(token, marker) {
        let (head, rest) = token.split_at(marker.len());
        (Some(head), rest)
    } else {
        (None, token)
    }
}

/// Human-readable form: a leading marker becomes a space.
pub fn display_token(token: &str, marker: &str) -> String {
    match split_marker(token, marker) {
        (Some(_), rest) => format!(" {rest}"),
        (None, rest) => rest.to_string(),
    }
}

fn strip_marker<'a>(token: &'a str, marker: &str) -> &'a str {
    split_marker(token, marker).1
}
