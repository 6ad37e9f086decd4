//! Persistence encoding for the board column override.
//!
//! The stored `notes` column doubles as the carrier for a pinned board lane:
//! a token `kanbanColumnId:<column-id>` somewhere in the free text.
//! Repositories call [`decode`] on read and [`encode`] on write so that rows
//! stay compatible with data written by earlier clients. A token naming a
//! known column is lifted out as the override; any other token stays in the
//! text untouched until a board move drops it.

use crate::BoardColumn;

use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const DIRECTIVE_PREFIX: &str = "kanbanColumnId:";

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    // constant pattern
    Regex::new(r"kanbanColumnId:([a-z_-]+)").expect("directive pattern is a valid regex")
});

/// First directive token in `notes`, if any. The token is returned as
/// written, whether or not it names a known column.
pub fn parse(notes: &str) -> Option<&str> {
    DIRECTIVE
        .captures(notes)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}

/// Remove every directive token and trim the remainder.
pub fn strip(notes: &str) -> String {
    DIRECTIVE.replace_all(notes, "").trim().to_string()
}

/// Replace any existing directive with one pinning `column`.
pub fn append(notes: &str, column: BoardColumn) -> String {
    let base = strip(notes);
    format!("{base} {DIRECTIVE_PREFIX}{}", column.id())
        .trim()
        .to_string()
}

/// Remove only the tokens that name a known column.
fn strip_known(notes: &str) -> String {
    DIRECTIVE
        .replace_all(notes, |captures: &Captures| match BoardColumn::from_id(&captures[1]) {
            Some(_) => String::new(),
            None => captures[0].to_string(),
        })
        .trim()
        .to_string()
}

/// Split stored notes into user text and override.
///
/// Only a token naming a known column is lifted out. Without one the stored
/// text comes back exactly as written, unknown tokens included.
pub fn decode(stored: Option<&str>) -> (Option<String>, Option<BoardColumn>) {
    let Some(stored) = stored else {
        return (None, None);
    };

    let column = DIRECTIVE
        .captures_iter(stored)
        .find_map(|captures| BoardColumn::from_id(&captures[1]));
    let Some(column) = column else {
        return (Some(stored.to_string()), None);
    };

    let text = strip_known(stored);
    let text = if text.is_empty() { None } else { Some(text) };

    (text, Some(column))
}

/// Inverse of [`decode`]: fold the override back into the notes text.
/// Without an override the text is written as given.
pub fn encode(notes: Option<&str>, column: Option<BoardColumn>) -> Option<String> {
    let Some(column) = column else {
        return notes.map(str::to_string);
    };

    let base = strip_known(notes.unwrap_or_default());
    Some(
        format!("{base} {DIRECTIVE_PREFIX}{}", column.id())
            .trim()
            .to_string(),
    )
}
