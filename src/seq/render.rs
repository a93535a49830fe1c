//! Snapshot rendering helpers
//!
//! Text formatting used by the demo binary to show container state after
//! each mutation.

use std::fmt::Display;

/// Render a snapshot as a comma-joined bracketed string, e.g. `[1, 2, 3]`.
pub fn join_bracketed<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Render a search result the classic way: the index, or -1 for no match.
pub fn index_or_sentinel(index: Option<usize>) -> i64 {
    match index {
        Some(i) => i as i64,
        None => -1,
    }
}
