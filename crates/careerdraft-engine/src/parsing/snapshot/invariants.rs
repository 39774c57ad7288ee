use crate::render::html::{LIST_CLOSE, LIST_OPEN};

const ITEM_OPEN: &str = "<li>";

/// Validates rendered HTML invariants.
///
/// Asserts that:
/// - Every `<ul>` is closed by a `</ul>` before the next `<ul>` (no nesting)
/// - No `</ul>` appears without an open list
/// - Every `<li>` sits inside an open list
/// - No list is left open at the end
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(html: &str) {
    let mut open_at: Option<usize> = None;

    for (line_no, line) in html.lines().enumerate() {
        if line == LIST_OPEN {
            assert!(
                open_at.is_none(),
                "nested list opened on line {line_no} while list from line {open_at:?} is open"
            );
            open_at = Some(line_no);
        } else if line == LIST_CLOSE {
            assert!(
                open_at.is_some(),
                "list closed on line {line_no} without an open list"
            );
            open_at = None;
        } else if line.starts_with(ITEM_OPEN) {
            assert!(
                open_at.is_some(),
                "list item on line {line_no} outside a list: {line}"
            );
        }
    }

    assert!(
        open_at.is_none(),
        "unterminated list opened on line {open_at:?}"
    );
}
