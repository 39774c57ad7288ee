/// Bullet list item with owned marker characters.
///
/// All bullet syntax knowledge lives here, not in the classifier.
pub struct ListItem;

impl ListItem {
    /// Characters that open a bullet line.
    pub const MARKERS: [char; 2] = ['*', '-'];

    /// Returns true if an already-trimmed line opens a bullet item.
    pub fn opens(trimmed: &str) -> bool {
        trimmed.starts_with(Self::MARKERS)
    }

    /// Strips the leading run of marker characters and the whitespace around
    /// the item text.
    ///
    /// `"- a"`, `"* a"` and `"** a"` all yield `"a"`. A line made only of
    /// markers (e.g. `"---"`) yields an empty item.
    pub fn item_text(trimmed: &str) -> &str {
        trimmed.trim_start_matches(Self::MARKERS).trim()
    }
}
