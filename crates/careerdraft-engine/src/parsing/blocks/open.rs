use super::kinds::{Heading, HeadingLevel, ListItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    ListItem,
    Heading { level: HeadingLevel },
}

pub fn try_open_leaf(trimmed: &str) -> Option<BlockOpen> {
    // Precedence: bullet markers beat heading markers.
    if ListItem::opens(trimmed) {
        return Some(BlockOpen::ListItem);
    }
    Heading::level(trimmed).map(|level| BlockOpen::Heading { level })
}
