/// Which heading fragment a `#` line produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `#` or `##`: a section title.
    Section,
    /// `###`: a project title.
    Project,
}

/// Heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Exact marker count that makes a project title.
    pub const PROJECT_DEPTH: usize = 3;

    /// Returns the heading level for an already-trimmed line.
    ///
    /// One or two markers give a section title, exactly three a project
    /// title. Four or more are not a heading in this dialect and the line
    /// falls through to a paragraph.
    pub fn level(trimmed: &str) -> Option<HeadingLevel> {
        let depth = trimmed.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        match depth {
            1 | 2 => Some(HeadingLevel::Section),
            Self::PROJECT_DEPTH => Some(HeadingLevel::Project),
            _ => None,
        }
    }

    /// Heading text with markers and surrounding whitespace removed.
    pub fn text(trimmed: &str) -> &str {
        trimmed.trim_start_matches(Self::MARKER).trim()
    }
}
