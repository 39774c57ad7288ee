use super::{
    kinds::{Heading, HeadingLevel, ListItem},
    open::{BlockOpen, try_open_leaf},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Text payloads borrow from the
/// input and already have markers and whitespace stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    /// `*` or `-` line; `text` is the item text.
    Bullet { text: &'a str },
    /// `###` line.
    ProjectTitle { text: &'a str },
    /// `#` or `##` line.
    SectionTitle { text: &'a str },
    /// Anything else, trimmed.
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Never fails: unrecognised leading characters fall through to
    /// [`LineClass::Paragraph`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        match try_open_leaf(trimmed) {
            Some(BlockOpen::ListItem) => LineClass::Bullet {
                text: ListItem::item_text(trimmed),
            },
            Some(BlockOpen::Heading {
                level: HeadingLevel::Project,
            }) => LineClass::ProjectTitle {
                text: Heading::text(trimmed),
            },
            Some(BlockOpen::Heading {
                level: HeadingLevel::Section,
            }) => LineClass::SectionTitle {
                text: Heading::text(trimmed),
            },
            None => LineClass::Paragraph { text: trimmed },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("   \t ", LineClass::Blank)]
    #[case("\r", LineClass::Blank)]
    #[case("  - item ", LineClass::Bullet { text: "item" })]
    #[case("* item", LineClass::Bullet { text: "item" })]
    #[case("### Proj", LineClass::ProjectTitle { text: "Proj" })]
    #[case("## Sec", LineClass::SectionTitle { text: "Sec" })]
    #[case("# Sec", LineClass::SectionTitle { text: "Sec" })]
    #[case("#### Deep", LineClass::Paragraph { text: "#### Deep" })]
    #[case("  plain text  ", LineClass::Paragraph { text: "plain text" })]
    #[case("1. ordered", LineClass::Paragraph { text: "1. ordered" })]
    fn classifies_lines(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(MarkdownLineClassifier.classify(line), expected);
    }

    #[test]
    fn marker_only_lines_degrade_to_empty_text() {
        assert_eq!(
            MarkdownLineClassifier.classify("-"),
            LineClass::Bullet { text: "" }
        );
        assert_eq!(
            MarkdownLineClassifier.classify("##"),
            LineClass::SectionTitle { text: "" }
        );
    }
}
