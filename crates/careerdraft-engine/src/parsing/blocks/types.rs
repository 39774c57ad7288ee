/// A block produced by the [`BlockBuilder`](super::BlockBuilder).
///
/// Text borrows from the parsed input. A `List` always holds at least one
/// item: lists only open on a bullet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode<'a> {
    /// A bullet list, items in source order.
    List { items: Vec<&'a str> },
    /// A `###` heading.
    ProjectTitle(&'a str),
    /// A `#` or `##` heading.
    SectionTitle(&'a str),
    /// A single non-blank, non-marker line.
    Paragraph(&'a str),
}

impl BlockNode<'_> {
    /// Short kind name, used in logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockNode::List { .. } => "List",
            BlockNode::ProjectTitle(_) => "ProjectTitle",
            BlockNode::SectionTitle(_) => "SectionTitle",
            BlockNode::Paragraph(_) => "Paragraph",
        }
    }
}
