use std::fmt::Write;

use crate::parsing::blocks::BlockNode;

/// Renders blocks as one line each, e.g. `List ["a", "b"]` or `Paragraph "text"`.
pub fn normalize(blocks: &[BlockNode<'_>]) -> String {
    let mut out = String::new();
    for b in blocks {
        let _ = match b {
            BlockNode::List { items } => writeln!(out, "{} {items:?}", b.kind_name()),
            BlockNode::ProjectTitle(text)
            | BlockNode::SectionTitle(text)
            | BlockNode::Paragraph(text) => writeln!(out, "{} {text:?}", b.kind_name()),
        };
    }
    out
}
