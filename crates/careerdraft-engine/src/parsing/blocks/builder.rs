use super::{classify::LineClass, types::BlockNode};

/// Whether a bullet list is currently accumulating items.
#[derive(Debug, Default)]
enum ListState<'a> {
    #[default]
    Closed,
    Open {
        items: Vec<&'a str>,
    },
}

/// Block construction state machine.
///
/// Feed it one [`LineClass`] per source line, then call [`finish`](Self::finish).
/// Any non-bullet line closes an open list before its own block is appended,
/// so emitted lists are always terminated.
pub struct BlockBuilder<'a> {
    list: ListState<'a>,
    out: Vec<BlockNode<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            list: ListState::Closed,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        match c {
            LineClass::Blank => self.close_list(),
            LineClass::Bullet { text } => self.push_item(text),
            LineClass::ProjectTitle { text } => {
                self.close_list();
                self.out.push(BlockNode::ProjectTitle(text));
            }
            LineClass::SectionTitle { text } => {
                self.close_list();
                self.out.push(BlockNode::SectionTitle(text));
            }
            LineClass::Paragraph { text } => {
                self.close_list();
                self.out.push(BlockNode::Paragraph(text));
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode<'a>> {
        // EOF close
        self.close_list();
        self.out
    }

    fn push_item(&mut self, text: &'a str) {
        match &mut self.list {
            ListState::Open { items } => items.push(text),
            ListState::Closed => self.list = ListState::Open { items: vec![text] },
        }
    }

    fn close_list(&mut self) {
        if let ListState::Open { items } = std::mem::take(&mut self.list) {
            self.out.push(BlockNode::List { items });
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
