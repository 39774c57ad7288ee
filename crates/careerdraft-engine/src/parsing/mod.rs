pub mod blocks;
pub mod snapshot;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<BlockNode<'a>>,
}

/// Parses model-generated text into blocks. Accepts `\n` and `\r\n` endings.
pub fn parse_document(text: &str) -> ParsedDoc<'_> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let mut line_count = 0usize;
    for line in text.lines() {
        builder.push(classifier.classify(line));
        line_count += 1;
    }

    let blocks = builder.finish();
    log::debug!("parsed {line_count} lines into {} blocks", blocks.len());
    ParsedDoc { blocks }
}
