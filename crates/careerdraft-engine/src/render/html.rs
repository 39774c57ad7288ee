use crate::parsing::{blocks::BlockNode, parse_document};

pub const LIST_OPEN: &str = "<ul>";
pub const LIST_CLOSE: &str = "</ul>";

/// Converts markdown-subset text into HTML block fragments.
///
/// Each fragment is terminated by `\n`. Input made only of blank lines gives
/// an empty string. Text content is HTML-escaped, so any markup the model
/// produced shows up literally.
///
/// ```
/// use careerdraft_engine::render_html;
///
/// assert_eq!(
///     render_html("- a\n- b"),
///     "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
/// );
/// ```
pub fn render_html(text: &str) -> String {
    render_blocks(&parse_document(text).blocks)
}

/// Emits HTML for already-parsed blocks.
pub fn render_blocks(blocks: &[BlockNode<'_>]) -> String {
    let mut out = String::new();
    for b in blocks {
        push_block(&mut out, b);
    }
    out
}

fn push_block(out: &mut String, b: &BlockNode<'_>) {
    match b {
        BlockNode::List { items } => {
            out.push_str(LIST_OPEN);
            out.push('\n');
            for item in items {
                push_element(out, "<li>", item, "</li>");
            }
            out.push_str(LIST_CLOSE);
            out.push('\n');
        }
        BlockNode::ProjectTitle(text) => {
            push_element(out, r#"<h3 class="project-title">"#, text, "</h3>");
        }
        BlockNode::SectionTitle(text) => {
            push_element(out, r#"<h2 class="section-title">"#, text, "</h2>");
        }
        BlockNode::Paragraph(text) => push_element(out, "<p>", text, "</p>"),
    }
}

fn push_element(out: &mut String, open: &str, text: &str, close: &str) {
    out.push_str(open);
    html_escape::encode_text_to_string(text, out);
    out.push_str(close);
    out.push('\n');
}
