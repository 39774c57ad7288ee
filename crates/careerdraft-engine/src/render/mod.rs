//! HTML emission for parsed blocks.

pub mod html;

pub use html::{render_blocks, render_html};
