pub mod document;
pub mod io;
pub mod parsing;
pub mod prompts;
pub mod render;

// Re-export key types for easier usage
pub use document::*;
pub use io::{ExportFormat, IoError, export_section};
pub use prompts::*;
pub use render::{render_blocks, render_html};
