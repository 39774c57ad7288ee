//! # Block Parsing
//!
//! Two-phase block parsing for the resume markdown subset.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and classified
//!    into a `LineClass` (blank, bullet, project title, section title, paragraph)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks whether a list
//!    is open and emits `BlockNode`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`
//! - **`kinds`**: block-specific types with owned markers (ListItem, Heading)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every list is closed: by the next non-bullet line or at end of input
//! - No nesting: indentation is trimmed away before classification
//! - Unknown syntax is kept as literal paragraph text

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::BlockNode;
