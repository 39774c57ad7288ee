//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable one-line-per-block text
//!   form for `insta` snapshot testing
//! - **`invariants`**: Checks on rendered HTML (list tags balanced, no list item
//!   outside a list, no nested lists)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
