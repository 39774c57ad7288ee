pub mod heading;
pub mod list_item;

pub use heading::{Heading, HeadingLevel};
pub use list_item::ListItem;
