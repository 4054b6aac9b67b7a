//! Constructors for common HTML elements.
//!
//! Each constructor returns a plain [`Element`](crate::Element) with a
//! known-good tag, so none of them can fail. Content arguments take anything
//! that converts into a [`Node`](crate::Node): text or another element.
//!
//! ```
//! use balisage::elements::{div, heading2, paragraph};
//!
//! let mut section = div();
//! section.add(heading2("Results"))?.add(paragraph("All green."))?;
//! assert_eq!(
//!     section.render(),
//!     "<div><h2>Results</h2><p>All green.</p></div>"
//! );
//! # Ok::<(), balisage::Error>(())
//! ```

mod format;
mod image;
mod links;
mod lists;
pub mod tables;
mod text;

pub use format::{div, horizontal_rule, line_break, span};
pub use image::image;
pub use links::{hyperlink, stylesheet_link};
pub use lists::{list_item, ordered_list, ordered_list_of, unordered_list, unordered_list_of};
pub use tables::{
    TableOptions, TableSource, table, table_data, table_from_rows, table_from_source,
    table_header, table_row,
};
pub use text::{
    heading, heading1, heading2, heading3, heading4, heading5, heading6, paragraph,
};
