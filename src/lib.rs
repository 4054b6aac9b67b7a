//! # balisage
//!
//! Build HTML documents from typed, validated element trees instead of
//! string concatenation or templates.
//!
//! ## Features
//!
//! - Elements with insertion-ordered attributes and de-duplicated classes
//! - Validation at the point of mutation: bad attribute, class or tag names
//!   and children on void elements are rejected, never rendered
//! - Deterministic, escaped serialization with pluggable pretty formatting
//! - Whole pages with doctype, head metadata and stylesheets, saved in any
//!   WHATWG encoding
//! - Tables from rows of cells or JSON data frames (`json` feature)
//! - Parsing back into element trees through html5ever
//!
//! ## Quick Start
//!
//! ```no_run
//! use balisage::{Page, heading1, paragraph};
//!
//! let mut page = Page::new("Sample Page").with_stylesheet("style.css");
//! page.add(heading1("Heading"))?;
//! page.add(paragraph("Some text"))?;
//! page.save("sample.html")?;
//! # Ok::<(), balisage::Error>(())
//! ```
//!
//! ## Working with Elements
//!
//! [`Element`] is the central type. Children are anything that converts into
//! a [`Node`]: text or other elements.
//!
//! ```
//! use balisage::{Element, hyperlink, unordered_list_of};
//!
//! let mut nav = Element::new("nav")?;
//! nav.add_class("menu")?
//!     .set_attribute("aria-label", "Main")?
//!     .add(unordered_list_of([hyperlink("/", "Home"), hyperlink("/blog", "Blog")]))?;
//!
//! assert_eq!(
//!     nav.render(),
//!     "<nav aria-label=\"Main\" class=\"menu\"><ul>\
//!      <li><a href=\"/\">Home</a></li><li><a href=\"/blog\">Blog</a></li>\
//!      </ul></nav>"
//! );
//! # Ok::<(), balisage::Error>(())
//! ```

pub mod attributes;
pub mod dom;
pub mod elements;
pub mod error;
pub mod format;
#[cfg(feature = "json")]
pub mod frame;
pub mod node;
pub mod page;
pub mod serialize;
pub mod util;
pub mod validate;

pub use attributes::{Attributes, ClassList};
pub use elements::{
    TableOptions, TableSource, div, heading, heading1, heading2, heading3, heading4, heading5,
    heading6, horizontal_rule, hyperlink, image, line_break, list_item, ordered_list,
    ordered_list_of, paragraph, span, stylesheet_link, table, table_data, table_from_rows,
    table_from_source, table_header, table_row, unordered_list, unordered_list_of,
};
pub use error::{Error, Result};
pub use format::{Formatter, Indenter};
#[cfg(feature = "json")]
pub use frame::JsonFrame;
pub use node::{Element, Node};
pub use page::Page;
