//! Table elements and conversion of tabular data into tables.
//!
//! [`table_from_rows`] turns headers and rows of cells into a complete
//! `<table>`; [`TableSource`] lets any data container feed it. With the
//! `json` feature, [`JsonFrame`](crate::frame::JsonFrame) is such a source.

use crate::error::Result;
use crate::node::{Element, Node};
use crate::validate::sanitize_class_name;

/// Empty `<table>`.
pub fn table() -> Element {
    Element::known("table")
}

/// Empty `<tr>`.
pub fn table_row() -> Element {
    Element::known("tr")
}

/// `<td>` data cell.
pub fn table_data(content: impl Into<Node>) -> Element {
    let mut el = Element::known("td");
    el.push(content);
    el
}

/// `<th>` header cell.
pub fn table_header(content: impl Into<Node>) -> Element {
    let mut el = Element::known("th");
    el.push(content);
    el
}

/// Styling options for [`table_from_rows`].
///
/// ```
/// use balisage::elements::TableOptions;
///
/// let options = TableOptions::new()
///     .with_table_class("report")
///     .with_alternating_rows(false);
/// assert_eq!(options.table_classes, vec!["report"]);
/// assert!(options.columns_as_classes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Classes on the `<table>` element.
    pub table_classes: Vec<String>,
    /// Classes on the header row.
    pub header_classes: Vec<String>,
    /// Classes on every body row.
    pub body_classes: Vec<String>,
    /// Mark body rows `odd`/`even`, counting from 1.
    pub alternating_rows: bool,
    /// Give each data cell its column name, sanitized, as a class.
    pub columns_as_classes: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            table_classes: Vec::new(),
            header_classes: Vec::new(),
            body_classes: Vec::new(),
            alternating_rows: true,
            columns_as_classes: true,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_classes.push(class.into());
        self
    }

    pub fn with_header_class(mut self, class: impl Into<String>) -> Self {
        self.header_classes.push(class.into());
        self
    }

    pub fn with_body_class(mut self, class: impl Into<String>) -> Self {
        self.body_classes.push(class.into());
        self
    }

    pub fn with_alternating_rows(mut self, enabled: bool) -> Self {
        self.alternating_rows = enabled;
        self
    }

    pub fn with_columns_as_classes(mut self, enabled: bool) -> Self {
        self.columns_as_classes = enabled;
        self
    }
}

/// A source of tabular data: column names plus rows of cell text.
pub trait TableSource {
    fn columns(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Build a table from header names and rows of cells.
///
/// Cells are text or any other node, so a cell can hold a link or an image.
/// The `<thead>` is left out when `headers` is empty. Rows may be ragged;
/// cells beyond the last header simply get no column class.
///
/// Fails with [`Error::InvalidClassName`](crate::Error::InvalidClassName) if
/// one of the option classes is not a valid class name.
///
/// ```
/// use balisage::elements::{TableOptions, table_from_rows};
///
/// let table = table_from_rows(
///     &["Name", "Unit Price"],
///     &[vec!["Tea", "3"], vec!["Cake", "5"]],
///     &TableOptions::default(),
/// )?;
/// assert_eq!(
///     table.render(),
///     "<table><thead><tr><th>Name</th><th>Unit Price</th></tr></thead><tbody>\
///      <tr class=\"odd\"><td class=\"name\">Tea</td><td class=\"unit-price\">3</td></tr>\
///      <tr class=\"even\"><td class=\"name\">Cake</td><td class=\"unit-price\">5</td></tr>\
///      </tbody></table>"
/// );
/// # Ok::<(), balisage::Error>(())
/// ```
pub fn table_from_rows<H, R, C>(headers: &[H], rows: &[R], options: &TableOptions) -> Result<Element>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: Clone + Into<Node>,
{
    let mut table = table();
    table.set_classes(&options.table_classes)?;

    if !headers.is_empty() {
        let mut header_row = table_row();
        header_row.set_classes(&options.header_classes)?;
        for name in headers {
            header_row.push(table_header(name.as_ref()));
        }
        let mut thead = Element::known("thead");
        thead.push(header_row);
        table.push(thead);
    }

    let column_classes: Vec<Option<String>> = if options.columns_as_classes {
        headers.iter().map(|h| column_class(h.as_ref())).collect()
    } else {
        Vec::new()
    };

    let mut tbody = Element::known("tbody");
    for (index, row) in rows.iter().enumerate() {
        let mut tr = table_row();
        tr.set_classes(&options.body_classes)?;
        if options.alternating_rows {
            // Rows count from 1, so the first row is odd
            let parity = if index % 2 == 0 { "odd" } else { "even" };
            tr.add_class(parity)?;
        }

        for (col, cell) in row.as_ref().iter().enumerate() {
            let mut td = table_data(cell.clone());
            if let Some(Some(class)) = column_classes.get(col) {
                td.add_class(class.as_str())?;
            }
            tr.push(td);
        }
        tbody.push(tr);
    }
    table.push(tbody);

    Ok(table)
}

/// Build a table from any [`TableSource`].
pub fn table_from_source(source: &dyn TableSource, options: &TableOptions) -> Result<Element> {
    table_from_rows(&source.columns(), &source.rows(), options)
}

fn column_class(name: &str) -> Option<String> {
    let class = sanitize_class_name(name);
    if class.is_none() {
        log::debug!("Column {name:?} cannot be used as a class name, skipping");
    }
    class
}
