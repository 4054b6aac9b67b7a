//! Complete HTML documents.
//!
//! A [`Page`] owns the document body and the head metadata (title,
//! language, charset, stylesheets). The doctype, `html` and `head`
//! scaffolding is produced fresh on every render, so rendering never
//! changes the page and any amount of content yields one well-formed
//! document.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::elements::stylesheet_link;
use crate::error::Result;
use crate::format::Formatter;
use crate::node::{Element, Node};
use crate::serialize::{DOCTYPE, Serializer};
use crate::util;

/// An HTML document under construction.
///
/// ```
/// use balisage::{Page, heading1, paragraph};
///
/// let mut page = Page::new("Sample Page").with_stylesheet("style.css");
/// page.add(heading1("Heading"))?.add(paragraph("Some text"))?;
///
/// assert_eq!(
///     page.render(),
///     "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\" />\
///      <title>Sample Page</title><link rel=\"stylesheet\" href=\"style.css\" />\
///      </head><body><h1>Heading</h1><p>Some text</p></body></html>"
/// );
/// # Ok::<(), balisage::Error>(())
/// ```
#[derive(Clone)]
pub struct Page {
    title: String,
    lang: String,
    charset: String,
    stylesheets: Vec<String>,
    body: Element,
    formatter: Option<Arc<dyn Formatter>>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: "en".to_string(),
            charset: "UTF-8".to_string(),
            stylesheets: Vec::new(),
            body: Element::known("body"),
            formatter: None,
        }
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn with_stylesheets<I, S>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stylesheets.extend(hrefs.into_iter().map(Into::into));
        self
    }

    /// Value of the `lang` attribute on `<html>`.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Charset declared in the head and used by [`Page::save`].
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Formatter applied by [`Page::render`] and [`Page::save`].
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        let formatter: Arc<dyn Formatter> = Arc::new(formatter);
        self.formatter = Some(formatter);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    /// The `<body>` element, for attributes, classes or direct edits.
    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    // --- Content ---

    /// Append a child to the body.
    pub fn add(&mut self, child: impl Into<Node>) -> Result<&mut Self> {
        self.body.add(child)?;
        Ok(self)
    }

    /// Append several children to the body.
    pub fn add_all<I, C>(&mut self, children: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Node>,
    {
        self.body.add_all(children)?;
        Ok(self)
    }

    // --- Output ---

    /// Render the document, formatted if the page has a formatter.
    pub fn render(&self) -> String {
        let html = self.render_flat();
        match &self.formatter {
            Some(formatter) => formatter.format(&html),
            None => html,
        }
    }

    /// Render the document through `formatter`, ignoring the page's own.
    pub fn render_with(&self, formatter: &dyn Formatter) -> String {
        formatter.format(&self.render_flat())
    }

    /// Render and write to `path` in the page charset.
    ///
    /// The charset label is checked before the file is created, so an
    /// unknown label leaves the filesystem untouched. Labels that cannot be
    /// written as declared (UTF-16, `iso-2022-kr` and the other replacement
    /// labels) fail the same way.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let encoding = util::output_encoding_for_label(&self.charset)?;
        util::write_document(path.as_ref(), &self.render(), encoding)
    }

    fn render_flat(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_document(&mut out);
        out
    }

    fn write_document(&self, out: &mut String) -> fmt::Result {
        let mut html = Element::known("html");
        // Any string is a valid value for a fixed attribute name
        let _ = html.set_attribute("lang", self.lang.as_str());

        let mut ser = Serializer::new(out);
        ser.write_raw(DOCTYPE)?;
        ser.start_element(&html)?;
        ser.write_element(&self.head())?;
        ser.write_element(&self.body)?;
        ser.end_element(&html)
    }

    fn head(&self) -> Element {
        let mut head = Element::known("head");

        let mut meta = Element::known("meta");
        let _ = meta.set_attribute("charset", self.charset.as_str());
        head.push(meta);

        if !self.title.is_empty() {
            let mut title = Element::known("title");
            title.push(self.title.as_str());
            head.push(title);
        }

        for href in &self.stylesheets {
            head.push(stylesheet_link(href.as_str()));
        }
        head
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("title", &self.title)
            .field("lang", &self.lang)
            .field("charset", &self.charset)
            .field("stylesheets", &self.stylesheets)
            .field("body", &self.body)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
