//! Pretty formatting for serialized HTML.
//!
//! Formatting is a pluggable step after serialization: anything that
//! implements [`Formatter`] can re-flow the flat output. [`Indenter`] is the
//! built-in implementation; closures `Fn(&str) -> String` work too, which
//! makes it easy to hand the output to an external tool.
//!
//! Formatters only touch whitespace between tags. Tag names, attributes and
//! the characters of non-blank text are passed through unchanged.

use crate::validate::is_void_tag;

/// Re-flows rendered HTML for readability.
pub trait Formatter: Send + Sync {
    fn format(&self, html: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, html: &str) -> String {
        self(html)
    }
}

/// One node per line, nested content indented by `width` spaces.
///
/// Elements holding a single text run (or nothing) stay on one line.
/// Content of `pre` and `textarea` is kept verbatim.
///
/// Mixed content is split too: in `<p>a<b>b</b></p>` the text and the `<b>`
/// land on separate lines, so a browser shows "a b" where the flat output
/// showed "ab". Keep such markup flat, or format it with a closure, when
/// inline spacing matters.
///
/// # Examples
///
/// ```
/// use balisage::format::{Formatter, Indenter};
///
/// let flat = "<ul><li>One</li><li>Two</li></ul>";
/// assert_eq!(
///     Indenter::new(2).format(flat),
///     "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indenter {
    width: usize,
}

impl Default for Indenter {
    fn default() -> Self {
        Self { width: 2 }
    }
}

impl Indenter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Formatter for Indenter {
    fn format(&self, html: &str) -> String {
        let tokens = tokenize(html);
        let mut out = String::with_capacity(html.len() + html.len() / 2);
        let mut depth = 0usize;
        let mut i = 0;

        while i < tokens.len() {
            match tokens[i] {
                Token::Markup(raw) => self.line(&mut out, depth, raw),
                Token::Close { raw, .. } => {
                    depth = depth.saturating_sub(1);
                    self.line(&mut out, depth, raw);
                }
                Token::Open { raw, void: true, .. } => self.line(&mut out, depth, raw),
                Token::Open { name, raw, .. } => {
                    if is_preformatted(name)
                        && let Some(end) = find_close(&tokens, i + 1, name)
                    {
                        let verbatim: String = tokens[i..=end].iter().map(Token::raw).collect();
                        self.line(&mut out, depth, &verbatim);
                        i = end + 1;
                        continue;
                    }

                    match (tokens.get(i + 1), tokens.get(i + 2)) {
                        (Some(Token::Close { name: close, raw: close_raw }), _)
                            if close.eq_ignore_ascii_case(name) =>
                        {
                            self.line(&mut out, depth, &format!("{raw}{close_raw}"));
                            i += 2;
                            continue;
                        }
                        (
                            Some(Token::Text(text)),
                            Some(Token::Close { name: close, raw: close_raw }),
                        ) if close.eq_ignore_ascii_case(name) => {
                            let line = format!("{raw}{}{close_raw}", text.trim());
                            self.line(&mut out, depth, &line);
                            i += 3;
                            continue;
                        }
                        _ => {
                            self.line(&mut out, depth, raw);
                            depth += 1;
                        }
                    }
                }
                Token::Text(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        self.line(&mut out, depth, text);
                    }
                }
            }
            i += 1;
        }

        out
    }
}

impl Indenter {
    fn line(&self, out: &mut String, depth: usize, content: &str) {
        for _ in 0..depth * self.width {
            out.push(' ');
        }
        out.push_str(content);
        out.push('\n');
    }
}

fn is_preformatted(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("pre") || tag.eq_ignore_ascii_case("textarea")
}

fn find_close(tokens: &[Token<'_>], from: usize, name: &str) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, t)| matches!(t, Token::Close { name: n, .. } if n.eq_ignore_ascii_case(name)))
        .map(|(index, _)| index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Doctype, comment or processing instruction.
    Markup(&'a str),
    Open {
        name: &'a str,
        raw: &'a str,
        void: bool,
    },
    Close {
        name: &'a str,
        raw: &'a str,
    },
    Text(&'a str),
}

impl<'a> Token<'a> {
    fn raw(&self) -> &'a str {
        match *self {
            Token::Markup(raw) | Token::Text(raw) => raw,
            Token::Open { raw, .. } | Token::Close { raw, .. } => raw,
        }
    }
}

/// Split serialized HTML into tags and text runs.
///
/// Relies on `<` and `>` never appearing unescaped in text or attribute
/// values, which holds for everything the serializer emits.
fn tokenize(html: &str) -> Vec<Token<'_>> {
    let bytes = html.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(rel_start) = memchr::memchr(b'<', &bytes[pos..]) else {
            tokens.push(Token::Text(&html[pos..]));
            break;
        };
        let tag_start = pos + rel_start;
        if tag_start > pos {
            tokens.push(Token::Text(&html[pos..tag_start]));
        }

        let Some(rel_end) = memchr::memchr(b'>', &bytes[tag_start..]) else {
            tokens.push(Token::Text(&html[tag_start..]));
            break;
        };
        let tag_end = tag_start + rel_end + 1;
        tokens.push(classify(&html[tag_start..tag_end]));
        pos = tag_end;
    }

    tokens
}

fn classify(raw: &str) -> Token<'_> {
    if raw.starts_with("<!") || raw.starts_with("<?") {
        return Token::Markup(raw);
    }
    if let Some(rest) = raw.strip_prefix("</") {
        let name = rest.trim_end_matches('>').trim();
        return Token::Close { name, raw };
    }

    let inner = &raw[1..];
    let name_len = inner
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(inner.len());
    let name = &inner[..name_len];
    let void = raw.ends_with("/>") || is_void_tag(name);
    Token::Open { name, raw, void }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent(html: &str) -> String {
        Indenter::default().format(html)
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("<p class=\"a\">hi<br /></p>");
        assert_eq!(
            tokens,
            vec![
                Token::Open {
                    name: "p",
                    raw: "<p class=\"a\">",
                    void: false
                },
                Token::Text("hi"),
                Token::Open {
                    name: "br",
                    raw: "<br />",
                    void: true
                },
                Token::Close {
                    name: "p",
                    raw: "</p>"
                },
            ]
        );
    }

    #[test]
    fn test_nested_blocks() {
        let out = indent("<div><p>Some text</p><hr /></div>");
        assert_eq!(out, "<div>\n  <p>Some text</p>\n  <hr />\n</div>\n");
    }

    #[test]
    fn test_mixed_content_splits_lines() {
        assert_eq!(indent("<p>a<b>b</b></p>"), "<p>\n  a\n  <b>b</b>\n</p>\n");
    }

    #[test]
    fn test_empty_element_stays_inline() {
        assert_eq!(indent("<div></div>"), "<div></div>\n");
    }

    #[test]
    fn test_doctype_does_not_indent() {
        let out = indent("<!DOCTYPE html><html><body></body></html>");
        assert_eq!(out, "<!DOCTYPE html>\n<html>\n  <body></body>\n</html>\n");
    }

    #[test]
    fn test_mixed_content() {
        let out = indent("<p>Hello <b>World</b></p>");
        assert_eq!(out, "<p>\n  Hello\n  <b>World</b>\n</p>\n");
    }

    #[test]
    fn test_preformatted_kept_verbatim() {
        let out = indent("<div><pre>  a\n    b</pre></div>");
        assert_eq!(out, "<div>\n  <pre>  a\n    b</pre>\n</div>\n");
    }

    #[test]
    fn test_custom_width() {
        let out = Indenter::new(4).format("<ul><li>x</li></ul>");
        assert_eq!(out, "<ul>\n    <li>x</li>\n</ul>\n");
    }

    #[test]
    fn test_closure_formatter() {
        let upper = |html: &str| html.to_uppercase();
        assert_eq!(upper.format("<p>a</p>"), "<P>A</P>");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let once = indent("<div><p>a</p><ul><li>b</li></ul></div>");
        assert_eq!(indent(&once), once);
    }
}
