//! Page tests.
//!
//! End-to-end rendering of complete documents: scaffolding, head metadata,
//! content ordering and formatting.

use balisage::{
    Element, Error, Indenter, Page, div, heading1, heading2, horizontal_rule, hyperlink, image,
    line_break, paragraph, span,
};

// ============================================================================
// Document Shape
// ============================================================================

#[test]
fn test_sample_page() {
    let mut page = Page::new("Sample Page").with_stylesheet("style.css");
    page.add(heading1("Heading")).unwrap();
    page.add(paragraph("Some text")).unwrap();

    let html = page.render();

    let order = [
        "<!DOCTYPE html>",
        "<html lang=\"en\">",
        "<head>",
        "<title>Sample Page</title>",
        "<link rel=\"stylesheet\" href=\"style.css\" />",
        "</head>",
        "<body>",
        "<h1>Heading</h1>",
        "<p>Some text</p>",
        "</body>",
        "</html>",
    ];
    let mut cursor = 0;
    for fragment in order {
        let found = html[cursor..]
            .find(fragment)
            .unwrap_or_else(|| panic!("{fragment} missing or out of order in {html}"));
        cursor += found + fragment.len();
    }
    assert_eq!(cursor, html.len());
}

#[test]
fn test_single_scaffold_for_any_content() {
    let mut page = Page::new("Many");
    for i in 0..50 {
        page.add(paragraph(format!("p{i}"))).unwrap();
    }
    let html = page.render();
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("<html").count(), 1);
    assert_eq!(html.matches("<body>").count(), 1);
    assert_eq!(html.matches("<p>").count(), 50);
}

#[test]
fn test_rendering_does_not_change_page() {
    let mut page = Page::new("Stable").with_stylesheets(["a.css", "b.css"]);
    page.add_all([heading1("One"), paragraph("Two")]).unwrap();

    let first = page.render();
    let second = page.render();
    assert_eq!(first, second);
    assert_eq!(page.body().children().len(), 2);
}

#[test]
fn test_mixed_content() {
    let mut article = div().with_class("article").unwrap();
    article
        .add(heading2("Photos"))
        .unwrap()
        .add(image("cat.jpg", "A cat"))
        .unwrap()
        .add(line_break())
        .unwrap()
        .add(span("caption"))
        .unwrap()
        .add(horizontal_rule())
        .unwrap()
        .add(hyperlink("/more", "More"))
        .unwrap();

    let mut page = Page::new("Gallery");
    page.add(article).unwrap();

    assert!(page.render().contains(
        "<body><div class=\"article\"><h2>Photos</h2><img src=\"cat.jpg\" alt=\"A cat\" />\
         <br /><span>caption</span><hr /><a href=\"/more\">More</a></div></body>"
    ));
}

#[test]
fn test_body_attributes() {
    let mut page = Page::new("T");
    page.body_mut()
        .set_attribute("id", "top")
        .unwrap()
        .add_class("dark")
        .unwrap();
    assert!(page.render().contains("<body id=\"top\" class=\"dark\"></body>"));
}

#[test]
fn test_add_text_to_body() {
    let mut page = Page::new("T");
    page.add("1 < 2 & 3 > 2").unwrap();
    assert!(page.render().contains("<body>1 &lt; 2 &amp; 3 &gt; 2</body>"));
}

#[test]
fn test_void_child_error_leaves_page() {
    let mut page = Page::new("T");
    page.add(line_break()).unwrap();
    let before = page.render();

    let mut img = image("a.png", "");
    assert!(matches!(img.add("caption"), Err(Error::VoidElement(_))));
    page.add(img).unwrap();
    assert!(page.render().starts_with(&before[..before.len() - "</body></html>".len()]));
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_indented_page() {
    let mut page = Page::new("Sample Page")
        .with_stylesheet("style.css")
        .with_formatter(Indenter::default());
    page.add(heading1("Heading")).unwrap();
    page.add(paragraph("Some text")).unwrap();

    let expected = "\
<!DOCTYPE html>
<html lang=\"en\">
  <head>
    <meta charset=\"UTF-8\" />
    <title>Sample Page</title>
    <link rel=\"stylesheet\" href=\"style.css\" />
  </head>
  <body>
    <h1>Heading</h1>
    <p>Some text</p>
  </body>
</html>
";
    assert_eq!(page.render(), expected);
}

#[test]
fn test_render_with_overrides_page_formatter() {
    let mut page = Page::new("T").with_formatter(Indenter::new(8));
    page.add(paragraph("x")).unwrap();

    let flat = page.render_with(&|html: &str| html.to_string());
    assert!(!flat.contains('\n'));

    let narrow = page.render_with(&Indenter::new(1));
    assert!(narrow.contains("\n  <p>x</p>\n"));
    assert!(page.render().contains("\n                <p>x</p>\n"));
}

#[test]
fn test_formatting_preserves_content() {
    let mut list = Element::new("ul").unwrap();
    for word in ["alpha", "beta & gamma", "<delta>"] {
        list.add(Element::new("li").unwrap().with_child(word).unwrap())
            .unwrap();
    }
    let mut page = Page::new("Words");
    page.add(list).unwrap();

    let flat = page.render_with(&|html: &str| html.to_string());
    let pretty = page.render_with(&Indenter::default());
    let squash = |s: &str| s.split_whitespace().collect::<String>();
    assert_eq!(squash(&flat), squash(&pretty));
}
