//! Wiki page rendering.
//!
//! Pages follow the Canvas export convention: a metadata block in `head`
//! identifying the resource, a fixed style block, and the caller's markup
//! pasted verbatim into `body`. The front page additionally carries a
//! `front_page` marker and a leading heading.

use std::fmt::Write;

use crate::xml::escape_xml;

const PAGE_STYLE: &str =
    "body { font-family: Arial, sans-serif; line-height: 1.6; }\nh1 { color: #4169E1; }";

/// Render a wiki page document.
///
/// Only the title and identifier are escaped; `body` is embedded verbatim,
/// so callers are responsible for providing well-formed markup.
pub(crate) fn render_page(title: &str, identifier: &str, front_page: bool, body: &str) -> String {
    let mut doc = String::new();
    doc.push_str("<html>\n<head>\n<title>");
    doc.push_str(&escape_xml(title));
    doc.push_str("</title>\n");
    writeln!(
        doc,
        "<meta name=\"identifier\" content=\"{}\"/>",
        escape_xml(identifier)
    )
    .unwrap();
    doc.push_str("<meta name=\"editing_roles\" content=\"teachers\"/>\n");
    doc.push_str("<meta name=\"workflow_state\" content=\"active\"/>\n");
    if front_page {
        doc.push_str("<meta name=\"front_page\" content=\"true\"/>\n");
    }
    doc.push_str("<style>\n");
    doc.push_str(PAGE_STYLE);
    doc.push_str("\n</style>\n</head>\n<body>\n");
    if front_page {
        writeln!(doc, "<h1>{}</h1>", escape_xml(title)).unwrap();
    }
    doc.push_str(body);
    doc.push_str("\n</body>\n</html>\n");
    doc
}
