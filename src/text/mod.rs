//! Plain-text normalization for titles, metadata fields, and file names.

use quick_xml::escape::unescape;

/// Reduce a rich-text field to normalized plain text.
///
/// Tags are dropped, entities are decoded, and whitespace runs collapse to
/// a single space. Malformed markup degrades to best effort, never an
/// error.
pub fn plain_text(markup: &str) -> String {
    let mut stripped = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find('<') {
        stripped.push_str(&rest[..pos]);
        match rest[pos..].find('>') {
            Some(end) => {
                // A tag separates words
                stripped.push(' ');
                rest = &rest[pos + end + 1..];
            }
            None => {
                // Unterminated tag: keep the tail verbatim
                stripped.push_str(&rest[pos..]);
                rest = "";
            }
        }
    }
    stripped.push_str(rest);

    let decoded = unescape(&stripped)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| stripped.clone());

    let mut out = String::with_capacity(decoded.len());
    let mut last_was_space = true;
    for ch in decoded.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Compute the `wiki_content` path for a lesson page.
///
/// The lesson name is reduced to plain text with whitespace replaced by
/// hyphens, then suffixed with the zero-based chapter and lesson indices.
/// The index pair makes the path unique per build even when names collide.
pub fn page_file_name(name: &str, chapter_index: usize, lesson_index: usize) -> String {
    let slug = plain_text(name).replace(' ', "-");
    format!("wiki_content/{slug}-{chapter_index}{lesson_index}.html")
}
