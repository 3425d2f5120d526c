use pulldown_cmark::{CowStr, Event};

use crate::document::Document;

/// Wrapping for a standalone HTML page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageShell {
    pub title: String,
    pub lang: String,
}

impl PageShell {
    pub fn new(title: impl Into<String>) -> Self {
        PageShell {
            title: title.into(),
            lang: "en".to_string(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// Render a document as a complete HTML5 page.
pub fn html_page(doc: &Document, shell: &PageShell) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"");
    push_escaped(&mut out, &shell.lang);
    out.push_str("\">\n<head>\n<meta charset=\"utf-8\" />\n<title>");
    push_escaped(&mut out, &shell.title);
    out.push_str("</title>\n</head>\n<body>\n");
    out.push_str(&super::html(doc));
    out.push_str("</body>\n</html>\n");
    out
}

fn push_escaped(out: &mut String, text: &str) {
    let mut escaped = String::new();
    pulldown_cmark::html::push_html(&mut escaped, std::iter::once(Event::Text(CowStr::Borrowed(text))));
    // Body-text escaping leaves quotes alone; attribute values need them escaped.
    out.push_str(&escaped.replace('"', "&quot;"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Inline};

    #[test]
    fn wraps_fragment() {
        let doc = Document::new(vec![Block::paragraph(vec![Inline::text("hi")])]);
        let page = html_page(&doc, &PageShell::new("Q & A").with_lang("pt-BR"));
        assert_eq!(
            page,
            "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\" />\n\
             <title>Q &amp; A</title>\n</head>\n<body>\n<article>\n<p>hi</p>\n</article>\n\
             </body>\n</html>\n"
        );
    }

    #[test]
    fn title_cannot_break_out() {
        let page = html_page(&Document::empty(), &PageShell::new("</title><script>"));
        assert!(page.contains("<title>&lt;/title&gt;&lt;script&gt;</title>"));
    }
}
