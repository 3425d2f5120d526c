mod shell;

use log::debug;
use pulldown_cmark::{CowStr, Event, HeadingLevel, LinkType, Tag, TagEnd};

use crate::document::{Block, Document, Inline};

pub use shell::{PageShell, html_page};

/// Convert a document into a pulldown-cmark event stream.
///
/// Non-heading blocks are wrapped in a single `<article>` element. The
/// events borrow from `doc`.
pub fn events(doc: &Document) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut in_article = false;

    for block in doc.blocks() {
        match block {
            Block::Heading { level, text } => {
                if in_article {
                    events.push(Event::Html(CowStr::Borrowed("</article>\n")));
                    in_article = false;
                }
                let level = heading_level(*level);
                events.push(Event::Start(Tag::Heading {
                    level,
                    id: None,
                    classes: Vec::new(),
                    attrs: Vec::new(),
                }));
                events.push(Event::Text(CowStr::Borrowed(text.as_str())));
                events.push(Event::End(TagEnd::Heading(level)));
            }
            Block::Paragraph(inlines) => {
                if !in_article {
                    events.push(Event::Html(CowStr::Borrowed("<article>\n")));
                    in_article = true;
                }
                events.push(Event::Start(Tag::Paragraph));
                for inline in inlines {
                    push_inline(&mut events, inline);
                }
                events.push(Event::End(TagEnd::Paragraph));
            }
            Block::LineBreakSeparatedText(lines) => {
                if !in_article {
                    events.push(Event::Html(CowStr::Borrowed("<article>\n")));
                    in_article = true;
                }
                events.push(Event::Start(Tag::Paragraph));
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        events.push(Event::HardBreak);
                    }
                    events.push(Event::Text(CowStr::Borrowed(line.as_str())));
                }
                events.push(Event::End(TagEnd::Paragraph));
            }
        }
    }

    if in_article {
        events.push(Event::Html(CowStr::Borrowed("</article>\n")));
    }

    events
}

fn push_inline<'a>(events: &mut Vec<Event<'a>>, inline: &'a Inline) {
    match inline {
        Inline::Text(text) => events.push(Event::Text(CowStr::Borrowed(text.as_str()))),
        Inline::Link { href, label } => {
            events.push(Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url: CowStr::Borrowed(href.as_str()),
                title: CowStr::Borrowed(""),
                id: CowStr::Borrowed(""),
            }));
            events.push(Event::Text(CowStr::Borrowed(label.as_str())));
            events.push(Event::End(TagEnd::Link));
        }
    }
}

fn heading_level(level: u8) -> HeadingLevel {
    match level {
        0 | 1 => HeadingLevel::H1,
        2 => HeadingLevel::H2,
        3 => HeadingLevel::H3,
        4 => HeadingLevel::H4,
        5 => HeadingLevel::H5,
        _ => HeadingLevel::H6,
    }
}

/// Render a document as an HTML fragment.
pub fn html(doc: &Document) -> String {
    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, events(doc).into_iter());
    debug!("rendered {} blocks into {} bytes of html", doc.blocks().len(), out.len());
    out
}
