use std::ops::Range;

use log::{debug, warn};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser as CmarkParser, Tag, TagEnd};

use crate::document::{Block, Document, Inline};
use crate::parser::Parsed;
use crate::parser::error::ParseError;

type Spanned<'a> = (Event<'a>, Range<usize>);

pub fn parse_document(source: &str, file_id: usize) -> Result<Parsed, Vec<ParseError>> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let events: Vec<Spanned<'_>> = CmarkParser::new_ext(source, options)
        .into_offset_iter()
        .collect();

    let mut state = ParseState::new(file_id);
    state.process_events(&events);

    debug!(
        "parsed {} blocks with {} diagnostics",
        state.blocks.len(),
        state.diagnostics.len()
    );

    if state.diagnostics.iter().any(ParseError::is_error) {
        return Err(state.diagnostics);
    }
    for warning in &state.diagnostics {
        warn!("{}", warning);
    }
    Ok(Parsed {
        document: Document::new(state.blocks),
        warnings: state.diagnostics,
    })
}

struct ParseState {
    file_id: usize,
    blocks: Vec<Block>,
    diagnostics: Vec<ParseError>,
}

/// Paragraph content before it is classified as prose or line-separated text.
#[derive(Default)]
struct ParagraphBuilder {
    pieces: Vec<Piece>,
}

enum Piece {
    Text(String),
    Link(Inline),
    Break,
}

impl ParagraphBuilder {
    fn push_text(&mut self, text: &str) {
        if let Some(Piece::Text(last)) = self.pieces.last_mut() {
            last.push_str(text);
        } else {
            self.pieces.push(Piece::Text(text.to_string()));
        }
    }

    fn push_link(&mut self, link: Inline) {
        self.pieces.push(Piece::Link(link));
    }

    fn push_break(&mut self) {
        self.pieces.push(Piece::Break);
    }

    fn has_link(&self) -> bool {
        self.pieces.iter().any(|p| matches!(p, Piece::Link(_)))
    }

    fn has_break(&self) -> bool {
        self.pieces.iter().any(|p| matches!(p, Piece::Break))
    }

    /// Plain text split by forced breaks becomes line-separated text;
    /// anything with a link stays a paragraph, breaks turning into spaces.
    fn finish(self) -> Block {
        if self.has_break() && !self.has_link() {
            let mut lines = vec![String::new()];
            for piece in self.pieces {
                match piece {
                    Piece::Text(text) => {
                        if let Some(line) = lines.last_mut() {
                            line.push_str(&text);
                        }
                    }
                    Piece::Break => lines.push(String::new()),
                    Piece::Link(_) => {}
                }
            }
            return Block::LineBreakSeparatedText(lines);
        }

        let mut inlines: Vec<Inline> = Vec::with_capacity(self.pieces.len());
        for piece in self.pieces {
            let text = match piece {
                Piece::Link(link) => {
                    inlines.push(link);
                    continue;
                }
                Piece::Text(text) => text,
                Piece::Break => " ".to_string(),
            };
            match inlines.last_mut() {
                Some(Inline::Text(last)) => last.push_str(&text),
                _ => inlines.push(Inline::Text(text)),
            }
        }
        Block::Paragraph(inlines)
    }
}

impl ParseState {
    fn new(file_id: usize) -> Self {
        ParseState {
            file_id,
            blocks: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn process_events(&mut self, events: &[Spanned<'_>]) {
        let mut i = 0;

        while i < events.len() {
            let (ref ev, ref range) = events[i];

            match ev {
                Event::Start(Tag::Heading { level, .. }) => {
                    let level = heading_level_to_u8(level);
                    i += 1;
                    let text = self.collect_heading_text(events, &mut i);
                    self.blocks.push(Block::Heading { level, text });
                }

                Event::Start(Tag::Paragraph) => {
                    i += 1;
                    let paragraph = self.collect_paragraph(events, &mut i);
                    self.blocks.push(paragraph.finish());
                }

                Event::Start(tag) => {
                    self.diagnostics.push(
                        ParseError::error(
                            format!("unsupported {} in page source", describe(tag)),
                            range.clone(),
                            self.file_id,
                        )
                        .with_note("pages contain only headings, paragraphs and links"),
                    );
                    i += 1;
                    skip_to_matching_end(events, &mut i);
                }

                Event::Rule => {
                    self.diagnostics.push(ParseError::error(
                        "unsupported horizontal rule in page source",
                        range.clone(),
                        self.file_id,
                    ));
                    i += 1;
                }

                _ => {
                    i += 1;
                }
            }
        }
    }

    fn collect_heading_text(&mut self, events: &[Spanned<'_>], i: &mut usize) -> String {
        let mut text = String::new();

        while *i < events.len() {
            let (ref ev, ref range) = events[*i];
            match ev {
                Event::End(TagEnd::Heading(_)) => {
                    *i += 1;
                    break;
                }
                Event::Text(s) | Event::Code(s) => text.push_str(s),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::Start(tag @ (Tag::Link { .. } | Tag::Image { .. })) => {
                    self.diagnostics.push(ParseError::error(
                        format!("{} inside a heading", describe(tag)),
                        range.clone(),
                        self.file_id,
                    ));
                }
                Event::Start(tag) => {
                    let warning = self.flattened(tag, range);
                    self.diagnostics.push(warning);
                }
                Event::InlineHtml(_) | Event::Html(_) => {
                    let error = self.raw_html(range);
                    self.diagnostics.push(error);
                }
                _ => {}
            }
            *i += 1;
        }

        text.trim().to_string()
    }

    fn collect_paragraph(&mut self, events: &[Spanned<'_>], i: &mut usize) -> ParagraphBuilder {
        let mut paragraph = ParagraphBuilder::default();

        while *i < events.len() {
            let (ref ev, ref range) = events[*i];
            match ev {
                Event::End(TagEnd::Paragraph) => {
                    *i += 1;
                    break;
                }
                Event::Text(s) | Event::Code(s) => {
                    paragraph.push_text(s);
                    *i += 1;
                }
                Event::SoftBreak => {
                    paragraph.push_text(" ");
                    *i += 1;
                }
                Event::HardBreak => {
                    paragraph.push_break();
                    *i += 1;
                }
                Event::Start(Tag::Link { dest_url, .. }) => {
                    let start = range.start;
                    *i += 1;
                    let label = self.collect_link_label(events, i);
                    let span = start..events.get(*i - 1).map_or(start, |(_, r)| r.end);
                    if dest_url.trim().is_empty() {
                        self.diagnostics.push(ParseError::error(
                            "link has an empty href",
                            span,
                            self.file_id,
                        ));
                    } else if label.trim().is_empty() {
                        self.diagnostics.push(ParseError::error(
                            format!("link to `{}` has an empty label", dest_url),
                            span,
                            self.file_id,
                        ));
                    } else {
                        paragraph.push_link(Inline::link(dest_url.to_string(), label));
                    }
                }
                Event::Start(tag @ (Tag::Strong | Tag::Emphasis | Tag::Strikethrough)) => {
                    let warning = self.flattened(tag, range);
                    self.diagnostics.push(warning);
                    *i += 1;
                }
                Event::Start(tag) => {
                    self.diagnostics.push(ParseError::error(
                        format!("unsupported {} in paragraph", describe(tag)),
                        range.clone(),
                        self.file_id,
                    ));
                    *i += 1;
                    skip_to_matching_end(events, i);
                }
                Event::InlineHtml(_) | Event::Html(_) => {
                    let error = self.raw_html(range);
                    self.diagnostics.push(error);
                    *i += 1;
                }
                _ => {
                    *i += 1;
                }
            }
        }

        if paragraph.has_link() && paragraph.has_break() {
            self.diagnostics.push(ParseError::warning(
                "line breaks next to links are rendered as plain paragraph text",
                events.get(*i - 1).map_or(0..0, |(_, r)| r.clone()),
                self.file_id,
            ));
        }

        paragraph
    }

    /// Concatenate the text of a link label up to its closing tag. Nested
    /// formatting is flattened with a warning; images and HTML are errors.
    fn collect_link_label(&mut self, events: &[Spanned<'_>], i: &mut usize) -> String {
        let mut text = String::new();

        while *i < events.len() {
            let (ref ev, ref range) = events[*i];
            *i += 1;
            match ev {
                Event::End(TagEnd::Link) => break,
                Event::Text(s) | Event::Code(s) => text.push_str(s),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::Start(tag @ (Tag::Strong | Tag::Emphasis | Tag::Strikethrough)) => {
                    let warning = self.flattened(tag, range);
                    self.diagnostics.push(warning);
                }
                Event::Start(tag) => {
                    self.diagnostics.push(ParseError::error(
                        format!("{} inside a link label", describe(tag)),
                        range.clone(),
                        self.file_id,
                    ));
                    skip_to_matching_end(events, i);
                }
                Event::InlineHtml(_) | Event::Html(_) => {
                    let error = self.raw_html(range);
                    self.diagnostics.push(error);
                }
                _ => {}
            }
        }

        text
    }

    fn raw_html(&self, range: &Range<usize>) -> ParseError {
        ParseError::error("raw HTML is not allowed in page source", range.clone(), self.file_id)
    }

    fn flattened(&self, tag: &Tag<'_>, range: &Range<usize>) -> ParseError {
        ParseError::warning(
            format!("{} is rendered as plain text", describe(tag)),
            range.clone(),
            self.file_id,
        )
    }
}

/// Advance past the End matching an already-consumed Start.
fn skip_to_matching_end(events: &[Spanned<'_>], i: &mut usize) {
    let mut depth = 1u32;
    while *i < events.len() && depth > 0 {
        match events[*i].0 {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            _ => {}
        }
        *i += 1;
    }
}

fn heading_level_to_u8(level: &HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn describe(tag: &Tag<'_>) -> &'static str {
    match tag {
        Tag::Paragraph => "paragraph",
        Tag::Heading { .. } => "heading",
        Tag::BlockQuote(_) => "block quote",
        Tag::CodeBlock(_) => "code block",
        Tag::HtmlBlock => "HTML block",
        Tag::List(_) | Tag::Item => "list",
        Tag::Table(_) | Tag::TableHead | Tag::TableRow | Tag::TableCell => "table",
        Tag::Emphasis => "emphasis",
        Tag::Strong => "strong emphasis",
        Tag::Strikethrough => "strikethrough",
        Tag::Link { .. } => "link",
        Tag::Image { .. } => "image",
        _ => "element",
    }
}
