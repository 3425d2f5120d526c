pub mod validate;

use std::fmt;

pub use validate::ValidationError;

/// A Document is the ordered sequence of blocks that makes up a page.
/// It is built fresh on every render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Document { blocks }
    }

    pub fn empty() -> Self {
        Document { blocks: Vec::new() }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text of every heading, in document order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &[Inline]> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(inlines) => Some(inlines.as_slice()),
            _ => None,
        })
    }

    /// Every link in the document as `(href, label)`, in document order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paragraphs()
            .flat_map(|inlines| inlines.iter())
            .filter_map(|inline| match inline {
                Inline::Link { href, label } => Some((href.as_str(), label.as_str())),
                Inline::Text(_) => None,
            })
    }
}

/// A structural unit of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Vec<Inline>),
    /// Lines separated by forced line breaks (a signature, an address).
    LineBreakSeparatedText(Vec<String>),
}

impl Block {
    /// A top-level heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading {
            level: 1,
            text: text.into(),
        }
    }

    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Block::Paragraph(inlines)
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::LineBreakSeparatedText(lines.into_iter().map(Into::into).collect())
    }
}

/// Text-level content within a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Link { href: String, label: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Inline::Link {
            href: href.into(),
            label: label.into(),
        }
    }
}

// Display renders CommonMark. Blocks are separated by one blank line.

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading { level, text } => {
                for _ in 0..*level {
                    write!(f, "#")?;
                }
                write!(f, " ")?;
                // A trailing `#` run would otherwise close the heading.
                for c in text.chars() {
                    if c == '#' {
                        write!(f, "\\")?;
                    }
                    write_escaped_char(f, c)?;
                }
                writeln!(f)
            }
            Block::Paragraph(inlines) => {
                for (i, inline) in inlines.iter().enumerate() {
                    match inline {
                        Inline::Text(text) if i == 0 => {
                            let rest = write_line_start(f, text)?;
                            write_escaped(f, rest)?;
                        }
                        _ => write!(f, "{}", inline)?,
                    }
                }
                writeln!(f)
            }
            Block::LineBreakSeparatedText(lines) => {
                let last = lines.len().saturating_sub(1);
                for (i, line) in lines.iter().enumerate() {
                    let rest = write_line_start(f, line)?;
                    write_escaped(f, rest)?;
                    if i < last {
                        write!(f, "\\")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(s) => write_escaped(f, s),
            Inline::Link { href, label } => {
                write!(f, "[")?;
                write_escaped(f, label)?;
                write!(f, "](")?;
                write_destination(f, href)?;
                write!(f, ")")
            }
        }
    }
}

/// Backslash-escape the characters that would otherwise start inline markup
/// or an entity reference.
fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        write_escaped_char(f, c)?;
    }
    Ok(())
}

fn write_escaped_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '&') {
        write!(f, "\\")?;
    }
    write!(f, "{}", c)
}

/// Escape a marker at the start of a line that would open a heading, quote,
/// list, fence or setext underline. Returns the part of `text` still to write.
fn write_line_start<'a>(f: &mut fmt::Formatter<'_>, text: &'a str) -> Result<&'a str, fmt::Error> {
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &text[digits..];
        if rest.starts_with(['.', ')']) {
            write!(f, "{}\\{}", &text[..digits], &rest[..1])?;
            return Ok(&rest[1..]);
        }
        return Ok(text);
    }
    if text.starts_with(['#', '>', '-', '+', '=', '~']) {
        write!(f, "\\{}", &text[..1])?;
        return Ok(&text[1..]);
    }
    Ok(text)
}

/// Link destinations with spaces or parentheses use the `<...>` form.
fn write_destination(f: &mut fmt::Formatter<'_>, href: &str) -> fmt::Result {
    let angled = href.is_empty() || href.contains(|c: char| c.is_whitespace() || c == '(' || c == ')');
    if angled {
        write!(f, "<")?;
    }
    for c in href.chars() {
        if matches!(c, '\\' | '<' | '>' | '&') {
            write!(f, "\\")?;
        }
        write!(f, "{}", c)?;
    }
    if angled {
        write!(f, ">")?;
    }
    Ok(())
}
