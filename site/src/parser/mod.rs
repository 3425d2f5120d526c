pub mod error;
mod markdown;

pub use error::ParseError;

use crate::document::Document;

/// A successfully parsed page plus any warnings raised along the way.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub document: Document,
    pub warnings: Vec<ParseError>,
}

/// Reads a hand-authored Markdown page into a [`Document`].
pub struct Parser {
    source: String,
    file_id: usize,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// Parse the source. Fails with every error found, warnings included.
    pub fn parse(&self) -> Result<Parsed, Vec<ParseError>> {
        markdown::parse_document(&self.source, self.file_id)
    }
}
