use thiserror::Error;

use super::{Block, Document, Inline};

/// A broken document invariant. `block` is the zero-based block index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("block {block}: heading has no text")]
    EmptyHeading { block: usize },
    #[error("block {block}: link has an empty href")]
    EmptyHref { block: usize },
    #[error("block {block}: link `{href}` has an empty label")]
    EmptyLabel { block: usize, href: String },
    #[error("block {block}: line-separated text has no lines")]
    EmptyLines { block: usize },
}

impl Document {
    /// Check that headings have text, every link has a non-empty href and
    /// label, and no line-separated block is empty.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (index, block) in self.blocks().iter().enumerate() {
            match block {
                Block::Heading { text, .. } => {
                    if text.trim().is_empty() {
                        errors.push(ValidationError::EmptyHeading { block: index });
                    }
                }
                Block::Paragraph(inlines) => {
                    for inline in inlines {
                        if let Inline::Link { href, label } = inline {
                            if href.trim().is_empty() {
                                errors.push(ValidationError::EmptyHref { block: index });
                            } else if label.trim().is_empty() {
                                errors.push(ValidationError::EmptyLabel {
                                    block: index,
                                    href: href.clone(),
                                });
                            }
                        }
                    }
                }
                Block::LineBreakSeparatedText(lines) => {
                    if lines.is_empty() {
                        errors.push(ValidationError::EmptyLines { block: index });
                    }
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
