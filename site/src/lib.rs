pub mod document;
pub mod pages;
pub mod parser;
pub mod render;

pub use document::{Block, Document, Inline};
pub use pages::{AboutPage, Page};
