//! Domain layer - Extraction, classification and document assembly

pub mod body;
pub mod classify;
pub mod document;
pub mod fields;
pub mod letter;
pub mod tags;
pub mod tei;

pub use body::LetterBody;
pub use document::{assemble, DocumentSettings};
pub use letter::Letter;
pub use tags::{Tag, TagScanner};
