//! Marker vocabulary and extraction

pub mod scanner;
pub mod vocabulary;

// Re-export main types
pub use scanner::{extract, TagScanner};
pub use vocabulary::Tag;
