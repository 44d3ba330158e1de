//! lalp-tei - Coded letter to TEI-XML converter
//!
//! Parses the tag-delimited transcription format used for pauper letters
//! (`<F ...>`, `<D ...>`, `<ML ...>` and friends), classifies the letter and
//! writes a fixed-skeleton TEI document.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::convert;
pub use error::{Result, TeiError};
