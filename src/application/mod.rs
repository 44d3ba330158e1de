//! Application layer - Use cases and orchestration

pub mod batch;
pub mod convert;
pub mod init;
pub mod inspect_fields;

pub use batch::{BatchOptions, BatchReport, BatchService, ConvertedFile};
pub use convert::{convert, ConvertService};
pub use inspect_fields::{FieldEntry, FieldsService};
