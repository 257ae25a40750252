mod error;
pub use error::Error;

pub mod mapping;
pub use mapping::{Builder, TableMapping};

pub mod storage;
pub use storage::{FieldStorage, FieldStorageDefinition};

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
