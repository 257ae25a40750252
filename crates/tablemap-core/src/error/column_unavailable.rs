use super::Error;

/// Error when SQL column information is requested for a field that manages
/// its own storage.
///
/// Custom-storage fields are never name-mapped. Asking for their columns
/// means the caller is building SQL for a field it should have skipped, so
/// this is a configuration error and is never retried.
#[derive(Debug)]
pub(super) struct ColumnUnavailable {
    field: Box<str>,
}

impl std::error::Error for ColumnUnavailable {}

impl core::fmt::Display for ColumnUnavailable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column information not available for the \"{}\" field",
            self.field
        )
    }
}

impl Error {
    /// Creates a column-unavailable error for the named field.
    pub fn column_unavailable(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ColumnUnavailable(ColumnUnavailable {
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a column-unavailable error.
    pub fn is_column_unavailable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnUnavailable(_))
    }

    /// Returns the name of the field whose columns could not be resolved.
    pub fn column_unavailable_field(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::ColumnUnavailable(err) => Some(&*err.field),
        }
    }
}
