use super::Error;

/// Error when a caller assigns the identifier field directly.
#[derive(Debug)]
pub(super) struct ImmutableFieldError {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for ImmutableFieldError {}

impl core::fmt::Display for ImmutableFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` on model `{}` is read-only",
            self.field, self.table
        )
    }
}

impl Error {
    /// Creates an immutable field error.
    pub fn immutable_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ImmutableField(ImmutableFieldError {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an immutable field error.
    pub fn is_immutable_field(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::ImmutableField(_))
    }
}
