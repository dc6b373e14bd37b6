use super::Error;

/// Error when a database row lacks a column the model needs for hydration.
#[derive(Debug)]
pub(super) struct IncompleteRowError {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for IncompleteRowError {}

impl core::fmt::Display for IncompleteRowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot hydrate `{}`: row is missing column `{}`",
            self.table, self.column
        )
    }
}

impl Error {
    /// Creates an incomplete row error naming the missing column.
    pub fn incomplete_row(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IncompleteRow(IncompleteRowError {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an incomplete row error.
    pub fn is_incomplete_row(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::IncompleteRow(_))
    }
}
