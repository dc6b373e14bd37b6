use super::Error;

/// Error when a lookup by identifier returns more than one row.
///
/// Identifiers are expected to be unique, so this points at a table whose id
/// column is missing a uniqueness constraint.
#[derive(Debug)]
pub(super) struct AmbiguousResultError {
    context: Option<Box<str>>,
}

impl std::error::Error for AmbiguousResultError {}

impl core::fmt::Display for AmbiguousResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("ambiguous result")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an ambiguous result error.
    ///
    /// The context parameter describes the lookup that matched too many rows.
    pub fn ambiguous_result(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AmbiguousResult(AmbiguousResultError {
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if this error is an ambiguous result error.
    pub fn is_ambiguous_result(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::AmbiguousResult(_))
    }
}
