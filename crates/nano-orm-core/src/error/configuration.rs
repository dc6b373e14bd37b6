use super::Error;

/// Error raised while defining a model.
///
/// This occurs when:
/// - The field list is missing, not a list, or empty
/// - A field descriptor has no usable name, or an unrecognized type hint
/// - Two fields share a name
///
/// Configuration errors are only ever produced at definition time.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Configuration(_))
    }
}
