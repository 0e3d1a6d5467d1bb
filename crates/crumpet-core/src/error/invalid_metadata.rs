use super::Error;

/// Error when a metadata object is rejected at registration time.
///
/// The simple annotation grammars join fields with a reserved delimiter and
/// define no escaping, so a name, label, or field value containing that
/// delimiter would corrupt the record on read. Registration refuses such
/// values up front instead.
#[derive(Debug)]
pub(super) struct InvalidMetadataError {
    message: Box<str>,
}

impl std::error::Error for InvalidMetadataError {}

impl core::fmt::Display for InvalidMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid postgres metadata: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid metadata error.
    pub fn invalid_metadata(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMetadata(InvalidMetadataError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid metadata error.
    pub fn is_invalid_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMetadata(_))
    }
}
