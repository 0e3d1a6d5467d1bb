use super::Error;

/// Error when a stored annotation value or key does not match its grammar.
///
/// This occurs when:
/// - A value has the wrong number of delimited segments
/// - A composite record's ordering segment is not a non-negative integer
/// - A quoted literal is unterminated or followed by garbage
/// - An annotation key's qualified-name part contains more than one `.`
///
/// These errors are fatal to the single read attempting them and are never
/// silently defaulted.
#[derive(Debug)]
pub(super) struct AnnotationParseError {
    key: Box<str>,
    detail: Box<str>,
}

impl std::error::Error for AnnotationParseError {}

impl core::fmt::Display for AnnotationParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed annotation `{}`: {}", self.key, self.detail)
    }
}

impl Error {
    /// Creates an annotation parse error for the annotation stored under `key`.
    pub fn annotation_parse(key: impl Into<String>, detail: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AnnotationParse(AnnotationParseError {
            key: key.into().into(),
            detail: detail.into().into(),
        }))
    }

    /// Returns `true` if this error is an annotation parse error.
    pub fn is_annotation_parse(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AnnotationParse(_))
    }
}
