mod annotation_parse;
mod facet_conflict;
mod invalid_metadata;
mod type_incompatibility;

use annotation_parse::AnnotationParseError;
use facet_conflict::FacetConflictError;
use invalid_metadata::InvalidMetadataError;
use std::sync::Arc;
use type_incompatibility::TypeIncompatibilityError;

/// An error that can occur in Crumpet.
///
/// Kept at one word so `Result<T, Error>` stays cheap to return from the
/// hot annotation read/write paths.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    AnnotationParse(AnnotationParseError),
    FacetConflict(FacetConflictError),
    InvalidMetadata(InvalidMetadataError),
    TypeIncompatibility(TypeIncompatibilityError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            AnnotationParse(err) => core::fmt::Display::fmt(err, f),
            FacetConflict(err) => core::fmt::Display::fmt(err, f),
            InvalidMetadata(err) => core::fmt::Display::fmt(err, f),
            TypeIncompatibility(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}
