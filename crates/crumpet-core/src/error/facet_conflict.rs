use super::Error;

/// Error when two mutually exclusive value-generation facets are set on the
/// same column in strict mode.
///
/// A column's value can be produced by at most one mechanism at a time: a
/// literal default, a default SQL expression, a computed SQL expression, or
/// an explicit generation strategy. Identifies both facets and the column.
#[derive(Debug)]
pub(super) struct FacetConflictError {
    existing: &'static str,
    requested: &'static str,
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for FacetConflictError {}

impl core::fmt::Display for FacetConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot set {} on column `{}.{}`: {} is already set",
            self.requested, self.table, self.column, self.existing
        )
    }
}

impl Error {
    /// Creates a facet conflict error.
    pub fn facet_conflict(
        existing: &'static str,
        requested: &'static str,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::FacetConflict(FacetConflictError {
            existing,
            requested,
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a facet conflict error.
    pub fn is_facet_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FacetConflict(_))
    }
}
