use super::Error;

/// Error when a value-generation strategy is requested for a column whose
/// storage type cannot support it.
///
/// Identity and serial columns require a 16/32/64-bit signed integer;
/// sequence-backed strategies require any integer type. Violations are never
/// silently coerced.
#[derive(Debug)]
pub(super) struct TypeIncompatibilityError {
    strategy: Box<str>,
    table: Box<str>,
    column: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for TypeIncompatibilityError {}

impl core::fmt::Display for TypeIncompatibilityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "strategy {} cannot be used on column `{}.{}` of type {}",
            self.strategy, self.table, self.column, self.ty
        )
    }
}

impl Error {
    /// Creates a type incompatibility error.
    pub fn type_incompatibility(
        strategy: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        ty: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::TypeIncompatibility(
            TypeIncompatibilityError {
                strategy: strategy.into().into(),
                table: table.into().into(),
                column: column.into().into(),
                ty: ty.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a type incompatibility error.
    pub fn is_type_incompatibility(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeIncompatibility(_))
    }
}
