/// Annotation key for a literal default value.
pub const DEFAULT_VALUE: &str = "Pg:DefaultValue";

/// Annotation key for a default SQL expression.
pub const DEFAULT_VALUE_SQL: &str = "Pg:DefaultValueSql";

/// Annotation key for a computed (generated) column expression.
pub const COMPUTED_SQL: &str = "Pg:ComputedSql";

/// Annotation key for an explicit value-generation strategy, on a column,
/// and for the model-wide default strategy, on the model.
pub const VALUE_GENERATION_STRATEGY: &str = "Pg:ValueGenerationStrategy";

/// One of the mutually exclusive ways a column's value can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    DefaultValue,
    DefaultValueSql,
    ComputedSql,
    Strategy,
}

impl Facet {
    pub fn annotation_key(self) -> &'static str {
        match self {
            Self::DefaultValue => DEFAULT_VALUE,
            Self::DefaultValueSql => DEFAULT_VALUE_SQL,
            Self::ComputedSql => COMPUTED_SQL,
            Self::Strategy => VALUE_GENERATION_STRATEGY,
        }
    }

    /// Human-readable facet name used in conflict errors.
    pub fn describe(self) -> &'static str {
        match self {
            Self::DefaultValue => "a default value",
            Self::DefaultValueSql => "a default SQL expression",
            Self::ComputedSql => "a computed SQL expression",
            Self::Strategy => "a value generation strategy",
        }
    }
}

/// How facet setters resolve a mutual-exclusivity conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictMode {
    /// Raise a conflict error identifying both facets and the column.
    Strict,
    /// Resolve silently, in the direction the preference picks.
    Lenient(LenientPreference),
}

/// Which facet wins when a lenient setter hits a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenientPreference {
    /// Clear the conflicting facet and write the new one.
    NewFacetWins,
    /// Refuse the new value and keep the column as it was.
    KeepExisting,
}
