//! The value-generation conflict resolver.
//!
//! A column's value can be produced by at most one of four mechanisms: a
//! literal default, a default SQL expression, a computed SQL expression, or
//! an explicit generation strategy. Every setter validates against the other
//! facets before mutating, so a failed call leaves the column exactly as it
//! was, and every successful mutation ends with a single [`reconcile`] pass
//! that recomputes the column's generation timing from whichever facet won.
//!
//! Resolution is a pure function of `(column, model)`: a column that sets no
//! facet inherits the model-wide default strategy, gated by its storage type
//! and declared timing.

mod facet;
pub use facet::{ConflictMode, Facet, LenientPreference};
pub use facet::{COMPUTED_SQL, DEFAULT_VALUE, DEFAULT_VALUE_SQL, VALUE_GENERATION_STRATEGY};

mod strategy;
pub use strategy::ValueGenerationStrategy;

use crumpet_core::{
    schema::{Column, Model, TableKind, ValueGenerated},
    AnnotationValue, Annotations, Error, Result,
};

/// The facet currently set on the column, if any.
///
/// A stored `None` strategy does not count: it is the suppression value and
/// may coexist with a default, so only a generating strategy is "active".
pub fn active_facet(column: &Column) -> Option<Facet> {
    let strategy = column.annotations.get(VALUE_GENERATION_STRATEGY);
    if strategy.is_some() && strategy.and_then(AnnotationValue::as_str) != Some("None") {
        return Some(Facet::Strategy);
    }
    if column.annotations.contains(COMPUTED_SQL) {
        return Some(Facet::ComputedSql);
    }
    if column.annotations.contains(DEFAULT_VALUE_SQL) {
        return Some(Facet::DefaultValueSql);
    }
    if column.annotations.contains(DEFAULT_VALUE) {
        return Some(Facet::DefaultValue);
    }
    None
}

/// Reads the column's explicit strategy annotation, if set.
pub fn strategy(column: &Column) -> Result<Option<ValueGenerationStrategy>> {
    parse_strategy(&column.annotations)
}

/// Reads the column's literal default value, if set.
pub fn default_value(column: &Column) -> Option<&AnnotationValue> {
    column.annotations.get(DEFAULT_VALUE)
}

/// Reads the column's default SQL expression, if set.
pub fn default_value_sql(column: &Column) -> Option<&str> {
    column
        .annotations
        .get(DEFAULT_VALUE_SQL)
        .and_then(AnnotationValue::as_str)
}

/// Reads the column's computed SQL expression, if set.
pub fn computed_sql(column: &Column) -> Option<&str> {
    column
        .annotations
        .get(COMPUTED_SQL)
        .and_then(AnnotationValue::as_str)
}

/// Sets a literal default value on the column.
pub fn set_default_value(
    column: &mut Column,
    value: impl Into<AnnotationValue>,
    mode: ConflictMode,
) -> Result<()> {
    apply(column, Facet::DefaultValue, value.into(), mode)
}

/// Sets a default SQL expression on the column.
pub fn set_default_value_sql(column: &mut Column, sql: &str, mode: ConflictMode) -> Result<()> {
    apply(column, Facet::DefaultValueSql, sql.into(), mode)
}

/// Sets a computed (generated) column expression on the column.
pub fn set_computed_sql(column: &mut Column, sql: &str, mode: ConflictMode) -> Result<()> {
    apply(column, Facet::ComputedSql, sql.into(), mode)
}

/// Sets an explicit value-generation strategy on the column.
///
/// Identity and serial strategies require a 16/32/64-bit signed integer
/// column; sequence strategies require any integer column. Violations are
/// errors, never coerced. Setting [`ValueGenerationStrategy::None`]
/// conflicts with nothing: it is the suppression value.
pub fn set_strategy(
    column: &mut Column,
    strategy: ValueGenerationStrategy,
    mode: ConflictMode,
) -> Result<()> {
    check_strategy_compatibility(column, strategy)?;
    apply(
        column,
        Facet::Strategy,
        strategy.as_str().into(),
        mode,
    )
}

/// Removes the explicit strategy and re-derives the column's timing, so a
/// cleared strategy never leaves a stale `OnAdd` behind.
pub fn clear_strategy(column: &mut Column) {
    column.annotations.remove(VALUE_GENERATION_STRATEGY);
    reconcile(column);
}

/// Validates that `strategy` is usable on the column's storage type.
pub fn check_strategy_compatibility(
    column: &Column,
    strategy: ValueGenerationStrategy,
) -> Result<()> {
    let compatible = if strategy.requires_identity_type() {
        column.ty.is_identity_compatible()
    } else if strategy.requires_integer_type() {
        column.ty.is_integer()
    } else {
        true
    };

    if compatible {
        Ok(())
    } else {
        Err(Error::type_incompatibility(
            strategy.as_str(),
            &column.table,
            &column.name,
            column.ty.postgres_name(),
        ))
    }
}

/// Recomputes the column's generation timing from whichever facet is set.
///
/// This is the single post-mutation fixup point: every setter ends here, so
/// timing can never drift out of sync with the facets.
pub fn reconcile(column: &mut Column) {
    let strategy_value = column
        .annotations
        .get(VALUE_GENERATION_STRATEGY)
        .and_then(AnnotationValue::as_str);

    column.value_generated = if strategy_value.is_some_and(|value| value != "None") {
        Some(ValueGenerated::OnAdd)
    } else if column.annotations.contains(COMPUTED_SQL) {
        Some(ValueGenerated::OnAddOrUpdate)
    } else if column.annotations.contains(DEFAULT_VALUE_SQL)
        || column.annotations.contains(DEFAULT_VALUE)
    {
        Some(ValueGenerated::OnAdd)
    } else {
        None
    };
}

/// Reads the model-wide default strategy, if declared.
pub fn model_default_strategy(model: &Model) -> Result<Option<ValueGenerationStrategy>> {
    parse_strategy(&model.annotations)
}

/// Declares the model-wide default strategy, inherited by columns that set
/// no facet of their own.
pub fn set_model_default_strategy(model: &mut Model, strategy: ValueGenerationStrategy) {
    model
        .annotations
        .set(VALUE_GENERATION_STRATEGY, strategy.as_str());
}

/// Resolves the strategy in effect for a column.
///
/// An explicit strategy wins, including an explicit `None`. Any other facet
/// means no strategy. Otherwise the column inherits the model default when
/// its declared timing is `OnAdd`, it is mapped to a real table (not a
/// view), and its storage type supports the default. The result is computed
/// on demand and never persisted here; see [`finalize`].
pub fn resolve_strategy(column: &Column, model: &Model) -> Result<ValueGenerationStrategy> {
    if let Some(explicit) = strategy(column)? {
        return Ok(explicit);
    }
    if active_facet(column).is_some() {
        return Ok(ValueGenerationStrategy::None);
    }
    if is_view_mapped(column, model) {
        return Ok(ValueGenerationStrategy::None);
    }

    let default = model_default_strategy(model)?;
    Ok(inherited_strategy(column, default))
}

/// The finalization pass: persists each column's resolved strategy so
/// downstream DDL generators see an explicit value.
///
/// Persisting `None` is suppressed except when it overrides a would-be
/// inherited non-`None` default — an `OnAdd` column with no facets on a
/// model that declares a generating default, whose type (or view mapping)
/// rules the default out.
pub fn finalize(model: &mut Model) -> Result<()> {
    let default = model_default_strategy(model)?;

    for table in &mut model.tables {
        let is_view = table.kind == TableKind::View;

        for column in &mut table.columns {
            if active_facet(column).is_some()
                || column.annotations.contains(VALUE_GENERATION_STRATEGY)
            {
                continue;
            }

            let effective = if is_view {
                ValueGenerationStrategy::None
            } else {
                inherited_strategy(column, default)
            };

            if effective != ValueGenerationStrategy::None {
                column
                    .annotations
                    .set(VALUE_GENERATION_STRATEGY, effective.as_str());
            } else if would_inherit(column, default) {
                // The column would otherwise appear to inherit the model
                // default; write the override so generators do not apply it.
                column
                    .annotations
                    .set(VALUE_GENERATION_STRATEGY, ValueGenerationStrategy::None.as_str());
            }
        }
    }

    Ok(())
}

fn parse_strategy(store: &Annotations) -> Result<Option<ValueGenerationStrategy>> {
    let Some(value) = store.get(VALUE_GENERATION_STRATEGY) else {
        return Ok(None);
    };
    let name = value.as_str().ok_or_else(|| {
        Error::annotation_parse(VALUE_GENERATION_STRATEGY, "expected a string value")
    })?;
    let strategy = ValueGenerationStrategy::from_name(name).ok_or_else(|| {
        Error::annotation_parse(
            VALUE_GENERATION_STRATEGY,
            format!("`{name}` is not a value generation strategy"),
        )
    })?;
    Ok(Some(strategy))
}

fn apply(
    column: &mut Column,
    facet: Facet,
    value: AnnotationValue,
    mode: ConflictMode,
) -> Result<()> {
    let suppression = facet == Facet::Strategy && value.as_str() == Some("None");

    if !suppression {
        if let Some(existing) = active_facet(column) {
            if existing != facet {
                match mode {
                    ConflictMode::Strict => {
                        return Err(Error::facet_conflict(
                            existing.describe(),
                            facet.describe(),
                            &column.table,
                            &column.name,
                        ));
                    }
                    ConflictMode::Lenient(LenientPreference::KeepExisting) => return Ok(()),
                    ConflictMode::Lenient(LenientPreference::NewFacetWins) => {
                        column.annotations.remove(existing.annotation_key());
                    }
                }
            }
        }
    }

    column.annotations.set(facet.annotation_key(), value);
    reconcile(column);
    Ok(())
}

fn is_view_mapped(column: &Column, model: &Model) -> bool {
    model
        .table(&column.table)
        .is_some_and(|table| table.kind == TableKind::View)
}

fn inherited_strategy(
    column: &Column,
    default: Option<ValueGenerationStrategy>,
) -> ValueGenerationStrategy {
    if column.value_generated != Some(ValueGenerated::OnAdd) {
        return ValueGenerationStrategy::None;
    }

    let Some(default) = default else {
        return ValueGenerationStrategy::None;
    };

    let compatible = if default.requires_identity_type() {
        column.ty.is_identity_compatible()
    } else if default.requires_integer_type() {
        column.ty.is_integer()
    } else {
        false
    };

    if compatible {
        default
    } else {
        ValueGenerationStrategy::None
    }
}

fn would_inherit(column: &Column, default: Option<ValueGenerationStrategy>) -> bool {
    column.value_generated == Some(ValueGenerated::OnAdd)
        && default.is_some_and(ValueGenerationStrategy::generates_on_add)
}
