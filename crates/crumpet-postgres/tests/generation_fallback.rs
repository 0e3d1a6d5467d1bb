use crumpet_core::schema::{Column, Model, Table, TableKind, Type, ValueGenerated};
use crumpet_postgres::generation::{self, VALUE_GENERATION_STRATEGY};
use crumpet_postgres::{ConflictMode, ValueGenerationStrategy};
use pretty_assertions::assert_eq;

/// A model with one `orders` table holding one `id` column of `ty` with the
/// given declared timing.
fn model_with_column(ty: Type, timing: Option<ValueGenerated>) -> Model {
    let mut model = Model::new();
    let mut table = Table::new(None, "orders");
    let mut column = Column::new("orders", "id", ty);
    column.value_generated = timing;
    table.columns.push(column);
    model.tables.push(table);
    model
}

fn resolved(model: &Model) -> ValueGenerationStrategy {
    generation::resolve_strategy(&model.tables[0].columns[0], model).unwrap()
}

// ---------------------------------------------------------------------------
// Inheriting the model default
// ---------------------------------------------------------------------------

#[test]
fn on_add_integer_inherits_identity_default() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    assert_eq!(resolved(&model), ValueGenerationStrategy::IdentityByDefault);
}

#[test]
fn text_column_does_not_inherit_identity_default() {
    let mut model = model_with_column(Type::Text, Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    assert_eq!(resolved(&model), ValueGenerationStrategy::None);
}

#[test]
fn sequence_hi_lo_applies_to_any_integer() {
    let mut model = model_with_column(Type::Integer(2), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::SequenceHiLo);

    assert_eq!(resolved(&model), ValueGenerationStrategy::SequenceHiLo);
}

#[test]
fn no_model_default_resolves_to_none() {
    let model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    assert_eq!(resolved(&model), ValueGenerationStrategy::None);
}

#[test]
fn non_on_add_timing_resolves_to_none() {
    for timing in [None, Some(ValueGenerated::Never), Some(ValueGenerated::OnAddOrUpdate)] {
        let mut model = model_with_column(Type::Integer(4), timing);
        generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::Serial);
        assert_eq!(resolved(&model), ValueGenerationStrategy::None);
    }
}

#[test]
fn view_mapped_column_resolves_to_none() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    model.tables[0].kind = TableKind::View;
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    assert_eq!(resolved(&model), ValueGenerationStrategy::None);
}

// ---------------------------------------------------------------------------
// Facets override the fallback
// ---------------------------------------------------------------------------

#[test]
fn explicit_strategy_wins_over_model_default() {
    let mut model = model_with_column(Type::Integer(8), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);
    generation::set_strategy(
        &mut model.tables[0].columns[0],
        ValueGenerationStrategy::Sequence,
        ConflictMode::Strict,
    )
    .unwrap();

    assert_eq!(resolved(&model), ValueGenerationStrategy::Sequence);
}

#[test]
fn explicit_none_suppresses_model_default() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);
    generation::set_strategy(
        &mut model.tables[0].columns[0],
        ValueGenerationStrategy::None,
        ConflictMode::Strict,
    )
    .unwrap();

    assert_eq!(resolved(&model), ValueGenerationStrategy::None);
}

#[test]
fn default_value_facet_suppresses_model_default() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);
    generation::set_default_value(&mut model.tables[0].columns[0], "0", ConflictMode::Strict)
        .unwrap();

    assert_eq!(resolved(&model), ValueGenerationStrategy::None);
}

#[test]
fn resolution_is_not_persisted() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    resolved(&model);
    assert!(model.tables[0].columns[0].annotations.is_empty());
}

// ---------------------------------------------------------------------------
// Finalization pass
// ---------------------------------------------------------------------------

#[test]
fn finalize_persists_inherited_strategy() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    generation::finalize(&mut model).unwrap();
    assert_eq!(
        model.tables[0].columns[0]
            .annotations
            .get(VALUE_GENERATION_STRATEGY)
            .unwrap()
            .as_str(),
        Some("IdentityByDefault")
    );
}

#[test]
fn finalize_writes_none_only_to_override_an_inherited_default() {
    // A text column cannot take the identity default it would otherwise
    // inherit; the override is written so generators do not apply it.
    let mut model = model_with_column(Type::Text, Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    generation::finalize(&mut model).unwrap();
    assert_eq!(
        model.tables[0].columns[0]
            .annotations
            .get(VALUE_GENERATION_STRATEGY)
            .unwrap()
            .as_str(),
        Some("None")
    );
}

#[test]
fn finalize_suppresses_none_without_a_model_default() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));

    generation::finalize(&mut model).unwrap();
    assert!(model.tables[0].columns[0].annotations.is_empty());
}

#[test]
fn finalize_suppresses_none_for_non_generated_columns() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::Never));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    generation::finalize(&mut model).unwrap();
    assert!(model.tables[0].columns[0].annotations.is_empty());
}

#[test]
fn finalize_leaves_explicit_strategies_untouched() {
    let mut model = model_with_column(Type::Integer(8), Some(ValueGenerated::OnAdd));
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);
    generation::set_strategy(
        &mut model.tables[0].columns[0],
        ValueGenerationStrategy::Sequence,
        ConflictMode::Strict,
    )
    .unwrap();

    generation::finalize(&mut model).unwrap();
    assert_eq!(
        generation::strategy(&model.tables[0].columns[0]).unwrap(),
        Some(ValueGenerationStrategy::Sequence)
    );
}

#[test]
fn finalize_overrides_default_on_view_columns() {
    let mut model = model_with_column(Type::Integer(4), Some(ValueGenerated::OnAdd));
    model.tables[0].kind = TableKind::View;
    generation::set_model_default_strategy(&mut model, ValueGenerationStrategy::IdentityByDefault);

    generation::finalize(&mut model).unwrap();
    assert_eq!(
        model.tables[0].columns[0]
            .annotations
            .get(VALUE_GENERATION_STRATEGY)
            .unwrap()
            .as_str(),
        Some("None")
    );
}
