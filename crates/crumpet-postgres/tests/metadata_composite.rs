use crumpet_core::Annotations;
use crumpet_postgres::metadata::{self, PgMetadataKind};
use crumpet_postgres::{CompositeField, PgComposite};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn fields_round_trip() {
    let mut store = Annotations::new();
    let fields = vec![
        CompositeField::new("street", "text"),
        CompositeField::new("zip", "varchar(10)"),
    ];
    PgComposite::get_or_create(&mut store, Some("public"), "address", fields.clone()).unwrap();

    let composite = PgComposite::find(&store, Some("public"), "address")
        .unwrap()
        .unwrap();
    assert_eq!(composite.fields, fields);
    assert_eq!(composite.ordering, 0);
}

#[test]
fn store_types_may_contain_commas() {
    let mut store = Annotations::new();
    let fields = vec![CompositeField::new("amount", "numeric(10,2)")];
    PgComposite::get_or_create(&mut store, None, "money_bag", fields.clone()).unwrap();

    assert_eq!(
        store.get("PgComposite:money_bag").unwrap().as_str(),
        Some("0;amount,numeric(10,2)")
    );
    let composite = PgComposite::find(&store, None, "money_bag").unwrap().unwrap();
    assert_eq!(composite.fields, fields);
}

#[test]
fn zero_field_composite_round_trips() {
    let mut store = Annotations::new();
    PgComposite::get_or_create(&mut store, None, "unit", vec![]).unwrap();

    assert_eq!(store.get("PgComposite:unit").unwrap().as_str(), Some("0"));
    let composite = PgComposite::find(&store, None, "unit").unwrap().unwrap();
    assert!(composite.fields.is_empty());
}

// ---------------------------------------------------------------------------
// Creation ordering
// ---------------------------------------------------------------------------

#[test]
fn ordering_records_creation_sequence() {
    let mut store = Annotations::new();

    let a = PgComposite::get_or_create(&mut store, None, "a", vec![]).unwrap();
    // `b` references `a` by store type, so it must be emitted after it.
    let b = PgComposite::get_or_create(
        &mut store,
        None,
        "b",
        vec![CompositeField::new("inner", "a")],
    )
    .unwrap();

    assert_eq!(a.ordering, 0);
    assert_eq!(b.ordering, 1);
}

#[test]
fn re_registration_keeps_original_ordering() {
    let mut store = Annotations::new();
    PgComposite::get_or_create(&mut store, None, "a", vec![]).unwrap();
    PgComposite::get_or_create(&mut store, None, "b", vec![]).unwrap();

    let again = PgComposite::get_or_create(&mut store, None, "a", vec![]).unwrap();
    assert_eq!(again.ordering, 0);
}

#[test]
fn list_ordered_sorts_by_ordering() {
    let mut store = Annotations::new();
    PgComposite::get_or_create(&mut store, None, "a", vec![]).unwrap();
    PgComposite::get_or_create(&mut store, None, "b", vec![]).unwrap();
    PgComposite::get_or_create(&mut store, None, "c", vec![]).unwrap();

    let names: Vec<String> = PgComposite::list_ordered(&store)
        .unwrap()
        .into_iter()
        .map(|composite| composite.name)
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn non_integer_ordering_is_parse_error() {
    let mut store = Annotations::new();
    store.set("PgComposite:bad", "x;street,text");

    let err = metadata::find(&store, PgMetadataKind::Composite, None, "bad").unwrap_err();
    assert!(err.is_annotation_parse());
}

#[test]
fn negative_ordering_is_parse_error() {
    let mut store = Annotations::new();
    store.set("PgComposite:bad", "-1");

    let err = metadata::find(&store, PgMetadataKind::Composite, None, "bad").unwrap_err();
    assert!(err.is_annotation_parse());
}

#[test]
fn field_record_without_store_type_is_parse_error() {
    let mut store = Annotations::new();
    store.set("PgComposite:bad", "0;street");

    let err = metadata::find(&store, PgMetadataKind::Composite, None, "bad").unwrap_err();
    assert!(err.is_annotation_parse());
}

#[test]
fn comma_in_field_name_is_rejected_at_registration() {
    let mut store = Annotations::new();
    let err = PgComposite::get_or_create(
        &mut store,
        None,
        "bad",
        vec![CompositeField::new("a,b", "text")],
    )
    .unwrap_err();

    assert!(err.is_invalid_metadata());
    assert!(store.is_empty());
}

#[test]
fn semicolon_in_store_type_is_rejected_at_registration() {
    let mut store = Annotations::new();
    let err = PgComposite::get_or_create(
        &mut store,
        None,
        "bad",
        vec![CompositeField::new("a", "text; drop table users")],
    )
    .unwrap_err();

    assert!(err.is_invalid_metadata());
}
