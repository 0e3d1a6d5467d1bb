use crumpet_core::Annotations;
use crumpet_postgres::metadata::{self, PgMetadata, PgMetadataKind};
use crumpet_postgres::PgRange;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn round_trips_all_fields() {
    let mut store = Annotations::new();
    let mut range = PgRange::new(Some("public"), "floatrange", "float8");
    range.canonical_function = Some("floatrange_canonical".to_string());
    range.subtype_op_class = Some("float8_ops".to_string());
    range.collation = Some("C".to_string());
    range.subtype_diff = Some("float8mi".to_string());

    metadata::get_or_add(&mut store, PgMetadata::Range(range.clone())).unwrap();
    let reread = PgRange::find(&store, Some("public"), "floatrange")
        .unwrap()
        .unwrap();
    assert_eq!(reread, range);
}

#[test]
fn round_trips_with_only_subtype() {
    let mut store = Annotations::new();
    let range = PgRange::get_or_create(&mut store, None, "floatrange", "float8").unwrap();

    let reread = PgRange::find(&store, None, "floatrange").unwrap().unwrap();
    assert_eq!(reread, range);
    assert_eq!(
        store.get("PgRange:floatrange").unwrap().as_str(),
        Some("float8,,,,")
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn wrong_field_count_is_parse_error() {
    let mut store = Annotations::new();
    store.set("PgRange:floatrange", "float8,,,");

    let err = metadata::find(&store, PgMetadataKind::Range, None, "floatrange").unwrap_err();
    assert!(err.is_annotation_parse());
}

#[test]
fn missing_subtype_is_parse_error() {
    let mut store = Annotations::new();
    store.set("PgRange:floatrange", ",,,,");

    let err = metadata::find(&store, PgMetadataKind::Range, None, "floatrange").unwrap_err();
    assert!(err.is_annotation_parse());
}

#[test]
fn comma_in_subtype_is_rejected_at_registration() {
    let mut store = Annotations::new();
    let err =
        PgRange::get_or_create(&mut store, None, "numrange", "numeric(10,2)").unwrap_err();

    assert!(err.is_invalid_metadata());
    assert!(store.is_empty());
}
