use crumpet_postgres::key;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

#[test]
fn build_without_schema() {
    assert_eq!(key::build("PgEnum:", None, "mood"), "PgEnum:mood");
}

#[test]
fn build_with_schema() {
    assert_eq!(
        key::build("PgEnum:", Some("public"), "mood"),
        "PgEnum:public.mood"
    );
}

// ---------------------------------------------------------------------------
// Inversion
// ---------------------------------------------------------------------------

#[test]
fn parse_inverts_build() {
    for (schema, name) in [
        (None, "mood"),
        (Some("public"), "mood"),
        (Some("s"), "n"),
    ] {
        let built = key::build("PgRange:", schema, name);
        let (parsed_schema, parsed_name) = key::parse("PgRange:", &built).unwrap();
        assert_eq!(parsed_schema.as_deref(), schema);
        assert_eq!(parsed_name, name);
    }
}

#[test]
fn parse_unqualified_name() {
    let (schema, name) = key::parse("PgExtension:", "PgExtension:hstore").unwrap();
    assert_eq!(schema, None);
    assert_eq!(name, "hstore");
}

#[test]
fn parse_qualified_name() {
    let (schema, name) = key::parse("PgExtension:", "PgExtension:audit.hstore").unwrap();
    assert_eq!(schema.as_deref(), Some("audit"));
    assert_eq!(name, "hstore");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn parse_rejects_more_than_one_dot() {
    let err = key::parse("PgEnum:", "PgEnum:a.b.c").unwrap_err();
    assert!(err.is_annotation_parse());
}

#[test]
fn parse_rejects_missing_prefix() {
    // Registry scans guarantee the prefix; a mismatch is an internal error,
    // not a parse error.
    let err = key::parse("PgEnum:", "PgRange:mood").unwrap_err();
    assert!(!err.is_annotation_parse());
}
