//! Deterministic annotation-key construction for metadata objects.
//!
//! A metadata object's key is its kind prefix followed by the optionally
//! schema-qualified name: `prefix ++ [schema ++ "."] ++ name`. Schemas and
//! names containing `.` are unsupported in this format.

use crumpet_core::{Error, Result};

/// Builds the annotation key for a metadata object.
pub fn build(prefix: &str, schema: Option<&str>, name: &str) -> String {
    match schema {
        Some(schema) => format!("{prefix}{schema}.{name}"),
        None => format!("{prefix}{name}"),
    }
}

/// Splits an annotation key back into `(schema, name)`.
///
/// The caller guarantees `key` starts with `prefix` (registry scans match on
/// the prefix before calling this). The remainder splits on the first `.`:
/// no dot means an unqualified name, one dot means `schema.name`, more than
/// one dot is a parse error.
pub fn parse(prefix: &str, key: &str) -> Result<(Option<String>, String)> {
    let rest = key.strip_prefix(prefix).ok_or_else(|| {
        anyhow::anyhow!("annotation key `{key}` does not start with prefix `{prefix}`")
    })?;

    let segments: Vec<&str> = rest.split('.').collect();
    match segments.as_slice() {
        [name] => Ok((None, name.to_string())),
        [schema, name] => Ok((Some(schema.to_string()), name.to_string())),
        _ => Err(Error::annotation_parse(
            key,
            "qualified name contains more than one `.`",
        )),
    }
}
