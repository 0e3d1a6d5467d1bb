//! Shared grammar helpers for packing record fields into one string.
//!
//! Three grammars are in play:
//! - comma-joined fields where an empty segment is the null sentinel
//!   (extension, range, collation) — no escaping;
//! - semicolon-joined records with a leading ordering integer (composite) —
//!   each record splits on its first comma so store types may contain `,`;
//! - quoted literals with doubled `'` (interleave) — the only grammar that
//!   can carry arbitrary identifiers.

use crumpet_core::{Error, Result};

/// Joins optional fields with `,`; `None` encodes as an empty segment.
pub(crate) fn encode_fields(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits a comma-joined value into exactly `expected` optional fields.
pub(crate) fn decode_fields(
    stored_key: &str,
    value: &str,
    expected: usize,
) -> Result<Vec<Option<String>>> {
    let segments: Vec<&str> = value.split(',').collect();
    if segments.len() != expected {
        return Err(Error::annotation_parse(
            stored_key,
            format!(
                "expected {expected} comma-separated fields, found {}",
                segments.len()
            ),
        ));
    }
    Ok(segments
        .iter()
        .map(|segment| {
            if segment.is_empty() {
                None
            } else {
                Some(segment.to_string())
            }
        })
        .collect())
}

/// Refuses a field value containing a reserved delimiter.
///
/// The unescaped grammars cannot round-trip such values, so registration
/// rejects them instead of corrupting the record on read.
pub(crate) fn reject_delimiter(what: &str, value: &str, delimiter: char) -> Result<()> {
    if value.contains(delimiter) {
        return Err(Error::invalid_metadata(format!(
            "{what} `{value}` contains the reserved `{delimiter}` delimiter"
        )));
    }
    Ok(())
}

/// Encodes optional fields as `'...'` literals joined by `, `.
///
/// A literal `'` inside a field is doubled. `None` and the empty string both
/// encode as `''`; on decode `''` becomes `None`, so a true empty string is
/// unrepresentable in this grammar.
pub(crate) fn encode_quoted(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .map(|field| {
            let field = field.unwrap_or("");
            format!("'{}'", field.replace('\'', "''"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a list of `'...'` literals separated by commas.
pub(crate) fn decode_quoted(stored_key: &str, value: &str) -> Result<Vec<Option<String>>> {
    let mut fields = vec![];
    let mut chars = value.chars().peekable();

    loop {
        // Skip whitespace between fields
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.next() {
            Some('\'') => {}
            Some(other) => {
                return Err(Error::annotation_parse(
                    stored_key,
                    format!("expected `'`, found `{other}`"),
                ));
            }
            None => {
                return Err(Error::annotation_parse(
                    stored_key,
                    "expected a quoted field",
                ));
            }
        }

        let mut field = String::new();
        loop {
            match chars.next() {
                Some('\'') => {
                    // A doubled quote is an escaped literal quote; a lone
                    // closing quote ends the field.
                    if chars.next_if(|c| *c == '\'').is_some() {
                        field.push('\'');
                    } else {
                        break;
                    }
                }
                Some(c) => field.push(c),
                None => {
                    return Err(Error::annotation_parse(stored_key, "unterminated quote"));
                }
            }
        }

        fields.push(if field.is_empty() { None } else { Some(field) });

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') => continue,
            Some(other) => {
                return Err(Error::annotation_parse(
                    stored_key,
                    format!("expected `,` between fields, found `{other}`"),
                ));
            }
            None => return Ok(fields),
        }
    }
}

/// Parses the bool spelling used by the collation grammar.
pub(crate) fn decode_bool(stored_key: &str, field: Option<&str>) -> Result<Option<bool>> {
    match field {
        None => Ok(None),
        Some("True") => Ok(Some(true)),
        Some("False") => Ok(Some(false)),
        Some(other) => Err(Error::annotation_parse(
            stored_key,
            format!("expected `True`, `False` or an empty segment, found `{other}`"),
        )),
    }
}

/// Encodes a bool as `True`/`False`, or the empty segment for `None`.
pub(crate) fn encode_bool(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "True",
        Some(false) => "False",
        None => "",
    }
}
