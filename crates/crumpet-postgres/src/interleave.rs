//! CockroachDB-style interleave-in-parent table placement.

use crate::metadata::codec;
use crumpet_core::{schema::CreateTable, Error, Result};

/// The fixed annotation key the directive is stored under.
pub const INTERLEAVE_IN_PARENT: &str = "CockroachInterleaveInParent";

/// Directs a table-creation operation to interleave the new table into a
/// parent table's storage.
///
/// Value grammar: quoted literals joined by commas,
/// `'schema', 'table'[, 'col1', 'col2', ...]`, with embedded `'` doubled.
/// `''` decodes to null rather than the empty string, so a true empty
/// string is unrepresentable; this is a documented limitation of the
/// format, preserved deliberately.
#[derive(Debug, Clone, PartialEq)]
pub struct InterleaveInParent {
    pub parent_schema: Option<String>,
    pub parent_table: String,
    pub interleave_prefix: Vec<String>,
}

impl InterleaveInParent {
    pub fn new(parent_schema: Option<&str>, parent_table: impl Into<String>) -> Self {
        Self {
            parent_schema: parent_schema.map(str::to_string),
            parent_table: parent_table.into(),
            interleave_prefix: vec![],
        }
    }

    /// Reads the directive off a table-creation operation, if present.
    pub fn get(operation: &CreateTable) -> Result<Option<Self>> {
        let Some(value) = operation.annotations.get(INTERLEAVE_IN_PARENT) else {
            return Ok(None);
        };
        let value = value.as_str().ok_or_else(|| {
            Error::annotation_parse(INTERLEAVE_IN_PARENT, "expected a string value")
        })?;
        Self::decode(value).map(Some)
    }

    /// Attaches the directive to a table-creation operation, replacing any
    /// previous directive. Identity is the owning operation, so there is at
    /// most one directive per operation.
    pub fn set(&self, operation: &mut CreateTable) {
        operation
            .annotations
            .set(INTERLEAVE_IN_PARENT, self.encode());
    }

    fn encode(&self) -> String {
        let mut fields = vec![self.parent_schema.as_deref(), Some(&*self.parent_table)];
        fields.extend(self.interleave_prefix.iter().map(|column| Some(&**column)));
        codec::encode_quoted(&fields)
    }

    fn decode(value: &str) -> Result<Self> {
        let mut fields = codec::decode_quoted(INTERLEAVE_IN_PARENT, value)?;
        if fields.len() < 2 {
            return Err(Error::annotation_parse(
                INTERLEAVE_IN_PARENT,
                format!("expected at least 2 quoted fields, found {}", fields.len()),
            ));
        }

        let prefix = fields.split_off(2);
        let parent_table = fields.pop().unwrap().ok_or_else(|| {
            Error::annotation_parse(INTERLEAVE_IN_PARENT, "parent table is missing")
        })?;
        let parent_schema = fields.pop().unwrap();

        let mut interleave_prefix = vec![];
        for column in prefix {
            interleave_prefix.push(column.ok_or_else(|| {
                Error::annotation_parse(
                    INTERLEAVE_IN_PARENT,
                    "interleave prefix contains an empty column name",
                )
            })?);
        }

        Ok(Self {
            parent_schema,
            parent_table,
            interleave_prefix,
        })
    }
}
