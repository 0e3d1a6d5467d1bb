use super::{codec, PgMetadata, PgMetadataKind};
use crumpet_core::{Annotations, Error, Result};

/// A PostgreSQL range type over a subtype.
///
/// Value grammar: exactly five comma-joined fields,
/// `subtype,canonicalFunction,subtypeOpClass,collation,subtypeDiff`, with an
/// empty segment meaning null. The subtype is required.
#[derive(Debug, Clone, PartialEq)]
pub struct PgRange {
    pub schema: Option<String>,
    pub name: String,
    pub subtype: String,
    pub canonical_function: Option<String>,
    pub subtype_op_class: Option<String>,
    pub collation: Option<String>,
    pub subtype_diff: Option<String>,
}

impl PgRange {
    pub fn new(schema: Option<&str>, name: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            subtype: subtype.into(),
            canonical_function: None,
            subtype_op_class: None,
            collation: None,
            subtype_diff: None,
        }
    }

    /// Ensures the model declares this range type, returning the declared
    /// record. An already-declared range wins and `subtype` is ignored.
    pub fn get_or_create(
        store: &mut Annotations,
        schema: Option<&str>,
        name: &str,
        subtype: &str,
    ) -> Result<Self> {
        match super::get_or_add(store, PgMetadata::Range(Self::new(schema, name, subtype)))? {
            PgMetadata::Range(range) => Ok(range),
            _ => unreachable!(),
        }
    }

    pub fn find(store: &Annotations, schema: Option<&str>, name: &str) -> Result<Option<Self>> {
        match super::find(store, PgMetadataKind::Range, schema, name)? {
            Some(PgMetadata::Range(range)) => Ok(Some(range)),
            Some(_) => unreachable!(),
            None => Ok(None),
        }
    }

    pub(super) fn encode(&self) -> Result<String> {
        let fields = [
            ("range subtype", Some(self.subtype.as_str())),
            ("canonical function", self.canonical_function.as_deref()),
            ("subtype operator class", self.subtype_op_class.as_deref()),
            ("range collation", self.collation.as_deref()),
            ("subtype diff function", self.subtype_diff.as_deref()),
        ];
        for (what, field) in &fields {
            if let Some(field) = field {
                codec::reject_delimiter(what, field, ',')?;
            }
        }

        Ok(codec::encode_fields(&fields.map(|(_, field)| field)))
    }

    pub(super) fn decode(
        schema: Option<String>,
        name: String,
        stored_key: &str,
        value: &str,
    ) -> Result<Self> {
        let mut fields = codec::decode_fields(stored_key, value, 5)?;
        let subtype_diff = fields.pop().unwrap();
        let collation = fields.pop().unwrap();
        let subtype_op_class = fields.pop().unwrap();
        let canonical_function = fields.pop().unwrap();
        let subtype = fields
            .pop()
            .unwrap()
            .ok_or_else(|| Error::annotation_parse(stored_key, "range subtype is missing"))?;

        Ok(Self {
            schema,
            name,
            subtype,
            canonical_function,
            subtype_op_class,
            collation,
            subtype_diff,
        })
    }
}
