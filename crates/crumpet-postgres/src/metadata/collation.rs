use super::{codec, PgMetadata, PgMetadataKind};
use crumpet_core::{Annotations, Error, Result};

/// A database collation definition.
///
/// Value grammar: `lcCollate,lcCtype,provider,isDeterministic` with an empty
/// segment meaning null and bools spelled `True`/`False`.
#[derive(Debug, Clone, PartialEq)]
pub struct PgCollation {
    pub schema: Option<String>,
    pub name: String,
    pub lc_collate: String,
    pub lc_ctype: String,
    pub provider: Option<String>,
    pub is_deterministic: Option<bool>,
}

impl PgCollation {
    pub fn new(
        schema: Option<&str>,
        name: impl Into<String>,
        lc_collate: impl Into<String>,
        lc_ctype: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            lc_collate: lc_collate.into(),
            lc_ctype: lc_ctype.into(),
            provider: None,
            is_deterministic: None,
        }
    }

    /// Ensures the model declares this collation, returning the declared
    /// record. An already-declared collation wins and the locale arguments
    /// are ignored.
    pub fn get_or_create(
        store: &mut Annotations,
        schema: Option<&str>,
        name: &str,
        lc_collate: &str,
        lc_ctype: &str,
    ) -> Result<Self> {
        let collation = Self::new(schema, name, lc_collate, lc_ctype);
        match super::get_or_add(store, PgMetadata::Collation(collation))? {
            PgMetadata::Collation(collation) => Ok(collation),
            _ => unreachable!(),
        }
    }

    pub fn find(store: &Annotations, schema: Option<&str>, name: &str) -> Result<Option<Self>> {
        match super::find(store, PgMetadataKind::Collation, schema, name)? {
            Some(PgMetadata::Collation(collation)) => Ok(Some(collation)),
            Some(_) => unreachable!(),
            None => Ok(None),
        }
    }

    pub(super) fn encode(&self) -> Result<String> {
        codec::reject_delimiter("collation lc_collate", &self.lc_collate, ',')?;
        codec::reject_delimiter("collation lc_ctype", &self.lc_ctype, ',')?;
        if let Some(provider) = &self.provider {
            codec::reject_delimiter("collation provider", provider, ',')?;
        }

        Ok(codec::encode_fields(&[
            Some(&self.lc_collate),
            Some(&self.lc_ctype),
            self.provider.as_deref(),
            Some(codec::encode_bool(self.is_deterministic)),
        ]))
    }

    pub(super) fn decode(
        schema: Option<String>,
        name: String,
        stored_key: &str,
        value: &str,
    ) -> Result<Self> {
        let mut fields = codec::decode_fields(stored_key, value, 4)?;
        let is_deterministic = codec::decode_bool(stored_key, fields.pop().unwrap().as_deref())?;
        let provider = fields.pop().unwrap();
        let lc_ctype = fields
            .pop()
            .unwrap()
            .ok_or_else(|| Error::annotation_parse(stored_key, "collation lc_ctype is missing"))?;
        let lc_collate = fields
            .pop()
            .unwrap()
            .ok_or_else(|| Error::annotation_parse(stored_key, "collation lc_collate is missing"))?;

        Ok(Self {
            schema,
            name,
            lc_collate,
            lc_ctype,
            provider,
            is_deterministic,
        })
    }
}
