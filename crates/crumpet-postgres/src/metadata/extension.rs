use super::{codec, PgMetadata, PgMetadataKind};
use crumpet_core::{Annotations, Error, Result};

/// A PostgreSQL extension the model depends on (e.g. `hstore`, `postgis`).
///
/// Value grammar: `schema,name,version` with an empty segment meaning null.
#[derive(Debug, Clone, PartialEq)]
pub struct PgExtension {
    pub schema: Option<String>,
    pub name: String,
    pub version: Option<String>,
}

impl PgExtension {
    pub fn new(schema: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            version: None,
        }
    }

    /// Ensures the model declares this extension, returning the declared
    /// record. An already-declared extension wins and `version` is ignored.
    pub fn get_or_create(
        store: &mut Annotations,
        schema: Option<&str>,
        name: &str,
        version: Option<&str>,
    ) -> Result<Self> {
        let mut ext = Self::new(schema, name);
        ext.version = version.map(str::to_string);
        match super::get_or_add(store, PgMetadata::Extension(ext))? {
            PgMetadata::Extension(ext) => Ok(ext),
            _ => unreachable!(),
        }
    }

    pub fn find(store: &Annotations, schema: Option<&str>, name: &str) -> Result<Option<Self>> {
        match super::find(store, PgMetadataKind::Extension, schema, name)? {
            Some(PgMetadata::Extension(ext)) => Ok(Some(ext)),
            Some(_) => unreachable!(),
            None => Ok(None),
        }
    }

    pub(super) fn encode(&self) -> Result<String> {
        if let Some(schema) = &self.schema {
            codec::reject_delimiter("extension schema", schema, ',')?;
        }
        codec::reject_delimiter("extension name", &self.name, ',')?;
        if let Some(version) = &self.version {
            codec::reject_delimiter("extension version", version, ',')?;
        }

        Ok(codec::encode_fields(&[
            self.schema.as_deref(),
            Some(&self.name),
            self.version.as_deref(),
        ]))
    }

    pub(super) fn decode(stored_key: &str, value: &str) -> Result<Self> {
        let mut fields = codec::decode_fields(stored_key, value, 3)?;
        let version = fields.pop().unwrap();
        let name = fields
            .pop()
            .unwrap()
            .ok_or_else(|| Error::annotation_parse(stored_key, "extension name is missing"))?;
        let schema = fields.pop().unwrap();

        Ok(Self {
            schema,
            name,
            version,
        })
    }
}
