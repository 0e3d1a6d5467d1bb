use super::{codec, PgMetadata, PgMetadataKind};
use crumpet_core::{Annotations, Error, Result};

/// A PostgreSQL enum type.
///
/// Value grammar: comma-joined labels with no escaping. Label order is the
/// enum's ordinal order and is preserved. An empty label list encodes to the
/// empty string; a lone empty label is therefore unrepresentable and labels
/// are validated non-empty at registration.
#[derive(Debug, Clone, PartialEq)]
pub struct PgEnum {
    pub schema: Option<String>,
    pub name: String,
    pub labels: Vec<String>,
}

impl PgEnum {
    pub fn new(schema: Option<&str>, name: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            labels,
        }
    }

    /// Ensures the model declares this enum type, returning the declared
    /// record. An already-declared enum wins and `labels` is ignored.
    pub fn get_or_create(
        store: &mut Annotations,
        schema: Option<&str>,
        name: &str,
        labels: Vec<String>,
    ) -> Result<Self> {
        match super::get_or_add(store, PgMetadata::Enum(Self::new(schema, name, labels)))? {
            PgMetadata::Enum(en) => Ok(en),
            _ => unreachable!(),
        }
    }

    pub fn find(store: &Annotations, schema: Option<&str>, name: &str) -> Result<Option<Self>> {
        match super::find(store, PgMetadataKind::Enum, schema, name)? {
            Some(PgMetadata::Enum(en)) => Ok(Some(en)),
            Some(_) => unreachable!(),
            None => Ok(None),
        }
    }

    /// Appends a label to the stored record, preserving ordinal order, and
    /// writes the record back.
    pub fn add_label(
        store: &mut Annotations,
        schema: Option<&str>,
        name: &str,
        label: &str,
    ) -> Result<Self> {
        let mut en = Self::find(store, schema, name)?.ok_or_else(|| {
            Error::invalid_metadata(format!("enum type `{name}` is not declared on the model"))
        })?;
        en.labels.push(label.to_string());
        super::save(store, &PgMetadata::Enum(en.clone()))?;
        Ok(en)
    }

    pub(super) fn encode(&self) -> Result<String> {
        for label in &self.labels {
            if label.is_empty() {
                return Err(Error::invalid_metadata(format!(
                    "enum type `{}` has an empty label",
                    self.name
                )));
            }
            codec::reject_delimiter("enum label", label, ',')?;
        }

        Ok(self.labels.join(","))
    }

    pub(super) fn decode(schema: Option<String>, name: String, value: &str) -> Self {
        let labels = if value.is_empty() {
            vec![]
        } else {
            value.split(',').map(str::to_string).collect()
        };

        Self {
            schema,
            name,
            labels,
        }
    }
}
