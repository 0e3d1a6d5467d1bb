use super::{codec, PgMetadata, PgMetadataKind};
use crumpet_core::{Annotations, Error, Result};

/// One field of a composite type.
///
/// The store type may contain commas (`numeric(10,2)`); the field name may
/// not, since each record splits on its first comma.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeField {
    pub name: String,
    pub store_type: String,
}

impl CompositeField {
    pub fn new(name: impl Into<String>, store_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store_type: store_type.into(),
        }
    }
}

/// A PostgreSQL composite type.
///
/// Value grammar: a leading non-negative ordering integer, then one
/// `name,storeType` record per field, all joined with `;`. The ordering
/// records creation sequence so interdependent composites can be emitted
/// after the types they reference; it is assigned by the registry at
/// insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct PgComposite {
    pub schema: Option<String>,
    pub name: String,
    pub ordering: u32,
    pub fields: Vec<CompositeField>,
}

impl PgComposite {
    pub fn new(schema: Option<&str>, name: impl Into<String>, fields: Vec<CompositeField>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            ordering: 0,
            fields,
        }
    }

    /// Ensures the model declares this composite type, returning the
    /// declared record. An already-declared composite wins and `fields` is
    /// ignored; a new record's `ordering` is assigned at insert time.
    pub fn get_or_create(
        store: &mut Annotations,
        schema: Option<&str>,
        name: &str,
        fields: Vec<CompositeField>,
    ) -> Result<Self> {
        match super::get_or_add(store, PgMetadata::Composite(Self::new(schema, name, fields)))? {
            PgMetadata::Composite(composite) => Ok(composite),
            _ => unreachable!(),
        }
    }

    pub fn find(store: &Annotations, schema: Option<&str>, name: &str) -> Result<Option<Self>> {
        match super::find(store, PgMetadataKind::Composite, schema, name)? {
            Some(PgMetadata::Composite(composite)) => Ok(Some(composite)),
            Some(_) => unreachable!(),
            None => Ok(None),
        }
    }

    /// Every composite declared on the store, sorted by creation order.
    pub fn list_ordered(store: &Annotations) -> Result<Vec<Self>> {
        let mut composites: Vec<Self> = super::list(store, PgMetadataKind::Composite)?
            .into_iter()
            .map(|record| match record {
                PgMetadata::Composite(composite) => composite,
                _ => unreachable!(),
            })
            .collect();
        super::sort_composites(&mut composites);
        Ok(composites)
    }

    pub(super) fn encode(&self) -> Result<String> {
        let mut segments = vec![self.ordering.to_string()];

        for field in &self.fields {
            codec::reject_delimiter("composite field name", &field.name, ',')?;
            codec::reject_delimiter("composite field name", &field.name, ';')?;
            codec::reject_delimiter("composite field store type", &field.store_type, ';')?;
            segments.push(format!("{},{}", field.name, field.store_type));
        }

        Ok(segments.join(";"))
    }

    pub(super) fn decode(
        schema: Option<String>,
        name: String,
        stored_key: &str,
        value: &str,
    ) -> Result<Self> {
        let mut segments = value.split(';');

        let ordering = segments.next().unwrap_or("");
        let ordering: u32 = ordering.parse().map_err(|_| {
            Error::annotation_parse(
                stored_key,
                format!("ordering `{ordering}` is not a non-negative integer"),
            )
        })?;

        let mut fields = vec![];
        for record in segments {
            let (field_name, store_type) = record.split_once(',').ok_or_else(|| {
                Error::annotation_parse(
                    stored_key,
                    format!("composite field record `{record}` is missing a store type"),
                )
            })?;
            fields.push(CompositeField::new(field_name, store_type));
        }

        Ok(Self {
            schema,
            name,
            ordering,
            fields,
        })
    }
}
