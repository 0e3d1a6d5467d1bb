//! Structured metadata records packed into single annotation values.
//!
//! Each record kind has its own grammar (see the variant modules); the
//! registry operations here are grammar-agnostic and work over any model
//! element's annotation store.

pub(crate) mod codec;

mod collation;
pub use collation::PgCollation;

mod composite;
pub use composite::{CompositeField, PgComposite};

mod enum_type;
pub use enum_type::PgEnum;

mod extension;
pub use extension::PgExtension;

mod range;
pub use range::PgRange;

use crate::key;
use crumpet_core::{AnnotationValue, Annotations, Error, Result};

/// The kinds of metadata object a model can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgMetadataKind {
    Extension,
    Enum,
    Range,
    Composite,
    Collation,
}

impl PgMetadataKind {
    /// The literal annotation-key prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Extension => "PgExtension:",
            Self::Enum => "PgEnum:",
            Self::Range => "PgRange:",
            Self::Composite => "PgComposite:",
            Self::Collation => "CollationDef:",
        }
    }
}

/// A decoded metadata record of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PgMetadata {
    Extension(PgExtension),
    Enum(PgEnum),
    Range(PgRange),
    Composite(PgComposite),
    Collation(PgCollation),
}

impl PgMetadata {
    pub fn kind(&self) -> PgMetadataKind {
        match self {
            Self::Extension(_) => PgMetadataKind::Extension,
            Self::Enum(_) => PgMetadataKind::Enum,
            Self::Range(_) => PgMetadataKind::Range,
            Self::Composite(_) => PgMetadataKind::Composite,
            Self::Collation(_) => PgMetadataKind::Collation,
        }
    }

    pub fn schema(&self) -> Option<&str> {
        match self {
            Self::Extension(ext) => ext.schema.as_deref(),
            Self::Enum(en) => en.schema.as_deref(),
            Self::Range(range) => range.schema.as_deref(),
            Self::Composite(composite) => composite.schema.as_deref(),
            Self::Collation(collation) => collation.schema.as_deref(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Extension(ext) => &ext.name,
            Self::Enum(en) => &en.name,
            Self::Range(range) => &range.name,
            Self::Composite(composite) => &composite.name,
            Self::Collation(collation) => &collation.name,
        }
    }

    /// The annotation key this record is stored under.
    pub fn key(&self) -> String {
        key::build(self.kind().prefix(), self.schema(), self.name())
    }

    /// Packs this record into its single annotation value.
    ///
    /// Fails if a field contains its grammar's reserved delimiter; the
    /// simple grammars define no escaping, so such values are refused here
    /// rather than corrupted on read.
    pub fn encode(&self) -> Result<String> {
        match self {
            Self::Extension(ext) => ext.encode(),
            Self::Enum(en) => en.encode(),
            Self::Range(range) => range.encode(),
            Self::Composite(composite) => composite.encode(),
            Self::Collation(collation) => collation.encode(),
        }
    }

    fn decode(
        kind: PgMetadataKind,
        schema: Option<String>,
        name: String,
        stored_key: &str,
        value: &str,
    ) -> Result<Self> {
        match kind {
            PgMetadataKind::Extension => {
                PgExtension::decode(stored_key, value).map(Self::Extension)
            }
            PgMetadataKind::Enum => Ok(Self::Enum(PgEnum::decode(schema, name, value))),
            PgMetadataKind::Range => {
                PgRange::decode(schema, name, stored_key, value).map(Self::Range)
            }
            PgMetadataKind::Composite => {
                PgComposite::decode(schema, name, stored_key, value).map(Self::Composite)
            }
            PgMetadataKind::Collation => {
                PgCollation::decode(schema, name, stored_key, value).map(Self::Collation)
            }
        }
    }
}

/// Looks up a metadata record by identity, returning `None` if absent.
pub fn find(
    store: &Annotations,
    kind: PgMetadataKind,
    schema: Option<&str>,
    name: &str,
) -> Result<Option<PgMetadata>> {
    let stored_key = key::build(kind.prefix(), schema, name);
    let Some(value) = store.get(&stored_key) else {
        return Ok(None);
    };
    let value = expect_str(&stored_key, value)?;
    let record = PgMetadata::decode(
        kind,
        schema.map(str::to_string),
        name.to_string(),
        &stored_key,
        value,
    )?;
    Ok(Some(record))
}

/// Adds `record` to the store unless a record with the same identity
/// `(kind, schema, name)` already exists.
///
/// Registration is idempotent-first-writer-wins: when the identity is
/// already present, the existing record is returned unchanged and the
/// argument's attributes are ignored. Never overwrites.
///
/// A composite record's `ordering` is assigned at insert time from the
/// number of composite records already in the store, so interdependent
/// types can be emitted in creation order.
pub fn get_or_add(store: &mut Annotations, mut record: PgMetadata) -> Result<PgMetadata> {
    if let Some(existing) = find(store, record.kind(), record.schema(), record.name())? {
        return Ok(existing);
    }

    if let PgMetadata::Composite(composite) = &mut record {
        composite.ordering = store
            .iter_prefixed(PgMetadataKind::Composite.prefix())
            .count() as u32;
    }

    store.set(record.key(), record.encode()?);
    Ok(record)
}

/// Decodes every record of `kind` in the store.
///
/// Order is the store's native enumeration order, which is not guaranteed
/// stable; callers needing a deterministic order (composite emission) must
/// sort explicitly via [`sort_composites`].
pub fn list(store: &Annotations, kind: PgMetadataKind) -> Result<Vec<PgMetadata>> {
    let mut records = vec![];

    for (stored_key, value) in store.iter_prefixed(kind.prefix()) {
        let (schema, name) = key::parse(kind.prefix(), stored_key)?;
        let value = expect_str(stored_key, value)?;
        records.push(PgMetadata::decode(kind, schema, name, stored_key, value)?);
    }

    Ok(records)
}

/// Writes `record` under its key, replacing the stored value.
///
/// This is the write half of a read-modify-write: the stored value is
/// opaque, so a single-field mutation re-encodes the full record.
pub fn save(store: &mut Annotations, record: &PgMetadata) -> Result<()> {
    store.set(record.key(), record.encode()?);
    Ok(())
}

/// Sorts composite records by their recorded creation order, so dependent
/// types come after the types they reference.
pub fn sort_composites(composites: &mut [PgComposite]) {
    composites.sort_by_key(|composite| composite.ordering);
}

fn expect_str<'a>(stored_key: &str, value: &'a AnnotationValue) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::annotation_parse(stored_key, "expected a string value"))
}
