//! PostgreSQL-specific metadata for a relational model.
//!
//! The host model only carries flat string-keyed annotations per element.
//! This crate packs structured PostgreSQL object descriptions (extensions,
//! enum types, range types, composite types, collations, interleave
//! directives) into single annotation values, and resolves which of several
//! mutually exclusive column value-generation mechanisms is in effect.

pub mod generation;
pub use generation::{ConflictMode, Facet, LenientPreference, ValueGenerationStrategy};

pub mod interleave;
pub use interleave::InterleaveInParent;

pub mod key;

pub mod metadata;
pub use metadata::{
    CompositeField, PgCollation, PgComposite, PgEnum, PgExtension, PgMetadata, PgMetadataKind,
    PgRange,
};

pub use crumpet_core::{Error, Result};
