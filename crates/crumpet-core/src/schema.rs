//! Host model elements the metadata layer attaches annotations to.
//!
//! These are boundary types: the host model-building pipeline owns their
//! construction and lifecycle. The metadata layer only reads and writes
//! their annotation stores.

mod column;
pub use column::{Column, ValueGenerated};

mod fk;
pub use fk::ForeignKey;

mod key;
pub use key::Key;

mod model;
pub use model::Model;

mod operation;
pub use operation::CreateTable;

mod table;
pub use table::{Table, TableKind};

mod ty;
pub use ty::Type;
