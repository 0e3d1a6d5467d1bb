use super::Type;
use crate::Annotations;

/// When the store produces a value for a column without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueGenerated {
    /// Generated when a row is first inserted.
    OnAdd,
    /// Generated on insert and recomputed on every update.
    OnAddOrUpdate,
    /// Never generated.
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The name of the owning table, carried for diagnostics.
    pub table: String,

    /// The database storage type of the column.
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// If and when the store generates this column's value.
    pub value_generated: Option<ValueGenerated>,

    /// Vendor annotations attached to the column.
    pub annotations: Annotations,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            ty,
            nullable: false,
            value_generated: None,
            annotations: Annotations::new(),
        }
    }
}
