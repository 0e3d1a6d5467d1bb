use super::Column;
use crate::Annotations;

/// Whether a table is a real table or a view projection.
///
/// Views never receive generated values; the value-generation fallback is
/// suppressed for columns mapped to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableKind {
    Table,
    View,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The schema the table lives in, if not the default.
    pub schema: Option<String>,

    /// The name of the table in the database.
    pub name: String,

    pub kind: TableKind,

    pub columns: Vec<Column>,

    /// Vendor annotations attached to the table.
    pub annotations: Annotations,
}

impl Table {
    pub fn new(schema: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            kind: TableKind::Table,
            columns: vec![],
            annotations: Annotations::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }
}
