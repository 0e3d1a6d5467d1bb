use super::Table;
use crate::Annotations;

/// The root model element.
///
/// The model's own annotation store holds model-wide metadata: declared
/// extensions, enum/range/composite types, collations, and the model-wide
/// default value-generation strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub tables: Vec<Table>,

    /// Vendor annotations attached to the model as a whole.
    pub annotations: Annotations,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|table| table.name == name)
    }
}
