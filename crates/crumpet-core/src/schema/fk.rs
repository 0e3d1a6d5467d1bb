use crate::Annotations;

/// A foreign key constraint pointing at a principal table.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub name: String,

    /// Names of the referencing columns, in constraint order.
    pub columns: Vec<String>,

    /// The table the constraint points at.
    pub principal_table: String,

    /// Vendor annotations attached to the constraint.
    pub annotations: Annotations,
}

impl ForeignKey {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        principal_table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            principal_table: principal_table.into(),
            annotations: Annotations::new(),
        }
    }
}
