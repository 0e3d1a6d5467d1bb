use crate::Annotations;

/// A table-creation operation in a migration plan.
///
/// Vendor-specific placement directives (e.g. interleave-in-parent) attach
/// to the operation rather than to the table itself, because they only
/// matter at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub schema: Option<String>,

    pub name: String,

    /// Vendor annotations attached to the operation.
    pub annotations: Annotations,
}

impl CreateTable {
    pub fn new(schema: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.into(),
            annotations: Annotations::new(),
        }
    }
}
