use crate::Annotations;

/// A primary or alternate key over one or more columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub name: String,

    /// Names of the columns the key spans, in key order.
    pub columns: Vec<String>,

    /// Vendor annotations attached to the key.
    pub annotations: Annotations,
}

impl Key {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            annotations: Annotations::new(),
        }
    }
}
