/// Storage types from the target database's point of view.
///
/// Integer widths are byte counts: `Integer(2)`, `Integer(4)` and
/// `Integer(8)` are the 16/32/64-bit signed family.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// A floating-point number of `n` bytes
    Real(u8),

    /// Arbitrary-precision decimal
    Numeric,

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// Unconstrained binary type
    Bytea,

    /// An instant in time
    Timestamp,

    /// User-specified unrecognized type
    Custom(String),
}

impl Type {
    /// Returns `true` if this is any signed integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns `true` if this type can back an identity or serial column.
    ///
    /// PostgreSQL restricts identity and serial columns to the 16/32/64-bit
    /// signed integer family.
    pub fn is_identity_compatible(&self) -> bool {
        matches!(self, Self::Integer(2 | 4 | 8))
    }

    /// The PostgreSQL spelling of this type, as it appears in DDL.
    pub fn postgres_name(&self) -> String {
        match self {
            Self::Boolean => "boolean".to_string(),
            Self::Integer(2) => "smallint".to_string(),
            Self::Integer(4) => "integer".to_string(),
            Self::Integer(8) => "bigint".to_string(),
            Self::Integer(n) => format!("int{n}"),
            Self::Real(4) => "real".to_string(),
            Self::Real(_) => "double precision".to_string(),
            Self::Numeric => "numeric".to_string(),
            Self::Text => "text".to_string(),
            Self::VarChar(n) => format!("varchar({n})"),
            Self::Uuid => "uuid".to_string(),
            Self::Bytea => "bytea".to_string(),
            Self::Timestamp => "timestamp with time zone".to_string(),
            Self::Custom(name) => name.clone(),
        }
    }
}
