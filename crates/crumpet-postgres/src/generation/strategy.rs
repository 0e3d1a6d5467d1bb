use std::fmt;

/// How the server populates a column's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueGenerationStrategy {
    /// No server-side generation. Setting this explicitly overrides a
    /// model-wide default strategy the column would otherwise inherit.
    None,
    /// Client-side hi-lo allocation backed by a database sequence.
    SequenceHiLo,
    /// A `serial`/`bigserial`/`smallserial` column.
    Serial,
    /// `GENERATED ALWAYS AS IDENTITY`.
    IdentityAlways,
    /// `GENERATED BY DEFAULT AS IDENTITY`.
    IdentityByDefault,
    /// A plain `nextval` default drawn from a database sequence.
    Sequence,
}

impl ValueGenerationStrategy {
    /// Strategies restricted to the 16/32/64-bit signed integer family.
    pub fn requires_identity_type(self) -> bool {
        matches!(self, Self::Serial | Self::IdentityAlways | Self::IdentityByDefault)
    }

    /// Strategies that accept any integer type.
    pub fn requires_integer_type(self) -> bool {
        matches!(self, Self::SequenceHiLo | Self::Sequence)
    }

    /// Returns `true` if this strategy produces values on insert.
    pub fn generates_on_add(self) -> bool {
        self != Self::None
    }

    /// The spelling stored in the annotation value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::SequenceHiLo => "SequenceHiLo",
            Self::Serial => "Serial",
            Self::IdentityAlways => "IdentityAlways",
            Self::IdentityByDefault => "IdentityByDefault",
            Self::Sequence => "Sequence",
        }
    }

    /// The inverse of [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "None" => Some(Self::None),
            "SequenceHiLo" => Some(Self::SequenceHiLo),
            "Serial" => Some(Self::Serial),
            "IdentityAlways" => Some(Self::IdentityAlways),
            "IdentityByDefault" => Some(Self::IdentityByDefault),
            "Sequence" => Some(Self::Sequence),
            _ => None,
        }
    }
}

impl fmt::Display for ValueGenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
