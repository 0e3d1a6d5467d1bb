pub mod annotation;
pub use annotation::{AnnotationValue, Annotations};

mod error;
pub use error::Error;

pub mod schema;

/// A Result type alias that uses Crumpet's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
