use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Matrix shapes are incompatible for the requested operation.
    ShapeMismatch(String),
    /// A label value does not fit in the configured number of classes.
    ClassOutOfRange(String),
    /// A batch with zero examples (or a zero reporting interval) was supplied.
    DegenerateBatch(String),
    InvalidConfig(String),
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch(msg) => write!(f, "shape mismatch: {msg}"),
            Error::ClassOutOfRange(msg) => write!(f, "class out of range: {msg}"),
            Error::DegenerateBatch(msg) => write!(f, "degenerate batch: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
