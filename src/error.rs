use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the fail-fast operations.
///
/// Most of the crate degrades softly (returning `None` or an unchanged attribute
/// list); these are the few places where a caller has to react.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("unsupported value for attribute `{name}`: {shape}")]
    UnsupportedValue { name: String, shape: &'static str },

    #[error("attribute `{0}` not found")]
    AttributeNotFound(String),

    #[error("invalid matcher pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot extract a string from a non-literal expression in `{0}`")]
    NonLiteralExpression(String),
}
