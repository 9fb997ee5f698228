use thiserror::Error;

/// Errors raised while decoding serialized conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionError {
    /// The numeric condition code is not part of the catalog.
    #[error("unknown condition code: {0}")]
    UnknownCode(u8),
    /// The operator symbol is not part of the catalog.
    #[error("unknown condition symbol: {0:?}")]
    UnknownSymbol(String),
}
