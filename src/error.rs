use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Decimal conversion syntax error")]
    ConversionSyntax,
    #[error("Decimal matcher takes at most 2 parameters, got {0}")]
    TooManyParams(usize),
}
