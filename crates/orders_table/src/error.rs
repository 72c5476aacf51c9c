use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sort field '{0}'")]
    UnknownField(String),
    #[error("unknown sort direction '{0}'")]
    UnknownDirection(String),
    #[error("page size must be one of 5, 10 or 25 (got '{0}')")]
    InvalidPageSize(String),
}
