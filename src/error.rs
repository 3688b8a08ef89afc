use thiserror::Error;

/// Errors reported by grid construction and checked indexing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("cell ({i}, {j}) is outside the {side}x{side} lattice")]
    IndexOutOfRange { i: i64, j: i64, side: usize },
}
