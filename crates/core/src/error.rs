use thiserror::Error;

/// Errors from aggregating phrase embeddings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    #[error("no vectors to average")]
    Empty,

    #[error("vector {index} has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize, index: usize },
}
