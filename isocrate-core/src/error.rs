//! Error types for isocrate

use thiserror::Error;

/// Main error type for isocrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("Degenerate triangle ({i0}, {i1}, {i2}): vertex indices must be pairwise distinct")]
    DegenerateTriangle { i0: u32, i1: u32, i2: u32 },

    #[error("Mesh assembler already finalized")]
    MeshFinalized,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for isocrate operations
pub type Result<T> = std::result::Result<T, Error>;
