use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Error type returned by functions in this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("invalid grid size: {0}")]
    InvalidGridSize(#[from] ParseIntError),
}
