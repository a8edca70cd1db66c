//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid viewport: {width}x{height} (both dimensions must be positive)")]
    InvalidViewport { width: i32, height: i32 },

    #[error("unknown seed pattern: {0}")]
    UnknownPattern(String),
}
