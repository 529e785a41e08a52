//! Error types for codec operations

use std::str::Utf8Error;
use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid length: {0} exceeds remaining input")]
    InvalidLength(usize),
    #[error("length does not fit in memory: {0}")]
    LengthOverflow(u64),
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid utf-8 in text: {0}")]
    InvalidText(Utf8Error),
}
