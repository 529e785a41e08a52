//! Blocking byte transports.
//!
//! A [`Transport`] moves raw bytes to and from some backing resource: a
//! local file ([`Local`]), a connected socket ([`Tcp`]), or an in-memory
//! channel pair ([`mocks`]) for tests. Transports know nothing about the
//! wire format; framing and encoding live in the stream layer.
//!
//! All calls block the calling thread until the transfer completes or
//! fails. Both [`Transport::write_all`] and [`Transport::read_exact`]
//! transfer the full requested count: a short read or write on the
//! underlying resource is retried, never silently truncated.

use std::io;
use thiserror::Error;

pub mod local;
pub mod mocks;
pub mod tcp;

pub use local::{Local, Mode};
pub use tcp::Tcp;

/// Errors that can occur when interacting with a transport.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport closed")]
    Closed,
    #[error("open failed: {0}: {1}")]
    OpenFailed(String, io::Error),
    #[error("connection failed: {0}")]
    ConnectionFailed(io::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A blocking byte-level transport.
///
/// A transport is owned by exactly one holder and is not safe for
/// concurrent use; callers needing concurrency use one transport per
/// logical connection.
pub trait Transport {
    /// Writes all of `buf`, blocking until every byte is accepted.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Error>;

    /// Fills all of `buf`, blocking until every byte arrives.
    ///
    /// Returns [`Error::Closed`] if the resource ends before `buf` is full.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error>;

    /// Closes the transport, releasing the resource. Idempotent.
    fn close(&mut self) -> Result<(), Error>;
}

// An end-of-input in the middle of a requested transfer means the resource
// is gone, not that the bytes are malformed.
pub(crate) fn map_eof(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::Closed
    } else {
        Error::Io(err)
    }
}
