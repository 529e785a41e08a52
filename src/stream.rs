//! Streams that push and pull encoded values over a transport.
//!
//! A [`Stream`] composes exactly one [`Transport`] with the codec: `push`
//! computes the encoded size, encodes into a [`Buffer`] of that size, and
//! writes a length prefix followed by the payload; `pull` mirrors it,
//! reading the prefix, filling a buffer of the stated size, and decoding a
//! value that must consume the payload exactly.
//!
//! The transport is owned exclusively and released once, when the stream is
//! dropped or explicitly closed. A codec failure aborts the current
//! operation but leaves the stream open; the buffer holding the bad payload
//! is discarded.

use crate::{
    length,
    transport::{self, Local, Mode, Tcp, Transport},
    Buffer, Decode, Encode, EncodeSize, Error as CodecError,
};
use std::{net::ToSocketAddrs, path::Path};
use thiserror::Error;
use tracing::trace;

/// Default cap on a single encoded message: 16 MiB.
///
/// The cap bounds the allocation a length prefix can demand before any
/// payload bytes arrive.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Errors that can occur when pushing or pulling values on a stream.
#[derive(Error, Debug)]
pub enum Error {
    #[error("send too large: {0} bytes")]
    SendTooLarge(usize),
    #[error("recv too large: {0} bytes")]
    RecvTooLarge(usize),
    #[error("transport: {0}")]
    Transport(#[from] transport::Error),
    #[error("unable to decode: {0}")]
    UnableToDecode(#[from] CodecError),
}

/// A readable/writable stream of encoded values over a transport `T`.
pub struct Stream<T: Transport> {
    transport: T,
    max_message_size: usize,
}

impl<T: Transport> Stream<T> {
    /// Wraps an open transport with the default message-size cap.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }

    /// Replaces the cap on a single encoded message, in bytes.
    ///
    /// Both sides of a connection should agree on the cap: a message one
    /// side pushes, the other must be willing to pull.
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    /// Encodes `value` and writes it as one length-prefixed message.
    ///
    /// Returns `&mut Self` so pushes chain:
    /// `stream.push(&a)?.push(&b)?;`
    pub fn push<V: Encode>(&mut self, value: &V) -> Result<&mut Self, Error> {
        let size = value.encode_size();
        if size > self.max_message_size {
            return Err(Error::SendTooLarge(size));
        }
        let buffer = value.encode();
        self.transport.write_all(&length::encode(size))?;
        self.transport.write_all(buffer.as_slice())?;
        trace!(bytes = size, "pushed value");
        Ok(self)
    }

    /// Reads one length-prefixed message and decodes a `V` from it.
    ///
    /// The payload must decode to exactly one value; trailing bytes within
    /// the message are an error, not ignored.
    pub fn pull<V: Decode>(&mut self) -> Result<V, Error> {
        let mut prefix = [0u8; length::SIZE];
        self.transport.read_exact(&mut prefix)?;
        let size = length::read(&mut &prefix[..])?;
        if size > self.max_message_size {
            return Err(Error::RecvTooLarge(size));
        }
        let mut buffer = Buffer::new(size);
        self.transport.read_exact(buffer.as_mut_slice())?;
        let value = V::decode_cfg(buffer, ())?;
        trace!(bytes = size, "pulled value");
        Ok(value)
    }

    /// Closes the underlying transport. Idempotent.
    pub fn close(&mut self) -> Result<(), transport::Error> {
        self.transport.close()
    }

    /// The underlying transport, e.g. to reposition a file.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl Stream<Local> {
    /// Opens a file-backed stream at `path` in the given mode.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self, transport::Error> {
        Ok(Self::new(Local::open(path, mode)?))
    }
}

impl Stream<Tcp> {
    /// Connects a socket-backed stream to `addr`.
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self, transport::Error> {
        Ok(Self::new(Tcp::connect(addr)?))
    }
}
