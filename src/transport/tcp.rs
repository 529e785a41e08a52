//! Socket-backed transport.

use super::{map_eof, Error, Transport};
use std::{
    io::{Read, Write},
    net::{Shutdown, TcpStream, ToSocketAddrs},
};
use tracing::debug;

/// A transport backed by a connected TCP socket.
///
/// `std::io`'s `write_all`/`read_exact` loop until the full count is
/// transferred, so a short send or receive on the socket never truncates a
/// logical payload.
pub struct Tcp {
    socket: Option<TcpStream>,
}

impl Tcp {
    /// Connects to `addr`.
    ///
    /// Failures surface here, at construction, not on first use.
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self, Error> {
        let socket = TcpStream::connect(addr).map_err(Error::ConnectionFailed)?;
        if let Ok(peer) = socket.peer_addr() {
            debug!(%peer, "connected socket transport");
        }
        Ok(Self {
            socket: Some(socket),
        })
    }
}

/// Wraps an already-established connection, e.g. one returned by
/// `TcpListener::accept`.
impl From<TcpStream> for Tcp {
    fn from(socket: TcpStream) -> Self {
        Self {
            socket: Some(socket),
        }
    }
}

impl Transport for Tcp {
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Error> {
        let socket = self.socket.as_mut().ok_or(Error::Closed)?;
        socket.write_all(buf)?;
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let socket = self.socket.as_mut().ok_or(Error::Closed)?;
        socket.read_exact(buf).map_err(map_eof)
    }

    fn close(&mut self) -> Result<(), Error> {
        if let Some(socket) = self.socket.take() {
            // The peer may already have gone away; that still counts as
            // closed.
            match socket.shutdown(Shutdown::Both) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotConnected => {}
                Err(err) => return Err(Error::Io(err)),
            }
            debug!("closed socket transport");
        }
        Ok(())
    }
}

impl Drop for Tcp {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
