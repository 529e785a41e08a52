//! In-memory transports for testing.
//!
//! [`pair`] returns two connected [`Duplex`] endpoints backed by channels.
//! Reads genuinely block until the peer writes, so the endpoints behave
//! like a loopback socket and can be driven from separate threads, or from
//! one thread as long as every read is preceded by the matching write.

use super::{Error, Transport};
use std::{
    collections::VecDeque,
    sync::mpsc::{channel, Receiver, Sender},
};

/// One endpoint of an in-memory connection.
pub struct Duplex {
    sender: Option<Sender<Vec<u8>>>,
    receiver: Receiver<Vec<u8>>,
    pending: VecDeque<u8>,
}

/// Creates a connected pair of in-memory transports.
pub fn pair() -> (Duplex, Duplex) {
    let (left_tx, left_rx) = channel();
    let (right_tx, right_rx) = channel();
    (
        Duplex {
            sender: Some(left_tx),
            receiver: right_rx,
            pending: VecDeque::new(),
        },
        Duplex {
            sender: Some(right_tx),
            receiver: left_rx,
            pending: VecDeque::new(),
        },
    )
}

impl Transport for Duplex {
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Error> {
        let sender = self.sender.as_ref().ok_or(Error::Closed)?;
        sender.send(buf.to_vec()).map_err(|_| Error::Closed)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        while self.pending.len() < buf.len() {
            let chunk = self.receiver.recv().map_err(|_| Error::Closed)?;
            self.pending.extend(chunk);
        }
        let n = buf.len();
        for (slot, byte) in buf.iter_mut().zip(self.pending.drain(..n)) {
            *slot = byte;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        self.sender.take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let (mut left, mut right) = pair();
        left.write_all(&[1, 2, 3]).unwrap();
        left.write_all(&[4]).unwrap();

        // Reads may span write boundaries.
        let mut buf = [0u8; 2];
        right.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        right.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [3, 4]);
    }

    #[test]
    fn test_close_unblocks_peer() {
        let (mut left, mut right) = pair();
        left.write_all(&[1]).unwrap();
        left.close().unwrap();

        let mut buf = [0u8; 1];
        right.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1]);
        assert!(matches!(right.read_exact(&mut buf), Err(Error::Closed)));
    }

    #[test]
    fn test_write_after_close() {
        let (mut left, _right) = pair();
        left.close().unwrap();
        assert!(matches!(left.write_all(&[1]), Err(Error::Closed)));
    }

    #[test]
    fn test_cross_thread() {
        let (mut left, mut right) = pair();
        let echo = std::thread::spawn(move || {
            let mut buf = [0u8; 4];
            right.read_exact(&mut buf).unwrap();
            right.write_all(&buf).unwrap();
        });

        left.write_all(&[5, 6, 7, 8]).unwrap();
        let mut buf = [0u8; 4];
        left.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [5, 6, 7, 8]);
        echo.join().unwrap();
    }
}
