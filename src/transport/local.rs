//! File-backed transport.

use super::{map_eof, Error, Transport};
use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
};
use tracing::debug;

/// The modes a file can be opened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Create the file if missing and truncate any existing contents.
    Write,
    /// Open an existing file for reading.
    Read,
}

/// A transport backed by a local file.
///
/// Reads and writes proceed sequentially from the current file position;
/// [`Local::seek`] repositions from the start of the file.
pub struct Local {
    file: Option<File>,
}

impl Local {
    /// Opens `path` in the given mode.
    ///
    /// Failures surface here, at construction, not on first use.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = match mode {
            Mode::Write => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path),
            Mode::Read => OpenOptions::new().read(true).open(path),
        }
        .map_err(|err| Error::OpenFailed(path.display().to_string(), err))?;
        debug!(path = %path.display(), ?mode, "opened file transport");
        Ok(Self { file: Some(file) })
    }

    /// Moves the file position to `pos` bytes from the start.
    pub fn seek(&mut self, pos: u64) -> Result<(), Error> {
        let file = self.file.as_mut().ok_or(Error::Closed)?;
        file.seek(SeekFrom::Start(pos))?;
        Ok(())
    }
}

impl Transport for Local {
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Error> {
        let file = self.file.as_mut().ok_or(Error::Closed)?;
        file.write_all(buf)?;
        Ok(())
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let file = self.file.as_mut().ok_or(Error::Closed)?;
        file.read_exact(buf).map_err(map_eof)
    }

    fn close(&mut self) -> Result<(), Error> {
        if let Some(file) = self.file.take() {
            drop(file);
            debug!("closed file transport");
        }
        Ok(())
    }
}
