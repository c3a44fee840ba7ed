// galaxy-at-rs/galaxy-at/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serialport::SerialPort;

use crate::transport::traits::{LineTransport, PortConnector};
use crate::{Error, Result};

/// Opens the handset's ACM node through the `serialport` crate. Each
/// `open` yields an independent connection that closes on drop.
#[derive(Debug, Clone)]
pub struct SerialConnector {
    path: PathBuf,
    baud_rate: u32,
}

impl SerialConnector {
    pub fn new(path: impl Into<PathBuf>, baud_rate: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
        }
    }
}

impl PortConnector for SerialConnector {
    fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self, timeout: Duration) -> Result<Box<dyn LineTransport>> {
        let port = serialport::new(self.path.to_string_lossy(), self.baud_rate)
            .timeout(timeout)
            .open()?;
        log::trace!("opened {}", self.path.display());
        Ok(Box::new(SerialLink {
            reader: BufReader::new(port),
            pending: Vec::new(),
        }))
    }
}

struct SerialLink {
    reader: BufReader<Box<dyn SerialPort>>,
    /// Head of a line whose read timed out before the newline arrived.
    pending: Vec<u8>,
}

/// Read up to and including the next `\n`, appending to `pending` first.
///
/// `read_until` leaves whatever it consumed in the buffer when it fails, so
/// a timeout in the middle of a line keeps the head for the next call.
fn take_line<R: BufRead>(reader: &mut R, pending: &mut Vec<u8>) -> io::Result<Vec<u8>> {
    let n = reader.read_until(b'\n', pending)?;
    if n == 0 || pending.last() != Some(&b'\n') {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(std::mem::take(pending))
}

impl LineTransport for SerialLink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let port = self.reader.get_mut();
        port.write_all(line.as_bytes())?;
        port.flush()?;
        Ok(())
    }

    fn read_line(&mut self, timeout: Duration) -> Result<String> {
        self.reader.get_mut().set_timeout(timeout)?;
        let buf = take_line(&mut self.reader, &mut self.pending)?;
        String::from_utf8(buf).map_err(|e| {
            Error::malformed(format!(
                "non-UTF-8 line from {}: {}",
                self.reader.get_ref().name().unwrap_or_default(),
                e
            ))
        })
    }
}
